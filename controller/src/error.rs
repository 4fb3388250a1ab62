// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, PartialEq, DError)]
pub enum ErrorKind {
    #[error("Invalid rating {rating} for user({user}) on item({item}), must be positive")]
    InvalidRating {
        user: String,
        item: String,
        rating: f64,
    },

    #[error("Duplicated rating for user({0}) on item({1})")]
    DuplicateObservation(String, String),

    #[error("Malformed record at line {0}: {1}")]
    MalformedRecord(u64, String),
}
