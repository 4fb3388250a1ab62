// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod observation;

use anyhow::Error;
use std::collections::BTreeMap;

pub use entity::ToTable;
pub use observation::{validate, Observation};

pub type Result<T> = std::result::Result<T, Error>;
pub type Ratings<I, Value = f64> = BTreeMap<I, Value>;
pub type MapedRatings<K, I, Value = f64> = BTreeMap<K, Ratings<I, Value>>;

pub trait Controller {
    type UserId;
    type ItemId;

    /// Name of this source, used in prompts and logs
    fn name(&self) -> &str;

    /// Get every observation known by this source, at most one per (user, item) pair
    fn observations(&self) -> Result<Vec<Observation<Self::UserId, Self::ItemId>>>;
}
