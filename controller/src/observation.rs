// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::error::ErrorKind;
use std::{collections::BTreeSet, fmt::Display};

/// A single (user, item, rating) fact.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<UserId, ItemId> {
    pub user: UserId,
    pub item: ItemId,
    pub rating: f64,
}

impl<UserId, ItemId> Observation<UserId, ItemId> {
    pub fn new(user: UserId, item: ItemId, rating: f64) -> Self {
        Self { user, item, rating }
    }

    /// Only finite, strictly positive scores count as ratings
    pub fn has_valid_rating(&self) -> bool {
        self.rating.is_finite() && self.rating > 0.0
    }
}

impl<UserId, ItemId> From<(UserId, ItemId, f64)> for Observation<UserId, ItemId> {
    fn from((user, item, rating): (UserId, ItemId, f64)) -> Self {
        Self::new(user, item, rating)
    }
}

/// Check the preconditions the engine relies on: one observation per pair and
/// positive ratings. Fails on the first offending observation.
pub fn validate<UserId, ItemId>(observations: &[Observation<UserId, ItemId>]) -> Result<(), ErrorKind>
where
    UserId: Ord + Display,
    ItemId: Ord + Display,
{
    let mut seen = BTreeSet::new();

    for obs in observations {
        if !obs.has_valid_rating() {
            return Err(ErrorKind::InvalidRating {
                user: obs.user.to_string(),
                item: obs.item.to_string(),
                rating: obs.rating,
            });
        }

        if !seen.insert((&obs.user, &obs.item)) {
            return Err(ErrorKind::DuplicateObservation(
                obs.user.to_string(),
                obs.item.to_string(),
            ));
        }
    }

    Ok(())
}
