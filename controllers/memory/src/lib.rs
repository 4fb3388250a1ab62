// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use controller::{Controller, Observation};

/// A data source backed by observations already in memory.
#[derive(Debug, Clone)]
pub struct MemoryController<UserId, ItemId> {
    name: String,
    observations: Vec<Observation<UserId, ItemId>>,
}

impl<UserId, ItemId> MemoryController<UserId, ItemId> {
    pub fn new(name: &str, observations: Vec<Observation<UserId, ItemId>>) -> Self {
        Self {
            name: name.into(),
            observations,
        }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl MemoryController<u32, String> {
    /// Five users rating five items, handy to try things out
    pub fn sample() -> Self {
        let raw = [
            (1, "item_A", 5.),
            (1, "item_B", 4.),
            (1, "item_D", 3.),
            (2, "item_A", 4.),
            (2, "item_C", 5.),
            (3, "item_B", 5.),
            (3, "item_C", 4.),
            (3, "item_D", 2.),
            (4, "item_A", 3.),
            (4, "item_C", 5.),
            (4, "item_D", 4.),
            (5, "item_B", 4.),
            (5, "item_E", 5.),
        ];

        let observations = raw
            .iter()
            .map(|&(user, item, rating)| Observation::new(user, item.to_string(), rating))
            .collect();

        Self::new("sample", observations)
    }
}

impl<UserId, ItemId> Controller for MemoryController<UserId, ItemId>
where
    UserId: Clone,
    ItemId: Clone,
{
    type UserId = UserId;
    type ItemId = ItemId;

    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> Result<Vec<Observation<UserId, ItemId>>, Error> {
        Ok(self.observations.clone())
    }
}
