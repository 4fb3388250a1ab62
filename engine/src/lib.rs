// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommend.
//
// recommend is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommend is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommend.  If not, see <http://www.gnu.org/licenses/>.

pub mod distances;
pub mod error;
pub mod grid;
pub mod predictor;
pub mod recommendation;
pub mod similarity_matrix;
pub mod top_n;
pub mod utils;

pub use crate::{
    grid::{build_grid, try_build_grid, Grid},
    predictor::{predict, recommend},
    recommendation::Recommendation,
    similarity_matrix::{compute_similarity, SimilarityMatrix},
};

use anyhow::Error;
use config::Config;
use controller::{Controller, Observation};
use error::ErrorKind;
use std::fmt::Display;

/// Grid and similarity matrix built once out of a data source.
///
/// Nothing changes after construction, so an engine can be shared between
/// threads by reference. To pick up new ratings build another one and swap it.
#[derive(Debug, Clone)]
pub struct Engine<UserId, ItemId>
where
    UserId: Ord,
    ItemId: Ord,
{
    grid: Grid<UserId, ItemId>,
    similarity: SimilarityMatrix<ItemId>,
    default_top_n: usize,
}

impl<UserId, ItemId> Engine<UserId, ItemId>
where
    UserId: Ord + Clone + Display,
    ItemId: Ord + Clone + Display,
{
    pub fn with_controller<C>(controller: &C, config: &Config) -> Result<Self, Error>
    where
        C: Controller<UserId = UserId, ItemId = ItemId>,
    {
        let observations = controller.observations()?;
        log::info!(
            "Loaded {} observations from {}",
            observations.len(),
            controller.name()
        );

        Self::from_observations(observations, config)
    }

    pub fn from_observations(
        observations: Vec<Observation<UserId, ItemId>>,
        config: &Config,
    ) -> Result<Self, Error> {
        let grid = if config.engine.validate_input {
            try_build_grid(observations)?
        } else {
            build_grid(observations)
        };

        let similarity = compute_similarity(&grid);
        log::info!(
            "Engine ready: {} users, {} items, {} ratings",
            grid.n_users(),
            grid.n_items(),
            grid.len()
        );

        Ok(Self {
            grid,
            similarity,
            default_top_n: config.engine.top_n,
        })
    }

    pub fn grid(&self) -> &Grid<UserId, ItemId> {
        &self.grid
    }

    pub fn similarity_matrix(&self) -> &SimilarityMatrix<ItemId> {
        &self.similarity
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    pub fn recommend(&self, user: &UserId, top_n: usize) -> Result<Vec<Recommendation<ItemId>>, Error> {
        recommend(user, &self.grid, &self.similarity, top_n).map_err(Into::into)
    }

    /// Same as `recommend` with the configured amount of recommendations
    pub fn recommend_default(&self, user: &UserId) -> Result<Vec<Recommendation<ItemId>>, Error> {
        self.recommend(user, self.default_top_n)
    }

    pub fn predict(&self, user: &UserId, item: &ItemId) -> Result<Option<f64>, Error> {
        predict(user, item, &self.grid, &self.similarity).map_err(Into::into)
    }

    pub fn similarity(&self, item_a: &ItemId, item_b: &ItemId) -> Result<f64, Error> {
        match self.similarity.get(item_a, item_b) {
            Some(similarity) => Ok(similarity),
            None => {
                let missing = if self.similarity.contains(item_a) {
                    item_b
                } else {
                    item_a
                };

                Err(ErrorKind::UnknownItem(missing.to_string()).into())
            }
        }
    }

    pub fn similar_items(&self, item: &ItemId, k: usize) -> Result<Vec<(ItemId, f64)>, Error> {
        self.similarity
            .most_similar(item, k)
            .ok_or_else(|| ErrorKind::UnknownItem(item.to_string()).into())
    }
}
