//! Interaction table: who rated what, and how much.
//!
//! Ratings are kept sparse, a missing cell means "not rated". Every item seen
//! for any user is a column of the grid for all users, `dense_row` reads
//! missing cells as zero when a rectangular view is needed.

use crate::error::ErrorKind;
use controller::{MapedRatings, Observation, Ratings};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<UserId, ItemId>
where
    UserId: Ord,
    ItemId: Ord,
{
    // user => item => rating
    rows: MapedRatings<UserId, ItemId>,
    // item => user => rating
    columns: MapedRatings<ItemId, UserId>,
}

impl<UserId, ItemId> Default for Grid<UserId, ItemId>
where
    UserId: Ord,
    ItemId: Ord,
{
    fn default() -> Self {
        Self {
            rows: Default::default(),
            columns: Default::default(),
        }
    }
}

/// Build the grid out of raw observations.
///
/// If a (user, item) pair shows up more than once the last observation wins.
/// Observations without a finite positive rating still register their user
/// and item, but never count as a rating.
pub fn build_grid<UserId, ItemId, It>(observations: It) -> Grid<UserId, ItemId>
where
    UserId: Ord + Clone + Display,
    ItemId: Ord + Clone + Display,
    It: IntoIterator<Item = Observation<UserId, ItemId>>,
{
    let mut grid = Grid::default();
    let mut dropped = 0;

    for obs in observations {
        let valid = obs.has_valid_rating();
        if !valid {
            log::warn!(
                "Ignoring rating {} for user({}) on item({})",
                obs.rating,
                obs.user,
                obs.item
            );
            dropped += 1;
        }

        let row = grid.rows.entry(obs.user.clone()).or_insert_with(Ratings::new);
        let column = grid.columns.entry(obs.item.clone()).or_insert_with(Ratings::new);

        if valid {
            row.insert(obs.item, obs.rating);
            column.insert(obs.user, obs.rating);
        }
    }

    log::debug!(
        "Built grid with {} users, {} items and {} ratings ({} ignored)",
        grid.n_users(),
        grid.n_items(),
        grid.len(),
        dropped
    );

    grid
}

/// Same as [`build_grid`] but rejects duplicated pairs and non positive
/// ratings instead of tolerating them.
pub fn try_build_grid<UserId, ItemId>(
    observations: Vec<Observation<UserId, ItemId>>,
) -> Result<Grid<UserId, ItemId>, ErrorKind>
where
    UserId: Ord + Clone + Display,
    ItemId: Ord + Clone + Display,
{
    controller::validate(&observations)?;
    Ok(build_grid(observations))
}

impl<UserId, ItemId> Grid<UserId, ItemId>
where
    UserId: Ord,
    ItemId: Ord,
{
    /// Users in ascending order
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.rows.keys()
    }

    /// Items in ascending order
    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        self.columns.keys()
    }

    pub fn n_users(&self) -> usize {
        self.rows.len()
    }

    pub fn n_items(&self) -> usize {
        self.columns.len()
    }

    /// Number of actual ratings, i.e. non empty cells
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_user(&self, user: &UserId) -> bool {
        self.rows.contains_key(user)
    }

    pub fn contains_item(&self, item: &ItemId) -> bool {
        self.columns.contains_key(item)
    }

    pub fn rating(&self, user: &UserId, item: &ItemId) -> Option<f64> {
        self.rows.get(user)?.get(item).copied()
    }

    /// Items rated by `user`
    pub fn row(&self, user: &UserId) -> Option<&Ratings<ItemId>> {
        self.rows.get(user)
    }

    /// Users that rated `item`
    pub fn column(&self, item: &ItemId) -> Option<&Ratings<UserId>> {
        self.columns.get(item)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&ItemId, &Ratings<UserId>)> {
        self.columns.iter()
    }

    /// The full row of `user` over every item, unrated ones as zero
    pub fn dense_row(&self, user: &UserId) -> Option<Vec<(&ItemId, f64)>> {
        let row = self.rows.get(user)?;

        let dense = self
            .columns
            .keys()
            .map(|item| (item, row.get(item).copied().unwrap_or(0.0)))
            .collect();

        Some(dense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;
    use assert_approx_eq::*;

    fn observations() -> Vec<Observation<u32, &'static str>> {
        vec![
            (1, "item_A", 5.).into(),
            (1, "item_B", 4.).into(),
            (2, "item_A", 4.).into(),
            (2, "item_C", 5.).into(),
        ]
    }

    #[test]
    fn grid_is_rectangular() {
        let grid = build_grid(observations());

        assert_eq!(grid.users().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            grid.items().copied().collect::<Vec<_>>(),
            vec!["item_A", "item_B", "item_C"]
        );
        assert_eq!(grid.len(), 4);

        for user in grid.users() {
            let row = grid.dense_row(user).unwrap();
            assert_eq!(row.len(), grid.n_items());
        }

        assert_eq!(
            grid.dense_row(&2),
            Some(vec![(&"item_A", 4.), (&"item_B", 0.), (&"item_C", 5.)])
        );
    }

    #[test]
    fn absent_cells_are_not_ratings() {
        let grid = build_grid(observations());

        assert_eq!(grid.rating(&1, &"item_C"), None);
        assert_eq!(grid.rating(&3, &"item_A"), None);
        assert_approx_eq!(grid.rating(&1, &"item_B").unwrap(), 4.);
    }

    #[test]
    fn rows_and_columns_agree() {
        let grid = build_grid(observations());

        for (item, column) in grid.columns() {
            for (user, rating) in column {
                assert_eq!(grid.rating(user, item), Some(*rating));
            }
        }

        let column = grid.column(&"item_A").unwrap();
        assert_eq!(column.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn empty_observations_empty_grid() {
        let grid = build_grid(Vec::<Observation<u32, u32>>::new());

        assert!(grid.is_empty());
        assert_eq!(grid.n_users(), 0);
        assert_eq!(grid.n_items(), 0);
        assert_eq!(grid.len(), 0);
    }

    #[test]
    fn last_write_wins() {
        let grid = build_grid(vec![
            Observation::new(1, 10, 2.),
            Observation::new(1, 10, 4.),
        ]);

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.rating(&1, &10), Some(4.));
    }

    #[test]
    fn non_positive_ratings_are_ignored() {
        let grid = build_grid(vec![
            Observation::new(1, 10, 3.),
            Observation::new(2, 20, 0.),
            Observation::new(2, 10, -1.),
        ]);

        // user 2 and item 20 are still part of the grid, just unrated
        assert!(grid.contains_user(&2));
        assert!(grid.contains_item(&20));
        assert_eq!(grid.rating(&2, &20), None);
        assert_eq!(grid.rating(&2, &10), None);
        assert!(grid.row(&2).unwrap().is_empty());
        assert!(grid.column(&20).unwrap().is_empty());
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn checked_build_rejects_duplicates() {
        let result = try_build_grid(vec![
            Observation::new(1, 10, 2.),
            Observation::new(1, 10, 4.),
        ]);

        assert!(matches!(result, Err(ErrorKind::MalformedInput(_))));
    }

    #[test]
    fn checked_build_accepts_valid_input() -> Result<(), Error> {
        let grid = try_build_grid(observations())?;
        assert_eq!(grid, build_grid(observations()));

        Ok(())
    }
}
