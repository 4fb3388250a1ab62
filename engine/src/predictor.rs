//! Item based prediction.
//!
//! The score of an item the user hasn't rated is the average of the user's
//! ratings, weighted by how similar each rated item is to it. Only strictly
//! positive similarities take part in the average; an item without any such
//! support has no prediction at all and is never recommended.

use crate::{
    error::ErrorKind, grid::Grid, recommendation::Recommendation,
    similarity_matrix::SimilarityMatrix, top_n::TopN,
};
use controller::Ratings;
use std::fmt::Display;

/// The `top_n` best scored items `user` hasn't rated yet, best first.
///
/// Equal scores are ordered by ascending item id. Returns fewer than `top_n`
/// recommendations when there aren't enough candidates, an empty list if the
/// user already rated everything.
pub fn recommend<UserId, ItemId>(
    user: &UserId,
    grid: &Grid<UserId, ItemId>,
    similarity: &SimilarityMatrix<ItemId>,
    top_n: usize,
) -> Result<Vec<Recommendation<ItemId>>, ErrorKind>
where
    UserId: Ord + Display,
    ItemId: Ord + Clone,
{
    if top_n == 0 {
        return Err(ErrorKind::InvalidTopN);
    }

    let rated = grid
        .row(user)
        .ok_or_else(|| ErrorKind::UnknownUser(user.to_string()))?;

    let mut top = TopN::new(top_n);
    let mut candidates = 0;

    for item in grid.items().filter(|item| !rated.contains_key(*item)) {
        if let Some(score) = weighted_score(item, rated, similarity) {
            top.push(Recommendation::new(item.clone(), score));
            candidates += 1;
        }
    }

    log::debug!(
        "user({}): {} rated, {} candidates, keeping {}",
        user,
        rated.len(),
        candidates,
        top.len()
    );

    Ok(top.into_vec())
}

/// Predicted score of `user` for a single `item`.
///
/// `Ok(None)` means no rated item has a positive similarity with `item`.
pub fn predict<UserId, ItemId>(
    user: &UserId,
    item: &ItemId,
    grid: &Grid<UserId, ItemId>,
    similarity: &SimilarityMatrix<ItemId>,
) -> Result<Option<f64>, ErrorKind>
where
    UserId: Ord + Display,
    ItemId: Ord + Display,
{
    let rated = grid
        .row(user)
        .ok_or_else(|| ErrorKind::UnknownUser(user.to_string()))?;

    if !grid.contains_item(item) {
        return Err(ErrorKind::UnknownItem(item.to_string()));
    }

    Ok(weighted_score(item, rated, similarity))
}

fn weighted_score<ItemId>(
    target: &ItemId,
    rated: &Ratings<ItemId>,
    similarity: &SimilarityMatrix<ItemId>,
) -> Option<f64>
where
    ItemId: Ord,
{
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (item, rating) in rated {
        let sim = similarity.get(target, item).unwrap_or(0.0);
        if sim > 0.0 {
            numerator += sim * rating;
            denominator += sim;
        }
    }

    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}
