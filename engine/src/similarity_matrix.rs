use crate::{
    distances::{cosine_with_norms, norm},
    grid::Grid,
    recommendation::Recommendation,
    top_n::TopN,
};
use std::collections::BTreeMap;

/// Item by item cosine similarity, stored densely in row major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix<ItemId>
where
    ItemId: Ord,
{
    items: Vec<ItemId>,
    index: BTreeMap<ItemId, usize>,
    values: Vec<f64>,
}

/// Compute the similarity between every pair of item columns of `grid`.
///
/// Only the upper triangle is calculated, the lower one is a mirror of it so
/// `sim(a, b)` and `sim(b, a)` are the very same number. The diagonal is
/// exactly one for rated items and zero for items nobody rated.
pub fn compute_similarity<UserId, ItemId>(grid: &Grid<UserId, ItemId>) -> SimilarityMatrix<ItemId>
where
    UserId: Ord,
    ItemId: Ord + Clone,
{
    let (items, columns): (Vec<_>, Vec<_>) = grid.columns().unzip();
    let norms: Vec<f64> = columns.iter().map(|column| norm(*column)).collect();

    let n = items.len();
    let mut values = vec![0.0; n * n];

    for i in 0..n {
        if norms[i] > 0.0 {
            values[i * n + i] = 1.0;
        }

        for j in (i + 1)..n {
            let similarity = cosine_with_norms(columns[i], columns[j], norms[i], norms[j]);
            values[i * n + j] = similarity;
            values[j * n + i] = similarity;
        }
    }

    let items: Vec<ItemId> = items.into_iter().cloned().collect();
    let index = items
        .iter()
        .enumerate()
        .map(|(pos, item)| (item.clone(), pos))
        .collect();

    log::debug!("Computed {}x{} similarity matrix", n, n);

    SimilarityMatrix {
        items,
        index,
        values,
    }
}

impl<ItemId> SimilarityMatrix<ItemId>
where
    ItemId: Ord,
{
    /// Items in ascending order, same order as rows and columns
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.index.contains_key(item)
    }

    /// Similarity between `a` and `b`, `None` if any of them is unknown
    pub fn get(&self, a: &ItemId, b: &ItemId) -> Option<f64> {
        let i = *self.index.get(a)?;
        let j = *self.index.get(b)?;

        Some(self.values[i * self.len() + j])
    }

    /// Similarities of `item` against every item, itself included
    pub fn row(&self, item: &ItemId) -> Option<impl Iterator<Item = (&ItemId, f64)>> {
        let n = self.len();
        let i = *self.index.get(item)?;
        let row = &self.values[i * n..(i + 1) * n];

        Some(self.items.iter().zip(row.iter().copied()))
    }

    /// The `k` items most similar to `item`, only positive similarities count
    /// and ties go to the smaller id.
    pub fn most_similar(&self, item: &ItemId, k: usize) -> Option<Vec<(ItemId, f64)>>
    where
        ItemId: Clone,
    {
        let mut top = TopN::new(k);

        for (other, similarity) in self.row(item)? {
            if other != item && similarity > 0.0 {
                top.push(Recommendation::new(other.clone(), similarity));
            }
        }

        let similar = top
            .into_vec()
            .into_iter()
            .map(Recommendation::into_tuple)
            .collect();

        Some(similar)
    }
}
