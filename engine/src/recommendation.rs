use std::cmp::Ordering;

/// An item together with its predicted score.
///
/// Ordering ranks recommendations: a greater one has a higher score, or the
/// same score and a smaller item id.
#[derive(Debug, Clone)]
pub struct Recommendation<ItemId> {
    pub item: ItemId,
    pub score: f64,
}

impl<ItemId> Recommendation<ItemId> {
    pub fn new(item: ItemId, score: f64) -> Self {
        Self { item, score }
    }

    pub fn into_tuple(self) -> (ItemId, f64) {
        (self.item, self.score)
    }
}

impl<ItemId: Ord> PartialEq for Recommendation<ItemId> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<ItemId: Ord> Eq for Recommendation<ItemId> {}

impl<ItemId: Ord> PartialOrd for Recommendation<ItemId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<ItemId: Ord> Ord for Recommendation<ItemId> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.item.cmp(&self.item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_ranks_first() {
        let a = Recommendation::new("item_A", 4.5);
        let b = Recommendation::new("item_B", 3.0);

        assert!(a > b);
    }

    #[test]
    fn ties_prefer_smaller_ids() {
        let a = Recommendation::new("item_A", 4.0);
        let c = Recommendation::new("item_C", 4.0);

        assert!(a > c);
        assert_ne!(a, c);
        assert_eq!(a, Recommendation::new("item_A", 4.0));
    }
}
