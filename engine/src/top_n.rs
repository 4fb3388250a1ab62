use std::{cmp::Reverse, collections::BinaryHeap};

type MinHeap<T> = BinaryHeap<Reverse<T>>;

/// Keeps the `n` greatest values pushed into it.
///
/// The worst kept value sits at the top of a min heap, so each push is
/// O(log n) and memory never grows past `n`.
#[derive(Debug, Clone)]
pub struct TopN<T: Ord> {
    n: usize,
    min_heap: MinHeap<T>,
}

impl<T: Ord> TopN<T> {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            min_heap: BinaryHeap::with_capacity(n),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.n == 0 {
            return;
        }

        if self.min_heap.len() < self.n {
            self.min_heap.push(Reverse(value));
            return;
        }

        let better = match self.min_heap.peek() {
            Some(Reverse(minimum)) => value > *minimum,
            None => true,
        };

        if better {
            self.min_heap.pop();
            self.min_heap.push(Reverse(value));
        }
    }

    pub fn len(&self) -> usize {
        self.min_heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min_heap.is_empty()
    }

    /// Greatest first
    pub fn into_vec(self) -> Vec<T> {
        self.min_heap
            .into_sorted_vec()
            .into_iter()
            .map(|r| r.0)
            .collect()
    }
}

impl<T: Ord> Extend<T> for TopN<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    #[test]
    fn keeps_greatest_values() {
        let mut top = TopN::new(3);
        top.extend(vec![5, 1, 9, 3, 7, 2]);

        assert_eq!(top.len(), 3);
        assert_eq!(top.into_vec(), vec![9, 7, 5]);
    }

    #[test]
    fn fewer_values_than_n() {
        let mut top = TopN::new(10);
        top.extend(vec![2, 8]);

        assert_eq!(top.into_vec(), vec![8, 2]);
    }

    #[test]
    fn zero_keeps_nothing() {
        let mut top = TopN::new(0);
        top.push(1);

        assert!(top.is_empty());
        assert!(top.into_vec().is_empty());
    }

    #[test]
    fn same_as_sort_and_truncate() {
        let mut rng = thread_rng();

        for n in 1..20 {
            let values: Vec<u32> = (0..50).map(|_| rng.gen_range(0, 30)).collect();

            let mut top = TopN::new(n);
            top.extend(values.iter().copied());

            let mut expected = values;
            expected.sort_by(|a, b| b.cmp(a));
            expected.truncate(n);

            assert_eq!(top.into_vec(), expected);
        }
    }
}
