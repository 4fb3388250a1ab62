// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommendation-system.
//
// recommendation-system is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommendation-system is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommendation-system.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::{btree_map::Iter as MapIter, BTreeMap};

// The shortest map drives the iteration and the longest one is only probed,
// so the walk ends as soon as the shortest runs out. Keys come out in
// ascending order, whichever map ends up being the shortest.
pub fn common_keys_iter<'a, K, V>(
    a: &'a BTreeMap<K, V>,
    b: &'a BTreeMap<K, V>,
) -> CommonKeyIterator<'a, K, V>
where
    K: Ord,
{
    let (shortest, longest, swapped) = if a.len() > b.len() {
        (b, a, true)
    } else {
        (a, b, false)
    };

    CommonKeyIterator {
        shortest: shortest.iter(),
        longest,
        swapped,
    }
}

#[derive(Debug)]
pub struct CommonKeyIterator<'a, K, V>
where
    K: Ord,
{
    shortest: MapIter<'a, K, V>,
    longest: &'a BTreeMap<K, V>,
    swapped: bool,
}

impl<'a, K, V> Iterator for CommonKeyIterator<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, (&'a V, &'a V));

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (key, short_val) = self.shortest.next()?;

            if let Some(long_val) = self.longest.get(key) {
                // Values are always yielded as (a, b)
                let pair = if self.swapped {
                    (long_val, short_val)
                } else {
                    (short_val, long_val)
                };

                break Some((key, pair));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_macros::b_tree_map;

    #[test]
    fn common_key_iterator() {
        let a = b_tree_map! {
            0 => 0.,
            2 => 0.,
            3 => 0.,
            5 => 0.,
        };

        let b = b_tree_map! {
            0 => 2.,
            1 => 1.,
            2 => 2.,
            5 => 2.,
        };

        let keys: Vec<_> = common_keys_iter(&a, &b).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![0, 2, 5]);
    }

    #[test]
    fn values_keep_argument_order() {
        let a = b_tree_map! {
            1 => 10.,
            2 => 20.,
            3 => 30.,
        };

        let b = b_tree_map! {
            2 => -2.,
        };

        let pairs: Vec<_> = common_keys_iter(&a, &b).map(|(_, (x, y))| (*x, *y)).collect();
        assert_eq!(pairs, vec![(20., -2.)]);

        let pairs: Vec<_> = common_keys_iter(&b, &a).map(|(_, (x, y))| (*x, *y)).collect();
        assert_eq!(pairs, vec![(-2., 20.)]);
    }

    #[test]
    fn disjoint_maps_have_no_common_keys() {
        let a = b_tree_map! { 1 => 1. };
        let b = b_tree_map! { 2 => 1. };

        assert_eq!(common_keys_iter(&a, &b).count(), 0);
    }
}
