// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use prettytable::{cell, format::consts::FORMAT_NO_LINESEP, row, Table};
use std::collections::BTreeMap;

pub trait ToTable {
    fn to_table(&self) -> Table;
}

impl<K, V> ToTable for BTreeMap<K, V>
where
    K: ToString,
    V: ToString,
{
    fn to_table(&self) -> Table {
        let mut table = Table::new();

        for (key, val) in self {
            table.add_row(row![key, val]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}

// Ranked output keeps its order, that's why a slice and not a map
impl<K, V> ToTable for [(K, V)]
where
    K: ToString,
    V: ToString,
{
    fn to_table(&self) -> Table {
        let mut table = Table::new();

        for (pos, (key, val)) in self.iter().enumerate() {
            table.add_row(row![pos + 1, key, val]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}
