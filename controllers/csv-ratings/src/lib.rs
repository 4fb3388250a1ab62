// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use controller::{error::ErrorKind, Controller, Observation};
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

#[derive(Debug, Clone, Deserialize)]
struct Record {
    user: String,
    item: String,
    rating: f64,
}

/// Ratings loaded from `user,item,rating` records.
#[derive(Debug, Clone)]
pub struct CsvController {
    name: String,
    observations: Vec<Observation<String, String>>,
}

impl CsvController {
    pub fn from_path(path: impl AsRef<Path>, has_headers: bool) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "csv".into());

        let file = File::open(path)?;
        Self::from_reader(&name, file, has_headers)
    }

    pub fn from_reader<R: Read>(name: &str, reader: R, has_headers: bool) -> Result<Self, Error> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut observations = Vec::new();
        for record in csv.deserialize::<Record>() {
            let record = record.map_err(|e| {
                let line = e.position().map(|pos| pos.line()).unwrap_or_default();
                ErrorKind::MalformedRecord(line, e.to_string())
            })?;

            observations.push(Observation::new(record.user, record.item, record.rating));
        }

        controller::validate(&observations)?;
        log::debug!("Loaded {} ratings from {}", observations.len(), name);

        Ok(Self {
            name: name.into(),
            observations,
        })
    }
}

impl Controller for CsvController {
    type UserId = String;
    type ItemId = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> Result<Vec<Observation<String, String>>, Error> {
        Ok(self.observations.clone())
    }
}
