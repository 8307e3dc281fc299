// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::fmt::{self, Display, Formatter};

const UNDEFINED: &str = "undefined";

/// A list of key-value records rendered as a text table.
///
/// The columns are the union of the keys of all records, in the order they are first seen. Cells a
/// record has no value for are rendered as `undefined`.
#[derive(Debug, Default)]
pub struct Table {
    records: Vec<Vec<(String, String)>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<K, V>(&mut self, record: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: ToString,
    {
        self.records.push(
            record
                .into_iter()
                .map(|(key, value)| (key.into(), value.to_string()))
                .collect(),
        );
    }

    fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        for (key, _) in self.records.iter().flatten() {
            if !columns.contains(&key.as_str()) {
                columns.push(key.as_str());
            }
        }
        columns
    }

    fn cell<'a>(record: &'a [(String, String)], column: &str) -> &'a str {
        record
            .iter()
            .find(|(key, _)| key == column)
            .map_or(UNDEFINED, |(_, value)| value.as_str())
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let columns = self.columns();
        let widths = columns
            .iter()
            .map(|column| {
                self.records
                    .iter()
                    .map(|record| Self::cell(record, column).chars().count())
                    .chain([column.chars().count()])
                    .max()
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();

        if columns.is_empty() {
            return Ok(());
        }
        write_row(f, columns.iter().copied(), &widths)?;
        for record in &self.records {
            write_row(
                f,
                columns.iter().map(|column| Self::cell(record, column)),
                &widths,
            )?;
        }

        Ok(())
    }
}

fn write_row<'a>(
    f: &mut Formatter,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");

    writeln!(f, "{}", line.trim_end())
}
