// Copyright 2026 The JsonSubset Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::io;
use std::slice;

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

/// One side of a diff record: a JSON value or one of the sentinels.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A value taken verbatim from one of the documents.
    Json(Value),
    /// The superset document has no value at this path.
    NotFound,
    /// Array length marker used for length mismatches.
    Len(usize),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // Compact form keeps table cells on one line.
            Entry::Json(value) => write!(f, "{}", value),
            Entry::NotFound => write!(f, "NOT FOUND"),
            Entry::Len(n) => write!(f, "LEN={}", n),
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Json(value) => value.serialize(serializer),
            Entry::NotFound => serializer.serialize_str("NOT FOUND"),
            Entry::Len(n) => serializer.serialize_str(&format!("LEN={}", n)),
        }
    }
}

/// Category of a single point of divergence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffKind {
    /// A key present in the subset candidate is absent from the superset.
    MissingKey,
    /// Both sides hold a primitive of the same shape with different values.
    ValueMismatch,
    /// The two sides disagree on being object, array or primitive.
    TypeMismatch,
    /// Arrays at the same path have different lengths.
    LengthMismatch,
}

/// One reported point of divergence between the two documents.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DiffRecord {
    /// Slash-delimited location, `[i]` suffixes for array indices.
    pub path: String,
    pub kind: DiffKind,
    /// What the subset candidate holds at `path`.
    pub expected: Entry,
    /// What the superset candidate holds there, or a sentinel.
    pub got: Entry,
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.path, self.expected, self.got
        )
    }
}

/// Ordered, append-only collection of [`DiffRecord`]s from one comparison.
///
/// An empty report means the first document is a subset of the second;
/// [`DiffReport::is_subset`] and emptiness always agree.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct DiffReport {
    records: Vec<DiffRecord>,
}

impl DiffReport {
    pub(crate) fn new() -> Self {
        Self { records: vec![] }
    }

    pub(crate) fn push(&mut self, record: DiffRecord) {
        self.records.push(record);
    }

    /// Whether the compared document was fully contained in the other.
    pub fn is_subset(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, DiffRecord> {
        self.records.iter()
    }

    /// Writes the report as a bordered Key / Expected / Got table.
    ///
    /// Intended for a diagnostic stream such as stderr.
    pub fn write_table<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl<'a> IntoIterator for &'a DiffReport {
    type Item = &'a DiffRecord;
    type IntoIter = slice::Iter<'a, DiffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

const HEADERS: [&str; 3] = ["KEY", "EXPECTED", "GOT"];

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self
            .records
            .iter()
            .map(|r| [r.path.clone(), r.expected.to_string(), r.got.to_string()])
            .collect::<Vec<_>>();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let rule = |f: &mut fmt::Formatter| {
            for width in widths {
                write!(f, "+{}", "-".repeat(width + 2))?;
            }
            writeln!(f, "+")
        };

        let line = |f: &mut fmt::Formatter, cells: &[String; 3]| {
            for (width, cell) in widths.iter().zip(cells.iter()) {
                let pad = width - cell.chars().count();
                write!(f, "| {}{} ", cell, " ".repeat(pad))?;
            }
            writeln!(f, "|")
        };

        rule(f)?;
        line(f, &HEADERS.map(String::from))?;
        rule(f)?;
        for row in &rows {
            line(f, row)?;
        }
        rule(f)
    }
}
