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

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use serde_json::Value;

mod compare;
mod error;
mod report;

pub use compare::DEFAULT_MAX_DEPTH;
pub use error::{CompareError, DocSide};
pub use report::{DiffKind, DiffRecord, DiffReport, Entry};

/// Builder for a subset comparison.
///
/// The builder configures how the comparison walks the documents; the
/// documents themselves are passed to [`SubsetCheck::check`].
///
/// # Examples
///
/// ```
/// use json_subset::SubsetCheck;
///
/// let check = SubsetCheck::new().with_max_depth(32);
/// let report = check.check(br#"{"a": 1}"#, br#"{"a": 1, "b": 2}"#).unwrap();
/// assert!(report.is_subset());
/// ```
#[derive(Debug, Clone)]
pub struct SubsetCheck {
    config: compare::Config,
}

impl SubsetCheck {
    /// Constructs a new `SubsetCheck` with the default depth limit.
    pub fn new() -> Self {
        Self {
            config: compare::Config::new(),
        }
    }

    /// Sets the maximum nesting depth the comparison will follow.
    ///
    /// Documents nested deeper than this fail with
    /// [`CompareError::DepthExceeded`] instead of overflowing the stack.
    /// The default is [`DEFAULT_MAX_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config = self.config.max_depth(max_depth);
        self
    }

    /// Checks whether the document in `a` is fully contained in `b`.
    ///
    /// Both buffers must hold syntactically valid JSON; a parse failure on
    /// either side aborts the comparison with [`CompareError::Parse`] and no
    /// report is produced. Otherwise the returned [`DiffReport`] lists every
    /// point of divergence, and is empty exactly when `a` is a subset of `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_subset::SubsetCheck;
    ///
    /// let report = SubsetCheck::new()
    ///     .check(br#"{"a": 1}"#, br#"{"a": 2}"#)
    ///     .unwrap();
    /// assert!(!report.is_subset());
    /// assert_eq!(report.records()[0].path, "/a");
    /// ```
    pub fn check(&self, a: &[u8], b: &[u8]) -> Result<DiffReport, CompareError> {
        let lhs: Value = serde_json::from_slice(a).map_err(|source| CompareError::Parse {
            side: DocSide::Subset,
            source,
        })?;
        let rhs: Value = serde_json::from_slice(b).map_err(|source| CompareError::Parse {
            side: DocSide::Superset,
            source,
        })?;

        self.check_values(&lhs, &rhs)
    }

    /// Checks containment of already-parsed values, without re-parsing.
    pub fn check_values(&self, a: &Value, b: &Value) -> Result<DiffReport, CompareError> {
        compare::subset_diff(a, b, &self.config)
    }
}

impl Default for SubsetCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks whether the JSON document in `a` is fully contained in `b`,
/// using the default configuration.
///
/// Shorthand for `SubsetCheck::new().check(a, b)`.
///
/// # Examples
///
/// ```
/// use json_subset::is_subset;
///
/// let report = is_subset(br#"{"a": {"b": 1}}"#, br#"{"a": {"b": 1, "c": 9}}"#).unwrap();
/// assert!(report.is_subset());
///
/// let report = is_subset(br#"{"a": [1, 2]}"#, br#"{"a": [1]}"#).unwrap();
/// assert_eq!(format!("{}", report.records()[0].expected), "LEN=2");
/// ```
pub fn is_subset(a: &[u8], b: &[u8]) -> Result<DiffReport, CompareError> {
    SubsetCheck::new().check(a, b)
}
