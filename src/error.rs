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

use thiserror::Error;

/// Which of the two input documents an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DocSide {
    /// The subset candidate (the document being checked).
    Subset,
    /// The superset candidate (the document checked against).
    Superset,
}

impl fmt::Display for DocSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocSide::Subset => write!(f, "subset"),
            DocSide::Superset => write!(f, "superset"),
        }
    }
}

/// Error type for a subset comparison.
///
/// Any of these aborts the whole comparison; no partial report is produced.
#[derive(Debug, Error)]
pub enum CompareError {
    /// One of the input buffers is not syntactically valid JSON.
    #[error("invalid JSON in {side} document: {source}")]
    Parse {
        side: DocSide,
        #[source]
        source: serde_json::Error,
    },
    /// Document nesting exceeds the configured recursion limit.
    #[error("maximum nesting depth of {0} exceeded")]
    DepthExceeded(usize),
}
