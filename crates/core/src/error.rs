// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while deriving reports from a stage collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// An aggregation that is undefined over zero stages was requested
    /// on an empty collection.
    EmptyCollection {
        /// The operation that was attempted.
        operation: &'static str,
    },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection { operation } => {
                write!(f, "Cannot compute {operation} over an empty stage collection")
            }
        }
    }
}

impl std::error::Error for ReportError {}
