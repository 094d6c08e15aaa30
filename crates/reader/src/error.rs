// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for stage file ingestion.

use grand_tour_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while reading a stage file.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The file could not be read or tokenized as CSV.
    #[error("Failed to read stage file: {0}")]
    Csv(#[from] csv::Error),

    /// A record did not carry exactly ten fields.
    #[error("Line {line}: expected 10 fields, found {found}")]
    FieldCount {
        /// The line number within the file (1-based, header included).
        line: u64,
        /// The number of fields actually found.
        found: usize,
    },

    /// A field could not be parsed into its domain representation.
    #[error("Line {line}: invalid {field}: {message}")]
    InvalidField {
        /// The line number within the file.
        line: u64,
        /// The field that failed to parse.
        field: &'static str,
        /// A human-readable description of the failure.
        message: String,
    },

    /// The parsed fields violated a stage construction invariant.
    #[error("Line {line}: {source}")]
    InvalidStage {
        /// The line number within the file.
        line: u64,
        /// The violated invariant.
        source: DomainError,
    },
}
