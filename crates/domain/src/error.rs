// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stage construction invariant was violated.
    InvalidStage(&'static str),
    /// Stage type string is not recognized.
    InvalidStageType(String),
    /// Rider country code is not recognized.
    InvalidCountry(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStage(rule) => write!(f, "Invalid stage: {rule}"),
            Self::InvalidStageType(value) => write!(f, "Invalid stage type: {value}"),
            Self::InvalidCountry(value) => write!(f, "Invalid rider country: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
