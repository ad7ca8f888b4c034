//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the sgr crate.
//!
//! Compiling SGR state never fails; the only failures come from the host
//! console the compiled sequences are written to.

use thiserror::Error;

/// Result type alias for operations that may fail with an [`SgrError`].
pub type SgrResult<T> = Result<T, SgrError>;

/// Errors raised while driving a terminal session.
#[derive(Debug, Error)]
pub enum SgrError {
    /// The host console failed to accept output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric style index outside the SGR style range `1..=7`.
    #[error("Invalid style index {0} (expected 1..=7)")]
    InvalidStyle(u8),
}

impl SgrError {
    /// Check if the error originated in the host console.
    pub fn is_io_error(&self) -> bool {
        matches!(self, SgrError::Io(_))
    }
}
