// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Errors reported to the user by controller actions.
//!
//! The `Display` text of an [`ActionError`] is exactly what the status line
//! shows.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ActionError {
    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The backend could not be reached or its answer could not be read.
    #[error("{0}")]
    Network(String),

    /// The backend answered and reported a failure.
    #[error("{context}: {message}")]
    Backend {
        context: &'static str,
        message: String,
    },
}

impl ActionError {
    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation(message.to_string())
    }

    pub(crate) fn network(message: &str) -> Self {
        Self::Network(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_surface_the_backend_message() {
        let err = ActionError::Backend {
            context: "Download error",
            message: "Too many tracks (max 50)".to_string(),
        };
        assert_eq!(err.to_string(), "Download error: Too many tracks (max 50)");
    }
}
