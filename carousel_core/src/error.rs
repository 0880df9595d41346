// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initialization failures.
//!
//! Nothing after initialization can fail: navigation requests that cannot be
//! honored are dropped and reported through [`trace`](crate::trace) instead.

use core::fmt;

/// Why a carousel could not be created.
///
/// Hosts are expected to log this and carry on without a carousel rather
/// than surface it to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InitError {
    /// A required element (named by its selector) is absent.
    MissingAnchor(&'static str),
    /// The track contains no items.
    EmptyContent,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor(anchor) => write!(f, "carousel: missing element `{anchor}`"),
            Self::EmptyContent => f.write_str("carousel: no items found in the track"),
        }
    }
}

impl core::error::Error for InitError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_anchor() {
        let err = InitError::MissingAnchor(".carousel-track");
        assert_eq!(err.to_string(), "carousel: missing element `.carousel-track`");
        assert_eq!(
            InitError::EmptyContent.to_string(),
            "carousel: no items found in the track"
        );
    }
}
