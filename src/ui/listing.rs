// SPDX-License-Identifier: MPL-2.0
//! Load state of a list shown by the library screens.

use crate::domain::error::LibraryError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Listing<T> {
    #[default]
    Loading,
    Loaded(Vec<T>),
    /// The load failed; the screen shows an empty state with this reason.
    Failed(String),
}

impl<T> Listing<T> {
    /// Items to display; empty while loading or after a failure.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Loaded(items) => items,
            Listing::Loading | Listing::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Listing::Loading)
    }
}

impl<T> From<Result<Vec<T>, LibraryError>> for Listing<T> {
    fn from(result: Result<Vec<T>, LibraryError>) -> Self {
        match result {
            Ok(items) => Listing::Loaded(items),
            Err(err) => Listing::Failed(err.to_string()),
        }
    }
}
