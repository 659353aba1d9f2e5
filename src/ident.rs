// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

//! Element identifiers

use crate::StringTyped;

/// Check if the given identifier is valid.
///
/// An empty identifier is valid.
#[must_use]
pub fn is_valid(ident: &str) -> bool {
    !ident.contains(char::is_whitespace) && ident.as_bytes().first() != Some(&b'#')
}

/// Check if the given identifier is empty.
#[must_use]
pub fn is_empty(ident: &str) -> bool {
    debug_assert!(is_valid(ident));
    ident.is_empty()
}

/// Common trait for identifiers.
pub trait Ident: StringTyped + Default + PartialEq + Ord {
    /// [`is_valid()`]
    #[must_use]
    fn is_valid(&self) -> bool {
        is_valid(self.as_ref())
    }

    /// [`is_empty()`]
    #[must_use]
    fn is_empty(&self) -> bool {
        is_empty(self.as_ref())
    }
}

impl<T> Ident for T where T: StringTyped + Default + PartialEq + Ord {}
