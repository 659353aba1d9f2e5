// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

//! Class names and class lists

use std::fmt;

use crate::StringTyped;

/// Check if the given class name is valid.
///
/// An empty name is valid.
#[must_use]
pub fn is_valid(name: &str) -> bool {
    !name.contains(char::is_whitespace)
}

/// Check if the given class name is empty.
#[must_use]
pub fn is_empty(name: &str) -> bool {
    debug_assert!(is_valid(name));
    name.is_empty()
}

/// Common trait for class names.
pub trait Name: StringTyped + Default + PartialEq {
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

impl<T> Name for T where T: StringTyped + Default + PartialEq {}

/// An ordered list of distinct class names.
///
/// Mirrors the `class` attribute of an element: names appear in attribute
/// order without duplicates. Presence of a name acts as a presentation
/// marker for the element that carries the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ClassList<T> {
    names: Vec<T>,
}

impl<T: Name> ClassList<T> {
    /// Decode a class list from a `class` attribute string.
    ///
    /// Names are separated by whitespace. Duplicates are dropped, keeping
    /// the first occurrence.
    #[must_use]
    pub fn decode_str(attr: &str) -> Self {
        let mut list = Self::default();
        for name in attr.split_whitespace() {
            list.add(T::from_str(name));
        }
        list
    }

    /// Check for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Return the number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return the names in attribute order.
    #[must_use]
    pub fn names(&self) -> &[T] {
        debug_assert!(self.names.iter().all(|name| name.is_valid()));
        debug_assert!(!self.names.iter().any(|name| name.is_empty()));
        &self.names
    }

    /// Check if the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|present| present.as_ref() == name)
    }

    /// Add a name if not yet present.
    ///
    /// Empty names are ignored. Returns `true` if the list changed.
    pub fn add(&mut self, name: T) -> bool {
        debug_assert!(name.is_valid());
        if name.is_empty() || self.contains(name.as_ref()) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove a name if present.
    ///
    /// Returns `true` if the list changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let len_before = self.names.len();
        self.names.retain(|present| present.as_ref() != name);
        len_before != self.names.len()
    }

    /// Toggle a name: remove it if present, add it otherwise.
    ///
    /// Toggling twice restores the prior state. Returns `true` if the
    /// name is present afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        debug_assert!(is_valid(name));
        if self.remove(name) {
            false
        } else {
            self.add(T::from_str(name))
        }
    }

    /// Encode the list as a `class` attribute string.
    ///
    /// # Errors
    ///
    /// Returns an [`fmt::Error`] if writing into the buffer fails.
    pub fn encode_into(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        let encoded = itertools::join(self.names.iter().map(AsRef::<str>::as_ref), " ");
        writer.write_str(&encoded)
    }

    /// Encode the list as a `class` attribute string.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl<T: Name> fmt::Display for ClassList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode_into(f)
    }
}
