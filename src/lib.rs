// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Page chrome scripting for in-memory documents.
//!
//! Two small components drive a page's chrome: [`menu::MenuToggle`] flips
//! a marker class on a navigation panel once per click on a trigger
//! element, and [`footer::stamp`] writes the copyright notice for the
//! current calendar year into a footer element. Both address elements of
//! a [`dom::Document`] by identifier, with lookup failures surfaced as
//! results instead of panics.
//!
//! Refer to [`docs`] for more information.

pub mod docs;

use std::{borrow::Cow, fmt};

#[cfg(feature = "compact_str")]
use compact_str::CompactString;
#[cfg(feature = "smol_str")]
use smol_str::SmolStr;

pub mod class;
pub mod clock;
pub mod dom;
pub mod footer;
pub mod ident;
pub mod markup;
pub mod menu;

/// Common trait for the string types that back identifiers and class
/// names.
pub trait StringTyped: AsRef<str> + fmt::Debug + Clone + Sized {
    /// Create from a borrowed string slice.
    #[must_use]
    fn from_str(from: &str) -> Self {
        Self::from_cow_str(Cow::Borrowed(from))
    }

    /// Create from an owned string.
    #[must_use]
    fn from_string(from: String) -> Self {
        Self::from_cow_str(Cow::Owned(from))
    }

    /// Create from a copy-on-write string.
    #[must_use]
    fn from_cow_str(from: Cow<'_, str>) -> Self;
}

impl StringTyped for String {
    fn from_str(from: &str) -> Self {
        from.to_owned()
    }

    fn from_string(from: String) -> Self {
        from
    }

    fn from_cow_str(from: Cow<'_, str>) -> Self {
        from.into_owned()
    }
}

#[cfg(feature = "compact_str")]
impl StringTyped for CompactString {
    fn from_cow_str(from: Cow<'_, str>) -> Self {
        match from {
            Cow::Borrowed(borrowed) => borrowed.into(),
            Cow::Owned(owned) => owned.into(),
        }
    }
}

#[cfg(feature = "smol_str")]
impl StringTyped for SmolStr {
    fn from_cow_str(from: Cow<'_, str>) -> Self {
        match from {
            Cow::Borrowed(borrowed) => borrowed.into(),
            Cow::Owned(owned) => owned.into(),
        }
    }
}

/// The crate-level error.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Error {
    /// A required element is missing from the document.
    #[display("{_0}")]
    #[from]
    ElementNotFound(#[error(source)] dom::ElementNotFound),

    /// Markup content contains an invalid character reference.
    #[display("{_0}")]
    #[from]
    Markup(#[error(source)] markup::DecodeError),

    /// The clock year cannot be displayed as a 4-digit year.
    #[display("undisplayable copyright year: {_0}")]
    YearOutOfRange(#[error(not(source))] i32),
}

/// The identifier of the menu trigger element.
pub const MENU_TRIGGER_ID: &str = "burger";

/// The identifier of the menu panel element.
pub const MENU_PANEL_ID: &str = "nav";

/// The marker class toggled on the menu panel.
pub const MENU_ACTIVE_MARKER: &str = "active";

/// The identifier of the footer text element.
pub const FOOTER_TEXT_ID: &str = "footer-text";

/// Install the page script against a document.
///
/// Wires the menu toggle first and stamps the footer second. A missing
/// menu trigger therefore also prevents the footer stamp from running.
///
/// # Errors
///
/// Returns an [`Error`] if one of the required elements is missing or if
/// the clock year is not displayable.
pub fn install<T>(doc: &mut dom::Document<T>, clock: &impl clock::Clock) -> Result<(), Error>
where
    T: ident::Ident + 'static,
{
    menu::MenuToggle::install(doc, MENU_TRIGGER_ID, MENU_PANEL_ID, MENU_ACTIVE_MARKER)?;
    footer::stamp(doc, FOOTER_TEXT_ID, clock)?;
    Ok(())
}
