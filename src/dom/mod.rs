// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

//! Documents, elements, and click dispatch

use std::{borrow::Cow, fmt, mem};

use crate::{
    Error,
    class::ClassList,
    ident::{self, Ident},
    markup,
};

/// Failure to locate an element by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("element not found: #{id}")]
pub struct ElementNotFound {
    /// The identifier that did not match any element.
    pub id: String,
}

/// A rejected element insertion.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InsertError {
    /// The identifier is empty or not a valid identifier.
    #[display("invalid element id: {id:?}")]
    InvalidId {
        /// The offending identifier.
        id: String,
    },

    /// An element with the same identifier already exists.
    #[display("duplicate element id: #{id}")]
    DuplicateId {
        /// The identifier that is already taken.
        id: String,
    },
}

/// A single document element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element<T> {
    /// The unique identifier
    pub id: T,

    /// The class names, i.e. the element's presentation markers
    pub classes: ClassList<T>,

    /// The raw markup content
    pub content: String,
}

impl<T: Ident> Element<T> {
    /// Create an empty element with the given identifier.
    #[must_use]
    pub fn new(id: T) -> Self {
        debug_assert!(id.is_valid());
        Self {
            id,
            classes: ClassList::default(),
            content: String::new(),
        }
    }

    /// Set the class list from a `class` attribute string.
    #[must_use]
    pub fn with_classes(mut self, attr: &str) -> Self {
        self.classes = ClassList::decode_str(attr);
        self
    }

    /// Set the raw markup content.
    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.content = markup.into();
        self
    }

    /// Return the valid identifier.
    #[must_use]
    pub fn id(&self) -> &T {
        debug_assert!(self.id.is_valid());
        &self.id
    }

    /// Replace the content with raw markup.
    ///
    /// Character references in the markup are interpreted when rendering.
    pub fn set_markup(&mut self, markup: impl Into<String>) {
        self.content = markup.into();
    }

    /// Replace the content with escaped literal text.
    pub fn set_text(&mut self, text: &str) {
        self.content = markup::encode_text(text).into_owned();
    }

    /// Return the rendered text: the markup content with character
    /// references decoded.
    ///
    /// # Errors
    ///
    /// Returns a [`markup::DecodeError`] if the content contains an
    /// invalid character reference.
    pub fn rendered_text(&self) -> Result<Cow<'_, str>, markup::DecodeError> {
        markup::decode(&self.content)
    }
}

/// A handle to an element, obtained from [`Document::find()`].
///
/// Handles stay valid for the lifetime of the document that issued them.
/// Elements are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(usize);

type ClickCallback<T> = Box<dyn FnMut(&mut Document<T>) -> Result<(), Error>>;

struct ClickSubscription<T: 'static> {
    target: ElementHandle,
    callback: ClickCallback<T>,
}

impl<T: 'static> fmt::Debug for ClickSubscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickSubscription")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// An in-memory document: elements in insertion order, plus the click
/// subscriptions registered against them.
#[derive(Debug, Default)]
pub struct Document<T: 'static> {
    elements: Vec<Element<T>>,
    subscriptions: Vec<ClickSubscription<T>>,
}

impl<T: Ident + 'static> Document<T> {
    /// Append an element.
    ///
    /// # Errors
    ///
    /// Returns an [`InsertError`] if the identifier is invalid or empty,
    /// or if an element with the same identifier already exists.
    pub fn insert(&mut self, element: Element<T>) -> Result<ElementHandle, InsertError> {
        let id = element.id.as_ref();
        if !ident::is_valid(id) || id.is_empty() {
            return Err(InsertError::InvalidId { id: id.to_owned() });
        }
        if self.try_find(id).is_some() {
            return Err(InsertError::DuplicateId { id: id.to_owned() });
        }
        let handle = ElementHandle(self.elements.len());
        self.elements.push(element);
        Ok(handle)
    }

    /// Look up an element by identifier.
    ///
    /// The first match wins.
    #[must_use]
    pub fn try_find(&self, id: &str) -> Option<ElementHandle> {
        self.elements
            .iter()
            .position(|element| element.id.as_ref() == id)
            .map(ElementHandle)
    }

    /// Look up an element by identifier.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementNotFound`] error if no element matches.
    pub fn find(&self, id: &str) -> Result<ElementHandle, ElementNotFound> {
        self.try_find(id).ok_or_else(|| ElementNotFound { id: id.to_owned() })
    }

    /// Access the element behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this document.
    #[must_use]
    pub fn element(&self, handle: ElementHandle) -> &Element<T> {
        &self.elements[handle.0]
    }

    /// Mutably access the element behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this document.
    #[must_use]
    pub fn element_mut(&mut self, handle: ElementHandle) -> &mut Element<T> {
        &mut self.elements[handle.0]
    }

    /// Register a click callback on the element behind a handle.
    ///
    /// The callback runs once per dispatched click on that element, on
    /// the thread that owns the document. No relative order is guaranteed
    /// between independently registered callbacks.
    pub fn on_click(
        &mut self,
        handle: ElementHandle,
        callback: impl FnMut(&mut Self) -> Result<(), Error> + 'static,
    ) {
        self.subscriptions.push(ClickSubscription {
            target: handle,
            callback: Box::new(callback),
        });
    }

    /// Dispatch a single click on the element with the given identifier.
    ///
    /// Runs every callback registered for the element. The first callback
    /// error aborts the dispatch and is propagated. Callbacks registered
    /// while dispatching take effect on the next dispatch.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if no element matches `id` or if a callback
    /// fails.
    pub fn dispatch_click(&mut self, id: &str) -> Result<(), Error> {
        let target = self.find(id)?;
        // Detach the subscriptions so callbacks can mutate the document.
        let mut subscriptions = mem::take(&mut self.subscriptions);
        let mut result = Ok(());
        for subscription in &mut subscriptions {
            if subscription.target != target {
                continue;
            }
            result = (subscription.callback)(self);
            if result.is_err() {
                break;
            }
        }
        subscriptions.append(&mut self.subscriptions);
        self.subscriptions = subscriptions;
        result
    }
}

#[cfg(test)]
mod tests;
