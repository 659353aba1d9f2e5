// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

//! Menu toggling

use crate::{
    dom::{Document, ElementHandle, ElementNotFound},
    ident::Ident,
};

/// Toggles a marker class on a menu panel once per click on a trigger
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct MenuToggle {
    trigger: ElementHandle,
}

impl MenuToggle {
    /// Locate the trigger element and register the click callback.
    ///
    /// The panel is looked up again on every click. A panel that is
    /// missing at install time only fails once a click actually needs it,
    /// and the failure propagates out of the dispatch.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementNotFound`] error if the trigger element is
    /// missing.
    pub fn install<T>(
        doc: &mut Document<T>,
        trigger_id: &str,
        panel_id: &str,
        marker: &str,
    ) -> Result<Self, ElementNotFound>
    where
        T: Ident + 'static,
    {
        let trigger = doc.find(trigger_id)?;
        let panel_id = panel_id.to_owned();
        let marker = marker.to_owned();
        doc.on_click(trigger, move |doc| {
            let panel = doc.find(&panel_id)?;
            doc.element_mut(panel).classes.toggle(&marker);
            Ok(())
        });
        Ok(Self { trigger })
    }

    /// Return the handle of the trigger element.
    #[must_use]
    pub const fn trigger(&self) -> ElementHandle {
        self.trigger
    }
}
