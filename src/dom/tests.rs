// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

use std::{cell::Cell, rc::Rc};

use super::{Document, Element, InsertError};

type Doc = Document<String>;

fn element(id: &str) -> Element<String> {
    Element::new(id.to_owned())
}

#[test]
fn insert_and_find_by_identifier() {
    let mut doc = Doc::default();
    let inserted = doc.insert(element("nav")).unwrap();
    assert_eq!(inserted, doc.find("nav").unwrap());
    assert_eq!("nav", doc.element(inserted).id());
}

#[test]
fn find_missing_element_reports_the_identifier() {
    let doc = Doc::default();
    let err = doc.find("nav").unwrap_err();
    assert_eq!("nav", err.id);
    assert_eq!("element not found: #nav", err.to_string());
}

#[test]
fn insert_should_fail_on_duplicate_identifiers() {
    let mut doc = Doc::default();
    doc.insert(element("nav")).unwrap();
    assert!(matches!(
        doc.insert(element("nav")),
        Err(InsertError::DuplicateId { .. })
    ));
}

#[test]
fn insert_should_fail_on_invalid_identifiers() {
    let mut doc = Doc::default();
    assert!(matches!(
        doc.insert(element("")),
        Err(InsertError::InvalidId { .. })
    ));
    assert!(matches!(
        doc.insert(element("nav bar")),
        Err(InsertError::InvalidId { .. })
    ));
    assert!(matches!(
        doc.insert(element("#nav")),
        Err(InsertError::InvalidId { .. })
    ));
}

#[test]
fn set_text_escapes_and_renders_back_unchanged() {
    let mut doc = Doc::default();
    let footer = doc.insert(element("footer-text")).unwrap();
    doc.element_mut(footer).set_text("Fish & Chips <hot>");
    assert_eq!("Fish &amp; Chips &lt;hot&gt;", doc.element(footer).content);
    assert_eq!(
        "Fish & Chips <hot>",
        doc.element(footer).rendered_text().unwrap()
    );
}

#[test]
fn set_markup_replaces_prior_content() {
    let mut doc = Doc::default();
    let footer = doc.insert(element("footer-text")).unwrap();
    doc.element_mut(footer).set_markup("old");
    doc.element_mut(footer).set_markup("&copy; new");
    assert_eq!("&copy; new", doc.element(footer).content);
    assert_eq!("\u{a9} new", doc.element(footer).rendered_text().unwrap());
}

#[test]
fn dispatch_click_runs_only_the_callbacks_of_the_target() {
    let mut doc = Doc::default();
    let trigger = doc.insert(element("trigger")).unwrap();
    let other = doc.insert(element("other")).unwrap();
    let clicks = Rc::new(Cell::new(0));
    let counted = Rc::clone(&clicks);
    doc.on_click(trigger, move |_| {
        counted.set(counted.get() + 1);
        Ok(())
    });
    doc.on_click(other, |_| {
        panic!("not clicked");
    });
    doc.dispatch_click("trigger").unwrap();
    doc.dispatch_click("trigger").unwrap();
    assert_eq!(2, clicks.get());
}

#[test]
fn dispatch_click_on_missing_element_should_fail() {
    let mut doc = Doc::default();
    assert!(doc.dispatch_click("trigger").is_err());
}

#[test]
fn callbacks_can_mutate_the_document() {
    let mut doc = Doc::default();
    let trigger = doc.insert(element("trigger")).unwrap();
    doc.insert(element("panel")).unwrap();
    doc.on_click(trigger, |doc| {
        let panel = doc.find("panel")?;
        doc.element_mut(panel).classes.toggle("active");
        Ok(())
    });
    doc.dispatch_click("trigger").unwrap();
    let panel = doc.find("panel").unwrap();
    assert!(doc.element(panel).classes.contains("active"));
}

#[test]
fn a_callback_error_aborts_the_dispatch() {
    let mut doc = Doc::default();
    let trigger = doc.insert(element("trigger")).unwrap();
    doc.on_click(trigger, |doc| {
        let missing = doc.find("panel")?;
        doc.element_mut(missing).classes.toggle("active");
        Ok(())
    });
    doc.on_click(trigger, |doc| {
        let trigger = doc.find("trigger")?;
        doc.element_mut(trigger).classes.toggle("clicked");
        Ok(())
    });
    assert!(doc.dispatch_click("trigger").is_err());
    let trigger = doc.find("trigger").unwrap();
    assert!(!doc.element(trigger).classes.contains("clicked"));
}

#[test]
fn callbacks_registered_while_dispatching_run_on_the_next_dispatch() {
    let mut doc = Doc::default();
    let trigger = doc.insert(element("trigger")).unwrap();
    let clicks = Rc::new(Cell::new(0));
    let counted = Rc::clone(&clicks);
    doc.on_click(trigger, move |doc| {
        let inner = Rc::clone(&counted);
        doc.on_click(doc.find("trigger")?, move |_| {
            inner.set(inner.get() + 1);
            Ok(())
        });
        Ok(())
    });
    doc.dispatch_click("trigger").unwrap();
    assert_eq!(0, clicks.get());
    doc.dispatch_click("trigger").unwrap();
    assert_eq!(1, clicks.get());
}
