// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

//! Footer stamping

use crate::{
    Error,
    clock::{self, Clock},
    dom::Document,
    ident::Ident,
};

/// The fixed phrase of the copyright notice.
pub const NOTICE_PHRASE: &str = "All rights reserved";

/// The character reference of the copyright sign that starts the notice.
pub const COPYRIGHT_SIGN: &str = "&copy;";

/// Build the copyright line for the given year, as raw markup.
///
/// # Errors
///
/// Returns [`Error::YearOutOfRange`] if the year cannot be displayed
/// with 4 digits.
pub fn notice_markup(year: i32) -> Result<String, Error> {
    if !clock::is_displayable_year(year) {
        return Err(Error::YearOutOfRange(year));
    }
    Ok(format!("{COPYRIGHT_SIGN} {NOTICE_PHRASE} {year}"))
}

/// Stamp the copyright notice into the footer element.
///
/// Locates the target element, reads the current year from the clock and
/// replaces the element's markup content with the notice for that year.
/// Runs once per call; the notice is not refreshed on a later year
/// rollover.
///
/// # Errors
///
/// Returns an [`Error`] if the target element is missing or the clock
/// year is not displayable.
pub fn stamp<T>(doc: &mut Document<T>, target_id: &str, clock: &impl Clock) -> Result<(), Error>
where
    T: Ident + 'static,
{
    let target = doc.find(target_id)?;
    let notice = notice_markup(clock.year())?;
    doc.element_mut(target).set_markup(notice);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::notice_markup;
    use crate::{Error, markup};

    #[test]
    fn notice_contains_the_copyright_sign_and_the_year() {
        assert_eq!(
            "&copy; All rights reserved 2025",
            notice_markup(2025).unwrap()
        );
    }

    #[test]
    fn notice_renders_with_the_copyright_glyph() {
        let notice = notice_markup(2025).unwrap();
        assert_eq!(
            "\u{a9} All rights reserved 2025",
            markup::decode(&notice).unwrap()
        );
    }

    #[test]
    fn notice_accepts_the_displayable_year_boundaries() {
        assert_eq!("&copy; All rights reserved 1970", notice_markup(1970).unwrap());
        assert_eq!("&copy; All rights reserved 9999", notice_markup(9999).unwrap());
    }

    #[test]
    fn notice_should_fail_on_undisplayable_years() {
        assert!(matches!(notice_markup(1969), Err(Error::YearOutOfRange(1969))));
        assert!(matches!(notice_markup(10_000), Err(Error::YearOutOfRange(10_000))));
    }
}
