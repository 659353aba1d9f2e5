// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

//! Markup content and character references

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// A decoding error
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DecodeError {
    /// Syntactically correct, but does not denote a character.
    #[display("invalid character reference")]
    Invalid,

    /// Syntax error.
    #[display("{_0}")]
    Syntax(#[error(not(source))] anyhow::Error),
}

impl From<anyhow::Error> for DecodeError {
    fn from(from: anyhow::Error) -> Self {
        Self::Syntax(from)
    }
}

const REFERENCE_REGEX_STR: &str = r"&(?:([a-zA-Z][a-zA-Z0-9]*)|#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6}));";

static REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn reference_regex() -> &'static Regex {
    // Group 1 matches a named reference, group 2 a decimal and group 3
    // a hexadecimal code point.
    REFERENCE_REGEX.get_or_init(|| REFERENCE_REGEX_STR.parse().unwrap())
}

fn named_reference(name: &str) -> Option<&'static str> {
    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "copy" => "\u{a9}",
        _ => return None,
    };
    Some(decoded)
}

/// Decode the character references in markup into rendered text.
///
/// Unknown named references and a bare `&` that does not start a
/// reference are preserved verbatim.
///
/// # Errors
///
/// Returns a [`DecodeError`] if a numeric reference does not denote a
/// valid character.
pub fn decode(markup: &str) -> Result<Cow<'_, str>, DecodeError> {
    let regex = reference_regex();
    if !regex.is_match(markup) {
        return Ok(Cow::Borrowed(markup));
    }
    let mut decoded = String::with_capacity(markup.len());
    let mut tail = 0;
    for captures in regex.captures_iter(markup) {
        let Some(matched) = captures.get(0) else {
            continue;
        };
        decoded.push_str(&markup[tail..matched.start()]);
        tail = matched.end();
        if let Some(name) = captures.get(1) {
            match named_reference(name.as_str()) {
                Some(text) => decoded.push_str(text),
                // Unknown names pass through untouched.
                None => decoded.push_str(matched.as_str()),
            }
            continue;
        }
        let code_point = if let Some(digits) = captures.get(2) {
            digits.as_str().parse::<u32>().map_err(anyhow::Error::from)?
        } else if let Some(digits) = captures.get(3) {
            u32::from_str_radix(digits.as_str(), 16).map_err(anyhow::Error::from)?
        } else {
            return Err(anyhow::anyhow!("unterminated character reference").into());
        };
        let character = char::from_u32(code_point).ok_or(DecodeError::Invalid)?;
        decoded.push(character);
    }
    decoded.push_str(&markup[tail..]);
    Ok(Cow::Owned(decoded))
}

/// Escape text for literal inclusion in markup content.
///
/// The inverse direction of [`decode()`]: the returned markup renders as
/// exactly the given text.
#[must_use]
pub fn encode_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut encoded = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            _ => encoded.push(character),
        }
    }
    Cow::Owned(encoded)
}
