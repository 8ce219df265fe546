//! Color string normalization at the request boundary.
//!
//! Page scanners report colors the way computed styles do (`rgb(255, 0, 0)`,
//! `rgba(0, 0, 0, 0.5)`) as well as hex. Everything is folded into a
//! [`Color`] here so the engine only ever sees canonical values.

use std::sync::LazyLock;

use color_similarity::{Color, ColorError, FormatIssue};
use regex::Regex;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*[0-9.]+%?\s*)?\)$")
        .expect("static regex is valid")
});

/// Parse a hex or CSS `rgb()`/`rgba()` color.
///
/// The alpha channel of `rgba()` is accepted and dropped.
pub fn normalize_color(input: &str) -> Result<Color, ColorError> {
    let trimmed = input.trim();

    if trimmed
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb"))
    {
        let caps = RGB_FUNCTION
            .captures(trimmed)
            .ok_or_else(|| ColorError::format(input, FormatIssue::UnsupportedNotation))?;

        let mut channels = [0u8; 3];
        for (slot, group) in channels.iter_mut().zip(1..=3) {
            let digits = &caps[group];
            let value: u32 = digits
                .parse()
                .map_err(|_| ColorError::format(input, FormatIssue::UnsupportedNotation))?;
            *slot = u8::try_from(value)
                .map_err(|_| ColorError::format(input, FormatIssue::ChannelOutOfRange(value)))?;
        }
        return Ok(Color::from_bytes(channels));
    }

    trimmed.parse()
}

/// Parse every entry, failing on the first invalid one with its index.
pub fn normalize_all<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Color>, ColorError> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, s)| normalize_color(s.as_ref()).map_err(|e| ColorError::in_batch(i, e)))
        .collect()
}

/// Parse every entry, keeping the valid ones and returning the rejects
/// (with their index) separately.
pub fn normalize_lenient<S: AsRef<str>>(inputs: &[S]) -> (Vec<Color>, Vec<(usize, ColorError)>) {
    let mut colors = Vec::with_capacity(inputs.len());
    let mut rejected = Vec::new();
    for (i, s) in inputs.iter().enumerate() {
        match normalize_color(s.as_ref()) {
            Ok(c) => colors.push(c),
            Err(e) => rejected.push((i, e)),
        }
    }
    (colors, rejected)
}
