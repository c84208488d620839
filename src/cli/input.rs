// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning command-line input into collection elements.
//!
//! The collection never parses anything; deciding how a line of text becomes
//! elements happens here, on the caller's side. Splitting `""` yields a single
//! empty element, and only `remove_empty` turns that into zero elements.

use std::str::FromStr;

/// How text is cut into elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    pub separator: String,
    /// Trim whitespace around each element before the emptiness check.
    pub trim: bool,
    /// Drop elements that are empty (after trimming, if enabled).
    pub remove_empty: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            trim: false,
            remove_empty: false,
        }
    }
}

/// Split `text` into owned elements according to `options`.
///
/// An empty separator keeps the whole text as one element.
pub fn split_elements(text: &str, options: &SplitOptions) -> Vec<String> {
    let pieces: Vec<&str> = if options.separator.is_empty() {
        vec![text]
    } else {
        text.split(options.separator.as_str()).collect()
    };

    pieces
        .into_iter()
        .map(|piece| if options.trim { piece.trim() } else { piece })
        .filter(|piece| !(options.remove_empty && piece.is_empty()))
        .map(str::to_string)
        .collect()
}

/// Strip the line ending a text file usually ends with.
pub fn strip_trailing_newline(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}

/// `INDEX=VALUE` argument of `--insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertSpec {
    pub index: usize,
    pub value: String,
}

impl FromStr for InsertSpec {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (index, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected INDEX=VALUE, got '{}'", raw))?;
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid index '{}': {}", index, e))?;
        Ok(Self {
            index,
            value: value.to_string(),
        })
    }
}
