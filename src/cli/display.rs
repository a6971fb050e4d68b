// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typeahead CLI.
//!
//! Colored key/value output for `inspect`, gated on TTY detection and
//! `NO_COLOR` so pipelines get plain text.

use std::fmt;
use std::sync::OnceLock;

/// Whether stdout gets ANSI colors.
fn use_color() -> bool {
    static USE_COLOR: OnceLock<bool> = OnceLock::new();
    *USE_COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// Wrap `text` in an ANSI escape when the terminal supports it.
fn paint(code: &str, text: &str) -> String {
    if use_color() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Bold cyan section heading.
pub fn heading(text: &str) -> String {
    paint("1;36", text)
}

/// Dimmed label text.
pub fn dim(text: &str) -> String {
    paint("2", text)
}

/// Print one aligned key/value row. Padding is applied before coloring so
/// escape codes don't skew the column width.
pub fn kv(key: &str, value: impl fmt::Display) {
    println!("  {} {}", dim(&format!("{:<16}", key)), value);
}
