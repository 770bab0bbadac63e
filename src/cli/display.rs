// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the lightcap CLI.
//!
//! Plain text when piped, colour when on a TTY. `LIGHTCAP_THEME` picks the
//! palette ("dark" or "light", default dark) and `NO_COLOR` turns colour off.

use lightcap::CapabilityReport;
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    match std::env::var("LIGHTCAP_THEME").as_deref() {
        Ok("light") | Ok("l") => Theme::Light,
        _ => Theme::Dark,
    }
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// OneDark / One Light
pub fn green() -> String {
    rgb(match theme() {
        Theme::Dark => (152, 195, 121),
        Theme::Light => (80, 161, 79),
    })
}

pub fn red() -> String {
    rgb(match theme() {
        Theme::Dark => (224, 108, 117),
        Theme::Light => (228, 86, 73),
    })
}

pub fn gray() -> String {
    rgb(match theme() {
        Theme::Dark => (92, 99, 112),
        Theme::Light => (160, 161, 167),
    })
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Marker printed before errors on stderr.
pub fn error_mark() -> String {
    if atty::is(atty::Stream::Stderr) && std::env::var("NO_COLOR").is_err() {
        format!("{}error:{}", red(), RESET)
    } else {
        "error:".to_string()
    }
}

pub fn found_line(key: i64, index: usize) -> String {
    format!("{} {} at index {}", color(&green(), "found"), key, index)
}

pub fn missing_line(key: i64) -> String {
    format!("{} {}", color(&red(), "not found"), key)
}

fn boxed_line(text: &str) -> String {
    let width = text.chars().count();
    let pad = BOX_WIDTH.saturating_sub(width + 1);
    format!("│ {}{}│", text, " ".repeat(pad))
}

/// Render the capability report as a box diagram.
pub fn render_report(report: &CapabilityReport) -> String {
    let rule = "─".repeat(BOX_WIDTH);
    let mut lines = vec![format!("┌{}┐", rule)];
    lines.push(boxed_line("kernel of trust"));
    for file in &report.kernel_files {
        lines.push(boxed_line(&format!("  {}", file)));
    }
    for cap in &report.capabilities {
        lines.push(format!("├{}┤", rule));
        lines.push(boxed_line(cap.name));
        lines.push(boxed_line(&format!("  invariant:  {}", cap.invariant)));
        lines.push(boxed_line(&format!("  checked by: {}", cap.established_by)));
        if !cap.unchecked_operations.is_empty() {
            lines.push(boxed_line(&format!(
                "  unchecked:  {}",
                cap.unchecked_operations.join(", ")
            )));
        }
    }
    lines.push(format!("└{}┘", rule));
    lines.push(color(
        &gray(),
        &format!("{} unchecked operations in total", report.unchecked_count()),
    ));
    let header = color(BOLD, "lightcap capability report");
    format!("{}\n{}", header, lines.join("\n"))
}
