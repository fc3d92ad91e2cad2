//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: commands
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: channel prefixes, paths, commands, hints
//! - Dimmed: labels, secondary info

use std::fmt::Display;

use console::style;

use crate::core::flow::{Channel, Reporter};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(channel: Channel) -> String {
    if colors_enabled() {
        style(channel.prefix()).cyan().bold().to_string()
    } else {
        channel.prefix().to_string()
    }
}

/// Print a `local:`/`remote:` progress line to stdout.
///
/// Example: `remote: securely pulling staging (.env.staging)`
pub fn line(channel: Channel, msg: &str) {
    println!("{} {}", prefix(channel), msg);
}

/// Print a `local:`/`remote:` failure line to stderr.
///
/// Example: `remote: Invalid short code`
pub fn failure(channel: Channel, msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", prefix(channel), style(msg).red());
    } else {
        eprintln!("{} {}", prefix(channel), msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ file not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run envpull pull`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  project   prj_123`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {:<12}{}", style(label).dim(), style(value).bold());
    } else {
        println!("  {:<12}{}", label, value);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    if colors_enabled() {
        style(c).green().to_string()
    } else {
        c.to_string()
    }
}

/// Terminal reporter for [`crate::core::flow::Flow`].
#[derive(Debug, Default)]
pub struct Terminal;

impl Reporter for Terminal {
    fn info(&mut self, channel: Channel, message: &str) {
        line(channel, message);
    }

    fn failure(&mut self, channel: Channel, message: &str) {
        failure(channel, message);
    }
}
