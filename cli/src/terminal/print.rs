use std::fmt::Display;

use colored::*;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    );

    eprintln!("{line}");
}

pub fn line(msg: &str) {
    println!("{msg}");
}

pub fn pair(key: &str, value: impl Display) {
    println!("{key} {} {value}", "→".bright_black());
}
