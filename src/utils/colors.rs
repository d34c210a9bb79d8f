/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Target-progress color: met → green, partial → yellow, nothing → grey.
pub fn color_for_progress(value: u32, target: u32) -> &'static str {
    if value >= target {
        GREEN
    } else if value > 0 {
        YELLOW
    } else {
        GREY
    }
}

/// Color for a 0-10 wellbeing score (sleep, energy): low scores are flagged red.
pub fn color_for_score(score: f64) -> &'static str {
    if score >= 7.0 {
        GREEN
    } else if score >= 5.0 {
        YELLOW
    } else {
        RED
    }
}

/// Returns GREY for empty optional fields ("" or "--"), RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--" => RESET,
        _ => GREY,
    }
}

/// Grey out placeholder values in tabular output.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" || value.trim() == "0 min" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
