//! Stable terminal colors for task labels

use colored::Color;

/// Get a consistent color for a task name
///
/// Hashes the name so a task keeps the same label color across runs. The
/// palette avoids red/yellow/green, which are reserved for status output.
pub fn get_task_color(task_name: &str) -> Color {
    let hash = task_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    let colors = [
        Color::Cyan,
        Color::Magenta,
        Color::Blue,
        Color::BrightCyan,
        Color::BrightMagenta,
        Color::BrightBlue,
    ];

    colors[(hash % colors.len() as u64) as usize]
}
