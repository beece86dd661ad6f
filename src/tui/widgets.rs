//! Pure text renderers for the slider, progress bar and driver chart.

use unicode_width::UnicodeWidthStr;

use crate::wizard::Rating;

/// Slider track, e.g. `0 ━━━━━●───── 10`.
pub fn render_slider(rating: Rating, width: usize) -> String {
    let track = width.max(2);
    let knob = ((rating.fraction() * (track - 1) as f64).round() as usize).min(track - 1);
    format!(
        "{} {}●{} {}",
        Rating::MIN,
        "━".repeat(knob),
        "─".repeat(track - 1 - knob),
        Rating::MAX
    )
}

/// Progress bar with gradient characters.
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;
    format!("{}{}", "▓".repeat(filled), "░".repeat(empty))
}

/// One horizontal bar of the driver chart, scaled against `max_abs`.
/// Negative impacts are drawn with a lighter glyph.
pub fn render_impact_bar(impact: f64, max_abs: f64, width: usize) -> String {
    if max_abs <= 0.0 || width == 0 {
        return String::new();
    }
    let len = ((impact.abs() / max_abs) * width as f64).round() as usize;
    let glyph = if impact < 0.0 { "░" } else { "█" };
    glyph.repeat(len.min(width))
}

/// Pad `text` with spaces to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// Button caption with its key hint, e.g. `[Enter] Next: Strategy`.
pub fn button(key: &str, label: &str) -> String {
    format!("[{}] {}", key, label)
}
