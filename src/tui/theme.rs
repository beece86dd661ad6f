//! Color themes and styling for the wizard.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the questionnaire screens.
pub struct Theme {
    /// Primary accent color (chart bars, active stage)
    pub primary: Color,
    /// Success color (match verdict)
    pub success: Color,
    /// Muted color (hints, inactive stages)
    pub muted: Color,
    /// Text color
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            // #4F8BF9, the driver chart color
            primary: Color::Rgb(0x4F, 0x8B, 0xF9),
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Sidebar entry, highlighted when it is the current stage.
    pub fn stage_style(&self, is_current: bool) -> Style {
        if is_current {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Sidebar cursor while the sidebar has focus.
    pub fn cursor_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn slider_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn bar_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn metric_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn outlier_style(&self) -> Style {
        Style::default()
            .fg(self.warning())
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn progress_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
