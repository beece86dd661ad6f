//! Responsive layout management for different terminal sizes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::WizardApp;
use super::screens::render_screen;
use super::theme::Theme;
use super::widgets::render_progress_bar;
use crate::wizard::Stage;

const SIDEBAR_WIDTH: u16 = 22;
const EST_TIME_CAPTION: &str = "⏳ Est. time: < 2 mins";

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Sidebar plus main screen (>= 80 cols)
    Full,
    /// Main screen only; the stage shows in the title
    Compact,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        match width {
            0..=79 => Self::Compact,
            _ => Self::Full,
        }
    }

    pub fn shows_sidebar(&self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppAreas {
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn calculate_layout(area: Rect, mode: LayoutMode) -> AppAreas {
    let (sidebar, content) = if mode.shows_sidebar() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(area);
        (Some(columns[0]), columns[1])
    } else {
        (None, area)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Stage screen
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Progress footer
        ])
        .split(content);

    AppAreas {
        sidebar,
        main: rows[0],
        status: rows[1],
        footer: rows[2],
    }
}

/// Render the wizard with a layout fitted to the terminal.
pub fn render_adaptive(frame: &mut Frame, app: &WizardApp) {
    let theme = Theme::default_theme();
    let mode = LayoutMode::from_terminal_width(frame.area().width);
    let areas = calculate_layout(frame.area(), mode);

    if let Some(sidebar) = areas.sidebar {
        render_sidebar(frame, app, &theme, sidebar);
    }
    render_screen(frame, app, &theme, areas.main, mode);
    render_status(frame, app, &theme, areas.status);
    render_footer(frame, app, &theme, areas.footer);
}

fn render_sidebar(frame: &mut Frame, app: &WizardApp, theme: &Theme, area: Rect) {
    let current = app.stage();
    let items: Vec<ListItem> = Stage::ALL
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let marker = if *stage == current { "◉" } else { "○" };
            let mut style = theme.stage_style(*stage == current);
            if app.sidebar_focused() && i == app.sidebar_cursor() {
                style = style.patch(theme.cursor_style());
            }
            ListItem::new(Line::from(Span::styled(
                format!(" {} {} {}", i + 1, marker, stage.name()),
                style,
            )))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Navigation ")
        .border_style(theme.border_style(app.sidebar_focused()));

    let go_to = Paragraph::new(Line::from(Span::styled("Go to:", theme.hint_style())));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(go_to, rows[0]);
    frame.render_widget(List::new(items), rows[1]);
}

fn render_status(frame: &mut Frame, app: &WizardApp, theme: &Theme, area: Rect) {
    let line = match app.status_message() {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            ratatui::style::Style::default().fg(theme.warning()),
        )),
        None => Line::from(Span::styled(
            " Tab: sidebar  1-6: jump  q: quit",
            theme.hint_style(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, app: &WizardApp, theme: &Theme, area: Rect) {
    let caption_width = unicode_width::UnicodeWidthStr::width(EST_TIME_CAPTION) as u16 + 2;
    let bar_width = area.width.saturating_sub(caption_width + 2) as usize;
    let progress = app.stage().progress();

    let line = Line::from(vec![
        Span::styled(render_progress_bar(progress, bar_width), theme.progress_style()),
        Span::raw("  "),
        Span::styled(EST_TIME_CAPTION, theme.hint_style()),
    ]);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style(false));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
