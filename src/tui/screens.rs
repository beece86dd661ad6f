//! Per-stage screen content.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::animation::balloon_row;
use super::app::WizardApp;
use super::layout::LayoutMode;
use super::theme::Theme;
use super::widgets::{button, pad_to_width, render_impact_bar, render_slider};
use crate::model::{format_percent, Prediction, Verdict};
use crate::wizard::{Stage, Topic};

const CHART_LABEL_WIDTH: usize = 10;
const BALLOON_ROWS: usize = 2;

/// Title and prompt of a topic stage.
fn topic_copy(topic: Topic) -> (&'static str, &'static str) {
    match topic {
        Topic::DataWrangling => (
            "Does your team do a lot of SQL?",
            "Every team deals with messy data. How much wrangling is required?",
        ),
        Topic::Modeling => (
            "Does your team need predictive modeling?",
            "Do you need someone to build models, automations, or pipelines in Python?",
        ),
        Topic::Strategy => (
            "Does your team need business strategy?",
            "Is it enough to just code, or do you need someone who understands the 'Why'?",
        ),
        Topic::CultureFit => (
            "Final Check: The Vibe",
            "Cultural fit is key. How tolerant is your team of nerdy humor?",
        ),
    }
}

const INTRO_PARAGRAPHS: [&str; 3] = [
    "The job market is rough, and I need all the help I can get!!",
    "People are busy, and it is hard to get noticed on LinkedIn. So I built this \
     questionnaire, hopefully it can catch YOUR attention.",
    "It uses a logistic regression model to predict the probability of a candidate being \
     a good fit for your team, based on your specific needs. It will probably predict a \
     great match! (I promise I am awesome).",
];

const HOW_IT_WORKS: [&str; 3] = [
    "1. You'll answer a few questions about your team's requirements.",
    "2. The model evaluates these inputs and calculates a match probability.",
    "3. Insights on the match are provided to help you make informed decisions.",
];

pub fn render_screen(
    frame: &mut Frame,
    app: &WizardApp,
    theme: &Theme,
    area: Rect,
    mode: LayoutMode,
) {
    let stage = app.stage();
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines = match stage {
        Stage::Introduction => intro_lines(theme),
        Stage::Results => results_lines(app, theme, inner_width),
        _ => match stage.topic() {
            Some(topic) => topic_lines(app, theme, topic, inner_width),
            None => Vec::new(),
        },
    };

    let title = match mode {
        LayoutMode::Full => format!(" {} ", stage.name()),
        LayoutMode::Compact => format!(" {}/{} {} ", stage.index() + 1, Stage::ALL.len(), stage),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border_style(!app.sidebar_focused()));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn intro_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "📊 Welcome to the Candidate Fit Predictor",
            theme.title_style(),
        )),
        Line::from(""),
    ];
    for paragraph in INTRO_PARAGRAPHS {
        lines.push(Line::from(Span::styled(paragraph, theme.body_style())));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("How It Works:", theme.title_style())));
    lines.extend(
        HOW_IT_WORKS
            .iter()
            .map(|step| Line::from(Span::styled(*step, theme.body_style()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to begin!",
        theme.hint_style(),
    )));
    lines.push(Line::from(""));
    lines.push(nav_buttons(Stage::Introduction, theme));
    lines
}

fn topic_lines(app: &WizardApp, theme: &Theme, topic: Topic, width: usize) -> Vec<Line<'static>> {
    let (title, prompt) = topic_copy(topic);
    let rating = app.session().ratings.get(topic);
    // Room for the "0 " and " 10" labels around the track
    let track = width.saturating_sub(6).min(40);

    vec![
        Line::from(Span::styled(title, theme.title_style())),
        Line::from(""),
        Line::from(Span::styled(prompt, theme.body_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled(topic.slider_label(), theme.body_style()),
            Span::styled(format!("  {}", rating), theme.metric_style()),
        ]),
        Line::from(Span::styled(
            render_slider(rating, track),
            theme.slider_style(),
        )),
        Line::from(Span::styled("←/→ to adjust", theme.hint_style())),
        Line::from(""),
        nav_buttons(app.stage(), theme),
    ]
}

fn nav_buttons(stage: Stage, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    if stage.previous().is_some() {
        spans.push(Span::styled(button("b", "Back"), theme.button_style()));
        spans.push(Span::raw("   "));
    }
    if let Some(label) = stage.next_label() {
        spans.push(Span::styled(button("Enter", label), theme.button_style()));
    }
    Line::from(spans)
}

fn results_lines(app: &WizardApp, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let prediction = app.prediction();
    let verdict = prediction.verdict();
    let mut lines = Vec::new();

    if app.celebration().is_active() {
        let frame = app.celebration().frame();
        lines.extend((0..BALLOON_ROWS).map(|row| Line::from(balloon_row(width, row, frame))));
    }

    lines.push(Line::from(Span::styled(
        "📊 The Verdict",
        theme.title_style(),
    )));
    lines.push(Line::from(Span::styled(
        "Based on your inputs, here is the predicted probability of a successful hire.",
        theme.body_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Match Probability  ", theme.body_style()),
        Span::styled(format_percent(prediction.probability), theme.metric_style()),
    ]));
    let verdict_style = match verdict {
        Verdict::Match => theme.match_style(),
        Verdict::Outlier => theme.outlier_style(),
    };
    lines.push(Line::from(Span::styled(verdict.headline(), verdict_style)));
    lines.push(Line::from(""));

    lines.extend(driver_chart(&prediction, theme, width));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        verdict.conclusion_title(),
        theme.title_style(),
    )));
    lines.extend(
        verdict
            .conclusion_lines(prediction.probability)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, theme.body_style()))),
    );
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(button("e", "📧 Email Me"), theme.button_style()),
        Span::raw("   "),
        Span::styled(
            button("r", app.resume().control_label()),
            theme.button_style(),
        ),
        Span::raw("   "),
        Span::styled(button("s", "Start Over"), theme.button_style()),
    ]));
    lines
}

/// Horizontal bar per feature with the impact value printed after it.
fn driver_chart(prediction: &Prediction, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let max_abs = prediction.max_abs_impact();
    // Label, gap, value column
    let bar_width = width.saturating_sub(CHART_LABEL_WIDTH + 10).min(40);

    let mut lines = vec![Line::from(Span::styled(
        "Driver Analysis (Impact Score)",
        theme.title_style(),
    ))];
    lines.extend(prediction.impacts.iter().map(|impact| {
        Line::from(vec![
            Span::styled(
                pad_to_width(impact.label, CHART_LABEL_WIDTH),
                theme.body_style(),
            ),
            Span::styled(
                render_impact_bar(impact.impact, max_abs, bar_width),
                theme.bar_style(),
            ),
            Span::styled(format!(" {:.2}", impact.impact), Style::default()),
        ])
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_copy() {
        for topic in Topic::ALL {
            let (title, prompt) = topic_copy(topic);
            assert!(!title.is_empty());
            assert!(!prompt.is_empty());
        }
    }

    #[test]
    fn introduction_has_no_back_button() {
        let theme = Theme::default_theme();
        let text: String = nav_buttons(Stage::Introduction, &theme)
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(text, "[Enter] Next: Data Needs");
    }

    #[test]
    fn vibe_buttons() {
        let theme = Theme::default_theme();
        let text: String = nav_buttons(Stage::Vibe, &theme)
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(text, "[b] Back   [Enter] Calculate Results 🚀");
    }
}
