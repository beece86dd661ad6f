//! Rendering tests for the results screen on a `TestBackend`.

use candidate_fit::config::AppConfig;
use candidate_fit::model::ScoringModel;
use candidate_fit::resume::RESUME_FILE_NAME;
use candidate_fit::tui::app::WizardApp;
use candidate_fit::wizard::{Session, Stage};
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.resume.directory = dir.path().to_path_buf();
    config.resume.download_dir = Some(dir.path().join("downloads"));
    config.ui.animations = false;
    config
}

fn render_to_string(app: &mut WizardApp, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn missing_resume_shows_fallback_link() {
    let dir = TempDir::new().unwrap();
    let model = ScoringModel::from_parts([0.5; 4], -5.0);
    let mut app = WizardApp::new(
        &model,
        Session::starting_at(Stage::Results),
        &config_for(&dir),
    );

    let screen = render_to_string(&mut app, 120, 60);
    assert!(screen.contains("View My Resume"));
    assert!(!screen.contains("Download My Resume"));
}

#[test]
fn present_resume_shows_download_control() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(RESUME_FILE_NAME), b"%PDF-1.4").unwrap();
    let model = ScoringModel::from_parts([0.5; 4], -5.0);
    let mut app = WizardApp::new(
        &model,
        Session::starting_at(Stage::Results),
        &config_for(&dir),
    );

    let screen = render_to_string(&mut app, 120, 60);
    assert!(screen.contains("Download My Resume"));
}

#[test]
fn resume_is_probed_on_every_render() {
    let dir = TempDir::new().unwrap();
    let model = ScoringModel::from_parts([0.5; 4], -5.0);
    let mut app = WizardApp::new(
        &model,
        Session::starting_at(Stage::Results),
        &config_for(&dir),
    );
    assert!(render_to_string(&mut app, 120, 60).contains("View My Resume"));

    std::fs::write(dir.path().join(RESUME_FILE_NAME), b"%PDF-1.4").unwrap();
    assert!(render_to_string(&mut app, 120, 60).contains("Download My Resume"));
}

#[test]
fn results_show_probability_and_verdict() {
    let dir = TempDir::new().unwrap();
    // Default ratings of 5: 0.5 * 20 - 5 = 5, far above the threshold
    let model = ScoringModel::from_parts([0.5; 4], -5.0);
    let mut app = WizardApp::new(
        &model,
        Session::starting_at(Stage::Results),
        &config_for(&dir),
    );

    let screen = render_to_string(&mut app, 120, 60);
    assert!(screen.contains("Match Probability"));
    assert!(screen.contains("99.3%"));
    assert!(screen.contains("Match!"));
    assert!(screen.contains("Team Vibe"));
    assert!(screen.contains("Start Over"));
}

#[test]
fn outlier_quotes_the_probability() {
    let dir = TempDir::new().unwrap();
    let model = ScoringModel::from_parts([0.0; 4], -1.0);
    let mut app = WizardApp::new(
        &model,
        Session::starting_at(Stage::Results),
        &config_for(&dir),
    );

    let screen = render_to_string(&mut app, 120, 60);
    assert!(screen.contains("Outlier?"));
    assert!(screen.contains("Wait, only 26.9%?"));
}

#[test]
fn topic_screen_shows_slider_and_progress() {
    let dir = TempDir::new().unwrap();
    let model = ScoringModel::from_parts([0.5; 4], -5.0);
    let mut app = WizardApp::new(&model, Session::starting_at(Stage::Sql), &config_for(&dir));

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("Does your team do a lot of SQL?"));
    assert!(screen.contains("Rate the need for SQL / Data Wrangling"));
    assert!(screen.contains("Next: Python Needs"));
    assert!(screen.contains("Est. time: < 2 mins"));
    assert!(screen.contains("Navigation"));
}

#[test]
fn narrow_terminal_hides_sidebar() {
    let dir = TempDir::new().unwrap();
    let model = ScoringModel::from_parts([0.5; 4], -5.0);
    let mut app = WizardApp::new(&model, Session::new(), &config_for(&dir));

    let screen = render_to_string(&mut app, 60, 40);
    assert!(!screen.contains("Navigation"));
    assert!(screen.contains("Next: Data Needs"));
}
