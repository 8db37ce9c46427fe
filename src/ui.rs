// 🖥️ Terminal Shell
// Form page (inputs, unit selector, actions, result) and history page

use crate::bmi::{calculate_from_input, BmiRecord, UnitMode};
use crate::history::{self, History, HistoryView};
use crate::store::RecordStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Weight,
    Height,
    Unit,
    Calculate,
    ViewHistory,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Weight => Focus::Height,
            Focus::Height => Focus::Unit,
            Focus::Unit => Focus::Calculate,
            Focus::Calculate => Focus::ViewHistory,
            Focus::ViewHistory => Focus::Weight,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Focus::Weight => Focus::ViewHistory,
            Focus::Height => Focus::Weight,
            Focus::Unit => Focus::Height,
            Focus::Calculate => Focus::Unit,
            Focus::ViewHistory => Focus::Calculate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Error,
    Info,
}

/// Modal notice; blocks all other input until dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub kind: PopupKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Form,
    History { history: History, scroll: u16 },
}

pub struct App {
    store: Box<dyn RecordStore>,
    pub weight_input: String,
    pub height_input: String,
    /// Nothing is selected until the user picks a unit
    pub unit: Option<UnitMode>,
    pub focus: Focus,
    pub last_result: Option<BmiRecord>,
    pub popup: Option<Popup>,
    pub screen: Screen,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        App {
            store,
            weight_input: String::new(),
            height_input: String::new(),
            unit: None,
            focus: Focus::Weight,
            last_result: None,
            popup: None,
            screen: Screen::Form,
            should_quit: false,
        }
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// "Calculate BMI": validate, show, then persist
    pub fn calculate(&mut self) {
        match calculate_from_input(&self.weight_input, &self.height_input, self.unit) {
            Ok(record) => {
                tracing::info!(bmi = record.bmi, status = %record.status, "calculation accepted");
                self.last_result = Some(record);
                if let Err(err) = self.store.append(&record) {
                    tracing::error!("append failed: {:#}", err);
                    self.show_popup(PopupKind::Error, "Storage Error", format!("{:#}", err));
                }
            }
            Err(err) => {
                tracing::debug!(%err, "calculation rejected");
                self.show_popup(PopupKind::Error, "Input Error", err.to_string());
            }
        }
    }

    /// "View Historical Data"
    pub fn view_history(&mut self) {
        match history::load(self.store.as_ref()) {
            Ok(HistoryView::Empty) => {
                self.show_popup(PopupKind::Info, "No Data", "No historical data available.");
            }
            Ok(HistoryView::Records(history)) => {
                self.screen = Screen::History { history, scroll: 0 };
            }
            Err(err) => {
                tracing::error!("history load failed: {:#}", err);
                self.show_popup(PopupKind::Error, "Storage Error", format!("{:#}", err));
            }
        }
    }

    fn show_popup(&mut self, kind: PopupKind, title: &str, message: impl Into<String>) {
        self.popup = Some(Popup {
            kind,
            title: title.to_string(),
            message: message.into(),
        });
    }

    pub fn result_text(&self) -> String {
        self.last_result.map(|r| r.summary()).unwrap_or_default()
    }

    // ========================================================================
    // KEY HANDLING
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.popup = None;
            }
            return;
        }

        if let Screen::History { scroll, .. } = &mut self.screen {
            let back = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'));
            match key.code {
                KeyCode::Down => *scroll = scroll.saturating_add(1),
                KeyCode::Up => *scroll = scroll.saturating_sub(1),
                KeyCode::PageDown => *scroll = scroll.saturating_add(20),
                KeyCode::PageUp => *scroll = scroll.saturating_sub(20),
                _ => {}
            }
            if back {
                self.screen = Screen::Form;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Enter => match self.focus {
                Focus::Weight | Focus::Height | Focus::Calculate => self.calculate(),
                Focus::Unit => self.toggle_unit(),
                Focus::ViewHistory => self.view_history(),
            },
            KeyCode::Left if self.focus == Focus::Unit => self.unit = Some(UnitMode::Metric),
            KeyCode::Right if self.focus == Focus::Unit => self.unit = Some(UnitMode::Imperial),
            KeyCode::Char(' ') if self.focus == Focus::Unit => self.toggle_unit(),
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn toggle_unit(&mut self) {
        self.unit = Some(self.unit.map(|u| u.toggle()).unwrap_or(UnitMode::Metric));
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Weight => Some(&mut self.weight_input),
            Focus::Height => Some(&mut self.height_input),
            _ => None,
        }
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match &app.screen {
        Screen::Form => render_form(f, chunks[1], app),
        Screen::History { history, scroll } => render_history(f, chunks[1], history, *scroll),
    }

    render_status_bar(f, chunks[2], app);

    if let Some(popup) = &app.popup {
        render_popup(f, popup);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let page = match app.screen {
        Screen::Form => "Calculator",
        Screen::History { .. } => "Historical BMI Data",
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "BMI Calculator",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(page, Style::default().fg(Color::White)),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::White };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", title))
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(60), Constraint::Percentage(20)])
        .split(area)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Weight
            Constraint::Length(3), // Height
            Constraint::Length(3), // Unit selector
            Constraint::Length(3), // Buttons
            Constraint::Min(4),    // Result
        ])
        .split(column);

    let inputs = [
        (Focus::Weight, "Enter your weight", &app.weight_input, rows[0]),
        (Focus::Height, "Enter your height", &app.height_input, rows[1]),
    ];
    for (focus, title, value, rect) in inputs {
        let focused = app.focus == focus && app.popup.is_none();
        f.render_widget(
            Paragraph::new(value.as_str()).block(focus_block(title, focused)),
            rect,
        );
        if focused {
            f.set_cursor(rect.x + 1 + value.chars().count() as u16, rect.y + 1);
        }
    }

    let mut unit_spans = Vec::new();
    for (i, unit) in [UnitMode::Metric, UnitMode::Imperial].iter().enumerate() {
        if i > 0 {
            unit_spans.push(Span::raw("    "));
        }
        let selected = app.unit == Some(*unit);
        let mark = if selected { "(•) " } else { "( ) " };
        let style = if selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        unit_spans.push(Span::styled(format!("{}{}", mark, unit.label()), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(unit_spans))
            .block(focus_block("Measurement Type", app.focus == Focus::Unit)),
        rows[2],
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    for (focus, label, rect) in [
        (Focus::Calculate, "Calculate BMI", buttons[0]),
        (Focus::ViewHistory, "View Historical Data", buttons[1]),
    ] {
        let focused = app.focus == focus;
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        f.render_widget(
            Paragraph::new(Span::styled(label, style))
                .alignment(Alignment::Center)
                .block(focus_block("", focused)),
            rect,
        );
    }

    let result = Paragraph::new(app.result_text())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Result "));
    f.render_widget(result, rows[4]);
}

fn render_history(f: &mut Frame, area: Rect, history: &History, scroll: u16) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let table = Paragraph::new(history.render_text())
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Records ({}) ", history.len())),
        );
    f.render_widget(table, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(columns[1]);

    render_chart(f, right[0], history);

    let stats = history
        .stats()
        .lines()
        .into_iter()
        .map(Line::from)
        .collect::<Vec<_>>();
    f.render_widget(
        Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title(" Trend ")),
        right[1],
    );
}

/// Evenly spaced tick values across `bounds`
fn ticks(bounds: [f64; 2], count: usize) -> Vec<f64> {
    let step = (bounds[1] - bounds[0]) / (count - 1) as f64;
    (0..count).map(|i| bounds[0] + step * i as f64).collect()
}

fn render_chart(f: &mut Frame, area: Rect, history: &History) {
    let points = history.chart_points();
    let x_bounds = history.x_bounds();
    let y_bounds = history.y_bounds();

    let x_ticks = if history.len() > 1 {
        ticks(x_bounds, history.len().min(6))
    } else {
        vec![0.0]
    };
    let y_ticks = ticks(y_bounds, 5);

    // Grid lines at every labelled tick
    let mut grid: Vec<Vec<(f64, f64)>> = y_ticks
        .iter()
        .map(|&y| vec![(x_bounds[0], y), (x_bounds[1], y)])
        .collect();
    grid.extend(x_ticks.iter().map(|&x| vec![(x, y_bounds[0]), (x, y_bounds[1])]));

    let grid_style = Style::default().fg(Color::DarkGray);
    let mut datasets: Vec<Dataset> = grid
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(grid_style)
                .data(line)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&points),
    );
    datasets.push(
        Dataset::default()
            .name("BMI")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .data(&points),
    );

    let x_labels: Vec<Span> = x_ticks
        .iter()
        .map(|x| Span::raw(format!("{:.0}", x)))
        .collect();
    let y_labels: Vec<Span> = y_ticks
        .iter()
        .map(|y| Span::raw(format!("{:.1}", y)))
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(" BMI Trend "))
        .x_axis(
            Axis::default()
                .title("Record Number")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("BMI")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let spans = if app.popup.is_some() {
        vec![key(" Enter/Esc"), Span::raw(" Dismiss")]
    } else {
        match app.screen {
            Screen::Form => vec![
                key(" Tab/↑/↓"),
                Span::raw(" Field | "),
                key("←/→/Space"),
                Span::raw(" Unit | "),
                key("Enter"),
                Span::raw(" Activate | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" Quit"),
            ],
            Screen::History { .. } => vec![
                key(" ↑/↓"),
                Span::raw(" Scroll | "),
                key("PgUp/PgDn"),
                Span::raw(" Fast | "),
                key("Esc/q"),
                Span::raw(" Back"),
            ],
        }
    };

    let status_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_popup(f: &mut Frame, popup: &Popup) {
    let color = match popup.kind {
        PopupKind::Error => Color::Red,
        PopupKind::Info => Color::Cyan,
    };

    let area = centered_rect(60, 7, f.size());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(popup.message.as_str())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", popup.title)),
            ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CsvStore;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> (App, PathBuf) {
        let path = dir.path().join("bmi_data.csv");
        let store = CsvStore::new(&path);
        store.initialize().unwrap();
        (App::new(Box::new(store)), path)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill the form through key presses and hit Calculate
    fn submit(app: &mut App, weight: &str, height: &str, unit: UnitMode) {
        app.weight_input.clear();
        app.height_input.clear();
        app.focus = Focus::Weight;
        type_text(app, weight);
        press(app, KeyCode::Tab);
        type_text(app, height);
        press(app, KeyCode::Tab);
        press(app, if unit == UnitMode::Metric { KeyCode::Left } else { KeyCode::Right });
        press(app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Calculate);
        press(app, KeyCode::Enter);
    }

    fn data_rows(path: &PathBuf) -> usize {
        std::fs::read_to_string(path).unwrap().lines().count() - 1
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_calculate_shows_result_and_persists() {
        let dir = TempDir::new().unwrap();
        let (mut app, path) = test_app(&dir);

        submit(&mut app, "70", "1.75", UnitMode::Metric);

        assert_eq!(app.popup, None);
        assert_eq!(app.result_text(), "Your BMI is: 22.86\nWeight Status: Healthy Weight");
        assert_eq!(data_rows(&path), 1);
    }

    #[test]
    fn test_invalid_input_shows_error_and_persists_nothing() {
        let dir = TempDir::new().unwrap();
        let (mut app, path) = test_app(&dir);

        submit(&mut app, "-5", "1.8", UnitMode::Metric);

        let popup = app.popup.clone().unwrap();
        assert_eq!(popup.kind, PopupKind::Error);
        assert_eq!(popup.title, "Input Error");
        assert_eq!(popup.message, "Weight and height must be positive numbers.");
        assert_eq!(app.last_result, None);
        assert_eq!(data_rows(&path), 0);

        // Popup is modal until dismissed
        press(&mut app, KeyCode::Char('9'));
        assert!(app.popup.is_some());
        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_none());
    }

    #[test]
    fn test_missing_unit_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (mut app, path) = test_app(&dir);

        app.weight_input = "70".to_string();
        app.height_input = "1.75".to_string();
        app.calculate();

        assert_eq!(app.popup.unwrap().message, "Invalid measurement type selected.");
        assert_eq!(data_rows(&path), 0);
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (mut app, path) = test_app(&dir);

        submit(&mut app, "heavy", "1.75", UnitMode::Metric);

        assert_eq!(app.popup.unwrap().title, "Input Error");
        assert_eq!(data_rows(&path), 0);
    }

    #[test]
    fn test_unrepresentable_bmi_shows_error_and_persists_nothing() {
        let dir = TempDir::new().unwrap();
        let (mut app, path) = test_app(&dir);

        submit(&mut app, "70", "1e-200", UnitMode::Metric);

        let popup = app.popup.clone().unwrap();
        assert_eq!(popup.title, "Input Error");
        assert_eq!(popup.message, "BMI is out of range for these weight and height values.");
        assert_eq!(app.last_result, None);
        assert_eq!(data_rows(&path), 0);
    }

    #[test]
    fn test_view_history_on_empty_store_shows_notice() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = test_app(&dir);

        app.focus = Focus::ViewHistory;
        press(&mut app, KeyCode::Enter);

        let popup = app.popup.clone().unwrap();
        assert_eq!(popup.kind, PopupKind::Info);
        assert_eq!(popup.title, "No Data");
        assert_eq!(popup.message, "No historical data available.");
        assert_eq!(app.screen, Screen::Form);
    }

    #[test]
    fn test_view_history_after_three_submissions() {
        let dir = TempDir::new().unwrap();
        let (mut app, path) = test_app(&dir);

        submit(&mut app, "70", "1.75", UnitMode::Metric);
        submit(&mut app, "150", "65", UnitMode::Imperial);
        submit(&mut app, "80", "1.75", UnitMode::Metric);
        assert_eq!(data_rows(&path), 3);

        app.view_history();

        match &app.screen {
            Screen::History { history, .. } => {
                assert_eq!(history.len(), 3);
                assert_eq!(
                    history.chart_points(),
                    vec![(0.0, 22.86), (1.0, 24.96), (2.0, 26.12)]
                );
            }
            Screen::Form => panic!("expected history page"),
        }

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Form);
    }

    #[test]
    fn test_unit_selector_and_quit_keys() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = test_app(&dir);

        app.focus = Focus::Unit;
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.unit, Some(UnitMode::Metric));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.unit, Some(UnitMode::Imperial));

        // Letters typed outside an input field do nothing
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = test_app(&dir);

        type_text(&mut app, "700");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.weight_input, "70");
        assert_eq!(app.height_input, "");
    }

    #[test]
    fn test_render_both_pages() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = test_app(&dir);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        submit(&mut app, "70", "1.75", UnitMode::Metric);
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Calculate BMI"));
        assert!(text.contains("Your BMI is: 22.86"));

        app.view_history();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("BMI Trend"));
        assert!(text.contains("Healthy Weight"));
    }
}
