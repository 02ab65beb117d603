//! Play command implementation - Interactive TUI game.

use super::output::{drop_message, report_lines, shout, turn_lines};
use super::{load_catalog, CliError};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use medbox::{Advance, Outcome, Playthrough, Session, Step};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the TUI fails, or the
/// playthrough cannot be saved.
pub(crate) fn execute(catalog: Option<PathBuf>, record: Option<PathBuf>) -> Result<(), CliError> {
    let catalog = load_catalog(catalog.as_deref())?;
    let mut app = App::new(Session::new(catalog));

    run_tui(&mut app)?;

    if let Some(path) = record {
        app.recorder.finished().save(&path)?;
        let state = app.session.state();
        println!(
            "{}",
            saved_message(&path, state.history().len(), state.scenario_count())
        );
    }

    Ok(())
}

/// Confirmation printed after `--record`, noting scenarios left unplayed.
fn saved_message(path: &Path, played: usize, total: usize) -> String {
    if played < total {
        format!(
            "Playthrough saved to: {} ({played} of {total} scenarios played; \
             the rest replay with an empty box)",
            path.display()
        )
    } else {
        format!("Playthrough saved to: {}", path.display())
    }
}

/// App state for the TUI.
struct App {
    session: Session,
    selected: usize,
    message: String,
    recorder: Playthrough,
}

impl App {
    fn new(session: Session) -> Self {
        let message = session.current_scenario().map_or_else(String::new, |s| {
            format!("Player 1's turn. Scenario: {}!", shout(s.disaster))
        });
        Self {
            session,
            selected: 0,
            message,
            recorder: Playthrough::new(),
        }
    }

    fn available_count(&self) -> usize {
        self.session.available_items().count()
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.available_count() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.available_count().saturating_sub(1));
    }

    fn drop_selected(&mut self) {
        let Some(name) = self
            .session
            .available_items()
            .nth(self.selected)
            .map(|item| item.name.clone())
        else {
            return;
        };

        match self.session.on_item_dropped(&name) {
            Ok(placement) => {
                if let Some(scenario) = self.session.current_scenario() {
                    self.message = drop_message(&placement, scenario.disaster);
                }
                self.recorder.record_drop(name);
                self.clamp_selection();
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    /// The single "next" button, as on the original game page.
    fn press_next(&mut self) {
        if self.session.is_game_over() {
            self.restart();
            return;
        }

        match self.session.next_step() {
            Ok(Step::Scored(_)) => {
                self.message = "Turn scored. Review your results.".to_string();
            }
            Ok(Step::Advanced(Advance::Next(scenario))) => {
                self.recorder.end_turn();
                self.selected = 0;
                self.message = format!(
                    "Player {}'s turn. NEW Scenario: {}!",
                    self.session.state().current_index() + 1,
                    shout(scenario.disaster)
                );
            }
            Ok(Step::Advanced(Advance::GameOver)) => {
                self.recorder.end_turn();
                self.message = "All scenarios complete! Total Score:".to_string();
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    fn restart(&mut self) {
        self.session.restart();
        self.recorder = Playthrough::new();
        self.selected = 0;
        self.message = "Game restarted.".to_string();
    }

    fn next_label(&self) -> String {
        if self.session.is_game_over() {
            return "Restart Game".to_string();
        }
        match (self.session.current_scenario(), self.session.current_result()) {
            (Some(scenario), None) => format!("End {} Turn and Show Score", scenario.disaster),
            _ if self.session.state().has_next() => "Next Disaster Scenario".to_string(),
            _ => "View Final Results".to_string(),
        }
    }
}

fn run_tui(app: &mut App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter | KeyCode::Char(' ') => app.drop_selected(),
                KeyCode::Char('n') => app.press_next(),
                KeyCode::Char('r') => app.restart(),
                _ => {}
            }
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(chunks[1]);

    render_equipment(f, main_chunks[0], app);
    render_medical_box(f, main_chunks[1], app);
    render_score(f, main_chunks[2], app);

    let message = Paragraph::new(app.message.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[2]);

    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let state = app.session.state();
    let title = match state.current_scenario() {
        Some(scenario) => format!(
            " Medbox | Scenario {}/{} | {} ",
            state.current_index() + 1,
            state.scenario_count(),
            scenario.name
        ),
        None => " Medbox | GAME OVER ".to_string(),
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_equipment(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .session
        .available_items()
        .map(|item| ListItem::new(item.name.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Equipment "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_medical_box(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .session
        .placements()
        .iter()
        .map(|placement| {
            let (mark, color) = match placement.outcome {
                Outcome::Correct => ("+", Color::Green),
                Outcome::WrongScenario => ("-", Color::Red),
                Outcome::Irrelevant => ("x", Color::DarkGray),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{mark} "), Style::default().fg(color)),
                Span::raw(placement.item.name.as_str()),
            ]))
        })
        .collect();

    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Medical Box "));
    f.render_widget(list, area);
}

fn render_score(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = if let Some(report) = app.session.final_report() {
        let mut lines = vec![Line::styled(
            "FINAL GAME RESULTS",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        lines.extend(report_lines(&report).into_iter().map(Line::from));
        lines
    } else if let Some(result) = app.session.current_result() {
        turn_lines(result).into_iter().map(Line::from).collect()
    } else {
        vec![Line::from(
            "Drop the essentials into the medical box, then end the turn.",
        )]
    };

    let score = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Score "))
        .wrap(Wrap { trim: false });

    f.render_widget(score, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.session.is_game_over() {
        format!(" [q] Quit  [n] {} ", app.next_label())
    } else {
        format!(
            " [q] Quit  [↑/↓] Select  [Enter] Drop  [n] {}  [r] Restart ",
            app.next_label()
        )
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use medbox::Catalog;

    #[test]
    fn test_app_drop_and_next() {
        let mut app = App::new(Session::new(Catalog::standard()));
        assert_eq!(app.next_label(), "End earthquake Turn and Show Score");

        // First item in the standard catalog is the Splint
        app.drop_selected();
        assert!(app.message.contains("CORRECT"));
        assert_eq!(app.session.placements().len(), 1);

        app.press_next();
        assert!(app.session.current_result().is_some());
        assert_eq!(app.next_label(), "Next Disaster Scenario");

        app.press_next();
        assert!(app.message.contains("NEW Scenario: FLOOD"));
        assert_eq!(app.recorder.turns, vec![vec!["Splint".to_string()], Vec::new()]);
    }

    #[test]
    fn test_app_restart_after_game_over() {
        let mut app = App::new(Session::new(Catalog::standard()));
        while !app.session.is_game_over() {
            app.press_next();
        }
        assert_eq!(app.next_label(), "Restart Game");

        app.press_next();
        assert!(!app.session.is_game_over());
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_saved_message_notes_unplayed_scenarios() {
        let path = Path::new("game.json");
        assert_eq!(
            saved_message(path, 2, 6),
            "Playthrough saved to: game.json (2 of 6 scenarios played; \
             the rest replay with an empty box)"
        );
        assert_eq!(saved_message(path, 6, 6), "Playthrough saved to: game.json");
    }

    #[test]
    fn test_selection_clamped_after_drop() {
        let mut app = App::new(Session::new(Catalog::standard()));
        let last = app.available_count() - 1;
        for _ in 0..last {
            app.select_next();
        }
        assert_eq!(app.selected, last);

        app.drop_selected();
        assert_eq!(app.selected, last - 1);
    }
}
