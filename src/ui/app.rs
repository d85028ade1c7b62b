//! Main TUI application state and logic

use crate::config::{autoplay_interval, Command};
use crate::generators::errors::EngineError;
use crate::playback::{Player, Tick};
use crate::snapshot::{Timeline, TimelineInput};
use crate::ui::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Visual,
    Details,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (visual -> details -> log)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Visual => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Visual,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Visual => FocusedPane::Log,
            FocusedPane::Details => FocusedPane::Visual,
            FocusedPane::Log => FocusedPane::Details,
        }
    }
}

/// The main application state
pub struct App {
    /// Playback over the current timeline
    pub player: Player,

    /// Input family, parameters and random generator
    session: Session,

    /// Autoplay interval from the command line; per-algorithm default otherwise
    interval_override: Option<Duration>,

    /// Next autoplay step, if one is scheduled
    pending_tick: Option<Tick>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Build the app for a subcommand, generating its first timeline
    pub fn from_command(
        command: &Command,
        seed: Option<u64>,
        interval_override: Option<Duration>,
    ) -> Result<Self, EngineError> {
        let (session, timeline) = Session::from_command(command, seed)?;
        let interval =
            interval_override.unwrap_or_else(|| autoplay_interval(timeline.algorithm()));
        let status_message = format!("{}: {} steps", timeline.algorithm(), timeline.len());
        Ok(App {
            player: Player::new(timeline, interval),
            session,
            interval_override,
            pending_tick: None,
            focused_pane: FocusedPane::Visual,
            log_scroll: usize::MAX,
            should_quit: false,
            status_message,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.drive_autoplay(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire the pending tick when due, or schedule the next one while playing
    fn drive_autoplay(&mut self, now: Instant) {
        match self.pending_tick {
            Some(tick) if tick.is_due(now) => {
                self.pending_tick = None;
                if self.player.fire(tick) {
                    self.log_scroll = usize::MAX;
                    self.status_message = if self.player.at_end() {
                        "Playback complete".to_string()
                    } else {
                        "Playing...".to_string()
                    };
                }
            }
            Some(_) => {}
            None => self.pending_tick = self.player.schedule(now),
        }
    }

    /// Log lines: the session's operation log, then every step description up to the cursor
    fn log_lines(&self) -> Vec<String> {
        let cursor = self.player.cursor();
        self.session
            .operation_log()
            .iter()
            .cloned()
            .chain(
                self.player
                    .timeline()
                    .iter()
                    .take(cursor + 1)
                    .map(|snapshot| snapshot.description.clone()),
            )
            .collect()
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Visualization (left) | Details over Log (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let timeline = self.player.timeline();
        let snapshot = self.player.current_snapshot();
        let title = format!(" {} ", timeline.algorithm());
        let visual_focused = self.focused_pane == FocusedPane::Visual;

        match timeline.input() {
            TimelineInput::Array(_) => super::panes::render_bars_pane(
                frame,
                columns[0],
                &title,
                snapshot,
                visual_focused,
            ),
            TimelineInput::Graph(graph) => super::panes::render_graph_pane(
                frame,
                columns[0],
                &title,
                graph,
                snapshot,
                visual_focused,
            ),
            TimelineInput::Tree(tree) => super::panes::render_tree_pane(
                frame,
                columns[0],
                &title,
                tree,
                snapshot,
                visual_focused,
            ),
        }

        super::panes::render_details_pane(
            frame,
            right_rows[0],
            timeline.algorithm(),
            snapshot,
            self.focused_pane == FocusedPane::Details,
        );

        let lines = self.log_lines();
        super::panes::render_log_pane(
            frame,
            right_rows[1],
            &lines,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.player.cursor(),
            self.player.timeline().len(),
            self.player.is_playing(),
            self.session.key_hints(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.pause();
                self.status_message = if self.player.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
                self.log_scroll = usize::MAX;
            }
            KeyCode::Right => {
                self.pause();
                self.status_message = if self.player.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
                self.log_scroll = usize::MAX;
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Log {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Log {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play(Instant::now());
                }
            }
            KeyCode::Enter => {
                self.pending_tick = None;
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.pending_tick = None;
                self.player.jump_to_start();
                self.status_message = "Jumped to start".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let result = self.session.new_input().map(Some);
                self.load(result, "New input");
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let result = self.session.switch_algorithm(self.player.timeline());
                self.load(result, "Switched algorithm");
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                let timeline = self.session.cycle_order();
                self.load(Ok(timeline), "Changed traversal order");
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let timeline = self.session.delete_root();
                self.load(Ok(timeline), "Deleted root");
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self, now: Instant) {
        self.pending_tick = None;
        self.player.toggle_play();
        if self.player.is_playing() {
            // First step happens on the next loop iteration
            let interval = self.player.interval();
            self.pending_tick = self
                .player
                .schedule(now.checked_sub(interval).unwrap_or(now));
            self.status_message = "Playing...".to_string();
        } else if self.player.at_end() {
            self.status_message = "At the end; press Backspace to rewind".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    fn pause(&mut self) {
        self.pending_tick = None;
        self.player.pause();
    }

    /// Swap in a newly generated timeline, or report why there is none
    fn load(&mut self, result: Result<Option<Timeline>, EngineError>, message: &str) {
        match result {
            Ok(Some(timeline)) => {
                let interval = self
                    .interval_override
                    .unwrap_or_else(|| autoplay_interval(timeline.algorithm()));
                self.status_message = format!(
                    "{}: {} ({} steps)",
                    message,
                    timeline.algorithm(),
                    timeline.len()
                );
                self.pending_tick = None;
                self.player.set_interval(interval);
                self.player.reset(timeline);
                self.log_scroll = usize::MAX;
            }
            Ok(None) => {
                self.status_message = "Not available for this view".to_string();
            }
            Err(e) => {
                tracing::error!(error = %e, "could not generate timeline");
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Algorithm, SortAlgorithm};

    fn sort_app() -> App {
        let command = Command::Sort {
            algorithm: SortAlgorithm::Insertion,
            len: 20,
            values: vec![5, 3, 8, 1],
        };
        App::from_command(&command, Some(7), Some(Duration::from_millis(10))).unwrap()
    }

    #[test]
    fn test_toggle_fires_first_step_immediately() {
        let mut app = sort_app();
        let now = Instant::now();
        app.toggle_play(now);
        assert!(app.player.is_playing());
        app.drive_autoplay(now);
        assert_eq!(app.player.cursor(), 1);
    }

    #[test]
    fn test_pause_drops_pending_tick() {
        let mut app = sort_app();
        let now = Instant::now();
        app.toggle_play(now);
        app.toggle_play(now);
        assert!(!app.player.is_playing());
        app.drive_autoplay(now + Duration::from_secs(1));
        assert_eq!(app.player.cursor(), 0);
    }

    #[test]
    fn test_switch_algorithm_resets_playback() {
        let mut app = sort_app();
        app.player.step_forward();
        let result = app.session.switch_algorithm(app.player.timeline());
        app.load(result, "Switched algorithm");
        assert_eq!(app.player.cursor(), 0);
        assert_eq!(
            app.player.timeline().algorithm(),
            Algorithm::Sort(SortAlgorithm::Merge)
        );
    }

    #[test]
    fn test_focus_cycles() {
        let pane = FocusedPane::Visual;
        assert_eq!(pane.next().next().next(), pane);
        assert_eq!(pane.prev(), FocusedPane::Log);
    }
}
