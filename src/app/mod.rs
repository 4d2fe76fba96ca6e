//! Application shell and event loop

pub mod input;
pub mod intent;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::feedback::Feedback;
use crate::quote::Deck;
use crate::theme::Theme;
use crate::ui::{self, layout::ScreenLayout};
use intent::Intent;
use state::ViewState;

/// How long a tapped control shows its pressed style
const PRESS_FEEDBACK: Duration = Duration::from_millis(120);

/// The main application
pub struct App {
    /// Quotes being browsed
    deck: Deck,

    /// Current view state
    state: ViewState,

    /// Resolved color theme
    theme: Theme,

    /// Tactile feedback sink
    feedback: Box<dyn Feedback>,

    /// Control showing pressed feedback, and when it was tapped
    pressed: Option<(Intent, Instant)>,

    /// Favorites entries scrolled off the top of the list
    favorites_scroll: usize,

    /// Layout from the last frame, for mouse hit-testing
    layout: Option<ScreenLayout>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &Config, deck: Deck) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let theme = config.active_theme();
        tracing::info!(theme = %theme.name, quotes = deck.len(), "Starting");

        Ok(Self {
            deck,
            state: ViewState::new(),
            theme,
            feedback: config.feedback.build(),
            pressed: None,
            favorites_scroll: 0,
            layout: None,
            terminal,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Clear pressed feedback once it has been visible long enough
            self.pressed = live_press(self.pressed, Instant::now());

            // Draw UI
            let pressed = self.pressed.map(|(intent, _)| intent);
            let scroll = self.favorites_scroll;
            let mut drawn = None;
            self.terminal.draw(|frame| {
                let (state, deck, theme) = (&self.state, &self.deck, &self.theme);
                drawn = Some(ui::draw(frame, state, deck, theme, pressed, scroll));
            })?;
            // Adopt the clamped offset
            if let Some(layout) = &drawn {
                self.favorites_scroll = layout.favorites_offset;
            }
            self.layout = drawn;

            // Handle events
            if !log_input_error(event::poll(Duration::from_millis(16))).unwrap_or(false) {
                continue;
            }
            let Some(event) = log_input_error(event::read()) else {
                continue;
            };

            let intent = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(scroll) = input::key_to_scroll(key.code) {
                        self.favorites_scroll = scroll.apply(self.favorites_scroll);
                    }
                    self.key_intent(key)
                }
                Event::Mouse(mouse) => {
                    if let Some(scroll) = input::mouse_to_scroll(mouse) {
                        self.favorites_scroll = scroll.apply(self.favorites_scroll);
                    }
                    self.layout.as_ref().and_then(|layout| input::mouse_to_intent(mouse, layout))
                }
                _ => None,
            };

            if let Some(intent) = intent {
                if !self.handle_intent(intent) {
                    break;
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Map a key press to an intent against the current state
    fn key_intent(&self, key: KeyEvent) -> Option<Intent> {
        input::key_with_modifier_to_action(key.code, key.modifiers)
            .and_then(|action| action.resolve(&self.state, &self.deck))
    }

    /// Apply an intent, returns false if should exit
    fn handle_intent(&mut self, intent: Intent) -> bool {
        let keep_running =
            intent::dispatch(&mut self.state, &self.deck, intent, self.feedback.as_ref());
        if keep_running {
            self.pressed = Some((intent, Instant::now()));
        }
        keep_running
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Pressed feedback that is still within its display window at `now`
fn live_press(pressed: Option<(Intent, Instant)>, now: Instant) -> Option<(Intent, Instant)> {
    pressed.filter(|(_, at)| now.saturating_duration_since(*at) < PRESS_FEEDBACK)
}

/// Log a failed terminal read and carry on without an event
fn log_input_error<T>(result: io::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Error reading input: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_stays_visible_inside_window() {
        let at = Instant::now();
        let pressed = Some((Intent::Next, at));

        assert_eq!(live_press(pressed, at), pressed);
        assert_eq!(live_press(pressed, at + Duration::from_millis(119)), pressed);
    }

    #[test]
    fn press_clears_after_window() {
        let at = Instant::now();
        let pressed = Some((Intent::ToggleFavorite, at));

        assert_eq!(live_press(pressed, at + PRESS_FEEDBACK), None);
        assert_eq!(live_press(pressed, at + Duration::from_millis(200)), None);
        assert_eq!(live_press(None, at), None);
    }

    #[test]
    fn input_errors_become_no_event() {
        let failed: io::Result<bool> = Err(io::Error::other("terminal went away"));
        assert_eq!(log_input_error(failed), None);
        assert_eq!(log_input_error(Ok(true)), Some(true));
    }
}
