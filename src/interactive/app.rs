//! TUI application state and logic

use crate::game::{Game, SessionState, select_random};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Margin, Position, Rect},
    style::Color,
};
use std::f64::consts::PI;
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Redraw interval while idle
pub const TICK: Duration = Duration::from_millis(33);

/// How long an error message stays on screen
pub const ERROR_TTL: Duration = Duration::from_secs(4);

const MAX_MESSAGES: usize = 5;
const CONFETTI_COUNT: usize = 140;
const CONFETTI_GRAVITY: f64 = 1.4;
const CONFETTI_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];
const CONFETTI_GLYPHS: [char; 4] = ['*', '•', '◆', '▪'];

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub messages: Vec<Message>,
    pub confetti: Vec<Particle>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Where the suggestion list was last drawn, borders included
    pub suggestions_area: Rect,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    /// Time left before the message disappears; `None` keeps it
    pub ttl: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// One confetti piece, positioned in fractions of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    life: f64,
    pub color: Color,
    pub glyph: char,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        Self::with_rng(game, StdRng::from_os_rng())
    }

    /// Create the app with a specific random source for restarts and confetti
    #[must_use]
    pub fn with_rng(game: Game<'a>, rng: StdRng) -> Self {
        let budget = game.session().budget();
        let mut app = Self {
            game,
            messages: Vec::new(),
            confetti: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            suggestions_area: Rect::default(),
            rng,
        };
        app.add_message(
            &format!("Guess the country in {budget} tries. Type to search."),
            MessageStyle::Info,
        );
        app
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.session().is_over() {
            match key.code {
                KeyCode::Char(' ' | 'n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let page = self.game.navigator().window_size() as isize;
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.game.pop_char(),
            KeyCode::Esc => self.game.clear_query(),
            KeyCode::Up => self.game.move_selection(-1),
            KeyCode::Down => self.game.move_selection(1),
            KeyCode::PageUp => self.game.scroll(-page),
            KeyCode::PageDown => self.game.scroll(page),
            KeyCode::Char(c) if !c.is_control() => self.game.push_char(c),
            _ => {}
        }
    }

    /// Mouse wheel scrolls the suggestion window; a left click guesses the
    /// suggestion under the pointer
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.game.scroll(-1),
            MouseEventKind::ScrollDown => self.game.scroll(1),
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.game.session().is_over()
                    && let Some(row) = self.suggestion_row(mouse.column, mouse.row)
                    && self.game.highlight_visible(row)
                {
                    self.submit();
                }
            }
            _ => {}
        }
    }

    /// Visible suggestion row at a screen position, if it is inside the list
    fn suggestion_row(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.suggestions_area.inner(Margin::new(1, 1));
        inner
            .contains(Position::new(column, row))
            .then(|| usize::from(row - inner.y))
    }

    pub fn submit(&mut self) {
        match self.game.submit() {
            Ok(None | Some(SessionState::InProgress)) => {}
            Ok(Some(SessionState::Won)) => {
                self.stats.games_played += 1;
                self.stats.games_won += 1;
                let count = self.game.session().guesses().len();
                let celebration = match count {
                    1 => "🎯 First try! Extraordinary!".to_string(),
                    _ => format!("🎉 Solved in {count} guesses!"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press Space for a new game or q to quit.", MessageStyle::Info);
                self.spawn_confetti();
            }
            Ok(Some(SessionState::Lost)) => {
                self.stats.games_played += 1;
                let target = &self.game.session().target().name;
                self.add_message(&format!("Out of guesses! It was {target}."), MessageStyle::Error);
                self.add_message("Press Space for a new game or q to quit.", MessageStyle::Info);
            }
            Err(err) => self.add_timed_message(&err.to_string(), MessageStyle::Error, ERROR_TTL),
        }
    }

    /// Start over against a random country
    pub fn new_game(&mut self) {
        let target = select_random(self.game.catalog(), &mut self.rng);
        debug!(country = %target.name, "new practice game");
        self.game.restart(target);
        self.messages.clear();
        self.confetti.clear();
        self.add_message("New game started! Guessing a random country.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.push_message(Message {
            text: text.to_string(),
            style,
            ttl: None,
        });
    }

    /// Add a message that disappears after `ttl`
    pub fn add_timed_message(&mut self, text: &str, style: MessageStyle, ttl: Duration) {
        self.push_message(Message {
            text: text.to_string(),
            style,
            ttl: Some(ttl),
        });
    }

    fn push_message(&mut self, message: Message) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Advance timers and animation by `dt`
    pub fn tick(&mut self, dt: Duration) {
        self.messages.retain_mut(|message| match message.ttl.as_mut() {
            Some(ttl) => {
                *ttl = ttl.saturating_sub(dt);
                !ttl.is_zero()
            }
            None => true,
        });

        let dt = dt.as_secs_f64();
        for particle in &mut self.confetti {
            particle.vy += CONFETTI_GRAVITY * dt;
            particle.x += particle.vx * dt;
            particle.y += particle.vy * dt;
            particle.life -= dt;
        }
        self.confetti
            .retain(|particle| particle.life > 0.0 && particle.y < 1.05);
    }

    /// Burst of confetti from the top centre of the screen
    pub fn spawn_confetti(&mut self) {
        for _ in 0..CONFETTI_COUNT {
            let angle = self.rng.random_range(-PI..0.0);
            let speed = self.rng.random_range(0.3..0.8);
            self.confetti.push(Particle {
                x: 0.5 + self.rng.random_range(-0.1..0.1),
                y: 0.15,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                life: self.rng.random_range(1.2..2.0),
                color: CONFETTI_COLORS[self.rng.random_range(0..CONFETTI_COLORS.len())],
                glyph: CONFETTI_GLYPHS[self.rng.random_range(0..CONFETTI_GLYPHS.len())],
            });
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let area = terminal.draw(|f| super::rendering::ui(f, &app))?.area;
        app.suggestions_area =
            super::rendering::suggestions_area(area, app.game.navigator().window_size());

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK {
            app.tick(last_tick.elapsed());
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
