//! Interactive catalog browser.

mod render;
pub mod state;

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use holocron_core::{FilmSource, SwapiClient, source};
use holocron_model::MovieRecord;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use self::state::{BrowserState, Message, message_for_key};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type FetchResult = source::Result<Vec<MovieRecord>>;

/// Source of terminal events so tests can drive the browser without a tty.
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

#[derive(Debug)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Replays a fixed list of events and fails once they run out.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Option<Event>>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().map(Some).collect(),
        }
    }

    /// Queue a poll that times out without input.
    pub fn idle(mut self) -> Self {
        self.events.push_back(None);
        self
    }

    pub fn then(mut self, event: Event) -> Self {
        self.events.push_back(Some(event));
        self
    }
}

impl EventSource for ScriptedEvents {
    fn next(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow!("scripted browser input exhausted before quit"))
    }
}

/// Run the browser on the real terminal until the user quits.
///
/// The film list is fetched on `runtime` while the UI keeps accepting input.
pub fn run(client: SwapiClient, runtime: &Handle) -> Result<()> {
    let (tx, rx) = oneshot::channel();
    runtime.spawn(async move {
        let fetched = client.fetch_films().await;
        let _ = tx.send(fetched);
    });

    enable_raw_mode()?;
    let mut terminal = with_rollback(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;

    let result = run_loop(&mut terminal, &mut CrosstermEventSource, rx);

    restore(&mut terminal)?;
    result.map(|_| ())
}

/// Run `setup`, calling `undo` before returning its error.
fn with_rollback<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| undo())
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, deliver the fetch result once it arrives, and dispatch input until
/// quit. Returns the final state.
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    events: &mut dyn EventSource,
    mut films: oneshot::Receiver<FetchResult>,
) -> Result<BrowserState> {
    let mut state = BrowserState::new();
    let mut pending = true;

    loop {
        if pending {
            match films.try_recv() {
                Ok(fetched) => {
                    state.update(Message::FilmsLoaded(fetched));
                    pending = false;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    tracing::error!("film fetch task ended without a result");
                    pending = false;
                }
            }
        }

        terminal.draw(|f| render::render(f, &state))?;

        if let Some(Event::Key(key)) = events.next(POLL_INTERVAL)?
            && let Some(message) = message_for_key(state.mode, key)
        {
            state.update(message);
        }

        if state.should_quit {
            return Ok(state);
        }
    }
}
