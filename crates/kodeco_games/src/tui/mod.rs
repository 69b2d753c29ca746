//! Terminal UI: the play loop around [`App`].

mod app;
mod input;
mod ui;

pub use app::{App, Tab};
pub use input::{keypad_position, move_cursor};
pub use ui::draw;

use crate::ShellConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// Restores the terminal on exit, including when the loop fails.
#[instrument(skip(config))]
pub async fn run(config: ShellConfig) -> Result<()> {
    info!("Starting Kodeco Games TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(&config);
    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_loop<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }

        app.tick(Instant::now());
        sleep(Duration::from_millis(10)).await;
    }
}
