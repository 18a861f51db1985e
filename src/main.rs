mod app;
mod checker;
mod config;
mod game;
mod level;
mod logging;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use app::App;
use config::Cli;
use game::{Game, Ticker};
use level::{embedded_catalog, load_catalog};

const TICK_PERIOD: Duration = Duration::from_secs(1);
const INPUT_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let catalog = match &cli.levels {
        Some(dir) => load_catalog(dir)
            .with_context(|| format!("failed to load levels from {}", dir.display()))?,
        None => embedded_catalog().context("built-in levels are invalid")?,
    };
    for level in catalog.iter() {
        debug!(number = level.meta.number, title = %level.meta.title, "level_registered");
    }
    info!(levels = catalog.len(), round_seconds = cli.round_seconds, "catalog_loaded");

    let mut app = App::new(Game::new(catalog, cli.rules()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if app.is_playing() {
        let state = app.game.state();
        println!(
            "\nThanks for playing! Final score: {} points, {} hints used.\n",
            state.points, state.hints_used
        );
    }
    info!("shutdown");

    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Lives for the whole loop; dropping it stops the countdown thread.
    let ticker = Ticker::start(TICK_PERIOD);

    loop {
        terminal.draw(|f| ui::draw_ui(f, app))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        for _ in 0..ticker.drain() {
            app.on_tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
