mod app;
mod command;
mod config;
mod consts;
mod game;
mod logger;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use ratatui::DefaultTerminal;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let (config, source) = match Config::default_path() {
        Ok(path) => {
            let config = Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?;
            (config, Some(path))
        }
        Err(e) => {
            eprintln!("gridsnake: warning: {e}; using default configuration");
            (Config::default(), None)
        }
    };
    match logger::init(&config.log) {
        Ok(Some(path)) => log::debug!("Logging to {}", path.display()),
        Ok(None) => (),
        Err(e) => eprintln!("gridsnake: warning: logging disabled: {:?}", anyhow::Error::new(e)),
    }
    log::info!("Starting gridsnake v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = source {
        log::info!("Configuration file: {}", path.display());
    }
    log::debug!("Configuration: {config:?}");
    let mut session = TerminalSession::start()?;
    App::new(Game::new(&config.grid)).run(&mut session.terminal)?;
    Ok(())
}

/// Owns the terminal while the game is on screen and puts it back the way it
/// was when dropped, including when unwinding from an error
#[derive(Debug)]
struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn start() -> io::Result<TerminalSession> {
        let terminal = ratatui::try_init()?;
        Ok(TerminalSession { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
