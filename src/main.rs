use arcade::build_info;
use arcade::cli::{self, CliAction};
use arcade::config::{ArcadeConfig, LOG_ENV};
use arcade::core::Xorshift32;
use arcade::games::Dispatcher;
use arcade::hardware::Board;
use arcade::ui::{
    required_size, with_restore, KeyboardKeypad, SystemClock, TerminalDisplay, TerminalTone,
};
use arcade::ArcadeError;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log to ~/.arcade/arcade.log; the terminal belongs to the game.
fn setup_logging(config: &ArcadeConfig) -> Result<(), ArcadeError> {
    let path = ArcadeConfig::log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ArcadeError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .finish()
        .try_init()
        .map_err(|e| ArcadeError::Logging(e.to_string()))
}

/// Leave raw mode and the alternate screen. Harmless on a terminal that was
/// only partly set up.
fn restore_terminal() -> Result<(), ArcadeError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(cursor::Show)?;
    Ok(())
}

/// Take over the terminal and run the menu until the keyboard detaches.
fn run_arcade(config: &ArcadeConfig, rng: Xorshift32) -> Result<(), ArcadeError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut tui = Terminal::new(CrosstermBackend::new(stdout))?;
    tui.hide_cursor()?;

    let display = TerminalDisplay::new(
        tui,
        config.screen_width,
        config.screen_height,
        config.pixel_scale,
    );
    let mut board = Board::new(
        KeyboardKeypad::new(),
        display,
        TerminalTone::new(io::stdout(), config.sound),
        SystemClock::new(),
    );

    let mut dispatcher = Dispatcher::new(rng, config.snake_boundary);
    dispatcher.run(&mut board);
    Ok(())
}

fn main() -> Result<(), ArcadeError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match cli::parse_args(&args)? {
        CliAction::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        CliAction::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        CliAction::Run(options) => options,
    };

    let mut config = match &options.config {
        Some(path) => ArcadeConfig::load_from(path)?,
        None => ArcadeConfig::load()?,
    };
    options.apply(&mut config);
    config.validate()?;

    setup_logging(&config)?;
    info!(
        version = %build_info::version_line(),
        seed = config.seed,
        boundary = ?config.snake_boundary,
        "starting"
    );

    let rng = Xorshift32::with_seed(config.seed)?;

    let (need_cols, need_rows) =
        required_size(config.screen_width, config.screen_height, config.pixel_scale);
    if let Ok((cols, rows)) = terminal::size() {
        if cols < need_cols || rows < need_rows {
            warn!(
                cols,
                rows, need_cols, need_rows, "terminal smaller than the panel, output is clipped"
            );
        }
    }

    enable_raw_mode()?;
    with_restore(|| run_arcade(&config, rng), restore_terminal)?;

    info!("stopped");
    println!("Goodbye!");
    Ok(())
}
