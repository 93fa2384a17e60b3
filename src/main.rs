use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use routine_score::checkpoint::Checkpoint;
use routine_score::config::ConfigArgs;
use routine_score::core::Action;
use routine_score::view::{self, Intent, Palette};
use routine_score::Session;
use std::fs::File;
use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: ConfigArgs,

    /// Write logs here instead of stderr (the TUI only logs to a file)
    #[arg(global = true, long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive scorer (default)
    Tui,
    /// Apply a sequence of actions (p = perform, d = deduct, r = reset) and print the result
    Play {
        actions: String,
        /// Print the resulting checkpoint as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a saved checkpoint and print it
    Inspect { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::Tui))?;

    let config = cli.config.resolve()?;
    let mut session = Session::new(config);

    match command {
        Commands::Tui => {
            let keep_file = restore_or_warn(&mut session);
            run_tui(&mut session)?;
            if !keep_file {
                save(&session)?;
            }
        }
        Commands::Play { actions, json } => {
            let keep_file = restore_or_warn(&mut session);
            for action in parse_actions(&actions)? {
                session.handle(action);
            }
            if json {
                println!("{}", session.checkpoint().to_json()?);
            } else {
                print_view(&session);
            }
            if !keep_file {
                save(&session)?;
            }
        }
        Commands::Inspect { file } => {
            let checkpoint = Checkpoint::load(&file)
                .with_context(|| format!("loading {}", file.display()))?;
            session
                .restore(&checkpoint)
                .with_context(|| format!("restoring {}", file.display()))?;
            println!("id: {}", checkpoint.id);
            println!("saved: {}", checkpoint.timestamp.to_rfc3339());
            print_view(&session);
        }
    }

    Ok(())
}

fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
        }
        // Anything on stderr would tear the alternate screen.
        None if interactive => {}
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}

fn parse_actions(input: &str) -> Result<Vec<Action>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match Action::from_char(c) {
            Some(action) => Ok(action),
            None => bail!("unknown action '{c}' (expected p, d or r)"),
        })
        .collect()
}

/// Returns true when the state file was rejected and must be left as is.
fn restore_or_warn(session: &mut Session) -> bool {
    match session.restore_from_state_file() {
        Ok(_) => false,
        Err(e) => {
            warn!("Ignoring saved routine: {e}");
            // The TUI has no subscriber without --log-file; say it before
            // the alternate screen is entered.
            eprintln!("warning: ignoring saved routine ({e}); the file will not be overwritten");
            true
        }
    }
}

fn save(session: &Session) -> Result<()> {
    if session.save_to_state_file()? {
        info!("routine saved");
    }
    Ok(())
}

fn print_view(session: &Session) {
    for line in session.view().text_lines() {
        println!("{line}");
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run_tui(session: &mut Session) -> Result<()> {
    let mut terminal = TerminalSession::new()?;
    let palette = Palette::default();

    loop {
        terminal.terminal.draw(|frame| {
            let area = frame.area();
            let orientation = session.orientation(area.width, area.height);
            view::draw(frame, &session.view(), orientation, &palette);
        })?;

        if !event::poll(INPUT_POLL_TIMEOUT)? {
            continue;
        }
        // Resize events just fall through to the next redraw.
        if let Event::Key(key) = event::read()? {
            match view::map_key(key) {
                Some(Intent::Quit) => break,
                Some(Intent::Act(action)) => {
                    session.handle(action);
                }
                None => {}
            }
        }
    }

    Ok(())
}
