// Terminal Sokoban over a boxban-format level pack.
// Controls: W/A/S/D or arrow keys move, R restarts, P/N (or [ ]) change level, Q quits.

use boxban::config::{Cli, Mode};
use boxban::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use boxban::json_export::get_json_data;
use boxban::models::GameRenderState;
use boxban::session::GameSession;
use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = setup_logging(&cli)?;

    let mut session = GameSession::new();
    if session.load_levels(&cli.levels)?.is_none() {
        return Err(format!("no levels found in {}", cli.levels.display()).into());
    }

    match cli.mode {
        Mode::Export => {
            println!("{}", get_json_data(session.pack())?);
        }
        Mode::Play => {
            session.move_to_level(cli.start_index(session.level_count())?)?;
            session.load_level()?;

            let mut terminal = setup_terminal()?;
            let result = run_interactive(&mut session, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
    }

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let dir = match cli.log_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    let file_name = cli
        .log_file
        .file_name()
        .ok_or_else(|| format!("invalid log file {}", cli.log_file.display()))?;
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!(levels = %cli.levels.display(), mode = ?cli.mode, "starting");
    Ok(guard)
}

fn run_interactive(
    session: &mut GameSession,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(terminal, &GameRenderState::from_session(session, None))?;

    loop {
        let mut solved_level = None;
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
            ConsoleInput::Move(direction) => {
                let level = session.current_level();
                let outcome = session.apply_move(direction)?;
                if outcome.completed {
                    // The session already moved on; show the next level fresh.
                    session.load_level()?;
                    solved_level = level;
                }
            }
            ConsoleInput::Restart => session.load_level()?,
            ConsoleInput::PreviousLevel => {
                session.move_previous_level()?;
                session.load_level()?;
            }
            ConsoleInput::NextLevel => {
                session.move_next_level()?;
                session.load_level()?;
            }
        }
        render_game(terminal, &GameRenderState::from_session(session, solved_level))?;
    }

    Ok(())
}
