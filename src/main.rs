use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cheesse::core::{load_or_default, save_settings, settings_path, CorePlugin};
use cheesse::game::events::{GameCommand, MoveAttempt};
use cheesse::game::resources::GameOverState;
use cheesse::game::system_sets::GameSystems;
use cheesse::game::systems::handle_game_commands;
use cheesse::game::GamePlugin;
use cheesse::ui::{parse_line, result_line, ClockView, ConsoleCommand, MoveListView, HELP};

const FRAME_TIME: Duration = Duration::from_millis(16);

/// Terminal chess with undo/redo and chess clocks
#[derive(Parser, Debug)]
#[command(name = "cheesse", version)]
struct Args {
    /// Settings file (defaults to the user configuration directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time control for the first game in seconds, 0 for untimed
    #[arg(long)]
    timer: Option<u32>,

    /// Log filter, e.g. `debug` or `cheesse=trace` (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    write_config: bool,
}

/// Lines read from stdin by the reader thread
#[derive(Resource)]
struct ConsoleInput(Receiver<String>);

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut settings = load_or_default(args.config.as_deref());
    if let Some(timer) = args.timer {
        settings.default_timer = Some(timer);
    }

    if args.write_config {
        let path = args.config.clone().unwrap_or_else(settings_path);
        save_settings(&path, &settings)?;
    }

    let (sender, receiver) = crossbeam_channel::unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });

    println!("{HELP}");

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_TIME)))
        .add_plugins(CorePlugin::new(settings.clone()))
        .add_plugins(GamePlugin::from_settings(&settings))
        .insert_resource(ConsoleInput(receiver))
        .add_systems(
            Update,
            read_console
                .in_set(GameSystems::Input)
                .before(handle_game_commands),
        )
        .add_systems(
            Update,
            (
                print_move_list.run_if(resource_changed::<MoveListView>),
                announce_result.run_if(resource_changed::<GameOverState>),
            )
                .after(GameSystems::Views),
        )
        .run();

    Ok(())
}

/// Turn pending console lines into game messages
fn read_console(
    input: Res<ConsoleInput>,
    moves_view: Res<MoveListView>,
    clock_view: Res<ClockView>,
    mut moves: MessageWriter<MoveAttempt>,
    mut game_commands: MessageWriter<GameCommand>,
    mut exit: MessageWriter<AppExit>,
) {
    loop {
        let line = match input.0.try_recv() {
            Ok(line) => line,
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                exit.write(AppExit::Success);
                break;
            }
        };

        match parse_line(&line) {
            Ok(Some(ConsoleCommand::Move(attempt))) => {
                moves.write(attempt);
            }
            Ok(Some(ConsoleCommand::Game(command))) => {
                game_commands.write(command);
            }
            Ok(Some(ConsoleCommand::ShowMoves)) => print_lines(&moves_view),
            Ok(Some(ConsoleCommand::ShowClock)) => println!("{}", clock_view.status_line()),
            Ok(Some(ConsoleCommand::Help)) => println!("{HELP}"),
            Ok(Some(ConsoleCommand::Quit)) => {
                exit.write(AppExit::Success);
                break;
            }
            Ok(None) => {}
            Err(e) => warn!("[GAME] {}", e),
        }
    }
}

fn print_lines(view: &MoveListView) {
    if view.is_empty() {
        println!("(no moves)");
    } else {
        println!("{}", view.lines().join("  "));
    }
}

fn print_move_list(view: Res<MoveListView>, clock_view: Res<ClockView>) {
    print_lines(&view);
    println!("{}", clock_view.status_line());
}

fn announce_result(game_over: Res<GameOverState>) {
    if let Some(line) = result_line(&game_over) {
        println!("{line}");
    }
}
