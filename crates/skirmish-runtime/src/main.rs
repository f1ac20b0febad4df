//! Headless demo driver.
//!
//! Runs a short scripted duel on the builtin board (or on a map document
//! passed as the first argument) and prints what the engine publishes.

use std::path::Path;
use std::time::Duration;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::types::GridCell;
use skirmish_map::load_map;
use skirmish_runtime::sim::preset;
use skirmish_runtime::SkirmishSession;

fn main() {
    if let Err(message) = run() {
        eprintln!("skirmish-runtime: {message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut config = preset::duel_match();
    if let Some(path) = std::env::args().nth(1) {
        let doc = load_map(Path::new(&path)).map_err(|e| e.to_string())?;
        config.layout = doc.layout();
    }
    let board = config.layout.name.clone();

    let session = SkirmishSession::new();
    session.start(config)?;
    session.send(PlayerCommand::StartSkirmish)?;
    println!("Skirmish on {board}");

    let script = [
        PlayerCommand::Move {
            target: GridCell::new(2, 4),
        },
        PlayerCommand::Move {
            target: GridCell::new(2, 3),
        },
        PlayerCommand::Scout,
    ];
    for command in script {
        session.send(command)?;
        // Leave room for the automated turn before the next order
        std::thread::sleep(Duration::from_millis(1200));
        report(&session)?;
    }

    if let Some(snapshot) = session.snapshot()? {
        let units = serde_json::to_string_pretty(&snapshot.units).map_err(|e| e.to_string())?;
        println!("{units}");
    }
    session.shutdown()
}

fn report(session: &SkirmishSession) -> Result<(), String> {
    let Some(snapshot) = session.snapshot()? else {
        return Ok(());
    };
    let newest = snapshot
        .announcements
        .first()
        .map(String::as_str)
        .unwrap_or("(quiet)");
    println!(
        "turn {:>2} | {:>6.2}s | {newest}",
        snapshot.turn.number, snapshot.time.elapsed_secs
    );
    Ok(())
}
