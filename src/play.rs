#![cfg(feature = "std")]

//! Console game loop shared by the interactive binary and the simulator.

use std::io::Write;

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    common::{GameError, TurnOutcome},
    player::{Command, Player},
    render::render_labeled,
    session::GameSession,
};

/// How a call to [`play_game`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Ending {
    /// Every ship was found.
    Won,
    /// The player asked for a fresh game.
    Restart,
    Quit,
}

/// Run `session` until it is won or the player leaves.
///
/// Out-of-bounds shots are reported and the player is asked again; they never
/// end the game.
pub fn play_game<P, W>(
    session: &mut GameSession,
    player: &mut P,
    rng: &mut SmallRng,
    out: &mut W,
) -> anyhow::Result<Ending>
where
    P: Player + ?Sized,
    W: Write,
{
    while !session.is_won() {
        let progress = session.progress();
        writeln!(out, "Grid:")?;
        writeln!(out, "{}", render_labeled(session.grid()))?;
        writeln!(
            out,
            "Shots: {} | Hits: {}/{}",
            progress.shots, progress.hits, progress.ship_count
        )?;

        match player.next_command(rng, session.grid().concealed()) {
            Command::Retry => match player.confirm("Do you really want to restart the game?") {
                Some(true) => return Ok(Ending::Restart),
                Some(false) => continue,
                None => return Ok(Ending::Quit),
            },
            Command::Exit => match player.confirm("Do you really want to quit the game?") {
                Some(false) => continue,
                Some(true) | None => {
                    writeln!(out, "Thanks for playing! Goodbye!")?;
                    return Ok(Ending::Quit);
                }
            },
            Command::Fire(coord) => match session.fire(coord) {
                Ok(report) => {
                    player.handle_turn(coord, &report);
                    let message = match report.outcome {
                        TurnOutcome::Hit => "Hit!",
                        TurnOutcome::Miss => "Miss!",
                        TurnOutcome::AlreadyPlayed => "You already fired there. Try again.",
                    };
                    writeln!(out, "{}", message)?;
                }
                Err(e @ GameError::OutOfBounds { .. }) => {
                    warn!("rejected shot at {}: {}", coord, e);
                    writeln!(out, "{}. Try again.", e)?;
                }
                Err(e) => return Err(e.into()),
            },
        }
    }

    let progress = session.progress();
    writeln!(
        out,
        "\nCongratulations! You found all {} ships in {} shots!",
        progress.ship_count, progress.shots
    )?;
    writeln!(out, "{}", render_labeled(session.grid()))?;
    Ok(Ending::Won)
}
