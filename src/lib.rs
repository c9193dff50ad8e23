#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placer;
#[cfg(feature = "std")]
pub mod play;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
pub mod render;
pub mod resolver;
mod session;

pub use common::*;
pub use config::*;
pub use grid::{ConcealedGrid, Grid};
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level, LOG_ENV};
#[cfg(feature = "std")]
pub use play::{play_game, Ending};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::*;
