//! Seeded autoplay over the public `Game` facade: follow hints, reshuffle
//! when stuck.

mod action;
mod config;
mod error;
mod player;
mod trace;

pub use action::*;
pub use config::*;
pub use error::*;
pub use player::*;
pub use trace::*;
