//! Crescent solitaire rules engine. Keep this crate free of IO and platform
//! concerns; presentation calls in and applies the answers.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod foundation;
pub mod game;
pub mod layout;
pub mod rng;
pub mod rules;
pub mod state;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use foundation::*;
pub use game::*;
pub use layout::*;
pub use rng::*;
pub use rules::*;
pub use state::*;
