//! Launch routing: show stored or freshly fetched remote content, or the game.

pub mod fetch;
pub mod logic;
pub mod types;

pub use fetch::*;
pub use logic::*;
pub use types::*;
