//! Game Logic Module
//!
//! ## Module Structure
//!
//! - `state`: Public game record
//! - `turn`: Setup and the two transitions
//! - `outcome`: Win/loss evaluation
//! - `events`: Events emitted by transitions
//! - `view`: Observable projection for viewers

pub mod state;
pub mod turn;
pub mod outcome;
pub mod events;
pub mod view;

// Re-export key types
pub use state::{Game, GameId, GameParams, GameState, Outcome, Turn};
pub use turn::{init_game, submit_guess, verify_guess, ProtocolError};
pub use outcome::evaluate_outcome;
pub use events::{GameEvent, TurnResult};
pub use view::GameView;
