//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform
//! dependencies: collaborators react to `GameEvent`s instead.

pub mod ambience;
pub mod ball;
pub mod ground;
pub mod state;
pub mod tick;

pub use ambience::{AmbienceClock, should_start_music};
pub use ball::{Ball, JumpStage};
pub use ground::GroundScroller;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, apply_input, tick};
