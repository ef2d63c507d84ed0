//! Level simulation module
//!
//! All gameplay logic lives here:
//! - Phase transitions (start, play, fail, win, restart)
//! - Level attempts and progression through the catalog
//! - Ship movement and sequential waypoint connection
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod connect;
pub mod levels;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use clock::{FrameClock, advance_frame};
pub use connect::{Connection, check_connection};
pub use levels::{LevelCatalog, LevelDefinition};
pub use state::{GameEvent, GamePhase, GameState, LevelRuntime, Ship, Thrust, Waypoint};
pub use tick::{TickInput, complete_level, restart, start_game, tick};
