//! Skyfall game layer.
//!
//! Sits between raw input and the physics core:
//!
//! ```text
//! PlayerInput -> FlightCommand -> FlightController -> FlightState
//!      |                                                  |
//!   input.rs        simulation.rs drives the loop      telemetry()
//! ```
//!
//! - [`input`]: key/axis state and camera-relative command mapping
//! - [`player`]: the diver entity and its lifetime stats
//! - [`level`]: collision worlds and launch points, including a
//!   deterministic city fixture
//! - [`simulation`]: the per-frame driver, vehicle attachment, and HUD
//!   telemetry

pub mod input;
pub mod level;
pub mod player;
pub mod simulation;

pub use input::{MovementKeys, PlayerInput};
pub use level::{LaunchPoint, Level};
pub use player::{Diver, EntityId};
pub use simulation::{Simulation, SimulationConfig, Telemetry};

// Physics types that appear in this crate's public API.
pub use skyfall_physics::{FlightConfig, FlightState, TickOutcome};
