//! Skyfall Physics Engine
//!
//! Flight dynamics for a parachuting human body: free fall through an
//! altitude-dependent atmosphere, continuous canopy deployment, and
//! collision against a ground plane and a city of building volumes.
//!
//! # Architecture
//!
//! The engine is split into two main systems:
//!
//! - **Flight**: wind and atmosphere sampling, the canopy deployment state
//!   machine, the aerodynamic force model, and the per-tick controller
//! - **Collision**: resolves the body sphere against the ground plane and
//!   static axis-aligned building volumes
//!
//! # Design Principles
//!
//! 1. **Explicit ownership**: the caller owns body and canopy state and
//!    passes them into every call; nothing reads ambient globals
//! 2. **Determinism**: turbulence comes from a seeded generator, so equal
//!    seeds and inputs replay the same trajectory
//! 3. **No mid-frame failures**: abnormal conditions become flags or a
//!    logged reset, never errors propagated out of a tick

pub mod collision;
pub mod flight;
mod random;

// Re-export commonly used types
pub use collision::{BuildingVolume, CollisionOutcome, CollisionWorld};
pub use flight::{
    CanopyEvent, CanopyState, FlightCommand, FlightConfig, FlightController, FlightFlags,
    FlightState, TickOutcome, WindField, WindMode, WindSample,
};
pub use random::SeededRandom;
