//! Flight dynamics system.
//!
//! This module implements the parachute flight model:
//!
//! - Wind and altitude-dependent atmosphere sampling
//! - Canopy deployment with rate-limited transitions and auto-open
//! - Drag, lift, glide, and steering forces blended by deploy fraction
//! - A per-tick controller that integrates the body and resolves contacts
//!
//! # Design
//!
//! The tick is driven by the [`FlightController`], which takes an input
//! command and advances the diver's [`FlightState`] and [`CanopyState`]
//! through the collision world. State is owned by the caller and passed in
//! explicitly; no component reaches into shared ambient state.

mod canopy;
mod config;
mod controller;
mod forces;
mod state;
mod wind;

pub use canopy::{CanopyEvent, CanopyState, OPEN_THRESHOLD};
pub use config::FlightConfig;
pub use controller::{FlightController, TickOutcome};
pub use forces::apply_aero_forces;
pub use state::{FlightCommand, FlightFlags, FlightState};
pub use wind::{WindField, WindMode, WindSample, MIN_AIR_DENSITY};
