//! Canopy deployment state machine.
//!
//! Tracks how "open" the parachute is as a continuous fraction in [0, 1].
//! The fraction moves toward a commanded target at different rates for
//! opening and closing, and the derived open/closed boolean is reported as
//! an edge event exactly once per crossing, for consumers that react to
//! the chute opening or collapsing rather than to the raw fraction.

use serde::{Deserialize, Serialize};

use super::config::FlightConfig;

/// Deploy fraction above which the canopy counts as open.
///
/// The small hysteresis keeps the open flag from flickering while the
/// fraction hovers near zero during a rapid close.
pub const OPEN_THRESHOLD: f32 = 0.04;

/// Edge event fired when the canopy crosses the open threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanopyEvent {
    /// Deploy fraction rose above the open threshold.
    Opened,
    /// Deploy fraction fell back to the threshold or below.
    Closed,
}

/// Continuous canopy deployment state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CanopyState {
    /// Current openness in [0, 1].
    pub deploy: f32,

    /// Commanded openness, either 0.0 or 1.0.
    pub target: f32,

    open: bool,
}

impl CanopyState {
    /// A stowed canopy.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully deployed canopy.
    pub fn deployed() -> Self {
        Self {
            deploy: 1.0,
            target: 1.0,
            open: true,
        }
    }

    /// Whether the canopy is past the open threshold.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the commanded target between open and closed.
    ///
    /// Edge-triggered by the input layer; this is never polled.
    pub fn toggle(&mut self) {
        self.target = if self.target > 0.0 { 0.0 } else { 1.0 };
    }

    /// Command the canopy closed. Landing does this automatically.
    pub fn force_close(&mut self) {
        self.target = 0.0;
    }

    /// Return to the stowed state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the deployment by one tick of duration `dt`.
    ///
    /// `vertical_velocity` and `altitude` feed the auto-open rule: a closed,
    /// uncommanded canopy deploys on its own once the body is descending
    /// faster than 1 m/s below the configured altitude. The rule is guarded
    /// only by `target == 0` and the open flag, so a manual close while
    /// still below the threshold re-fires it as soon as the fraction drops
    /// back under the hysteresis threshold.
    ///
    /// Returns the open/close edge if this tick crossed the threshold.
    pub fn step(
        &mut self,
        config: &FlightConfig,
        vertical_velocity: f32,
        altitude: f32,
        dt: f32,
    ) -> Option<CanopyEvent> {
        if config.auto_open
            && !self.open
            && self.target == 0.0
            && vertical_velocity < -1.0
            && altitude <= config.auto_open_altitude
        {
            self.target = 1.0;
        }

        let delta = self.target - self.deploy;
        let rate = if delta > 0.0 {
            config.open_rate
        } else {
            config.close_rate
        };
        let direction = if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            0.0
        };
        self.deploy = (self.deploy + direction * rate * dt).clamp(0.0, 1.0);

        let was_open = self.open;
        self.open = self.deploy > OPEN_THRESHOLD;
        match (was_open, self.open) {
            (false, true) => Some(CanopyEvent::Opened),
            (true, false) => Some(CanopyEvent::Closed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FlightConfig {
        FlightConfig::default()
    }

    #[test]
    fn test_deploy_advances_toward_target() {
        let mut canopy = CanopyState::new();
        canopy.toggle();
        assert_eq!(canopy.target, 1.0);

        let mut last = canopy.deploy;
        for _ in 0..10 {
            canopy.step(&config(), 0.0, 1000.0, 0.01);
            assert!(canopy.deploy >= last);
            last = canopy.deploy;
        }
        // open_rate 1.8 over 0.1 s
        assert!((canopy.deploy - 0.18).abs() < 1e-5);
    }

    #[test]
    fn test_large_dt_clamps_without_overshoot() {
        let mut canopy = CanopyState::new();
        canopy.toggle();
        canopy.step(&config(), 0.0, 1000.0, 100.0);
        assert_eq!(canopy.deploy, 1.0);

        canopy.toggle();
        canopy.step(&config(), 0.0, 1000.0, 100.0);
        assert_eq!(canopy.deploy, 0.0);
    }

    #[test]
    fn test_settled_state_stays_put() {
        let mut canopy = CanopyState::new();
        // target == deploy == 0: sign(0) must not drift the fraction
        canopy.step(&config(), 0.0, 1000.0, 1.0);
        assert_eq!(canopy.deploy, 0.0);

        let mut full = CanopyState::deployed();
        full.step(&config(), 0.0, 1000.0, 1.0);
        assert_eq!(full.deploy, 1.0);
    }

    #[test]
    fn test_open_edge_fires_exactly_once() {
        let mut canopy = CanopyState::new();
        canopy.toggle();

        let mut events = Vec::new();
        for _ in 0..60 {
            if let Some(e) = canopy.step(&config(), 0.0, 1000.0, 0.01) {
                events.push((e, canopy.deploy));
            }
        }
        assert_eq!(events.len(), 1);
        let (event, deploy_at_event) = events[0];
        assert_eq!(event, CanopyEvent::Opened);
        assert!(deploy_at_event > OPEN_THRESHOLD);
        assert!(canopy.is_open());
    }

    #[test]
    fn test_close_edge_fires_once_below_threshold() {
        let mut canopy = CanopyState::deployed();
        canopy.force_close();

        let mut cfg = config();
        cfg.auto_open = false;
        let mut events = Vec::new();
        for _ in 0..60 {
            if let Some(e) = canopy.step(&cfg, -2.0, 50.0, 0.01) {
                events.push(e);
            }
        }
        assert_eq!(events, vec![CanopyEvent::Closed]);
        assert!(!canopy.is_open());
        assert_eq!(canopy.deploy, 0.0);
    }

    #[test]
    fn test_close_uses_close_rate() {
        let mut canopy = CanopyState::deployed();
        let mut cfg = config();
        cfg.auto_open = false;
        canopy.force_close();
        canopy.step(&cfg, 0.0, 1000.0, 0.1);
        // close_rate 3.0
        assert!((canopy.deploy - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_auto_open_fires_below_altitude() {
        let mut canopy = CanopyState::new();
        canopy.step(&config(), -5.0, 100.0, 0.01);
        assert_eq!(canopy.target, 1.0);
    }

    #[test]
    fn test_auto_open_requires_descent() {
        let mut canopy = CanopyState::new();
        canopy.step(&config(), -0.5, 100.0, 0.01);
        assert_eq!(canopy.target, 0.0);
        canopy.step(&config(), 2.0, 100.0, 0.01);
        assert_eq!(canopy.target, 0.0);
    }

    #[test]
    fn test_auto_open_requires_low_altitude() {
        let mut canopy = CanopyState::new();
        canopy.step(&config(), -5.0, 500.0, 0.01);
        assert_eq!(canopy.target, 0.0);
    }

    #[test]
    fn test_auto_open_disabled() {
        let mut cfg = config();
        cfg.auto_open = false;
        let mut canopy = CanopyState::new();
        canopy.step(&cfg, -5.0, 100.0, 0.01);
        assert_eq!(canopy.target, 0.0);
    }

    #[test]
    fn test_auto_open_refires_after_manual_close_below_altitude() {
        // Manual close while descending below the auto-open altitude: the
        // rule re-arms as soon as the fraction drops under the threshold.
        let mut canopy = CanopyState::deployed();
        canopy.force_close();

        let mut refired = false;
        for _ in 0..100 {
            canopy.step(&config(), -5.0, 80.0, 0.01);
            if canopy.target == 1.0 {
                refired = true;
                break;
            }
        }
        assert!(refired);
    }

    #[test]
    fn test_auto_open_does_not_refire_while_still_open() {
        // While the fraction is above the threshold the rule stays quiet,
        // even with target manually forced to zero.
        let mut canopy = CanopyState::deployed();
        canopy.force_close();
        canopy.step(&config(), -5.0, 80.0, 0.001);
        // One millisecond of closing leaves the canopy well above threshold.
        assert!(canopy.is_open());
        assert_eq!(canopy.target, 0.0);
    }
}
