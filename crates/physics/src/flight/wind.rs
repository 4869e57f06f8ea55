//! Wind and atmosphere sampling.
//!
//! Both wind and air density are pure functions of simulation time and
//! height, so samples are fully reproducible and nothing here holds state.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Air density never drops below this floor (kg/m³), so drag never
/// degenerates to zero at extreme altitude.
pub const MIN_AIR_DENSITY: f32 = 0.3;

/// Wind generation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindMode {
    /// A fixed configured vector.
    Steady,
    /// A deterministic quasi-periodic gust pattern.
    #[default]
    Dynamic,
}

/// A wind reading taken at a specific simulation time.
///
/// The vector is horizontal: `velocity.y` is always zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindSample {
    /// Wind velocity in world space (m/s).
    pub velocity: Vec3,

    /// Simulation time the sample was taken at (seconds).
    pub time: f32,
}

/// Produces wind vectors and altitude-dependent air density.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindField {
    /// Wind generation mode.
    pub mode: WindMode,

    /// Steady-mode wind, X component (m/s).
    pub steady_x: f32,

    /// Steady-mode wind, Z component (m/s).
    pub steady_z: f32,

    /// Air density at sea level (kg/m³).
    pub sea_level_density: f32,

    /// Exponential atmosphere scale height (meters).
    pub scale_height: f32,
}

impl WindField {
    /// Sample the wind at simulation time `t`.
    ///
    /// Dynamic mode sums two sinusoids on X and one on Z. The mixed
    /// frequencies beat against each other slowly enough that the gust
    /// pattern does not visibly repeat over a session; it is still fully
    /// periodic in the long run and in no way random.
    pub fn sample(&self, t: f32) -> WindSample {
        let velocity = match self.mode {
            WindMode::Steady => Vec3::new(self.steady_x, 0.0, self.steady_z),
            WindMode::Dynamic => {
                let wx = (t * 0.4).sin() * 3.0 + (t * 0.13).cos() * 1.2;
                let wz = (t * 0.3).cos() * 1.5;
                Vec3::new(wx, 0.0, wz)
            }
        };
        WindSample { velocity, time: t }
    }

    /// Air density at height `y` (meters above the ground plane).
    ///
    /// Exponential atmosphere clamped to `[MIN_AIR_DENSITY, sea_level]`.
    /// Negative altitudes are treated as sea level rather than extrapolated
    /// above the physical maximum.
    pub fn air_density(&self, y: f32) -> f32 {
        let rho = self.sea_level_density * (-y.max(0.0) / self.scale_height).exp();
        rho.clamp(MIN_AIR_DENSITY, self.sea_level_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(mode: WindMode) -> WindField {
        WindField {
            mode,
            steady_x: 3.0,
            steady_z: 1.0,
            sea_level_density: 1.225,
            scale_height: 8500.0,
        }
    }

    #[test]
    fn test_steady_wind_ignores_time() {
        let f = field(WindMode::Steady);
        let a = f.sample(0.0);
        let b = f.sample(999.0);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.velocity, Vec3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn test_dynamic_wind_at_time_zero() {
        let w = field(WindMode::Dynamic).sample(0.0);
        // sin(0)*3 + cos(0)*1.2 on x, cos(0)*1.5 on z
        assert!((w.velocity.x - 1.2).abs() < 1e-6);
        assert_eq!(w.velocity.y, 0.0);
        assert!((w.velocity.z - 1.5).abs() < 1e-6);
        assert_eq!(w.time, 0.0);
    }

    #[test]
    fn test_dynamic_wind_is_horizontal() {
        let f = field(WindMode::Dynamic);
        for i in 0..100 {
            assert_eq!(f.sample(i as f32 * 0.73).velocity.y, 0.0);
        }
    }

    #[test]
    fn test_air_density_sea_level() {
        let f = field(WindMode::Dynamic);
        assert_eq!(f.air_density(0.0), 1.225);
    }

    #[test]
    fn test_air_density_scale_height() {
        let f = field(WindMode::Dynamic);
        let expected = 1.225 / std::f32::consts::E;
        assert!((f.air_density(8500.0) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_air_density_negative_altitude_clamped() {
        let f = field(WindMode::Dynamic);
        assert_eq!(f.air_density(-100.0), 1.225);
    }

    #[test]
    fn test_air_density_floor() {
        let f = field(WindMode::Dynamic);
        assert_eq!(f.air_density(1.0e7), MIN_AIR_DENSITY);
    }
}
