//! Level definition: building volumes and the launch point.
//!
//! The building set is supplied once at world-build time and stays
//! immutable afterward; the physics core only ever reads it.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use skyfall_physics::{BuildingVolume, CollisionWorld, SeededRandom};

/// The point a jump starts from (and resets return to).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaunchPoint {
    /// Position in world space.
    pub position: Vec3,

    /// Initial facing direction (yaw in radians).
    pub facing: f32,
}

/// A game level containing collision geometry and the launch point.
#[derive(Debug, Clone)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Static collision environment.
    pub collision: CollisionWorld,

    /// Where the jump starts.
    pub launch: LaunchPoint,

    /// Side length of the square ground plane (meters). Presentation only;
    /// the physics ground plane is infinite.
    pub ground_size: f32,
}

impl Level {
    /// Grid spacing of the city fixture (meters).
    const CITY_SPACING: f32 = 120.0;

    /// Cells per side of the city fixture.
    const CITY_GRID: usize = 8;

    /// An empty drop zone: ground plane only.
    pub fn empty(launch_altitude: f32, player_radius: f32) -> Self {
        Self {
            id: "empty".to_string(),
            name: "Open Field".to_string(),
            collision: CollisionWorld::new(),
            launch: LaunchPoint {
                position: Vec3::new(0.0, launch_altitude + player_radius + 1.0, 0.0),
                facing: 0.0,
            },
            ground_size: 2200.0,
        }
    }

    /// A deterministic city fixture: a grid of buildings with the center
    /// cell left open as the drop zone.
    ///
    /// The same seed always produces the same skyline.
    pub fn city(seed: u32, launch_altitude: f32, player_radius: f32) -> Self {
        let mut rng = SeededRandom::new(seed);
        let mut collision = CollisionWorld::new();

        let center = Self::CITY_GRID / 2;
        let offset = (Self::CITY_GRID - 1) as f32 * Self::CITY_SPACING / 2.0;
        for i in 0..Self::CITY_GRID {
            for j in 0..Self::CITY_GRID {
                if i == center && j == center {
                    continue;
                }
                let x = i as f32 * Self::CITY_SPACING - offset;
                let z = j as f32 * Self::CITY_SPACING - offset;
                let width = rng.next_range(25.0, 45.0);
                let depth = rng.next_range(25.0, 45.0);
                let height = rng.next_range(30.0, 200.0);
                collision.add_building(BuildingVolume::from_footprint(x, z, width, depth, height));
            }
        }
        log::info!(
            "built city level: {} buildings, seed {}",
            collision.buildings().len(),
            seed
        );

        Self {
            id: "city".to_string(),
            name: "Downtown Drop".to_string(),
            collision,
            launch: LaunchPoint {
                position: Vec3::new(0.0, launch_altitude + player_radius + 1.0, 0.0),
                facing: 0.0,
            },
            ground_size: 2200.0,
        }
    }
}
