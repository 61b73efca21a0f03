//! Hard-coded side-scrolling level used by the demo

use collision_index::collision::OwnerKind;
use collision_index::glam::Vec3;

/// One object placed in the level at startup
pub struct Placement {
    pub kind: OwnerKind,
    pub position: Vec3,
    pub size: Vec3,
}

impl Placement {
    fn new(kind: OwnerKind, position: Vec3, size: Vec3) -> Self {
        Self { kind, position, size }
    }
}

pub const PLAYER_START: Vec3 = Vec3::new(0.0, 2.0, 0.0);
pub const PLAYER_SIZE: Vec3 = Vec3::new(0.8, 1.6, 0.8);

/// Ground, crates, spikes, gems, one enemy and the goal flag
pub fn build() -> Vec<Placement> {
    let mut placements = vec![
        // Ground strip from x = -10 to x = 190, top at y = 0
        Placement::new(OwnerKind::Terrain, Vec3::new(90.0, -0.5, 0.0), Vec3::new(200.0, 1.0, 4.0)),
        Placement::new(OwnerKind::Enemy, Vec3::new(95.0, 0.8, 0.0), Vec3::new(1.0, 1.6, 1.0)),
        Placement::new(OwnerKind::InstakillObstacle, Vec3::new(120.0, 0.2, 0.0), Vec3::new(1.0, 0.4, 1.0)),
        Placement::new(OwnerKind::Goal, Vec3::new(160.0, 1.5, 0.0), Vec3::new(1.0, 3.0, 4.0)),
    ];

    for x in [15.0, 38.0, 80.0, 135.0] {
        placements.push(Placement::new(OwnerKind::Obstacle, Vec3::new(x, 0.5, 0.0), Vec3::ONE));
    }
    for x in [8.0, 24.0, 31.0, 60.0, 105.0, 142.0] {
        placements.push(Placement::new(OwnerKind::Pickup, Vec3::new(x, 0.8, 0.0), Vec3::splat(0.5)));
    }

    placements
}
