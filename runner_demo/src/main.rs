//! Runner demo
//!
//! Plays one headless run of a side-scrolling level at a fixed 60 Hz step,
//! using the collision index for landing, pickups, hazards, projectiles and
//! the goal. Pass `--brute-force` to swap the octree for the linear scan.

mod level;
mod world;

use collision_index::collision::{
    BroadPhaseConfig, CollisionIndex, CollisionIndexConfig, Result, AABB,
};
use collision_index::glam::Vec3;
use collision_index::{collision_error, collision_info};
use world::{Outcome, World};

const SOURCE: &str = "runner_demo";
const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 60;

fn main() {
    if let Err(error) = run() {
        collision_error!(SOURCE, "Demo failed: {}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let brute_force = std::env::args().any(|arg| arg == "--brute-force");
    let config = if brute_force {
        CollisionIndexConfig::default()
    } else {
        CollisionIndexConfig {
            broad_phase: BroadPhaseConfig::Octree {
                world_bounds: AABB {
                    min: Vec3::new(-20.0, -20.0, -10.0),
                    max: Vec3::new(220.0, 40.0, 10.0),
                },
                max_depth: 5,
            },
        }
    };
    collision_info!(SOURCE, "Starting run with {:?}", config.broad_phase);

    let mut world = World::new(CollisionIndex::with_config(&config)?)?;

    let mut frame = 0;
    let mut outcome = Outcome::Running;
    while outcome == Outcome::Running && frame < MAX_FRAMES {
        outcome = world.step(FRAME_DT);
        frame += 1;

        if frame % 60 == 0 {
            let position = world.player_position();
            collision_info!(
                SOURCE,
                "t = {:>3}s  x = {:>7.2}  y = {:>5.2}  health = {}  colliders = {}",
                frame / 60, position.x, position.y, world.health(), world.live_colliders()
            );
        }
    }

    let stats = world.stats();
    collision_info!(
        SOURCE,
        "Run over after {} frames: {:?} | gems {} | crates {} | enemies {} | shots {} | damage {} | culled {} | restored {}",
        frame, outcome, stats.gems, stats.crates_smashed, stats.enemies_defeated,
        stats.shots_fired, stats.damage_taken, stats.culled, stats.restored
    );

    Ok(())
}
