//! Headless side-scroller simulation driven by the collision index
//!
//! Entities live in a slotmap; each one owns a single collider whose owner
//! reference carries the entity key in FFI form, so a hit handle maps back
//! to the entity that must react.

use collision_index::collision::{
    ColliderHandle, CollisionIndex, OffscreenCuller, OffscreenCullerConfig, OwnerKind, OwnerRef,
    Result,
};
use collision_index::glam::{Mat4, Vec3};
use collision_index::{collision_debug, collision_info, collision_warn};
use slotmap::{new_key_type, Key, KeyData, SlotMap};

use crate::level::{self, PLAYER_SIZE, PLAYER_START};

const SOURCE: &str = "runner_demo::World";

const RUN_SPEED: f32 = 6.0;
const GRAVITY: f32 = 20.0;
const JUMP_SPEED: f32 = 9.0;
const LOOKAHEAD: f32 = 1.5;
const KILL_PLANE_Y: f32 = -10.0;
const PLAYER_HEALTH: u32 = 3;
const INVULNERABLE_TIME: f32 = 1.0;

const FIRE_INTERVAL: f32 = 1.5;
const PROJECTILE_SPEED: f32 = 15.0;
const PROJECTILE_LIFETIME: f32 = 2.0;
const PROJECTILE_SIZE: Vec3 = Vec3::splat(0.3);

const ENEMY_SPEED: f32 = 2.0;
const ENEMY_PATROL: f32 = 3.0;

/// Camera looks this far ahead of the player
const CAMERA_LEAD: f32 = 10.0;

new_key_type! { pub struct EntityKey; }

struct Entity {
    kind: OwnerKind,
    position: Vec3,
    size: Vec3,
    velocity: Vec3,
    collider: ColliderHandle,
    /// Seconds left before despawn (projectiles only)
    lifetime: f32,
    /// Patrol center (enemies only)
    anchor_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    ReachedGoal,
    Died,
}

#[derive(Debug, Default)]
pub struct Stats {
    pub gems: u32,
    pub crates_smashed: u32,
    pub enemies_defeated: u32,
    pub shots_fired: u32,
    pub damage_taken: u32,
    pub culled: usize,
    pub restored: usize,
}

pub struct World {
    entities: SlotMap<EntityKey, Entity>,
    index: CollisionIndex,
    culler: OffscreenCuller,
    player: EntityKey,
    health: u32,
    grounded: bool,
    invulnerable: f32,
    fire_timer: f32,
    outcome: Outcome,
    stats: Stats,
}

impl World {
    /// Populate `index` with the player and the level
    pub fn new(index: CollisionIndex) -> Result<Self> {
        let mut world = Self {
            entities: SlotMap::with_key(),
            index,
            culler: OffscreenCuller::new(OffscreenCullerConfig::default())?,
            player: EntityKey::null(),
            health: PLAYER_HEALTH,
            grounded: false,
            invulnerable: 0.0,
            fire_timer: FIRE_INTERVAL,
            outcome: Outcome::Running,
            stats: Stats::default(),
        };

        world.player = world.spawn(OwnerKind::Player, PLAYER_START, PLAYER_SIZE, Vec3::ZERO);
        for placement in level::build() {
            let velocity = match placement.kind {
                OwnerKind::Enemy => Vec3::new(-ENEMY_SPEED, 0.0, 0.0),
                _ => Vec3::ZERO,
            };
            world.spawn(placement.kind, placement.position, placement.size, velocity);
        }

        collision_info!(SOURCE, "World ready with {} colliders", world.index.len());
        Ok(world)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn player_position(&self) -> Vec3 {
        self.entities
            .get(self.player)
            .map_or(Vec3::ZERO, |player| player.position)
    }

    pub fn live_colliders(&self) -> usize {
        self.index.len()
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) -> Outcome {
        if self.outcome != Outcome::Running {
            return self.outcome;
        }

        self.invulnerable = (self.invulnerable - dt).max(0.0);
        self.update_enemies(dt);
        self.update_projectiles(dt);
        self.update_player(dt);
        self.fire(dt);

        let camera_x = self.player_position().x + CAMERA_LEAD;
        self.restore_visible(camera_x);
        let culled = self.culler.tick(dt, camera_x, &mut self.index);
        self.stats.culled += culled.len();

        self.outcome
    }

    // ===== ENTITIES =====

    fn spawn(&mut self, kind: OwnerKind, position: Vec3, size: Vec3, velocity: Vec3) -> EntityKey {
        let collider = self.index.register(position, size, kind == OwnerKind::Player);
        let key = self.entities.insert(Entity {
            kind,
            position,
            size,
            velocity,
            collider,
            lifetime: if kind == OwnerKind::Projectile { PROJECTILE_LIFETIME } else { f32::INFINITY },
            anchor_x: position.x,
        });
        self.index.set_owner(collider, OwnerRef::new(kind, key.data().as_ffi()));
        key
    }

    fn despawn(&mut self, key: EntityKey) {
        if let Some(entity) = self.entities.remove(key) {
            self.index.remove(entity.collider);
        }
    }

    /// Entity behind a collider, if it still exists
    fn entity_of(&self, handle: ColliderHandle) -> Option<(EntityKey, OwnerKind)> {
        let owner = self.index.owner(handle)?;
        let key = EntityKey::from(KeyData::from_ffi(owner.id()));
        self.entities.contains_key(key).then_some((key, owner.kind()))
    }

    fn is_active(&self, handle: ColliderHandle) -> bool {
        self.index.volume(handle).is_some_and(|volume| volume.is_collidable())
    }

    // ===== BEHAVIOURS =====

    fn update_enemies(&mut self, dt: f32) {
        for enemy in self.entities.values_mut().filter(|e| e.kind == OwnerKind::Enemy) {
            // Culled enemies sleep until the camera comes back
            if !self.index.volume(enemy.collider).is_some_and(|v| v.is_collidable()) {
                continue;
            }

            enemy.position += enemy.velocity * dt;
            if (enemy.position.x - enemy.anchor_x).abs() >= ENEMY_PATROL {
                enemy.velocity.x = -enemy.velocity.x;
            }
            self.index.update_transform(enemy.collider, Mat4::from_translation(enemy.position));
        }
    }

    fn update_projectiles(&mut self, dt: f32) {
        let shots: Vec<EntityKey> = self
            .entities
            .iter()
            .filter(|(_, e)| e.kind == OwnerKind::Projectile)
            .map(|(key, _)| key)
            .collect();

        for key in shots {
            let Some(shot) = self.entities.get_mut(key) else { continue };
            shot.lifetime -= dt;
            let expired = shot.lifetime <= 0.0;
            let collider = shot.collider;
            let proposed = shot.position + shot.velocity * dt;

            if expired {
                self.despawn(key);
                continue;
            }

            let hit = self.index.query_move(collider, proposed);
            let mut spent = false;
            for other in hit.colliding {
                let Some((other_key, kind)) = self.entity_of(other) else { continue };
                match kind {
                    OwnerKind::Enemy => {
                        self.despawn(other_key);
                        self.stats.enemies_defeated += 1;
                        collision_info!(SOURCE, "Enemy defeated at x = {:.2}", proposed.x);
                        spent = true;
                    }
                    OwnerKind::Obstacle | OwnerKind::InstakillObstacle | OwnerKind::Terrain => spent = true,
                    _ => {}
                }
            }

            if spent {
                self.despawn(key);
            } else if let Some(shot) = self.entities.get_mut(key) {
                shot.position = proposed;
                self.index.update_transform(collider, Mat4::from_translation(proposed));
            }
        }
    }

    fn fire(&mut self, dt: f32) {
        self.fire_timer -= dt;
        if self.fire_timer > 0.0 {
            return;
        }
        self.fire_timer += FIRE_INTERVAL;

        let origin = self.player_position() + Vec3::new(PLAYER_SIZE.x * 0.5 + PROJECTILE_SIZE.x, 0.0, 0.0);
        self.spawn(OwnerKind::Projectile, origin, PROJECTILE_SIZE, Vec3::new(PROJECTILE_SPEED, 0.0, 0.0));
        self.stats.shots_fired += 1;
    }

    fn update_player(&mut self, dt: f32) {
        let Some(player) = self.entities.get(self.player) else { return };
        let collider = player.collider;
        let mut position = player.position;
        let mut velocity = player.velocity;

        if self.grounded {
            let ahead = self.index.query_move(collider, position + Vec3::new(LOOKAHEAD, 0.0, 0.0));
            let threat = ahead.colliding.iter().any(|&h| {
                self.index
                    .owner(h)
                    .is_some_and(|o| o.is_hazard() || o.kind() == OwnerKind::Enemy)
            });
            if threat {
                velocity.y = JUMP_SPEED;
                self.grounded = false;
                collision_debug!(SOURCE, "Player jumps at x = {:.2}", position.x);
            }
        }

        // Run forward, then fall (or rise) unless the ground is in the way
        velocity.x = RUN_SPEED;
        velocity.y -= GRAVITY * dt;
        let forward = position + Vec3::new(velocity.x * dt, 0.0, 0.0);
        let vertical = forward + Vec3::new(0.0, velocity.y * dt, 0.0);

        let fall = self.index.query_move(collider, vertical);
        let supported = velocity.y <= 0.0
            && fall.colliding.iter().any(|&h| self.index.owner(h).is_some_and(OwnerRef::is_terrain));
        if supported {
            if !self.grounded {
                collision_debug!(SOURCE, "Player lands at x = {:.2}", forward.x);
            }
            self.grounded = true;
            velocity.y = 0.0;
            position = forward;
        } else {
            self.grounded = false;
            position = vertical;
        }

        let contacts = self.index.query_move(collider, position).colliding;
        self.resolve_player_contacts(&contacts);

        if position.y < KILL_PLANE_Y {
            collision_warn!(SOURCE, "Player fell out of the world at x = {:.2}", position.x);
            self.outcome = Outcome::Died;
        }

        if let Some(player) = self.entities.get_mut(self.player) {
            player.position = position;
            player.velocity = velocity;
        }
        self.index.update_transform(collider, Mat4::from_translation(position));
    }

    fn resolve_player_contacts(&mut self, contacts: &[ColliderHandle]) {
        for &handle in contacts {
            let Some((key, kind)) = self.entity_of(handle) else { continue };
            match kind {
                OwnerKind::Pickup => {
                    self.despawn(key);
                    self.stats.gems += 1;
                    collision_debug!(SOURCE, "Gem collected ({} total)", self.stats.gems);
                }
                OwnerKind::Obstacle => {
                    self.despawn(key);
                    self.stats.crates_smashed += 1;
                    self.damage_player(1);
                }
                OwnerKind::Enemy => self.damage_player(1),
                OwnerKind::InstakillObstacle => {
                    collision_warn!(SOURCE, "Player hit a spike");
                    self.health = 0;
                    self.outcome = Outcome::Died;
                }
                OwnerKind::Goal => {
                    collision_info!(SOURCE, "Goal reached");
                    self.outcome = Outcome::ReachedGoal;
                }
                OwnerKind::Player | OwnerKind::Terrain | OwnerKind::Projectile => {}
            }
        }
    }

    fn damage_player(&mut self, amount: u32) {
        if self.invulnerable > 0.0 {
            return;
        }

        self.health = self.health.saturating_sub(amount);
        self.stats.damage_taken += amount;
        self.invulnerable = INVULNERABLE_TIME;
        collision_warn!(SOURCE, "Player hit, health {}", self.health);

        if self.health == 0 {
            self.outcome = Outcome::Died;
        }
    }

    /// Give culled colliders their size back once the camera is near again
    fn restore_visible(&mut self, camera_x: f32) {
        let margin = self.culler.config().horizontal_margin;
        let returning: Vec<EntityKey> = self
            .entities
            .iter()
            .filter(|(_, e)| (e.position.x - camera_x).abs() <= margin && !self.is_active(e.collider))
            .map(|(key, _)| key)
            .collect();

        for key in returning {
            if let Some(entity) = self.entities.get(key) {
                self.index.update_bounds(entity.collider, entity.position, entity.size);
                self.stats.restored += 1;
            }
        }
    }
}
