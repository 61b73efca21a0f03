/// Weak, tagged references from collision handles back to gameplay objects.
///
/// An OwnerRef is a plain value: a kind tag plus an opaque id chosen by the
/// consumer (typically an entity key in FFI form). Holding one never keeps
/// the object alive, and the collision index never checks whether the
/// object still exists.

use std::fmt;

/// What kind of gameplay object owns a collision volume.
///
/// Consumers use the tag (through `OwnerRef`'s capability queries) to pick
/// a response to an overlap: damage, pickup, landing, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    /// The player character
    Player,
    /// Ground and platforms
    Terrain,
    /// Hostile actor that can take and deal damage
    Enemy,
    /// Damaging obstacle
    Obstacle,
    /// Obstacle that kills on contact
    InstakillObstacle,
    /// Collectible power-up
    Pickup,
    /// Moving shot (fireball, rocket, bullet)
    Projectile,
    /// Level goal
    Goal,
}

/// Opaque, non-owning owner reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerRef {
    kind: OwnerKind,
    id: u64,
}

impl OwnerRef {
    pub fn new(kind: OwnerKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> OwnerKind {
        self.kind
    }

    /// Consumer-defined id of the referenced object
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_player(&self) -> bool {
        self.kind == OwnerKind::Player
    }

    pub fn is_terrain(&self) -> bool {
        self.kind == OwnerKind::Terrain
    }

    /// Has health: the player and enemies
    pub fn is_damageable(&self) -> bool {
        matches!(self.kind, OwnerKind::Player | OwnerKind::Enemy)
    }

    /// Hurts whatever touches it
    pub fn is_hazard(&self) -> bool {
        matches!(self.kind, OwnerKind::Obstacle | OwnerKind::InstakillObstacle)
    }

    pub fn is_pickup(&self) -> bool {
        self.kind == OwnerKind::Pickup
    }

    pub fn is_projectile(&self) -> bool {
        self.kind == OwnerKind::Projectile
    }

    pub fn is_goal(&self) -> bool {
        self.kind == OwnerKind::Goal
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.id)
    }
}
