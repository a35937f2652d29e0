use glam::Vec2;
use rapier2d::prelude::*;

use super::world::PhysicsWorld;
use super::PhysicsBody;

/// Vertical speeds below this are treated as resting (contact jitter)
const RESTING_SPEED: Real = 0.5;

/// How far below the feet a floor may be and still count as contact
const FLOOR_PROBE: Real = 2.0;

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    gravity_scale: Real,
    linear_damping: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            gravity_scale: 1.0,
            linear_damping: 0.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            gravity_scale: 0.0,
            linear_damping: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set linear damping (air resistance)
    pub fn linear_damping(mut self, damping: Real) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (useful for player characters)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(self.gravity_scale)
            .linear_damping(self.linear_damping)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    friction: Real,
    restitution: Real,
    density: Real,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self {
            shape: SharedShape::cuboid(half_width, half_height),
            friction: 0.5,
            restitution: 0.0,
            density: 1.0,
        }
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set density (mass will be calculated from shape volume)
    pub fn density(mut self, density: Real) -> Self {
        self.density = density;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        ColliderBuilder::new(self.shape)
            .friction(self.friction)
            .restitution(self.restitution)
            .density(self.density)
            .build()
    }
}

/// Common rigid body configurations for game objects
pub mod presets {
    use super::*;

    /// Create a player character body (dynamic, rotation locked, never sleeps)
    pub fn player_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .lock_rotation()
            .gravity_scale(1.0)
            .can_sleep(false)
            .build()
    }

    /// Create a player character collider (axis-aligned box the size of the sprite)
    pub fn player_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .friction(0.0) // No friction for smooth movement
            .restitution(0.0) // No bounce
            .density(1.0)
            .build()
    }

    /// Create a platform body (fixed/static)
    pub fn platform_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Create a platform collider (box shape)
    pub fn platform_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .friction(0.3)
            .restitution(0.0)
            .build()
    }
}

/// A rigid body in the world seen through the `PhysicsBody` interface
///
/// Borrowed for one tick; a missing body reads as motionless and airborne.
pub struct RapierBody<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
    half_height: Real,
}

impl<'w> RapierBody<'w> {
    pub fn new(world: &'w mut PhysicsWorld, handle: RigidBodyHandle, half_height: Real) -> Self {
        Self {
            world,
            handle,
            half_height,
        }
    }
}

impl PhysicsBody for RapierBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| {
                let vel = body.linvel();
                let y = if vel.y.abs() < RESTING_SPEED { 0.0 } else { vel.y };
                Vec2::new(vel.x, y)
            })
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    fn on_floor(&self) -> bool {
        let Some(body) = self.world.get_rigid_body(self.handle) else {
            return false;
        };

        // Cast a ray downward (+y) from just inside the character's feet
        let position = body.translation();
        let ray_origin = vector![position.x, position.y + self.half_height - 0.1];
        let ray_direction = vector![0.0, 1.0];

        self.world
            .raycast(
                ray_origin,
                ray_direction,
                FLOOR_PROBE,
                true,
                QueryFilter::default().exclude_rigid_body(self.handle),
            )
            .is_some()
    }

    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| {
                let pos = body.translation();
                Vec2::new(pos.x, pos.y)
            })
            .unwrap_or(Vec2::ZERO)
    }

    fn set_position(&mut self, position: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_translation(vector![position.x, position.y], true);
        }
    }
}
