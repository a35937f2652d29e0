// Physics system using rapier2d
//
// The player controller never sees rapier types. It talks to a body through
// the `PhysicsBody` trait; `RapierBody` is the implementation backed by the
// simulated world.

pub mod body;
mod world;

use glam::Vec2;

pub use body::{presets, BodyBuilder, ColliderBuilder2D, RapierBody};
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{ColliderHandle, Real, RigidBodyHandle, Vector};

/// What the player controller needs from a physics body
pub trait PhysicsBody {
    /// Current linear velocity
    fn velocity(&self) -> Vec2;

    /// Overwrite the linear velocity
    fn set_velocity(&mut self, velocity: Vec2);

    /// Whether the body is resting on something solid
    fn on_floor(&self) -> bool;

    /// Current position of the body's center
    fn position(&self) -> Vec2;

    /// Move the body instantly, leaving velocity untouched
    fn set_position(&mut self, position: Vec2);
}
