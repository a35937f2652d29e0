//! Player controller for a 2D alien platformer.
//!
//! The `game::player` module is the heart of the crate: a tick-driven state
//! machine for movement, jumping, damage, per-species hearts and special
//! abilities. `engine` supplies the collaborators it runs against in the
//! real game (winit input, rapier2d physics, a fixed-step loop).

pub mod core;
pub mod engine;
pub mod game;
