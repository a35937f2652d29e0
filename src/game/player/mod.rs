// Player system
//
// This module contains everything about the player-controlled alien:
// - Species table (hearts, abilities, double jump)
// - Per-species heart pools
// - Action/facing state and the jump, hurt and sprint timers
// - Tuning configuration
// - Animation key selection and playback
// - The controller tying it all together once per tick

pub mod animation;
pub mod config;
pub mod controller;
pub mod events;
pub mod hearts;
pub mod species;
pub mod state;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationFrameData, AnimationKey, AnimationPlayer};
pub use config::{ConfigError, PlayerConfig};
pub use controller::PlayerController;
pub use events::PlayerEvent;
pub use hearts::HeartPool;
pub use species::{AbilityKind, Species};
pub use state::{Facing, PlayerAction, PlayerState};
