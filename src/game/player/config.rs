// Player tuning - shared by every species
// Species differ in hearts and abilities, not in movement numbers

use thiserror::Error;

use crate::core::Millis;

/// Movement and timing numbers for the player controller
///
/// Velocities are in pixels per second with y pointing down the screen, so a
/// jump is a negative vertical velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    // Movement
    /// Horizontal walking speed
    pub speed: f32,
    /// Vertical velocity set by a jump
    pub jump_power: f32,
    /// Cooldown between accepted jumps
    pub jump_delay_ms: Millis,

    // Sprint ability
    /// Added to horizontal velocity every tick while sprinting
    pub sprint_power: f32,
    /// How long one sprint lasts
    pub sprint_delay_ms: Millis,

    // Damage
    /// Length of the hurt window
    pub hurt_delay_ms: Millis,

    // Abilities
    /// Ability bar recharge time requested from the HUD on each use
    pub ability_delay_ms: Millis,
}

/// The tuning used by the game
pub const BASE_CONFIG: PlayerConfig = PlayerConfig {
    speed: 240.0,
    jump_power: -420.0,
    jump_delay_ms: 500,

    sprint_power: 10.0,
    sprint_delay_ms: 1_500,

    hurt_delay_ms: 400,

    ability_delay_ms: 8_000,
};

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("walking speed must be positive, got {0}")]
    NonPositiveSpeed(f32),

    #[error("jump power must be non-zero")]
    ZeroJumpPower,

    #[error("jump delay must be at least 1ms")]
    ZeroJumpDelay,

    #[error("sprint power must not be negative, got {0}")]
    NegativeSprintPower(f32),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl PlayerConfig {
    /// Get the standard tuning
    pub fn standard() -> Self {
        BASE_CONFIG
    }

    /// Check the values the controller relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speed.is_nan() || self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.speed));
        }
        if self.jump_power == 0.0 {
            return Err(ConfigError::ZeroJumpPower);
        }
        // A zero cooldown lets a held jump key burn every charge on consecutive ticks
        if self.jump_delay_ms == 0 {
            return Err(ConfigError::ZeroJumpDelay);
        }
        if self.sprint_power < 0.0 {
            return Err(ConfigError::NegativeSprintPower(self.sprint_power));
        }
        Ok(())
    }
}
