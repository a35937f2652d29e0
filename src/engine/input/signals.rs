// Per-tick input snapshot

use glam::Vec2;

/// Held state of every control the player controller reads
///
/// Sampled once per tick. Only "held" matters; edge detection is not part of
/// the controller's contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSignals {
    pub jump: bool,
    pub ability: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSignals {
    /// No control held
    pub const NONE: InputSignals = InputSignals {
        jump: false,
        ability: false,
        left: false,
        right: false,
    };

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::NONE
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::NONE
        }
    }

    pub fn ability() -> Self {
        Self {
            ability: true,
            ..Self::NONE
        }
    }

    /// Same signals with the ability control held as well
    pub fn with_ability(mut self) -> Self {
        self.ability = true;
        self
    }
}

/// Pointer location in world coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub world_x: f32,
    pub world_y: f32,
}

impl PointerPosition {
    pub fn new(world_x: f32, world_y: f32) -> Self {
        Self { world_x, world_y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.world_x, self.world_y)
    }
}

impl From<Vec2> for PointerPosition {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
