// Control definitions and key bindings

use winit::keyboard::KeyCode;

/// Every control the host listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Species special ability
    Ability,

    /// Character select slot (0-based)
    SelectSlot(usize),

    /// Hurt the player by one heart (debugging aid)
    DebugDamage,
}

impl Control {
    /// Held-state controls feed the controller every tick; the rest are one-shot
    pub fn is_held_control(self) -> bool {
        !matches!(self, Self::SelectSlot(_) | Self::DebugDamage)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Control)> {
    vec![
        // Movement (WASD - standard gaming layout)
        (KeyCode::KeyA, Control::MoveLeft),
        (KeyCode::KeyD, Control::MoveRight),
        (KeyCode::KeyW, Control::Jump),
        (KeyCode::Space, Control::Ability),
        // Character select
        (KeyCode::Digit1, Control::SelectSlot(0)),
        (KeyCode::Digit2, Control::SelectSlot(1)),
        (KeyCode::Digit3, Control::SelectSlot(2)),
        (KeyCode::Digit4, Control::SelectSlot(3)),
        (KeyCode::KeyH, Control::DebugDamage),
    ]
}
