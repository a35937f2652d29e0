// Input manager - turns winit events into controller signals

use super::action::{default_bindings, Control};
use super::signals::{InputSignals, PointerPosition};
use glam::Vec2;
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks held controls, one-shot presses and the cursor between ticks
#[derive(Debug)]
pub struct InputManager {
    /// Key to control mapping
    bindings: HashMap<KeyCode, Control>,

    /// Controls currently held down
    held: HashSet<Control>,

    /// Controls pressed since the last `take_pressed`
    pressed: Vec<Control>,

    /// Cursor location in world coordinates
    cursor: Vec2,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    /// Create an input manager from a list of bindings
    pub fn with_bindings(bindings: Vec<(KeyCode, Control)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            held: HashSet::new(),
            pressed: Vec::new(),
            cursor: Vec2::ZERO,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(control) = self.bindings.get(&key_code).copied() else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                if !event.repeat {
                    self.press(control);
                }
            }
            ElementState::Released => self.release(control),
        }
    }

    /// Record the cursor position (already in world coordinates)
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    pub(crate) fn press(&mut self, control: Control) {
        if self.held.insert(control) {
            self.pressed.push(control);
        }
    }

    pub(crate) fn release(&mut self, control: Control) {
        self.held.remove(&control);
    }

    /// Check if a control is held right now
    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Snapshot of the held controls for this tick
    pub fn signals(&self) -> InputSignals {
        InputSignals {
            jump: self.is_held(Control::Jump),
            ability: self.is_held(Control::Ability),
            left: self.is_held(Control::MoveLeft),
            right: self.is_held(Control::MoveRight),
        }
    }

    /// Current pointer position
    pub fn pointer(&self) -> PointerPosition {
        self.cursor.into()
    }

    /// Drain one-shot presses (character select) since the last call
    pub fn take_pressed(&mut self) -> Vec<Control> {
        std::mem::take(&mut self.pressed)
            .into_iter()
            .filter(|control| !control.is_held_control())
            .collect()
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_by_default() {
        let manager = InputManager::new();
        assert_eq!(manager.signals(), InputSignals::NONE);
        assert_eq!(manager.pointer(), PointerPosition::new(0.0, 0.0));
    }

    #[test]
    fn test_held_controls_become_signals() {
        let mut manager = InputManager::new();
        manager.press(Control::Jump);
        manager.press(Control::MoveLeft);

        let signals = manager.signals();
        assert!(signals.jump);
        assert!(signals.left);
        assert!(!signals.right);
        assert!(!signals.ability);

        manager.release(Control::Jump);
        assert!(!manager.signals().jump);
    }

    #[test]
    fn test_take_pressed_only_returns_one_shots() {
        let mut manager = InputManager::new();
        manager.press(Control::SelectSlot(1));
        manager.press(Control::Ability);

        assert_eq!(manager.take_pressed(), vec![Control::SelectSlot(1)]);
        assert!(manager.take_pressed().is_empty());
    }

    #[test]
    fn test_repeated_press_is_reported_once() {
        let mut manager = InputManager::new();
        manager.press(Control::SelectSlot(0));
        manager.press(Control::SelectSlot(0));
        assert_eq!(manager.take_pressed().len(), 1);
    }

    #[test]
    fn test_cursor_is_pointer() {
        let mut manager = InputManager::new();
        manager.set_cursor(320.0, 96.5);
        assert_eq!(manager.pointer(), PointerPosition::new(320.0, 96.5));
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::new();
        manager.press(Control::MoveRight);
        manager.press(Control::SelectSlot(3));
        manager.reset();

        assert_eq!(manager.signals(), InputSignals::NONE);
        assert!(manager.take_pressed().is_empty());
    }
}
