// Input handling system
//
// Turns keyboard and cursor events from winit into the per-tick signals the
// player controller consumes.
//
// ## Architecture
//
// - `action`: Controls and default key bindings
// - `manager`: Tracks held controls and the cursor between ticks
// - `signals`: The snapshot handed to the controller each tick
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In your event loop
// input.process_keyboard_event(&key_event);
// input.set_cursor(cursor_x, cursor_y);
//
// // Once per simulation tick
// let signals = input.signals();
// let pointer = input.pointer();
// ```

pub mod action;
pub mod manager;
pub mod signals;

// Re-export commonly used types
pub use action::Control;
pub use manager::InputManager;
pub use signals::{InputSignals, PointerPosition};
