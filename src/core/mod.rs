// Core utilities shared by the engine and game layers

pub mod time;

pub use time::{Clock, Deadline, ManualClock, Millis, MonotonicClock};
