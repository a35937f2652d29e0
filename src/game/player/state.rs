// Player state: facing, action and the timer-gated sub-states

use crate::core::{Deadline, Millis};

/// Jump count at which further jumps are refused until landing
pub const MAX_JUMP_COUNT: u8 = 3;

/// Direction the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Unit sign along the x axis
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// What the player is doing; exactly one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAction {
    /// Standing still
    #[default]
    Stand,
    /// Moving horizontally on the ground
    Walk,
    /// Launched by a jump
    Jump,
    /// Inside the hurt window after taking damage
    Hurt,
    /// Boosted by the sprint ability
    Sprint,
}

impl PlayerAction {
    /// Get the animation name for this action
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Stand => "stand",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Hurt => "hurt",
            Self::Sprint => "sprint",
        }
    }
}

/// Facing and action, with the action it replaced
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    facing: Facing,
    action: PlayerAction,
    previous_action: PlayerAction,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn action(&self) -> PlayerAction {
        self.action
    }

    pub fn previous_action(&self) -> PlayerAction {
        self.previous_action
    }

    /// Switch to a new action; repeating the current one changes nothing
    pub fn transition(&mut self, action: PlayerAction) {
        if self.action != action {
            log::trace!("Player action {:?} -> {:?}", self.action, action);
            self.previous_action = self.action;
            self.action = action;
        }
    }

    /// Face a direction. Returns true if that was a turn.
    pub fn face(&mut self, facing: Facing) -> bool {
        let turned = self.facing != facing;
        self.facing = facing;
        turned
    }
}

/// Jump counter and cooldown
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpState {
    count: u8,
    deadline: Deadline,
}

impl JumpState {
    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Floor contact: all jumps available again
    pub fn land(&mut self) {
        self.count = 0;
    }

    /// Cooldown over and the cap not reached
    pub fn can_jump(&self, now: Millis) -> bool {
        !self.deadline.is_pending(now) && self.count < MAX_JUMP_COUNT
    }

    /// Record an accepted jump and start its cooldown
    pub fn record_jump(&mut self, now: Millis, cooldown: Millis) {
        self.deadline = Deadline::after(now, cooldown);
        self.count = (self.count + 1).min(MAX_JUMP_COUNT);
    }

    /// Spend one extra jump charge without a new launch
    pub fn spend_bonus(&mut self) {
        self.count = (self.count + 1).min(MAX_JUMP_COUNT);
    }
}

/// Damage reaction window
#[derive(Debug, Clone, Copy, Default)]
pub struct HurtState {
    active: bool,
    until: Deadline,
}

impl HurtState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn until(&self) -> Deadline {
        self.until
    }

    /// Open (or re-open) the window
    pub fn start(&mut self, now: Millis, duration: Millis) {
        self.active = true;
        self.until = Deadline::after(now, duration);
    }

    /// Close the window once `now` is past it. Returns true when it closed.
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.active && self.until.is_passed(now) {
            self.active = false;
            return true;
        }
        false
    }
}

/// Sprint ability timer
#[derive(Debug, Clone, Copy, Default)]
pub struct SprintState {
    active: bool,
    until: Deadline,
}

impl SprintState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn until(&self) -> Deadline {
        self.until
    }

    pub fn start(&mut self, now: Millis, duration: Millis) {
        self.active = true;
        self.until = Deadline::after(now, duration);
    }

    /// Whether the boost applies at `now`; clears the sprint once it has run out
    pub fn poll(&mut self, now: Millis) -> bool {
        if !self.active {
            return false;
        }
        if self.until.is_pending(now) {
            true
        } else {
            self.active = false;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PlayerState::new();
        assert_eq!(state.action(), PlayerAction::Stand);
        assert_eq!(state.facing(), Facing::Right);
    }

    #[test]
    fn test_transition_tracks_previous() {
        let mut state = PlayerState::new();
        state.transition(PlayerAction::Walk);
        assert_eq!(state.action(), PlayerAction::Walk);
        assert_eq!(state.previous_action(), PlayerAction::Stand);

        state.transition(PlayerAction::Walk);
        assert_eq!(state.previous_action(), PlayerAction::Stand);
    }

    #[test]
    fn test_face_reports_turns_only() {
        let mut state = PlayerState::new();
        assert!(!state.face(Facing::Right));
        assert!(state.face(Facing::Left));
        assert!(!state.face(Facing::Left));
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(PlayerAction::Stand.animation_name(), "stand");
        assert_eq!(PlayerAction::Sprint.animation_name(), "sprint");
    }

    #[test]
    fn test_jump_cooldown_and_cap() {
        let mut jump = JumpState::default();
        assert!(jump.can_jump(0));

        jump.record_jump(0, 500);
        assert_eq!(jump.count(), 1);
        assert!(!jump.can_jump(499));
        assert!(jump.can_jump(500));

        jump.record_jump(500, 500);
        jump.record_jump(1_000, 500);
        assert_eq!(jump.count(), MAX_JUMP_COUNT);
        assert!(!jump.can_jump(10_000));

        jump.land();
        assert!(jump.can_jump(10_000));
    }

    #[test]
    fn test_bonus_never_exceeds_cap() {
        let mut jump = JumpState::default();
        jump.record_jump(0, 500);
        jump.spend_bonus();
        jump.record_jump(500, 500);
        jump.spend_bonus();
        assert_eq!(jump.count(), MAX_JUMP_COUNT);
    }

    #[test]
    fn test_hurt_window_closes_strictly_after() {
        let mut hurt = HurtState::default();
        hurt.start(1_000, 400);
        assert!(hurt.is_active());

        assert!(!hurt.poll(1_400));
        assert!(hurt.is_active());

        assert!(hurt.poll(1_401));
        assert!(!hurt.is_active());
        assert!(!hurt.poll(1_402));
    }

    #[test]
    fn test_sprint_runs_until_deadline() {
        let mut sprint = SprintState::default();
        assert!(!sprint.poll(0));

        sprint.start(0, 1_500);
        assert!(sprint.poll(1_499));
        assert!(!sprint.poll(1_500));
        assert!(!sprint.is_active());
    }
}
