// Player controller - the per-tick state machine
//
// Owns everything about the player that changes over time: facing, action,
// the jump/hurt/sprint timers and every species' heart pool. The physics body
// and HUD are borrowed for each call and only touched through their traits.

use log::{debug, info, trace};

use crate::core::{Clock, Deadline, Millis, MonotonicClock};
use crate::engine::input::{InputSignals, PointerPosition};
use crate::engine::physics::PhysicsBody;
use crate::game::hud::Hud;

use super::animation::{AnimationKey, AnimationPlayer};
use super::config::{ConfigError, PlayerConfig};
use super::events::PlayerEvent;
use super::hearts::HeartPool;
use super::species::{AbilityKind, Species};
use super::state::{Facing, HurtState, JumpState, PlayerAction, PlayerState, SprintState};

/// The player character's brain, created once per level
#[derive(Debug)]
pub struct PlayerController<C: Clock = MonotonicClock> {
    config: PlayerConfig,
    clock: C,

    /// Species currently in control
    species: Species,
    hearts: HeartPool,

    state: PlayerState,
    jump: JumpState,
    hurt: HurtState,
    sprint: SprintState,

    animation: AnimationPlayer,

    /// Set by the host; freezes everything while true
    game_over: bool,

    /// Pending notifications for the host
    events: Vec<PlayerEvent>,
}

impl<C: Clock> PlayerController<C> {
    /// Create a controller with the standard tuning and show the starting hearts
    pub fn new(clock: C, hud: &mut impl Hud) -> Self {
        Self::build(PlayerConfig::standard(), clock, hud)
    }

    /// Create a controller with custom tuning
    pub fn with_config(
        config: PlayerConfig,
        clock: C,
        hud: &mut impl Hud,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, clock, hud))
    }

    fn build(config: PlayerConfig, clock: C, hud: &mut impl Hud) -> Self {
        let controller = Self {
            config,
            clock,
            species: Species::default(),
            hearts: HeartPool::full(),
            state: PlayerState::new(),
            jump: JumpState::default(),
            hurt: HurtState::default(),
            sprint: SprintState::default(),
            animation: AnimationPlayer::with_species_animations(),
            game_over: false,
            events: Vec::new(),
        };
        controller.push_hearts(hud);
        controller
    }

    /// Advance the player by one simulation tick
    pub fn tick<B, H>(
        &mut self,
        input: &InputSignals,
        pointer: PointerPosition,
        body: &mut B,
        hud: &mut H,
    ) where
        B: PhysicsBody,
        H: Hud,
    {
        if self.game_over {
            return;
        }

        let now = self.clock.now();

        // Nothing but the hurt timer runs inside the hurt window
        if self.hurt.is_active() {
            if self.hurt.poll(now) {
                debug!("Hurt window over for {}", self.species);
            }
            self.update_animation();
            return;
        }

        if body.on_floor() {
            self.jump.land();
        }

        if input.jump {
            self.try_jump(now, body);
        } else if input.left {
            self.walk(Facing::Left, body);
        } else if input.right {
            self.walk(Facing::Right, body);
        } else if !self.sprint.is_active() {
            let mut velocity = body.velocity();
            velocity.x = 0.0;
            body.set_velocity(velocity);
            if velocity.y == 0.0 {
                self.state.transition(PlayerAction::Stand);
            }
        }

        if input.ability && hud.ability_bar_charged() {
            self.use_ability(now, pointer, body, hud);
        }

        if self.sprint.poll(now) {
            self.sprint_boost(body);
        }

        self.update_animation();
    }

    /// Take `amount` hearts from the active species and open the hurt window
    pub fn damage(&mut self, amount: u32, hud: &mut impl Hud) {
        if self.game_over {
            return;
        }

        let now = self.clock.now();
        self.state.transition(PlayerAction::Hurt);
        self.hurt.start(now, self.config.hurt_delay_ms);

        let before = self.hearts.current(self.species);
        let left = self.hearts.damage(self.species, amount);
        debug!(
            "{} took {} damage ({} -> {} hearts)",
            self.species, amount, before, left
        );

        if before > 0 && left == 0 {
            info!("{} is out of hearts", self.species);
            self.events.push(PlayerEvent::HeartsDepleted {
                species: self.species,
            });
        }

        self.update_animation();
        self.push_hearts(hud);
    }

    /// Hand control to another species; its heart pool comes along untouched
    pub fn switch_species(&mut self, species: Species, hud: &mut impl Hud) {
        if self.game_over {
            return;
        }

        let from = self.species;
        self.species = species;
        self.push_hearts(hud);

        if from != species {
            info!("Switched from {} to {}", from, species);
            self.events.push(PlayerEvent::SpeciesSwitched { from, to: species });
        }
    }

    /// Freeze or unfreeze the player (owned by the host's game-over policy)
    pub fn set_game_over(&mut self, game_over: bool) {
        self.game_over = game_over;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Take all notifications raised since the last call
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance animation frames (called every frame)
    pub fn update_animation_timing(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    fn try_jump(&mut self, now: Millis, body: &mut impl PhysicsBody) {
        if !self.jump.can_jump(now) {
            trace!(
                "Jump refused (count {}, ready at {})",
                self.jump.count(),
                self.jump.deadline().at()
            );
            return;
        }

        let mut velocity = body.velocity();
        velocity.y = self.config.jump_power;
        body.set_velocity(velocity);

        self.state.transition(PlayerAction::Jump);
        self.jump.record_jump(now, self.config.jump_delay_ms);

        // The follow-up attempt falls inside the cooldown just started, so all
        // it does is spend one more charge. It never chains further.
        if self.species.has_double_jump() {
            self.jump.spend_bonus();
        }

        debug!("{} jumped (count {})", self.species, self.jump.count());
    }

    fn walk(&mut self, facing: Facing, body: &mut impl PhysicsBody) {
        if self.state.face(facing) {
            self.animation.set_flip_horizontal(facing == Facing::Left);
        }

        let mut velocity = body.velocity();
        if velocity.y == 0.0 {
            self.state.transition(PlayerAction::Walk);
        }

        // A running sprint owns horizontal velocity
        if !self.sprint.is_active() {
            velocity.x = facing.sign() * self.config.speed;
            body.set_velocity(velocity);
        }
    }

    fn use_ability(
        &mut self,
        now: Millis,
        pointer: PointerPosition,
        body: &mut impl PhysicsBody,
        hud: &mut impl Hud,
    ) {
        let ability = self.species.ability();
        if ability == AbilityKind::None {
            return;
        }

        hud.drain_ability_bar(self.config.ability_delay_ms);

        match ability {
            AbilityKind::Sprint => self.sprint.start(now, self.config.sprint_delay_ms),
            AbilityKind::Love => {
                // No effect yet; only the cooldown is consumed
            }
            AbilityKind::Teleport => body.set_position(pointer.as_vec2()),
            AbilityKind::None => {}
        }

        debug!("{} used {:?}", self.species, ability);
        self.events.push(PlayerEvent::AbilityUsed {
            species: self.species,
            ability,
        });
    }

    fn sprint_boost(&mut self, body: &mut impl PhysicsBody) {
        self.state.transition(PlayerAction::Sprint);

        let mut velocity = body.velocity();
        velocity.x += self.state.facing().sign() * self.config.sprint_power;
        body.set_velocity(velocity);
    }

    fn update_animation(&mut self) {
        self.animation.play(self.animation_key());
    }

    fn push_hearts(&self, hud: &mut impl Hud) {
        hud.update_hearts(
            self.hearts.current(self.species),
            self.hearts.max(self.species),
        );
    }

    // Accessors

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Hearts left for any species, active or not
    pub fn hearts(&self, species: Species) -> u32 {
        self.hearts.current(species)
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn action(&self) -> PlayerAction {
        self.state.action()
    }

    pub fn facing(&self) -> Facing {
        self.state.facing()
    }

    pub fn jump_count(&self) -> u8 {
        self.jump.count()
    }

    pub fn jump_deadline(&self) -> Deadline {
        self.jump.deadline()
    }

    pub fn is_hurt(&self) -> bool {
        self.hurt.is_active()
    }

    pub fn hurt_until(&self) -> Deadline {
        self.hurt.until()
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprint.is_active()
    }

    pub fn sprint_until(&self) -> Deadline {
        self.sprint.until()
    }

    /// Animation for the current species and action
    pub fn animation_key(&self) -> AnimationKey {
        AnimationKey::new(self.species, self.state.action())
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::game::hud::HeadsUpDisplay;
    use approx::assert_relative_eq;
    use glam::Vec2;

    const START: Millis = 1_000;

    #[derive(Debug, Default)]
    struct TestBody {
        velocity: Vec2,
        position: Vec2,
        on_floor: bool,
    }

    impl PhysicsBody for TestBody {
        fn velocity(&self) -> Vec2 {
            self.velocity
        }

        fn set_velocity(&mut self, velocity: Vec2) {
            self.velocity = velocity;
        }

        fn on_floor(&self) -> bool {
            self.on_floor
        }

        fn position(&self) -> Vec2 {
            self.position
        }

        fn set_position(&mut self, position: Vec2) {
            self.position = position;
        }
    }

    struct Harness {
        player: PlayerController<ManualClock>,
        body: TestBody,
        hud: HeadsUpDisplay,
    }

    impl Harness {
        fn new(species: Species) -> Self {
            let mut hud = HeadsUpDisplay::new();
            let mut player = PlayerController::new(ManualClock::new(START), &mut hud);
            player.switch_species(species, &mut hud);
            player.drain_events();

            let body = TestBody {
                on_floor: true,
                ..Default::default()
            };
            Self { player, body, hud }
        }

        fn tick(&mut self, input: InputSignals) {
            self.tick_with_pointer(input, PointerPosition::default());
        }

        fn tick_with_pointer(&mut self, input: InputSignals, pointer: PointerPosition) {
            self.player
                .tick(&input, pointer, &mut self.body, &mut self.hud);
        }

        fn advance(&mut self, millis: Millis) {
            self.player.clock_mut().advance(millis);
        }

        fn now(&self) -> Millis {
            self.player.clock().now()
        }

        fn damage(&mut self, amount: u32) {
            self.player.damage(amount, &mut self.hud);
        }

        fn take_off(&mut self) {
            self.body.on_floor = false;
        }
    }

    #[test]
    fn test_new_controller_shows_full_hearts() {
        let mut hud = HeadsUpDisplay::new();
        let player = PlayerController::new(ManualClock::new(0), &mut hud);

        assert_eq!(hud.hearts(), (3, 3));
        assert_eq!(player.species(), Species::Green);
        assert_eq!(player.action(), PlayerAction::Stand);
        for species in Species::ALL {
            assert_eq!(player.hearts(species), species.max_hearts());
        }
    }

    #[test]
    fn test_with_config_rejects_invalid_tuning() {
        let mut hud = HeadsUpDisplay::new();
        let config = PlayerConfig {
            speed: -5.0,
            ..PlayerConfig::standard()
        };
        let result = PlayerController::with_config(config, ManualClock::new(0), &mut hud);
        assert_eq!(result.err(), Some(ConfigError::NonPositiveSpeed(-5.0)));
    }

    #[test]
    fn test_idle_tick_stands_still() {
        let mut h = Harness::new(Species::Blue);
        h.body.velocity = Vec2::new(120.0, 0.0);

        h.tick(InputSignals::NONE);

        assert_eq!(h.body.velocity, Vec2::ZERO);
        assert_eq!(h.player.action(), PlayerAction::Stand);
    }

    #[test]
    fn test_walk_right_and_left() {
        let mut h = Harness::new(Species::Blue);

        h.tick(InputSignals::right());
        assert_eq!(h.body.velocity.x, 240.0);
        assert_eq!(h.player.facing(), Facing::Right);
        assert_eq!(h.player.action(), PlayerAction::Walk);
        assert!(!h.player.animation().is_flipped_horizontal());

        h.tick(InputSignals::left());
        assert_eq!(h.body.velocity.x, -240.0);
        assert_eq!(h.player.facing(), Facing::Left);
        assert!(h.player.animation().is_flipped_horizontal());
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut h = Harness::new(Species::Tan);
        let input = InputSignals {
            left: true,
            right: true,
            ..InputSignals::NONE
        };

        h.tick(input);
        assert_eq!(h.body.velocity.x, -240.0);
        assert_eq!(h.player.facing(), Facing::Left);
    }

    #[test]
    fn test_walking_in_the_air_keeps_jump_action() {
        let mut h = Harness::new(Species::Blue);
        h.tick(InputSignals::jump());
        h.take_off();

        h.tick(InputSignals::left());
        assert_eq!(h.body.velocity, Vec2::new(-240.0, -420.0));
        assert_eq!(h.player.action(), PlayerAction::Jump);
    }

    #[test]
    fn test_jump_takes_priority_over_movement() {
        let mut h = Harness::new(Species::Blue);
        let input = InputSignals {
            jump: true,
            left: true,
            ..InputSignals::NONE
        };

        h.tick(input);
        assert_eq!(h.body.velocity, Vec2::new(0.0, -420.0));
        assert_eq!(h.player.facing(), Facing::Right);
        assert_eq!(h.player.action(), PlayerAction::Jump);
    }

    #[test]
    fn test_jump_sets_velocity_count_and_cooldown() {
        let mut h = Harness::new(Species::Blue);

        h.tick(InputSignals::jump());

        assert_eq!(h.body.velocity.y, -420.0);
        assert_eq!(h.player.jump_count(), 1);
        assert_eq!(h.player.jump_deadline().at(), START + 500);
        assert_eq!(h.player.action(), PlayerAction::Jump);
    }

    #[test]
    fn test_jump_refused_during_cooldown() {
        let mut h = Harness::new(Species::Blue);
        h.tick(InputSignals::jump());
        h.take_off();
        h.body.velocity.y = -300.0;

        h.advance(499);
        h.tick(InputSignals::jump());
        assert_eq!(h.body.velocity.y, -300.0);
        assert_eq!(h.player.jump_count(), 1);

        h.advance(1);
        h.tick(InputSignals::jump());
        assert_eq!(h.body.velocity.y, -420.0);
        assert_eq!(h.player.jump_count(), 2);
    }

    #[test]
    fn test_three_jumps_then_capped() {
        let mut h = Harness::new(Species::Pink);
        h.tick(InputSignals::jump());
        h.take_off();

        for expected in 2..=3 {
            h.advance(500);
            h.tick(InputSignals::jump());
            assert_eq!(h.player.jump_count(), expected);
        }

        h.body.velocity.y = 50.0;
        h.advance(500);
        h.tick(InputSignals::jump());
        assert_eq!(h.player.jump_count(), 3);
        assert_eq!(h.body.velocity.y, 50.0);
    }

    #[test]
    fn test_double_jump_species_spends_two_charges() {
        let mut h = Harness::new(Species::Green);

        h.tick(InputSignals::jump());
        assert_eq!(h.player.jump_count(), 2);
        assert_eq!(h.body.velocity.y, -420.0);

        h.take_off();
        h.advance(500);
        h.tick(InputSignals::jump());
        assert_eq!(h.player.jump_count(), 3);

        h.body.velocity.y = 10.0;
        h.advance(500);
        h.tick(InputSignals::jump());
        assert_eq!(h.player.jump_count(), 3);
        assert_eq!(h.body.velocity.y, 10.0);
    }

    #[test]
    fn test_floor_contact_resets_count_before_jumping() {
        let mut h = Harness::new(Species::Blue);
        h.tick(InputSignals::jump());
        h.take_off();
        h.advance(500);
        h.tick(InputSignals::jump());
        h.advance(500);
        h.tick(InputSignals::jump());
        assert_eq!(h.player.jump_count(), 3);

        h.body.on_floor = true;
        h.advance(500);
        h.tick(InputSignals::jump());
        assert_eq!(h.player.jump_count(), 1);
    }

    #[test]
    fn test_count_kept_while_airborne() {
        let mut h = Harness::new(Species::Blue);
        h.tick(InputSignals::jump());
        h.take_off();

        h.advance(100);
        h.tick(InputSignals::NONE);
        assert_eq!(h.player.jump_count(), 1);

        h.body.on_floor = true;
        h.tick(InputSignals::NONE);
        assert_eq!(h.player.jump_count(), 0);
    }

    #[test]
    fn test_damage_then_recover() {
        let mut h = Harness::new(Species::Green);
        assert_eq!(h.player.hearts(Species::Green), 3);

        h.damage(1);
        assert_eq!(h.player.hearts(Species::Green), 2);
        assert_eq!(h.player.action(), PlayerAction::Hurt);
        assert!(h.player.is_hurt());
        assert_eq!(h.player.hurt_until().at(), START + 400);
        assert_eq!(h.hud.hearts(), (2, 3));
        assert_eq!(
            h.player.animation().current(),
            AnimationKey::new(Species::Green, PlayerAction::Hurt)
        );

        // First tick past the window only closes it
        h.advance(401);
        h.tick(InputSignals::NONE);
        assert!(!h.player.is_hurt());
        assert_eq!(h.player.action(), PlayerAction::Hurt);

        h.tick(InputSignals::NONE);
        assert_eq!(h.player.action(), PlayerAction::Stand);
    }

    #[test]
    fn test_damage_clamps_at_zero_for_every_species() {
        for species in Species::ALL {
            for amount in 0..=6 {
                let mut h = Harness::new(species);
                let before = h.player.hearts(species);

                h.damage(amount);

                assert_eq!(h.player.hearts(species), before.saturating_sub(amount));
                assert_eq!(h.hud.hearts(), (h.player.hearts(species), species.max_hearts()));
            }
        }
    }

    #[test]
    fn test_depletion_reported_once() {
        let mut h = Harness::new(Species::Pink);

        h.damage(1);
        assert!(h.player.drain_events().is_empty());

        h.damage(5);
        assert_eq!(h.player.hearts(Species::Pink), 0);
        assert_eq!(
            h.player.drain_events(),
            vec![PlayerEvent::HeartsDepleted {
                species: Species::Pink
            }]
        );

        h.damage(1);
        assert_eq!(h.player.hearts(Species::Pink), 0);
        assert!(h.player.drain_events().is_empty());

        // No built-in game over
        assert!(!h.player.is_game_over());
    }

    #[test]
    fn test_hurt_window_ignores_all_input() {
        let mut h = Harness::new(Species::Blue);
        h.body.velocity = Vec2::new(50.0, 0.0);
        h.damage(1);

        let everything = InputSignals {
            jump: true,
            ability: true,
            left: true,
            right: true,
        };

        for _ in 0..4 {
            h.tick(everything);
            assert_eq!(h.body.velocity, Vec2::new(50.0, 0.0));
            assert_eq!(h.player.action(), PlayerAction::Hurt);
            assert_eq!(h.player.jump_count(), 0);
            assert!(h.hud.ability_bar_charged());
            assert!(!h.player.is_sprinting());
            h.advance(100);
        }

        // now == hurt_until: still inside
        assert_eq!(h.now(), h.player.hurt_until().at());
        h.tick(everything);
        assert!(h.player.is_hurt());
        assert_eq!(h.body.velocity, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_hurt_window_does_not_reset_jumps_on_floor() {
        let mut h = Harness::new(Species::Blue);
        h.tick(InputSignals::jump());
        h.damage(1);

        h.tick(InputSignals::NONE);
        assert_eq!(h.player.jump_count(), 1);
    }

    #[test]
    fn test_switch_preserves_pools() {
        let mut h = Harness::new(Species::Green);
        h.damage(1);

        h.player.switch_species(Species::Blue, &mut h.hud);
        assert_eq!(h.hud.hearts(), (5, 5));
        h.damage(3);

        h.player.switch_species(Species::Green, &mut h.hud);
        assert_eq!(h.player.hearts(Species::Green), 2);
        assert_eq!(h.hud.hearts(), (2, 3));
        assert_eq!(h.player.hearts(Species::Blue), 2);

        assert_eq!(
            h.player.drain_events(),
            vec![
                PlayerEvent::SpeciesSwitched {
                    from: Species::Green,
                    to: Species::Blue
                },
                PlayerEvent::SpeciesSwitched {
                    from: Species::Blue,
                    to: Species::Green
                },
            ]
        );
    }

    #[test]
    fn test_switch_to_same_species_only_refreshes_hud() {
        let mut h = Harness::new(Species::Tan);
        h.hud.update_hearts(0, 0);

        h.player.switch_species(Species::Tan, &mut h.hud);
        assert_eq!(h.hud.hearts(), (3, 3));
        assert!(h.player.drain_events().is_empty());
    }

    #[test]
    fn test_sprint_boosts_until_deadline() {
        let mut h = Harness::new(Species::Blue);

        h.tick(InputSignals::ability());
        assert!(h.player.is_sprinting());
        assert_eq!(h.player.sprint_until().at(), START + 1_500);
        assert!(!h.hud.ability_bar_charged());
        assert_eq!(h.player.action(), PlayerAction::Sprint);
        assert_relative_eq!(h.body.velocity.x, 10.0);

        // Each later tick adds on top of whatever is there
        h.advance(16);
        h.tick(InputSignals::NONE);
        assert_relative_eq!(h.body.velocity.x, 20.0);

        h.advance(16);
        h.tick(InputSignals::right());
        assert_relative_eq!(h.body.velocity.x, 30.0);
        assert_eq!(h.player.action(), PlayerAction::Sprint);

        // Sprint runs out: no boost, horizontal velocity left alone this tick
        h.advance(1_500);
        h.tick(InputSignals::NONE);
        assert!(!h.player.is_sprinting());
        assert_relative_eq!(h.body.velocity.x, 30.0);

        // Normal handling is back
        h.tick(InputSignals::NONE);
        assert_eq!(h.body.velocity.x, 0.0);
        assert_eq!(h.player.action(), PlayerAction::Stand);
    }

    #[test]
    fn test_sprint_follows_facing() {
        let mut h = Harness::new(Species::Blue);
        h.tick(InputSignals::left());
        assert_eq!(h.body.velocity.x, -240.0);

        h.tick(InputSignals::left().with_ability());
        assert_relative_eq!(h.body.velocity.x, -250.0);

        h.tick(InputSignals::left());
        assert_relative_eq!(h.body.velocity.x, -260.0);
    }

    #[test]
    fn test_ability_needs_charged_bar() {
        let mut h = Harness::new(Species::Blue);
        h.hud.drain_ability_bar(8_000);

        h.tick(InputSignals::ability());
        assert!(!h.player.is_sprinting());
        assert!(h.player.drain_events().is_empty());

        h.hud.update(8_000);
        h.tick(InputSignals::ability());
        assert!(h.player.is_sprinting());
    }

    #[test]
    fn test_ability_drains_bar_for_configured_delay() {
        let mut h = Harness::new(Species::Tan);
        h.tick(InputSignals::ability());

        h.hud.update(7_999);
        assert!(!h.hud.ability_bar_charged());
        h.hud.update(1);
        assert!(h.hud.ability_bar_charged());
    }

    #[test]
    fn test_no_ability_species_does_nothing() {
        let mut h = Harness::new(Species::Green);

        h.tick(InputSignals::ability());
        assert!(h.hud.ability_bar_charged());
        assert!(!h.player.is_sprinting());
        assert!(h.player.drain_events().is_empty());
    }

    #[test]
    fn test_love_only_spends_the_bar() {
        let mut h = Harness::new(Species::Pink);
        h.body.position = Vec2::new(5.0, 5.0);

        h.tick_with_pointer(InputSignals::ability(), PointerPosition::new(300.0, 40.0));

        assert!(!h.hud.ability_bar_charged());
        assert_eq!(h.body.position, Vec2::new(5.0, 5.0));
        assert_eq!(h.body.velocity, Vec2::ZERO);
        assert!(!h.player.is_sprinting());
        assert_eq!(
            h.player.drain_events(),
            vec![PlayerEvent::AbilityUsed {
                species: Species::Pink,
                ability: AbilityKind::Love
            }]
        );
    }

    #[test]
    fn test_teleport_moves_to_pointer_without_touching_velocity() {
        let mut h = Harness::new(Species::Tan);
        h.take_off();
        h.body.position = Vec2::new(10.0, 10.0);
        h.body.velocity = Vec2::new(240.0, -50.0);

        h.tick_with_pointer(
            InputSignals::right().with_ability(),
            PointerPosition::new(640.5, 200.25),
        );

        assert_eq!(h.body.position, Vec2::new(640.5, 200.25));
        assert_eq!(h.body.velocity, Vec2::new(240.0, -50.0));
        assert!(!h.hud.ability_bar_charged());
    }

    #[test]
    fn test_game_over_freezes_everything() {
        let mut h = Harness::new(Species::Blue);
        h.body.velocity = Vec2::new(77.0, 0.0);
        h.player.set_game_over(true);

        h.tick(InputSignals::jump().with_ability());
        h.damage(2);
        h.player.switch_species(Species::Tan, &mut h.hud);

        assert_eq!(h.body.velocity, Vec2::new(77.0, 0.0));
        assert_eq!(h.player.hearts(Species::Blue), 5);
        assert_eq!(h.player.species(), Species::Blue);
        assert_eq!(h.player.action(), PlayerAction::Stand);
        assert!(!h.player.is_hurt());
        assert!(h.hud.ability_bar_charged());

        h.player.set_game_over(false);
        h.tick(InputSignals::NONE);
        assert_eq!(h.body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_animation_key_tracks_species_and_action() {
        let mut h = Harness::new(Species::Blue);

        h.tick(InputSignals::right());
        assert_eq!(
            h.player.animation().current(),
            AnimationKey::new(Species::Blue, PlayerAction::Walk)
        );

        h.player.switch_species(Species::Tan, &mut h.hud);
        h.tick(InputSignals::NONE);
        assert_eq!(h.player.animation_key().to_string(), "tan_stand");
        assert_eq!(h.player.animation().current(), h.player.animation_key());
    }

    #[test]
    fn test_animation_timing_advances_frames() {
        let mut h = Harness::new(Species::Green);
        h.tick(InputSignals::right());

        h.player.update_animation_timing(0.15);
        assert_eq!(h.player.animation().current_frame(), 1);
    }
}
