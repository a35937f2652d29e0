// Heads-up display model
//
// The HUD shows the active species' hearts and owns the ability bar. The
// player controller only pushes hearts, asks for a drain and reads the charge
// flag; recharging happens here.

use crate::core::Millis;

/// The HUD operations the player controller relies on
pub trait Hud {
    /// Show `current` of `max` hearts
    fn update_hearts(&mut self, current: u32, max: u32);

    /// Empty the ability bar and refill it over `duration_ms`
    fn drain_ability_bar(&mut self, duration_ms: Millis);

    /// Whether an ability may be used right now
    fn ability_bar_charged(&self) -> bool;
}

/// Recharging meter gating special abilities
#[derive(Debug, Clone, Default)]
pub struct AbilityBar {
    /// Full recharge time of the last drain
    recharge_ms: Millis,
    /// Time left until charged
    remaining_ms: Millis,
}

impl AbilityBar {
    /// A fully charged bar
    pub fn charged() -> Self {
        Self::default()
    }

    pub fn is_charged(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Empty the bar; it refills over `duration_ms`
    pub fn drain(&mut self, duration_ms: Millis) {
        self.recharge_ms = duration_ms;
        self.remaining_ms = duration_ms;
    }

    /// Advance the recharge
    pub fn update(&mut self, dt_ms: Millis) {
        if self.remaining_ms == 0 {
            return;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms);
        if self.remaining_ms == 0 {
            log::debug!("Ability bar recharged");
        }
    }

    /// Fill level from 0.0 (just drained) to 1.0 (charged)
    pub fn fill(&self) -> f32 {
        if self.recharge_ms == 0 {
            return 1.0;
        }
        1.0 - self.remaining_ms as f32 / self.recharge_ms as f32
    }
}

/// Hearts readout plus ability bar
#[derive(Debug, Clone, Default)]
pub struct HeadsUpDisplay {
    hearts: u32,
    max_hearts: u32,
    ability_bar: AbilityBar,
}

impl HeadsUpDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hearts currently shown
    pub fn hearts(&self) -> (u32, u32) {
        (self.hearts, self.max_hearts)
    }

    pub fn ability_bar(&self) -> &AbilityBar {
        &self.ability_bar
    }

    /// Advance HUD timers by one simulation step
    pub fn update(&mut self, dt_ms: Millis) {
        self.ability_bar.update(dt_ms);
    }

    /// One-line text rendering, e.g. `♥♥♡ [#####-----]`
    pub fn status_line(&self) -> String {
        const BAR_WIDTH: usize = 10;

        let full = self.hearts.min(self.max_hearts) as usize;
        let empty = self.max_hearts as usize - full;
        let filled = (self.ability_bar.fill() * BAR_WIDTH as f32).round() as usize;
        let filled = filled.min(BAR_WIDTH);

        format!(
            "{}{} [{}{}]",
            "♥".repeat(full),
            "♡".repeat(empty),
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled)
        )
    }
}

impl Hud for HeadsUpDisplay {
    fn update_hearts(&mut self, current: u32, max: u32) {
        self.hearts = current;
        self.max_hearts = max;
    }

    fn drain_ability_bar(&mut self, duration_ms: Millis) {
        self.ability_bar.drain(duration_ms);
    }

    fn ability_bar_charged(&self) -> bool {
        self.ability_bar.is_charged()
    }
}
