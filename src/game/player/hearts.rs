// Per-species heart pools

use super::species::Species;

/// Remaining hearts for every species, indexed by `Species`
///
/// Pools are independent: damage only touches one species, and switching
/// species never refills anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartPool {
    current: [u32; Species::COUNT],
}

impl HeartPool {
    /// Every species at full health
    pub fn full() -> Self {
        Self {
            current: Species::ALL.map(Species::max_hearts),
        }
    }

    /// Hearts left for a species
    pub fn current(&self, species: Species) -> u32 {
        self.current[species.index()]
    }

    /// Maximum hearts for a species
    pub fn max(&self, species: Species) -> u32 {
        species.max_hearts()
    }

    /// Remove hearts, stopping at zero. Returns what is left.
    pub fn damage(&mut self, species: Species, amount: u32) -> u32 {
        let slot = &mut self.current[species.index()];
        *slot = slot.saturating_sub(amount);
        *slot
    }

    pub fn is_depleted(&self, species: Species) -> bool {
        self.current(species) == 0
    }
}

impl Default for HeartPool {
    fn default() -> Self {
        Self::full()
    }
}
