// Playable alien species

use std::fmt;

/// Special ability attached to a species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityKind {
    /// No special ability
    None,
    /// Timed horizontal speed boost
    Sprint,
    /// Reserved slot with no effect yet. Triggering it still drains the
    /// ability bar so the cooldown behaves like every other ability.
    Love,
    /// Jump straight to the pointer
    Teleport,
}

/// One of the four selectable aliens
///
/// Each species has its own heart pool and maximum, and exactly one ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Green,
    Blue,
    Pink,
    Tan,
}

impl Species {
    /// Number of species, for fixed-size per-species tables
    pub const COUNT: usize = 4;

    /// Every species in character-select order
    pub const ALL: [Species; Species::COUNT] =
        [Species::Green, Species::Blue, Species::Pink, Species::Tan];

    /// Slot in per-species tables
    pub fn index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::Blue => 1,
            Self::Pink => 2,
            Self::Tan => 3,
        }
    }

    /// Species in a character-select slot
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    pub fn max_hearts(self) -> u32 {
        match self {
            Self::Green => 3,
            Self::Blue => 5,
            Self::Pink => 2,
            Self::Tan => 3,
        }
    }

    pub fn ability(self) -> AbilityKind {
        match self {
            Self::Green => AbilityKind::None,
            Self::Blue => AbilityKind::Sprint,
            Self::Pink => AbilityKind::Love,
            Self::Tan => AbilityKind::Teleport,
        }
    }

    /// Whether a successful jump also spends a bonus jump charge
    pub fn has_double_jump(self) -> bool {
        matches!(self, Self::Green)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Tan => "tan",
        }
    }
}

impl Default for Species {
    fn default() -> Self {
        Self::Green
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
