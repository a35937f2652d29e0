// Notifications the player controller raises for its host

use super::species::{AbilityKind, Species};

/// Something the host may want to react to
///
/// The controller only reports; deciding what a depleted pool means (game
/// over, respawn, forced species switch) is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A species' heart pool just dropped to zero
    HeartsDepleted { species: Species },
    /// The active species changed
    SpeciesSwitched { from: Species, to: Species },
    /// A special ability fired and drained the ability bar
    AbilityUsed {
        species: Species,
        ability: AbilityKind,
    },
}
