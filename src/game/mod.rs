// Game modules: the player and the HUD it reports to

pub mod hud;
pub mod player;
