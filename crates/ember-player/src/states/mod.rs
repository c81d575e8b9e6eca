//! Concrete demo states for the player

mod gameplay;
mod menu;
mod pause;

pub use gameplay::GameplayState;
pub use menu::MainMenuState;
pub use pause::PauseState;
