// Game module - gameplay entities built on the engine

pub mod animation;
pub mod player;

pub use animation::{AnimationComponent, AnimationState};
pub use player::Player;
