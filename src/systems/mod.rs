pub mod display;
pub mod mouse;
pub mod physics;
pub mod setup;
