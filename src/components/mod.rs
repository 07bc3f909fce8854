pub mod cloth;
pub mod mouse;
pub mod physics;
