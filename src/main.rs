mod components;
mod config;
mod mesh;
mod systems;

use bevy::prelude::*;
use bevy_prototype_lyon::prelude::ShapePlugin;
use clap::Parser;

use config::SimConfig;
use systems::{display, mouse, physics, setup};

/// Physics tick rate; each tick runs the sub-stepped advance.
const TICK_HZ: f64 = 50.0;

fn main() -> Result<(), String> {
    let config = SimConfig::parse();
    config.validate()?;

    let exit = App::new()
        .add_plugins((DefaultPlugins, ShapePlugin))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(config)
        .add_systems(Startup, (setup::setup_camera, setup::setup_cloth))
        .add_systems(FixedUpdate, physics::advance_cloth)
        .add_systems(
            Update,
            (mouse::drag_anchor, display::draw_cloth, display::draw_markers).chain(),
        )
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("app exited with error code {code}")),
    }
}
