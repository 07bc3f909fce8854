use bevy::prelude::*;

/// Entities the pointer may drag (the two anchors).
#[derive(Component)]
pub struct Draggable;
