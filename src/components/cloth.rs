use bevy::prelude::*;

/// One simulated particle per lattice index.
#[derive(Component)]
pub struct MassPoint {
    pub previous_position: Option<Vec3>,
    pub mass: f32,
    /// Collision radius against static scenery.
    pub radius: f32,
    /// Spring forces accumulated over the current sub-step.
    pub force: Vec3,
}

impl MassPoint {
    pub fn new(mass: f32, radius: f32) -> Self {
        Self {
            previous_position: None,
            mass,
            radius,
            force: Vec3::ZERO,
        }
    }
}

/// A fixed external body one mesh corner hangs from. Moved only by input.
#[derive(Component)]
pub struct Anchor;

/// Marker for the rigid links tying the two boundary points to the anchors.
#[derive(Component)]
pub struct Tether;

/// Marker for the respawned-per-frame polyline shapes.
#[derive(Component)]
pub struct ClothShape;

/// The simulation context: mass-point entities in lattice index order plus
/// the two precomputed serpentine visit orders. Owned here, handed to the
/// physics and display systems explicitly.
#[derive(Resource)]
pub struct Cloth {
    pub points: Vec<Entity>,
    pub column_order: Vec<usize>,
    pub row_order: Vec<usize>,
}
