use bevy::prelude::*;

/// Elastic rest lengths are pre-tensioned: slightly shorter than the initial
/// separation so the mesh hangs taut.
pub const REST_SLACK: f32 = 0.92;

/// A structural link between two mass-point entities. Carries either a
/// [`Rod`] or a [`Spring`] depending on the session's elasticity mode.
#[derive(Component)]
pub struct Link {
    pub start: Entity,
    pub end: Entity,
}

/// Fixed-distance constraint, solved by positional relaxation.
#[derive(Component)]
pub struct Rod {
    pub length: f32,
}

/// Damped spring constraint.
#[derive(Component)]
pub struct Spring {
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    /// Builds a spring whose rest length is the initial separation scaled by
    /// [`REST_SLACK`].
    pub fn with_slack(initial_distance: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            rest_length: REST_SLACK * initial_distance,
            stiffness,
            damping,
        }
    }
}

/// Never integrated; position is driven externally (anchors).
#[derive(Component)]
pub struct Locked;

/// Static circular obstacle.
#[derive(Component)]
pub struct StaticCircle {
    pub radius: f32,
    pub friction: f32,
    pub elasticity: f32,
}

/// Static thick segment (the ground).
#[derive(Component)]
pub struct StaticSegment {
    pub a: Vec2,
    pub b: Vec2,
    pub radius: f32,
    pub friction: f32,
    pub elasticity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_length_is_the_slacked_initial_distance() {
        // Horizontally adjacent pair on a 200-wide, 30-cell cloth.
        let d = 200.0_f32 / 30.0;
        let spring = Spring::with_slack(d, 5000.0, 300.0);
        assert_eq!(spring.rest_length, 0.92 * d);
    }

    #[test]
    fn assembly_is_deterministic() {
        let a = Spring::with_slack(12.5, 5000.0, 300.0);
        let b = Spring::with_slack(12.5, 5000.0, 300.0);
        assert_eq!(a.rest_length, b.rest_length);
    }
}
