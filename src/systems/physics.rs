use bevy::prelude::*;

use crate::{
    components::{
        cloth::MassPoint,
        physics::{Link, Locked, Rod, Spring, StaticCircle, StaticSegment},
    },
    config::SimConfig,
};

/// One 50 Hz tick advances the simulation in several small fixed steps;
/// a single large step makes stiff springs and rods diverge visibly when an
/// anchor is dragged fast.
const SUBSTEPS: usize = 4;
const SUBSTEP_DT: f32 = 0.009;

/// Relaxation passes per sub-step for fixed-length rods.
const ROD_ITERATIONS: usize = 5;

/// Advances the whole cloth by one tick: spring forces, Verlet integration,
/// rod relaxation, then scenery contacts, repeated per sub-step.
pub fn advance_cloth(
    config: Res<SimConfig>,
    springs: Query<(&Link, &Spring)>,
    rods: Query<(&Link, &Rod)>,
    mut points: Query<(&mut Transform, &mut MassPoint, Option<&Locked>)>,
    circles: Query<(&Transform, &StaticCircle), Without<MassPoint>>,
    segments: Query<&StaticSegment>,
) {
    let gravity = config.gravity().extend(0.0);

    for _ in 0..SUBSTEPS {
        for (link, spring) in &springs {
            if let Ok([(start_tf, mut start_point, _), (end_tf, mut end_point, _)]) =
                points.get_many_mut([link.start, link.end])
            {
                let delta = end_tf.translation - start_tf.translation;
                let length = delta.length();
                if length <= f32::EPSILON {
                    continue;
                }
                let axis = delta / length;

                let start_velocity = start_point
                    .previous_position
                    .map_or(Vec3::ZERO, |p| (start_tf.translation - p) / SUBSTEP_DT);
                let end_velocity = end_point
                    .previous_position
                    .map_or(Vec3::ZERO, |p| (end_tf.translation - p) / SUBSTEP_DT);
                let separating_speed = (end_velocity - start_velocity).dot(axis);

                let magnitude = spring.stiffness * (spring.rest_length - length)
                    - spring.damping * separating_speed;
                end_point.force += axis * magnitude;
                start_point.force -= axis * magnitude;
            }
        }

        for (mut transform, mut point, locked) in points.iter_mut() {
            if locked.is_some() {
                point.force = Vec3::ZERO;
                continue;
            }
            let position = transform.translation;
            let velocity = point
                .previous_position
                .map_or(Vec3::ZERO, |previous| position - previous);
            let acceleration = gravity + point.force / point.mass;

            transform.translation += velocity + acceleration * SUBSTEP_DT * SUBSTEP_DT;
            point.previous_position = Some(position);
            point.force = Vec3::ZERO;
        }

        for _ in 0..ROD_ITERATIONS {
            for (link, rod) in &rods {
                if let Ok([(mut start_tf, _, start_locked), (mut end_tf, _, end_locked)]) =
                    points.get_many_mut([link.start, link.end])
                {
                    let (start_locked, end_locked) =
                        (start_locked.is_some(), end_locked.is_some());
                    if start_locked && end_locked {
                        continue;
                    }

                    let start_pos = start_tf.translation;
                    let end_pos = end_tf.translation;
                    let delta = end_pos - start_pos;
                    let length = delta.length();
                    if length <= f32::EPSILON {
                        continue;
                    }
                    let half = (delta / length) * rod.length / 2.0;
                    let midpoint = (start_pos + end_pos) / 2.0;

                    if !start_locked {
                        start_tf.translation = if end_locked {
                            end_pos - half * 2.0
                        } else {
                            midpoint - half
                        };
                    }
                    if !end_locked {
                        end_tf.translation = if start_locked {
                            start_pos + half * 2.0
                        } else {
                            midpoint + half
                        };
                    }
                }
            }
        }

        for (mut transform, mut point, locked) in points.iter_mut() {
            if locked.is_some() {
                continue;
            }
            for (circle_tf, circle) in &circles {
                push_out(
                    transform.as_mut(),
                    point.as_mut(),
                    circle_tf.translation.truncate(),
                    circle.radius,
                    circle.friction,
                    circle.elasticity,
                );
            }
            for segment in &segments {
                let contact = closest_on_segment(
                    transform.translation.truncate(),
                    segment.a,
                    segment.b,
                );
                push_out(
                    transform.as_mut(),
                    point.as_mut(),
                    contact,
                    segment.radius,
                    segment.friction,
                    segment.elasticity,
                );
            }
        }
    }
}

/// Projects a point out of a circular contact at `center` and reshapes its
/// implicit Verlet velocity: the normal component bounces scaled by
/// elasticity, the tangential component loses `friction` of itself.
fn push_out(
    transform: &mut Transform,
    point: &mut MassPoint,
    center: Vec2,
    shape_radius: f32,
    friction: f32,
    elasticity: f32,
) {
    let combined = shape_radius + point.radius;
    let position = transform.translation.truncate();
    let offset = position - center;
    let distance = offset.length();
    if distance >= combined {
        return;
    }
    let normal = if distance > f32::EPSILON {
        offset / distance
    } else {
        Vec2::Y
    };
    let surface = center + normal * combined;

    let previous = point
        .previous_position
        .unwrap_or(transform.translation)
        .truncate();
    let velocity = position - previous;
    let normal_velocity = normal * velocity.dot(normal);
    let tangent_velocity = velocity - normal_velocity;
    let response = tangent_velocity * (1.0 - friction) - normal_velocity * elasticity;

    let z = transform.translation.z;
    transform.translation = surface.extend(z);
    point.previous_position = Some((surface - response).extend(z));
}

fn closest_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let t = ((p - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_clamps_to_the_segment_ends() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_on_segment(Vec2::new(5.0, 3.0), a, b), Vec2::new(5.0, 0.0));
        assert_eq!(closest_on_segment(Vec2::new(-4.0, 1.0), a, b), a);
        assert_eq!(closest_on_segment(Vec2::new(14.0, -2.0), a, b), b);
    }

    #[test]
    fn push_out_leaves_separated_points_alone() {
        let mut transform = Transform::from_xyz(100.0, 0.0, 0.0);
        let mut point = MassPoint::new(2.0, 1.0);
        push_out(&mut transform, &mut point, Vec2::ZERO, 70.0, 1.0, 0.1);
        assert_eq!(transform.translation, Vec3::new(100.0, 0.0, 0.0));
        assert!(point.previous_position.is_none());
    }

    #[test]
    fn push_out_projects_onto_the_contact_surface() {
        let mut transform = Transform::from_xyz(0.0, 60.0, 0.0);
        let mut point = MassPoint::new(2.0, 1.0);
        point.previous_position = Some(Vec3::new(0.0, 65.0, 0.0));
        push_out(&mut transform, &mut point, Vec2::ZERO, 70.0, 1.0, 0.0);
        // Surface sits at circle radius + point radius above the center.
        assert_eq!(transform.translation, Vec3::new(0.0, 71.0, 0.0));
        // Full friction and zero elasticity kill the velocity entirely.
        assert_eq!(point.previous_position, Some(Vec3::new(0.0, 71.0, 0.0)));
    }
}
