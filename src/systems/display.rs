use bevy::prelude::*;
use bevy_prototype_lyon::{
    draw::Stroke, entity::ShapeBundle, path::PathBuilder, prelude::GeometryBuilder,
};

use crate::{
    components::{
        cloth::{Anchor, Cloth, ClothShape, MassPoint, Tether},
        physics::{Link, StaticCircle, StaticSegment},
    },
    config::SimConfig,
};

/// Rebuilds the two cloth polylines from live point positions every frame.
///
/// The visit orders were linearized once at setup; here each order only
/// projects current positions into one stroked path, so the whole mesh is two
/// draw calls instead of one per link.
pub fn draw_cloth(
    mut commands: Commands,
    cloth: Res<Cloth>,
    old_shapes: Query<Entity, With<ClothShape>>,
    point_query: Query<&Transform, With<MassPoint>>,
    config: Res<SimConfig>,
) {
    for entity in old_shapes.iter() {
        commands.entity(entity).despawn();
    }

    let mut positions = Vec::with_capacity(cloth.points.len());
    for &entity in &cloth.points {
        if let Ok(transform) = point_query.get(entity) {
            positions.push(transform.translation.truncate());
        } else {
            positions.push(Vec2::ZERO);
        }
    }

    for order in [&cloth.column_order, &cloth.row_order] {
        let mut path_builder = PathBuilder::new();
        path_builder.move_to(positions[order[0]]);
        for &index in &order[1..] {
            path_builder.line_to(positions[index]);
        }
        let path = path_builder.build();

        commands.spawn((
            ShapeBundle {
                path: GeometryBuilder::build_as(&path),
                transform: Transform::default(),
                visibility: default(),
                ..default()
            },
            Stroke::new(Color::srgb(0.9, 0.8, 0.1), config.line_thickness),
            ClothShape,
        ));
    }
}

/// Immediate-mode extras: anchor tethers and markers, plus the static
/// scenery outlines.
pub fn draw_markers(
    tethers: Query<&Link, With<Tether>>,
    point_query: Query<&Transform, With<MassPoint>>,
    anchors: Query<&Transform, With<Anchor>>,
    circles: Query<(&Transform, &StaticCircle), Without<MassPoint>>,
    segments: Query<&StaticSegment>,
    mut gizmos: Gizmos,
) {
    for link in &tethers {
        if let (Ok(start), Ok(end)) = (point_query.get(link.start), point_query.get(link.end)) {
            gizmos.line_2d(
                start.translation.truncate(),
                end.translation.truncate(),
                Color::WHITE,
            );
        }
    }

    for transform in &anchors {
        gizmos.circle_2d(
            Isometry2d::from_translation(transform.translation.truncate()),
            4.0,
            Color::srgb(0.5, 0.5, 0.1),
        );
    }

    let scenery_color = Color::srgb(0.5, 0.5, 0.5);
    for (transform, circle) in &circles {
        gizmos.circle_2d(
            Isometry2d::from_translation(transform.translation.truncate()),
            circle.radius,
            scenery_color,
        );
    }
    for segment in &segments {
        gizmos.line_2d(segment.a, segment.b, scenery_color);
    }
}
