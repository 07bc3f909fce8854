use bevy::prelude::*;

use crate::{
    components::{
        cloth::{Anchor, Cloth, MassPoint, Tether},
        mouse::Draggable,
        physics::{Link, Locked, Rod, Spring, StaticCircle, StaticSegment},
    },
    config::SimConfig,
    mesh::{topology, traversal},
};

/// Collision radius of each cloth point.
const POINT_RADIUS: f32 = 1.0;

/// How far outside the top corners the anchors start.
const ANCHOR_OFFSET: Vec2 = Vec2::new(50.0, 50.0);

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Builds the whole scene: mass points in lattice index order, one link per
/// structural connection, two draggable anchors tethered to the top corners,
/// and the static scenery the cloth can drape over.
pub fn setup_cloth(mut commands: Commands, config: Res<SimConfig>) {
    let lattice = config.lattice();
    let origin = config.origin();
    let positions = lattice.positions(origin, config.width, config.height);

    // Creation order must match lattice order: the Cloth resource and the
    // traversal orders index this list by lattice position.
    let points: Vec<Entity> = positions
        .iter()
        .map(|p| {
            commands
                .spawn((
                    Transform::from_xyz(p.x, p.y, 0.0),
                    MassPoint::new(config.point_mass, POINT_RADIUS),
                ))
                .id()
        })
        .collect();

    let links = topology::connections(&lattice);
    for &(i, j) in &links {
        let link = Link {
            start: points[i],
            end: points[j],
        };
        let initial_distance = positions[i].distance(positions[j]);
        if config.rigid {
            commands.spawn((
                link,
                Rod {
                    length: initial_distance,
                },
            ));
        } else {
            commands.spawn((
                link,
                Spring::with_slack(initial_distance, config.stiffness, config.damping),
            ));
        }
    }

    // The net hangs from the tops of the first and last columns; anchor
    // tethers are rigid regardless of the elasticity mode.
    let corners = [lattice.ycount, lattice.point_count() - 1];
    let offsets = [
        Vec2::new(-ANCHOR_OFFSET.x, ANCHOR_OFFSET.y),
        Vec2::new(ANCHOR_OFFSET.x, ANCHOR_OFFSET.y),
    ];
    for (&corner, offset) in corners.iter().zip(offsets) {
        let anchor_pos = positions[corner] + offset;
        let anchor = commands
            .spawn((
                Transform::from_xyz(anchor_pos.x, anchor_pos.y, 0.0),
                MassPoint::new(config.point_mass, POINT_RADIUS),
                Anchor,
                Draggable,
                Locked,
            ))
            .id();
        commands.spawn((
            Link {
                start: points[corner],
                end: anchor,
            },
            Rod {
                length: positions[corner].distance(anchor_pos),
            },
            Tether,
        ));
    }

    // Ground strip just under the cloth, circle obstacle further down.
    commands.spawn(StaticSegment {
        a: Vec2::new(origin.x + 20.0, origin.y - 5.0),
        b: Vec2::new(origin.x + config.width - 20.0, origin.y - 5.0),
        radius: 5.0,
        friction: 1.0,
        elasticity: 0.1,
    });
    commands.spawn((
        Transform::from_xyz(origin.x + config.width / 2.0, origin.y - 160.0, 0.0),
        StaticCircle {
            radius: 70.0,
            friction: 1.0,
            elasticity: 0.0,
        },
    ));

    info!(
        "cloth: {} mass points, {} {} links, 2 anchors",
        points.len(),
        links.len(),
        if config.rigid { "rigid" } else { "elastic" },
    );

    commands.insert_resource(Cloth {
        points,
        column_order: traversal::zigzag_columns(&lattice),
        row_order: traversal::zigzag_rows(&lattice),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn built_app(args: &[&str]) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(SimConfig::parse_from(args));
        app.add_systems(Startup, setup_cloth);
        app.update();
        app
    }

    #[test]
    fn spawns_the_full_elastic_mesh() {
        let mut app = built_app(&["clothnet", "--xcount=4", "--ycount=3"]);
        let world = app.world_mut();

        // 5 * 4 lattice points plus the two anchors.
        let mut point_query = world.query::<&MassPoint>();
        assert_eq!(point_query.iter(world).count(), 22);

        let mut spring_query = world.query::<&Spring>();
        assert_eq!(spring_query.iter(world).count(), 2 * 4 * 3 + 4 + 3);

        // Only the tethers are rigid in elastic mode.
        let mut rod_query = world.query::<&Rod>();
        assert_eq!(rod_query.iter(world).count(), 2);

        let cloth = world.resource::<Cloth>();
        assert_eq!(cloth.points.len(), 20);
        assert_eq!(cloth.column_order.len(), 20);
        assert_eq!(cloth.row_order.len(), 20);
    }

    #[test]
    fn rigid_mode_turns_every_link_into_a_rod() {
        let mut app = built_app(&["clothnet", "--xcount=2", "--ycount=2", "--rigid"]);
        let world = app.world_mut();

        let mut spring_query = world.query::<&Spring>();
        assert_eq!(spring_query.iter(world).count(), 0);

        // 12 mesh links plus 2 tethers.
        let mut rod_query = world.query::<&Rod>();
        assert_eq!(rod_query.iter(world).count(), 14);
    }
}
