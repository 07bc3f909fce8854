use bevy::{prelude::*, window::PrimaryWindow};

use crate::components::mouse::Draggable;

/// While the left button is held, drags whichever anchor is nearest the
/// cursor to the cursor's world position. Runs outside the physics tick; the
/// next tick's rod pass picks the new position up.
pub fn drag_anchor(
    windows_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut anchors: Query<&mut Transform, With<Draggable>>,
    mouse_input: Res<ButtonInput<MouseButton>>,
) {
    if !mouse_input.pressed(MouseButton::Left) {
        return;
    }

    let (camera, camera_transform) = camera_query.single();
    let window = windows_query.single();

    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    match camera.viewport_to_world_2d(camera_transform, cursor_pos) {
        Ok(world_position) => {
            let mut nearest: Option<(f32, Mut<Transform>)> = None;
            for transform in anchors.iter_mut() {
                let d2 = transform.translation.truncate().distance_squared(world_position);
                if nearest.as_ref().map_or(true, |(best, _)| d2 < *best) {
                    nearest = Some((d2, transform));
                }
            }
            if let Some((_, mut transform)) = nearest {
                transform.translation.x = world_position.x;
                transform.translation.y = world_position.y;
                debug!("anchor -> ({:.1}, {:.1})", world_position.x, world_position.y);
            }
        }
        Err(e) => {
            warn!("cursor position could not be projected: {e:?}");
        }
    }
}
