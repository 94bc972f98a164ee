use log::{debug, info};
use macroquad::prelude::*;
use nalgebra::{Point3, Vector3};
use occluder_plane::{Aabb, Plane};
use plane_viz::{OrbitCamera, draw_aabb, draw_plane, side_color};

const PLANE_EXTENT: f32 = 12.0;
const BOX_HALF_EXTENT: f32 = 1.5;
const SWING: f32 = 10.0;

/// The cutting plane at time `t`: slowly wobbling, and shifted with W/S.
fn plane_at(t: f32, offset: f32) -> Plane {
    let normal = Vector3::new(0.4 * (t * 0.3).sin(), 1.0, 0.4 * (t * 0.2).cos());
    let mut plane = Plane::from_normal(normal, offset);
    // the normal is never zero here
    if let Err(err) = plane.normalize() {
        debug!("keeping unnormalized plane: {err}");
    }
    plane
}

/// Box position at time `t`, swinging up and down through the plane.
fn box_at(t: f32) -> Aabb {
    let center = Point3::new(3.0 * (t * 0.7).cos(), SWING * (t * 0.9).sin(), 0.0);
    Aabb::from_center_half_extents(center, Vector3::repeat(BOX_HALF_EXTENT))
}

#[macroquad::main("Plane Classification")]
async fn main() {
    env_logger::init();
    info!("drag to orbit, scroll to zoom, W/S to move the plane");

    let mut camera = OrbitCamera::new(40.0, 0.6, 0.4);
    let mut offset = 0.0;
    let mut last_side = None;
    let mut previous = box_at(0.0);

    loop {
        camera.update();
        if is_key_down(KeyCode::W) {
            offset += 5.0 * get_frame_time();
        }
        if is_key_down(KeyCode::S) {
            offset -= 5.0 * get_frame_time();
        }

        let t = get_time() as f32;
        let plane = plane_at(t, offset);
        let current = box_at(t);
        let motion = current.center() - previous.center();

        let fixed = plane.classify_box(&current);
        let swept = plane.classify_swept_box(&previous, motion);
        if last_side != Some(swept) {
            debug!("swept box is now {swept:?} against {plane}");
            last_side = Some(swept);
        }

        clear_background(Color::from_rgba(15, 15, 25, 255));
        set_camera(&camera.to_camera3d());

        draw_plane(&plane, PLANE_EXTENT, Color::from_rgba(90, 120, 200, 120));
        draw_aabb(&current, swept);

        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(6.0, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 6.0, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 6.0), BLUE);

        set_default_camera();

        draw_text(&format!("Plane {plane}"), 10.0, 25.0, 20.0, WHITE);
        draw_text(&format!("Static box test: {fixed:?}"), 10.0, 50.0, 18.0, side_color(fixed));
        draw_text(&format!("Swept box test: {swept:?}"), 10.0, 70.0, 18.0, side_color(swept));
        if swept != fixed {
            draw_text("Static and swept tests disagree", 10.0, 90.0, 16.0, GRAY);
        }
        draw_text(
            "Drag mouse to orbit, scroll to zoom, W/S to move the plane",
            10.0,
            115.0,
            16.0,
            DARKGRAY,
        );

        previous = current;
        next_frame().await
    }
}
