//! Camera validation: lens ranges and a well-formed look-at basis.

use crate::schema::HuesphereConfig;

use super::helpers::validate_range_f32;

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &HuesphereConfig) {
    let cam = &config.camera;

    validate_range_f32(errors, "camera.fov_y_degrees", cam.fov_y_degrees, 1.0, 179.0);

    if !cam.near.is_finite() || cam.near <= 0.0 {
        errors.push(format!("camera.near = {} must be greater than 0", cam.near));
    }
    if !cam.far.is_finite() || cam.far <= cam.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            cam.far, cam.near
        ));
    }

    let vectors = [
        ("camera.eye", cam.eye),
        ("camera.target", cam.target),
        ("camera.up", cam.up),
    ];
    let mut finite = true;
    for (name, v) in vectors {
        if !v.iter().all(|c| c.is_finite()) {
            errors.push(format!("{name} = {v:?} must be finite"));
            finite = false;
        }
    }
    if !finite {
        return;
    }

    let forward = [
        cam.target[0] - cam.eye[0],
        cam.target[1] - cam.eye[1],
        cam.target[2] - cam.eye[2],
    ];
    if length(forward) <= f32::EPSILON {
        errors.push("camera.eye and camera.target must differ".into());
        return;
    }

    let side = [
        forward[1] * cam.up[2] - forward[2] * cam.up[1],
        forward[2] * cam.up[0] - forward[0] * cam.up[2],
        forward[0] * cam.up[1] - forward[1] * cam.up[0],
    ];
    if length(side) <= f32::EPSILON {
        errors.push("camera.up must not be parallel to the view direction".into());
    }
}

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
