//! Vector and matrix helpers used by the camera and entity code.
//!
//! Everything here is built on `glam` and follows its right-handed,
//! column-major conventions. Normalization never divides by zero: a
//! zero-length vector normalizes to the zero vector.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Lengths below this are treated as zero when building bases.
pub const EPSILON: f32 = 1e-6;

/// Linear interpolation between two points. `t` is not clamped.
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Normalize `v`, returning the zero vector when `v` has no length.
pub fn safe_normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Unit direction from pitch and yaw in degrees.
///
/// `(cos p · cos y, sin p, cos p · sin y)`; yaw 0 points down +X.
pub fn direction_from_euler(pitch_degrees: f32, yaw_degrees: f32) -> Vec3 {
    let pitch = (pitch_degrees as f64).to_radians();
    let yaw = (yaw_degrees as f64).to_radians();
    let dir = Vec3::new(
        (pitch.cos() * yaw.cos()) as f32,
        pitch.sin() as f32,
        (pitch.cos() * yaw.sin()) as f32,
    );
    safe_normalize(dir)
}

/// Rotation of `angle_radians` about `axis`. Identity when the axis is degenerate.
pub fn rotation_about(axis: Vec3, angle_radians: f32) -> Mat4 {
    let axis = safe_normalize(axis);
    if axis.length_squared() < EPSILON {
        return Mat4::IDENTITY;
    }
    Mat4::from_axis_angle(axis, angle_radians)
}

/// Rotate `v` by `angle_radians` about `axis`. Returns `v` unchanged for a degenerate axis.
pub fn rotate_vector(v: Vec3, axis: Vec3, angle_radians: f32) -> Vec3 {
    let axis = safe_normalize(axis);
    if axis.length_squared() < EPSILON {
        return v;
    }
    Quat::from_axis_angle(axis, angle_radians) * v
}

/// Right-handed look-at view matrix.
///
/// Same layout as `Mat4::look_at_rh`, but each basis vector goes through
/// [`safe_normalize`], so `eye == center` or `forward ∥ up` produce a
/// degenerate (zeroed) basis instead of NaN.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let f = safe_normalize(center - eye);
    let s = safe_normalize(f.cross(up));
    let u = s.cross(f);
    Mat4::from_cols(
        Vec4::new(s.x, u.x, -f.x, 0.0),
        Vec4::new(s.y, u.y, -f.y, 0.0),
        Vec4::new(s.z, u.z, -f.z, 0.0),
        Vec4::new(-eye.dot(s), -eye.dot(u), eye.dot(f), 1.0),
    )
}

/// OpenGL-style perspective projection with the vertical field of view in degrees.
pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y_degrees.to_radians(), aspect, near, far)
}

/// Pure translation matrix.
pub fn translation(position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
}

/// True when the upper 3×3 block of `m` is the identity and the bottom row is `(0,0,0,1)`.
pub fn is_translation_only(m: &Mat4) -> bool {
    let expected = Mat4::from_translation(m.w_axis.truncate());
    m.abs_diff_eq(expected, EPSILON)
}

/// World-space direction through a device-space point `ndc` (`[-1, 1]` on both axes).
///
/// Used by picking code that casts rays from the camera into the scene.
pub fn unproject_direction(ndc: Vec2, projection: &Mat4, view: &Mat4) -> Vec3 {
    let clip = Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
    let eye = projection.inverse() * clip;
    let eye = Vec4::new(eye.x, eye.y, -1.0, 0.0);
    let world = view.inverse() * eye;
    safe_normalize(world.truncate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(5.0, 6.0, 7.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn safe_normalize_zero_stays_zero() {
        assert_eq!(safe_normalize(Vec3::ZERO), Vec3::ZERO);
        let n = safe_normalize(Vec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn direction_at_zero_angles_points_down_x() {
        let d = direction_from_euler(0.0, 0.0);
        assert!(d.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn direction_at_yaw_minus_90_points_down_negative_z() {
        let d = direction_from_euler(0.0, -90.0);
        assert!(d.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn direction_is_unit_length() {
        for (p, y) in [(10.0, 20.0), (-89.0, 370.0), (45.0, -135.0)] {
            let d = direction_from_euler(p, y);
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn rotation_about_zero_axis_is_identity() {
        assert_eq!(rotation_about(Vec3::ZERO, 1.0), Mat4::IDENTITY);
        assert_eq!(rotate_vector(Vec3::X, Vec3::ZERO, 1.0), Vec3::X);
    }

    #[test]
    fn rotate_vector_quarter_turn() {
        let v = rotate_vector(Vec3::X, Vec3::Y, std::f32::consts::FRAC_PI_2);
        assert!(v.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn look_at_matches_glam() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let center = Vec3::new(0.0, 0.0, -1.0);
        let ours = look_at(eye, center, Vec3::Y);
        let theirs = Mat4::look_at_rh(eye, center, Vec3::Y);
        assert!(ours.abs_diff_eq(theirs, 1e-5));
    }

    #[test]
    fn look_at_degenerate_has_no_nan() {
        let m = look_at(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert!(!m.is_nan());
        let m = look_at(Vec3::ZERO, Vec3::Y, Vec3::Y);
        assert!(!m.is_nan());
    }

    #[test]
    fn translation_only_detection() {
        assert!(is_translation_only(&translation(Vec3::new(1.0, -2.0, 3.0))));
        assert!(!is_translation_only(&Mat4::from_scale(Vec3::splat(2.0))));
    }

    #[test]
    fn unproject_center_is_view_forward() {
        let proj = perspective(45.0, 4.0 / 3.0, 0.1, 100.0);
        let view = look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        let dir = unproject_direction(Vec2::ZERO, &proj, &view);
        assert!(dir.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }
}
