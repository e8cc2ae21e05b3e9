use framecore_common::math::{
    direction_from_euler, look_at, rotate_vector, rotation_about, safe_normalize,
    unproject_direction,
};
use framecore_input::KeyBindings;
use glam::{Mat4, Vec2, Vec3};

use crate::camera::{Camera, FreeLook, WORLD_UP};

/// Pitch is clamped to `±PITCH_LIMIT` degrees so the view never flips at the poles.
pub const PITCH_LIMIT: f32 = 89.0;

/// Degrees of yaw/pitch per pixel of mouse movement.
pub const DEFAULT_SENSITIVITY: f64 = 0.2;

/// Scale applied to yaw/pitch/roll when building the ray-casting rotation.
pub const RAY_ROTATION_SCALE: f32 = 0.01;

/// Free-look perspective camera.
///
/// Movement is immediate (no smoothing). Angles are stored in degrees.
/// Besides the view matrix, `look` also derives a ray-casting rotation
/// used by picking code; it is independent of the view.
#[derive(Debug, Clone)]
pub struct Camera3D {
    position: Vec3,
    up: Vec3,
    front: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,
    speed: f32,
    sensitivity: f64,
    view: Mat4,
    ray_rotation: Mat4,
}

impl Camera3D {
    /// Camera at `position` looking down -Z, yaw and pitch at zero.
    ///
    /// `front` only follows yaw/pitch once an orientation call is made, so a
    /// fresh camera moves along -Z even though yaw 0 would point down +X.
    pub fn new(position: Vec3, speed: f32) -> Self {
        let front = Vec3::NEG_Z;
        Self {
            position,
            up: WORLD_UP,
            front,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            speed,
            sensitivity: DEFAULT_SENSITIVITY,
            view: look_at(position, position + front, WORLD_UP),
            ray_rotation: Mat4::IDENTITY,
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Rotation derived from yaw/pitch/roll for screen-to-world ray queries.
    pub fn ray_rotation(&self) -> &Mat4 {
        &self.ray_rotation
    }

    /// View from the origin towards -Z, ignoring position and orientation.
    /// Skyboxes are drawn with this.
    pub fn static_view(&self) -> Mat4 {
        look_at(Vec3::ZERO, Vec3::NEG_Z, WORLD_UP)
    }

    /// World-space direction of the ray through device-space point `ndc`.
    pub fn ray_direction(&self, ndc: Vec2, projection: &Mat4) -> Vec3 {
        unproject_direction(ndc, projection, &self.view)
    }

    fn right(&self) -> Vec3 {
        safe_normalize(self.front.cross(self.up))
    }

    fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn recompute_front(&mut self) {
        self.front = direction_from_euler(self.pitch, self.yaw);
    }
}

impl Camera for Camera3D {
    fn look(&mut self, _delta_time: f64) {
        let rolled_up = rotate_vector(self.up, self.front, self.roll.to_radians());
        self.view = look_at(self.position, self.position + self.front, rolled_up);

        let x_axis = safe_normalize(self.up.cross(self.front));
        self.ray_rotation = rotation_about(x_axis, -self.pitch * RAY_ROTATION_SCALE)
            * rotation_about(self.up, self.yaw * RAY_ROTATION_SCALE)
            * rotation_about(self.front, self.roll * RAY_ROTATION_SCALE);
    }

    fn move_up(&mut self) {
        self.position += self.up * self.speed;
    }

    fn move_down(&mut self) {
        self.position -= self.up * self.speed;
    }

    fn move_left(&mut self) {
        self.position -= self.right() * self.speed;
    }

    fn move_right(&mut self) {
        self.position += self.right() * self.speed;
    }

    fn move_forward(&mut self) {
        self.position += self.front * self.speed;
    }

    fn move_backward(&mut self) {
        self.position -= self.front * self.speed;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn eye(&self) -> Vec3 {
        self.position
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    fn key_bindings(&self) -> KeyBindings {
        KeyBindings::free_look()
    }

    fn as_free_look(&mut self) -> Option<&mut dyn FreeLook> {
        Some(self)
    }
}

impl FreeLook for Camera3D {
    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn roll(&self) -> f32 {
        self.roll
    }

    fn front(&self) -> Vec3 {
        self.front
    }

    fn change_yaw(&mut self, delta: f32) {
        self.yaw += delta;
        self.recompute_front();
    }

    fn change_pitch(&mut self, delta: f32) {
        self.pitch += delta;
        self.clamp_pitch();
        self.recompute_front();
    }

    /// Roll only affects the up vector used in `look`; `front` is unchanged.
    fn change_roll(&mut self, delta: f32) {
        self.roll += delta;
    }

    /// Turn mouse travel into yaw and pitch.
    ///
    /// A call with no travel is a no-op: `front` is only rebuilt from yaw and
    /// pitch once the orientation actually changes, so a fresh camera keeps
    /// looking down -Z until the mouse moves.
    fn process_mouse(&mut self, mouse_x: f64, mouse_y: f64, last_mouse_x: f64, last_mouse_y: f64) {
        let x_offset = (mouse_x - last_mouse_x) * self.sensitivity;
        let y_offset = (mouse_y - last_mouse_y) * self.sensitivity;
        if x_offset == 0.0 && y_offset == 0.0 {
            return;
        }

        self.yaw += x_offset as f32;
        self.pitch -= y_offset as f32;
        self.clamp_pitch();
        self.recompute_front();
        self.front = safe_normalize(rotate_vector(
            self.front,
            self.front,
            self.roll.to_radians(),
        ));

        tracing::trace!(
            yaw = self.yaw,
            pitch = self.pitch,
            "camera orientation updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framecore_input::InputSnapshot;

    fn unit(v: Vec3) -> bool {
        (v.length() - 1.0).abs() < 1e-5
    }

    #[test]
    fn move_forward_from_origin() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.move_forward();
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }

    #[test]
    fn strafe_is_orthogonal_to_front() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.move_right();
        assert!(cam.position().abs_diff_eq(Vec3::X, 1e-6));
        cam.move_left();
        cam.move_left();
        assert!(cam.position().abs_diff_eq(Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn vertical_moves_use_world_up() {
        let mut cam = Camera3D::new(Vec3::ZERO, 0.5);
        cam.change_pitch(45.0);
        cam.move_up();
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), 1e-6));
        cam.move_down();
        assert!(cam.position().abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn pitch_is_clamped_under_any_mouse_sequence() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        let moves = [-5000.0, 2000.0, 3.0, 9000.0, -1.0, -12000.0, 450.0];
        let mut last = 0.0;
        for y in moves {
            cam.process_mouse(0.0, y, 0.0, last);
            last = y;
            assert!(cam.pitch() >= -PITCH_LIMIT && cam.pitch() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn change_pitch_is_clamped() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.change_pitch(500.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.change_pitch(-1000.0);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn front_stays_unit_length() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.change_yaw(37.0);
        assert!(unit(cam.front()));
        cam.change_pitch(-60.0);
        assert!(unit(cam.front()));
        cam.change_roll(15.0);
        cam.process_mouse(143.0, -22.0, 0.0, 0.0);
        assert!(unit(cam.front()));
        cam.process_mouse(0.0, 10_000.0, 143.0, -22.0);
        assert!(unit(cam.front()));
    }

    #[test]
    fn mouse_right_increases_yaw_and_mouse_down_lowers_pitch() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.process_mouse(10.0, 10.0, 0.0, 0.0);
        assert!((cam.yaw() - 2.0).abs() < 1e-6);
        assert!((cam.pitch() + 2.0).abs() < 1e-6);
    }

    #[test]
    fn still_mouse_keeps_initial_front() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.process_mouse(50.0, 50.0, 50.0, 50.0);
        assert_eq!(cam.front(), Vec3::NEG_Z);
    }

    #[test]
    fn still_mouse_after_turn_keeps_front() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.process_mouse(10.0, 5.0, 0.0, 0.0);
        let (yaw, pitch, front) = (cam.yaw(), cam.pitch(), cam.front());
        cam.process_mouse(10.0, 5.0, 10.0, 5.0);
        assert_eq!((cam.yaw(), cam.pitch(), cam.front()), (yaw, pitch, front));
    }

    #[test]
    fn yaw_minus_90_faces_negative_z() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.change_yaw(-90.0);
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn look_builds_view_from_position_and_front() {
        let mut cam = Camera3D::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
        cam.look(1.0 / 60.0);
        let expected = Mat4::look_at_rh(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(1.0, 2.0, 2.0),
            Vec3::Y,
        );
        assert!(cam.view_matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn roll_tilts_view_up_vector() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.change_roll(90.0);
        cam.look(0.0);
        // Up rotated 90 degrees about -Z becomes +X.
        let expected = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::X);
        assert!(cam.view_matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn ray_rotation_is_identity_at_rest() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.look(0.0);
        assert!(cam.ray_rotation().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn ray_rotation_follows_scaled_yaw() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.yaw = 100.0;
        cam.look(0.0);
        let expected = Mat4::from_axis_angle(Vec3::Y, 1.0);
        assert!(cam.ray_rotation().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn static_view_ignores_position() {
        let mut cam = Camera3D::new(Vec3::new(9.0, 9.0, 9.0), 1.0);
        cam.change_yaw(30.0);
        let expected = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        assert!(cam.static_view().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn default_controls_moves_then_looks() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        let input = InputSnapshot::new()
            .with_key("w")
            .with_key("space")
            .with_mouse(5.0, 0.0, 0.0, 0.0);
        cam.default_controls(&input);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 1.0, -1.0), 1e-6));
        assert!((cam.yaw() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn view_upload_views_agree() {
        let mut cam = Camera3D::new(Vec3::new(0.0, 1.0, 5.0), 1.0);
        cam.look(0.0);
        let cols = cam.view_cols();
        assert_eq!(cols, cam.view_matrix().to_cols_array());
        assert_eq!(cam.view_bytes().len(), 64);
        assert_eq!(cam.view_bytes(), bytemuck::cast_slice::<f32, u8>(&cols));
    }

    #[test]
    fn ray_through_center_follows_front() {
        let mut cam = Camera3D::new(Vec3::ZERO, 1.0);
        cam.look(0.0);
        let proj = framecore_common::math::perspective(45.0, 1.0, 0.1, 100.0);
        let dir = cam.ray_direction(Vec2::ZERO, &proj);
        assert!(dir.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }
}
