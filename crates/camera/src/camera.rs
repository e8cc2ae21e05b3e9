use framecore_input::{CameraAction, InputSnapshot, KeyBindings};
use glam::{Mat4, Vec3};

/// Fixed up axis shared by both camera variants.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Capabilities shared by every camera.
///
/// The draw layer reads the view through [`Camera::view_matrix`] (or one of
/// the flat upload views) after `look` has run for the frame.
pub trait Camera {
    /// Recompute the view matrix. Call once per frame before anything reads the view.
    fn look(&mut self, delta_time: f64);

    fn move_up(&mut self);
    fn move_down(&mut self);
    fn move_left(&mut self);
    fn move_right(&mut self);
    fn move_forward(&mut self);
    fn move_backward(&mut self);

    /// Position in the camera's public coordinate space.
    fn position(&self) -> Vec3;

    /// Teleport the camera. Takes the same coordinate space `position` returns.
    fn set_position(&mut self, position: Vec3);

    /// Position in the space entities live in, used for distance culling.
    fn eye(&self) -> Vec3;

    fn speed(&self) -> f32;
    fn set_speed(&mut self, speed: f32);

    /// Last view matrix computed by `look`.
    fn view_matrix(&self) -> &Mat4;

    /// Key bindings used by [`Camera::default_controls`].
    fn key_bindings(&self) -> KeyBindings;

    /// Orientation controls, when this camera has them.
    fn as_free_look(&mut self) -> Option<&mut dyn FreeLook> {
        None
    }

    /// View matrix as 16 column-major floats.
    fn view_cols(&self) -> [f32; 16] {
        self.view_matrix().to_cols_array()
    }

    /// View matrix as raw bytes for buffer upload.
    fn view_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self.view_matrix())
    }

    fn apply_action(&mut self, action: CameraAction) {
        match action {
            CameraAction::MoveUp => self.move_up(),
            CameraAction::MoveDown => self.move_down(),
            CameraAction::MoveLeft => self.move_left(),
            CameraAction::MoveRight => self.move_right(),
            CameraAction::MoveForward => self.move_forward(),
            CameraAction::MoveBackward => self.move_backward(),
        }
    }

    /// Convenience binding: held keys drive the movement primitives, then the
    /// mouse drives free look on cameras that support it.
    fn default_controls(&mut self, input: &InputSnapshot) {
        for action in self.key_bindings().actions(input) {
            self.apply_action(action);
        }
        if let Some(free_look) = self.as_free_look() {
            free_look.process_mouse(
                input.mouse_x,
                input.mouse_y,
                input.last_mouse_x,
                input.last_mouse_y,
            );
        }
    }
}

/// Orientation capability. Only cameras that can rotate implement it.
pub trait FreeLook {
    fn yaw(&self) -> f32;
    fn pitch(&self) -> f32;
    fn roll(&self) -> f32;
    fn front(&self) -> Vec3;

    fn change_yaw(&mut self, delta: f32);
    fn change_pitch(&mut self, delta: f32);
    fn change_roll(&mut self, delta: f32);

    /// Apply one frame of mouse travel. Zero travel leaves orientation and `front` untouched.
    fn process_mouse(&mut self, mouse_x: f64, mouse_y: f64, last_mouse_x: f64, last_mouse_y: f64);
}
