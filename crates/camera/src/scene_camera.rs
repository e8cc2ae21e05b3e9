use framecore_common::DisplayConfig;
use framecore_input::KeyBindings;
use glam::{Mat4, Vec3};

use crate::camera::{Camera, FreeLook};
use crate::camera2d::Camera2D;
use crate::camera3d::Camera3D;

/// The one camera a scene renders through.
#[derive(Debug, Clone)]
pub enum SceneCamera {
    TwoD(Camera2D),
    ThreeD(Camera3D),
}

impl SceneCamera {
    /// Build the camera for a 2D or 3D engine. Any other dimension count yields `None`.
    pub fn for_dimensions(
        dimensions: u8,
        position: Vec3,
        speed: f32,
        display: DisplayConfig,
    ) -> Option<Self> {
        match dimensions {
            2 => Some(Self::TwoD(Camera2D::new(position, speed, display))),
            3 => Some(Self::ThreeD(Camera3D::new(position, speed))),
            _ => None,
        }
    }

    pub fn dimensions(&self) -> u8 {
        match self {
            Self::TwoD(_) => 2,
            Self::ThreeD(_) => 3,
        }
    }

    pub fn as_2d(&self) -> Option<&Camera2D> {
        match self {
            Self::TwoD(c) => Some(c),
            Self::ThreeD(_) => None,
        }
    }

    pub fn as_2d_mut(&mut self) -> Option<&mut Camera2D> {
        match self {
            Self::TwoD(c) => Some(c),
            Self::ThreeD(_) => None,
        }
    }

    pub fn as_3d(&self) -> Option<&Camera3D> {
        match self {
            Self::ThreeD(c) => Some(c),
            Self::TwoD(_) => None,
        }
    }

    pub fn as_3d_mut(&mut self) -> Option<&mut Camera3D> {
        match self {
            Self::ThreeD(c) => Some(c),
            Self::TwoD(_) => None,
        }
    }

    fn inner(&self) -> &dyn Camera {
        match self {
            Self::TwoD(c) => c,
            Self::ThreeD(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Camera {
        match self {
            Self::TwoD(c) => c,
            Self::ThreeD(c) => c,
        }
    }
}

impl From<Camera2D> for SceneCamera {
    fn from(camera: Camera2D) -> Self {
        Self::TwoD(camera)
    }
}

impl From<Camera3D> for SceneCamera {
    fn from(camera: Camera3D) -> Self {
        Self::ThreeD(camera)
    }
}

impl Camera for SceneCamera {
    fn look(&mut self, delta_time: f64) {
        self.inner_mut().look(delta_time);
    }

    fn move_up(&mut self) {
        self.inner_mut().move_up();
    }

    fn move_down(&mut self) {
        self.inner_mut().move_down();
    }

    fn move_left(&mut self) {
        self.inner_mut().move_left();
    }

    fn move_right(&mut self) {
        self.inner_mut().move_right();
    }

    fn move_forward(&mut self) {
        self.inner_mut().move_forward();
    }

    fn move_backward(&mut self) {
        self.inner_mut().move_backward();
    }

    fn position(&self) -> Vec3 {
        self.inner().position()
    }

    fn set_position(&mut self, position: Vec3) {
        self.inner_mut().set_position(position);
    }

    fn eye(&self) -> Vec3 {
        self.inner().eye()
    }

    fn speed(&self) -> f32 {
        self.inner().speed()
    }

    fn set_speed(&mut self, speed: f32) {
        self.inner_mut().set_speed(speed);
    }

    fn view_matrix(&self) -> &Mat4 {
        self.inner().view_matrix()
    }

    fn key_bindings(&self) -> KeyBindings {
        self.inner().key_bindings()
    }

    fn as_free_look(&mut self) -> Option<&mut dyn FreeLook> {
        match self {
            Self::TwoD(_) => None,
            Self::ThreeD(c) => Some(c),
        }
    }
}
