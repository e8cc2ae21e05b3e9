use framecore_common::DisplayConfig;
use framecore_common::math::{lerp, look_at, safe_normalize};
use framecore_input::KeyBindings;
use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::camera::{Camera, WORLD_UP};

/// Fraction of the remaining distance covered per 60 Hz frame.
pub const DEFAULT_SMOOTH_SPEED: f32 = 0.1;

/// Smoothing factors are expressed per frame at this rate.
const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Orthographic-style side-scrolling camera.
///
/// Internally the camera lives in device space (`[-1, 1]` across the
/// screen). Movement commands only displace the target; `look` eases the
/// position towards it and applies any active shake to the view.
///
/// The public position accessors work in pixels using the display size.
#[derive(Debug, Clone)]
pub struct Camera2D {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    front: Vec3,
    speed: f32,
    smooth_speed: f32,
    shake_duration: f64,
    shake_strength: f32,
    shake_offset: Vec3,
    view: Mat4,
    display: DisplayConfig,
    rng: Pcg32,
}

impl Camera2D {
    /// Camera at device-space `position` with its target on the same spot.
    pub fn new(position: Vec3, speed: f32, display: DisplayConfig) -> Self {
        let front = Vec3::NEG_Z;
        Self {
            position,
            target: position,
            up: WORLD_UP,
            front,
            speed,
            smooth_speed: DEFAULT_SMOOTH_SPEED,
            shake_duration: 0.0,
            shake_strength: 0.0,
            shake_offset: Vec3::ZERO,
            view: look_at(position, position + front, WORLD_UP),
            display,
            rng: Pcg32::from_entropy(),
        }
    }

    /// Reseed the shake generator so jitter is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Pcg32::seed_from_u64(seed);
        self
    }

    pub fn with_smooth_speed(mut self, smooth_speed: f32) -> Self {
        self.smooth_speed = smooth_speed;
        self
    }

    pub fn smooth_speed(&self) -> f32 {
        self.smooth_speed
    }

    pub fn set_smooth_speed(&mut self, smooth_speed: f32) {
        self.smooth_speed = smooth_speed;
    }

    /// Device-space position the view is built from.
    pub fn device_position(&self) -> Vec3 {
        self.position
    }

    /// Device-space point the camera is easing towards.
    pub fn target_position(&self) -> Vec3 {
        self.target
    }

    /// Move the target without touching the current position.
    pub fn set_target_position(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn display(&self) -> DisplayConfig {
        self.display
    }

    pub fn set_display(&mut self, display: DisplayConfig) {
        self.display = display;
    }

    /// Arm a shake of `duration` seconds with per-axis jitter up to `strength`.
    ///
    /// Durations of zero or less never shake. A non-finite strength disarms
    /// the shake.
    pub fn shake(&mut self, duration: f64, strength: f32) {
        if !strength.is_finite() {
            self.shake_duration = 0.0;
            self.shake_strength = 0.0;
            tracing::debug!(strength, "non-finite shake strength ignored");
            return;
        }
        self.shake_duration = duration;
        self.shake_strength = strength.abs();
        tracing::debug!(duration, strength = self.shake_strength, "camera shake armed");
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_duration > 0.0
    }

    pub fn shake_remaining(&self) -> f64 {
        self.shake_duration.max(0.0)
    }

    /// Jitter applied by the most recent `look`. Zero when not shaking.
    pub fn shake_offset(&self) -> Vec3 {
        self.shake_offset
    }

    fn right(&self) -> Vec3 {
        safe_normalize(self.front.cross(self.up))
    }

    fn to_pixels(&self, device: Vec3) -> Vec3 {
        let (half_w, half_h) = self.display.half_extents();
        Vec3::new(
            (device.x / 2.0) * self.display.screen_width as f32 + half_w,
            (device.y / 2.0) * self.display.screen_height as f32 + half_h,
            device.z,
        )
    }

    fn to_device(&self, pixels: Vec3) -> Vec3 {
        let (half_w, half_h) = self.display.half_extents();
        let axis = |p: f32, half: f32| if half > 0.0 { (p - half) / half } else { 0.0 };
        Vec3::new(axis(pixels.x, half_w), axis(pixels.y, half_h), pixels.z)
    }
}

impl Camera for Camera2D {
    fn look(&mut self, delta_time: f64) {
        let t = (self.smooth_speed as f64 * delta_time * REFERENCE_FRAME_RATE).clamp(0.0, 1.0);
        self.position = lerp(self.position, self.target, t as f32);

        self.shake_offset = if self.shake_duration > 0.0 {
            let s = self.shake_strength;
            // Unit sample times strength: within [-s, s] for any finite s.
            let offset = Vec3::new(
                s * self.rng.gen_range(-1.0f32..=1.0),
                s * self.rng.gen_range(-1.0f32..=1.0),
                0.0,
            );
            self.shake_duration -= delta_time;
            if self.shake_duration <= 0.0 {
                tracing::debug!("camera shake finished");
            }
            offset
        } else {
            Vec3::ZERO
        };

        let eye = self.position + self.shake_offset;
        self.view = look_at(eye, eye + self.front, self.up);
    }

    fn move_up(&mut self) {
        self.target += self.up * self.speed;
    }

    fn move_down(&mut self) {
        self.target -= self.up * self.speed;
    }

    fn move_left(&mut self) {
        self.target -= self.right() * self.speed;
    }

    fn move_right(&mut self) {
        self.target += self.right() * self.speed;
    }

    fn move_forward(&mut self) {
        self.target += self.front * self.speed;
    }

    fn move_backward(&mut self) {
        self.target -= self.front * self.speed;
    }

    /// Pixel-space position: `(x/2)·W + W/2`, `(y/2)·H + H/2`, z unchanged.
    fn position(&self) -> Vec3 {
        self.to_pixels(self.position)
    }

    /// Teleport to a pixel-space position. Position and target both jump.
    fn set_position(&mut self, position: Vec3) {
        let device = self.to_device(position);
        self.position = device;
        self.target = device;
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
        KeyBindings::planar()
    }
}
