use framecore_camera::{Camera, SceneCamera};
use framecore_collision::Aabb;
use framecore_common::{DisplayConfig, EntityId};
use framecore_entity::{Child, EntityRegistry, RegistryEvent};
use framecore_input::InputSnapshot;
use framecore_render::{DistanceCuller, DrawLayer, FramePacket, InstanceBatch, RenderContext};
use glam::{Mat4, Vec3};

use crate::collision::{CollisionPass, CollisionReport};
use crate::config::{ConfigError, EngineConfig};

/// Seconds between FPS log lines when `show_fps` is on.
const FPS_LOG_INTERVAL: f64 = 1.0;

/// The frame loop.
///
/// Owns the one scene camera, every entity, and the render state handed to
/// the draw layer.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    camera: SceneCamera,
    registry: EntityRegistry,
    context: RenderContext,
    culler: DistanceCuller,
    projection: Mat4,
    frame: u64,
    last_packet: Option<FramePacket>,
    collisions: Vec<CollisionReport>,
    collider_bounds: Vec<(EntityId, Aabb)>,
    registry_events: Vec<RegistryEvent>,
    fps_elapsed: f64,
    fps_frames: u32,
}

impl Engine {
    /// Validate `config` and build the camera it asks for.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let display = config.display();
        let settings = &config.camera;
        let mut camera = SceneCamera::for_dimensions(
            config.dimensions,
            Vec3::from_array(settings.start_position),
            settings.speed,
            display,
        )
        .ok_or(ConfigError::InvalidDimensions(config.dimensions))?;

        match &mut camera {
            SceneCamera::ThreeD(c) => c.set_sensitivity(settings.sensitivity),
            SceneCamera::TwoD(c) => {
                c.set_smooth_speed(settings.smooth_speed);
                if let Some(seed) = settings.shake_seed {
                    *c = c.clone().with_seed(seed);
                }
            }
        }

        tracing::info!(
            dimensions = config.dimensions,
            width = config.screen_width,
            height = config.screen_height,
            "engine created"
        );

        Ok(Self {
            culler: DistanceCuller::new(config.render_distance),
            projection: framecore_render::perspective(display),
            config,
            camera,
            registry: EntityRegistry::new(),
            context: RenderContext::new(),
            frame: 0,
            last_packet: None,
            collisions: Vec::new(),
            collider_bounds: Vec::new(),
            registry_events: Vec::new(),
            fps_elapsed: 0.0,
            fps_frames: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut SceneCamera {
        &mut self.camera
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    pub fn spawn(&mut self, child: Child) -> EntityId {
        self.registry.insert(child)
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn render_context(&self) -> &RenderContext {
        &self.context
    }

    /// Number of frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Contacts found during the last frame.
    pub fn collisions(&self) -> &[CollisionReport] {
        &self.collisions
    }

    /// Collider bounds from the last frame. Empty unless `collision_lines` is set.
    pub fn collider_bounds(&self) -> &[(EntityId, Aabb)] {
        &self.collider_bounds
    }

    /// Registry changes drained by the last frame (spawns and removals since the one before).
    pub fn registry_events(&self) -> &[RegistryEvent] {
        &self.registry_events
    }

    pub fn last_packet(&self) -> Option<&FramePacket> {
        self.last_packet.as_ref()
    }

    /// Resize the display: the projection and the 2D pixel mapping follow.
    pub fn set_display(&mut self, display: DisplayConfig) {
        self.config.screen_width = display.screen_width;
        self.config.screen_height = display.screen_height;
        self.projection = framecore_render::perspective(display);
        if let Some(c) = self.camera.as_2d_mut() {
            c.set_display(display);
        }
    }

    pub fn set_render_distance(&mut self, distance: f32) {
        self.config.render_distance = distance;
        self.culler.render_distance = distance;
    }

    /// Run one frame and return the packet for the draw layer.
    pub fn frame(&mut self, input: &InputSnapshot, delta_time: f64) -> FramePacket {
        let _span = tracing::info_span!("engine_frame", frame = self.frame).entered();

        if self.config.default_controls {
            self.camera.default_controls(input);
        }
        self.camera.look(delta_time);

        let mut packet = FramePacket::new(self.frame, *self.camera.view_matrix(), self.projection);
        for (_, child) in self.registry.iter_mut() {
            packet.draws.push(child.update(&self.camera, delta_time));
        }

        self.culler.cull(&mut self.registry, self.camera.eye());
        self.collisions = CollisionPass::run(&self.registry);
        if self.config.collision_lines {
            self.collider_bounds = CollisionPass::bounds(&self.registry);
        }

        for (_, child) in self.registry.iter() {
            if child.copying_enabled() {
                packet.batches.extend(InstanceBatch::from_child(child));
            }
        }

        tracing::trace!(
            draws = packet.draws.len(),
            instances = packet.instance_count(),
            contacts = self.collisions.len(),
            "frame assembled"
        );
        self.track_fps(delta_time);

        // The registry log is emptied every frame; callers read it here.
        self.registry_events = self.registry.drain_events();
        self.frame += 1;
        self.last_packet = Some(packet.clone());
        packet
    }

    /// Hand the last packet to `layer` with a freshly reset binding state.
    ///
    /// Returns `None` before the first frame.
    pub fn present<L: DrawLayer>(&mut self, layer: &mut L) -> Option<L::Output> {
        let packet = self.last_packet.as_ref()?;
        self.context.reset();
        Some(layer.draw(&mut self.context, packet))
    }

    fn track_fps(&mut self, delta_time: f64) {
        if !self.config.show_fps {
            return;
        }
        self.fps_elapsed += delta_time;
        self.fps_frames += 1;
        if self.fps_elapsed >= FPS_LOG_INTERVAL {
            let fps = self.fps_frames as f64 / self.fps_elapsed;
            tracing::info!("frame rate: {fps:.1} fps");
            self.fps_elapsed = 0.0;
            self.fps_frames = 0;
        }
    }
}
