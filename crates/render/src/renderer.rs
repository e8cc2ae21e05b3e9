use crate::context::{RenderContext, TextureId};
use crate::packet::FramePacket;

/// Consumer of assembled frames. All draw layers implement this trait.
///
/// A layer reads the packet and the binding state; world truth stays with
/// the engine.
pub trait DrawLayer {
    /// The output type produced by this layer.
    type Output;

    /// Draw one frame.
    fn draw(&mut self, ctx: &mut RenderContext, frame: &FramePacket) -> Self::Output;
}

/// Text dump of a frame packet, for the CLI, logs and tests.
///
/// Each material is bound to texture unit 0 the way a single-texture
/// material would be, so binding counters stay meaningful headless.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames_drawn: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl DrawLayer for DebugTextRenderer {
    type Output = String;

    fn draw(&mut self, ctx: &mut RenderContext, frame: &FramePacket) -> String {
        self.frames_drawn += 1;
        let mut out = String::new();
        let eye = frame.view.inverse().w_axis.truncate();
        out.push_str(&format!("=== Frame {} ===\n", frame.frame));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2})\n",
            eye.x, eye.y, eye.z
        ));
        out.push_str(&format!(
            "Draws: {}  Instances: {} in {} batches\n",
            frame.draws.len(),
            frame.instance_count(),
            frame.batches.len()
        ));

        for draw in &frame.draws {
            if let Some(material) = draw.material {
                // Unit 0 always exists, so the bind cannot fail.
                ctx.bind_texture(0, TextureId(material.0)).ok();
            }
            let p = draw.model.w_axis;
            out.push_str(&format!(
                "  [{}] pos=({:.2}, {:.2}, {:.2}) mesh={} material={}\n",
                draw.entity.short(),
                p.x,
                p.y,
                p.z,
                draw.mesh.map_or("-".to_string(), |m| m.0.to_string()),
                draw.material.map_or("-".to_string(), |m| m.0.to_string()),
            ));
        }

        for batch in &frame.batches {
            ctx.bind_texture(0, TextureId(batch.material.0)).ok();
            out.push_str(&format!(
                "  batch material={} instances={}\n",
                batch.material.0,
                batch.len()
            ));
        }

        out.push_str(&format!(
            "Texture binds: {} issued, {} skipped\n",
            ctx.binds_issued(),
            ctx.binds_skipped()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::InstanceBatch;
    use framecore_camera::Camera3D;
    use framecore_entity::{Child, CopyDescriptor, MaterialHandle, MeshHandle};
    use glam::{Mat4, Vec3};

    #[test]
    fn empty_frame() {
        let mut renderer = DebugTextRenderer::new();
        let mut ctx = RenderContext::new();
        let packet = FramePacket::new(0, Mat4::IDENTITY, Mat4::IDENTITY);
        let output = renderer.draw(&mut ctx, &packet);

        assert!(output.contains("Frame 0"));
        assert!(output.contains("Draws: 0"));
        assert_eq!(renderer.frames_drawn(), 1);
    }

    #[test]
    fn draws_and_batches_are_listed() {
        let camera = Camera3D::new(Vec3::new(0.0, 0.0, 5.0), 0.05);
        let mut child = Child::new(Vec3::new(1.0, 2.0, 3.0));
        child.attach_mesh(MeshHandle(7), 36);
        child.attach_material(MaterialHandle(4));
        child.add_copy(CopyDescriptor::new(0.0, 0.0, 0.0, MaterialHandle(4)));
        child.refresh_current_copies(|_| true);

        let mut packet = FramePacket::new(1, Mat4::IDENTITY, Mat4::IDENTITY);
        packet.draws.push(child.render(&camera));
        packet.batches = InstanceBatch::from_child(&child);

        let mut ctx = RenderContext::new();
        let output = DebugTextRenderer::new().draw(&mut ctx, &packet);
        assert!(output.contains("pos=(1.00, 2.00, 3.00)"));
        assert!(output.contains("mesh=7 material=4"));
        assert!(output.contains("instances=1"));
        // Same material for the draw and the batch: second bind is skipped.
        assert_eq!((ctx.binds_issued(), ctx.binds_skipped()), (1, 1));
    }

    #[test]
    fn one_line_per_draw_and_batch() {
        let camera = Camera3D::new(Vec3::ZERO, 0.05);
        let mut packet = FramePacket::new(5, Mat4::IDENTITY, Mat4::IDENTITY);
        for x in 0..3 {
            let mut child = Child::new(Vec3::new(x as f32, 0.0, 0.0));
            child.attach_material(MaterialHandle(x));
            packet.draws.push(child.render(&camera));
        }
        packet.batches.push(InstanceBatch {
            mesh: None,
            material: MaterialHandle(9),
            positions: vec![[0.0; 3]; 4],
        });

        let mut ctx = RenderContext::new();
        let output = DebugTextRenderer::new().draw(&mut ctx, &packet);
        // Header (3) + draws (3) + batch (1) + bind summary (1).
        assert_eq!(output.lines().count(), 8);
        assert!(output.ends_with("4 issued, 0 skipped\n"));
        assert_eq!(ctx.bound_texture(0), Some(TextureId(9)));
    }

    #[test]
    fn eye_is_recovered_from_view() {
        let view = Mat4::look_at_rh(Vec3::new(1.0, 2.0, 5.0), Vec3::new(1.0, 2.0, 0.0), Vec3::Y);
        let packet = FramePacket::new(2, view, Mat4::IDENTITY);
        let output = DebugTextRenderer::new().draw(&mut RenderContext::new(), &packet);
        assert!(output.contains("eye=(1.00, 2.00, 5.00)"));
    }
}
