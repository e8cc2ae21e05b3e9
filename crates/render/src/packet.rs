use framecore_entity::{Child, DrawCall, MaterialHandle, MeshHandle};
use glam::Mat4;

/// Current copies of one entity sharing a material, drawn in one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBatch {
    pub mesh: Option<MeshHandle>,
    pub material: MaterialHandle,
    pub positions: Vec<[f32; 3]>,
}

impl InstanceBatch {
    /// Group `child`'s current copies by material, in first-seen order.
    pub fn from_child(child: &Child) -> Vec<InstanceBatch> {
        let mesh = child.geometry().map(|g| g.mesh);
        let mut batches: Vec<InstanceBatch> = Vec::new();
        for copy in child.current_copies() {
            match batches.iter_mut().find(|b| b.material == copy.material) {
                Some(batch) => batch.positions.push(copy.position.to_array()),
                None => batches.push(InstanceBatch {
                    mesh,
                    material: copy.material,
                    positions: vec![copy.position.to_array()],
                }),
            }
        }
        batches
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Tightly packed `xyz` floats for an instance buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}

/// Everything a draw layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePacket {
    pub frame: u64,
    pub view: Mat4,
    pub projection: Mat4,
    pub draws: Vec<DrawCall>,
    pub batches: Vec<InstanceBatch>,
}

impl FramePacket {
    pub fn new(frame: u64, view: Mat4, projection: Mat4) -> Self {
        Self {
            frame,
            view,
            projection,
            draws: Vec::new(),
            batches: Vec::new(),
        }
    }

    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(InstanceBatch::len).sum()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framecore_entity::CopyDescriptor;
    use glam::Vec3;

    fn child_with_copies() -> Child {
        let mut child = Child::new(Vec3::ZERO);
        child.attach_mesh(MeshHandle(1), 6);
        child.add_copy(CopyDescriptor::new(1.0, 0.0, 0.0, MaterialHandle(2)));
        child.add_copy(CopyDescriptor::new(2.0, 0.0, 0.0, MaterialHandle(1)));
        child.add_copy(CopyDescriptor::new(3.0, 0.0, 0.0, MaterialHandle(2)));
        child.add_copy(CopyDescriptor::new(99.0, 0.0, 0.0, MaterialHandle(3)));
        child.refresh_current_copies(|c| c.position.x < 50.0);
        child
    }

    #[test]
    fn batches_group_by_material_in_first_seen_order() {
        let batches = InstanceBatch::from_child(&child_with_copies());
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].material, MaterialHandle(2));
        assert_eq!(batches[0].positions, vec![[1.0, 0.0, 0.0], [3.0, 0.0, 0.0]]);
        assert_eq!(batches[1].material, MaterialHandle(1));
        assert!(batches.iter().all(|b| b.mesh == Some(MeshHandle(1))));
    }

    #[test]
    fn batches_skip_copies_outside_selection() {
        let batches = InstanceBatch::from_child(&child_with_copies());
        assert!(batches.iter().all(|b| b.material != MaterialHandle(3)));
    }

    #[test]
    fn bytes_are_packed_floats() {
        let batch = InstanceBatch {
            mesh: None,
            material: MaterialHandle(0),
            positions: vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
        };
        let bytes = batch.as_bytes();
        assert_eq!(bytes.len(), 6 * 4);
        assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
    }

    #[test]
    fn packet_counts_instances() {
        let mut packet = FramePacket::new(3, Mat4::IDENTITY, Mat4::IDENTITY);
        packet.batches = InstanceBatch::from_child(&child_with_copies());
        assert_eq!(packet.instance_count(), 3);
        assert_eq!(packet.view_projection(), Mat4::IDENTITY);
    }
}
