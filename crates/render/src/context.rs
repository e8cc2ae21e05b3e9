/// Number of texture units a material may bind.
pub const TEXTURE_UNITS: usize = 7;

/// Identifier of a texture owned by the draw layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("texture unit {unit} out of range (max {max})")]
    UnitOutOfRange { unit: usize, max: usize },
}

/// Texture binding state for one frame.
///
/// Binding a texture that is already on the unit is skipped so draw layers
/// can bind unconditionally per draw.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    bound: [Option<TextureId>; TEXTURE_UNITS],
    binds_issued: u64,
    binds_skipped: u64,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `texture` to `unit`. Returns `false` when it was already bound there.
    pub fn bind_texture(&mut self, unit: usize, texture: TextureId) -> Result<bool, RenderError> {
        let slot = self
            .bound
            .get_mut(unit)
            .ok_or(RenderError::UnitOutOfRange {
                unit,
                max: TEXTURE_UNITS - 1,
            })?;
        if *slot == Some(texture) {
            self.binds_skipped += 1;
            return Ok(false);
        }
        *slot = Some(texture);
        self.binds_issued += 1;
        tracing::trace!(unit, texture = texture.0, "texture bound");
        Ok(true)
    }

    pub fn bound_texture(&self, unit: usize) -> Option<TextureId> {
        self.bound.get(unit).copied().flatten()
    }

    /// Unbind every unit. Counters are kept.
    pub fn reset(&mut self) {
        self.bound = [None; TEXTURE_UNITS];
    }

    pub fn binds_issued(&self) -> u64 {
        self.binds_issued
    }

    pub fn binds_skipped(&self) -> u64 {
        self.binds_skipped
    }
}
