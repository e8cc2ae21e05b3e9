use crate::snapshot::InputSnapshot;

/// A movement primitive that every camera variant understands.
///
/// Cameras consume actions, never raw key names, so the 2D and 3D cameras
/// share one binding mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBackward,
}

/// Ordered key → action table.
///
/// Actions fire in table order, so the same snapshot always produces the
/// same sequence of movement calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<(String, CameraAction)>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bindings for a free-look 3D camera: `w/s` forward/back, `a/d` strafe,
    /// `space/shift` up/down.
    pub fn free_look() -> Self {
        Self::new()
            .bind("w", CameraAction::MoveForward)
            .bind("s", CameraAction::MoveBackward)
            .bind("a", CameraAction::MoveLeft)
            .bind("d", CameraAction::MoveRight)
            .bind("space", CameraAction::MoveUp)
            .bind("shift", CameraAction::MoveDown)
    }

    /// Bindings for a planar 2D camera: `w/s` up/down, `a/d` left/right.
    pub fn planar() -> Self {
        Self::new()
            .bind("w", CameraAction::MoveUp)
            .bind("s", CameraAction::MoveDown)
            .bind("a", CameraAction::MoveLeft)
            .bind("d", CameraAction::MoveRight)
    }

    /// Builder: append a binding. A key may be bound more than once.
    pub fn bind(mut self, key: &str, action: CameraAction) -> Self {
        self.bindings.push((key.to_ascii_lowercase(), action));
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Actions whose key is held in `input`, in binding order.
    pub fn actions(&self, input: &InputSnapshot) -> Vec<CameraAction> {
        let actions: Vec<CameraAction> = self
            .bindings
            .iter()
            .filter(|(key, _)| input.is_pressed(key))
            .map(|(_, action)| *action)
            .collect();
        if !actions.is_empty() {
            tracing::trace!(count = actions.len(), "resolved camera actions");
        }
        actions
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::free_look()
    }
}
