//! Where the user is, when they let us know.

use std::sync::{PoisonError, RwLock};

use laavut_data::Coordinate;
use tracing::debug;

/// Source of the user's current position.
///
/// Returns `None` while permission is missing or no fix has been obtained; the
/// search then ranks by title instead of distance.
pub trait PositionProvider: Send + Sync {
    fn current_position(&self) -> Option<Coordinate>;
}

/// Never has a fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPosition;

impl PositionProvider for NoPosition {
    fn current_position(&self) -> Option<Coordinate> {
        None
    }
}

/// Always reports the same fix.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

impl PositionProvider for FixedPosition {
    fn current_position(&self) -> Option<Coordinate> {
        Some(self.0)
    }
}

/// A fix updated from the platform's location callback.
#[derive(Debug, Default)]
pub struct SharedPosition {
    fix: RwLock<Option<Coordinate>>,
}

impl SharedPosition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&self, position: Coordinate) {
        debug!(?position, "Position updated");
        *self.fix.write().unwrap_or_else(PoisonError::into_inner) = Some(position);
    }

    /// Forget the fix, e.g. when permission is revoked.
    pub fn clear(&self) {
        *self.fix.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl PositionProvider for SharedPosition {
    fn current_position(&self) -> Option<Coordinate> {
        *self.fix.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F> PositionProvider for F
where
    F: Fn() -> Option<Coordinate> + Send + Sync,
{
    fn current_position(&self) -> Option<Coordinate> {
        self()
    }
}
