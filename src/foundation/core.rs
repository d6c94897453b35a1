use crate::foundation::error::{GridError, GridResult};

pub use kurbo::{Point, Vec2};

/// Host surface dimensions in pixels.
///
/// The host reads these from its drawing surface's declared size and coerces
/// them to integers before constructing a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::invalid_dimension(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Inset around the drawable area, applied once to the grid container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margin {
    /// Left and right inset in pixels.
    pub horizontal: f64,
    /// Top and bottom inset in pixels.
    pub vertical: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            horizontal: 100.0,
            vertical: 100.0,
        }
    }
}

impl Margin {
    /// Translation carried by the grid's root container.
    pub fn translate(self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }
}

/// Size of one grid cell, derived from the drawable area and the sequence
/// lengths. Positive whenever the owning spec validated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellSize {
    /// Cell width in pixels.
    pub width: f64,
    /// Cell height in pixels.
    pub height: f64,
}

/// Scheduler time in abstract ticks.
///
/// The core never touches a wall clock; hosts decide what one tick means
/// (the reference entrance uses 1000 ticks for line growth, matching a
/// millisecond clock).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Ticks(pub u64);

impl Ticks {
    /// Tick zero.
    pub const ZERO: Self = Self(0);

    /// Saturating tick addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
