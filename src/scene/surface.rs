use crate::{
    foundation::{
        core::{Point, Vec2},
        error::GridResult,
    },
    model::geometry::Orientation,
};

/// Stable identity of one retained visual element.
///
/// Points are keyed by their grid indices, lines by orientation plus their
/// per-orientation position, so re-rendering updates elements in place
/// instead of recreating them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ElementKey {
    /// Grid vertex at `(i, j)`.
    Point {
        /// Horizontal grid index.
        i: u32,
        /// Vertical grid index.
        j: u32,
    },
    /// Boundary line `index` within its orientation.
    Line {
        /// Line orientation.
        orientation: Orientation,
        /// Row or column boundary index.
        index: u32,
    },
}

/// Named numeric attributes understood by a [`DrawSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attr {
    /// Circle center x.
    Cx,
    /// Circle center y.
    Cy,
    /// Circle radius.
    R,
    /// Line first endpoint x.
    X1,
    /// Line first endpoint y.
    Y1,
    /// Line second endpoint x.
    X2,
    /// Line second endpoint y.
    Y2,
}

/// A retained drawing surface (the SVG/canvas host equivalent).
///
/// The surface owns persistent visual elements addressed by [`ElementKey`]
/// inside one scoped container that carries the margin translation.
/// Implementations fail loudly on out-of-contract calls instead of
/// accepting them silently.
pub trait DrawSurface {
    /// Ensure the scoped grid container exists and carries `translate`.
    ///
    /// The translation is applied once for the whole grid, never
    /// per-element. A second call with a different translation is a
    /// precondition violation.
    fn ensure_root(&mut self, translate: Vec2) -> GridResult<()>;

    /// Create or update the circle element stored under `key`.
    fn upsert_circle(&mut self, key: ElementKey, center: Point, radius: f64) -> GridResult<()>;

    /// Create or update the line element stored under `key`.
    fn upsert_line(&mut self, key: ElementKey, from: Point, to: Point) -> GridResult<()>;

    /// True when an element is currently bound under `key`.
    fn contains(&self, key: &ElementKey) -> bool;

    /// Set one named attribute on an existing element.
    ///
    /// Unknown keys are a precondition violation.
    fn set_attr(&mut self, key: &ElementKey, attr: Attr, value: f64) -> GridResult<()>;

    /// Remove the element stored under `key`.
    ///
    /// Unknown keys are a precondition violation.
    fn remove(&mut self, key: &ElementKey) -> GridResult<()>;
}
