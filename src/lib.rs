//! Aligngrid renders the alignment relationship between two ordered
//! sequences as an animated grid.
//!
//! Given two sequences and a canvas, the crate computes a pure visual model
//! (grid vertices plus row/column boundary lines, with vertices flagged
//! where the sequences share an element), binds that model to a retained
//! drawing surface, and plays a two-phase entrance: points appear at their
//! final positions, then lines grow out from the origin to their full
//! extents over a shared timed transition.
//!
//! # Pipeline overview
//!
//! 1. **Build**: [`GridSpec`] `->` [`GridModel`] (pure, deterministic geometry)
//! 2. **Bind**: [`SceneManager`] reconciles the model against a [`DrawSurface`]
//!    by stable key (create new, update existing, remove stale)
//! 3. **Play**: [`EntranceAnimation`] triggers the two phases and hands line
//!    growth to a [`TransitionScheduler`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: model building is pure and stable for a
//!   given spec; playback under [`TickScheduler`] is reproducible tick for
//!   tick.
//! - **No drawing in the core**: the surface and the timing engine are
//!   traits; [`RetainedScene`] and [`TickScheduler`] are always-available
//!   in-memory hosts.
//! - **Scheduled is not settled**: phase triggers return once work is handed
//!   to the scheduler, never when the transition visually finishes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod grid;
mod model;
mod scene;

pub use animation::ease::Ease;
pub use animation::entrance::{EntranceAnimation, LINE_GROW_TICKS, Scheduled};
pub use animation::scheduler::{AttrTween, TickScheduler, TransitionId, TransitionScheduler};
pub use foundation::core::{Canvas, CellSize, Margin, Point, Ticks, Vec2};
pub use foundation::error::{GridError, GridResult};
pub use grid::Grid;
pub use model::geometry::{GridLine, GridModel, GridSpec, Orientation, PointCell};
pub use scene::manager::{POINT_RADIUS, SceneManager};
pub use scene::retained::{Element, ElementKind, RetainedScene};
pub use scene::surface::{Attr, DrawSurface, ElementKey};
