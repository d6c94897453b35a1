use std::collections::BTreeSet;

use crate::{
    foundation::{core::Margin, error::GridResult},
    model::geometry::{GridLine, Orientation, PointCell},
    scene::surface::{DrawSurface, ElementKey},
};

/// Radius of every grid point element, in pixels.
pub const POINT_RADIUS: f64 = 8.0;

/// Reconciles grid models against a retained [`DrawSurface`].
///
/// The manager owns the mapping from model descriptors to persistent
/// elements. Rendering performs a keyed diff (create new, update existing,
/// remove stale) rather than a full redraw, so repeated renders of the same
/// model are idempotent and a shrunk model removes exactly its stale
/// elements.
#[derive(Debug)]
pub struct SceneManager {
    margin: Margin,
    radius: f64,
    bound_points: BTreeSet<ElementKey>,
    bound_lines: BTreeSet<ElementKey>,
}

impl SceneManager {
    /// Create a manager drawing inside `margin` with the default point
    /// radius.
    pub fn new(margin: Margin) -> Self {
        Self {
            margin,
            radius: POINT_RADIUS,
            bound_points: BTreeSet::new(),
            bound_lines: BTreeSet::new(),
        }
    }

    /// Override the point radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Ensure one circle element per point cell, positioned at its final
    /// coordinates; elements bound by an earlier render whose key is absent
    /// from `points` are removed.
    pub fn render_points<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        points: &[PointCell],
    ) -> GridResult<()> {
        surface.ensure_root(self.margin.translate())?;

        let mut next = BTreeSet::new();
        for p in points {
            let key = ElementKey::Point { i: p.i, j: p.j };
            surface.upsert_circle(key, p.pos, self.radius)?;
            next.insert(key);
        }
        for stale in self.bound_points.difference(&next) {
            surface.remove(stale)?;
        }
        self.bound_points = next;
        Ok(())
    }

    /// Same reconciliation discipline for lines, bound at full extent.
    pub fn render_lines<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        lines: &[GridLine],
    ) -> GridResult<()> {
        surface.ensure_root(self.margin.translate())?;

        let mut next = BTreeSet::new();
        for (key, line) in keyed_lines(lines) {
            surface.upsert_line(key, line.from, line.to)?;
            next.insert(key);
        }
        for stale in self.bound_lines.difference(&next) {
            surface.remove(stale)?;
        }
        self.bound_lines = next;
        Ok(())
    }
}

/// Pair each line with its stable key: a running index within its
/// orientation. The derivation is shared by reconciliation and playback so
/// both address the same elements.
pub(crate) fn keyed_lines(lines: &[GridLine]) -> impl Iterator<Item = (ElementKey, &GridLine)> {
    let mut horizontal = 0u32;
    let mut vertical = 0u32;
    lines.iter().map(move |line| {
        let index = match line.orientation {
            Orientation::Horizontal => {
                let idx = horizontal;
                horizontal += 1;
                idx
            }
            Orientation::Vertical => {
                let idx = vertical;
                vertical += 1;
                idx
            }
        };
        (
            ElementKey::Line {
                orientation: line.orientation,
                index,
            },
            line,
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/manager.rs"]
mod tests;
