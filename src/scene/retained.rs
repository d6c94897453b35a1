use std::collections::BTreeMap;

use crate::{
    foundation::{
        core::{Point, Vec2},
        error::{GridError, GridResult},
    },
    scene::surface::{Attr, DrawSurface, ElementKey},
};

/// Shape of a retained element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Circle (grid point).
    Circle,
    /// Line segment (grid boundary).
    Line,
}

/// One retained element: its shape plus named numeric attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Element shape.
    pub kind: ElementKind,
    /// Attribute values.
    pub attrs: BTreeMap<Attr, f64>,
}

impl Element {
    /// Read one attribute, if present.
    pub fn attr(&self, attr: Attr) -> Option<f64> {
        self.attrs.get(&attr).copied()
    }
}

/// Always-available in-memory [`DrawSurface`].
///
/// Hosts with a real canvas implement [`DrawSurface`] themselves; this
/// surface keeps the retained scene as plain data so geometry and playback
/// can be exercised, and asserted on, without any drawing backend.
#[derive(Debug, Default)]
pub struct RetainedScene {
    translate: Option<Vec2>,
    elements: BTreeMap<ElementKey, Element>,
}

impl RetainedScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no element is retained.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Root container translation, once applied.
    pub fn translate(&self) -> Option<Vec2> {
        self.translate
    }

    /// Look up one element.
    pub fn get(&self, key: &ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    /// Element anchor resolved into canvas coordinates (root translation
    /// plus local position). Circles resolve their center, lines their
    /// first endpoint.
    pub fn resolve(&self, key: &ElementKey) -> Option<Point> {
        let el = self.elements.get(key)?;
        let t = self.translate.unwrap_or(Vec2::ZERO);
        let (x, y) = match el.kind {
            ElementKind::Circle => (el.attr(Attr::Cx)?, el.attr(Attr::Cy)?),
            ElementKind::Line => (el.attr(Attr::X1)?, el.attr(Attr::Y1)?),
        };
        Some(Point::new(x + t.x, y + t.y))
    }

    /// Iterate elements in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementKey, &Element)> {
        self.elements.iter()
    }

    fn get_mut_or_precondition(&mut self, key: &ElementKey) -> GridResult<&mut Element> {
        self.elements
            .get_mut(key)
            .ok_or_else(|| GridError::precondition(format!("no element bound for {key:?}")))
    }
}

impl DrawSurface for RetainedScene {
    fn ensure_root(&mut self, translate: Vec2) -> GridResult<()> {
        match self.translate {
            None => {
                self.translate = Some(translate);
                Ok(())
            }
            Some(existing) if existing == translate => Ok(()),
            Some(existing) => Err(GridError::precondition(format!(
                "root container already translated by ({}, {}); refusing ({}, {})",
                existing.x, existing.y, translate.x, translate.y
            ))),
        }
    }

    fn upsert_circle(&mut self, key: ElementKey, center: Point, radius: f64) -> GridResult<()> {
        let el = self.elements.entry(key).or_insert_with(|| Element {
            kind: ElementKind::Circle,
            attrs: BTreeMap::new(),
        });
        if el.kind != ElementKind::Circle {
            return Err(GridError::precondition(format!(
                "{key:?} is bound to a non-circle element"
            )));
        }
        el.attrs.insert(Attr::Cx, center.x);
        el.attrs.insert(Attr::Cy, center.y);
        el.attrs.insert(Attr::R, radius);
        Ok(())
    }

    fn upsert_line(&mut self, key: ElementKey, from: Point, to: Point) -> GridResult<()> {
        let el = self.elements.entry(key).or_insert_with(|| Element {
            kind: ElementKind::Line,
            attrs: BTreeMap::new(),
        });
        if el.kind != ElementKind::Line {
            return Err(GridError::precondition(format!(
                "{key:?} is bound to a non-line element"
            )));
        }
        el.attrs.insert(Attr::X1, from.x);
        el.attrs.insert(Attr::Y1, from.y);
        el.attrs.insert(Attr::X2, to.x);
        el.attrs.insert(Attr::Y2, to.y);
        Ok(())
    }

    fn contains(&self, key: &ElementKey) -> bool {
        self.elements.contains_key(key)
    }

    fn set_attr(&mut self, key: &ElementKey, attr: Attr, value: f64) -> GridResult<()> {
        let el = self.get_mut_or_precondition(key)?;
        el.attrs.insert(attr, value);
        Ok(())
    }

    fn remove(&mut self, key: &ElementKey) -> GridResult<()> {
        if self.elements.remove(key).is_none() {
            return Err(GridError::precondition(format!(
                "no element bound for {key:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/retained.rs"]
mod tests;
