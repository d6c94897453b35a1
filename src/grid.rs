use crate::{
    animation::{
        entrance::{EntranceAnimation, Scheduled},
        scheduler::TransitionScheduler,
    },
    foundation::error::GridResult,
    model::geometry::{GridModel, GridSpec},
    scene::{manager::SceneManager, surface::DrawSurface},
};

/// An alignment grid bound to one spec.
///
/// The model is computed once at construction and is immutable thereafter.
/// Rendering a changed spec means constructing a new grid; handing it the
/// previous grid's scene (see [`Grid::with_scene`]) makes its draw calls
/// reconcile against the elements already on the surface. Reconciliation
/// does not abort in-flight transitions on elements that persist across the
/// diff.
#[derive(Debug)]
pub struct Grid<T> {
    spec: GridSpec<T>,
    model: GridModel,
    scene: SceneManager,
    entrance: EntranceAnimation,
}

impl<T: PartialEq> Grid<T> {
    /// Validate `spec` and build its model.
    pub fn new(spec: GridSpec<T>) -> GridResult<Self> {
        let scene = SceneManager::new(spec.margin);
        Self::with_scene(spec, scene)
    }

    /// Like [`Grid::new`], but adopting the scene of a previous grid so
    /// stale elements are removed on the next render.
    pub fn with_scene(spec: GridSpec<T>, scene: SceneManager) -> GridResult<Self> {
        let model = spec.build()?;
        Ok(Self {
            spec,
            model,
            scene,
            entrance: EntranceAnimation::default(),
        })
    }

    /// Replace the entrance configuration.
    pub fn with_entrance(mut self, entrance: EntranceAnimation) -> Self {
        self.entrance = entrance;
        self
    }

    /// The spec this grid was built from.
    pub fn spec(&self) -> &GridSpec<T> {
        &self.spec
    }

    /// The immutable visual model.
    pub fn model(&self) -> &GridModel {
        &self.model
    }

    /// Give up the scene manager, for handing to a successor grid.
    pub fn into_scene(self) -> SceneManager {
        self.scene
    }

    /// Trigger the point phase on `surface`.
    pub fn draw_points<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> GridResult<Scheduled> {
        self.entrance.play_points(&mut self.scene, surface, &self.model)
    }

    /// Trigger the line phase on `surface`, scheduling growth on
    /// `scheduler`.
    pub fn draw_lines<S, X>(&mut self, surface: &mut S, scheduler: &mut X) -> GridResult<Scheduled>
    where
        S: DrawSurface + ?Sized,
        X: TransitionScheduler + ?Sized,
    {
        self.entrance
            .play_lines(&mut self.scene, surface, scheduler, &self.model)
    }
}

#[cfg(test)]
#[path = "../tests/unit/grid.rs"]
mod tests;
