use crate::{
    animation::{
        ease::Ease,
        scheduler::{AttrTween, TransitionId, TransitionScheduler},
    },
    foundation::{core::Ticks, error::GridResult},
    model::geometry::{GridModel, Orientation},
    scene::{
        manager::{SceneManager, keyed_lines},
        surface::{Attr, DrawSurface},
    },
};

/// Duration of the line-growth phase, in scheduler ticks.
pub const LINE_GROW_TICKS: Ticks = Ticks(1000);

/// Receipt that a phase's elements were bound and its work handed to the
/// scheduler.
///
/// A `Scheduled` value says nothing about visual completion: phase triggers
/// return as soon as scheduling is done. Await settlement separately through
/// [`TransitionScheduler::settled`] with the contained id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    /// Transition backing the phase, when the phase animates at all.
    pub transition: Option<TransitionId>,
}

/// Two-phase entrance: points appear, then lines grow from the origin to
/// their full extents.
///
/// The orchestrator enforces no ordering between the phases. The reference
/// behavior triggers both back-to-back without awaiting settlement; callers
/// may equally run them sequentially.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceAnimation {
    /// Line-growth duration.
    pub line_duration: Ticks,
    /// Easing applied to line growth.
    pub ease: Ease,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            line_duration: LINE_GROW_TICKS,
            ease: Ease::InOutCubic,
        }
    }
}

impl EntranceAnimation {
    /// Phase 1: bind every point at its final position, with no transition.
    #[tracing::instrument(skip_all, fields(points = model.points.len()))]
    pub fn play_points<S: DrawSurface + ?Sized>(
        &self,
        scene: &mut SceneManager,
        surface: &mut S,
        model: &GridModel,
    ) -> GridResult<Scheduled> {
        scene.render_points(surface, &model.points)?;
        Ok(Scheduled { transition: None })
    }

    /// Phase 2: bind every line, collapse its grow-axis endpoint to the
    /// origin, and schedule one shared transition to the full extents.
    ///
    /// Horizontal lines grow along `x2`, vertical lines along `y2`. All
    /// lines share a single transition instance so they move in lockstep.
    #[tracing::instrument(skip_all, fields(lines = model.lines.len()))]
    pub fn play_lines<S, X>(
        &self,
        scene: &mut SceneManager,
        surface: &mut S,
        scheduler: &mut X,
        model: &GridModel,
    ) -> GridResult<Scheduled>
    where
        S: DrawSurface + ?Sized,
        X: TransitionScheduler + ?Sized,
    {
        scene.render_lines(surface, &model.lines)?;

        let mut tweens = Vec::with_capacity(model.lines.len());
        for (key, line) in keyed_lines(&model.lines) {
            let (attr, to) = match line.orientation {
                Orientation::Horizontal => (Attr::X2, line.to.x),
                Orientation::Vertical => (Attr::Y2, line.to.y),
            };
            surface.set_attr(&key, attr, 0.0)?;
            tweens.push(AttrTween {
                key,
                attr,
                from: 0.0,
                to,
            });
        }

        let id = scheduler.begin(self.line_duration, self.ease, tweens)?;
        Ok(Scheduled {
            transition: Some(id),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
