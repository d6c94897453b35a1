use crate::{
    animation::ease::Ease,
    foundation::{
        core::Ticks,
        error::{GridError, GridResult},
    },
    scene::surface::{Attr, DrawSurface, ElementKey},
};

/// Identifier of one scheduled transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(pub u64);

/// One attribute interpolated by a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct AttrTween {
    /// Element the attribute belongs to.
    pub key: ElementKey,
    /// Attribute being interpolated.
    pub attr: Attr,
    /// Value at transition start.
    pub from: f64,
    /// Value at and after settlement.
    pub to: f64,
}

/// External transition scheduler contract.
///
/// [`TransitionScheduler::begin`] schedules work and returns synchronously;
/// the returned id is the *scheduled* signal. Settlement is a separate
/// signal queried through [`TransitionScheduler::settled`]; callers that
/// need "animation complete" must not conflate the two.
pub trait TransitionScheduler {
    /// Begin one timed transition of `duration`, interpolating every tween
    /// in lockstep under the same clock and easing.
    ///
    /// An empty tween set is a precondition violation.
    fn begin(
        &mut self,
        duration: Ticks,
        ease: Ease,
        tweens: Vec<AttrTween>,
    ) -> GridResult<TransitionId>;

    /// True once the transition behind `id` has reached its targets.
    ///
    /// Unknown ids report `false`.
    fn settled(&self, id: TransitionId) -> bool;
}

/// Deterministic [`TransitionScheduler`] driven by an explicit clock.
///
/// The host advances time with [`TickScheduler::advance`]; each step writes
/// the interpolated attribute values through the surface. There is no
/// wall-clock dependency, so playback is reproducible tick for tick.
#[derive(Debug, Default)]
pub struct TickScheduler {
    now: Ticks,
    next_id: u64,
    active: Vec<ActiveTransition>,
}

#[derive(Debug)]
struct ActiveTransition {
    id: TransitionId,
    start: Ticks,
    duration: Ticks,
    ease: Ease,
    tweens: Vec<AttrTween>,
}

impl ActiveTransition {
    fn progress_at(&self, now: Ticks) -> f64 {
        if self.duration.0 == 0 {
            return 1.0;
        }
        let elapsed = now.0.saturating_sub(self.start.0);
        (elapsed as f64 / self.duration.0 as f64).clamp(0.0, 1.0)
    }
}

impl TickScheduler {
    /// Create a scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value.
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Advance the clock by `dt` and write every active transition's
    /// interpolated values through `surface`.
    ///
    /// Progress clamps at `1.0`, so values land on their exact targets at
    /// and beyond `duration`. Tweens whose element has since been removed by
    /// reconciliation are skipped, mirroring the drop-on-remove behavior of
    /// retained hosts; settled transitions stay queryable via
    /// [`TransitionScheduler::settled`].
    pub fn advance<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        dt: Ticks,
    ) -> GridResult<()> {
        self.now = self.now.saturating_add(dt);
        for transition in &self.active {
            let eased = transition.ease.apply(transition.progress_at(self.now));
            for tween in &transition.tweens {
                if !surface.contains(&tween.key) {
                    continue;
                }
                let value = tween.from + (tween.to - tween.from) * eased;
                surface.set_attr(&tween.key, tween.attr, value)?;
            }
        }
        Ok(())
    }
}

impl TransitionScheduler for TickScheduler {
    #[tracing::instrument(skip(self, tweens), fields(targets = tweens.len()))]
    fn begin(
        &mut self,
        duration: Ticks,
        ease: Ease,
        tweens: Vec<AttrTween>,
    ) -> GridResult<TransitionId> {
        if tweens.is_empty() {
            return Err(GridError::precondition(
                "transition must target at least one attribute",
            ));
        }
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        self.active.push(ActiveTransition {
            id,
            start: self.now,
            duration,
            ease,
            tweens,
        });
        Ok(id)
    }

    fn settled(&self, id: TransitionId) -> bool {
        self.active
            .iter()
            .any(|t| t.id == id && t.progress_at(self.now) >= 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
