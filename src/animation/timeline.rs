//! Ordered timeline of timed segments for one step transition.
//!
//! A timeline is an explicit list of `(start offset, duration, effect)`
//! segments. It does no timekeeping of its own: the owner calls
//! [`Timeline::advance`] with the frame clock's current time, which makes
//! playback deterministic under a virtual clock.

use std::time::Duration;

use super::watchdog::Completer;
use crate::effects::{EffectHandle, EffectId};
use crate::scene::Scene;

/// Mutable access handed to segment effects while they run.
pub struct SegmentContext<'a> {
    /// The scene being animated.
    pub scene: &'a mut Scene,
    effects: &'a mut Vec<EffectHandle>,
}

impl SegmentContext<'_> {
    /// Hand an effect to the timeline. Owned effects are disposed when the
    /// transition completes or is force-released.
    pub fn own(&mut self, handle: EffectHandle) -> EffectId {
        let id = handle.id();
        self.effects.push(handle);
        id
    }

    /// Dispose an owned effect early.
    pub fn release(&mut self, id: EffectId) {
        if let Some(pos) = self.effects.iter().position(|h| h.id() == id) {
            let handle = self.effects.swap_remove(pos);
            self.scene.dispose(handle);
        }
    }
}

/// The behavior of one timeline segment.
///
/// `begin` runs once when the segment's start offset is reached, `apply`
/// on every frame inside the segment with local progress `t` in `[0, 1)`,
/// and `end` once when the segment's duration has elapsed.
pub trait SegmentEffect {
    /// Called once when the segment starts.
    fn begin(&mut self, _ctx: &mut SegmentContext<'_>) {}

    /// Apply the effect at local progress `t`.
    fn apply(&mut self, ctx: &mut SegmentContext<'_>, t: f32);

    /// Called once when the segment ends. Default: apply at `t = 1`.
    fn end(&mut self, ctx: &mut SegmentContext<'_>) {
        self.apply(ctx, 1.0);
    }

    /// Name for debugging/logging.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    Pending,
    Running,
    Done,
}

/// A segment scheduled at an offset from the timeline start.
pub struct Segment {
    start: Duration,
    duration: Duration,
    effect: Box<dyn SegmentEffect>,
    state: SegmentState,
}

impl Segment {
    /// Segment running `effect` from `start` for `duration`.
    pub fn new(
        start: Duration,
        duration: Duration,
        effect: impl SegmentEffect + 'static,
    ) -> Self {
        Self {
            start,
            duration,
            effect: Box::new(effect),
            state: SegmentState::Pending,
        }
    }

    /// Offset from the timeline start.
    #[must_use]
    pub fn start(&self) -> Duration {
        self.start
    }

    /// Length of the segment.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Offset at which the segment ends.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    /// The effect's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.effect.name()
    }

    /// Whether the segment has ended.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == SegmentState::Done
    }

    fn step(&mut self, elapsed: Duration, ctx: &mut SegmentContext<'_>) {
        match self.state {
            SegmentState::Done => return,
            SegmentState::Pending if elapsed < self.start => return,
            SegmentState::Pending => {
                self.effect.begin(ctx);
                self.state = SegmentState::Running;
            }
            SegmentState::Running => {}
        }

        let local = elapsed - self.start;
        if local >= self.duration {
            self.effect.end(ctx);
            self.state = SegmentState::Done;
        } else {
            let t = local.as_secs_f32() / self.duration.as_secs_f32();
            self.effect.apply(ctx, t);
        }
    }
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("name", &self.effect.name())
            .field("start", &self.start)
            .field("duration", &self.duration)
            .field("state", &self.state)
            .finish()
    }
}

/// Ordered segments plus the effects they spawned.
#[derive(Debug, Default)]
pub struct Timeline {
    segments: Vec<Segment>,
    started_at: Option<Duration>,
    effects: Vec<EffectHandle>,
    completer: Option<Completer>,
}

impl Timeline {
    /// Empty, unstarted timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `effect` at `start` for `duration`.
    #[must_use]
    pub fn with(
        mut self,
        start: Duration,
        duration: Duration,
        effect: impl SegmentEffect + 'static,
    ) -> Self {
        self.push(Segment::new(start, duration, effect));
        self
    }

    /// Schedule a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
        // Stable, so same-offset segments keep insertion order.
        self.segments.sort_by_key(Segment::start);
    }

    /// Segments in start order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// First segment with the given name.
    #[must_use]
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name() == name)
    }

    /// Offset at which the last segment ends.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.segments
            .iter()
            .map(Segment::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Start playback at `now`. `completer` fires once every segment has
    /// ended.
    pub fn start(&mut self, now: Duration, completer: Completer) {
        self.started_at = Some(now);
        self.completer = Some(completer);
    }

    /// Whether [`start`](Self::start) has been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whether every segment has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_started() && self.segments.iter().all(Segment::is_done)
    }

    /// Run every due segment at `now`. Returns `true` once all segments
    /// have ended.
    pub fn advance(&mut self, now: Duration, scene: &mut Scene) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_sub(started_at);

        let mut ctx = SegmentContext {
            scene,
            effects: &mut self.effects,
        };
        for segment in &mut self.segments {
            segment.step(elapsed, &mut ctx);
        }

        let finished = self.is_finished();
        if finished {
            if let Some(completer) = self.completer.take() {
                completer.complete();
            }
        }
        finished
    }

    /// Take ownership of every effect spawned so far.
    pub fn take_effects(&mut self) -> Vec<EffectHandle> {
        std::mem::take(&mut self.effects)
    }

    /// Drop the completion signal without firing it.
    #[cfg(test)]
    pub(crate) fn sever_completion(&mut self) {
        drop(self.completer.take());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::animation::watchdog::{completion, PollAt};
    use crate::options::Options;

    const MS: Duration = Duration::from_millis(1);

    /// Records every call as `name:event[:t]`.
    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl SegmentEffect for Recorder {
        fn begin(&mut self, _ctx: &mut SegmentContext<'_>) {
            self.log.borrow_mut().push(format!("{}:begin", self.name));
        }

        fn apply(&mut self, _ctx: &mut SegmentContext<'_>, t: f32) {
            self.log.borrow_mut().push(format!("{}:{t:.2}", self.name));
        }

        fn end(&mut self, _ctx: &mut SegmentContext<'_>) {
            self.log.borrow_mut().push(format!("{}:end", self.name));
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    fn recorder(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Recorder {
        Recorder {
            name,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn segments_run_in_order_with_local_progress() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new(&Options::default());
        let mut timeline = Timeline::new()
            .with(100 * MS, 100 * MS, recorder("b", &log))
            .with(Duration::ZERO, 100 * MS, recorder("a", &log));
        assert_eq!(timeline.segments()[0].name(), "a");
        assert_eq!(timeline.total_duration(), 200 * MS);

        let (completer, _done) = completion();
        timeline.start(Duration::from_secs(1), completer);
        let base = Duration::from_secs(1);
        assert!(!timeline.advance(base, &mut scene));
        assert!(!timeline.advance(base + 50 * MS, &mut scene));
        assert!(!timeline.advance(base + 150 * MS, &mut scene));
        assert!(timeline.advance(base + 200 * MS, &mut scene));

        assert_eq!(
            *log.borrow(),
            vec![
                "a:begin", "a:0.00", "a:0.50", "a:end", "b:begin", "b:0.50",
                "b:end"
            ]
        );
    }

    #[test]
    fn unstarted_timeline_does_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new(&Options::default());
        let mut timeline = Timeline::new().with(Duration::ZERO, MS, recorder("a", &log));
        assert!(!timeline.advance(Duration::from_secs(5), &mut scene));
        assert!(log.borrow().is_empty());
        assert!(!timeline.is_finished());
    }

    #[test]
    fn completion_fires_when_last_segment_ends() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new(&Options::default());
        let mut timeline =
            Timeline::new().with(Duration::ZERO, 10 * MS, recorder("a", &log));
        let (completer, mut done) = completion();
        timeline.start(Duration::ZERO, completer);

        let _ = timeline.advance(5 * MS, &mut scene);
        assert!(done.poll_at(5 * MS).is_pending());
        let _ = timeline.advance(10 * MS, &mut scene);
        assert!(done.poll_at(10 * MS).is_ready());
    }

    #[test]
    fn zero_length_segment_begins_and_ends_together() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new(&Options::default());
        let mut timeline =
            Timeline::new().with(Duration::ZERO, Duration::ZERO, recorder("z", &log));
        let (completer, _done) = completion();
        timeline.start(Duration::ZERO, completer);
        assert!(timeline.advance(Duration::ZERO, &mut scene));
        assert_eq!(*log.borrow(), vec!["z:begin", "z:end"]);
    }

    #[test]
    fn severed_completion_never_fires() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new(&Options::default());
        let mut timeline = Timeline::new().with(Duration::ZERO, MS, recorder("a", &log));
        let (completer, done) = completion();
        timeline.start(Duration::ZERO, completer);
        timeline.sever_completion();
        assert!(timeline.advance(MS, &mut scene));
        assert!(done.is_orphaned());
    }
}
