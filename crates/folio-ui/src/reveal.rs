//! Reveal-on-scroll.
//!
//! [`RevealOnVisibility`] wraps content that starts hidden (transparent and
//! shifted by [`REVEAL_OFFSET`] pixels) and settles into place the first
//! time the wrapper enters the viewport. The latch is one-shot: once
//! visible, the content never hides again, and the host registration is
//! released right away.
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_core::*;
//! use folio_ui::*;
//!
//! let observer = Rc::new(ManualObserver::new());
//! let host = Host::new(Rc::new(ManualScheduler::new()), observer.clone());
//! let page = || {
//!     with_host(host.clone(), || {
//!         RevealOnVisibility("intro", RevealSpec::default(), Text("Hello"))
//!     })
//! };
//!
//! let hidden = compose(page);
//! assert_eq!(hidden.modifier.alpha, Some(0.0));
//!
//! observer.emit("reveal-intro", 0.5);
//! let shown = compose(page);
//! assert_eq!(shown.modifier.alpha, Some(1.0));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use folio_core::*;

use crate::{Box, ViewExt};

/// Distance, in CSS pixels, hidden content is shifted from its resting place.
pub const REVEAL_OFFSET: f32 = 30.0;

/// Side the content slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Rises into place from below.
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset applied while hidden.
    pub fn hidden_offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 {
                x: 0.0,
                y: REVEAL_OFFSET,
            },
            Direction::Down => Vec2 {
                x: 0.0,
                y: -REVEAL_OFFSET,
            },
            Direction::Left => Vec2 {
                x: REVEAL_OFFSET,
                y: 0.0,
            },
            Direction::Right => Vec2 {
                x: -REVEAL_OFFSET,
                y: 0.0,
            },
        }
    }
}

/// Immutable configuration of one reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub direction: Direction,
    pub duration: Duration,
    pub delay: Duration,
    /// Fraction of the wrapper that must intersect the viewport.
    pub threshold: f32,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            duration: Duration::from_millis(800),
            delay: Duration::ZERO,
            threshold: 0.1,
        }
    }
}

impl RevealSpec {
    pub fn new(
        direction: Direction,
        duration_secs: f32,
        delay_secs: f32,
        threshold: f32,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            direction,
            duration: duration_from_secs("duration", duration_secs)?,
            delay: duration_from_secs("delay", delay_secs)?,
            threshold,
        })
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_delay(mut self, delay_secs: f32) -> Result<Self, ConfigError> {
        self.delay = duration_from_secs("delay", delay_secs)?;
        Ok(self)
    }
}

/// The one-shot latch.
/// Browsers may report a ratio a hair under the threshold on the callback
/// that crosses it.
pub const RATIO_SLACK: f32 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection ratio. Returns `true` only for the event that
    /// flips the latch; every later event is ignored.
    ///
    /// A zero ratio never counts, so a zero threshold means "any overlap".
    /// Ratios within [`RATIO_SLACK`] below the threshold count as reaching it.
    pub fn on_intersection(&mut self, ratio: f32, threshold: f32) -> bool {
        if self.visible || ratio <= 0.0 || ratio + RATIO_SLACK < threshold {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn force_visible(&mut self) {
        self.visible = true;
    }
}

/// Presentation derived from the latch alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub transform: Transform,
    pub transition: AnimationSpec,
}

impl RevealStyle {
    pub fn for_state(visible: bool, spec: &RevealSpec) -> Self {
        let transition =
            AnimationSpec::tween(spec.duration, Easing::EaseOut).with_delay(spec.delay);
        if visible {
            Self {
                opacity: 1.0,
                transform: Transform::identity(),
                transition,
            }
        } else {
            let off = spec.direction.hidden_offset();
            Self {
                opacity: 0.0,
                transform: Transform::translate(off.x, off.y),
                transition,
            }
        }
    }

    pub fn apply(&self, m: Modifier) -> Modifier {
        m.alpha(self.opacity)
            .transform(self.transform)
            .transition(self.transition)
    }
}

/// A mounted reveal: owns the latch and the host registration.
///
/// Dropping it releases the registration, so removing the wrapper from the
/// page is enough to stop all work.
pub struct Reveal {
    spec: RevealSpec,
    latch: Cell<RevealState>,
    visible: Signal<bool>,
    observer: Rc<dyn VisibilityObserver>,
    registration: RefCell<Option<ObservationHandle>>,
}

impl Reveal {
    pub fn mount(target: &str, spec: RevealSpec, observer: Rc<dyn VisibilityObserver>) -> Rc<Self> {
        let reveal = Rc::new(Self {
            spec,
            latch: Cell::new(RevealState::default()),
            visible: signal(false),
            observer: observer.clone(),
            registration: RefCell::new(None),
        });

        let weak = Rc::downgrade(&reveal);
        let on_change: IntersectionCallback = Rc::new(move |ratio| {
            if let Some(r) = weak.upgrade() {
                r.on_intersection(ratio);
            }
        });

        match observer.observe(target, spec.threshold, on_change) {
            // Hosts may report synchronously during `observe`.
            Ok(handle) if reveal.is_visible() => observer.unobserve(handle),
            Ok(handle) => *reveal.registration.borrow_mut() = Some(handle),
            Err(err) => {
                log::warn!("reveal {target}: {err}; showing content immediately");
                reveal.trigger();
            }
        }
        reveal
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    pub fn is_visible(&self) -> bool {
        self.latch.get().is_visible()
    }

    pub fn is_observing(&self) -> bool {
        self.registration.borrow().is_some()
    }

    pub fn style(&self) -> RevealStyle {
        RevealStyle::for_state(self.is_visible(), &self.spec)
    }

    fn on_intersection(&self, ratio: f32) {
        let mut latch = self.latch.get();
        if latch.on_intersection(ratio, self.spec.threshold) {
            self.latch.set(latch);
            log::debug!("reveal triggered at ratio {ratio:.2}");
            self.release();
            self.visible.set(true);
        }
    }

    fn trigger(&self) {
        let mut latch = self.latch.get();
        latch.force_visible();
        self.latch.set(latch);
        self.visible.set(true);
    }

    fn release(&self) {
        let handle = self.registration.borrow_mut().take();
        if let Some(h) = handle {
            self.observer.unobserve(h);
        }
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.release();
    }
}

/// Wraps `content` in a box that fades and slides in the first time it
/// becomes visible. `key` must be unique on the page; the wrapper's node key
/// is `reveal-{key}`.
pub fn RevealOnVisibility(key: &str, spec: RevealSpec, content: View) -> View {
    let node = format!("reveal-{key}");
    let reveal = remember_with_key(node.clone(), || {
        Reveal::mount(&node, spec, host().observer)
    });
    let style = reveal.style();
    Box(style.apply(Modifier::new().node_key(node))).child(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    fn manual_host() -> (Host, Rc<ManualObserver>) {
        let observer = Rc::new(ManualObserver::new());
        (
            Host::new(Rc::new(ManualScheduler::new()), observer.clone()),
            observer,
        )
    }

    #[test]
    fn hidden_offset_per_direction_and_identity_when_visible() {
        let expected = [
            (Direction::Up, 0.0, 30.0),
            (Direction::Down, 0.0, -30.0),
            (Direction::Left, 30.0, 0.0),
            (Direction::Right, -30.0, 0.0),
        ];
        for (dir, x, y) in expected {
            let spec = RevealSpec::default().direction(dir);
            let hidden = RevealStyle::for_state(false, &spec);
            assert_eq!(hidden.opacity, 0.0);
            assert_eq!(hidden.transform, Transform::translate(x, y), "{dir:?}");

            let shown = RevealStyle::for_state(true, &spec);
            assert_eq!(shown.opacity, 1.0);
            assert!(shown.transform.is_identity(), "{dir:?}");
        }
    }

    #[test]
    fn transition_carries_duration_and_delay() {
        let spec = RevealSpec::new(Direction::Left, 0.5, 0.25, 0.1).expect("valid spec");
        let style = RevealStyle::for_state(false, &spec);
        assert_eq!(style.transition.duration, Duration::from_millis(500));
        assert_eq!(style.transition.delay, Duration::from_millis(250));
        assert_eq!(style.transition.easing, Easing::EaseOut);
    }

    #[test]
    fn latch_is_one_shot() {
        let mut state = RevealState::default();
        let flips: Vec<bool> = [0.05, 0.2, 0.0]
            .into_iter()
            .map(|r| state.on_intersection(r, 0.1))
            .collect();
        assert_eq!(flips, vec![false, true, false]);
        assert!(state.is_visible());
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let mut state = RevealState::default();
        assert!(!state.on_intersection(0.0, 0.0));
        assert!(state.on_intersection(0.01, 0.0));
    }

    #[test]
    fn ratio_just_under_threshold_counts() {
        let mut state = RevealState::default();
        assert!(!state.on_intersection(0.098, 0.1));
        assert!(state.on_intersection(0.0995, 0.1));

        let mut full = RevealState::default();
        assert!(full.on_intersection(0.9995, 1.0));
    }

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(
            RevealSpec::new(Direction::Up, 0.8, 0.0, 1.5),
            Err(ConfigError::ThresholdOutOfRange(1.5))
        );
        assert!(RevealSpec::new(Direction::Up, -1.0, 0.0, 0.1).is_err());
        assert!(RevealSpec::default().with_delay(f32::INFINITY).is_err());
    }

    #[test]
    fn controller_releases_registration_after_trigger() {
        let observer = Rc::new(ManualObserver::new());
        let reveal = Reveal::mount("card", RevealSpec::default(), observer.clone());
        assert_eq!(observer.threshold_of("card"), Some(0.1));

        observer.emit("card", 0.05);
        assert!(!reveal.is_visible());
        observer.emit("card", 0.2);
        assert!(reveal.is_visible());
        assert!(!reveal.is_observing());
        assert_eq!(observer.emit("card", 0.0), 0);
        assert!(reveal.is_visible());
    }

    /// Reports full visibility from inside `observe`, before a handle exists.
    #[derive(Default)]
    struct EagerObserver {
        released: Cell<usize>,
    }

    impl VisibilityObserver for EagerObserver {
        fn observe(
            &self,
            _target: &str,
            _threshold: f32,
            on_change: IntersectionCallback,
        ) -> Result<ObservationHandle, ObserveError> {
            on_change(1.0);
            Ok(ObservationHandle(9))
        }

        fn unobserve(&self, handle: ObservationHandle) {
            assert_eq!(handle, ObservationHandle(9));
            self.released.set(self.released.get() + 1);
        }
    }

    #[test]
    fn report_during_observe_latches_and_releases_once() {
        let observer = Rc::new(EagerObserver::default());
        let reveal = Reveal::mount("hero", RevealSpec::default(), observer.clone());
        assert!(reveal.is_visible());
        assert!(!reveal.is_observing());
        assert_eq!(observer.released.get(), 1);

        drop(reveal);
        assert_eq!(observer.released.get(), 1);
    }

    #[test]
    fn unsupported_observer_shows_content() {
        let reveal = Reveal::mount("card", RevealSpec::default(), Rc::new(AlwaysVisible));
        assert!(reveal.is_visible());
        assert_eq!(reveal.style().opacity, 1.0);
    }

    #[test]
    fn composed_wrapper_follows_latch() {
        reset_composition();
        let (host, observer) = manual_host();
        let page = || {
            with_host(host.clone(), || {
                RevealOnVisibility(
                    "about",
                    RevealSpec::default().direction(Direction::Right),
                    Text("About"),
                )
            })
        };

        let before = compose(page);
        assert_eq!(before.modifier.node_key.as_deref(), Some("reveal-about"));
        assert_eq!(before.modifier.alpha, Some(0.0));
        assert_eq!(before.modifier.transform, Some(Transform::translate(-30.0, 0.0)));
        assert_eq!(before.text_content(), "About");

        assert_eq!(observer.emit("reveal-about", 1.0), 1);
        let after = compose(page);
        assert_eq!(after.modifier.alpha, Some(1.0));
        assert!(after.modifier.transform.is_some_and(|t| t.is_identity()));
        assert_eq!(observer.registration_count(), 0);
    }

    #[test]
    fn removal_before_visible_stops_callbacks() {
        reset_composition();
        let (host, observer) = manual_host();
        let page = |show: bool| {
            let host = host.clone();
            move || {
                with_host(host, || {
                    let body = show.then(|| {
                        RevealOnVisibility("projects", RevealSpec::default(), Text("Projects"))
                    });
                    Box(Modifier::new()).child(body)
                })
            }
        };

        compose(page(true));
        assert!(observer.is_observing("reveal-projects"));

        compose(page(false));
        assert!(!observer.is_observing("reveal-projects"));
        let delivered = observer.delivered();
        assert_eq!(observer.emit("reveal-projects", 1.0), 0);
        assert_eq!(observer.delivered(), delivered);
    }
}
