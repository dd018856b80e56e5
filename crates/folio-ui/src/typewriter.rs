//! Typewriter text.
//!
//! Cycles through a list of phrases forever: types the active phrase one
//! grapheme at a time, pauses, deletes it, then moves on to the next phrase.
//! Exactly one timer is pending at any moment, and it is cancelled when the
//! cycler leaves the page.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use folio_core::*;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Caret, Row, Text, TextStyle, ViewExt};

/// Per-step delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterSpeeds {
    /// Between typed characters.
    pub typing: Duration,
    /// Between deleted characters.
    pub deleting: Duration,
    /// Between a fully typed phrase and the first deletion.
    pub pause: Duration,
}

impl Default for TypewriterSpeeds {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            pause: Duration::from_millis(1000),
        }
    }
}

impl TypewriterSpeeds {
    pub fn from_millis(typing: i64, deleting: i64, pause: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            typing: duration_from_millis("typing_speed", typing)?,
            deleting: duration_from_millis("deleting_speed", deleting)?,
            pause: duration_from_millis("delay_between_texts", pause)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Phrase {
    text: String,
    // Byte offset of the end of each grapheme.
    ends: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let ends = text
            .grapheme_indices(true)
            .map(|(i, g)| i + g.len())
            .collect();
        Self { text, ends }
    }

    fn len(&self) -> usize {
        self.ends.len()
    }

    fn prefix(&self, graphemes: usize) -> &str {
        match graphemes {
            0 => "",
            n => &self.text[..self.ends[n.min(self.len()) - 1]],
        }
    }
}

/// A validated, non-empty phrase list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrases(Vec<Phrase>);

impl Phrases {
    pub fn new<I, S>(phrases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<Phrase> = phrases
            .into_iter()
            .map(|s| Phrase::new(s.into()))
            .collect();
        if list.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        Ok(Self(list))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|p| p.text.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Idle,
    Deleting,
}

/// The cycler's state machine, free of any timer.
#[derive(Clone, Debug)]
pub struct TypewriterState {
    phrases: Phrases,
    active: usize,
    shown: usize,
    mode: Mode,
}

impl TypewriterState {
    pub fn new(phrases: Phrases) -> Self {
        Self {
            phrases,
            active: 0,
            shown: 0,
            mode: Mode::Typing,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn displayed(&self) -> &str {
        self.phrase().prefix(self.shown)
    }

    pub fn active_phrase(&self) -> &str {
        &self.phrase().text
    }

    fn phrase(&self) -> &Phrase {
        &self.phrases.0[self.active]
    }

    /// Delay before the next [`step`](Self::step).
    pub fn next_delay(&self, speeds: &TypewriterSpeeds) -> Duration {
        match self.mode {
            Mode::Typing => speeds.typing,
            Mode::Idle => speeds.pause,
            Mode::Deleting => speeds.deleting,
        }
    }

    /// Performs one transition.
    pub fn step(&mut self) {
        match self.mode {
            Mode::Typing => {
                if self.shown < self.phrase().len() {
                    self.shown += 1;
                }
                if self.shown == self.phrase().len() {
                    self.mode = Mode::Idle;
                }
            }
            Mode::Idle => self.mode = Mode::Deleting,
            Mode::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.active = (self.active + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                }
            }
        }
    }
}

/// A running cycler bound to a scheduler.
pub struct Typewriter {
    state: RefCell<TypewriterState>,
    speeds: TypewriterSpeeds,
    text: Signal<String>,
    scheduler: Rc<dyn Scheduler>,
    pending: Cell<Option<TimerHandle>>,
    this: Weak<Typewriter>,
}

impl Typewriter {
    pub fn start(
        phrases: Phrases,
        speeds: TypewriterSpeeds,
        scheduler: Rc<dyn Scheduler>,
    ) -> Rc<Self> {
        log::debug!(
            "typewriter: {} phrases, typing {:?}, deleting {:?}, pause {:?}",
            phrases.len(),
            speeds.typing,
            speeds.deleting,
            speeds.pause
        );
        let tw = Rc::new_cyclic(|this| Self {
            state: RefCell::new(TypewriterState::new(phrases)),
            speeds,
            text: signal(String::new()),
            scheduler,
            pending: Cell::new(None),
            this: this.clone(),
        });
        tw.schedule_next();
        tw
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn active_index(&self) -> usize {
        self.state.borrow().active_index()
    }

    pub fn mode(&self) -> Mode {
        self.state.borrow().mode()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    fn schedule_next(&self) {
        let delay = self.state.borrow().next_delay(&self.speeds);
        let this = self.this.clone();
        let handle = self.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(tw) = this.upgrade() {
                    tw.tick();
                }
            }),
        );
        if let Some(prev) = self.pending.replace(Some(handle)) {
            self.scheduler.cancel(prev);
        }
    }

    fn tick(&self) {
        self.pending.set(None);
        let shown = {
            let mut state = self.state.borrow_mut();
            state.step();
            state.displayed().to_string()
        };
        if self.text.with(|t| *t != shown) {
            self.text.set(shown);
        }
        self.schedule_next();
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
    }
}

/// The displayed prefix followed by a blinking caret, both at `font_size`.
pub fn TypewriterCycler(
    key: &str,
    phrases: &Phrases,
    speeds: TypewriterSpeeds,
    font_size: f32,
) -> View {
    let tw = remember_with_key(format!("typewriter-{key}"), || {
        Typewriter::start(phrases.clone(), speeds, host().scheduler)
    });
    let th = theme();
    Row(Modifier::new().align_items(AlignItems::Center)).child((
        Text(tw.text()).color(th.accent).size(font_size),
        Caret(th.accent).size(font_size),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn speeds(typing: u64, deleting: u64, pause: u64) -> TypewriterSpeeds {
        TypewriterSpeeds {
            typing: ms(typing),
            deleting: ms(deleting),
            pause: ms(pause),
        }
    }

    fn phrases(list: &[&str]) -> Phrases {
        Phrases::new(list.iter().copied()).expect("non-empty")
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert_eq!(
            Phrases::new(Vec::<String>::new()),
            Err(ConfigError::EmptyPhrases)
        );
    }

    #[test]
    fn negative_speeds_are_rejected() {
        assert!(TypewriterSpeeds::from_millis(100, -5, 1000).is_err());
        assert_eq!(
            TypewriterSpeeds::from_millis(100, 50, 1000),
            Ok(TypewriterSpeeds::default())
        );
        assert!(TypewriterSpeeds::from_millis(0, 0, 0).is_ok());
    }

    #[test]
    fn types_pauses_deletes_then_advances() {
        let sched = Rc::new(ManualScheduler::new());
        let tw = Typewriter::start(phrases(&["ab", "c"]), speeds(10, 5, 100), sched.clone());
        assert_eq!(tw.text(), "");
        assert_eq!(tw.mode(), Mode::Typing);

        sched.advance(ms(10));
        assert_eq!(tw.text(), "a");
        sched.advance(ms(10));
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.mode(), Mode::Idle);

        sched.advance(ms(99));
        assert_eq!(tw.mode(), Mode::Idle);
        sched.advance(ms(1));
        assert_eq!(tw.mode(), Mode::Deleting);
        assert_eq!(tw.text(), "ab");

        sched.advance(ms(5));
        assert_eq!(tw.text(), "a");
        sched.advance(ms(5));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
        // 2 x typing + pause + 2 x deleting
        assert_eq!(sched.now(), ms(20 + 100 + 10));

        sched.advance(ms(10));
        assert_eq!(tw.text(), "c");
    }

    #[test]
    fn only_one_timer_is_ever_pending() {
        let sched = Rc::new(ManualScheduler::new());
        let tw = Typewriter::start(phrases(&["hey", "yo"]), speeds(3, 2, 7), sched.clone());
        for _ in 0..200 {
            assert_eq!(sched.pending(), 1);
            assert!(sched.fire_next());
        }
        assert!(tw.has_pending());
    }

    #[test]
    fn index_wraps_after_every_phrase() {
        let list = ["one", "two", "three", "é👍🏽"];
        let mut state = TypewriterState::new(phrases(&list));
        let mut seen = vec![state.active_index()];
        for _ in 0..list.len() {
            let start = state.active_index();
            while state.active_index() == start {
                state.step();
                assert!(state.active_phrase().starts_with(state.displayed()));
            }
            seen.push(state.active_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn graphemes_are_typed_whole() {
        let mut state = TypewriterState::new(phrases(&["é👍🏽"]));
        state.step();
        assert_eq!(state.displayed(), "é");
        state.step();
        assert_eq!(state.displayed(), "é👍🏽");
        assert_eq!(state.mode(), Mode::Idle);
    }

    #[test]
    fn empty_phrase_costs_one_typing_tick() {
        let mut state = TypewriterState::new(phrases(&["", "x"]));
        state.step();
        assert_eq!(state.mode(), Mode::Idle);
        state.step();
        assert_eq!(state.mode(), Mode::Deleting);
        state.step();
        assert_eq!(state.active_index(), 1);
        assert_eq!(state.mode(), Mode::Typing);
    }

    #[test]
    fn zero_speeds_still_step_one_at_a_time() {
        let sched = Rc::new(ManualScheduler::new());
        let tw = Typewriter::start(phrases(&["ab"]), speeds(0, 0, 0), sched.clone());
        assert!(sched.fire_next());
        assert_eq!(tw.text(), "a");
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn dropping_cancels_pending_timer() {
        let sched = Rc::new(ManualScheduler::new());
        let tw = Typewriter::start(phrases(&["ab"]), TypewriterSpeeds::default(), sched.clone());
        assert_eq!(sched.pending(), 1);
        drop(tw);
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.advance(ms(10_000)), 0);
    }

    #[test]
    fn cycler_stops_when_removed_from_page() {
        reset_composition();
        let sched = Rc::new(ManualScheduler::new());
        let host = Host::new(sched.clone(), Rc::new(AlwaysVisible));
        let list = phrases(&["Kalu", "a Developer"]);
        let page = |show: bool| {
            let host = host.clone();
            let list = list.clone();
            move || {
                with_host(host, || {
                    let body = show.then(|| TypewriterCycler("hero", &list, speeds(10, 5, 50), 16.0));
                    crate::Box(Modifier::new()).child(body)
                })
            }
        };

        compose(page(true));
        sched.advance(ms(30));
        let shown = compose(page(true));
        assert_eq!(shown.text_content(), "Kal");
        assert_eq!(sched.pending(), 1);

        compose(page(false));
        assert_eq!(sched.pending(), 0);
    }
}
