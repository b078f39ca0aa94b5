//! Typewriter text
//!
//! Reveals glyphs one at a time at a fixed cadence and can delete them again
//! after a pause. Each glyph carries its own optional style so mixed-style
//! text types out unit by unit.

use crate::frame::{Frame, Sequencer};
use lorecraft_animation::{AnimationScheduler, Cadence};
use smallvec::SmallVec;

/// Text role a glyph is styled with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKind {
    Header,
    Body,
    Caption,
    Subscript,
    Button,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Option<TextKind>,
}

impl Glyph {
    /// Unstyled glyphs for every char of `text`
    pub fn plain(text: &str) -> Vec<Glyph> {
        Self::styled(text, None)
    }

    pub fn styled(text: &str, style: Option<TextKind>) -> Vec<Glyph> {
        text.chars().map(|ch| Glyph { ch, style }).collect()
    }
}

/// A run of text sharing one style
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Option<TextKind>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: TextKind) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    /// Delay before each glyph appears
    pub speed_ms: f32,
    /// Delay before each glyph is removed; `None` uses `speed_ms`
    pub delete_speed_ms: Option<f32>,
    /// Wait between fully typed and the first deletion
    pub pause_ms: f32,
    pub delete_after: bool,
    /// Skip the reveal and show everything immediately
    pub start_full: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed_ms: 100.0,
            delete_speed_ms: None,
            pause_ms: 1000.0,
            delete_after: false,
            start_full: false,
        }
    }
}

impl TypewriterConfig {
    pub fn delete_speed(&self) -> f32 {
        self.delete_speed_ms.unwrap_or(self.speed_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// Reached the terminal state: fully typed, or fully deleted when deleting
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypewriterPhase {
    Typing,
    Pausing { remaining_ms: f32 },
    Deleting,
    Idle,
}

pub struct Typewriter {
    glyphs: Vec<Glyph>,
    revealed: usize,
    phase: TypewriterPhase,
    config: TypewriterConfig,
    typing: Cadence,
    deleting: Cadence,
    events: SmallVec<[TypewriterEvent; 2]>,
}

impl Typewriter {
    pub fn new(glyphs: Vec<Glyph>, config: TypewriterConfig) -> Self {
        let mut typewriter = Self {
            revealed: 0,
            phase: TypewriterPhase::Typing,
            typing: Cadence::new(config.speed_ms),
            deleting: Cadence::new(config.delete_speed()),
            glyphs,
            config,
            events: SmallVec::new(),
        };
        if typewriter.config.start_full {
            typewriter.revealed = typewriter.glyphs.len();
            typewriter.fully_typed();
        }
        typewriter
    }

    pub fn from_text(text: &str, style: Option<TextKind>, config: TypewriterConfig) -> Self {
        Self::new(Glyph::styled(text, style), config)
    }

    pub fn from_spans<'a>(
        spans: impl IntoIterator<Item = &'a Span>,
        config: TypewriterConfig,
    ) -> Self {
        let glyphs = spans
            .into_iter()
            .flat_map(|span| Glyph::styled(&span.text, span.style))
            .collect();
        Self::new(glyphs, config)
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn revealed(&self) -> &[Glyph] {
        &self.glyphs[..self.revealed]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn text(&self) -> String {
        self.revealed().iter().map(|glyph| glyph.ch).collect()
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TypewriterPhase::Idle
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = TypewriterEvent> + '_ {
        self.events.drain(..)
    }

    /// Turn deletion on or off
    ///
    /// Turning it on while the text sits fully typed starts deleting right away.
    pub fn set_delete_after(&mut self, delete_after: bool) {
        self.config.delete_after = delete_after;
        if delete_after
            && self.phase == TypewriterPhase::Idle
            && self.revealed == self.glyphs.len()
        {
            tracing::debug!(len = self.glyphs.len(), "deleting from idle");
            self.deleting.reset();
            self.phase = TypewriterPhase::Deleting;
            self.check_deleted();
        }
    }

    /// Advance by `dt_ms`
    pub fn advance(&mut self, dt_ms: f32) {
        let mut budget = dt_ms.max(0.0);
        loop {
            match self.phase {
                TypewriterPhase::Typing => {
                    let missing = self.glyphs.len() - self.revealed;
                    if missing == 0 {
                        self.fully_typed();
                        continue;
                    }
                    let steps = self.typing.advance(budget) as usize;
                    if steps < missing {
                        self.revealed += steps;
                        return;
                    }
                    // time past the last glyph flows into the pause
                    budget = (steps - missing) as f32 * self.typing.interval_ms()
                        + self.typing.carried_ms();
                    self.typing.reset();
                    self.revealed = self.glyphs.len();
                    self.fully_typed();
                }
                TypewriterPhase::Pausing { remaining_ms } => {
                    if budget < remaining_ms {
                        self.phase = TypewriterPhase::Pausing {
                            remaining_ms: remaining_ms - budget,
                        };
                        return;
                    }
                    budget -= remaining_ms;
                    self.deleting.reset();
                    self.phase = TypewriterPhase::Deleting;
                    if self.check_deleted() {
                        return;
                    }
                }
                TypewriterPhase::Deleting => {
                    let steps = self.deleting.advance(budget) as usize;
                    self.revealed = self.revealed.saturating_sub(steps);
                    self.check_deleted();
                    return;
                }
                TypewriterPhase::Idle => return,
            }
        }
    }

    fn fully_typed(&mut self) {
        if self.config.delete_after {
            self.phase = TypewriterPhase::Pausing {
                remaining_ms: self.config.pause_ms,
            };
        } else {
            self.finish();
        }
    }

    fn check_deleted(&mut self) -> bool {
        if self.revealed == 0 {
            self.finish();
            true
        } else {
            false
        }
    }

    fn finish(&mut self) {
        self.phase = TypewriterPhase::Idle;
        self.events.push(TypewriterEvent::Finished);
    }
}

impl Sequencer for Typewriter {
    fn update(&mut self, _scheduler: &mut AnimationScheduler, frame: &Frame) {
        self.advance(frame.dt_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(typewriter: &mut Typewriter) -> usize {
        typewriter
            .drain_events()
            .filter(|e| *e == TypewriterEvent::Finished)
            .count()
    }

    #[test]
    fn reveals_one_glyph_per_interval() {
        let config = TypewriterConfig {
            speed_ms: 10.0,
            ..Default::default()
        };
        let mut typewriter = Typewriter::from_text("cat", None, config);
        let mut seen = vec![typewriter.text()];
        for _ in 0..3 {
            typewriter.advance(10.0);
            seen.push(typewriter.text());
        }
        assert_eq!(seen, ["", "c", "ca", "cat"]);
        assert_eq!(finished(&mut typewriter), 1);
        assert!(typewriter.is_idle());
    }

    #[test]
    fn uneven_frames_do_not_drift() {
        let config = TypewriterConfig {
            speed_ms: 10.0,
            ..Default::default()
        };
        let mut typewriter = Typewriter::from_text("hello", None, config);
        for dt in [3.0, 9.0, 7.0, 2.0] {
            typewriter.advance(dt);
        }
        assert_eq!(typewriter.text(), "he");
    }

    #[test]
    fn start_full_without_delete_finishes_immediately() {
        let config = TypewriterConfig {
            start_full: true,
            ..Default::default()
        };
        let mut typewriter = Typewriter::from_text("LoreCraft", None, config);
        assert_eq!(typewriter.text(), "LoreCraft");
        assert_eq!(finished(&mut typewriter), 1);
    }

    #[test]
    fn start_full_still_pauses_before_deleting() {
        let config = TypewriterConfig {
            speed_ms: 10.0,
            pause_ms: 100.0,
            delete_after: true,
            start_full: true,
            ..Default::default()
        };
        let mut typewriter = Typewriter::from_text("ab", None, config);
        typewriter.advance(99.0);
        assert_eq!(typewriter.text(), "ab");
        typewriter.advance(11.0);
        assert_eq!(typewriter.text(), "a");
        typewriter.advance(10.0);
        assert_eq!(typewriter.text(), "");
        assert_eq!(finished(&mut typewriter), 1);
    }

    #[test]
    fn enabling_delete_when_idle_starts_deleting() {
        let config = TypewriterConfig {
            speed_ms: 10.0,
            delete_speed_ms: Some(5.0),
            ..Default::default()
        };
        let mut typewriter = Typewriter::from_text("hey", None, config);
        typewriter.advance(30.0);
        assert_eq!(finished(&mut typewriter), 1);

        typewriter.set_delete_after(true);
        assert_eq!(typewriter.phase(), TypewriterPhase::Deleting);
        typewriter.advance(5.0);
        assert_eq!(typewriter.text(), "he");
        typewriter.advance(10.0);
        assert_eq!(typewriter.text(), "");
        assert_eq!(finished(&mut typewriter), 1);
    }

    #[test]
    fn spans_keep_their_styles() {
        let spans = [Span::plain("a "), Span::styled("cat", TextKind::Header)];
        let mut typewriter = Typewriter::from_spans(
            &spans,
            TypewriterConfig {
                speed_ms: 1.0,
                ..Default::default()
            },
        );
        typewriter.advance(3.0);
        let styles: Vec<_> = typewriter.revealed().iter().map(|g| g.style).collect();
        assert_eq!(styles, [None, None, Some(TextKind::Header)]);
        typewriter.advance(2.0);
        assert_eq!(typewriter.text(), "a cat");
    }

    #[test]
    fn empty_text_finishes_without_typing() {
        let mut typewriter = Typewriter::from_text("", None, TypewriterConfig::default());
        assert_eq!(finished(&mut typewriter), 0);
        typewriter.advance(0.0);
        assert_eq!(finished(&mut typewriter), 1);
    }
}
