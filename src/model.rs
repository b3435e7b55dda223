//! Data model handed from the instance adapter to the renderer.
//!
//! Everything here is plain integers and labels: relational atoms are
//! resolved before a `Fretboard` is built.

use serde::{Deserialize, Serialize};

use crate::error::{FretError, FretResult};
use crate::pitch::{interval_kind, note_at, IntervalKind, Note, Tuning};

/// A (string, fret) pair. String 0 is the lowest string; fret 0 is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FretPosition {
    pub string_index: usize,
    pub fret: u8,
}

impl FretPosition {
    pub fn new(string_index: usize, fret: u8) -> Self {
        Self { string_index, fret }
    }
}

/// One string of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringInfo {
    /// Atom label from the instance (e.g. "String0"), if any.
    pub atom: Option<String>,
}

/// A fret tagged by an interval atom, with the step from the previous mark
/// on the same string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalMark {
    pub position: FretPosition,
    /// Interval atom label (e.g. "Interval3").
    pub label: String,
    /// Frets up from the previous mark on this string; `None` for the first.
    pub step: Option<u8>,
}

impl IntervalMark {
    pub fn kind(&self) -> Option<IntervalKind> {
        self.step.map(|s| interval_kind(s as i32))
    }
}

/// Everything needed to draw one fretboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fretboard {
    pub tuning: Tuning,
    pub strings: Vec<StringInfo>,
    /// Positions played in the model, sorted and deduplicated.
    pub played: Vec<FretPosition>,
    pub intervals: Vec<IntervalMark>,
}

impl Fretboard {
    /// A bare board for a tuning: no played notes, no intervals.
    pub fn new(tuning: Tuning) -> Self {
        let strings = vec![StringInfo { atom: None }; tuning.string_count()];
        Self {
            tuning,
            strings,
            played: Vec::new(),
            intervals: Vec::new(),
        }
    }

    pub fn string_count(&self) -> usize {
        self.tuning.string_count()
    }

    pub fn is_played(&self, position: FretPosition) -> bool {
        self.played.binary_search(&position).is_ok()
    }

    /// Record a played position, keeping `played` sorted.
    pub fn play(&mut self, position: FretPosition) -> FretResult<()> {
        note_at(&self.tuning, position.string_index, position.fret)?;
        if let Err(idx) = self.played.binary_search(&position) {
            self.played.insert(idx, position);
        }
        Ok(())
    }

    /// Attach interval marks, recomputing steps per string.
    pub fn set_intervals(&mut self, mut marks: Vec<(FretPosition, String)>) -> FretResult<()> {
        marks.sort();
        let mut intervals: Vec<IntervalMark> = Vec::with_capacity(marks.len());
        for (position, label) in marks {
            note_at(&self.tuning, position.string_index, position.fret)?;
            let step = intervals
                .last()
                .filter(|prev| prev.position.string_index == position.string_index)
                .map(|prev| position.fret - prev.position.fret);
            intervals.push(IntervalMark {
                position,
                label,
                step,
            });
        }
        self.intervals = intervals;
        Ok(())
    }

    /// Re-check a board built outside `play`/`set_intervals` (e.g. read
    /// from JSON): string infos must match the tuning, positions must be in
    /// range, and interval steps are recomputed.
    pub fn revalidated(self) -> FretResult<Self> {
        if self.strings.len() != self.tuning.string_count() {
            return Err(FretError::InvalidTuning(format!(
                "board has {} strings but tuning has {}",
                self.strings.len(),
                self.tuning.string_count()
            )));
        }
        let mut board = Fretboard {
            tuning: self.tuning,
            strings: self.strings,
            played: Vec::with_capacity(self.played.len()),
            intervals: Vec::new(),
        };
        for position in self.played {
            board.play(position)?;
        }
        board.set_intervals(
            self.intervals
                .into_iter()
                .map(|m| (m.position, m.label))
                .collect(),
        )?;
        Ok(board)
    }

    /// Sounding notes of the played positions, low string first.
    pub fn played_notes(&self) -> FretResult<Vec<Note>> {
        self.played
            .iter()
            .map(|p| note_at(&self.tuning, p.string_index, p.fret))
            .collect()
    }
}
