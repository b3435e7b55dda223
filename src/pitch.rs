//! Pitch mapping — turns a tuning and a fret position into a sounding note.
//!
//! Strings are indexed from the **lowest** string (index 0) upward. A
//! [`Tuning`] stores one open-string pitch class per string plus the octave
//! of each open string, so `note_at` is plain arithmetic:
//!
//! ```text
//! total  = offset[string] + fret
//! class  = total mod 12
//! octave = base_octave[string] + total / 12
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FretError, FretResult};

/// Highest fret the pitch map accepts.
pub const MAX_FRET: u8 = 12;

/// String count of a standard guitar.
pub const STANDARD_STRING_COUNT: usize = 6;

/// Semitone steps between adjacent strings of standard tuning, lowest first.
pub const STANDARD_STEPS: [u8; 5] = [5, 5, 5, 4, 5];

/// Open pitch class of the lowest string in standard tuning (E).
pub const STANDARD_LOWEST_OFFSET: u8 = 4;

/// Octave of the lowest open string in standard tuning (E2).
pub const STANDARD_LOWEST_OCTAVE: i32 = 2;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

// ═══════════════════════════════════════════════════════════════════════
// Pitch class & note
// ═══════════════════════════════════════════════════════════════════════

/// One of the 12 semitone names, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Pitch class of any semitone count (wraps, negatives included).
    pub fn from_semitone(semitone: i32) -> Self {
        Self::ALL[semitone.rem_euclid(12) as usize]
    }

    /// Semitones above C (0..=11).
    pub fn semitone(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self as usize]
    }

    fn from_name(name: &str) -> Option<Self> {
        NOTE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pitch class in a concrete octave, e.g. `E2`.
///
/// Serialized as its text form so hotspot JSON reads `"note": "E2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Note {
    pub pitch_class: PitchClass,
    pub octave: i32,
}

impl Note {
    pub fn new(pitch_class: PitchClass, octave: i32) -> Self {
        Self { pitch_class, octave }
    }

    /// Note for a MIDI key number (60 = C4).
    pub fn from_midi(midi: i32) -> Self {
        Self {
            pitch_class: PitchClass::from_semitone(midi),
            octave: midi.div_euclid(12) - 1,
        }
    }

    /// MIDI key number (60 = C4).
    pub fn midi(&self) -> i32 {
        (self.octave + 1) * 12 + self.pitch_class.semitone() as i32
    }

    /// Equal-tempered frequency with A4 = 440 Hz.
    pub fn frequency_hz(&self) -> f64 {
        440.0 * 2f64.powf((self.midi() - 69) as f64 / 12.0)
    }

    /// Signed semitone distance from `self` up to `other`.
    pub fn semitones_to(&self, other: &Note) -> i32 {
        other.midi() - self.midi()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for Note {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = if s.get(1..2) == Some("#") { 2 } else { 1 };
        let (name, octave) = s
            .get(..split)
            .zip(s.get(split..))
            .ok_or_else(|| FretError::InvalidNote(s.to_string()))?;
        let pitch_class =
            PitchClass::from_name(name).ok_or_else(|| FretError::InvalidNote(s.to_string()))?;
        let octave = octave
            .parse::<i32>()
            .map_err(|_| FretError::InvalidNote(s.to_string()))?;
        Ok(Note { pitch_class, octave })
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

impl TryFrom<String> for Note {
    type Error = FretError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Base-octave tables
// ═══════════════════════════════════════════════════════════════════════

/// Octave of each open string such that open pitches rise strictly from
/// the lowest string, which sits in `lowest_octave`.
///
/// Standard tuning gives `[2, 2, 3, 3, 3, 4]` (E2 A2 D3 G3 B3 E4).
pub fn ascending_base_octaves(offsets: &[u8], lowest_octave: i32) -> Vec<i32> {
    let mut octaves = Vec::with_capacity(offsets.len());
    let mut prev: Option<i32> = None;
    for &offset in offsets {
        let midi = match prev {
            None => (lowest_octave + 1) * 12 + offset as i32,
            Some(p) => {
                let candidate = p.div_euclid(12) * 12 + offset as i32;
                if candidate <= p {
                    candidate + 12
                } else {
                    candidate
                }
            }
        };
        octaves.push(midi.div_euclid(12) - 1);
        prev = Some(midi);
    }
    octaves
}

/// The pairwise approximation used by early fretboard sketches: every two
/// strings share an octave, starting at 2 for the lowest pair.
///
/// Cheap, but it puts the B string of standard tuning an octave high.
pub fn heuristic_base_octaves(string_count: usize) -> Vec<i32> {
    (0..string_count).map(|i| 2 + (i / 2) as i32).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Tuning
// ═══════════════════════════════════════════════════════════════════════

/// Open-string pitch classes and octaves, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTuning")]
pub struct Tuning {
    offsets: Vec<u8>,
    base_octaves: Vec<i32>,
}

#[derive(Deserialize)]
struct RawTuning {
    offsets: Vec<u8>,
    base_octaves: Option<Vec<i32>>,
}

impl TryFrom<RawTuning> for Tuning {
    type Error = FretError;

    fn try_from(raw: RawTuning) -> Result<Self, Self::Error> {
        let base = raw
            .base_octaves
            .unwrap_or_else(|| ascending_base_octaves(&raw.offsets, STANDARD_LOWEST_OCTAVE));
        Tuning::with_base_octaves(raw.offsets, base)
    }
}

impl Tuning {
    /// Six-string tuning from open-string offsets (0..=11), lowest first.
    /// Octaves rise from 2 on the lowest string.
    pub fn new(offsets: &[u8]) -> FretResult<Self> {
        if offsets.len() != STANDARD_STRING_COUNT {
            return Err(FretError::InvalidTuning(format!(
                "expected {} strings, got {}",
                STANDARD_STRING_COUNT,
                offsets.len()
            )));
        }
        let base = ascending_base_octaves(offsets, STANDARD_LOWEST_OCTAVE);
        Self::with_base_octaves(offsets.to_vec(), base)
    }

    /// Tuning of any string count with an explicit base-octave table.
    pub fn with_base_octaves(offsets: Vec<u8>, base_octaves: Vec<i32>) -> FretResult<Self> {
        if offsets.is_empty() {
            return Err(FretError::InvalidTuning("no strings".into()));
        }
        if offsets.len() != base_octaves.len() {
            return Err(FretError::InvalidTuning(format!(
                "{} offsets but {} base octaves",
                offsets.len(),
                base_octaves.len()
            )));
        }
        if let Some((i, bad)) = offsets.iter().enumerate().find(|&(_, &o)| o > 11) {
            return Err(FretError::InvalidTuning(format!(
                "string {i} offset {bad} outside 0..=11"
            )));
        }
        Ok(Self {
            offsets,
            base_octaves,
        })
    }

    /// Rebuild a tuning from the lowest string's offset and the semitone
    /// steps between adjacent strings. Without a table the octaves ascend
    /// from 2.
    pub fn from_steps(
        lowest_offset: u8,
        steps: &[u8],
        base_octaves: Option<Vec<i32>>,
    ) -> FretResult<Self> {
        if lowest_offset > 11 {
            return Err(FretError::InvalidTuning(format!(
                "lowest offset {lowest_offset} outside 0..=11"
            )));
        }
        let mut offsets = Vec::with_capacity(steps.len() + 1);
        offsets.push(lowest_offset);
        let mut current = lowest_offset;
        for &step in steps {
            current = ((current as u16 + step as u16) % 12) as u8;
            offsets.push(current);
        }
        let base = base_octaves
            .unwrap_or_else(|| ascending_base_octaves(&offsets, STANDARD_LOWEST_OCTAVE));
        Self::with_base_octaves(offsets, base)
    }

    pub fn string_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn offsets(&self) -> &[u8] {
        &self.offsets
    }

    pub fn base_octaves(&self) -> &[i32] {
        &self.base_octaves
    }

    /// Adjacent semitone steps mod 12, lowest pair first.
    pub fn steps(&self) -> Vec<u8> {
        self.offsets
            .windows(2)
            .map(|w| ((w[1] as i32 - w[0] as i32).rem_euclid(12)) as u8)
            .collect()
    }

    pub fn open_note(&self, string_index: usize) -> FretResult<Note> {
        self.note_at(string_index, 0)
    }

    pub fn note_at(&self, string_index: usize, fret: u8) -> FretResult<Note> {
        note_at(self, string_index, fret)
    }
}

/// The canonical E A D G B E tuning.
pub fn build_standard_tuning() -> Tuning {
    Tuning {
        offsets: vec![4, 9, 2, 7, 11, 4],
        base_octaves: vec![2, 2, 3, 3, 3, 4],
    }
}

/// Sounding note at `fret` on string `string_index` (lowest string = 0).
pub fn note_at(tuning: &Tuning, string_index: usize, fret: u8) -> FretResult<Note> {
    if string_index >= tuning.string_count() {
        return Err(FretError::out_of_range(
            "string",
            string_index as i64,
            tuning.string_count() as i64 - 1,
        ));
    }
    if fret > MAX_FRET {
        return Err(FretError::out_of_range("fret", fret, MAX_FRET));
    }
    let total = tuning.offsets[string_index] as i32 + fret as i32;
    Ok(Note {
        pitch_class: PitchClass::from_semitone(total),
        octave: tuning.base_octaves[string_index] + total / 12,
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Interval classification
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalKind {
    HalfStep,
    WholeStep,
    Other,
}

impl IntervalKind {
    /// Short label drawn on the board ("H", "W", or nothing).
    pub fn label(self) -> &'static str {
        match self {
            IntervalKind::HalfStep => "H",
            IntervalKind::WholeStep => "W",
            IntervalKind::Other => "",
        }
    }
}

/// Classify a semitone step: 1 is a half step, 2 a whole step.
pub fn interval_kind(semitone_step: i32) -> IntervalKind {
    match semitone_step {
        1 => IntervalKind::HalfStep,
        2 => IntervalKind::WholeStep,
        _ => IntervalKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tuning_matches_step_rebuild() {
        let rebuilt = Tuning::from_steps(STANDARD_LOWEST_OFFSET, &STANDARD_STEPS, None).unwrap();
        assert_eq!(rebuilt, build_standard_tuning());
        assert_eq!(Tuning::new(&[4, 9, 2, 7, 11, 4]).unwrap(), build_standard_tuning());
    }

    #[test]
    fn heuristic_table_pairs_strings() {
        assert_eq!(heuristic_base_octaves(6), vec![2, 2, 3, 3, 4, 4]);
        assert_eq!(heuristic_base_octaves(4), vec![2, 2, 3, 3]);
    }

    #[test]
    fn note_parses_its_own_display() {
        for midi in 24..=88 {
            let note = Note::from_midi(midi);
            assert_eq!(note.to_string().parse::<Note>().unwrap(), note);
        }
        assert!("H2".parse::<Note>().is_err());
        assert!("C#".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
    }

    #[test]
    fn a4_is_440() {
        let a4: Note = "A4".parse().unwrap();
        assert_eq!(a4.midi(), 69);
        assert!((a4.frequency_hz() - 440.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_offsets_above_eleven() {
        assert!(matches!(
            Tuning::new(&[4, 9, 2, 7, 12, 4]),
            Err(FretError::InvalidTuning(_))
        ));
        assert!(matches!(
            Tuning::with_base_octaves(vec![4, 9], vec![2]),
            Err(FretError::InvalidTuning(_))
        ));
    }
}
