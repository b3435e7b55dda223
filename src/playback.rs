//! Playback: the bridge between rendered hotspots and an audio engine.
//!
//! The audio engine is external. It is reached only through [`NoteSink`],
//! which is passed in explicitly; a click on hotspot `id` becomes
//! `dispatch_by_id(&rendering.hotspots, id, &mut sink)`.

use serde::{Deserialize, Serialize};

use crate::error::FretResult;
use crate::pitch::Note;
use crate::renderer::{Hotspot, HotspotAction};

/// Note length in the notation synthesizers commonly accept ("8n" etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteValue {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteValue {
    /// Tone.js-style notation: "1n", "2n", "4n", "8n", "16n".
    pub fn notation(self) -> &'static str {
        match self {
            NoteValue::Whole => "1n",
            NoteValue::Half => "2n",
            NoteValue::Quarter => "4n",
            NoteValue::Eighth => "8n",
            NoteValue::Sixteenth => "16n",
        }
    }

    /// Length in quarter notes.
    pub fn beats(self) -> f64 {
        match self {
            NoteValue::Whole => 4.0,
            NoteValue::Half => 2.0,
            NoteValue::Quarter => 1.0,
            NoteValue::Eighth => 0.5,
            NoteValue::Sixteenth => 0.25,
        }
    }

    /// Duration in seconds at `bpm` quarter notes per minute.
    pub fn seconds(self, bpm: f64) -> f64 {
        self.beats() * 60.0 / bpm
    }
}

/// The audio trigger interface. Fire-and-forget: nothing is returned.
pub trait NoteSink {
    fn play_note(&mut self, note: &Note, value: NoteValue);
    fn play_chord(&mut self, notes: &[Note], value: NoteValue);
}

/// Forward a hotspot's action to a sink.
pub fn dispatch<S: NoteSink + ?Sized>(hotspot: &Hotspot, sink: &mut S) {
    match &hotspot.action {
        HotspotAction::PlayNote { note, value } => {
            log::debug!("play {} ({})", note, value.notation());
            sink.play_note(note, *value);
        }
        HotspotAction::PlayChord { notes, value } => {
            log::debug!("play chord of {} notes ({})", notes.len(), value.notation());
            sink.play_chord(notes, *value);
        }
    }
}

/// Dispatch the hotspot with element id `id`. Returns false when no
/// hotspot has that id.
pub fn dispatch_by_id<S: NoteSink + ?Sized>(hotspots: &[Hotspot], id: &str, sink: &mut S) -> bool {
    match hotspots.iter().find(|h| h.id == id) {
        Some(h) => {
            dispatch(h, sink);
            true
        }
        None => {
            log::warn!("no hotspot with id '{id}'");
            false
        }
    }
}

/// Serialize hotspots to JSON for a WebView host.
pub fn hotspots_to_json(hotspots: &[Hotspot]) -> FretResult<String> {
    Ok(serde_json::to_string(hotspots)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_values_in_seconds() {
        assert_eq!(NoteValue::Quarter.seconds(120.0), 0.5);
        assert_eq!(NoteValue::Eighth.seconds(120.0), 0.25);
        assert_eq!(NoteValue::Eighth.notation(), "8n");
    }
}
