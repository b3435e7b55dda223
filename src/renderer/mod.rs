//! Fretboard renderer — converts a `Fretboard` into SVG output.
//!
//! The renderer only produces data: a self-contained SVG string and the
//! list of interactive regions ([`Hotspot`]) in it. Every interactive
//! element carries an `id` matching its hotspot plus `data-note` /
//! `data-notes` attributes, so a host can attach click handlers and route
//! them to a [`NoteSink`](crate::playback::NoteSink) without the renderer
//! knowing about events or audio.

mod board;
mod constants;
mod notes;
mod svg_builder;

use serde::Serialize;

use crate::error::{FretError, FretResult};
use crate::geometry::BoardConfig;
use crate::model::{FretPosition, Fretboard};
use crate::pitch::Note;
use crate::playback::NoteValue;
use board::{render_board, render_legend, render_strings};
use constants::*;
use notes::{render_intervals, render_note_markers, render_play_button};
use svg_builder::SvgBuilder;

pub use notes::{hotspot_id, PLAY_BUTTON_ID};

// ═══════════════════════════════════════════════════════════════════════
// Output types
// ═══════════════════════════════════════════════════════════════════════

/// Axis-aligned box in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Square box around a circle.
    pub fn around(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            x: cx - r,
            y: cy - r,
            width: 2.0 * r,
            height: 2.0 * r,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// What clicking a hotspot plays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HotspotAction {
    PlayNote { note: Note, value: NoteValue },
    PlayChord { notes: Vec<Note>, value: NoteValue },
}

/// An interactive region of the rendered SVG.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    /// The `id` attribute of the SVG element.
    pub id: String,
    pub bounds: Bounds,
    /// Board position for note hotspots; `None` for the play button.
    pub position: Option<FretPosition>,
    pub action: HotspotAction,
}

/// A rendered fretboard.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub svg: String,
    pub hotspots: Vec<Hotspot>,
}

impl Rendering {
    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    /// Topmost hotspot under a point (later elements are drawn above).
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Hotspot> {
        self.hotspots.iter().rev().find(|h| h.bounds.contains(x, y))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a fretboard into SVG plus its hotspots.
///
/// The board's string count overrides `config.string_count`. Played
/// and interval-marked positions beyond `config.fret_count` are rejected.
pub fn render_fretboard(board: &Fretboard, config: &BoardConfig) -> FretResult<Rendering> {
    let config = BoardConfig {
        string_count: board.string_count(),
        ..config.clone()
    };
    config.validate()?;
    let marked = board.intervals.iter().map(|m| &m.position);
    if let Some(p) = board.played.iter().chain(marked).find(|p| p.fret > config.fret_count) {
        return Err(FretError::out_of_range(
            "fret",
            p.fret,
            config.fret_count,
        ));
    }
    log::debug!(
        "rendering {} strings x {} frets on {}x{} canvas",
        config.string_count,
        config.fret_count,
        config.canvas_width,
        config.canvas_height
    );

    let mut svg = SvgBuilder::new(config.canvas_width, config.canvas_height);

    svg.rect(0.0, 0.0, config.canvas_width, config.canvas_height, "white", "none", 0.0);
    render_board(&mut svg, &config);
    render_strings(&mut svg, &board.tuning, &config);
    render_legend(&mut svg, &board.tuning, &config);

    let mut hotspots = render_note_markers(&mut svg, board, &config)?;
    render_intervals(&mut svg, board, &config);

    let played: Vec<Note> = board.played_notes()?;
    if let Some(button) = render_play_button(&mut svg, &played, &config) {
        hotspots.push(button);
    }

    svg.text(
        config.canvas_width / 2.0,
        TITLE_Y,
        TITLE,
        TITLE_SIZE,
        "bold",
        TEXT_COLOR,
        "middle",
    );
    svg.styled_text(
        config.left,
        config.bottom() + INSTRUCTIONS_OFFSET_Y,
        INSTRUCTIONS,
        14.0,
        "normal",
        TEXT_COLOR,
        "start",
        Some("italic"),
    );

    log::info!(
        "fretboard rendered with {} played notes from model ({} hotspots)",
        played.len(),
        hotspots.len()
    );

    Ok(Rendering {
        svg: svg.build(),
        hotspots,
    })
}

/// Render a fretboard straight to an SVG string.
pub fn render_fretboard_to_svg(board: &Fretboard, config: &BoardConfig) -> FretResult<String> {
    render_fretboard(board, config).map(|r| r.svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_hit_and_center() {
        let b = Bounds::around(50.0, 40.0, 10.0);
        assert!(b.contains(45.0, 35.0));
        assert!(!b.contains(61.0, 40.0));
        assert_eq!(b.center(), (50.0, 40.0));
    }
}
