//! Note markers, open-string hotspots, interval overlay and the play button.

use crate::error::FretResult;
use crate::geometry::{fret_x, string_y, BoardConfig, FretAnchor};
use crate::model::{FretPosition, Fretboard};
use crate::pitch::{note_at, IntervalKind, Note};
use crate::playback::NoteValue;
use super::constants::*;
use super::svg_builder::{Interactive, Paint, SvgBuilder};
use super::{Bounds, Hotspot, HotspotAction};

/// Element id of the hotspot at a position.
pub fn hotspot_id(position: FretPosition) -> String {
    format!("fret-s{}-f{}", position.string_index, position.fret)
}

pub const PLAY_BUTTON_ID: &str = "play-notes";

/// One marker per fret of every string plus an open-string region left of
/// the nut. Returns the hotspots in drawing order.
pub(super) fn render_note_markers(
    svg: &mut SvgBuilder,
    board: &Fretboard,
    config: &BoardConfig,
) -> FretResult<Vec<Hotspot>> {
    let mut hotspots = Vec::new();

    for string_index in 0..board.string_count() {
        let y = string_y(string_index, config);
        for fret in 0..=config.fret_count {
            let position = FretPosition::new(string_index, fret);
            let note = note_at(&board.tuning, string_index, fret)?;
            let played = board.is_played(position);
            let id = hotspot_id(position);
            let data = [("note", note.to_string())];
            let suffix = if played { " (Played in model)" } else { "" };

            let bounds = if fret == 0 {
                let title = format!("Open string: {note}{suffix}");
                let bounds = Bounds {
                    x: config.left - OPEN_HOTSPOT_WIDTH,
                    y: y - OPEN_HOTSPOT_HEIGHT / 2.0,
                    width: OPEN_HOTSPOT_WIDTH,
                    height: OPEN_HOTSPOT_HEIGHT,
                };
                let fill = if played { PLAYED_OPEN_FILL } else { "transparent" };
                svg.rounded_rect(
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    0.0,
                    &Paint { fill, stroke: "none", stroke_width: 0.0, opacity: 1.0 },
                    Some(&Interactive { id: &id, data: &data, title: &title }),
                );
                bounds
            } else {
                let title = format!("Note: {note}{suffix}");
                let cx = fret_x(fret, config, FretAnchor::Marker);
                let paint = if played {
                    Paint { fill: PLAYED_COLOR, stroke: NOTE_STROKE, stroke_width: 2.0, opacity: 1.0 }
                } else {
                    Paint { fill: UNPLAYED_COLOR, stroke: NOTE_STROKE, stroke_width: 1.0, opacity: 0.7 }
                };
                svg.painted_circle(
                    cx,
                    y,
                    NOTE_RADIUS,
                    &paint,
                    Some(&Interactive { id: &id, data: &data, title: &title }),
                );
                Bounds::around(cx, y, NOTE_RADIUS)
            };

            hotspots.push(Hotspot {
                id,
                bounds,
                position: Some(position),
                action: HotspotAction::PlayNote {
                    note,
                    value: NoteValue::Eighth,
                },
            });
        }
    }

    Ok(hotspots)
}

/// Rings around interval-tagged frets, colored by the step from the
/// previous mark, with the step's H/W label between the two.
pub(super) fn render_intervals(svg: &mut SvgBuilder, board: &Fretboard, config: &BoardConfig) {
    for (i, mark) in board.intervals.iter().enumerate() {
        let y = string_y(mark.position.string_index, config);
        let x = marker_x(mark.position.fret, config);
        let color = match mark.kind() {
            None => ROOT_INTERVAL_COLOR,
            Some(IntervalKind::HalfStep) => HALF_STEP_COLOR,
            Some(IntervalKind::WholeStep) => WHOLE_STEP_COLOR,
            Some(IntervalKind::Other) => OTHER_STEP_COLOR,
        };
        svg.painted_circle(
            x,
            y,
            INTERVAL_RING_RADIUS,
            &Paint { fill: "none", stroke: color, stroke_width: 3.0, opacity: 1.0 },
            None,
        );

        let Some(kind) = mark.kind() else { continue };
        let label = kind.label();
        if label.is_empty() {
            continue;
        }
        let Some(prev) = i.checked_sub(1).and_then(|j| board.intervals.get(j)) else {
            continue;
        };
        let prev_x = marker_x(prev.position.fret, config);
        svg.text(
            (prev_x + x) / 2.0,
            y - INTERVAL_LABEL_OFFSET_Y,
            label,
            12.0,
            "bold",
            color,
            "middle",
        );
    }
}

/// Marker x for any fret; open strings sit on the hotspot left of the nut.
fn marker_x(fret: u8, config: &BoardConfig) -> f64 {
    if fret == 0 {
        config.left - OPEN_HOTSPOT_WIDTH / 2.0
    } else {
        fret_x(fret, config, FretAnchor::Marker)
    }
}

/// The "Play Notes" button and caption, when anything is played.
pub(super) fn render_play_button(
    svg: &mut SvgBuilder,
    notes: &[Note],
    config: &BoardConfig,
) -> Option<Hotspot> {
    if notes.is_empty() {
        return None;
    }

    let names: Vec<String> = notes.iter().map(Note::to_string).collect();
    let bounds = Bounds {
        x: config.right() - BUTTON_WIDTH,
        y: config.bottom() + BUTTON_OFFSET_Y,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    };
    let data = [("notes", names.join(" "))];
    svg.rounded_rect(
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        BUTTON_RADIUS,
        &Paint { fill: PLAYED_COLOR, stroke: NOTE_STROKE, stroke_width: 1.0, opacity: 1.0 },
        Some(&Interactive { id: PLAY_BUTTON_ID, data: &data, title: "Play all highlighted notes" }),
    );
    svg.text(
        bounds.x + BUTTON_WIDTH / 2.0,
        bounds.y + 20.0,
        "Play Notes",
        14.0,
        "bold",
        "white",
        "middle",
    );
    svg.text(
        config.left,
        config.bottom() + CAPTION_OFFSET_Y,
        &format!("Highlighted notes from model: {}", names.join(", ")),
        14.0,
        "bold",
        PLAYED_COLOR,
        "start",
    );

    Some(Hotspot {
        id: PLAY_BUTTON_ID.to_string(),
        bounds,
        position: None,
        action: HotspotAction::PlayChord {
            notes: notes.to_vec(),
            value: NoteValue::Quarter,
        },
    })
}
