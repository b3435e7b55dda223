//! Static board rendering: wood, frets, inlays, strings, tuning legend.

use crate::geometry::{fret_x, marker_frets, string_y, BoardConfig, FretAnchor};
use crate::pitch::{PitchClass, Tuning};
use super::constants::*;
use super::svg_builder::SvgBuilder;

pub(super) fn render_board(svg: &mut SvgBuilder, config: &BoardConfig) {
    svg.rect(config.left, config.top, config.width, config.height, BOARD_COLOR, BOARD_STROKE, 1.0);

    for fret in 1..=config.fret_count {
        let x = fret_x(fret, config, FretAnchor::Line);
        svg.line(x, config.top, x, config.bottom(), FRET_COLOR, FRET_LINE_WIDTH);
        svg.text(
            fret_x(fret, config, FretAnchor::Marker),
            config.bottom() + FRET_NUMBER_OFFSET_Y,
            &fret.to_string(),
            14.0,
            "normal",
            TEXT_COLOR,
            "middle",
        );
    }

    let center_y = config.top + config.height / 2.0;
    for marker in marker_frets(config.fret_count) {
        let x = fret_x(marker.fret, config, FretAnchor::Marker);
        if marker.double {
            svg.circle(x, center_y - DOUBLE_INLAY_OFFSET, INLAY_RADIUS, INLAY_COLOR);
            svg.circle(x, center_y + DOUBLE_INLAY_OFFSET, INLAY_RADIUS, INLAY_COLOR);
        } else {
            svg.circle(x, center_y, INLAY_RADIUS, INLAY_COLOR);
        }
    }
}

/// String lines and open-note labels. String 0 (lowest) is on top and
/// drawn thickest.
pub(super) fn render_strings(svg: &mut SvgBuilder, tuning: &Tuning, config: &BoardConfig) {
    let count = tuning.string_count();
    for string_index in 0..count {
        let y = string_y(string_index, config);
        let width = STRING_BASE_WIDTH + (count - string_index) as f64 * STRING_WIDTH_STEP;
        svg.line(config.left, y, config.right(), y, STRING_COLOR, width);

        if let Ok(open) = tuning.open_note(string_index) {
            svg.text(
                config.left - OPEN_LABEL_OFFSET_X,
                y + 5.0,
                &open.to_string(),
                14.0,
                "bold",
                TEXT_COLOR,
                "middle",
            );
        }
    }
}

pub(super) fn render_legend(svg: &mut SvgBuilder, tuning: &Tuning, config: &BoardConfig) {
    let x = config.left;
    let y = config.top - LEGEND_OFFSET_Y;
    for (i, line) in legend_lines(tuning).iter().enumerate() {
        let weight = if i == 0 { "bold" } else { "normal" };
        svg.text(x, y + i as f64 * LEGEND_LINE_HEIGHT, line, 14.0, weight, TEXT_COLOR, "start");
    }
}

/// Describe a tuning: its open notes, the most common step between strings,
/// and every pair that deviates from it. Strings are numbered the way
/// guitarists count them, 1 = highest.
pub(super) fn legend_lines(tuning: &Tuning) -> Vec<String> {
    let names: Vec<&str> = tuning
        .offsets()
        .iter()
        .map(|&o| PitchClass::from_semitone(o as i32).name())
        .collect();
    let mut lines = vec![format!("Guitar String Tuning: {}", names.join(" "))];

    let steps = tuning.steps();
    let Some(common) = most_common(&steps) else {
        return lines;
    };
    lines.push(format!(
        "{} between all strings ({} half steps)",
        step_name(common),
        common
    ));

    let count = tuning.string_count();
    for (i, &step) in steps.iter().enumerate().filter(|&(_, &s)| s != common) {
        lines.push(format!(
            "except {} between strings {}-{} ({} half steps)",
            step_name(step),
            count - i,
            count - i - 1,
            step
        ));
    }
    lines
}

fn most_common(steps: &[u8]) -> Option<u8> {
    let mut counts = [0usize; 12];
    for &s in steps {
        counts[s as usize % 12] += 1;
    }
    // Ties go to the step seen first.
    steps.iter().copied().max_by(|a, b| {
        counts[*a as usize]
            .cmp(&counts[*b as usize])
            .then_with(|| first_seen(steps, *b).cmp(&first_seen(steps, *a)))
    })
}

fn first_seen(steps: &[u8], step: u8) -> usize {
    steps.iter().position(|&s| s == step).unwrap_or(usize::MAX)
}

fn step_name(step: u8) -> String {
    match step {
        0 => "Unison".into(),
        1 => "Minor 2nd".into(),
        2 => "Major 2nd".into(),
        3 => "Minor 3rd".into(),
        4 => "Major 3rd".into(),
        5 => "Perfect 4th".into(),
        6 => "Tritone".into(),
        7 => "Perfect 5th".into(),
        n => format!("{n} semitones"),
    }
}
