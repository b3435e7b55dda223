//! Geometry tests — fret/string coordinates and inlay positions.

use fretlib::geometry::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_LEFT, DEFAULT_BOARD_TOP, DEFAULT_BOARD_WIDTH};
use fretlib::{fret_x, marker_frets, string_y, BoardConfig, FretAnchor, FretMarker};
use pretty_assertions::assert_eq;

#[test]
fn fret_lines_span_the_board() {
    let config = BoardConfig::default();
    assert_eq!(fret_x(0, &config, FretAnchor::Line), DEFAULT_BOARD_LEFT);
    assert_eq!(
        fret_x(12, &config, FretAnchor::Line),
        DEFAULT_BOARD_LEFT + DEFAULT_BOARD_WIDTH
    );
    assert_eq!(fret_x(1, &config, FretAnchor::Line), 150.0);
}

#[test]
fn markers_sit_between_fret_lines() {
    let config = BoardConfig::default();
    for fret in 1..=12u8 {
        let left = fret_x(fret - 1, &config, FretAnchor::Line);
        let right = fret_x(fret, &config, FretAnchor::Line);
        assert_eq!(fret_x(fret, &config, FretAnchor::Marker), (left + right) / 2.0);
    }
    // Open string: half a fret left of the nut.
    assert_eq!(fret_x(0, &config, FretAnchor::Marker), 75.0);
}

#[test]
fn strings_span_top_to_bottom() {
    let config = BoardConfig::default();
    assert_eq!(string_y(0, &config), DEFAULT_BOARD_TOP);
    assert_eq!(string_y(5, &config), DEFAULT_BOARD_TOP + DEFAULT_BOARD_HEIGHT);
    assert_eq!(string_y(1, &config), 140.0);
}

#[test]
fn custom_layout_scales_linearly() {
    let config = BoardConfig {
        left: 10.0,
        top: 20.0,
        width: 240.0,
        height: 90.0,
        string_count: 4,
        fret_count: 6,
        ..Default::default()
    };
    config.validate().unwrap();
    assert_eq!(fret_x(6, &config, FretAnchor::Line), 250.0);
    assert_eq!(fret_x(3, &config, FretAnchor::Marker), 110.0);
    assert_eq!(string_y(3, &config), 110.0);
}

#[test]
fn twelve_fret_markers() {
    assert_eq!(
        marker_frets(12),
        vec![
            FretMarker { fret: 3, double: false },
            FretMarker { fret: 5, double: false },
            FretMarker { fret: 7, double: false },
            FretMarker { fret: 9, double: false },
            FretMarker { fret: 12, double: true },
        ]
    );
}

#[test]
fn canvas_width_rescales_board() {
    let config = BoardConfig::default().with_canvas_width(400.0);
    assert_eq!(config.canvas_width, 400.0);
    assert_eq!(config.left, 50.0);
    assert_eq!(config.width, 300.0);
    assert_eq!(config.height, DEFAULT_BOARD_HEIGHT);

    let unchanged = BoardConfig::default().with_canvas_width(0.0);
    assert_eq!(unchanged, BoardConfig::default());
}
