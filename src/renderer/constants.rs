//! Shared constants for the fretboard renderer (all in SVG user units).

// ── Header ──────────────────────────────────────────────────────────
pub(super) const TITLE: &str = "Guitar Fretboard Visualization";
pub(super) const TITLE_Y: f64 = 50.0;
pub(super) const TITLE_SIZE: f64 = 24.0;
pub(super) const LEGEND_OFFSET_Y: f64 = 80.0; // legend sits this far above the board
pub(super) const LEGEND_LINE_HEIGHT: f64 = 20.0;
pub(super) const INSTRUCTIONS: &str = "Click on any fret or open string to play the note";

// ── Board ───────────────────────────────────────────────────────────
pub(super) const FRET_LINE_WIDTH: f64 = 2.0;
pub(super) const FRET_NUMBER_OFFSET_Y: f64 = 30.0; // below the board
pub(super) const INLAY_RADIUS: f64 = 8.0;
pub(super) const DOUBLE_INLAY_OFFSET: f64 = 30.0; // from board center, each dot
pub(super) const STRING_BASE_WIDTH: f64 = 2.0;
pub(super) const STRING_WIDTH_STEP: f64 = 0.4; // extra width per string, thickest on top
pub(super) const OPEN_LABEL_OFFSET_X: f64 = 20.0; // left of the board

// ── Notes ───────────────────────────────────────────────────────────
pub(super) const NOTE_RADIUS: f64 = 10.0;
pub(super) const OPEN_HOTSPOT_WIDTH: f64 = 40.0;
pub(super) const OPEN_HOTSPOT_HEIGHT: f64 = 20.0;
pub(super) const INTERVAL_RING_RADIUS: f64 = 13.0;
pub(super) const INTERVAL_LABEL_OFFSET_Y: f64 = 14.0; // above the string

// ── Play button ─────────────────────────────────────────────────────
pub(super) const BUTTON_WIDTH: f64 = 100.0;
pub(super) const BUTTON_HEIGHT: f64 = 30.0;
pub(super) const BUTTON_RADIUS: f64 = 5.0;
pub(super) const BUTTON_OFFSET_Y: f64 = 50.0; // below the board
pub(super) const INSTRUCTIONS_OFFSET_Y: f64 = 60.0;
pub(super) const CAPTION_OFFSET_Y: f64 = 80.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BOARD_COLOR: &str = "#d5a06e";
pub(super) const BOARD_STROKE: &str = "black";
pub(super) const FRET_COLOR: &str = "#888888";
pub(super) const STRING_COLOR: &str = "#aaaaaa";
pub(super) const INLAY_COLOR: &str = "#cccccc";
pub(super) const TEXT_COLOR: &str = "#1a1a1a";
pub(super) const PLAYED_COLOR: &str = "#e74c3c";
pub(super) const PLAYED_OPEN_FILL: &str = "rgba(231, 76, 60, 0.3)";
pub(super) const UNPLAYED_COLOR: &str = "#2980b9";
pub(super) const NOTE_STROKE: &str = "black";
pub(super) const ROOT_INTERVAL_COLOR: &str = "#8e44ad";
pub(super) const HALF_STEP_COLOR: &str = "#e67e22";
pub(super) const WHOLE_STEP_COLOR: &str = "#27ae60";
pub(super) const OTHER_STEP_COLOR: &str = "#7f8c8d";
