//! Fretboard geometry — maps (string, fret) to SVG coordinates.
//!
//! Frets are evenly spaced (a diagram, not a scale-length layout):
//!   `x = left + fret * (width / fret_count)`
//!   `y = top + string * (height / (string_count - 1))`

use serde::{Deserialize, Serialize};

use crate::error::{FretError, FretResult};
use crate::pitch::{MAX_FRET, STANDARD_STRING_COUNT};

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;
pub const DEFAULT_BOARD_LEFT: f64 = 100.0;
pub const DEFAULT_BOARD_TOP: f64 = 100.0;
pub const DEFAULT_BOARD_WIDTH: f64 = 600.0;
pub const DEFAULT_BOARD_HEIGHT: f64 = 200.0;

/// Marker frets within one octave of the neck; the pattern repeats every 12.
const OCTAVE_MARKERS: [u8; 5] = [3, 5, 7, 9, 12];

/// Board layout in SVG user units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub string_count: usize,
    pub fret_count: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            left: DEFAULT_BOARD_LEFT,
            top: DEFAULT_BOARD_TOP,
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            string_count: STANDARD_STRING_COUNT,
            fret_count: MAX_FRET,
        }
    }
}

impl BoardConfig {
    /// Read layout overrides from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> FretResult<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Scale the canvas and board horizontally to a target width, keeping
    /// the default margins' proportions. Heights are unchanged.
    pub fn with_canvas_width(mut self, canvas_width: f64) -> Self {
        if canvas_width > 0.0 && self.canvas_width > 0.0 {
            let k = canvas_width / self.canvas_width;
            self.left *= k;
            self.width *= k;
            self.canvas_width = canvas_width;
        }
        self
    }

    pub fn validate(&self) -> FretResult<()> {
        if self.string_count < 2 {
            return Err(FretError::InvalidConfig(format!(
                "need at least 2 strings, got {}",
                self.string_count
            )));
        }
        if self.fret_count == 0 || self.fret_count > MAX_FRET {
            return Err(FretError::InvalidConfig(format!(
                "fret count {} outside 1..={}",
                self.fret_count, MAX_FRET
            )));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(FretError::InvalidConfig(format!(
                "canvas must have positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(FretError::InvalidConfig(format!(
                "board must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Distance between adjacent fret lines.
    pub fn fret_spacing(&self) -> f64 {
        self.width / self.fret_count as f64
    }

    /// Distance between adjacent strings.
    pub fn string_spacing(&self) -> f64 {
        self.height / (self.string_count as f64 - 1.0)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Where on a fret an x coordinate is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FretAnchor {
    /// On the fret wire itself (fret 0 is the nut).
    Line,
    /// Midway between this fret's wire and the previous one, where a finger
    /// (and a note marker) sits.
    Marker,
}

pub fn fret_x(fret: u8, config: &BoardConfig, anchor: FretAnchor) -> f64 {
    let offset = match anchor {
        FretAnchor::Line => 0.0,
        FretAnchor::Marker => 0.5,
    };
    config.left + (fret as f64 - offset) * config.fret_spacing()
}

pub fn string_y(string_index: usize, config: &BoardConfig) -> f64 {
    config.top + string_index as f64 * config.string_spacing()
}

/// An inlay position on the neck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretMarker {
    pub fret: u8,
    /// Octave frets get two dots.
    pub double: bool,
}

/// Inlay frets in `[1, fret_count]`, ascending.
pub fn marker_frets(fret_count: u8) -> Vec<FretMarker> {
    (1..=fret_count)
        .filter_map(|fret| {
            let in_octave = (fret - 1) % 12 + 1;
            OCTAVE_MARKERS.contains(&in_octave).then_some(FretMarker {
                fret,
                double: fret % 12 == 0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_repeat_each_octave() {
        let frets: Vec<u8> = marker_frets(24).iter().map(|m| m.fret).collect();
        assert_eq!(frets, vec![3, 5, 7, 9, 12, 15, 17, 19, 21, 24]);
        let doubles: Vec<u8> = marker_frets(24)
            .iter()
            .filter(|m| m.double)
            .map(|m| m.fret)
            .collect();
        assert_eq!(doubles, vec![12, 24]);
    }

    #[test]
    fn short_necks_clip_markers() {
        let frets: Vec<u8> = marker_frets(6).iter().map(|m| m.fret).collect();
        assert_eq!(frets, vec![3, 5]);
        assert!(marker_frets(0).is_empty());
    }

    #[test]
    fn config_json_fills_defaults() {
        let config = BoardConfig::from_json(r#"{"fret_count": 5}"#).unwrap();
        assert_eq!(config.fret_count, 5);
        assert_eq!(config.left, DEFAULT_BOARD_LEFT);
        assert_eq!(config.string_count, 6);
    }

    #[test]
    fn config_rejects_degenerate_boards() {
        let one_string = BoardConfig {
            string_count: 1,
            ..Default::default()
        };
        assert!(one_string.validate().is_err());
        assert!(BoardConfig::from_json(r#"{"fret_count": 13}"#).is_err());
        assert!(BoardConfig::from_json(r#"{"width": 0}"#).is_err());
        assert!(matches!(
            BoardConfig::from_json(r#"{"canvas_width": 0}"#),
            Err(FretError::InvalidConfig(_))
        ));
        assert!(BoardConfig::from_json(r#"{"canvas_height": -1}"#).is_err());
    }

    #[test]
    fn rescaling_a_zero_width_canvas_is_a_no_op() {
        let zero = BoardConfig {
            canvas_width: 0.0,
            ..Default::default()
        };
        let scaled = zero.clone().with_canvas_width(400.0);
        assert_eq!(scaled, zero);
        assert!(scaled.left.is_finite());
    }
}
