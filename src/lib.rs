//! fretlib — guitar fretboard pitch mapping and SVG rendering for Forge
//! model instances.
//!
//! The core is pure arithmetic: [`note_at`] maps a tuning and a
//! (string, fret) pair to a note, and [`geometry`] maps the same pair to SVG
//! coordinates. Around it, [`instance`] and [`adapter`] turn model-finder
//! output into a [`Fretboard`], and [`renderer`] draws it.
//!
//! # Example
//! ```
//! use fretlib::{build_standard_tuning, note_at};
//!
//! let tuning = build_standard_tuning();
//! assert_eq!(note_at(&tuning, 0, 0).unwrap().to_string(), "E2");
//! assert_eq!(note_at(&tuning, 5, 0).unwrap().to_string(), "E4");
//! ```

pub mod adapter;
pub mod error;
pub mod geometry;
pub mod instance;
pub mod model;
pub mod pitch;
pub mod playback;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use adapter::{fretboard_from_instance, AdapterOptions, StringOrder};
pub use error::{FretError, FretResult};
pub use geometry::{fret_x, marker_frets, string_y, BoardConfig, FretAnchor, FretMarker};
pub use instance::Instance;
pub use model::{FretPosition, Fretboard, IntervalMark};
pub use pitch::{build_standard_tuning, interval_kind, note_at, IntervalKind, Note, PitchClass, Tuning};
pub use playback::{dispatch, dispatch_by_id, NoteSink, NoteValue};
pub use renderer::{render_fretboard, render_fretboard_to_svg, Hotspot, HotspotAction, Rendering};

/// Parse instance XML into a fretboard with default adapter options.
pub fn parse_instance(xml: &str) -> FretResult<Fretboard> {
    let instance = Instance::parse(xml)?;
    fretboard_from_instance(&instance, &AdapterOptions::default())
}

/// Parse instance XML and render it, hotspots included.
pub fn render_instance(xml: &str, config: &BoardConfig) -> FretResult<Rendering> {
    let board = parse_instance(xml)?;
    render_fretboard(&board, config)
}

/// Parse instance XML and render it directly to SVG.
///
/// `canvas_width` rescales the default layout horizontally. Pass `None` to
/// use the default (800).
pub fn render_instance_to_svg(xml: &str, canvas_width: Option<f64>) -> FretResult<String> {
    let config = match canvas_width {
        Some(w) if w > 0.0 => BoardConfig::default().with_canvas_width(w),
        _ => BoardConfig::default(),
    };
    render_instance(xml, &config).map(|r| r.svg)
}

/// Convert a fretboard to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn fretboard_to_json(board: &Fretboard) -> FretResult<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

/// Read a fretboard back from JSON produced by [`fretboard_to_json`].
///
/// Positions are range-checked against the tuning and interval steps are
/// recomputed, so the result renders like an adapted board.
pub fn fretboard_from_json(json: &str) -> FretResult<Fretboard> {
    let board: Fretboard = serde_json::from_str(json)?;
    board.revalidated()
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render Forge instance XML and return SVG as a C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// `canvas_width` sets the SVG width in user units. Pass 0.0 to use the default.
///
/// # Safety
/// `xml` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_instance(
    xml: *const c_char,
    canvas_width: f64,
) -> *mut c_char {
    if xml.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(xml) };
    let xml_str = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let cw = if canvas_width > 0.0 { Some(canvas_width) } else { None };

    match render_instance_to_svg(xml_str, cw) {
        Ok(svg) => into_c_string(svg),
        Err(e) => {
            log::error!("fretlib_render_instance failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Hand a string to C, or null if it holds an interior NUL.
fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(e) => {
            log::error!("output has a NUL byte at {}", e.nul_position());
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
