//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::render_instance_to_svg;

/// Render Forge instance XML to SVG.
///
/// Called from Kotlin as:
///   external fun renderInstance(xml: String, canvasWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_FretLib_renderInstance(
    mut env: JNIEnv,
    _class: JClass,
    xml: JString,
    canvas_width: jfloat,
) -> jstring {
    let xml_str: String = match env.get_string(&xml) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let cw = if canvas_width > 0.0 { Some(canvas_width as f64) } else { None };

    match render_instance_to_svg(&xml_str, cw) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::error!("renderInstance failed: {e}");
            std::ptr::null_mut()
        }
    }
}
