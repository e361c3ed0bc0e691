//! Overlay components and the shared animation engine.

pub mod particle_field;
pub mod screensaver;
pub mod splash;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// Schedule a one-shot callback `ms` milliseconds from now.
///
/// Returns the timer handle for `clearTimeout`, or `None` when scheduling
/// fails. The closure hands itself to the JS garbage collector after firing.
pub(crate) fn schedule_timeout(
	window: &Window,
	ms: i32,
	f: impl FnOnce() + 'static,
) -> Option<i32> {
	let cb = Closure::once_into_js(f);
	let handler: &js_sys::Function = cb.unchecked_ref();
	window
		.set_timeout_with_callback_and_timeout_and_arguments_0(handler, ms)
		.ok()
}
