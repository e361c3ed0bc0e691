//! Inactivity screensaver overlay.
//!
//! A one-shot idle timer arms on mount and re-arms on every qualifying
//! input event. When it fires the particle field takes over the screen;
//! the next qualifying event dismisses it and re-arms the timer.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::particle_field::ParticleFieldCanvas;
use super::schedule_timeout;
use crate::config::PortalConfig;

/// Input events that count as user activity. Registered in the capture
/// phase so overlays and widgets cannot swallow them.
const ACTIVITY_EVENTS: [&str; 6] = [
	"mousedown",
	"mousemove",
	"keydown",
	"scroll",
	"touchstart",
	"click",
];

/// (Re)arm the idle timer, replacing any pending one.
fn arm_idle_timer(
	window: &Window,
	timer: &Rc<RefCell<Option<i32>>>,
	ms: i32,
	active: RwSignal<bool>,
) {
	if let Some(id) = timer.borrow_mut().take() {
		window.clear_timeout_with_handle(id);
	}
	let slot = timer.clone();
	let id = schedule_timeout(window, ms, move || {
		*slot.borrow_mut() = None;
		info!("portal-splash: idle timeout reached, showing screensaver");
		active.set(true);
	});
	*timer.borrow_mut() = id;
}

/// Fullscreen screensaver overlay for authenticated portal sessions.
#[component]
pub fn ScreenSaver(
	#[prop(default = PortalConfig::default())] config: PortalConfig,
) -> impl IntoView {
	let active = RwSignal::new(false);
	let timer: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
	let activity_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let field_config = config.field.clone();
	let theme = config.field_theme();
	let idle_ms = config.idle_timeout_ms as i32;

	Effect::new(move |registered: Option<bool>| {
		if registered.unwrap_or(false) {
			return true;
		}
		let Some(window) = web_sys::window() else {
			return false;
		};
		let Some(document) = window.document() else {
			return false;
		};

		let (timer_ev, win_ev) = (timer.clone(), window.clone());
		*activity_cb.borrow_mut() = Some(Closure::new(move || {
			if active.get_untracked() {
				active.set(false);
			}
			arm_idle_timer(&win_ev, &timer_ev, idle_ms, active);
		}));
		if let Some(ref cb) = *activity_cb.borrow() {
			let handler: &js_sys::Function = cb.as_ref().unchecked_ref();
			for event in ACTIVITY_EVENTS {
				let _ = document.add_event_listener_with_callback_and_bool(event, handler, true);
			}
		}

		arm_idle_timer(&window, &timer, idle_ms, active);
		true
	});

	view! {
		<div class="screensaver" class:hidden=move || !active.get()>
			<ParticleFieldCanvas active=active config=field_config theme=theme />
		</div>
	}
}
