//! One-shot login splash overlay.
//!
//! Shown the first time the portal is opened in a browser session, then
//! never again until the session ends: a sessionStorage flag gates repeat
//! visits. The splash runs the particle field for a fixed duration, fades
//! out, and stops the animation once hidden.

use leptos::prelude::*;
use log::info;

use super::particle_field::ParticleFieldCanvas;
use super::schedule_timeout;
use crate::config::PortalConfig;

/// Session-storage key marking that the splash already ran this session.
const SPLASH_SHOWN_KEY: &str = "portal_splash_shown";

fn splash_already_shown() -> bool {
	web_sys::window()
		.and_then(|w| w.session_storage().ok().flatten())
		.and_then(|s| s.get_item(SPLASH_SHOWN_KEY).ok().flatten())
		.is_some()
}

fn mark_splash_shown() {
	if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
		let _ = storage.set_item(SPLASH_SHOWN_KEY, "true");
	}
}

/// Fullscreen splash overlay shown once per browser session.
///
/// Visibility is driven by the `hidden` and `fade-out` classes; the host
/// page's stylesheet owns the actual transitions.
#[component]
pub fn LoginSplash(
	#[prop(default = PortalConfig::default())] config: PortalConfig,
) -> impl IntoView {
	let active = RwSignal::new(false);
	let fading = RwSignal::new(false);

	let field_config = config.field.clone();
	let theme = config.field_theme();
	let splash_ms = config.splash_duration_ms as i32;
	let fade_ms = config.fade_out_ms as i32;

	Effect::new(move |started: Option<bool>| {
		if started.unwrap_or(false) || splash_already_shown() {
			return true;
		}
		let Some(window) = web_sys::window() else {
			return false;
		};

		info!("portal-splash: showing login splash for {splash_ms}ms");
		active.set(true);

		let inner = window.clone();
		let _ = schedule_timeout(&window, splash_ms, move || {
			fading.set(true);
			let _ = schedule_timeout(&inner, fade_ms, move || {
				active.set(false);
				mark_splash_shown();
			});
		});
		true
	});

	view! {
		<div
			class="login-splash"
			class:hidden=move || !active.get()
			class=("fade-out", move || fading.get())
		>
			<ParticleFieldCanvas active=active config=field_config theme=theme />
			<div class="splash-overlay">
				<h1>"Alcaldía Virtual"</h1>
				<p class="subtitle">"Portal de servicios al ciudadano"</p>
			</div>
		</div>
	}
}
