//! portal-splash: particle-field splash and screensaver overlays for the
//! municipal citizen portal.
//!
//! This crate provides a WASM bundle that mounts two fullscreen overlays
//! driven by one shared particle-field animation engine: a login splash
//! shown once per browser session, and a screensaver that takes over after
//! a period of inactivity and dismisses on any input.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Pulled in for its "js" feature so `rand` can seed on the wasm target.
use getrandom as _;

pub mod components;
pub mod config;

pub use components::particle_field::{
	Connection, FieldConfig, FieldTheme, Particle, ParticleClass, ParticleField,
	ParticleFieldCanvas,
};
pub use components::screensaver::ScreenSaver;
pub use components::splash::LoginSplash;
pub use config::{PortalConfig, load_portal_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portal-splash: logging initialized");
}

/// Main application component.
/// Loads portal configuration from the DOM and mounts both overlays.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_portal_config();
	info!(
		"portal-splash: {} particles, theme {:?}, screensaver {}",
		config.field.particle_count,
		config.theme,
		if config.screensaver { "on" } else { "off" }
	);

	let splash_config = config.clone();
	let screensaver = config.screensaver.then(|| {
		let config = config.clone();
		view! { <ScreenSaver config=config /> }
	});

	view! {
		<Html attr:lang="es" attr:dir="ltr" />
		<Title text="Alcaldía Virtual" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<LoginSplash config=splash_config />
		{screensaver}
	}
}
