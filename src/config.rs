//! Portal-level configuration embedded in the host page.
//!
//! The portal backend renders a `<script id="portal-config"
//! type="application/json">` element into pages that load this bundle.
//! Every field has a default, so an absent or malformed document yields a
//! fully working configuration.

use log::warn;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::particle_field::{FieldConfig, FieldTheme};

/// Options for both overlays plus the shared animation engine.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
	/// How long the login splash stays fully visible, in milliseconds.
	pub splash_duration_ms: u32,
	/// Duration of the splash fade-out transition, in milliseconds.
	pub fade_out_ms: u32,
	/// Inactivity period before the screensaver shows, in milliseconds.
	pub idle_timeout_ms: u32,
	/// Whether the screensaver overlay is mounted at all. The host page
	/// disables it for unauthenticated visitors.
	pub screensaver: bool,
	/// Field theme name, resolved via [`FieldTheme::named`].
	pub theme: String,
	/// Animation engine options shared by both overlays.
	pub field: FieldConfig,
}

impl Default for PortalConfig {
	fn default() -> Self {
		Self {
			splash_duration_ms: 4_000,
			fade_out_ms: 800,
			idle_timeout_ms: 600_000,
			screensaver: true,
			theme: "civic".to_string(),
			field: FieldConfig::default(),
		}
	}
}

impl PortalConfig {
	/// Parse a config document, falling back to defaults on malformed input.
	pub fn from_json(json: &str) -> Self {
		match serde_json::from_str(json) {
			Ok(config) => config,
			Err(e) => {
				warn!("portal-splash: failed to parse portal config: {e}");
				Self::default()
			}
		}
	}

	/// Resolve the configured theme name, falling back to the default theme
	/// when the name is unknown.
	pub fn field_theme(&self) -> FieldTheme {
		FieldTheme::named(&self.theme).unwrap_or_else(|| {
			warn!("portal-splash: unknown theme {:?}, using default", self.theme);
			FieldTheme::default()
		})
	}
}

/// Load configuration from a script element with id="portal-config".
/// Expected format: JSON matching [`PortalConfig`].
pub fn load_portal_config() -> PortalConfig {
	match read_config_text() {
		Some(json) => PortalConfig::from_json(&json),
		None => PortalConfig::default(),
	}
}

fn read_config_text() -> Option<String> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portal-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_yields_defaults() {
		let config = PortalConfig::from_json("{}");
		assert_eq!(config.splash_duration_ms, 4_000);
		assert_eq!(config.fade_out_ms, 800);
		assert_eq!(config.idle_timeout_ms, 600_000);
		assert!(config.screensaver);
		assert_eq!(config.theme, "civic");
		assert_eq!(config.field.particle_count, 100);
		assert_eq!(config.field.connection_distance, 150.0);
	}

	#[test]
	fn partial_document_overrides_only_named_fields() {
		let config = PortalConfig::from_json(
			r#"{
				"idle_timeout_ms": 300000,
				"screensaver": false,
				"field": { "particle_count": 40 }
			}"#,
		);
		assert_eq!(config.idle_timeout_ms, 300_000);
		assert!(!config.screensaver);
		assert_eq!(config.field.particle_count, 40);
		// Untouched fields keep their defaults, including nested ones.
		assert_eq!(config.splash_duration_ms, 4_000);
		assert_eq!(config.field.connection_distance, 150.0);
	}

	#[test]
	fn malformed_document_falls_back_to_defaults() {
		let config = PortalConfig::from_json("not json at all");
		assert_eq!(config.field.particle_count, 100);
	}

	#[test]
	fn unknown_theme_name_resolves_to_default() {
		let config = PortalConfig::from_json(r#"{ "theme": "vaporwave" }"#);
		assert_eq!(config.field_theme().name, "civic");

		let config = PortalConfig::from_json(r#"{ "theme": "midnight" }"#);
		assert_eq!(config.field_theme().name, "midnight");
	}
}
