//! Visual theming for the particle field.
//!
//! Provides the color type plus per-class fill colors and edge-color rules.

use super::particle::ParticleClass;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Stroke rule for connection lines between a class pair.
#[derive(Clone, Copy, Debug)]
pub struct EdgeRule {
	/// Base stroke color; alpha is set per edge from the pair distance.
	pub color: Color,
	/// Multiplier applied to the distance-derived opacity.
	pub opacity_scale: f64,
}

/// Complete visual theme for the field.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	pub name: &'static str,
	/// Fill/glow color for [`ParticleClass::Primary`] particles.
	pub primary: Color,
	/// Fill/glow color for [`ParticleClass::Secondary`] particles.
	pub secondary: Color,
	/// Edge rule when both endpoints are primary.
	pub primary_edge: EdgeRule,
	/// Edge rule when at least one endpoint is secondary.
	pub secondary_edge: EdgeRule,
	/// Shadow blur radius for the particle glow, in pixels.
	pub glow_blur: f64,
}

impl FieldTheme {
	/// Portal house style: gold accents over neon green (default).
	pub fn civic() -> Self {
		Self {
			name: "civic",
			primary: Color::rgba(255, 215, 0, 0.8),
			secondary: Color::rgba(57, 255, 20, 0.8),
			primary_edge: EdgeRule {
				color: Color::rgb(255, 215, 0),
				opacity_scale: 0.4,
			},
			secondary_edge: EdgeRule {
				color: Color::rgb(57, 255, 20),
				opacity_scale: 0.3,
			},
			glow_blur: 10.0,
		}
	}

	/// Cooler alternative: pale gold over steel blue.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			primary: Color::rgba(230, 200, 110, 0.8),
			secondary: Color::rgba(94, 129, 172, 0.8),
			primary_edge: EdgeRule {
				color: Color::rgb(230, 200, 110),
				opacity_scale: 0.4,
			},
			secondary_edge: EdgeRule {
				color: Color::rgb(94, 129, 172),
				opacity_scale: 0.3,
			},
			glow_blur: 12.0,
		}
	}

	/// Look up a theme by its config name. Unknown names return `None` so
	/// the caller can log and fall back to the default.
	pub fn named(name: &str) -> Option<Self> {
		match name {
			"civic" => Some(Self::civic()),
			"midnight" => Some(Self::midnight()),
			_ => None,
		}
	}

	/// Fill/glow color for a particle class.
	pub fn class_color(&self, class: ParticleClass) -> Color {
		match class {
			ParticleClass::Primary => self.primary,
			ParticleClass::Secondary => self.secondary,
		}
	}

	/// Edge rule for a pair of endpoint classes. The pair is unordered:
	/// both-primary gets the primary rule, any secondary endpoint demotes
	/// the edge to the secondary rule.
	pub fn edge_rule(&self, a: ParticleClass, b: ParticleClass) -> EdgeRule {
		if a == ParticleClass::Primary && b == ParticleClass::Primary {
			self.primary_edge
		} else {
			self.secondary_edge
		}
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::civic()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::ParticleClass::{Primary, Secondary};

	#[test]
	fn edge_rule_is_symmetric_in_endpoint_order() {
		let theme = FieldTheme::civic();
		for (a, b) in [
			(Primary, Primary),
			(Primary, Secondary),
			(Secondary, Primary),
			(Secondary, Secondary),
		] {
			let fwd = theme.edge_rule(a, b);
			let rev = theme.edge_rule(b, a);
			assert_eq!(fwd.color, rev.color);
			assert_eq!(fwd.opacity_scale, rev.opacity_scale);
		}
	}

	#[test]
	fn single_secondary_endpoint_demotes_the_edge() {
		let theme = FieldTheme::civic();
		assert_eq!(theme.edge_rule(Primary, Primary).opacity_scale, 0.4);
		assert_eq!(theme.edge_rule(Primary, Secondary).opacity_scale, 0.3);
		assert_eq!(theme.edge_rule(Secondary, Secondary).opacity_scale, 0.3);
	}

	#[test]
	fn css_output_uses_rgba_only_when_translucent() {
		assert_eq!(Color::rgb(255, 215, 0).to_css(), "#ffd700");
		assert_eq!(
			Color::rgba(57, 255, 20, 0.3).to_css(),
			"rgba(57, 255, 20, 0.3)"
		);
	}

	#[test]
	fn theme_lookup_by_name() {
		assert_eq!(FieldTheme::named("civic").unwrap().name, "civic");
		assert_eq!(FieldTheme::named("midnight").unwrap().name, "midnight");
		assert!(FieldTheme::named("neon").is_none());
	}
}
