//! Field simulation state: owns the particle set and the viewport bounds.
//!
//! The field is created once per animation start and mutated each frame by
//! the animation loop. Resizing replaces the whole particle set against the
//! new bounds rather than stretching existing particles, trading animation
//! continuity for a uniformly re-randomized field.

use serde::Deserialize;

use super::particle::Particle;

/// Recognized field options. Loaded from the embedded portal config when
/// present, otherwise the portal defaults apply.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles in the field.
	pub particle_count: usize,
	/// Pairs closer than this (in pixels) are joined by a connection line.
	pub connection_distance: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 100,
			connection_distance: 150.0,
		}
	}
}

impl FieldConfig {
	/// Opacity of the connection line for a pair at distance `d`, or `None`
	/// when the pair is too far apart to connect. Opacity falls off linearly
	/// from 1 at distance zero to 0 at the connection distance.
	pub fn connection_opacity(&self, d: f64) -> Option<f64> {
		if d < self.connection_distance {
			Some(1.0 - d / self.connection_distance)
		} else {
			None
		}
	}
}

/// A connection between two particles close enough to join.
pub struct Connection<'a> {
	pub a: &'a Particle,
	pub b: &'a Particle,
	/// Base line opacity before the class-pair multiplier is applied.
	pub opacity: f64,
}

/// The particle field: an ordered collection of exactly
/// `config.particle_count` particles plus the reflecting viewport bounds.
///
/// Particles are never added or removed individually; [`ParticleField::reseed`]
/// replaces the collection wholesale.
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	config: FieldConfig,
}

impl ParticleField {
	/// Create a field populated against the given viewport.
	pub fn new(config: FieldConfig, width: f64, height: f64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width,
			height,
			config,
		};
		field.reseed(width, height);
		field
	}

	/// Discard the current particle set and sample a fresh one against the
	/// given viewport. Degenerate dimensions are accepted; the caller is
	/// responsible for supplying sane ones.
	pub fn reseed(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;

		let mut rng = rand::thread_rng();
		self.particles.clear();
		self.particles.reserve(self.config.particle_count);
		for _ in 0..self.config.particle_count {
			self.particles.push(Particle::sample(&mut rng, width, height));
		}
	}

	/// Advance every particle by one frame.
	///
	/// The update is per-particle and order-independent; no particle's
	/// outcome depends on another's.
	pub fn advance(&mut self) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
		}
	}

	/// Update the viewport bounds and replace the whole particle set.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.reseed(width, height);
	}

	/// All connections between nearby particles this frame.
	///
	/// A brute-force scan over every unordered pair, recomputed from scratch
	/// each frame with no spatial index. At the default 100 particles that
	/// is 4,950 candidate pairs, well within frame budget.
	pub fn connections(&self) -> impl Iterator<Item = Connection<'_>> + '_ {
		self.particles.iter().enumerate().flat_map(move |(i, a)| {
			self.particles[i + 1..].iter().filter_map(move |b| {
				self.config
					.connection_opacity(a.distance_to(b))
					.map(|opacity| Connection { a, b, opacity })
			})
		})
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::particle::ParticleClass;

	fn fixed_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			class: ParticleClass::Secondary,
		}
	}

	#[test]
	fn reseed_produces_exact_count_inside_bounds() {
		let field = ParticleField::new(FieldConfig::default(), 800.0, 600.0);
		assert_eq!(field.particles().len(), 100);
		for p in field.particles() {
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
		}
	}

	#[test]
	fn positions_stay_within_one_step_of_bounds() {
		let mut field = ParticleField::new(FieldConfig::default(), 320.0, 200.0);
		for _ in 0..10_000 {
			field.advance();
		}
		for p in field.particles() {
			let slack = p.step_magnitude();
			assert!(p.x >= -slack && p.x <= 320.0 + slack, "x = {}", p.x);
			assert!(p.y >= -slack && p.y <= 200.0 + slack, "y = {}", p.y);
		}
	}

	#[test]
	fn resize_replaces_the_whole_collection() {
		let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0);
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

		field.resize(400.0, 300.0);

		assert_eq!(field.width(), 400.0);
		assert_eq!(field.height(), 300.0);
		assert_eq!(field.particles().len(), 100);
		let after: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
		assert_ne!(before, after);
		for p in field.particles() {
			assert!((0.0..=400.0).contains(&p.x));
			assert!((0.0..=300.0).contains(&p.y));
		}
	}

	#[test]
	fn connection_opacity_is_monotonic_with_cutoff() {
		let config = FieldConfig::default();
		let near = config.connection_opacity(30.0).unwrap();
		let far = config.connection_opacity(120.0).unwrap();
		assert!(near > far);
		assert!(config.connection_opacity(150.0).is_none());
		assert!(config.connection_opacity(151.0).is_none());
		assert_eq!(config.connection_opacity(0.0), Some(1.0));
	}

	#[test]
	fn connections_cover_each_pair_once_with_no_self_edges() {
		let mut field = ParticleField::new(
			FieldConfig {
				particle_count: 3,
				connection_distance: 150.0,
			},
			800.0,
			600.0,
		);
		// Two particles within range of each other, one far away.
		field.particles = vec![
			fixed_particle(10.0, 10.0),
			fixed_particle(100.0, 10.0),
			fixed_particle(700.0, 500.0),
		];

		let connections: Vec<_> = field.connections().collect();
		assert_eq!(connections.len(), 1);
		let c = &connections[0];
		assert!(!std::ptr::eq(c.a, c.b));
		assert_eq!((c.a.x, c.b.x), (10.0, 100.0));
		// Opacity matches the pair distance regardless of endpoint order.
		assert_eq!(c.opacity, field.config().connection_opacity(90.0).unwrap());
	}

	#[test]
	fn degenerate_viewport_is_accepted() {
		let field = ParticleField::new(FieldConfig::default(), 0.0, -5.0);
		assert_eq!(field.particles().len(), 100);
		for p in field.particles() {
			assert_eq!(p.x, 0.0);
			assert!(p.y <= 0.0);
		}
	}
}
