//! Particle model: a single animated point with position, velocity,
//! radius, and visual class.

use rand::Rng;

/// Probability that a freshly sampled particle is [`ParticleClass::Primary`].
const PRIMARY_PROBABILITY: f64 = 0.4;
/// Velocity components are drawn uniformly from `[-MAX_SPEED, MAX_SPEED]`.
const MAX_SPEED: f64 = 0.25;
/// Radii are drawn uniformly from `[MIN_RADIUS, MAX_RADIUS)`.
const MIN_RADIUS: f64 = 1.0;
const MAX_RADIUS: f64 = 3.0;

/// Visual category assigned to a particle at creation.
///
/// The class is immutable and decides both the fill/glow color and which
/// edge-color rule applies when the particle participates in a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleClass {
	/// Accent particles, roughly 40% of the field.
	Primary,
	/// Base particles, roughly 60% of the field.
	Secondary,
}

/// A single point in the field.
///
/// Velocity magnitude is constant after sampling; only the signs of the
/// components change when the particle reflects off a viewport edge.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Render radius in pixels, fixed at creation.
	pub radius: f64,
	pub class: ParticleClass,
}

impl Particle {
	/// Sample a fresh particle uniformly inside the given viewport.
	///
	/// Dimensions are multiplied into a unit sample, so degenerate (zero or
	/// negative) viewports are accepted and simply collapse the positions.
	pub fn sample<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
		let class = if rng.gen_bool(PRIMARY_PROBABILITY) {
			ParticleClass::Primary
		} else {
			ParticleClass::Secondary
		};
		Self {
			x: rng.gen_range(0.0..1.0) * width,
			y: rng.gen_range(0.0..1.0) * height,
			vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
			vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
			radius: rng.gen_range(MIN_RADIUS..MAX_RADIUS),
			class,
		}
	}

	/// Advance one frame and reflect off the viewport edges.
	///
	/// Reflection is reactive: when a coordinate lands outside `[0, bound]`
	/// the corresponding velocity component is negated but the overshoot
	/// position is kept as computed. The flipped velocity carries the
	/// particle back toward bounds on subsequent frames, so positions stay
	/// within the viewport plus at most one frame's travel.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	/// Euclidean distance to another particle.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Largest distance the particle can travel in one frame.
	pub fn step_magnitude(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn sampled_particles_start_inside_viewport() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..500 {
			let p = Particle::sample(&mut rng, 800.0, 600.0);
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
			assert!((-MAX_SPEED..=MAX_SPEED).contains(&p.vx));
			assert!((-MAX_SPEED..=MAX_SPEED).contains(&p.vy));
			assert!((MIN_RADIUS..MAX_RADIUS).contains(&p.radius));
		}
	}

	#[test]
	fn degenerate_viewport_collapses_positions() {
		let mut rng = StdRng::seed_from_u64(11);
		let p = Particle::sample(&mut rng, 0.0, 0.0);
		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 0.0);
	}

	#[test]
	fn reflection_flips_velocity_and_keeps_overshoot() {
		let mut p = Particle {
			x: 799.9,
			y: 300.0,
			vx: 0.25,
			vy: 0.0,
			radius: 2.0,
			class: ParticleClass::Secondary,
		};
		p.advance(800.0, 600.0);
		// One-frame excursion past the edge is expected, not clamped.
		assert!(p.x > 800.0);
		assert!(p.x <= 800.0 + MAX_SPEED);
		assert_eq!(p.vx, -0.25);

		// The flipped velocity moves it back inside.
		p.advance(800.0, 600.0);
		assert!(p.x <= 800.0);
		assert_eq!(p.vx, -0.25);
	}

	#[test]
	fn reflection_applies_per_axis() {
		let mut p = Particle {
			x: 400.0,
			y: 0.05,
			vx: 0.1,
			vy: -0.2,
			radius: 1.5,
			class: ParticleClass::Primary,
		};
		p.advance(800.0, 600.0);
		assert_eq!(p.vx, 0.1);
		assert_eq!(p.vy, 0.2);
	}

	#[test]
	fn class_split_is_roughly_forty_sixty() {
		let mut rng = StdRng::seed_from_u64(42);
		let primaries = (0..10_000)
			.map(|_| Particle::sample(&mut rng, 100.0, 100.0))
			.filter(|p| p.class == ParticleClass::Primary)
			.count();
		assert!((3_700..=4_300).contains(&primaries), "got {primaries}");
	}
}
