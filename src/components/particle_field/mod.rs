//! Reusable particle-field animation engine.
//!
//! A fixed-size set of drifting points is advanced each frame with
//! reflect-at-edges motion and rendered as glowing dots joined by
//! distance-faded connection lines. The engine is shared by the login
//! splash and the inactivity screensaver; each overlay owns one instance
//! and starts/stops it through [`ParticleFieldCanvas`].
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use portal_splash::{FieldConfig, ParticleFieldCanvas};
//!
//! let active = RwSignal::new(true);
//! view! { <ParticleFieldCanvas active=active config=FieldConfig::default() /> }
//! ```

mod component;
mod field;
mod particle;
mod render;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use field::{Connection, FieldConfig, ParticleField};
pub use particle::{Particle, ParticleClass};
pub use theme::{Color, EdgeRule, FieldTheme};
