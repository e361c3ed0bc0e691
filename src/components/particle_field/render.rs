//! Canvas rendering for the particle field.
//!
//! One frame is drawn in two passes over a cleared surface: connection
//! lines first, then the glowing particles on top so they occlude the
//! edge endpoints.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::FieldTheme;

/// Renders the complete field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_connections(field, ctx, theme);
	draw_particles(field, ctx, theme);
}

fn draw_connections(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.set_line_width(1.0);

	for conn in field.connections() {
		let rule = theme.edge_rule(conn.a.class, conn.b.class);
		let stroke = rule.color.with_alpha(conn.opacity * rule.opacity_scale);

		ctx.begin_path();
		ctx.move_to(conn.a.x, conn.a.y);
		ctx.line_to(conn.b.x, conn.b.y);
		ctx.set_stroke_style_str(&stroke.to_css());
		ctx.stroke();
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	for p in field.particles() {
		let color = theme.class_color(p.class).to_css();

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&color);
		ctx.set_shadow_blur(theme.glow_blur);
		ctx.set_shadow_color(&color);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
	}
}
