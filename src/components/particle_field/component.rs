//! Leptos component wrapping the particle-field canvas.
//!
//! The component owns the engine lifecycle: when `active` flips on it sizes
//! the canvas to the window, seeds a fresh field, and starts a
//! `requestAnimationFrame` loop; when `active` flips off it cancels the
//! pending frame. The loop is cooperative and single-threaded: each tick
//! advances the field, redraws, and requests the next frame, so a tick
//! already dispatched when the engine stops completes without rescheduling.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::{FieldConfig, ParticleField};
use super::render;
use super::theme::FieldTheme;

/// Bundles the engine state with its drawing surface.
struct FieldContext {
	field: ParticleField,
	theme: FieldTheme,
	ctx: CanvasRenderingContext2d,
}

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

/// Fullscreen canvas running the particle-field animation while `active`
/// is true.
///
/// Every activation reseeds the field against the current window size, and
/// window resizes while running replace the particle set against the new
/// bounds. Missing canvas, window, or 2d context degrade to a no-op rather
/// than raising.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] active: Signal<bool>,
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(default = FieldTheme::default())] theme: FieldTheme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	// Pending frame id; `None` marks the engine stopped, so a tick that was
	// already dispatched will not reschedule itself.
	let frame_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let is_active = active.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		if !is_active {
			// Idempotent stop: cancel the pending tick, if any.
			if let Some(id) = frame_id.borrow_mut().take() {
				let _ = window.cancel_animation_frame(id);
			}
			return;
		}
		if frame_id.borrow().is_some() {
			return;
		}

		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		*context.borrow_mut() = Some(FieldContext {
			field: ParticleField::new(config.clone(), w, h),
			theme: theme.clone(),
			ctx,
		});

		if resize_cb.borrow().is_none() {
			let (context_resize, frame_resize, canvas_resize) =
				(context.clone(), frame_id.clone(), canvas.clone());
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				// Only the running animation tracks the window.
				if frame_resize.borrow().is_none() {
					return;
				}
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.field.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ = window
					.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		if animate.borrow().is_none() {
			let (context_anim, animate_inner, frame_anim) =
				(context.clone(), animate.clone(), frame_id.clone());
			*animate.borrow_mut() = Some(Closure::new(move || {
				if frame_anim.borrow().is_none() {
					return;
				}
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					c.field.advance();
					render::render(&c.field, &c.ctx, &c.theme);
				}
				if let Some(ref cb) = *animate_inner.borrow() {
					let id = web_sys::window().and_then(|win| {
						win.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
					});
					*frame_anim.borrow_mut() = id;
				}
			}));
		}

		if let Some(ref cb) = *animate.borrow() {
			*frame_id.borrow_mut() = window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.ok();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block; position: absolute; inset: 0;"
		/>
	}
}
