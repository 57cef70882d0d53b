use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::ForceGraphState;
use crate::graph::GraphData;

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;
const FRAME_DT: f32 = 0.016;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Everything one mounted canvas keeps alive between frames.
#[derive(Clone, Default)]
struct CanvasLoop {
	state: Rc<RefCell<Option<ForceGraphState>>>,
	frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	frame_id: Rc<Cell<Option<i32>>>,
}

impl CanvasLoop {
	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(cb) = self.frame_cb.borrow().as_ref() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				self.frame_id.set(Some(id));
			}
		}
	}

	/// Cancel the pending frame and drop the frame callback and simulation.
	/// The callback holds a clone of `self`, so this also breaks that cycle.
	fn stop(&self) {
		if let (Some(id), Some(window)) = (self.frame_id.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		if self.frame_cb.borrow_mut().take().is_some() {
			debug!("Graph canvas stopped");
		}
		self.state.borrow_mut().take();
	}
}

/// Canvas that lays `data` out with a force simulation. Nodes can be
/// dragged (which pins them), the background panned and the view zoomed.
/// Changes to `data` rebuild the simulation in place, and the canvas follows
/// the size of its parent (or the window when `fullscreen`).
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let canvas_loop = CanvasLoop::default();
	let state = canvas_loop.state.clone();

	// a hidden parent reports zero width; fall back until it is shown
	let measure = move |canvas: &HtmlCanvasElement, window: &Window| {
		if fullscreen {
			return window_size(window).unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
		}
		let parent_width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0);
		(
			width.or(parent_width).unwrap_or(DEFAULT_WIDTH),
			height.unwrap_or(DEFAULT_HEIGHT),
		)
	};

	let loop_init = canvas_loop.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			error!("No window; graph canvas disabled");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			error!("Canvas has no 2d context; graph canvas disabled");
			return;
		};
		loop_init.stop();

		let (w, h) = measure(&canvas, &window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		*loop_init.state.borrow_mut() = Some(ForceGraphState::new(&data.get_untracked(), w, h));

		let looper = loop_init.clone();
		*loop_init.frame_cb.borrow_mut() = Some(Closure::new(move || {
			looper.frame_id.set(None);
			if let Some(ref mut s) = *looper.state.borrow_mut() {
				if let Some(win) = web_sys::window() {
					let (nw, nh) = measure(&canvas, &win);
					if (nw, nh) != (s.width, s.height) {
						canvas.set_width(nw as u32);
						canvas.set_height(nh as u32);
						s.resize(nw, nh);
					}
				}
				if s.advance(FRAME_DT) {
					render::render(s, &ctx);
				}
			}
			looper.schedule();
		}));
		loop_init.schedule();
	});

	let teardown = SendWrapper::new(canvas_loop);
	on_cleanup(move || teardown.stop());

	let state_sync = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut s) = *state_sync.borrow_mut() {
			s.set_data(&data);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
	};

	let state_wh = state;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
