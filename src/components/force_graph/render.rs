use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NODE_RADIUS};

const BACKGROUND: &str = "#1a1a2e";
const LINK_COLOR: &str = "rgba(100, 180, 255, 0.7)";
const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.85)";

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_tooltip(state, ctx);
}

fn font(size: f64, k: f64) -> String {
	format!("{}px sans-serif", size / k.max(0.5))
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let dashed = js_sys::Array::of2(&JsValue::from_f64(6.0 / k), &JsValue::from_f64(4.0 / k));
	let solid = js_sys::Array::new();

	ctx.set_stroke_style_str(LINK_COLOR);
	ctx.set_line_width(1.5 / k);
	ctx.set_font(&font(9.0, k));
	ctx.set_text_align("center");

	for link in &state.links {
		let (Some((x1, y1)), Some((x2, y2))) =
			(state.position(link.source), state.position(link.target))
		else {
			continue;
		};
		let _ = ctx.set_line_dash(if link.dashed { &dashed } else { &solid });
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		if !link.label.is_empty() {
			ctx.set_fill_style_str(LINK_COLOR);
			let _ = ctx.fill_text(&link.label, (x1 + x2) / 2.0, (y1 + y2) / 2.0 - 4.0 / k);
		}
	}
	let _ = ctx.set_line_dash(&solid);
	ctx.set_text_align("start");
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_font(&font(11.0, k));

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let info = &node.data.user_data;

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();

		if state.hovered == Some(node.index()) {
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		if !info.label.is_empty() {
			ctx.set_fill_style_str(LABEL_COLOR);
			let _ = ctx.fill_text(&info.label, x + NODE_RADIUS + 3.0, y + 4.0);
		}
	});
}

/// Name and disease of the hovered node, drawn in screen space.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(idx) = state.hovered else {
		return;
	};
	let (Some(info), Some((gx, gy))) = (state.node_info(idx), state.position(idx)) else {
		return;
	};
	let name = if info.label.is_empty() { "(unnamed)" } else { info.label.as_str() };
	let text = if info.disease.is_empty() {
		format!("{name}: no disease recorded")
	} else {
		format!("{name}: {}", info.disease)
	};

	let (sx, sy) = (
		gx * state.transform.k + state.transform.x,
		gy * state.transform.k + state.transform.y,
	);
	ctx.set_font("12px sans-serif");
	let width = ctx
		.measure_text(&text)
		.map(|m| m.width())
		.unwrap_or(text.len() as f64 * 7.0);
	let (bx, by) = (sx + 12.0, sy - 28.0);

	ctx.set_fill_style_str("rgba(0, 0, 0, 0.75)");
	ctx.fill_rect(bx, by, width + 12.0, 20.0);
	ctx.set_fill_style_str("white");
	let _ = ctx.fill_text(&text, bx + 6.0, by + 14.0);
}
