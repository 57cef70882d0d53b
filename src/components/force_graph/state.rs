use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use crate::graph::GraphData;

pub const NODE_RADIUS: f64 = 8.0;
pub const HIT_RADIUS: f64 = 14.0;
/// Share of a link's length error removed per tick.
const LINK_STIFFNESS: f64 = 0.1;
/// Radius of the ring new nodes are placed on.
const SPAWN_RADIUS: f64 = 100.0;
const MIN_SCALE: f64 = 0.1;
const MAX_SCALE: f64 = 10.0;

fn simulation_parameters() -> SimulationParameters {
	SimulationParameters {
		force_charge: 250.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	}
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub disease: String,
	pub color: String,
}

#[derive(Clone, Debug)]
pub struct Link {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub distance: f64,
	pub label: String,
	pub dashed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Simulation and view state behind one canvas.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub links: Vec<Link>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	ids: HashMap<String, DefaultNodeIdx>,
	/// Set when an idle graph has to be drawn again.
	dirty: bool,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(simulation_parameters()),
			links: Vec::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			ids: HashMap::new(),
			dirty: true,
		};
		state.set_data(data);
		state
	}

	/// Rebuild the simulation from `data`. Nodes whose id is still present
	/// keep their position and pin.
	pub fn set_data(&mut self, data: &GraphData) {
		let mut previous = HashMap::new();
		self.graph.visit_nodes(|node| {
			previous.insert(
				node.data.user_data.id.clone(),
				(node.x(), node.y(), node.data.is_anchor),
			);
		});

		let mut graph = ForceGraph::new(simulation_parameters());
		let mut ids = HashMap::new();
		let count = data.nodes.len().max(1) as f64;

		for (i, node) in data.nodes.iter().enumerate() {
			let (x, y, is_anchor) = previous.get(&node.id).copied().unwrap_or_else(|| {
				if i == 0 {
					(0.0, 0.0, false)
				} else {
					let angle = (i as f64) * 2.0 * PI / count;
					(
						(SPAWN_RADIUS * angle.cos()) as f32,
						(SPAWN_RADIUS * angle.sin()) as f32,
						false,
					)
				}
			});
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					disease: node.disease.clone(),
					color: node.color.clone(),
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		let mut links = Vec::with_capacity(data.links.len());
		for link in &data.links {
			let (Some(&source), Some(&target)) = (ids.get(&link.source), ids.get(&link.target))
			else {
				debug!("Skipping link {} -> {}: unknown node", link.source, link.target);
				continue;
			};
			graph.add_edge(source, target, EdgeData::default());
			links.push(Link {
				source,
				target,
				distance: link.distance,
				label: link.label.clone(),
				dashed: link.dashed,
			});
		}

		debug!(
			"Graph rebuilt with {} nodes and {} links",
			ids.len(),
			links.len()
		);
		self.graph = graph;
		self.links = links;
		self.ids = ids;
		self.hovered = None;
		self.drag = DragState::default();
		self.pan.active = false;
		self.dirty = true;
	}

	pub fn node_index(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn node_info(&self, idx: DefaultNodeIdx) -> Option<NodeInfo> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.clone());
			}
		});
		found
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// world-space radius, scales with zoom like the nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Start dragging the node under the pointer, or panning if there is none.
	pub fn pointer_down(&mut self, x: f64, y: f64) {
		let hit = self
			.node_at_position(x, y)
			.and_then(|idx| self.position(idx).map(|pos| (idx, pos)));
		match hit {
			Some((idx, (nx, ny))) => {
				self.drag = DragState {
					node_idx: Some(idx),
					start_x: x,
					start_y: y,
					node_start_x: nx,
					node_start_y: ny,
				};
			}
			None => {
				self.pan = PanState {
					active: true,
					start_x: x,
					start_y: y,
					transform_start_x: self.transform.x,
					transform_start_y: self.transform.y,
				};
			}
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.drag.node_idx {
			let (nx, ny) = (
				self.drag.node_start_x + (x - self.drag.start_x) / self.transform.k,
				self.drag.node_start_y + (y - self.drag.start_y) / self.transform.k,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx as f32;
					node.data.y = ny as f32;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		} else {
			self.hovered = self.node_at_position(x, y);
		}
		self.dirty = true;
	}

	pub fn pointer_up(&mut self) {
		self.drag.node_idx = None;
		self.pan.active = false;
	}

	pub fn pointer_leave(&mut self) {
		self.pointer_up();
		self.hovered = None;
		self.dirty = true;
	}

	/// Zoom one wheel step around the pointer. Purely horizontal scrolls
	/// are ignored.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		if delta_y == 0.0 {
			return;
		}
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_SCALE, MAX_SCALE);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
		self.dirty = true;
	}

	/// Step the simulation for one frame. Returns whether the frame has to
	/// be drawn: a graph without links has nothing to settle and is only
	/// redrawn after something changed.
	pub fn advance(&mut self, dt: f32) -> bool {
		if self.links.is_empty() {
			return std::mem::take(&mut self.dirty);
		}
		self.tick(dt);
		self.dirty = false;
		true
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.relax_links();
	}

	/// Pull every link toward its rest length. Pinned endpoints stay put.
	fn relax_links(&mut self) {
		let mut nodes = HashMap::new();
		self.graph.visit_nodes(|node| {
			nodes.insert(
				node.index(),
				(node.x() as f64, node.y() as f64, node.data.is_anchor),
			);
		});

		let mut shifts: HashMap<DefaultNodeIdx, (f64, f64)> = HashMap::new();
		for link in &self.links {
			let (Some(&(x1, y1, pin1)), Some(&(x2, y2, pin2))) =
				(nodes.get(&link.source), nodes.get(&link.target))
			else {
				continue;
			};
			let (dx, dy) = (x2 - x1, y2 - y1);
			let dist = (dx * dx + dy * dy).sqrt();
			let free = usize::from(!pin1) + usize::from(!pin2);
			if dist < 0.001 || free == 0 {
				continue;
			}

			let k = (dist - link.distance) / dist * LINK_STIFFNESS / free as f64;
			if !pin1 {
				let shift = shifts.entry(link.source).or_default();
				shift.0 += dx * k;
				shift.1 += dy * k;
			}
			if !pin2 {
				let shift = shifts.entry(link.target).or_default();
				shift.0 -= dx * k;
				shift.1 -= dy * k;
			}
		}

		self.graph.visit_nodes_mut(|node| {
			if let Some(&(sx, sy)) = shifts.get(&node.index()) {
				node.data.x += sx as f32;
				node.data.y += sy as f32;
			}
		});
	}

	/// Adopt a new canvas size, keeping the view centred.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
		self.dirty = true;
	}
}
