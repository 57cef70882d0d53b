//! Node/link contract between the tracker projection and the canvas.

/// A node as handed to the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Stable id; links refer to nodes by it.
	pub id: String,
	/// Text drawn next to the node.
	pub label: String,
	/// Shown in the hover tooltip.
	pub disease: String,
	/// CSS color of the node body.
	pub color: String,
}

/// An undirected link between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Id of the first endpoint.
	pub source: String,
	/// Id of the second endpoint.
	pub target: String,
	/// Rest length the layout pulls the link toward.
	pub distance: f64,
	/// Text drawn at the middle of the link.
	pub label: String,
	/// Drawn dashed instead of solid.
	pub dashed: bool,
}

/// Everything the canvas draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes in draw order.
	pub nodes: Vec<GraphNode>,
	/// Links; ones with unknown endpoints are skipped.
	pub links: Vec<GraphLink>,
}
