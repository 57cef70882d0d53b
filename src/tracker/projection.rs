use crate::graph::{GraphData, GraphLink, GraphNode};

use super::degree::{Degree, classify};
use super::state::TrackerState;

/// Id of the user's node.
pub const USER_NODE_ID: &str = "user";

/// Id of the node for the relative at `index`.
pub fn relative_node_id(index: usize) -> String {
	format!("relative{index}")
}

/// What a node's color says about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeTone {
	/// The user has a disease recorded.
	Affected,
	/// The user has no disease recorded.
	Unaffected,
	/// The relative's disease equals the user's.
	SharedDisease,
	/// The relative's disease differs from the user's.
	OtherDisease,
}

impl NodeTone {
	/// CSS color for the tone.
	pub fn color(self) -> &'static str {
		match self {
			NodeTone::Affected | NodeTone::SharedDisease => "#e74c3c",
			NodeTone::Unaffected => "#3498db",
			NodeTone::OtherDisease => "#2ecc71",
		}
	}

	fn for_user(disease: &str) -> Self {
		if disease.is_empty() {
			NodeTone::Unaffected
		} else {
			NodeTone::Affected
		}
	}

	fn for_relative(disease: &str, user_disease: &str) -> Self {
		if disease == user_disease {
			NodeTone::SharedDisease
		} else {
			NodeTone::OtherDisease
		}
	}
}

/// Derive the user-centred graph from the current state: one node for the
/// user, one per relative, and a link from the user to every relative whose
/// length grows with the degree of relationship.
pub fn project(state: &TrackerState) -> GraphData {
	let user = state.user();
	let unit = state.config().distance_unit;

	let user_node = GraphNode {
		id: USER_NODE_ID.into(),
		label: user.name.clone(),
		disease: user.disease.clone(),
		color: NodeTone::for_user(&user.disease).color().into(),
	};

	let relative_nodes = state
		.relatives()
		.iter()
		.enumerate()
		.map(|(i, relative)| GraphNode {
			id: relative_node_id(i),
			label: relative.name.clone(),
			disease: relative.disease.clone(),
			color: NodeTone::for_relative(&relative.disease, &user.disease)
				.color()
				.into(),
		});

	let links = state
		.relatives()
		.iter()
		.enumerate()
		.map(|(i, relative)| {
			let degree = classify(&relative.relationship);
			GraphLink {
				source: USER_NODE_ID.into(),
				target: relative_node_id(i),
				distance: degree.link_distance(unit),
				label: relative.relationship.clone(),
				dashed: degree == Degree::Other,
			}
		})
		.collect();

	GraphData {
		nodes: std::iter::once(user_node).chain(relative_nodes).collect(),
		links,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tracker::{Relative, TrackerConfig, UserProfile};

	fn state_with(user_disease: &str, relatives: &[(&str, &str, &str)]) -> TrackerState {
		let mut state = TrackerState::new();
		state.set_user_profile(UserProfile {
			name: "Ann".into(),
			disease: user_disease.into(),
		});
		for &(name, disease, relationship) in relatives {
			state.add_relative(Relative {
				name: name.into(),
				disease: disease.into(),
				age: "40".into(),
				relationship: relationship.into(),
			});
		}
		state
	}

	#[test]
	fn empty_state_is_a_lone_user() {
		let graph = project(&TrackerState::new());
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.links.is_empty());
		assert_eq!(graph.nodes[0].id, USER_NODE_ID);
		assert_eq!(graph.nodes[0].color, NodeTone::Unaffected.color());
	}

	#[test]
	fn affected_sibling() {
		let graph = project(&state_with("Diabetes", &[("Bob", "Diabetes", "sibling")]));
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.links.len(), 1);

		let link = &graph.links[0];
		assert_eq!(link.source, "user");
		assert_eq!(link.target, "relative0");
		assert_eq!(link.distance, 50.0);
		assert_eq!(link.label, "sibling");
		assert!(!link.dashed);

		assert_eq!(graph.nodes[0].label, "Ann");
		assert_eq!(graph.nodes[0].color, NodeTone::Affected.color());
		assert_eq!(graph.nodes[1].label, "Bob");
		assert_eq!(graph.nodes[1].color, NodeTone::SharedDisease.color());
	}

	#[test]
	fn distances_follow_degree() {
		let graph = project(&state_with(
			"Diabetes",
			&[
				("Bob", "Diabetes", "Sibling"),
				("Amy", "Diabetes", "aunt"),
				("Dee", "Flu", "cousin"),
			],
		));
		let distances: Vec<f64> = graph.links.iter().map(|l| l.distance).collect();
		assert_eq!(distances, [50.0, 100.0, 150.0]);
		assert!(graph.links[2].dashed);
		assert_eq!(graph.nodes[3].id, "relative2");
		assert_eq!(graph.nodes[3].color, NodeTone::OtherDisease.color());
	}

	#[test]
	fn counts_track_relatives() {
		for n in 0..=3 {
			let relatives = vec![("X", "Flu", "child"); n];
			let graph = project(&state_with("Flu", &relatives));
			assert_eq!(graph.nodes.len(), n + 1);
			assert_eq!(graph.links.len(), n);
		}
	}

	#[test]
	fn empty_diseases_are_colored_as_shared() {
		let graph = project(&state_with("", &[("Eve", "", "child")]));
		assert_eq!(graph.nodes[0].color, NodeTone::Unaffected.color());
		assert_eq!(graph.nodes[1].color, NodeTone::SharedDisease.color());
	}

	#[test]
	fn distance_unit_is_configurable() {
		let mut state = TrackerState::with_config(TrackerConfig {
			distance_unit: 20.0,
			..TrackerConfig::default()
		});
		state.add_relative(Relative {
			relationship: "uncle".into(),
			..Relative::default()
		});
		assert_eq!(project(&state).links[0].distance, 40.0);
	}
}
