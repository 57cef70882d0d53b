//! Pure domain core: relationship degrees, investigation advice, the bounded
//! tracker state and its projection into a graph.

mod advice;
mod degree;
mod projection;
mod state;

pub use advice::{Advice, advise};
pub use degree::{Degree, classify};
pub use projection::{NodeTone, USER_NODE_ID, project, relative_node_id};
pub use state::{
	DEFAULT_CAPACITY, DEFAULT_DISTANCE_UNIT, Relative, RelativeDraft, RelativeField, TrackerConfig,
	TrackerError, TrackerState, UserProfile,
};
