use log::{debug, warn};
use thiserror::Error;

/// Default number of relatives a tracker accepts.
pub const DEFAULT_CAPACITY: usize = 3;
/// Default link length per degree of relationship.
pub const DEFAULT_DISTANCE_UNIT: f64 = 50.0;

/// A recorded relative. Fields are kept exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relative {
	/// Display name.
	pub name: String,
	/// Disease name, compared exactly against the user's.
	pub disease: String,
	/// Age as entered; not parsed.
	pub age: String,
	/// Free-text relationship label, see [`classify`](super::classify).
	pub relationship: String,
}

/// The person the relatives are recorded for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
	/// Display name.
	pub name: String,
	/// The disease under consideration; empty when none.
	pub disease: String,
}

/// Input field of the relative form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativeField {
	/// Relative name.
	Name,
	/// Relative disease.
	Disease,
	/// Relative age.
	Age,
	/// Relationship to the user.
	Relationship,
}

/// Form buffer for the next relative to add.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelativeDraft(Relative);

impl RelativeDraft {
	/// Current value of one field.
	pub fn get(&self, field: RelativeField) -> &str {
		match field {
			RelativeField::Name => &self.0.name,
			RelativeField::Disease => &self.0.disease,
			RelativeField::Age => &self.0.age,
			RelativeField::Relationship => &self.0.relationship,
		}
	}

	/// Replace one field.
	pub fn set(&mut self, field: RelativeField, value: String) {
		let slot = match field {
			RelativeField::Name => &mut self.0.name,
			RelativeField::Disease => &mut self.0.disease,
			RelativeField::Age => &mut self.0.age,
			RelativeField::Relationship => &mut self.0.relationship,
		};
		*slot = value;
	}

	/// The relative this draft would produce.
	pub fn as_relative(&self) -> &Relative {
		&self.0
	}
}

/// Tunables for a [`TrackerState`].
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
	/// Maximum number of relatives.
	pub capacity: usize,
	/// Graph link length per degree of relationship.
	pub distance_unit: f64,
}

impl Default for TrackerConfig {
	fn default() -> Self {
		Self {
			capacity: DEFAULT_CAPACITY,
			distance_unit: DEFAULT_DISTANCE_UNIT,
		}
	}
}

/// Errors reported by [`TrackerState`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
	/// The relative list is full.
	#[error("tracker already holds {capacity} relatives")]
	AtCapacity {
		/// The configured capacity.
		capacity: usize,
	},
}

/// The in-memory state of one tracker session.
///
/// Relatives are append-only and bounded by [`TrackerConfig::capacity`].
/// Nothing is validated: empty names, non-numeric ages and unknown
/// relationships are all accepted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerState {
	config: TrackerConfig,
	user: UserProfile,
	relatives: Vec<Relative>,
	draft: RelativeDraft,
}

impl TrackerState {
	/// An empty tracker with the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// An empty tracker with the given configuration.
	pub fn with_config(config: TrackerConfig) -> Self {
		Self {
			relatives: Vec::with_capacity(config.capacity),
			config,
			..Self::default()
		}
	}

	/// Active configuration.
	pub fn config(&self) -> &TrackerConfig {
		&self.config
	}

	/// The user's profile.
	pub fn user(&self) -> &UserProfile {
		&self.user
	}

	/// Recorded relatives in insertion order.
	pub fn relatives(&self) -> &[Relative] {
		&self.relatives
	}

	/// The pending form buffer.
	pub fn draft(&self) -> &RelativeDraft {
		&self.draft
	}

	/// Number of recorded relatives.
	pub fn len(&self) -> usize {
		self.relatives.len()
	}

	/// Whether no relative has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.relatives.is_empty()
	}

	/// Whether further adds will be rejected.
	pub fn is_full(&self) -> bool {
		self.relatives.len() >= self.config.capacity
	}

	/// How many more relatives fit.
	pub fn remaining(&self) -> usize {
		self.config.capacity.saturating_sub(self.relatives.len())
	}

	/// Replace the whole profile.
	pub fn set_user_profile(&mut self, profile: UserProfile) {
		self.user = profile;
	}

	/// Replace the user's name.
	pub fn set_user_name(&mut self, name: String) {
		self.user.name = name;
	}

	/// Replace the user's disease.
	pub fn set_user_disease(&mut self, disease: String) {
		self.user.disease = disease;
	}

	/// Update one field of the form buffer.
	pub fn set_draft_field(&mut self, field: RelativeField, value: String) {
		self.draft.set(field, value);
	}

	/// Append a relative, returning the new count.
	pub fn try_add_relative(&mut self, candidate: Relative) -> Result<usize, TrackerError> {
		if self.is_full() {
			warn!(
				"Rejected relative {:?}: capacity of {} reached",
				candidate.name, self.config.capacity
			);
			return Err(TrackerError::AtCapacity {
				capacity: self.config.capacity,
			});
		}
		debug!(
			"Added relative {:?} ({})",
			candidate.name, candidate.relationship
		);
		self.relatives.push(candidate);
		Ok(self.relatives.len())
	}

	/// Append a relative; `false` when at capacity, in which case nothing
	/// changes.
	pub fn add_relative(&mut self, candidate: Relative) -> bool {
		self.try_add_relative(candidate).is_ok()
	}

	/// Add the drafted relative. The draft is cleared on success and kept
	/// when the tracker is full.
	pub fn submit_draft(&mut self) -> bool {
		if self.is_full() {
			warn!("Draft not submitted: capacity of {} reached", self.config.capacity);
			return false;
		}
		let RelativeDraft(candidate) = std::mem::take(&mut self.draft);
		self.add_relative(candidate)
	}
}
