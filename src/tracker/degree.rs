const FIRST_DEGREE: &[&str] = &["parent", "sibling", "child"];
const SECOND_DEGREE: &[&str] = &["grandparent", "aunt", "uncle", "niece", "nephew", "grandchild"];

/// Coarse genealogical closeness of a relative to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degree {
	/// Parent, sibling or child.
	First,
	/// Grandparent, aunt, uncle, niece, nephew or grandchild.
	Second,
	/// Anything else, including unrecognised labels.
	Other,
}

impl Degree {
	/// Numeric degree: 1, 2 or 3.
	pub fn value(self) -> u8 {
		match self {
			Degree::First => 1,
			Degree::Second => 2,
			Degree::Other => 3,
		}
	}

	/// Preferred link length in the graph, `value * unit`.
	pub fn link_distance(self, unit: f64) -> f64 {
		f64::from(self.value()) * unit
	}
}

/// Classify a free-text relationship label. Comparison is case-insensitive
/// and exact otherwise; every unknown label is [`Degree::Other`].
pub fn classify(relationship: &str) -> Degree {
	let folded = relationship.to_lowercase();
	if FIRST_DEGREE.contains(&folded.as_str()) {
		Degree::First
	} else if SECOND_DEGREE.contains(&folded.as_str()) {
		Degree::Second
	} else {
		Degree::Other
	}
}
