use std::fmt;

use super::degree::{Degree, classify};
use super::state::Relative;

/// Outcome of [`advise`], ordered from most to least urgent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advice {
	/// A first-degree relative shares the user's disease.
	Investigate,
	/// Only second-degree relatives share it.
	ConsiderInvestigating,
	/// No first- or second-degree relative shares it.
	NoInvestigationNeeded,
}

impl Advice {
	/// Heading shown above the message.
	pub const TITLE: &'static str = "Disease Investigation";

	/// The fixed text shown to the user.
	pub fn message(self) -> &'static str {
		match self {
			Advice::Investigate => {
				"Patient should be investigated for this disease as first degree relatives have the disease."
			}
			Advice::ConsiderInvestigating => {
				"Patients might want to be investigated for this disease as second degree relatives have it."
			}
			Advice::NoInvestigationNeeded => {
				"No need to investigate patient, first and second degree relatives do not have the disease."
			}
		}
	}
}

impl fmt::Display for Advice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

/// Decide whether the user's disease warrants investigation.
///
/// Disease names are compared exactly, so an empty user disease matches a
/// relative with an empty disease. A first-degree match always wins over a
/// second-degree one.
pub fn advise(user_disease: &str, relatives: &[Relative]) -> Advice {
	let affected = |degree: Degree| {
		relatives
			.iter()
			.any(|r| classify(&r.relationship) == degree && r.disease == user_disease)
	};

	if affected(Degree::First) {
		Advice::Investigate
	} else if affected(Degree::Second) {
		Advice::ConsiderInvestigating
	} else {
		Advice::NoInvestigationNeeded
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn relative(name: &str, disease: &str, relationship: &str, age: &str) -> Relative {
		Relative {
			name: name.into(),
			disease: disease.into(),
			age: age.into(),
			relationship: relationship.into(),
		}
	}

	#[test]
	fn no_relatives_needs_no_investigation() {
		for disease in ["", "Diabetes", "flu"] {
			assert_eq!(advise(disease, &[]), Advice::NoInvestigationNeeded);
		}
	}

	#[test]
	fn affected_sibling_means_investigate() {
		let relatives = [relative("Bob", "Diabetes", "sibling", "40")];
		assert_eq!(advise("Diabetes", &relatives), Advice::Investigate);
	}

	#[test]
	fn affected_aunt_means_consider() {
		let relatives = [relative("Amy", "Diabetes", "aunt", "60")];
		assert_eq!(advise("Diabetes", &relatives), Advice::ConsiderInvestigating);
	}

	#[test]
	fn unrelated_disease_needs_no_investigation() {
		let relatives = [relative("Cid", "Flu", "sibling", "30")];
		assert_eq!(advise("Diabetes", &relatives), Advice::NoInvestigationNeeded);
	}

	#[test]
	fn first_degree_dominates_second_degree() {
		let relatives = [
			relative("Amy", "Diabetes", "aunt", "60"),
			relative("Bob", "Diabetes", "Parent", "70"),
		];
		assert_eq!(advise("Diabetes", &relatives), Advice::Investigate);
	}

	#[test]
	fn disease_match_is_case_sensitive() {
		let relatives = [relative("Bob", "diabetes", "sibling", "40")];
		assert_eq!(advise("Diabetes", &relatives), Advice::NoInvestigationNeeded);
	}

	#[test]
	fn third_degree_match_is_ignored() {
		let relatives = [relative("Dee", "Diabetes", "cousin", "35")];
		assert_eq!(advise("Diabetes", &relatives), Advice::NoInvestigationNeeded);
	}

	#[test]
	fn empty_diseases_count_as_a_match() {
		let relatives = [relative("Eve", "", "child", "5")];
		assert_eq!(advise("", &relatives), Advice::Investigate);
	}

	#[test]
	fn display_uses_message() {
		assert_eq!(
			Advice::ConsiderInvestigating.to_string(),
			Advice::ConsiderInvestigating.message()
		);
	}
}
