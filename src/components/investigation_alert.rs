use leptos::prelude::*;

use crate::tracker::{Advice, TrackerState, advise};

/// Alert with the current investigation advice, recomputed on every change.
#[component]
pub fn InvestigationAlert(state: RwSignal<TrackerState>) -> impl IntoView {
	let advice = move || state.with(|s| advise(&s.user().disease, s.relatives()));
	let class = move || match advice() {
		Advice::Investigate => "alert alert-urgent",
		Advice::ConsiderInvestigating => "alert alert-warning",
		Advice::NoInvestigationNeeded => "alert",
	};

	view! {
		<div class=class role="alert">
			<span class="alert-icon">"!"</span>
			<h3 class="alert-title">{Advice::TITLE}</h3>
			<p class="alert-description">{move || advice().message()}</p>
		</div>
	}
}
