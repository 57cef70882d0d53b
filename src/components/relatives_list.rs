use leptos::prelude::*;

use crate::tracker::{Relative, TrackerState};

fn describe(relative: &Relative) -> String {
	format!(
		"{} - {} - {} years old - {}",
		relative.name, relative.relationship, relative.age, relative.disease
	)
}

#[component]
pub fn RelativesList(state: RwSignal<TrackerState>) -> impl IntoView {
	view! {
		<div class="relatives-list">
			<h2>"Relatives:"</h2>
			<ul>
				{move || {
					state
						.with(|s| s.relatives().iter().map(describe).collect::<Vec<_>>())
						.into_iter()
						.map(|line| view! { <li>{line}</li> })
						.collect_view()
				}}
			</ul>
		</div>
	}
}
