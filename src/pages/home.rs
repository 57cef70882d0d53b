use leptos::prelude::*;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::{InvestigationAlert, ProfileForm, RelativeForm, RelativesList};
use crate::tracker::{TrackerConfig, TrackerState, project};

const GRAPH_HEIGHT: f64 = 400.0;

/// The tracker page. Owns the session's [`TrackerState`]; everything shown
/// below the forms is derived from it.
#[component]
pub fn Home(#[prop(optional)] config: Option<TrackerConfig>) -> impl IntoView {
	let state = RwSignal::new(TrackerState::with_config(config.unwrap_or_default()));
	let has_relatives = move || state.with(|s| !s.is_empty());
	// memoised so typing into the forms does not rebuild the simulation
	let graph_data = Memo::new(move |_| state.with(project));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="tracker">
				<h1>"Family Disease Tracker"</h1>
				<ProfileForm state=state />
				<RelativeForm state=state />

				<Show when=has_relatives>
					<RelativesList state=state />
				</Show>

				// kept mounted so the canvas and its animation loop are created once
				<div
					class="graph-panel"
					style:display=move || if has_relatives() { "block" } else { "none" }
				>
					<ForceGraphCanvas data=graph_data height=Some(GRAPH_HEIGHT) />
				</div>

				<Show when=has_relatives>
					<InvestigationAlert state=state />
				</Show>
			</div>
		</ErrorBoundary>
	}
}
