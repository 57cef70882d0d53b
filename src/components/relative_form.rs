use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;

use crate::tracker::{RelativeField, TrackerState};

#[component]
fn DraftInput(
	state: RwSignal<TrackerState>,
	field: RelativeField,
	placeholder: &'static str,
	#[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
	view! {
		<input
			type=kind
			placeholder=placeholder
			prop:value=move || state.with(|s| s.draft().get(field).to_string())
			on:input=move |ev| state.update(|s| s.set_draft_field(field, event_target_value(&ev)))
		/>
	}
}

/// Form for the next relative. Submitting is refused once the tracker is
/// full, and the form is cleared after every accepted relative.
#[component]
pub fn RelativeForm(state: RwSignal<TrackerState>) -> impl IntoView {
	let is_full = move || state.with(|s| s.is_full());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let mut added = false;
		state.update(|s| added = s.submit_draft());
		if added {
			info!("Relative added, {} slot(s) left", state.with_untracked(|s| s.remaining()));
		}
	};

	view! {
		<form class="relative-form" on:submit=on_submit>
			<DraftInput state=state field=RelativeField::Name placeholder="Relative name" />
			<DraftInput state=state field=RelativeField::Disease placeholder="Relative disease" />
			<DraftInput state=state field=RelativeField::Age placeholder="Relative age" kind="number" />
			<DraftInput
				state=state
				field=RelativeField::Relationship
				placeholder="Relative relationship"
			/>
			<button type="submit" disabled=is_full>
				"Add Relative"
			</button>
		</form>
	}
}
