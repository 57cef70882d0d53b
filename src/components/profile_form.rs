use leptos::prelude::*;

use crate::tracker::TrackerState;

/// Name and disease of the user the relatives belong to.
#[component]
pub fn ProfileForm(state: RwSignal<TrackerState>) -> impl IntoView {
	view! {
		<div class="profile-form">
			<input
				type="text"
				placeholder="User name"
				prop:value=move || state.with(|s| s.user().name.clone())
				on:input=move |ev| state.update(|s| s.set_user_name(event_target_value(&ev)))
			/>
			<input
				type="text"
				placeholder="Disease"
				prop:value=move || state.with(|s| s.user().disease.clone())
				on:input=move |ev| state.update(|s| s.set_user_disease(event_target_value(&ev)))
			/>
		</div>
	}
}
