//! Browser tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use family_disease_tracker::Home;
use family_disease_tracker::tracker::Advice;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
	Document, Element, Event, EventInit, HtmlCanvasElement, HtmlElement, HtmlInputElement,
};

wasm_bindgen_test_configure!(run_in_browser);

const CONTAINER_WIDTH: i32 = 500;

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// A fixed-width container attached to the page, to mount the tracker into.
fn container() -> HtmlElement {
	let container: HtmlElement = document().create_element("div").unwrap().unchecked_into();
	container
		.set_attribute("style", &format!("width: {CONTAINER_WIDTH}px"))
		.unwrap();
	document().body().unwrap().append_child(&container).unwrap();
	container
}

/// Let effects and at least a few animation frames run.
async fn settle() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 100)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn find(root: &Element, selector: &str) -> Option<Element> {
	root.query_selector(selector).unwrap()
}

fn inputs(root: &Element, selector: &str) -> Vec<HtmlInputElement> {
	let list = root.query_selector_all(selector).unwrap();
	(0..list.length())
		.map(|i| list.item(i).unwrap().unchecked_into())
		.collect()
}

fn type_into(input: &HtmlInputElement, value: &str) {
	input.set_value(value);
	let init = EventInit::new();
	init.set_bubbles(true);
	let event = Event::new_with_event_init_dict("input", &init).unwrap();
	input.dispatch_event(&event).unwrap();
}

fn submit_button(root: &Element) -> HtmlElement {
	find(root, ".relative-form button").unwrap().unchecked_into()
}

fn add_relative(root: &Element, fields: [&str; 4]) {
	for (input, value) in inputs(root, ".relative-form input").iter().zip(fields) {
		type_into(input, value);
	}
	submit_button(root).click();
}

fn text(root: &Element, selector: &str) -> String {
	find(root, selector).unwrap().text_content().unwrap()
}

#[wasm_bindgen_test]
async fn renders_empty_tracker() {
	let container = container();
	let _handle = leptos::mount::mount_to(container.clone(), || view! { <Home /> });
	settle().await;

	assert_eq!(text(&container, "h1"), "Family Disease Tracker");
	assert_eq!(inputs(&container, ".profile-form input").len(), 2);
	assert_eq!(inputs(&container, ".relative-form input").len(), 4);
	assert!(!submit_button(&container).has_attribute("disabled"));

	let panel = find(&container, ".graph-panel").unwrap();
	assert!(panel.get_attribute("style").unwrap_or_default().contains("none"));
	assert!(find(&container, "canvas.force-graph-canvas").is_some());
	assert!(find(&container, ".relatives-list").is_none());
	assert!(find(&container, ".alert").is_none());
	container.remove();
}

#[wasm_bindgen_test]
async fn affected_sibling_shows_first_degree_advice() {
	let container = container();
	let _handle = leptos::mount::mount_to(container.clone(), || view! { <Home /> });
	let profile = inputs(&container, ".profile-form input");
	type_into(&profile[0], "Ann");
	type_into(&profile[1], "Diabetes");
	add_relative(&container, ["Bob", "Diabetes", "40", "sibling"]);
	settle().await;

	assert_eq!(
		text(&container, ".relatives-list li"),
		"Bob - sibling - 40 years old - Diabetes"
	);
	assert_eq!(text(&container, ".alert-title"), Advice::TITLE);
	assert_eq!(text(&container, ".alert-description"), Advice::Investigate.message());

	// the form is cleared, the profile is not
	for input in inputs(&container, ".relative-form input") {
		assert_eq!(input.value(), "");
	}
	assert_eq!(profile[1].value(), "Diabetes");

	// once shown, the canvas takes the width of its panel
	let panel = find(&container, ".graph-panel").unwrap();
	assert!(!panel.get_attribute("style").unwrap_or_default().contains("none"));
	let canvas: HtmlCanvasElement = find(&container, "canvas").unwrap().unchecked_into();
	assert_eq!(panel.client_width(), CONTAINER_WIDTH);
	assert_eq!(canvas.width() as i32, CONTAINER_WIDTH);
	container.remove();
}

#[wasm_bindgen_test]
async fn advice_follows_the_user_disease() {
	let container = container();
	let _handle = leptos::mount::mount_to(container.clone(), || view! { <Home /> });
	let profile = inputs(&container, ".profile-form input");
	type_into(&profile[1], "Diabetes");
	add_relative(&container, ["Amy", "Diabetes", "60", "aunt"]);
	settle().await;
	assert_eq!(
		text(&container, ".alert-description"),
		Advice::ConsiderInvestigating.message()
	);

	type_into(&profile[1], "Flu");
	settle().await;
	assert_eq!(
		text(&container, ".alert-description"),
		Advice::NoInvestigationNeeded.message()
	);
	container.remove();
}

#[wasm_bindgen_test]
async fn submit_is_disabled_at_capacity() {
	let container = container();
	let _handle = leptos::mount::mount_to(container.clone(), || view! { <Home /> });
	for name in ["a", "b", "c"] {
		assert!(!submit_button(&container).has_attribute("disabled"));
		add_relative(&container, [name, "Flu", "30", "child"]);
		settle().await;
	}

	assert!(submit_button(&container).has_attribute("disabled"));
	assert_eq!(
		container.query_selector_all(".relatives-list li").unwrap().length(),
		3
	);

	// a fourth submit is ignored and keeps what was typed
	add_relative(&container, ["d", "Flu", "30", "child"]);
	settle().await;
	assert_eq!(
		container.query_selector_all(".relatives-list li").unwrap().length(),
		3
	);
	assert_eq!(inputs(&container, ".relative-form input")[0].value(), "d");
	container.remove();
}

#[wasm_bindgen_test]
async fn unmounting_stops_the_canvas() {
	let container = container();
	let handle = leptos::mount::mount_to(container.clone(), || view! { <Home /> });
	add_relative(&container, ["Bob", "Flu", "40", "parent"]);
	settle().await;
	let canvas: HtmlCanvasElement = find(&container, "canvas").unwrap().unchecked_into();
	assert_eq!(canvas.width() as i32, CONTAINER_WIDTH);

	// a running loop would re-measure the detached panel and fall back to 800
	drop(handle);
	settle().await;
	assert!(find(&container, "canvas").is_none());
	assert_eq!(canvas.width() as i32, CONTAINER_WIDTH);
	container.remove();
}
