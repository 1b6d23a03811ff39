//! End-to-end flows: definition, mounting, rendering, events, and properties.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;
use serde_json::{Value, json};
use serial_test::serial;

use girder_component::{
	ComponentDef, ComponentElement, ComponentError, ComponentLogic, CustomEvent, Event,
	EventInit, EventTarget, Prop, PropChange, PropSpec, PropertyError, RenderCtx, Renderer,
	Status, Template, clear_registry, create_element, define,
};
use girder_di::{
	InjectError, Injectable, Injector, ProviderEntry, Token, bootstrap_root, clear_root,
};
use girder_state::State;

#[derive(Default)]
struct RecordingRenderer {
	frames: RefCell<Vec<Template>>,
}

impl RecordingRenderer {
	fn bodies(&self) -> Vec<String> {
		self.frames
			.borrow()
			.iter()
			.map(|t| t.body().to_string())
			.collect()
	}

	fn last_frame(&self) -> Template {
		self.frames
			.borrow()
			.last()
			.cloned()
			.expect("nothing has rendered yet")
	}
}

impl Renderer for RecordingRenderer {
	fn apply(&self, template: &Template) {
		self.frames.borrow_mut().push(template.clone());
	}
}

#[derive(Default)]
struct RecordingTarget {
	events: RefCell<Vec<CustomEvent>>,
}

impl EventTarget for RecordingTarget {
	fn dispatch_event(&self, event: CustomEvent) {
		self.events.borrow_mut().push(event);
	}
}

fn mount<S, L>(
	def: ComponentDef<S, L>,
) -> (
	Rc<ComponentElement<S, L>>,
	Rc<RecordingRenderer>,
	Rc<RecordingTarget>,
)
where
	S: Clone + 'static,
	L: ComponentLogic,
{
	let renderer = Rc::new(RecordingRenderer::default());
	let target = Rc::new(RecordingTarget::default());
	let element = ComponentElement::new(Rc::new(def), renderer.clone(), target.clone())
		.expect("element builds against an empty root");
	(element, renderer, target)
}

// -- counter component -------------------------------------------------------

#[derive(Default)]
struct LifecycleLog(RefCell<Vec<String>>);

impl LifecycleLog {
	fn push(&self, entry: impl Into<String>) {
		self.0.borrow_mut().push(entry.into());
	}

	fn entries(&self) -> Vec<String> {
		self.0.borrow().clone()
	}
}

struct CounterLogic {
	state: Rc<State<i32>>,
	log: Rc<LifecycleLog>,
}

impl Injectable for CounterLogic {
	fn construct(injector: &Injector) -> Result<Self, InjectError> {
		Ok(Self {
			state: injector.get(Token::of())?,
			log: injector.get(Token::of())?,
		})
	}
}

impl ComponentLogic for CounterLogic {
	fn on_connected(&mut self) {
		self.log.push("connected");
	}

	fn on_disconnected(&mut self) {
		self.log.push("disconnected");
	}

	fn on_attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>) {
		self.log
			.push(format!("attr {name}: {old:?} -> {new:?}"));
	}
}

fn counter_def() -> ComponentDef<i32, CounterLogic> {
	ComponentDef::new("app-counter", 0, |ctx: &RenderCtx<i32>| {
		Template::new(format!("<p>{}</p>", ctx.state()))
			.bind("click", ctx.run("increment", json!(1)))
	})
	.provide(ProviderEntry::value(Token::of(), LifecycleLog::default()))
	.observe("theme")
	.on("increment", |logic: &mut CounterLogic, _event, payload| {
		let step = payload.as_i64().unwrap_or(1) as i32;
		logic.state.set_value(logic.state.value() + step);
	})
}

fn counter_log(element: &ComponentElement<i32, CounterLogic>) -> Rc<LifecycleLog> {
	element
		.injector()
		.get(Token::<LifecycleLog>::of())
		.expect("log is bound on the definition")
}

// -- rendering lifecycle -----------------------------------------------------

#[rstest]
fn test_nothing_renders_before_connect() {
	let (element, renderer, _) = mount(counter_def());

	assert_eq!(element.status(), Status::Unattached);
	element.state().set_value(5);

	assert!(renderer.bodies().is_empty());
}

#[rstest]
fn test_connect_renders_once_then_once_per_commit() {
	let (element, renderer, _) = mount(counter_def());

	element.connect();
	element.state().set_value(1);
	element.state().set_value(2);

	assert_eq!(renderer.bodies(), ["<p>0</p>", "<p>1</p>", "<p>2</p>"]);
}

#[rstest]
fn test_reconnect_renders_current_state_not_default() {
	let (element, renderer, _) = mount(counter_def());

	element.connect();
	element.state().set_value(5);
	element.disconnect();
	assert_eq!(element.status(), Status::Disconnected);

	// Commits while detached still land, silently.
	element.state().set_value(9);
	assert_eq!(renderer.bodies(), ["<p>0</p>", "<p>5</p>"]);

	element.connect();
	assert_eq!(renderer.bodies(), ["<p>0</p>", "<p>5</p>", "<p>9</p>"]);

	let log = counter_log(&element);
	assert_eq!(log.entries(), ["connected", "disconnected", "connected"]);
}

#[rstest]
fn test_repeated_connect_is_a_noop() {
	let (element, renderer, _) = mount(counter_def());

	element.connect();
	element.connect();

	assert_eq!(renderer.bodies(), ["<p>0</p>"]);
	assert_eq!(counter_log(&element).entries(), ["connected"]);
}

#[rstest]
fn test_style_fragment_is_merged_into_every_render() {
	let def = counter_def().style(Template::new("<style>p { margin: 0 }</style>"));
	let (element, renderer, _) = mount(def);

	element.connect();
	element.state().set_value(3);

	assert_eq!(
		renderer.bodies(),
		[
			"<style>p { margin: 0 }</style><p>0</p>",
			"<style>p { margin: 0 }</style><p>3</p>",
		]
	);
}

// -- event flow --------------------------------------------------------------

#[rstest]
fn test_host_event_runs_handlers_and_rerenders() {
	let (element, renderer, _) = mount(counter_def());
	element.connect();

	// The host routes its native event into the last rendered frame.
	renderer.last_frame().trigger("click", &Event::named("click"));

	assert_eq!(element.state().value(), 1);
	assert_eq!(renderer.bodies(), ["<p>0</p>", "<p>1</p>"]);
}

#[rstest]
fn test_handlers_sharing_an_event_run_in_registration_order() {
	let order = Rc::new(RefCell::new(Vec::new()));
	let def = {
		let first = order.clone();
		let second = order.clone();
		counter_def()
			.on("increment", move |_: &mut CounterLogic, _, _| {
				first.borrow_mut().push("first")
			})
			.on("increment", move |_: &mut CounterLogic, _, _| {
				second.borrow_mut().push("second")
			})
	};
	let (element, renderer, _) = mount(def);
	element.connect();

	renderer.last_frame().trigger("click", &Event::named("click"));

	// The definition's own handler ran too, then the two extras.
	assert_eq!(element.state().value(), 1);
	assert_eq!(order.borrow().as_slice(), ["first", "second"]);
}

struct EmitterLogic;

impl Injectable for EmitterLogic {
	fn construct(_injector: &Injector) -> Result<Self, InjectError> {
		Ok(Self)
	}
}

impl ComponentLogic for EmitterLogic {}

#[rstest]
fn test_dispatch_binding_emits_custom_event_through_target() {
	let def = ComponentDef::new("app-emitter", 0, |ctx: &RenderCtx<i32>| {
		let emit = ctx.dispatch("count-changed", EventInit::with_detail(json!({ "count": 5 })));
		Template::new("<button>notify</button>").bind("click", Rc::new(move |_: &Event| emit()))
	});
	let (element, renderer, target) = mount::<i32, EmitterLogic>(def);
	element.connect();

	assert!(target.events.borrow().is_empty());
	renderer.last_frame().trigger("click", &Event::named("click"));

	let events = target.events.borrow();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].name, "count-changed");
	assert_eq!(events[0].init.detail["count"], 5);
}

// -- attributes --------------------------------------------------------------

#[rstest]
fn test_only_observed_attributes_reach_the_logic() {
	let (element, _, _) = mount(counter_def());
	element.connect();

	element.attribute_changed("theme", None, Some("dark"));
	element.attribute_changed("class", None, Some("wide"));

	assert_eq!(
		counter_log(&element).entries(),
		["connected", "attr theme: None -> Some(\"dark\")"]
	);
}

// -- properties --------------------------------------------------------------

#[derive(Default)]
struct ChangeLog(RefCell<Vec<PropChange>>);

struct WidgetLogic {
	label: Prop<String>,
	changes: Rc<ChangeLog>,
}

impl Injectable for WidgetLogic {
	fn construct(injector: &Injector) -> Result<Self, InjectError> {
		Ok(Self {
			label: Prop::new("label", String::new()).with_validator(|value: &String| {
				if value.is_empty() {
					Err(String::from("label must not be empty"))
				} else {
					Ok(())
				}
			}),
			changes: injector.get(Token::of())?,
		})
	}
}

impl ComponentLogic for WidgetLogic {
	fn on_prop_changes(&mut self, change: &PropChange) {
		self.changes.0.borrow_mut().push(change.clone());
	}
}

fn widget_def() -> ComponentDef<i32, WidgetLogic> {
	ComponentDef::new("app-widget", 0, |_: &RenderCtx<i32>| Template::new("<widget/>"))
		.provide(ProviderEntry::value(Token::of(), ChangeLog::default()))
		.prop(PropSpec::new(
			"label",
			|logic: &WidgetLogic| &logic.label,
			|logic: &mut WidgetLogic| &mut logic.label,
		))
}

#[rstest]
fn test_rejected_then_accepted_write_fires_one_change() {
	let (element, _, _) = mount(widget_def());
	let changes = element
		.injector()
		.get(Token::<ChangeLog>::of())
		.expect("change log is bound on the definition");

	let err = element.set_prop("label", json!("")).unwrap_err();
	assert!(matches!(
		err,
		ComponentError::Property(PropertyError::Validation { key: "label", .. })
	));
	assert!(changes.0.borrow().is_empty());

	element.set_prop("label", json!("Widget A")).unwrap();

	let recorded = changes.0.borrow();
	assert_eq!(recorded.len(), 1);
	assert_eq!(recorded[0].value, json!("Widget A"));
	assert!(recorded[0].first_change);
	drop(recorded);

	assert_eq!(element.get_prop("label").unwrap(), json!("Widget A"));
}

#[rstest]
fn test_reassigning_equal_prop_value_fires_nothing() {
	let (element, _, _) = mount(widget_def());
	let changes = element.injector().get(Token::<ChangeLog>::of()).unwrap();

	element.set_prop("label", json!("same")).unwrap();
	element.set_prop("label", json!("same")).unwrap();

	assert_eq!(changes.0.borrow().len(), 1);
}

#[rstest]
fn test_unknown_property_is_an_error() {
	let (element, _, _) = mount(widget_def());

	let err = element.set_prop("missing", json!(1)).unwrap_err();

	assert_eq!(
		err,
		ComponentError::Property(PropertyError::UnknownProperty {
			key: String::from("missing"),
		})
	);
}

#[rstest]
fn test_mistyped_host_value_is_rejected() {
	let (element, _, _) = mount(widget_def());

	let err = element.set_prop("label", Value::Bool(true)).unwrap_err();

	assert!(matches!(
		err,
		ComponentError::Property(PropertyError::InvalidValue { key: "label", .. })
	));
}

// -- dependency injection through the element --------------------------------

#[derive(Debug, PartialEq)]
struct AppConfig {
	api_base: &'static str,
}

#[rstest]
#[serial]
fn test_element_injector_falls_through_to_the_root() {
	clear_root();
	bootstrap_root(Injector::builder().provide(ProviderEntry::value(
		Token::of(),
		AppConfig {
			api_base: "/api/v1",
		},
	)))
	.unwrap();

	let (element, _, _) = mount(counter_def());
	let via_element = element.injector().get(Token::<AppConfig>::of()).unwrap();
	let via_root = girder_di::root_injector()
		.get(Token::<AppConfig>::of())
		.unwrap();

	assert!(Rc::ptr_eq(&via_element, &via_root));
	clear_root();
}

#[rstest]
fn test_sibling_elements_have_independent_state() {
	let left = mount(counter_def());
	let right = mount(counter_def());

	left.0.connect();
	right.0.connect();
	left.0.state().set_value(7);

	assert!(!Rc::ptr_eq(&left.0.state(), &right.0.state()));
	assert_eq!(right.0.state().value(), 0);
	assert_eq!(right.1.bodies(), ["<p>0</p>"]);
}

// -- registry ----------------------------------------------------------------

#[rstest]
#[serial]
fn test_define_create_and_drive_through_the_erased_surface() {
	clear_registry();
	define(counter_def()).unwrap();

	let renderer = Rc::new(RecordingRenderer::default());
	let target = Rc::new(RecordingTarget::default());
	let element = create_element("app-counter", renderer.clone(), target).unwrap();

	assert_eq!(element.tag(), "app-counter");
	assert_eq!(element.status(), Status::Unattached);
	element.connect();
	assert_eq!(element.status(), Status::Connected);
	assert_eq!(renderer.bodies(), ["<p>0</p>"]);

	clear_registry();
}

#[rstest]
#[serial]
fn test_duplicate_tag_is_rejected() {
	clear_registry();
	define(counter_def()).unwrap();

	let err = define(counter_def()).unwrap_err();
	assert_eq!(
		err,
		ComponentError::DuplicateTag {
			tag: String::from("app-counter"),
		}
	);

	clear_registry();
}

#[rstest]
#[serial]
fn test_unknown_tag_is_rejected() {
	clear_registry();

	let renderer = Rc::new(RecordingRenderer::default());
	let target = Rc::new(RecordingTarget::default());
	let err = create_element("app-missing", renderer, target).unwrap_err();

	assert_eq!(
		err,
		ComponentError::UnknownTag {
			tag: String::from("app-missing"),
		}
	);
}
