use crate::{
	lift::{HoverEvent, Lift, LiftState},
	selector::InteractiveSelector,
};
use js_sys::Function;
use tracing::{error, info, instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue, UnwrapThrowExt};
use web_sys::{AddEventListenerOptions, CssStyleDeclaration, Document, Element, EventTarget, HtmlElement, NodeList, SvgElement};

/// What a [`HoverBinder`] binds to and how far it lifts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverConfig {
	pub selector: InteractiveSelector,
	pub lift: Lift,
}

/// The outcome of one [`HoverBinder::bind`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindReport {
	/// Elements matched by the selector, in document order.
	pub matched: usize,
	/// Event listeners attached. Two per bound element.
	pub listeners: usize,
	/// Matched elements without inline style (outside the HTML and SVG namespaces). These get no listeners.
	pub skipped: usize,
}
impl BindReport {
	#[must_use]
	pub fn bound(&self) -> usize {
		self.matched.saturating_sub(self.skipped)
	}
}

/// Something [`HoverBinder::bind`] can search for interactive elements.
pub trait QueryRoot {
	/// [***querySelectorAll***](https://developer.mozilla.org/en-US/docs/Web/API/Document/querySelectorAll)
	///
	/// # Errors
	///
	/// Iff `selectors` is rejected by the browser.
	fn query_all(&self, selectors: &str) -> Result<NodeList, JsValue>;
}
impl QueryRoot for Document {
	fn query_all(&self, selectors: &str) -> Result<NodeList, JsValue> {
		self.query_selector_all(selectors)
	}
}
impl QueryRoot for Element {
	fn query_all(&self, selectors: &str) -> Result<NodeList, JsValue> {
		self.query_selector_all(selectors)
	}
}

/// Owns the two event listeners shared by every element it binds.
///
/// Each listener finds its element through [***currentTarget***](https://developer.mozilla.org/en-US/docs/Web/API/Event/currentTarget),
/// so events on one element never touch another element's style.
///
/// # Lifetime
///
/// Bound elements keep referring to this instance's closures.
/// If it is dropped, their listeners start throwing errors into [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript).
///
/// Prefer [`install`](`crate::ready::install`), which keeps its binder alive for the rest of the page's lifetime.
/// When calling [`bind`](`HoverBinder::bind`) directly, [`leak`](`HoverBinder::leak`) the binder first
/// unless you can guarantee it outlives every bound element.
#[derive(Debug)]
pub struct HoverBinder {
	selector: String,
	lift: Lift,
	enter: Closure<dyn Fn(web_sys::Event)>,
	leave: Closure<dyn Fn(web_sys::Event)>,
	listener_options: AddEventListenerOptions,
}
impl HoverBinder {
	#[must_use]
	#[instrument]
	pub fn new(config: HoverConfig) -> Self {
		let mut listener_options = AddEventListenerOptions::new();
		listener_options.passive(true);

		Self {
			selector: config.selector.to_css(),
			lift: config.lift,
			enter: transition_handler(HoverEvent::Enter, config.lift),
			leave: transition_handler(HoverEvent::Leave, config.lift),
			listener_options,
		}
	}

	/// Keeps this binder (and with it the listeners of every element it binds) alive until the page unloads.
	#[must_use]
	pub fn leak(self) -> &'static Self {
		Box::leak(Box::new(self))
	}

	/// The rendered selector list this binder queries with.
	#[must_use]
	pub fn selector(&self) -> &str {
		&self.selector
	}

	#[must_use]
	pub fn lift(&self) -> Lift {
		self.lift
	}

	/// Attaches `mouseenter` and `mouseleave` listeners to each element below `root` that currently matches the selector.
	///
	/// Elements inserted later are not bound. Binding the same element again is a no-op,
	/// since the listeners are the same functions with the same options.
	///
	/// # Errors
	///
	/// Iff the browser rejects the selector or refuses to add a listener.
	#[instrument(skip(self, root), fields(selector = %self.selector))]
	pub fn bind(&self, root: &impl QueryRoot) -> Result<BindReport, JsValue> {
		let mut report = BindReport::default();
		if self.selector.is_empty() {
			trace!("Empty selector. Nothing to bind.");
			return Ok(report);
		}

		let matched = root.query_all(&self.selector)?;
		for i in 0..matched.length() {
			let element: Element = matched
				.get(i)
				.expect_throw("hover-lift bug: `NodeList` shorter than its length")
				.unchecked_into();
			report.matched += 1;

			if inline_style(&element).is_none() {
				warn!("Skipping {} without inline style.", describe(&element));
				report.skipped += 1;
				continue;
			}

			let target: &EventTarget = element.as_ref();
			for (event, closure) in [(HoverEvent::Enter, &self.enter), (HoverEvent::Leave, &self.leave)] {
				target.add_event_listener_with_callback_and_add_event_listener_options(
					event.event_type(),
					closure.as_ref().unchecked_ref::<Function>(),
					&self.listener_options,
				)?;
				report.listeners += 1;
			}
			trace!("Bound {}.", describe(&element));
		}

		info!(matched = report.matched, listeners = report.listeners, skipped = report.skipped, "Bound hover lift.");
		Ok(report)
	}

	/// Reads `element`'s current [`LiftState`] from its inline style.
	///
	/// Elements that were never hovered have no inline transform and yield [`None`], as do foreign transforms.
	#[must_use]
	pub fn state_of(&self, element: &Element) -> Option<LiftState> {
		let transform = inline_style(element)?.get_property_value("transform").ok()?;
		LiftState::parse(&transform, self.lift)
	}
}

fn transition_handler(event: HoverEvent, lift: Lift) -> Closure<dyn Fn(web_sys::Event)> {
	let state = LiftState::default().after(event);
	let transform = state.transform(lift);
	Closure::wrap(Box::new(move |dom_event: web_sys::Event| {
		let span = trace_span!("transition_handler", event = event.event_type(), %state);
		let _enter = span.enter();

		let target = match dom_event.current_target() {
			Some(target) => target,
			None => return error!("`{}` event without current target. Ignoring.", event.event_type()),
		};
		let style = match inline_style(target.unchecked_ref::<Element>()) {
			Some(style) => style,
			None => return error!("Current target of `{}` event has no inline style. Ignoring.", event.event_type()),
		};
		if let Err(error) = style.set_property("transform", &transform) {
			error!("Failed to set transform: {:?}", error);
		}
	}) as Box<dyn Fn(web_sys::Event)>)
}

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Checks the namespace rather than `instanceof`, which fails for elements of other frames.
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
	match element.namespace_uri().as_deref() {
		Some(HTML_NAMESPACE) => Some(element.unchecked_ref::<HtmlElement>().style()),
		Some(SVG_NAMESPACE) => Some(element.unchecked_ref::<SvgElement>().style()),
		_ => None,
	}
}

fn describe(element: &Element) -> String {
	if cfg!(feature = "dangerous-logging") {
		format!("<{} id={:?} class={:?}>", element.tag_name(), element.id(), element.class_name())
	} else {
		format!("<{}>", element.tag_name())
	}
}
