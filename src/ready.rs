//! Binding once the document's markup has been parsed.

use crate::bind::{BindReport, HoverBinder};
use js_sys::Function;
use tracing::{error, info, instrument, trace};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document};

/// How [`install`] went about binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation {
	/// The document was still loading. Binding happens on [***DOMContentLoaded***](https://developer.mozilla.org/en-US/docs/Web/API/Document/DOMContentLoaded_event).
	Deferred,
	/// The markup was already parsed, so binding happened right away.
	Immediate(BindReport),
}

/// Binds `binder` to `document` as soon as its markup is parsed, exactly once.
///
/// Wasm modules often finish loading after ***DOMContentLoaded*** has fired,
/// in which case ([***readyState***](https://developer.mozilla.org/en-US/docs/Web/API/Document/readyState) isn't `"loading"`)
/// the binding is done immediately instead.
///
/// `binder` is leaked, as the page's listeners refer to it for as long as the page exists.
///
/// # Errors
///
/// Iff the listener can't be added or, when binding immediately, [`HoverBinder::bind`] fails.
#[instrument(skip(document, binder), fields(selector = binder.selector()))]
pub fn install(document: &Document, binder: HoverBinder) -> Result<Installation, JsValue> {
	let binder = binder.leak();

	if document.ready_state() != "loading" {
		trace!("Document already parsed. Binding immediately.");
		return binder.bind(document).map(Installation::Immediate);
	}

	let parsed_document = document.clone();
	let on_parsed = Closure::once_into_js(move |_: web_sys::Event| match binder.bind(&parsed_document) {
		Ok(report) => info!("Bound {} element(s) after DOMContentLoaded.", report.bound()),
		Err(error) => error!("Failed to bind after DOMContentLoaded: {:?}", error),
	});

	let mut options = AddEventListenerOptions::new();
	options.once(true).passive(true);
	document.add_event_listener_with_callback_and_add_event_listener_options("DOMContentLoaded", on_parsed.unchecked_ref::<Function>(), &options)?;
	trace!("Waiting for DOMContentLoaded.");
	Ok(Installation::Deferred)
}
