#![doc(html_root_url = "https://docs.rs/hover-lift/0.1.0")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod bind;
pub mod lift;
pub mod ready;
pub mod selector;

pub use bind::{BindReport, HoverBinder, HoverConfig};
pub use lift::{HoverEvent, Lift, LiftState};
pub use ready::{install, Installation};
pub use selector::InteractiveSelector;

/// Installs the default binder on `window.document`, like a page script would.
///
/// # Errors
///
/// Iff there is no document or [`install`] fails.
#[cfg(feature = "start")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| wasm_bindgen::JsValue::from_str("hover-lift: No document to install into."))?;
	install(&document, HoverBinder::new(HoverConfig::default()))?;
	Ok(())
}
