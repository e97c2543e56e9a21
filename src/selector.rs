//! Which elements count as interactive.

use core::fmt::{self, Display, Formatter};
use std::error::Error;

/// A union of tag names and marker classes, rendered as one CSS selector list.
///
/// The [`Default`] matches hyperlinks, buttons and anything with the `coach-card-btn` marker class.
/// Pages opt further elements in by adding that class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveSelector {
	tags: Vec<String>,
	marker_classes: Vec<String>,
}
impl Default for InteractiveSelector {
	fn default() -> Self {
		Self {
			tags: vec!["a".to_owned(), "button".to_owned()],
			marker_classes: vec!["coach-card-btn".to_owned()],
		}
	}
}
impl InteractiveSelector {
	/// A selector that matches nothing.
	#[must_use]
	pub fn empty() -> Self {
		Self {
			tags: Vec::new(),
			marker_classes: Vec::new(),
		}
	}

	/// Adds a tag name (like `a` or `summary`).
	///
	/// # Errors
	///
	/// Iff `tag` isn't a plain CSS identifier.
	pub fn with_tag(mut self, tag: &str) -> Result<Self, InvalidIdentifier> {
		validate(tag)?;
		let tag = tag.to_ascii_lowercase();
		if !self.tags.contains(&tag) {
			self.tags.push(tag);
		}
		Ok(self)
	}

	/// Adds a marker class, without the leading `.`.
	///
	/// # Errors
	///
	/// Iff `class` isn't a plain CSS identifier.
	pub fn with_marker_class(mut self, class: &str) -> Result<Self, InvalidIdentifier> {
		validate(class)?;
		if !self.marker_classes.iter().any(|c| c == class) {
			self.marker_classes.push(class.to_owned());
		}
		Ok(self)
	}

	#[must_use]
	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	#[must_use]
	pub fn marker_classes(&self) -> &[String] {
		&self.marker_classes
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tags.is_empty() && self.marker_classes.is_empty()
	}

	/// Renders the selector list, tags first, e.g. `a, button, .coach-card-btn`.
	///
	/// An empty selector renders as an empty [`String`], which `querySelectorAll` would reject.
	#[must_use]
	pub fn to_css(&self) -> String {
		self.to_string()
	}
}
impl Display for InteractiveSelector {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let classes = self.marker_classes.iter().map(|class| (".", class));
		for (i, (prefix, name)) in self.tags.iter().map(|tag| ("", tag)).chain(classes).enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}{}", prefix, name)?;
		}
		Ok(())
	}
}

/// A tag name or class that can't be written into a selector list without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentifier(pub String);
impl Display for InvalidIdentifier {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "not a plain CSS identifier: {:?}", self.0)
	}
}
impl Error for InvalidIdentifier {}

fn validate(identifier: &str) -> Result<(), InvalidIdentifier> {
	let bytes = identifier.as_bytes();
	let valid = match bytes {
		[] | [b'0'..=b'9', ..] | [b'-'] | [b'-', b'0'..=b'9' | b'-', ..] => false,
		_ => bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_'),
	};
	if valid {
		Ok(())
	} else {
		Err(InvalidIdentifier(identifier.to_owned()))
	}
}
