use hover_lift::{selector::InvalidIdentifier, InteractiveSelector};

#[test]
fn default_matches_links_buttons_and_card_buttons() {
	let selector = InteractiveSelector::default();
	assert_eq!(selector.to_css(), "a, button, .coach-card-btn");
	assert_eq!(selector.tags(), ["a", "button"]);
	assert_eq!(selector.marker_classes(), ["coach-card-btn"]);
}

#[test]
fn empty() {
	let selector = InteractiveSelector::empty();
	assert!(selector.is_empty());
	assert_eq!(selector.to_css(), "");
}

#[test]
fn builds_in_insertion_order() {
	let selector = InteractiveSelector::empty()
		.with_marker_class("lift")
		.unwrap()
		.with_tag("SUMMARY")
		.unwrap()
		.with_marker_class("_card")
		.unwrap()
		.with_tag("a")
		.unwrap();
	assert_eq!(selector.to_string(), "summary, a, .lift, ._card");
}

#[test]
fn suppresses_duplicates() {
	let selector = InteractiveSelector::default()
		.with_tag("A")
		.unwrap()
		.with_marker_class("coach-card-btn")
		.unwrap();
	assert_eq!(selector, InteractiveSelector::default());
}

#[test]
fn rejects_non_identifiers() {
	for invalid in ["", "1a", "-", "-1", "--var", "a b", "a,b", ".btn", "a>b", "ä"] {
		assert_eq!(
			InteractiveSelector::empty().with_marker_class(invalid),
			Err(InvalidIdentifier(invalid.to_owned())),
			"{:?}",
			invalid
		);
		assert!(InteractiveSelector::empty().with_tag(invalid).is_err(), "{:?}", invalid);
	}
}

#[test]
fn accepts_leading_dash() {
	assert!(InteractiveSelector::empty().with_marker_class("-lift").is_ok());
}

#[test]
fn error_display() {
	assert_eq!(InvalidIdentifier("a b".to_owned()).to_string(), r#"not a plain CSS identifier: "a b""#);
}
