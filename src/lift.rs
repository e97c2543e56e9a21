//! The per-element hover state and its encoding as an inline `transform`.

use core::{
	fmt::{self, Display, Formatter},
	num::NonZeroU16,
};

/// How far a hovered element is raised, in CSS pixels.
///
/// Never zero, as [`LiftState::Raised`] would then be indistinguishable from [`LiftState::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lift {
	pixels: NonZeroU16,
}
impl Lift {
	#[must_use]
	pub const fn new(pixels: NonZeroU16) -> Self {
		Self { pixels }
	}

	/// [`None`] iff `pixels` is zero.
	#[must_use]
	pub const fn pixels(pixels: u16) -> Option<Self> {
		match NonZeroU16::new(pixels) {
			Some(pixels) => Some(Self::new(pixels)),
			None => None,
		}
	}

	#[must_use]
	pub const fn get(self) -> u16 {
		self.pixels.get()
	}
}
impl Default for Lift {
	fn default() -> Self {
		match Self::pixels(2) {
			Some(lift) => lift,
			None => unreachable!(),
		}
	}
}

/// The two pointer events that drive a [`LiftState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverEvent {
	/// [***mouseenter***](https://developer.mozilla.org/en-US/docs/Web/API/Element/mouseenter_event)
	Enter,
	/// [***mouseleave***](https://developer.mozilla.org/en-US/docs/Web/API/Element/mouseleave_event)
	Leave,
}
impl HoverEvent {
	/// The DOM event type to listen for.
	#[must_use]
	pub const fn event_type(self) -> &'static str {
		match self {
			HoverEvent::Enter => "mouseenter",
			HoverEvent::Leave => "mouseleave",
		}
	}
}

/// Vertical offset of a bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiftState {
	Neutral,
	Raised,
}
impl Default for LiftState {
	fn default() -> Self {
		Self::Neutral
	}
}
impl LiftState {
	/// The state after `event`. The previous state doesn't matter, so repeated events are idempotent.
	#[must_use]
	pub const fn after(self, event: HoverEvent) -> Self {
		match event {
			HoverEvent::Enter => LiftState::Raised,
			HoverEvent::Leave => LiftState::Neutral,
		}
	}

	/// The inline `transform` value for this state.
	#[must_use]
	pub fn transform(self, lift: Lift) -> String {
		match self {
			LiftState::Neutral => "translateY(0)".to_owned(),
			LiftState::Raised => format!("translateY(-{}px)", lift.get()),
		}
	}

	/// Reads a state back from an inline `transform` value.
	///
	/// Browsers normalise `translateY(0)` to `translateY(0px)`, so units and surrounding whitespace are ignored.
	/// Anything that isn't exactly one of the two offsets for `lift` yields [`None`].
	#[must_use]
	#[allow(clippy::float_cmp)] // Both sides are small integers.
	pub fn parse(transform: &str, lift: Lift) -> Option<Self> {
		let argument = transform.trim().strip_prefix("translateY(")?.strip_suffix(')')?.trim();
		let number = argument.strip_suffix("px").unwrap_or(argument);
		if number != argument || is_zero_literal(number) {
			let offset: f64 = number.trim_end().parse().ok()?;
			if offset == 0.0 {
				Some(LiftState::Neutral)
			} else if offset == -f64::from(lift.get()) {
				Some(LiftState::Raised)
			} else {
				None
			}
		} else {
			None
		}
	}
}
impl Display for LiftState {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			LiftState::Neutral => "neutral",
			LiftState::Raised => "raised",
		})
	}
}

/// Unitless lengths are only valid when zero.
#[allow(clippy::float_cmp)]
fn is_zero_literal(number: &str) -> bool {
	number.parse::<f64>().map_or(false, |n| n == 0.0)
}
