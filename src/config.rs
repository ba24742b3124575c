//! Which elements to look for and which behaviour to apply to them.
//!
//! The defaults match the booking page's markup.

use crate::rules::Ruleset;

/// Element ids and rules for [`BookingFormGuard`](`crate::guard::BookingFormGuard`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
	pub form_id: String,
	pub room_type_id: String,
	pub start_date_id: String,
	pub duration_value_id: String,
	pub ruleset: Ruleset,
	/// How many days past today a booking may start on.
	pub window_days: u16,
	/// Whether to set `min`, `max` and an initial value on the start date input once the page is ready.
	pub clamp_date_input: bool,
}

impl Default for GuardConfig {
	fn default() -> Self {
		Self {
			form_id: "booking-form".to_owned(),
			room_type_id: "room_type".to_owned(),
			start_date_id: "start_date".to_owned(),
			duration_value_id: "duration_value".to_owned(),
			ruleset: Ruleset::Strict,
			window_days: 30,
			clamp_date_input: true,
		}
	}
}

/// Presentational effect applied to the alternatives panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffect {
	/// Immediately give the panel a highlighted border and background.
	Highlight,
	/// Fade and slide the panel in after `delay_ms`.
	Reveal { delay_ms: u32 },
}

impl Default for PanelEffect {
	fn default() -> Self {
		Self::Reveal { delay_ms: 300 }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorConfig {
	pub selector: String,
	pub effect: PanelEffect,
}

impl Default for DecoratorConfig {
	fn default() -> Self {
		Self {
			selector: ".alternatives".to_owned(),
			effect: PanelEffect::default(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	pub guard: GuardConfig,
	pub decorator: DecoratorConfig,
}

impl Config {
	/// Presence checks only, no date input clamp and a static panel highlight.
	#[must_use]
	pub fn lenient() -> Self {
		Self::default()
			.with_ruleset(Ruleset::Presence)
			.with_date_input_clamp(false)
			.with_panel_effect(PanelEffect::Highlight)
	}

	#[must_use]
	pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
		self.guard.ruleset = ruleset;
		self
	}

	#[must_use]
	pub fn with_window_days(mut self, window_days: u16) -> Self {
		self.guard.window_days = window_days;
		self
	}

	#[must_use]
	pub fn with_date_input_clamp(mut self, clamp_date_input: bool) -> Self {
		self.guard.clamp_date_input = clamp_date_input;
		self
	}

	#[must_use]
	pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
		self.guard.form_id = form_id.into();
		self
	}

	#[must_use]
	pub fn with_panel_selector(mut self, selector: impl Into<String>) -> Self {
		self.decorator.selector = selector.into();
		self
	}

	#[must_use]
	pub fn with_panel_effect(mut self, effect: PanelEffect) -> Self {
		self.decorator.effect = effect;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_booking_page() {
		let config = Config::default();
		assert_eq!(config.guard.form_id, "booking-form");
		assert_eq!(config.guard.room_type_id, "room_type");
		assert_eq!(config.guard.start_date_id, "start_date");
		assert_eq!(config.guard.duration_value_id, "duration_value");
		assert_eq!(config.guard.ruleset, Ruleset::Strict);
		assert_eq!(config.guard.window_days, 30);
		assert!(config.guard.clamp_date_input);
		assert_eq!(config.decorator.selector, ".alternatives");
		assert_eq!(config.decorator.effect, PanelEffect::Reveal { delay_ms: 300 });
	}

	#[test]
	fn lenient() {
		let config = Config::lenient();
		assert_eq!(config.guard.ruleset, Ruleset::Presence);
		assert!(!config.guard.clamp_date_input);
		assert_eq!(config.decorator.effect, PanelEffect::Highlight);
		assert_eq!(config.guard.form_id, "booking-form");
	}
}
