use chrono::NaiveDate;
use core::convert::TryFrom;
use wasm_bindgen::UnwrapThrowExt;

/// Source of the current calendar date.
pub trait Clock {
	fn today(&self) -> NaiveDate;
}

/// Reads the visitor's local date through [***Date***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Date).
///
/// The time of day is discarded, so "today" starts at local midnight.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;
impl Clock for BrowserClock {
	fn today(&self) -> NaiveDate {
		let now = js_sys::Date::new_0();
		let year = i32::try_from(now.get_full_year()).expect_throw("booking-guard: Year out of range");
		NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()).expect_throw("booking-guard: Browser reported an invalid date")
	}
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);
impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.0
	}
}
