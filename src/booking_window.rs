use chrono::{Days, NaiveDate};

/// The ISO 8601 calendar date format used by `<input type="date">`.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// An inclusive range of calendar days a booking may start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
	earliest: NaiveDate,
	latest: NaiveDate,
	days: u16,
}

/// Where a date falls relative to a [`BookingWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
	Before,
	Within,
	After,
}

impl BookingWindow {
	/// Opens a window from `today` through `today + days`, both inclusive.
	///
	/// Saturates at [`NaiveDate::MAX`].
	#[must_use]
	pub fn starting(today: NaiveDate, days: u16) -> Self {
		Self {
			earliest: today,
			latest: today.checked_add_days(Days::new(days.into())).unwrap_or(NaiveDate::MAX),
			days,
		}
	}

	#[must_use]
	pub fn earliest(&self) -> NaiveDate {
		self.earliest
	}

	#[must_use]
	pub fn latest(&self) -> NaiveDate {
		self.latest
	}

	/// Length of the window in days past the first one.
	#[must_use]
	pub fn days(&self) -> u16 {
		self.days
	}

	#[must_use]
	pub fn locate(&self, date: NaiveDate) -> Placement {
		if date < self.earliest {
			Placement::Before
		} else if date > self.latest {
			Placement::After
		} else {
			Placement::Within
		}
	}
}

/// Formats `date` the way date inputs expect their `value`, `min` and `max`.
#[must_use]
pub fn to_iso(date: NaiveDate) -> String {
	date.format(ISO_DATE).to_string()
}

/// Reads a `YYYY-MM-DD` calendar date.
#[must_use]
pub fn parse_iso(text: &str) -> Option<NaiveDate> {
	NaiveDate::parse_from_str(text, ISO_DATE).ok()
}
