//! DOM-free validation of a booking form submission.
//!
//! Checks run in a fixed order and stop at the first failure, so a submission is only ever rejected for one reason.

use crate::booking_window::{self, BookingWindow, Placement};
use thiserror::Error;

/// Which checks a submission has to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruleset {
	/// Only require that every field is filled in.
	Presence,
	/// Additionally require a positive duration and a start date inside the booking window.
	Strict,
}

impl Default for Ruleset {
	fn default() -> Self {
		Self::Strict
	}
}

/// Raw field values as read from the page.
///
/// [`None`] stands for a control that is missing from the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingFields<'a> {
	pub room_type: Option<&'a str>,
	pub start_date: Option<&'a str>,
	pub duration_value: Option<&'a str>,
}

/// Why a submission was blocked.
///
/// The [`Display`](core::fmt::Display) output is the message shown to the visitor.
#[allow(clippy::non_ascii_literal)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
	#[error("Заполните все поля формы!")]
	MissingFields,

	#[error("Длительность должна быть положительным числом")]
	InvalidDuration,

	#[error("Укажите дату в формате ГГГГ-ММ-ДД")]
	UnreadableDate,

	#[error("Нельзя выбирать прошедшие даты")]
	PastDate,

	#[error("Максимальный период бронирования - {0} дней")]
	BeyondWindow(u16),
}

/// Validates `fields` against `ruleset`.
///
/// `window` only matters for [`Ruleset::Strict`].
///
/// # Errors
///
/// Returns the first [`Rejection`] in this order:
/// presence, duration, date format, past date, future range.
pub fn check(fields: &BookingFields<'_>, ruleset: Ruleset, window: &BookingWindow) -> Result<(), Rejection> {
	fn filled(value: Option<&str>) -> Option<&str> {
		value.filter(|value| !value.is_empty())
	}

	let (_room_type, start_date, duration_value) = match (filled(fields.room_type), filled(fields.start_date), filled(fields.duration_value)) {
		(Some(room_type), Some(start_date), Some(duration_value)) => (room_type, start_date, duration_value),
		_ => return Err(Rejection::MissingFields),
	};

	if ruleset == Ruleset::Presence {
		return Ok(());
	}

	match parse_leading_integer(duration_value) {
		Some(duration) if duration > 0 => (),
		_ => return Err(Rejection::InvalidDuration),
	}

	let start_date = booking_window::parse_iso(start_date).ok_or(Rejection::UnreadableDate)?;
	match window.locate(start_date) {
		Placement::Before => Err(Rejection::PastDate),
		Placement::Within => Ok(()),
		Placement::After => Err(Rejection::BeyondWindow(window.days())),
	}
}

/// Reads the integer at the start of `text`, ignoring whatever follows it.
///
/// Leading whitespace and a single sign are accepted, as is a `0x`/`0X` prefix for hexadecimal digits.
/// Magnitudes that don't fit saturate.
/// Returns [`None`] if there are no digits to read.
#[must_use]
pub fn parse_leading_integer(text: &str) -> Option<i64> {
	let text = text.trim_start();
	let (negative, unsigned) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};

	let (radix, unsigned) = match unsigned.get(..2) {
		Some("0x") | Some("0X") => (16, &unsigned[2..]),
		_ => (10, unsigned),
	};

	let end = unsigned.find(|c: char| !c.is_digit(radix)).unwrap_or_else(|| unsigned.len());
	let digits = &unsigned[..end];
	if digits.is_empty() {
		return None;
	}

	let magnitude = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
	Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn window() -> BookingWindow {
		BookingWindow::starting(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), 30)
	}

	fn fields<'a>(room_type: &'a str, start_date: &'a str, duration_value: &'a str) -> BookingFields<'a> {
		BookingFields {
			room_type: Some(room_type),
			start_date: Some(start_date),
			duration_value: Some(duration_value),
		}
	}

	#[test]
	fn accepts_a_complete_booking_for_today() {
		assert_eq!(check(&fields("Suite", "2026-10-18", "2"), Ruleset::Strict, &window()), Ok(()));
	}

	#[test]
	fn empty_and_missing_fields_are_the_same() {
		for ruleset in [Ruleset::Presence, Ruleset::Strict] {
			assert_eq!(check(&fields("", "2026-10-18", "2"), ruleset, &window()), Err(Rejection::MissingFields));
			assert_eq!(check(&fields("Suite", "", "2"), ruleset, &window()), Err(Rejection::MissingFields));
			assert_eq!(check(&fields("Suite", "2026-10-18", ""), ruleset, &window()), Err(Rejection::MissingFields));

			let missing = BookingFields {
				room_type: Some("Suite"),
				start_date: None,
				duration_value: Some("2"),
			};
			assert_eq!(check(&missing, ruleset, &window()), Err(Rejection::MissingFields));
			assert_eq!(check(&BookingFields::default(), ruleset, &window()), Err(Rejection::MissingFields));
		}
	}

	#[test]
	fn presence_ignores_values() {
		assert_eq!(check(&fields("Suite", "yesterday", "-5"), Ruleset::Presence, &window()), Ok(()));
		assert_eq!(check(&fields("Suite", "2020-01-01", "two"), Ruleset::Presence, &window()), Ok(()));
	}

	#[test]
	fn duration_must_be_positive() {
		for duration in ["0", "-1", "abc", "  ", "-", "+0", "0x", "0x0", "-0x10"] {
			assert_eq!(
				check(&fields("Suite", "2026-10-18", duration), Ruleset::Strict, &window()),
				Err(Rejection::InvalidDuration),
				"{:?}",
				duration
			);
		}
		for duration in ["1", " 7", "+3", "2 days", "1.5", "0x10", "99999999999999999999"] {
			assert_eq!(check(&fields("Suite", "2026-10-18", duration), Ruleset::Strict, &window()), Ok(()), "{:?}", duration);
		}
	}

	#[test]
	fn duration_is_checked_before_the_date() {
		assert_eq!(check(&fields("Suite", "2000-01-01", "0"), Ruleset::Strict, &window()), Err(Rejection::InvalidDuration));
	}

	#[test]
	fn rejects_past_dates() {
		assert_eq!(check(&fields("Suite", "2026-10-17", "2"), Ruleset::Strict, &window()), Err(Rejection::PastDate));
		assert_eq!(check(&fields("Suite", "1999-12-31", "2"), Ruleset::Strict, &window()), Err(Rejection::PastDate));
	}

	#[test]
	fn rejects_dates_past_the_window() {
		assert_eq!(check(&fields("Suite", "2026-11-17", "2"), Ruleset::Strict, &window()), Ok(()));
		assert_eq!(check(&fields("Suite", "2026-11-18", "2"), Ruleset::Strict, &window()), Err(Rejection::BeyondWindow(30)));
	}

	#[test]
	fn rejects_unreadable_dates() {
		assert_eq!(check(&fields("Suite", "18.10.2026", "2"), Ruleset::Strict, &window()), Err(Rejection::UnreadableDate));
		assert_eq!(check(&fields("Suite", "2026-02-30", "2"), Ruleset::Strict, &window()), Err(Rejection::UnreadableDate));
	}

	#[test]
	fn messages() {
		assert_eq!(Rejection::MissingFields.to_string(), "Заполните все поля формы!");
		assert_eq!(Rejection::InvalidDuration.to_string(), "Длительность должна быть положительным числом");
		assert_eq!(Rejection::PastDate.to_string(), "Нельзя выбирать прошедшие даты");
		assert_eq!(Rejection::BeyondWindow(30).to_string(), "Максимальный период бронирования - 30 дней");
	}

	#[test]
	fn leading_integers() {
		assert_eq!(parse_leading_integer("42"), Some(42));
		assert_eq!(parse_leading_integer("\t-3 nights"), Some(-3));
		assert_eq!(parse_leading_integer("+8"), Some(8));
		assert_eq!(parse_leading_integer("1e3"), Some(1));
		assert_eq!(parse_leading_integer("--1"), None);
		assert_eq!(parse_leading_integer("x1"), None);
		assert_eq!(parse_leading_integer(""), None);
		assert_eq!(parse_leading_integer("-99999999999999999999"), Some(-i64::MAX));
	}

	#[test]
	fn hexadecimal_prefix() {
		assert_eq!(parse_leading_integer("0x10"), Some(16));
		assert_eq!(parse_leading_integer("0XfF"), Some(255));
		assert_eq!(parse_leading_integer(" -0x1g"), Some(-1));
		assert_eq!(parse_leading_integer("0x"), None);
		assert_eq!(parse_leading_integer("0xg"), None);
		assert_eq!(parse_leading_integer("0x8000000000000000"), Some(i64::MAX));
	}
}
