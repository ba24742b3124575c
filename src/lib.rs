//! Client-side guard for a room-booking page.
//!
//! [`page::install`] attaches a [`BookingFormGuard`](`guard::BookingFormGuard`) to the booking form,
//! which cancels submissions that fail the configured [`rules`], and animates the alternatives panel via [`decorator`].
//!
//! All of this is a convenience for visitors only. It can be bypassed trivially and doesn't replace server-side validation.

#![doc(html_root_url = "https://docs.rs/booking-guard/0.1.0")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod booking_window;
pub mod clock;
pub mod config;
pub mod decorator;
pub mod dom;
pub mod guard;
pub mod listener;
pub mod notify;
pub mod page;
pub mod rules;

pub use config::Config;

/// Installs the default configuration as soon as the module is instantiated.
///
/// # Errors
///
/// Iff installation fails; The error is thrown into JavaScript.
#[cfg(feature = "auto-install")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
	page::install(Config::default())?.keep_alive();
	Ok(())
}
