use crate::{
	booking_window::{self, BookingWindow},
	clock::Clock,
	config::GuardConfig,
	dom,
	listener::EventListener,
	notify::Notifier,
	rules::{self, BookingFields},
};
use chrono::NaiveDate;
use tracing::{debug, info, instrument, trace, trace_span, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlInputElement};

/// Field values read from the page during one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedFields {
	pub room_type: Option<String>,
	pub start_date: Option<String>,
	pub duration_value: Option<String>,
}
impl OwnedFields {
	#[must_use]
	pub fn as_fields(&self) -> BookingFields<'_> {
		BookingFields {
			room_type: self.room_type.as_deref(),
			start_date: self.start_date.as_deref(),
			duration_value: self.duration_value.as_deref(),
		}
	}
}

#[must_use]
pub fn read_fields(document: &Document, config: &GuardConfig) -> OwnedFields {
	OwnedFields {
		room_type: dom::control_value(document, &config.room_type_id),
		start_date: dom::control_value(document, &config.start_date_id),
		duration_value: dom::control_value(document, &config.duration_value_id),
	}
}

/// Restricts the start date input to the booking window and fills in `today` if it's empty.
///
/// This only guides the date picker. Submissions are still checked by [`BookingFormGuard`].
///
/// Returns the input, or [`None`] if the page has none.
#[instrument(skip(document))]
pub fn clamp_date_input(document: &Document, config: &GuardConfig, today: NaiveDate) -> Option<HtmlInputElement> {
	let input = match dom::input_by_id(document, &config.start_date_id) {
		Some(input) => input,
		None => {
			debug!("No start date input #{}; Skipping clamp.", config.start_date_id);
			return None;
		}
	};

	let window = BookingWindow::starting(today, config.window_days);
	let earliest = booking_window::to_iso(window.earliest());
	input.set_min(&earliest);
	input.set_max(&booking_window::to_iso(window.latest()));
	if input.value().is_empty() {
		input.set_value(&earliest);
	}
	trace!(min = %input.min(), max = %input.max(), "Clamped start date input.");
	Some(input)
}

/// Cancels submissions of the booking form that don't pass [`rules::check`].
///
/// The submit listener is removed again when this is dropped.
#[derive(Debug)]
pub struct BookingFormGuard {
	form: Element,
	submit: EventListener,
}
impl BookingFormGuard {
	/// Starts guarding the form with id [`GuardConfig::form_id`].
	///
	/// Returns [`None`] if the page has no such form.
	///
	/// # Errors
	///
	/// Iff the submit listener can't be added.
	#[instrument(skip(document, clock, notifier))]
	pub fn attach<C, N>(document: &Document, config: &GuardConfig, clock: C, notifier: N) -> Result<Option<Self>, JsValue>
	where
		C: Clock + 'static,
		N: Notifier + 'static,
	{
		let form = match document.get_element_by_id(&config.form_id) {
			Some(form) => form,
			None => {
				debug!("No booking form #{}; Nothing to guard.", config.form_id);
				return Ok(None);
			}
		};

		let document = document.clone();
		let config = config.clone();
		let submit = EventListener::new(form.as_ref(), "submit", move |event| {
			let span = trace_span!("booking_form_submit", form_id = %config.form_id);
			let _enter = span.enter();

			let fields = read_fields(&document, &config);
			let window = BookingWindow::starting(clock.today(), config.window_days);
			match rules::check(&fields.as_fields(), config.ruleset, &window) {
				Ok(()) => trace!("Submission passed; Letting the browser continue."),
				Err(rejection) => {
					event.prevent_default();
					if cfg!(feature = "dangerous-logging") {
						warn!(?fields, ?rejection, "Blocked booking form submission.");
					} else {
						warn!(?rejection, "Blocked booking form submission.");
					}
					notifier.notify(&rejection);
				}
			}
		})?;

		info!("Guarding booking form #{}.", form.id());
		Ok(Some(Self { form, submit }))
	}

	#[must_use]
	pub fn form(&self) -> &Element {
		&self.form
	}

	/// Keeps guarding the form until the page unloads, without a handle.
	pub fn keep_alive(self) {
		self.submit.forget()
	}
}
