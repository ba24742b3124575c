//! Installing both components once the document has been parsed.

use crate::{
	clock::{BrowserClock, Clock},
	config::{Config, GuardConfig},
	decorator,
	guard::{self, BookingFormGuard},
	listener::EventListener,
	notify::{AlertNotifier, Notifier},
	rules::Ruleset,
};
use core::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::{error, info, instrument, trace, trace_span};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// Whatever was found on the page and set up.
#[derive(Debug, Default)]
pub struct Installed {
	pub guard: Option<BookingFormGuard>,
	pub date_input: Option<HtmlInputElement>,
	pub panel: Option<HtmlElement>,
}

/// Handle to an installation that may still be waiting for the page to be ready.
///
/// Dropping it cancels a pending installation and detaches the form guard.
#[derive(Debug)]
pub struct Page {
	ready: Option<EventListener>,
	installed: Rc<RefCell<Option<Installed>>>,
}
impl Page {
	/// [`None`] until the page was ready, and also if installation failed.
	#[must_use]
	pub fn installed(&self) -> Ref<'_, Option<Installed>> {
		self.installed.borrow()
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.ready.is_some() && self.installed.borrow().is_none()
	}

	/// Leaks the installation so that it stays active until the page unloads.
	pub fn keep_alive(self) {
		trace!("Leaking page installation.");
		core::mem::forget(self)
	}
}

/// Whether the document is still being parsed.
#[must_use]
pub fn is_loading(document: &Document) -> bool {
	document.ready_state() == "loading"
}

/// Runs `f` on [***DOMContentLoaded***](https://developer.mozilla.org/en-US/docs/Web/API/Window/DOMContentLoaded_event), or right away if that has already fired.
///
/// Returns the pending listener in the former case.
///
/// # Errors
///
/// Iff the listener can't be added.
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<Option<EventListener>, JsValue> {
	if is_loading(document) {
		let mut f = Some(f);
		let listener = EventListener::once(document.as_ref(), "DOMContentLoaded", move |_| {
			if let Some(f) = f.take() {
				f()
			}
		})?;
		Ok(Some(listener))
	} else {
		f();
		Ok(None)
	}
}

/// Sets up both components on `document` immediately.
///
/// # Errors
///
/// Iff a browser API call fails. Missing elements are not an error.
#[instrument(skip(document, clock, notifier))]
pub fn install_now<C, N>(document: &Document, config: &Config, clock: C, notifier: N) -> Result<Installed, JsValue>
where
	C: Clock + 'static,
	N: Notifier + 'static,
{
	let date_input = if clamps_date_input(&config.guard) {
		guard::clamp_date_input(document, &config.guard, clock.today())
	} else {
		None
	};
	let guard = BookingFormGuard::attach(document, &config.guard, clock, notifier)?;
	let panel = decorator::decorate(document, &config.decorator)?;

	info!(guarded = guard.is_some(), clamped = date_input.is_some(), decorated = panel.is_some(), "Installed booking page behaviour.");
	Ok(Installed { guard, date_input, panel })
}

fn clamps_date_input(config: &GuardConfig) -> bool {
	config.clamp_date_input && config.ruleset == Ruleset::Strict
}

/// Sets up both components on `document` once it's ready.
///
/// # Errors
///
/// Iff a browser API call fails while installing right away or while scheduling the installation.
/// Failures during a deferred installation are logged instead.
pub fn install_with<C, N>(document: &Document, config: Config, clock: C, notifier: N) -> Result<Page, JsValue>
where
	C: Clock + 'static,
	N: Notifier + 'static,
{
	if !is_loading(document) {
		let installed = install_now(document, &config, clock, notifier)?;
		return Ok(Page {
			ready: None,
			installed: Rc::new(RefCell::new(Some(installed))),
		});
	}

	let installed = Rc::new(RefCell::new(None));
	let ready = when_ready(document, {
		let document = document.clone();
		let installed = Rc::clone(&installed);
		move || {
			let span = trace_span!("page_ready");
			let _enter = span.enter();
			match install_now(&document, &config, clock, notifier) {
				Ok(done) => *installed.borrow_mut() = Some(done),
				Err(error) => error!(?error, "Failed to install booking page behaviour."),
			}
		}
	})?;
	trace!("Waiting for DOMContentLoaded.");
	Ok(Page { ready, installed })
}

/// Sets up both components on the current page with the browser's clock and alert dialogs.
///
/// # Errors
///
/// Iff there is no current page or a browser API call fails.
pub fn install(config: Config) -> Result<Page, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("booking-guard: No `window` found."))?;
	let document = window.document().ok_or_else(|| JsValue::from_str("booking-guard: No `document` found."))?;
	install_with(&document, config, BrowserClock, AlertNotifier::new(window))
}
