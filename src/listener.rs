use tracing::{error, instrument, trace};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// An event listener that lives exactly as long as this handle.
///
/// Dropping the handle removes the listener from its target and frees the [`Closure`] behind it.
/// Use [`EventListener::forget`] to keep it registered for the rest of the page's lifetime instead.
pub struct EventListener {
	target: EventTarget,
	event_type: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl core::fmt::Debug for EventListener {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("EventListener").field("target", &self.target).field("event_type", &self.event_type).finish()
	}
}

impl EventListener {
	/// # Errors
	///
	/// Iff [***addEventListener***](https://developer.mozilla.org/en-US/docs/Web/API/EventTarget/addEventListener) throws.
	#[instrument(skip(handler))]
	pub fn new(target: &EventTarget, event_type: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
		Self::with_options(target, event_type, AddEventListenerOptions::new(), handler)
	}

	/// Like [`EventListener::new`], but the browser unregisters the listener after its first call.
	///
	/// # Errors
	///
	/// Iff [***addEventListener***](https://developer.mozilla.org/en-US/docs/Web/API/EventTarget/addEventListener) throws.
	#[instrument(skip(handler))]
	pub fn once(target: &EventTarget, event_type: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
		let mut options = AddEventListenerOptions::new();
		options.once(true);
		Self::with_options(target, event_type, options, handler)
	}

	fn with_options(target: &EventTarget, event_type: &'static str, options: AddEventListenerOptions, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
		let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
		target.add_event_listener_with_callback_and_add_event_listener_options(event_type, closure.as_ref().unchecked_ref(), &options)?;
		trace!("Added {:?} listener.", event_type);
		Ok(Self {
			target: target.clone(),
			event_type,
			closure,
		})
	}

	#[must_use]
	pub fn event_type(&self) -> &'static str {
		self.event_type
	}

	/// Leaks the listener so that it stays registered until the page unloads.
	pub fn forget(self) {
		trace!("Leaking {:?} listener.", self.event_type);
		core::mem::forget(self)
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		if let Err(error) = self.target.remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref()) {
			error!(?error, "Failed to remove {:?} listener.", self.event_type);
		} else {
			trace!("Removed {:?} listener.", self.event_type);
		}
	}
}
