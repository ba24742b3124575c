use crate::rules::Rejection;
use core::cell::RefCell;
use std::rc::Rc;
use tracing::error;

/// Tells the visitor why their submission was blocked.
pub trait Notifier {
	fn notify(&self, rejection: &Rejection);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
	fn notify(&self, rejection: &Rejection) {
		(**self).notify(rejection)
	}
}

/// Shows a blocking [***alert***](https://developer.mozilla.org/en-US/docs/Web/API/Window/alert) dialog.
#[derive(Debug, Clone)]
pub struct AlertNotifier {
	window: web_sys::Window,
}
impl AlertNotifier {
	#[must_use]
	pub fn new(window: web_sys::Window) -> Self {
		Self { window }
	}
}
impl Notifier for AlertNotifier {
	fn notify(&self, rejection: &Rejection) {
		if let Err(error) = self.window.alert_with_message(&rejection.to_string()) {
			error!(?error, %rejection, "Failed to show the alert dialog.");
		}
	}
}

/// Keeps every rejection instead of showing it.
#[derive(Debug, Default)]
pub struct RecordingNotifier(RefCell<Vec<Rejection>>);
impl RecordingNotifier {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Removes and returns everything recorded so far.
	pub fn take(&self) -> Vec<Rejection> {
		self.0.borrow_mut().drain(..).collect()
	}
}
impl Notifier for RecordingNotifier {
	fn notify(&self, rejection: &Rejection) {
		self.0.borrow_mut().push(*rejection)
	}
}
