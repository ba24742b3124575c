use crate::config::{DecoratorConfig, PanelEffect};
use core::convert::TryFrom;
use tracing::{debug, error, info, instrument, trace};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, HtmlElement};

/// Style applied by [`PanelEffect::Highlight`].
pub const HIGHLIGHT: &[(&str, &str)] = &[("transition", "all 0.3s ease"), ("border-color", "#2f6fed"), ("background-color", "#f0f8ff")];

/// Style applied by [`PanelEffect::Reveal`] once its delay has passed.
pub const REVEALED: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Applies the configured [`PanelEffect`] to the first element matching [`DecoratorConfig::selector`].
///
/// Returns the decorated panel, or [`None`] if there is no matching HTML element.
/// A [`PanelEffect::Reveal`] timer can't be cancelled and fires once.
///
/// # Errors
///
/// Iff the selector is invalid, a style property is rejected or the timer can't be scheduled.
#[instrument(skip(document))]
pub fn decorate(document: &Document, config: &DecoratorConfig) -> Result<Option<HtmlElement>, JsValue> {
	let panel = match document.query_selector(&config.selector)? {
		Some(panel) => panel,
		None => {
			debug!("No panel matches {:?}; Nothing to decorate.", config.selector);
			return Ok(None);
		}
	};
	let panel = match panel.dyn_into::<HtmlElement>() {
		Ok(panel) => panel,
		Err(panel) => {
			debug!("{:?} is not an HTML element; Not decorating it.", panel);
			return Ok(None);
		}
	};

	match config.effect {
		PanelEffect::Highlight => {
			apply_style(&panel.style(), HIGHLIGHT)?;
			info!("Highlighted panel {:?}.", config.selector);
		}
		PanelEffect::Reveal { delay_ms } => {
			schedule_reveal(&panel, delay_ms)?;
			info!("Revealing panel {:?} in {}ms.", config.selector, delay_ms);
		}
	}
	Ok(Some(panel))
}

fn schedule_reveal(panel: &HtmlElement, delay_ms: u32) -> Result<i32, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("booking-guard: No `window` to schedule the panel reveal on."))?;
	let panel = panel.clone();
	let reveal = Closure::once_into_js(move || {
		if let Err(error) = apply_style(&panel.style(), REVEALED) {
			error!(?error, "Failed to reveal panel.");
		} else {
			trace!("Revealed panel.");
		}
	});
	window.set_timeout_with_callback_and_timeout_and_arguments_0(reveal.unchecked_ref(), i32::try_from(delay_ms).unwrap_or(i32::MAX))
}

fn apply_style(style: &CssStyleDeclaration, properties: &[(&str, &str)]) -> Result<(), JsValue> {
	for (name, value) in properties {
		style.set_property(name, value)?;
	}
	Ok(())
}
