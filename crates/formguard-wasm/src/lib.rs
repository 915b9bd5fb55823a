//! Formguard WASM
//!
//! Browser bindings for the contact-form guard. Wires the guard runtime to
//! a real form: locates the form and its controls, intercepts the submit
//! event, and cancels native submission when validation fails, leaving the
//! inline messages visible.

mod dom;

use formguard::{run_submit_check, GuardError};
use formguard_core::{evaluate, ContactFields, FieldName};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Element identifiers the guard needs from the page.
///
/// Defaults match the stock contact-form markup: a `#contactForm` form
/// with controls named `firstName`/`lastName`/`email`/`comments`, slots
/// `#vFirstName`/`#vLastName`/`#vEmail`/`#vComments`, and the shared
/// `validation` marker class on every slot.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardConfig {
    pub form_selector: String,
    pub first_name_field: String,
    pub last_name_field: String,
    pub email_field: String,
    pub comments_field: String,
    pub first_name_slot: String,
    pub last_name_slot: String,
    pub email_slot: String,
    pub comments_slot: String,
    pub marker_class: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            form_selector: "#contactForm".to_string(),
            first_name_field: "firstName".to_string(),
            last_name_field: "lastName".to_string(),
            email_field: "email".to_string(),
            comments_field: "comments".to_string(),
            first_name_slot: "vFirstName".to_string(),
            last_name_slot: "vLastName".to_string(),
            email_slot: "vEmail".to_string(),
            comments_slot: "vComments".to_string(),
            marker_class: "validation".to_string(),
        }
    }
}

/// Attach the guard to the default contact form.
///
/// A page without the form is a no-op: the guard is optional
/// functionality. A form that is present but missing a control or slot is
/// an error, surfaced to the caller instead of installing a partial guard.
#[wasm_bindgen(js_name = installContactGuard)]
pub fn install_contact_guard() -> Result<(), JsValue> {
    install_with(GuardConfig::default())
}

/// Attach the guard using custom element identifiers
///
/// # Example (JavaScript)
/// ```javascript
/// installContactGuardWith({ formSelector: "#feedback", markerClass: "field-error" });
/// ```
#[wasm_bindgen(js_name = installContactGuardWith)]
pub fn install_contact_guard_with(config: JsValue) -> Result<(), JsValue> {
    let config: GuardConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse guard config: {}", e)))?;
    install_with(config)
}

fn install_with(config: GuardConfig) -> Result<(), JsValue> {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return Ok(()),
    };

    let form = document
        .query_selector(&config.form_selector)
        .map_err(|_| JsValue::from_str("invalid form selector"))?;
    let form = match form {
        Some(form) => form,
        // no contact form on this page, nothing to guard
        None => return Ok(()),
    };

    let source = dom::DomFieldSource::resolve(&form, &config).map_err(wiring_error)?;
    let mut sink = dom::DomMessageSink::resolve(&document, &form, &config).map_err(wiring_error)?;

    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if run_submit_check(&source, &mut sink).is_blocked() {
            event.prevent_default();
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|_| JsValue::from_str("failed to attach submit listener"))?;

    // the listener lives as long as the page
    on_submit.forget();

    Ok(())
}

fn wiring_error(err: GuardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One rendered message, returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SlotMessage {
    pub field: String,
    pub message: String,
}

/// Field values passed in from JavaScript
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub comments: String,
}

/// Validate field values without touching the page
///
/// Returns the messages for failing fields in validation order (empty when
/// all fields pass), for hosts that render errors themselves.
///
/// # Example (JavaScript)
/// ```javascript
/// const messages = checkContactForm({
///     firstName: "Jane",
///     lastName: "Doe",
///     email: "jane@doe.com",
///     comments: "hello"
/// });
/// ```
#[wasm_bindgen(js_name = checkContactForm)]
pub fn check_contact_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: ContactValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse field values: {}", e)))?;

    let report = evaluate(&ContactFields {
        first_name: values.first_name,
        last_name: values.last_name,
        email: values.email,
        comments: values.comments,
    });

    let messages: Vec<SlotMessage> = FieldName::ALL
        .iter()
        .filter_map(|field| {
            report.message(*field).map(|message| SlotMessage {
                field: field.as_str().to_string(),
                message: message.to_string(),
            })
        })
        .collect();

    Ok(serde_wasm_bindgen::to_value(&messages)?)
}

/// Quick email shape check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    formguard_core::is_valid_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_shape() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("not-an-email"));
        assert!(!is_valid_email_js("user+tag@example.com"));
    }

    #[wasm_bindgen_test]
    fn test_default_config_targets_stock_markup() {
        let config = GuardConfig::default();
        assert_eq!(config.form_selector, "#contactForm");
        assert_eq!(config.first_name_field, "firstName");
        assert_eq!(config.email_slot, "vEmail");
        assert_eq!(config.marker_class, "validation");
    }
}
