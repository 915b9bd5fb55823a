// File: src/dom.rs
// Purpose: DOM-backed field source and message sink for the contact guard

use crate::GuardConfig;
use formguard::{FieldSource, GuardError, MessageSink};
use formguard_core::FieldName;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

/// Reads field values from the resolved form controls
pub(crate) struct DomFieldSource {
    first_name: Element,
    last_name: Element,
    email: Element,
    comments: Element,
}

impl DomFieldSource {
    /// Resolve all four controls inside the form, failing on any missing one
    pub(crate) fn resolve(form: &Element, config: &GuardConfig) -> Result<Self, GuardError> {
        Ok(Self {
            first_name: find_control(form, &config.first_name_field)?,
            last_name: find_control(form, &config.last_name_field)?,
            email: find_control(form, &config.email_field)?,
            comments: find_control(form, &config.comments_field)?,
        })
    }

    fn control(&self, field: FieldName) -> &Element {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Comments => &self.comments,
        }
    }
}

impl FieldSource for DomFieldSource {
    fn value(&self, field: FieldName) -> String {
        control_value(self.control(field))
    }
}

/// Renders messages into the resolved slot elements
pub(crate) struct DomMessageSink {
    document: Document,
    marker_class: String,
    slots: [(FieldName, Element); 4],
}

impl DomMessageSink {
    /// Resolve all four slots inside the form, failing on any missing one
    pub(crate) fn resolve(
        document: &Document,
        form: &Element,
        config: &GuardConfig,
    ) -> Result<Self, GuardError> {
        Ok(Self {
            document: document.clone(),
            marker_class: config.marker_class.clone(),
            slots: [
                (FieldName::FirstName, find_slot(form, &config.first_name_slot)?),
                (FieldName::LastName, find_slot(form, &config.last_name_slot)?),
                (FieldName::Email, find_slot(form, &config.email_slot)?),
                (FieldName::Comments, find_slot(form, &config.comments_slot)?),
            ],
        })
    }
}

impl MessageSink for DomMessageSink {
    fn clear_all(&mut self) {
        // clears every marker-carrying element document-wide, not just the
        // four known slots
        let selector = format!(".{}", self.marker_class);
        if let Ok(list) = self.document.query_selector_all(&selector) {
            for i in 0..list.length() {
                if let Some(node) = list.item(i) {
                    node.set_text_content(None);
                }
            }
        }
    }

    fn render(&mut self, field: FieldName, message: &str) {
        if let Some((_, slot)) = self.slots.iter().find(|(f, _)| *f == field) {
            slot.set_text_content(Some(message));
        }
    }
}

fn find_control(form: &Element, name: &str) -> Result<Element, GuardError> {
    form.query_selector(&format!("[name='{}']", name))
        .ok()
        .flatten()
        .ok_or_else(|| GuardError::MissingField {
            name: name.to_string(),
        })
}

fn find_slot(form: &Element, id: &str) -> Result<Element, GuardError> {
    form.query_selector(&format!("#{}", id))
        .ok()
        .flatten()
        .ok_or_else(|| GuardError::MissingSlot { id: id.to_string() })
}

fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        el.text_content().unwrap_or_default()
    }
}
