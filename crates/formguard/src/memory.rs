// File: src/memory.rs
// Purpose: In-memory form for tests and non-browser hosts

use crate::guard::{FieldSource, MessageSink};
use formguard_core::FieldName;
use std::collections::HashMap;

/// In-memory form backend
///
/// Holds field values and message slots in maps. Implements both halves of
/// the guard contract, so the full submit flow runs without a browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: HashMap<FieldName, String>,
    slots: HashMap<FieldName, String>,
}

impl MemoryForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's current value
    pub fn set(&mut self, field: FieldName, value: &str) {
        self.values.insert(field, value.to_string());
    }

    /// Current text of a field's message slot (empty when valid)
    pub fn slot(&self, field: FieldName) -> &str {
        self.slots.get(&field).map(|s| s.as_str()).unwrap_or("")
    }

    /// Number of slots currently showing a message
    pub fn rendered_count(&self) -> usize {
        self.slots.values().filter(|s| !s.is_empty()).count()
    }
}

impl FieldSource for MemoryForm {
    fn value(&self, field: FieldName) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }
}

impl MessageSink for MemoryForm {
    fn clear_all(&mut self) {
        for slot in self.slots.values_mut() {
            slot.clear();
        }
    }

    fn render(&mut self, field: FieldName, message: &str) {
        self.slots.insert(field, message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_read_as_empty() {
        let form = MemoryForm::new();
        assert_eq!(form.value(FieldName::Email), "");
        assert_eq!(form.slot(FieldName::Email), "");
    }

    #[test]
    fn test_clear_all_empties_every_slot() {
        let mut form = MemoryForm::new();
        form.render(FieldName::Email, "Email address is not valid.");
        form.render(FieldName::Comments, "Please enter your message.");
        assert_eq!(form.rendered_count(), 2);

        form.clear_all();
        assert_eq!(form.rendered_count(), 0);
        assert_eq!(form.slot(FieldName::Email), "");
    }
}
