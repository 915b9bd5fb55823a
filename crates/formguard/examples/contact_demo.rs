// Example: Running the contact-form guard without a browser
// Shows the submit decision flow over the in-memory form backend

use formguard::{run_submit_check, FieldName, MemoryForm};

fn submit(label: &str, form: &mut MemoryForm) {
    let source = form.clone();
    let decision = run_submit_check(&source, form);

    println!("=== {} ===", label);
    println!("decision: {:?}", decision);
    for field in FieldName::ALL {
        let message = form.slot(field);
        if !message.is_empty() {
            println!("  {}: {}", field, message);
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    // every field empty: all four messages render at once
    let mut form = MemoryForm::new();
    submit("empty form", &mut form);

    // malformed email: only the format message renders
    form.set(FieldName::FirstName, "Jane");
    form.set(FieldName::LastName, "Doe");
    form.set(FieldName::Email, "not-an-email");
    form.set(FieldName::Comments, "hi");
    submit("malformed email", &mut form);

    // fixed email: the guard lets the submit proceed
    form.set(FieldName::Email, "jane@doe.com");
    submit("valid form", &mut form);
}
