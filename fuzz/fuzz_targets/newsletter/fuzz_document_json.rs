// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_document_json
// Purpose: fuzz document JSON -> NewsletterDocument conversion -> assembly
#![no_main]

use libfuzzer_sys::fuzz_target;
use mailweave::domain::{NewsletterDocument, NewsletterDocumentData};
use mailweave::render;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<NewsletterDocumentData>(data) {
        // Conversion may reject the payload; assembly of an accepted document
        // must never panic.
        if let Ok(document) = NewsletterDocument::try_from(payload) {
            let _ = render::assemble(&document);
        }
    }
});
