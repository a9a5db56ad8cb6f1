// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_markup_scan
// Purpose: fuzz the body-content markup scan and escaping helpers
#![no_main]

use libfuzzer_sys::fuzz_target;
use mailweave::render::{body_html, escape_html, looks_like_markup};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = looks_like_markup(s);
        let _ = escape_html(s);
        let _ = body_html(s, "color: #333333;");
    }
});
