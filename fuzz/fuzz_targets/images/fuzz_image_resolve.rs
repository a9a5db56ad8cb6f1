// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_image_resolve
// Purpose: fuzz arbitrary bytes through the image resolver; it must either
// produce a data URI or fail with an ImageProcessingError, never panic
#![no_main]

use libfuzzer_sys::fuzz_target;
use mailweave::domain::ImageSource;
use mailweave::render::resolve;

fuzz_target!(|data: &[u8]| {
    for mime in ["image/png", "image/jpeg", "application/octet-stream"] {
        let source = ImageSource::from_bytes(data.to_vec(), mime.to_string());
        let _ = resolve(&source);
    }
});
