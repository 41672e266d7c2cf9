#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz the index loader with arbitrary strings, including broken
    // script wrappers. Malformed input must surface as an error,
    // never a panic.
    let _ = doxi::index::loader::load_str(data);
});
