#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through both read modes; must never panic.
    let _ = bwxml::decode_section(data, "fuzz");
    let _ = bwxml::decode_section_with_options(data, "fuzz", bwxml::DecodeOptions::permissive());
});
