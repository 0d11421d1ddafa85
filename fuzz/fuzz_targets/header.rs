#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = bwxml::probe(data);
    let mut reader = bwxml::ByteReader::new(data);
    let _ = bwxml::header::read_section_format(&mut reader);
});
