#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = bwxml::ByteReader::new(data);
    let _ = bwxml::Dictionary::read(&mut reader);
});
