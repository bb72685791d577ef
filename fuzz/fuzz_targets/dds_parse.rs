#![no_main]

// Parsing arbitrary bytes must never panic, and anything that parses must survive being
// written back out.

use libfuzzer_sys::fuzz_target;
use texarray_api::decode;
use texarray_dds::{parse_dds_header, read_dds};

fuzz_target!(|data: &[u8]| {
    let Ok(header) = parse_dds_header(data) else {
        return;
    };

    let Ok(texture) = read_dds(data) else {
        return;
    };
    assert_eq!(texture.format(), header.format);

    if let Ok(bytes) = texture.to_dds() {
        let reread = read_dds(&bytes).expect("Written DDS files should parse");
        assert_eq!(reread.data(), texture.data());
    }

    let _ = decode(&texture);
});
