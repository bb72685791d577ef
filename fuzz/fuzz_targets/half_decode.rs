#![no_main]

// This fuzz test compares our half float decoder against the `half` crate.

use libfuzzer_sys::fuzz_target;
use texarray_common::half::{decode_half, decode_half_slice};

fuzz_target!(|halves: Vec<u16>| {
    let decoded = decode_half_slice(&halves);
    assert_eq!(decoded.len(), halves.len());

    for (&bits, &float) in halves.iter().zip(&decoded) {
        let expected = half::f16::from_bits(bits).to_f32();
        if expected.is_nan() {
            assert!(float.is_nan(), "{bits:#06x} should decode to NaN");
            assert_eq!(float.is_sign_negative(), expected.is_sign_negative());
        } else {
            assert_eq!(float.to_bits(), expected.to_bits(), "{bits:#06x} decoded differently");
        }
        assert_eq!(decode_half(bits).to_bits(), float.to_bits());
    }
});
