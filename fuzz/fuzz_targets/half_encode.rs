#![no_main]

// This fuzz test compares our half float encoder against the `half` crate, and checks that
// decoding then encoding is lossless.

use libfuzzer_sys::fuzz_target;
use texarray_common::half::{decode_half, encode_half, encode_half_slice};

fuzz_target!(|floats: Vec<f32>| {
    let encoded = encode_half_slice(&floats);
    assert_eq!(encoded.len(), floats.len());

    for (&float, &bits) in floats.iter().zip(&encoded) {
        assert_eq!(encode_half(float), bits);
        if float.is_nan() {
            assert_eq!(bits & 0x7C00, 0x7C00);
            assert_ne!(bits & 0x03FF, 0, "{float:?} should encode to NaN");
            continue;
        }

        let expected = half::f16::from_f32(float).to_bits();
        assert_eq!(bits, expected, "{float:?} encoded differently");
        assert_eq!(encode_half(decode_half(bits)), bits);
    }
});
