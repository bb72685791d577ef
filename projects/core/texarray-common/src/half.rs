//! Conversion between IEEE 754 binary16 (half precision) and binary32 floats.
//!
//! [`decode_half`] is exact for every one of the 65536 bit patterns, including subnormals,
//! infinities and NaN payloads. [`encode_half`] rounds to nearest, ties to even, and is the
//! exact inverse of [`decode_half`] for every value it can produce.
//!
//! The batch functions allocate a new output buffer and include SIMD optimizations by
//! generating multiple versions of the loop through the [`mod@multiversion`] crate, unless the
//! `no-runtime-cpu-detection` feature limits them to the target features selected at compile time.

use alloc::vec;
use alloc::vec::Vec;
use likely_stable::unlikely;
#[cfg(not(feature = "no-runtime-cpu-detection"))]
use multiversion::multiversion;

const HALF_SIGN: u16 = 0x8000;
const HALF_EXPONENT_MASK: u16 = 0x1F;
const HALF_MANTISSA_MASK: u16 = 0x03FF;
const HALF_INFINITY: u16 = 0x7C00;
const HALF_QUIET_NAN_BIT: u16 = 0x0200;

const FLOAT_EXPONENT_MASK: u32 = 0xFF;
const FLOAT_MANTISSA_MASK: u32 = 0x007F_FFFF;
const FLOAT_INFINITY: u32 = 0x7F80_0000;
const FLOAT_IMPLICIT_BIT: u32 = 0x0080_0000;

/// 127 - 15
const EXPONENT_REBIAS: u32 = 112;
/// Difference in mantissa width between binary32 (23 bits) and binary16 (10 bits).
const MANTISSA_SHIFT: u32 = 13;
/// 2^-24, the value of the smallest binary16 subnormal.
const SUBNORMAL_STEP: f32 = 1.0 / 16_777_216.0;

/// Decodes one binary16 bit pattern into an [`f32`].
#[inline]
pub fn decode_half(bits: u16) -> f32 {
    let sign = ((bits & HALF_SIGN) as u32) << 16;
    let exponent = ((bits >> 10) & HALF_EXPONENT_MASK) as u32;
    let mantissa = (bits & HALF_MANTISSA_MASK) as u32;

    if unlikely(exponent == 0) {
        // Zero or subnormal: mantissa * 2^-24. Exact, as the mantissa fits in 10 bits.
        let magnitude = mantissa as f32 * SUBNORMAL_STEP;
        return f32::from_bits(sign | magnitude.to_bits());
    }

    if unlikely(exponent == HALF_EXPONENT_MASK as u32) {
        return f32::from_bits(sign | FLOAT_INFINITY | (mantissa << MANTISSA_SHIFT));
    }

    f32::from_bits(sign | ((exponent + EXPONENT_REBIAS) << 23) | (mantissa << MANTISSA_SHIFT))
}

/// Encodes an [`f32`] as a binary16 bit pattern, rounding to nearest, ties to even.
///
/// Values too large for binary16 become infinity, values too small become subnormals or
/// signed zero. NaN stays NaN; the high bits of the payload are kept and the quiet bit is
/// set if truncation would otherwise turn it into an infinity.
#[inline]
pub fn encode_half(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) as u16) & HALF_SIGN;
    let exponent = (bits >> 23) & FLOAT_EXPONENT_MASK;
    let mantissa = bits & FLOAT_MANTISSA_MASK;

    if unlikely(exponent == FLOAT_EXPONENT_MASK) {
        if mantissa == 0 {
            return sign | HALF_INFINITY;
        }
        let payload = (mantissa >> MANTISSA_SHIFT) as u16;
        let payload = if payload == 0 {
            HALF_QUIET_NAN_BIT
        } else {
            payload
        };
        return sign | HALF_INFINITY | payload;
    }

    let half_exponent = exponent as i32 - EXPONENT_REBIAS as i32;
    if unlikely(half_exponent >= HALF_EXPONENT_MASK as i32) {
        return sign | HALF_INFINITY;
    }

    if unlikely(half_exponent <= 0) {
        // Below 2^-25 everything rounds to zero, including binary32 subnormals.
        if half_exponent < -10 {
            return sign;
        }
        let full_mantissa = mantissa | FLOAT_IMPLICIT_BIT;
        let shift = (14 - half_exponent) as u32;
        let rounded = round_shift_right(full_mantissa, shift);
        // A carry out of the mantissa lands on the smallest normal, which is the right answer.
        return sign | rounded as u16;
    }

    let combined = ((half_exponent as u32) << 10) | (mantissa >> MANTISSA_SHIFT);
    let rounded = combined + round_increment(mantissa, combined, MANTISSA_SHIFT);
    // A carry into the exponent is correct too, up to and including infinity.
    sign | rounded as u16
}

/// Shifts `value` right by `shift` bits, rounding to nearest, ties to even.
#[inline(always)]
fn round_shift_right(value: u32, shift: u32) -> u32 {
    let truncated = value >> shift;
    truncated + round_increment(value, truncated, shift)
}

/// Returns 1 if the `shift` low bits of `value` round `truncated` up.
#[inline(always)]
fn round_increment(value: u32, truncated: u32, shift: u32) -> u32 {
    let halfway = 1 << (shift - 1);
    let remainder = value & ((1 << shift) - 1);
    (remainder > halfway || (remainder == halfway && truncated & 1 == 1)) as u32
}

/// Decodes every element of `halves` into a newly allocated buffer of the same length.
pub fn decode_half_slice(halves: &[u16]) -> Vec<f32> {
    let mut floats = vec![0.0f32; halves.len()];
    decode_half_into(halves, &mut floats);
    floats
}

/// Encodes every element of `floats` into a newly allocated buffer of the same length.
pub fn encode_half_slice(floats: &[f32]) -> Vec<u16> {
    let mut halves = vec![0u16; floats.len()];
    encode_half_into(floats, &mut halves);
    halves
}

#[cfg_attr(
    all(not(feature = "nightly"), not(feature = "no-runtime-cpu-detection")),
    multiversion(targets(
        // avx512 only in nightly.
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
#[cfg_attr(
    all(feature = "nightly", not(feature = "no-runtime-cpu-detection")),
    multiversion(targets(
        // x86-64-v4 without lahfsahf
        "x86_64+avx+avx2+avx512bw+avx512cd+avx512dq+avx512f+avx512vl+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
fn decode_half_into(halves: &[u16], floats: &mut [f32]) {
    for (float, half) in floats.iter_mut().zip(halves) {
        *float = decode_half(*half);
    }
}

#[cfg_attr(
    all(not(feature = "nightly"), not(feature = "no-runtime-cpu-detection")),
    multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
#[cfg_attr(
    all(feature = "nightly", not(feature = "no-runtime-cpu-detection")),
    multiversion(targets(
        // x86-64-v4 without lahfsahf
        "x86_64+avx+avx2+avx512bw+avx512cd+avx512dq+avx512f+avx512vl+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
fn encode_half_into(floats: &[f32], halves: &mut [u16]) {
    for (half, float) in halves.iter_mut().zip(floats) {
        *half = encode_half(*float);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(0x3C00, 1.0)]
    #[case(0x0000, 0.0)]
    #[case(0xC000, -2.0)]
    #[case(0x3555, 0.333_251_95)]
    #[case(0x7BFF, 65504.0)]
    #[case(0x0400, 6.103_515_6e-5)]
    #[case(0x0001, 5.960_464_5e-8)]
    #[case(0x03FF, 6.097_555e-5)]
    #[case(0x7C00, f32::INFINITY)]
    #[case(0xFC00, f32::NEG_INFINITY)]
    fn decodes_known_values(#[case] bits: u16, #[case] expected: f32) {
        assert_eq!(decode_half(bits), expected);
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let value = decode_half(0x8000);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
        assert_eq!(encode_half(-0.0), 0x8000);
    }

    #[test]
    fn nan_payload_is_carried() {
        let value = decode_half(0x7E01);
        assert!(value.is_nan());
        assert_eq!(value.to_bits(), 0x7FC0_2000);
        assert!(decode_half(0xFC01).is_sign_negative());
    }

    #[test]
    fn decode_matches_reference_for_every_pattern() {
        for bits in 0..=u16::MAX {
            let expected = ::half::f16::from_bits(bits).to_f32();
            let actual = decode_half(bits);
            if expected.is_nan() {
                assert!(actual.is_nan(), "{bits:#06x}");
                assert_eq!(actual.is_sign_negative(), expected.is_sign_negative());
            } else {
                assert_eq!(actual.to_bits(), expected.to_bits(), "{bits:#06x}");
            }
        }
    }

    #[test]
    fn encode_inverts_decode_for_every_pattern() {
        for bits in 0..=u16::MAX {
            assert_eq!(encode_half(decode_half(bits)), bits, "{bits:#06x}");
        }
    }

    #[rstest]
    #[case(65504.0, 0x7BFF)]
    #[case(65519.0, 0x7BFF)] // just below the rounding boundary
    #[case(65520.0, 0x7C00)] // ties to even, which is infinity
    #[case(1.0e10, 0x7C00)]
    #[case(-1.0e10, 0xFC00)]
    #[case(1.0e-10, 0x0000)]
    #[case(2.980_232_2e-8, 0x0000)] // exactly half the smallest subnormal, ties to even
    #[case(2.980_233e-8, 0x0001)]
    #[case(1.000_488_3, 0x3C00)] // halfway between 1.0 and the next half, ties to even
    #[case(1.001_464_8, 0x3C02)] // halfway, rounds up to even
    #[case(f32::MIN_POSITIVE, 0x0000)]
    fn encode_rounds_to_nearest_even(#[case] value: f32, #[case] expected: u16) {
        assert_eq!(encode_half(value), expected);
    }

    #[test]
    fn encode_keeps_nan() {
        assert_eq!(encode_half(f32::NAN) & 0x7C00, 0x7C00);
        assert_ne!(encode_half(f32::NAN) & 0x03FF, 0);
        // Payload only in the low bits would truncate to an infinity.
        assert_eq!(encode_half(f32::from_bits(0x7F80_0001)), 0x7E00);
    }

    #[test]
    fn encode_matches_reference_for_sampled_floats() {
        // Steps through the float space with a stride that hits every exponent.
        let mut bits = 0u32;
        while let Some(next) = bits.checked_add(0x0000_1235) {
            let value = f32::from_bits(bits);
            if !value.is_nan() {
                assert_eq!(
                    encode_half(value),
                    ::half::f16::from_f32(value).to_bits(),
                    "{value:e}"
                );
            }
            bits = next;
        }
    }

    #[test]
    fn batch_functions_allocate_matching_buffers() {
        let halves: Vec<u16> = (0..1000u16).map(|x| x.wrapping_mul(61)).collect();
        let floats = decode_half_slice(&halves);
        assert_eq!(floats.len(), halves.len());
        for (float, half) in floats.iter().zip(&halves) {
            assert_eq!(float.to_bits(), decode_half(*half).to_bits());
        }
        assert_eq!(encode_half_slice(&floats), halves);
        assert!(decode_half_slice(&[]).is_empty());
    }
}
