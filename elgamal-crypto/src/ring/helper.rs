use crate::errors::ElGamalError;

use num_bigint::{BigInt, BigUint};
use num_integer::Roots;
use num_traits::Signed;

use rand::{CryptoRng, RngCore};

/// Converts a signed integer into an exponent, rejecting negative values.
///
/// # Example
///
/// ```
/// # use elgamal_crypto::ring::to_exponent;
/// # use num_bigint::{BigInt, BigUint};
/// assert_eq!(to_exponent(&BigInt::from(6)).unwrap(), BigUint::from(6u32));
/// assert!(to_exponent(&BigInt::from(-1)).is_err());
/// ```
pub fn to_exponent(value: &BigInt) -> Result<BigUint, ElGamalError> {
    if value.is_negative() {
        return Err(ElGamalError::InvalidExponent(format!(
            "Exponent must be >= 0, got {}",
            value
        )));
    }

    value.to_biguint().ok_or_else(|| {
        ElGamalError::InvalidExponent(format!("Exponent {} is not representable", value))
    })
}

/// Smallest `m` with `m * m >= n`.
pub fn ceil_sqrt(n: &BigUint) -> BigUint {
    let root = Roots::sqrt(n);
    if &root * &root < *n { root + 1u32 } else { root }
}

/// Draws a uniform integer from `[low, high)` by rejection sampling on random bytes.
///
/// # Errors
///
/// Returns `ElGamalError::InvalidParameters` if the range is empty.
pub fn random_in_range<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> Result<BigUint, ElGamalError> {
    if low >= high {
        return Err(ElGamalError::InvalidParameters(format!(
            "Empty sampling range [{}, {})",
            low, high
        )));
    }

    let span = high - low;
    let bits = span.bits();
    let byte_len = bits.div_ceil(8) as usize;
    let excess_bits = (byte_len as u64 * 8 - bits) as u32;

    let mut bytes = vec![0u8; byte_len];
    loop {
        rng.fill_bytes(&mut bytes);
        // drop the bits above the span's bit length, little-endian top byte is last
        if let Some(top) = bytes.last_mut() {
            *top &= 0xffu8 >> excess_bits;
        }

        let candidate = BigUint::from_bytes_le(&bytes);
        if candidate < span {
            return Ok(low + candidate);
        }
    }
}
