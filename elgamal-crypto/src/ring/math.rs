//! Implementation of field ops using modular arithmetic.

use crate::errors::ElGamalError;

use num_bigint::BigUint;
use num_prime::nt_funcs::is_prime;
use num_traits::{One, Zero};

/// Represents the prime field Z_p, used for its multiplicative group.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Create a new PrimeField with the given modulus.
    ///
    /// The modulus must be a prime (and therefore greater than 1).
    pub fn try_with(modulus: BigUint) -> Result<Self, ElGamalError> {
        if modulus <= BigUint::one() {
            return Err(ElGamalError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        if !is_prime(&modulus, None).probably() {
            return Err(ElGamalError::InvalidModulus(format!(
                "Modulus must be prime, got {}",
                modulus
            )));
        }

        Ok(PrimeField { modulus })
    }

    /// Returns the modulus of the field.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::PrimeField;
    /// # use num_bigint::BigUint;
    /// let field = PrimeField::try_with(BigUint::from(13u32)).unwrap();
    /// assert_eq!(field.modulus(), &BigUint::from(13u32));
    /// ```
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    pub fn normalize(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Computes `(e0 * e1) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::PrimeField;
    /// # use num_bigint::BigUint;
    /// let field = PrimeField::try_with(BigUint::from(11u32)).unwrap();
    /// assert_eq!(field.mul(&BigUint::from(7u32), &BigUint::from(5u32)), BigUint::from(2u32));
    /// ```
    pub fn mul(&self, e0: &BigUint, e1: &BigUint) -> BigUint {
        (e0 * e1) % &self.modulus
    }

    /// Computes `element^exponent mod modulus` by square-and-multiply.
    ///
    /// The squares `element^(2^i)` are precomputed up to the bit length of `exponent`. The
    /// accumulator starts at the square matching the lowest set bit and every higher set bit
    /// is multiplied in, in increasing order.
    ///
    /// `exponent == 0` gives the identity `1`, `exponent == 1` gives `element` (reduced).
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::PrimeField;
    /// # use num_bigint::BigUint;
    /// let field = PrimeField::try_with(BigUint::from(23u32)).unwrap();
    /// let five = BigUint::from(5u32);
    /// assert_eq!(field.pow(&five, &BigUint::from(6u32)), BigUint::from(8u32));
    /// assert_eq!(field.pow(&five, &BigUint::from(0u32)), BigUint::from(1u32));
    /// assert_eq!(field.pow(&five, &BigUint::from(1u32)), five);
    /// ```
    pub fn pow(&self, element: &BigUint, exponent: &BigUint) -> BigUint {
        let base = self.normalize(element);

        // trailing_zeros is None only for a zero exponent
        let Some(lowest_bit) = exponent.trailing_zeros() else {
            return BigUint::one();
        };
        if exponent.is_one() {
            return base;
        }

        let bit_length = exponent.bits();
        let mut squares: Vec<BigUint> = Vec::with_capacity(bit_length as usize);
        squares.push(base);
        for i in 1..bit_length as usize {
            let square = self.mul(&squares[i - 1], &squares[i - 1]);
            squares.push(square);
        }

        let mut result = squares[lowest_bit as usize].clone();
        for i in (lowest_bit + 1)..bit_length {
            if exponent.bit(i) {
                result = self.mul(&result, &squares[i as usize]);
            }
        }

        result
    }

    /// Computes the modular multiplicative inverse `element^-1 mod modulus`.
    ///
    /// Uses Fermat's little theorem: `element^(p-2)` is the inverse of any nonzero element.
    ///
    /// # Errors
    ///
    /// Returns `ElGamalError::NoInverse` if `element` is a multiple of the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use elgamal_crypto::ring::PrimeField;
    /// # use num_bigint::BigUint;
    /// let field = PrimeField::try_with(BigUint::from(11u32)).unwrap();
    /// assert_eq!(field.inv(&BigUint::from(5u32)).unwrap(), BigUint::from(9u32));
    /// assert!(field.inv(&BigUint::from(0u32)).is_err());
    /// assert!(field.inv(&BigUint::from(22u32)).is_err());
    /// ```
    pub fn inv(&self, element: &BigUint) -> Result<BigUint, ElGamalError> {
        let element_norm = self.normalize(element);
        if element_norm.is_zero() {
            return Err(ElGamalError::NoInverse(format!(
                "Cannot invert {} in mod {}",
                element, self.modulus
            )));
        }

        let exponent = &self.modulus - 2u32;
        Ok(self.pow(&element_norm, &exponent))
    }
}
