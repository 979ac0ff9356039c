//! # ElGamal cryptosystem
//!
//! [`ElGamal`] owns the group parameters and, once known, the private key.
//! Encryption only needs the public parameters. Decryption needs the key, which can be
//! supplied by the caller or recovered from `beta` with a discrete-log solver.

pub mod ciphertext;

pub use ciphertext::{Ciphertext, ciphertexts_from_json, ciphertexts_to_json};

use crate::dlog::{BabyStepGiantStep, DiscreteLogSolver};
use crate::errors::ElGamalError;
use crate::keypair::{GroupParameters, KeyState, PrivateKey};
use crate::ring::random_in_range;

use num_bigint::BigUint;

use rand::{CryptoRng, RngCore};

/// Lower bound of the random ephemeral exponent range `[3, p - 1)`.
///
/// Only keeps `k` away from trivially small values; it is not a security property.
pub const MIN_EPHEMERAL_EXPONENT: u32 = 3;

#[derive(Debug, Clone)]
pub struct ElGamal {
    params: GroupParameters,
    key: KeyState,
}

impl ElGamal {
    /// Creates a cryptosystem without a private key.
    pub fn new(params: GroupParameters) -> Self {
        Self {
            params,
            key: KeyState::Absent,
        }
    }

    /// Validates `(p, alpha, beta)` and creates a cryptosystem without a private key.
    pub fn try_with(p: BigUint, alpha: BigUint, beta: BigUint) -> Result<Self, ElGamalError> {
        Ok(Self::new(GroupParameters::try_with(p, alpha, beta)?))
    }

    pub fn params(&self) -> &GroupParameters {
        &self.params
    }

    pub fn key_state(&self) -> &KeyState {
        &self.key
    }

    /// Stores the private exponent `a`.
    ///
    /// The caller is responsible for `alpha^a = beta`; nothing is checked here. Use
    /// [`ElGamal::verify_private_key`] to test it.
    pub fn set_private_key(&mut self, a: BigUint) {
        if self.key.is_present() {
            log::debug!("replacing private key for p = {}", self.params.p());
        }
        self.key = KeyState::Present(PrivateKey::new(a));
    }

    /// Checks `alpha^a = beta (mod p)` for the stored key.
    pub fn verify_private_key(&self) -> Result<bool, ElGamalError> {
        let key = self.private_key()?;
        let field = self.params.field();

        Ok(&field.pow(self.params.alpha(), key.exponent()) == self.params.beta())
    }

    /// Recovers the private key from `beta` with baby-step giant-step and stores it.
    pub fn derive_private_key(&mut self) -> Result<BigUint, ElGamalError> {
        self.derive_private_key_with::<BabyStepGiantStep>()
    }

    /// Recovers the private key from `beta` with the given solver and stores it.
    ///
    /// On failure the key state is left untouched.
    pub fn derive_private_key_with<S: DiscreteLogSolver>(
        &mut self,
    ) -> Result<BigUint, ElGamalError> {
        let solver = S::new(&self.params)?;
        let a = solver.solve(self.params.beta())?;

        log::debug!("recovered private key for p = {}", self.params.p());

        self.set_private_key(a.clone());
        Ok(a)
    }

    /// Finds `x` with `alpha^x = target (mod p)`.
    pub fn solve_discrete_log(&self, target: &BigUint) -> Result<BigUint, ElGamalError> {
        BabyStepGiantStep::try_with(&self.params)?.solve(target)
    }

    /// Recovers the ephemeral exponent `k` from `y1 = alpha^k`.
    pub fn recover_ephemeral(&self, ciphertext: &Ciphertext) -> Result<BigUint, ElGamalError> {
        self.solve_discrete_log(&ciphertext.y1)
    }

    /// Encrypts the plaintext element `x`.
    ///
    /// When `k` is `None` the ephemeral exponent is drawn from `[3, p - 1)` with the thread
    /// local CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `ElGamalError::InvalidPlaintext` if `x >= p`.
    pub fn encrypt(&self, x: &BigUint, k: Option<&BigUint>) -> Result<Ciphertext, ElGamalError> {
        match k {
            Some(k) => self.encrypt_with_exponent(x, k),
            None => self.encrypt_with_rng(x, &mut rand::rng()),
        }
    }

    /// Encrypts `x` with an ephemeral exponent drawn from `rng` in `[3, p - 1)`.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        x: &BigUint,
        rng: &mut R,
    ) -> Result<Ciphertext, ElGamalError> {
        let low = BigUint::from(MIN_EPHEMERAL_EXPONENT);
        let high = self.params.p() - 1u32;
        let k = random_in_range(rng, &low, &high)?;

        self.encrypt_with_exponent(x, &k)
    }

    /// Decrypts `(y1, y2)` as `y2 * (y1^a)^-1 (mod p)`.
    ///
    /// # Errors
    ///
    /// Returns `ElGamalError::MissingPrivateKey` if no key has been set or derived.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint, ElGamalError> {
        let key = self.private_key()?;
        let field = self.params.field();

        let shared_secret = field.pow(&ciphertext.y1, key.exponent());
        let shared_secret_inverse = field.inv(&shared_secret)?;

        Ok(field.mul(&ciphertext.y2, &shared_secret_inverse))
    }

    fn encrypt_with_exponent(&self, x: &BigUint, k: &BigUint) -> Result<Ciphertext, ElGamalError> {
        if x >= self.params.p() {
            return Err(ElGamalError::InvalidPlaintext(format!(
                "Plaintext {} must be < {}",
                x,
                self.params.p()
            )));
        }

        let field = self.params.field();
        let y1 = field.pow(self.params.alpha(), k);
        let mask = field.pow(self.params.beta(), k);
        let y2 = field.mul(&mask, x);

        Ok(Ciphertext::new(y1, y2))
    }

    fn private_key(&self) -> Result<&PrivateKey, ElGamalError> {
        self.key.private_key().ok_or(ElGamalError::MissingPrivateKey)
    }
}
