//! # ElGamal Crypto
//!
//! ElGamal encryption over the multiplicative group of a prime field, with Shanks'
//! baby-step giant-step solver for recovering private keys and ephemeral exponents.
//!
//! Toy cryptosystem: not constant time, no padding, no key management.

pub mod codec;
pub mod dlog;
pub mod errors;
pub mod keypair;
pub mod ring;
pub mod system;

pub use dlog::{BabyStepGiantStep, DiscreteLogSolver, NaiveSearch};
pub use errors::ElGamalError;
pub use keypair::{GroupParameters, KeyState, PrivateKey};
pub use ring::PrimeField;
pub use system::{Ciphertext, ElGamal};
