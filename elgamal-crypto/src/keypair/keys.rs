use num_bigint::BigUint;

use std::fmt;

/// Secret exponent `a` with `beta = alpha^a (mod p)`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    exponent: BigUint,
}

impl PrivateKey {
    pub fn new(exponent: BigUint) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// Whether a cryptosystem instance can decrypt.
///
/// `Absent` is the initial state. Once a key is set or derived the instance stays `Present`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Absent,
    Present(PrivateKey),
}

impl KeyState {
    /// Returns the key when one has been set or derived.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        match self {
            KeyState::Absent => None,
            KeyState::Present(key) => Some(key),
        }
    }

    /// True once the instance can decrypt.
    pub fn is_present(&self) -> bool {
        matches!(self, KeyState::Present(_))
    }
}
