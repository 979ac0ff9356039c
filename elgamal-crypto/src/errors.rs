#[derive(thiserror::Error, Debug)]
pub enum ElGamalError {
    /// The modulus is not a prime greater than 1.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// A negative value was supplied where an exponent is expected.
    #[error("InvalidExponent: {0}")]
    InvalidExponent(String),
    /// Inversion of an element congruent to zero.
    #[error("NoInverse: {0}")]
    NoInverse(String),

    #[error("Private key must be set before decrypting")]
    MissingPrivateKey,
    #[error("DiscreteLogNotFound: {0}")]
    DiscreteLogNotFound(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("InvalidPlaintext: {0}")]
    InvalidPlaintext(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
