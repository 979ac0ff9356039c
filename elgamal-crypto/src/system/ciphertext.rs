use crate::codec::decimal;
use crate::errors::ElGamalError;

use num_bigint::BigUint;

use serde::{Deserialize, Serialize};

/// ElGamal ciphertext `(y1, y2)`.
///
/// `y1 = alpha^k` carries the ephemeral exponent, `y2 = beta^k * x` the masked plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    #[serde(with = "decimal")]
    pub y1: BigUint,
    #[serde(with = "decimal")]
    pub y2: BigUint,
}

impl Ciphertext {
    pub fn new(y1: BigUint, y2: BigUint) -> Self {
        Self { y1, y2 }
    }
}

impl From<(BigUint, BigUint)> for Ciphertext {
    fn from((y1, y2): (BigUint, BigUint)) -> Self {
        Self::new(y1, y2)
    }
}

/// Serializes a list of ciphertexts as `[{"y1": "...", "y2": "..."}, ...]`.
pub fn ciphertexts_to_json(ciphertexts: &[Ciphertext]) -> Result<String, ElGamalError> {
    Ok(serde_json::to_string_pretty(ciphertexts)?)
}

/// Parses a list of ciphertexts. Values may be decimal strings or JSON numbers.
pub fn ciphertexts_from_json(data: &str) -> Result<Vec<Ciphertext>, ElGamalError> {
    Ok(serde_json::from_str(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_decimal_strings() -> Result<(), ElGamalError> {
        let large = "123456789012345678901234567890".parse::<BigUint>().unwrap();
        let ciphertexts = vec![Ciphertext::new(BigUint::from(10u32), large.clone())];

        let json = ciphertexts_to_json(&ciphertexts)?;
        assert!(json.contains("\"123456789012345678901234567890\""));

        let parsed = ciphertexts_from_json(&json)?;
        assert_eq!(parsed, ciphertexts);
        Ok(())
    }

    #[test]
    fn test_json_accepts_numbers() -> Result<(), ElGamalError> {
        let parsed = ciphertexts_from_json(r#"[{"y1": 10, "y2": "14"}, {"y1": 3, "y2": 7}]"#)?;
        assert_eq!(
            parsed,
            vec![
                Ciphertext::from((BigUint::from(10u32), BigUint::from(14u32))),
                Ciphertext::from((BigUint::from(3u32), BigUint::from(7u32))),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(matches!(
            ciphertexts_from_json(r#"[{"y1": "ten", "y2": "14"}]"#),
            Err(ElGamalError::SerializationError(_))
        ));
        assert!(ciphertexts_from_json(r#"[{"y1": -3, "y2": "14"}]"#).is_err());
    }
}
