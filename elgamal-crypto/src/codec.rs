//! Base-26 trigram codec used to carry short lowercase text through the cryptosystem.
//!
//! A trigram `c2 c1 c0` maps to `26^2 * c2 + 26 * c1 + c0` with `a = 0, ..., z = 25`,
//! so every trigram fits below `26^3 = 17576`. The modulus must exceed that for the
//! encoded values to be valid plaintexts.

use crate::errors::ElGamalError;

use num_bigint::BigUint;

/// Letters per encoded block.
pub const TRIGRAM_LEN: usize = 3;
/// Number of distinct trigrams, `26^3`.
pub const TRIGRAM_SPACE: u32 = 26 * 26 * 26;

const ALPHABET_SIZE: u32 = 26;

/// Renders the three low base-26 digits of `number` as lowercase letters.
///
/// Values of `26^3` and above wrap, so a wrong decryption still prints three letters.
///
/// # Example
///
/// ```
/// # use elgamal_crypto::codec::number_to_text;
/// # use num_bigint::BigUint;
/// assert_eq!(number_to_text(&BigUint::from(0u32)), "aaa");
/// assert_eq!(number_to_text(&BigUint::from(28u32)), "abc");
/// assert_eq!(number_to_text(&BigUint::from(17575u32)), "zzz");
/// ```
pub fn number_to_text(number: &BigUint) -> String {
    let reduced = number % TRIGRAM_SPACE;
    let mut value = reduced.iter_u32_digits().next().unwrap_or(0);

    let mut letters = [b'a'; TRIGRAM_LEN];
    for letter in letters.iter_mut().rev() {
        *letter = b'a' + (value % ALPHABET_SIZE) as u8;
        value /= ALPHABET_SIZE;
    }

    letters.iter().map(|&b| b as char).collect()
}

/// Parses one to three ASCII letters, most significant first.
///
/// # Errors
///
/// Returns `ElGamalError::InvalidPlaintext` for empty input, more than three characters or
/// anything that is not an ASCII letter.
///
/// # Example
///
/// ```
/// # use elgamal_crypto::codec::text_to_number;
/// # use num_bigint::BigUint;
/// assert_eq!(text_to_number("abc").unwrap(), BigUint::from(28u32));
/// assert_eq!(text_to_number("Z").unwrap(), BigUint::from(25u32));
/// assert!(text_to_number("ab1").is_err());
/// ```
pub fn text_to_number(text: &str) -> Result<BigUint, ElGamalError> {
    if text.is_empty() || text.chars().count() > TRIGRAM_LEN {
        return Err(ElGamalError::InvalidPlaintext(format!(
            "Expected 1 to {} letters, got {:?}",
            TRIGRAM_LEN, text
        )));
    }

    let mut value = 0u32;
    for ch in text.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(ElGamalError::InvalidPlaintext(format!(
                "Only letters a-z can be encoded, got {:?}",
                ch
            )));
        }
        let digit = (ch.to_ascii_lowercase() as u8 - b'a') as u32;
        value = value * ALPHABET_SIZE + digit;
    }

    Ok(BigUint::from(value))
}

/// Splits a message into trigrams, ignoring non-letters.
///
/// The last block is right-padded with `a`.
pub fn encode_message(message: &str) -> Result<Vec<BigUint>, ElGamalError> {
    let letters: Vec<char> = message
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .collect();

    if letters.is_empty() {
        return Err(ElGamalError::InvalidPlaintext(
            "Message contains no letters".to_string(),
        ));
    }

    letters
        .chunks(TRIGRAM_LEN)
        .map(|chunk| {
            let mut block: String = chunk.iter().collect();
            while block.len() < TRIGRAM_LEN {
                block.push('a');
            }
            text_to_number(&block)
        })
        .collect()
}

/// Concatenates the trigrams of every number.
pub fn decode_message(numbers: &[BigUint]) -> String {
    numbers.iter().map(number_to_text).collect()
}

/// Serde helpers writing a `BigUint` as a decimal string.
///
/// Deserialization also accepts JSON numbers that fit in a `u64`.
pub mod decimal {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalRepr {
        Text(String),
        Number(u64),
    }

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
            DecimalRepr::Number(number) => Ok(BigUint::from(number)),
        }
    }
}
