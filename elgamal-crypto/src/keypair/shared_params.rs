use crate::errors::ElGamalError;
use crate::ring::PrimeField;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Public parameters of the group: modulus, generator and public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParameters {
    /// Arithmetic engine over Z_p.
    field: PrimeField,
    /// Generator `alpha` of the subgroup in use.
    alpha: BigUint,
    /// Public key `beta = alpha^a mod p`.
    beta: BigUint,
    /// Order of `alpha`. Recovered exponents are reduced modulo this value.
    order: BigUint,
}

impl GroupParameters {
    /// Creates a new GroupParameters instance, assuming `alpha` generates the whole group
    /// (order `p - 1`).
    pub fn try_with(p: BigUint, alpha: BigUint, beta: BigUint) -> Result<Self, ElGamalError> {
        let field = PrimeField::try_with(p)?;

        check_element(&field, &alpha, "alpha")?;
        check_element(&field, &beta, "beta")?;

        let order = field.modulus() - 1u32;

        Ok(Self {
            field,
            alpha,
            beta,
            order,
        })
    }

    /// Replaces the default order `p - 1` with the actual order of `alpha`.
    ///
    /// The order must be positive and satisfy `alpha^order = 1 (mod p)`.
    pub fn with_order(mut self, order: BigUint) -> Result<Self, ElGamalError> {
        if order.is_zero() {
            return Err(ElGamalError::InvalidParameters(
                "Order of alpha must be > 0".to_string(),
            ));
        }

        if !self.field.pow(&self.alpha, &order).is_one() {
            return Err(ElGamalError::InvalidParameters(format!(
                "alpha^{} is not 1 mod {}",
                order,
                self.field.modulus()
            )));
        }

        self.order = order;
        Ok(self)
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    pub fn alpha(&self) -> &BigUint {
        &self.alpha
    }

    pub fn beta(&self) -> &BigUint {
        &self.beta
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }
}

fn check_element(field: &PrimeField, value: &BigUint, name: &str) -> Result<(), ElGamalError> {
    if value.is_zero() || value >= field.modulus() {
        return Err(ElGamalError::InvalidParameters(format!(
            "{} must be in [1, {}), got {}",
            name,
            field.modulus(),
            value
        )));
    }

    Ok(())
}
