//! Exhaustive search, useful as a reference for the faster solvers.

use crate::dlog::{DiscreteLogSolver, check_target};
use crate::errors::ElGamalError;
use crate::keypair::GroupParameters;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Walks `alpha^0, alpha^1, ...` until the target shows up. O(order) time, O(1) space.
#[derive(Debug, Clone)]
pub struct NaiveSearch {
    params: GroupParameters,
}

impl DiscreteLogSolver for NaiveSearch {
    fn new(params: &GroupParameters) -> Result<Self, ElGamalError> {
        Ok(Self {
            params: params.clone(),
        })
    }

    fn solve(&self, target: &BigUint) -> Result<BigUint, ElGamalError> {
        let target = check_target(&self.params, target)?;

        let field = self.params.field();
        let mut x = BigUint::zero();
        let mut current = BigUint::one();

        while &x < self.params.order() {
            if current == target {
                return Ok(x);
            }
            current = field.mul(&current, self.params.alpha());
            x += 1u32;
        }

        Err(ElGamalError::DiscreteLogNotFound(format!(
            "{} is not a power of {} mod {}",
            target,
            self.params.alpha(),
            self.params.p()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_search() -> Result<(), ElGamalError> {
        let params =
            GroupParameters::try_with(BigUint::from(23u32), BigUint::from(5u32), BigUint::from(8u32))?;
        let solver = NaiveSearch::new(&params)?;
        assert_eq!(solver.solve(&BigUint::from(8u32))?, BigUint::from(6u32));
        assert_eq!(solver.solve(&BigUint::one())?, BigUint::zero());
        assert_eq!(solver.solve(&BigUint::from(31u32))?, BigUint::from(6u32));
        Ok(())
    }
}
