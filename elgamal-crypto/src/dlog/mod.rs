//! Discrete logarithm solvers over the multiplicative group of Z_p.
//!
//! Given [`GroupParameters`] with generator `alpha`, a solver finds `x` with
//! `alpha^x = target (mod p)`. The result is reduced modulo the order of `alpha`.

pub mod bsgs;
pub mod naive;

pub use bsgs::BabyStepGiantStep;
pub use naive::NaiveSearch;

use crate::errors::ElGamalError;
use crate::keypair::GroupParameters;

use num_bigint::BigUint;
use num_traits::Zero;

/// Trait for discrete logarithm solvers.
///
/// Implementors may precompute target independent data in [`DiscreteLogSolver::new`] and
/// reuse it across calls to [`DiscreteLogSolver::solve`].
pub trait DiscreteLogSolver: Sized {
    /// Creates a solver bound to the given group parameters.
    fn new(params: &GroupParameters) -> Result<Self, ElGamalError>;

    /// Solves the discrete logarithm problem for `target`, taken mod p.
    ///
    /// # Returns
    /// * `Ok(x)` - `alpha^x = target`, with `x` in `[0, order)`.
    /// * `Err(ElGamalError::DiscreteLogNotFound)` - `target` is not a power of `alpha`.
    fn solve(&self, target: &BigUint) -> Result<BigUint, ElGamalError>;
}

/// Reduces `target` mod p. Zero is never a power of `alpha`.
pub(crate) fn check_target(
    params: &GroupParameters,
    target: &BigUint,
) -> Result<BigUint, ElGamalError> {
    let target = params.field().normalize(target);

    if target.is_zero() {
        return Err(ElGamalError::DiscreteLogNotFound(
            "0 is not an element of the multiplicative group".to_string(),
        ));
    }

    Ok(target)
}
