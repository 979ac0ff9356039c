//! Shanks' baby-step giant-step algorithm for solving discrete logarithms.

use crate::dlog::{DiscreteLogSolver, check_target};
use crate::errors::ElGamalError;
use crate::keypair::GroupParameters;
use crate::ring::ceil_sqrt;

use itertools::{EitherOrBoth, Itertools};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A list of `(j, element)` pairs kept sorted by element.
type StepList = Vec<(usize, BigUint)>;

/// Baby-step giant-step solver.
///
/// The baby steps `alpha^(m*j)` do not depend on the target, so they are computed once
/// and shared by every [`BabyStepGiantStep::solve`] call.
#[derive(Debug, Clone)]
pub struct BabyStepGiantStep {
    params: GroupParameters,
    /// m = ceil(sqrt(p)), the length of both step lists.
    m: usize,
    /// alpha^-1, the giant-step multiplier.
    alpha_inverse: BigUint,
    /// `(j, alpha^(m*j))` for j = 0..m, sorted by element.
    baby_steps: StepList,
}

impl BabyStepGiantStep {
    /// Builds the baby-step list for the given parameters.
    pub fn try_with(params: &GroupParameters) -> Result<Self, ElGamalError> {
        let field = params.field();
        let m_big = ceil_sqrt(params.p());
        let m = m_big.to_usize().ok_or_else(|| {
            ElGamalError::InvalidParameters(format!(
                "Step count {} does not fit in memory",
                m_big
            ))
        })?;

        let alpha_inverse = field.inv(params.alpha())?;

        // alpha^(m*(j+1)) = alpha^(m*j) * alpha^m
        let stride = field.pow(params.alpha(), &m_big);
        let mut baby_steps = allocate_steps(m)?;
        let mut current = BigUint::one();
        for j in 0..m {
            let next = field.mul(&current, &stride);
            baby_steps.push((j, current));
            current = next;
        }
        baby_steps.sort_by(|left, right| left.1.cmp(&right.1));

        log::debug!("built {} baby steps for p = {}", m, params.p());

        Ok(Self {
            params: params.clone(),
            m,
            alpha_inverse,
            baby_steps,
        })
    }

    /// Returns the parameters the baby-step list was built for.
    pub fn params(&self) -> &GroupParameters {
        &self.params
    }

    /// Returns the number of entries in each step list.
    pub fn step_count(&self) -> usize {
        self.m
    }

    /// Solves the discrete log problem using baby-step giant-step.
    ///
    /// Algorithm:
    /// 1. Build `(j, target * alpha^-j)` for j = 0..m and sort by element.
    /// 2. Walk both sorted lists together; the first equal element gives `(j1, j2)`.
    /// 3. `alpha^(m*j1) = target * alpha^-j2`, so x = m*j1 + j2 (mod order).
    pub fn solve(&self, target: &BigUint) -> Result<BigUint, ElGamalError> {
        let target = check_target(&self.params, target)?;

        let giant_steps = self.giant_steps(&target)?;

        let found = self
            .baby_steps
            .iter()
            .merge_join_by(giant_steps.iter(), |left, right| left.1.cmp(&right.1))
            .find_map(|pair| match pair {
                EitherOrBoth::Both(baby, giant) => Some((baby.0, giant.0)),
                _ => None,
            });

        let Some((j1, j2)) = found else {
            return Err(ElGamalError::DiscreteLogNotFound(format!(
                "{} is not a power of {} mod {}",
                target,
                self.params.alpha(),
                self.params.p()
            )));
        };

        log::trace!("matched baby step {} with giant step {}", j1, j2);

        let x = (BigUint::from(self.m) * j1 + j2) % self.params.order();

        debug_assert_eq!(self.params.field().pow(self.params.alpha(), &x), target);

        Ok(x)
    }

    /// Solves a batch of targets against the shared baby-step list.
    ///
    /// Results are returned in the order of `targets`. The baby-step list is read-only here,
    /// so targets are spread over the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn solve_many(&self, targets: &[BigUint]) -> Vec<Result<BigUint, ElGamalError>> {
        targets.par_iter().map(|target| self.solve(target)).collect()
    }

    /// Solves a batch of targets against the shared baby-step list.
    ///
    /// Results are returned in the order of `targets`.
    #[cfg(not(feature = "parallel"))]
    pub fn solve_many(&self, targets: &[BigUint]) -> Vec<Result<BigUint, ElGamalError>> {
        targets.iter().map(|target| self.solve(target)).collect()
    }

    fn giant_steps(&self, target: &BigUint) -> Result<StepList, ElGamalError> {
        let field = self.params.field();

        let mut giant_steps = allocate_steps(self.m)?;
        let mut current = target.clone();
        for j in 0..self.m {
            let next = field.mul(&current, &self.alpha_inverse);
            giant_steps.push((j, current));
            current = next;
        }
        giant_steps.sort_by(|left, right| left.1.cmp(&right.1));

        Ok(giant_steps)
    }
}

fn allocate_steps(m: usize) -> Result<StepList, ElGamalError> {
    let mut steps = Vec::new();
    steps.try_reserve_exact(m).map_err(|e| {
        ElGamalError::InvalidParameters(format!("Cannot allocate {} steps: {}", m, e))
    })?;

    Ok(steps)
}

impl DiscreteLogSolver for BabyStepGiantStep {
    fn new(params: &GroupParameters) -> Result<Self, ElGamalError> {
        BabyStepGiantStep::try_with(params)
    }

    fn solve(&self, target: &BigUint) -> Result<BigUint, ElGamalError> {
        BabyStepGiantStep::solve(self, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    fn toy_params() -> GroupParameters {
        GroupParameters::try_with(big(23), big(5), big(8)).unwrap()
    }

    #[test]
    fn test_step_count() -> Result<(), ElGamalError> {
        let solver = BabyStepGiantStep::try_with(&toy_params())?;
        assert_eq!(solver.step_count(), 5);
        Ok(())
    }

    #[test]
    fn test_baby_steps_sorted() -> Result<(), ElGamalError> {
        let solver = BabyStepGiantStep::try_with(&toy_params())?;
        assert!(solver.baby_steps.windows(2).all(|w| w[0].1 <= w[1].1));
        Ok(())
    }

    #[test]
    fn test_solves_public_key() -> Result<(), ElGamalError> {
        let solver = BabyStepGiantStep::try_with(&toy_params())?;
        assert_eq!(solver.solve(&big(8))?, big(6));
        assert_eq!(solver.solve(&big(1))?, big(0));
        assert_eq!(solver.solve(&big(5))?, big(1));
        Ok(())
    }

    #[test]
    fn test_every_element_of_small_group() -> Result<(), ElGamalError> {
        let params = toy_params();
        let solver = BabyStepGiantStep::try_with(&params)?;
        for x in 0..22u64 {
            let target = params.field().pow(params.alpha(), &big(x));
            assert_eq!(solver.solve(&target)?, big(x), "x = {}", x);
        }
        Ok(())
    }

    #[test]
    fn test_target_outside_subgroup() -> Result<(), ElGamalError> {
        // 2 generates the subgroup of order 11 (the quadratic residues), 5 is not a residue
        let params = GroupParameters::try_with(big(23), big(2), big(4))?.with_order(big(11))?;
        let solver = BabyStepGiantStep::try_with(&params)?;
        assert!(matches!(
            solver.solve(&big(5)),
            Err(ElGamalError::DiscreteLogNotFound(_))
        ));
        assert_eq!(solver.solve(&big(4))?, big(2));
        Ok(())
    }

    #[test]
    fn test_zero_target_not_found() -> Result<(), ElGamalError> {
        let solver = BabyStepGiantStep::try_with(&toy_params())?;
        assert!(matches!(
            solver.solve(&big(0)),
            Err(ElGamalError::DiscreteLogNotFound(_))
        ));
        assert!(matches!(
            solver.solve(&big(46)),
            Err(ElGamalError::DiscreteLogNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_unreduced_target() -> Result<(), ElGamalError> {
        let solver = BabyStepGiantStep::try_with(&toy_params())?;
        // 33 = 10 (mod 23) = 5^3
        assert_eq!(solver.solve(&big(33))?, big(3));
        assert_eq!(solver.solve(&big(23 * 1000 + 8))?, big(6));
        Ok(())
    }

    #[test]
    fn test_solve_many_keeps_order() -> Result<(), ElGamalError> {
        let solver = BabyStepGiantStep::try_with(&toy_params())?;
        let targets = vec![big(8), big(10), big(0), big(1)];
        let results = solver.solve_many(&targets);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().ok(), Some(&big(6)));
        assert_eq!(results[1].as_ref().ok(), Some(&big(3)));
        assert!(results[2].is_err());
        assert_eq!(results[3].as_ref().ok(), Some(&big(0)));
        Ok(())
    }
}
