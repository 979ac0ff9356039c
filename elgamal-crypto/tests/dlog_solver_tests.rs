//! Generic tests for the discrete log solvers.
//!
//! Every solver is run through the `DiscreteLogSolver` trait and checked against all
//! powers of the generator for a few small primes.

use elgamal_crypto::dlog::{BabyStepGiantStep, DiscreteLogSolver, NaiveSearch};
use elgamal_crypto::errors::ElGamalError;
use elgamal_crypto::keypair::GroupParameters;

use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// (p, primitive root) pairs.
const TEST_GROUPS: [(u64, u64); 4] = [(5, 2), (23, 5), (101, 2), (1009, 11)];

fn big(value: u64) -> BigUint {
    BigUint::from(value)
}

fn params(p: u64, alpha: u64) -> GroupParameters {
    GroupParameters::try_with(big(p), big(alpha), big(alpha)).expect("valid parameters")
}

/// Walks alpha^0, alpha^1, ... and checks the solver recovers every exponent.
fn test_all_values<S: DiscreteLogSolver>(p: u64, alpha: u64) {
    let params = params(p, alpha);
    let solver = S::new(&params).expect("Failed to create solver");
    let field = params.field();

    let mut target = BigUint::one();
    for x in 0..(p - 1) {
        let result = solver.solve(&target).expect("Solver returned error");

        assert_eq!(result, big(x), "Failed for p={}, x={}: got {}", p, x, result);

        target = field.mul(&target, params.alpha());
    }
}

fn test_solver<S: DiscreteLogSolver>() {
    for (p, alpha) in TEST_GROUPS {
        test_all_values::<S>(p, alpha);
    }
}

#[test]
fn test_bsgs() {
    test_solver::<BabyStepGiantStep>();
}

#[test]
fn test_naive_search() {
    test_solver::<NaiveSearch>();
}

#[test]
fn test_bsgs_all_values_larger_group() {
    test_all_values::<BabyStepGiantStep>(7919, 7);
}

#[test]
fn test_bsgs_matches_naive_on_random_targets() -> Result<(), ElGamalError> {
    let params = params(104_729, 12);
    let fast = BabyStepGiantStep::new(&params)?;
    let slow = NaiveSearch::new(&params)?;
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let target = big(rng.random_range(1..104_729u64));
        assert_eq!(fast.solve(&target)?, slow.solve(&target)?);
    }
    Ok(())
}

#[test]
fn test_bsgs_reduces_modulo_subgroup_order() -> Result<(), ElGamalError> {
    // 2 generates Z_1000003*, 2^6 = 64 generates the subgroup of order 166667
    let p = 1_000_003u64;
    let order = 166_667u64;
    let params = GroupParameters::try_with(big(p), big(64), big(64))?.with_order(big(order))?;
    let solver = BabyStepGiantStep::new(&params)?;
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let x = rng.random_range(0..p);
        let target = params.field().pow(params.alpha(), &big(x));
        assert_eq!(solver.solve(&target)?, big(x % order));
    }

    // 2 is a generator of the full group, so it is outside the subgroup
    assert!(matches!(
        solver.solve(&big(2)),
        Err(ElGamalError::DiscreteLogNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_bsgs_with_full_order_near_million() -> Result<(), ElGamalError> {
    let params = params(1_000_003, 2);
    let solver = BabyStepGiantStep::new(&params)?;
    assert_eq!(solver.solve(&big(671_432))?, big(424_242));
    Ok(())
}
