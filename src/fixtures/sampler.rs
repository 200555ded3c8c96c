//! Fixed-point sampler.

use rand::{Rng, RngCore};

use crate::error::FixtureError;
use crate::fixtures::{Clock, Fixtures};
use crate::types::CoExp;

/// Largest coefficient drawn by [`Fixtures::random_co_exp`]
pub const MAX_RANDOM_CO: u64 = 1999;

/// Largest exponent drawn by [`Fixtures::random_co_exp`]
pub const MAX_RANDOM_EXP: u64 = 24;

impl<R: RngCore, C: Clock> Fixtures<R, C> {
    /// Draw `co` uniformly from `[1, 1999]` and `exp` from `[0, 24]`
    pub fn random_co_exp(&mut self) -> CoExp {
        CoExp::new(
            self.rng.gen_range(1..=MAX_RANDOM_CO),
            self.rng.gen_range(0..=MAX_RANDOM_EXP),
        )
    }

    /// Draw a value componentwise within `bound`.
    ///
    /// `co` is uniform in `[1, bound.co]`, `exp` uniform in `[0, bound.exp]`.
    ///
    /// # Errors
    ///
    /// [`FixtureError::InvalidBound`] if `bound.co` is 0.
    pub fn less_random_co_exp(&mut self, bound: CoExp) -> Result<CoExp, FixtureError> {
        if bound.co == 0 {
            return Err(FixtureError::InvalidBound { co: bound.co });
        }
        Ok(self.draw_within(bound))
    }

    /// Bounded draw for callers holding a sampler-produced bound (`co >= 1`)
    pub(crate) fn draw_within(&mut self, bound: CoExp) -> CoExp {
        CoExp::new(
            self.rng.gen_range(1..=bound.co.max(1)),
            self.rng.gen_range(0..=bound.exp),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_co_exp_bounds() {
        let mut fixtures = Fixtures::seeded(42);
        for _ in 0..10_000 {
            let value = fixtures.random_co_exp();
            assert!((1..=MAX_RANDOM_CO).contains(&value.co));
            assert!(value.exp <= MAX_RANDOM_EXP);
        }
    }

    #[test]
    fn test_random_co_exp_reaches_extremes() {
        let mut fixtures = Fixtures::seeded(42);
        let draws: Vec<CoExp> = (0..50_000).map(|_| fixtures.random_co_exp()).collect();

        assert!(draws.iter().any(|v| v.exp == 0));
        assert!(draws.iter().any(|v| v.exp == MAX_RANDOM_EXP));
        assert!(draws.iter().any(|v| v.co == 1));
        assert!(draws.iter().any(|v| v.co == MAX_RANDOM_CO));
    }

    #[test]
    fn test_less_random_co_exp_within_bound() {
        let mut fixtures = Fixtures::seeded(7);
        let bound = CoExp::new(10, 3);
        for _ in 0..1_000 {
            let value = fixtures.less_random_co_exp(bound).unwrap();
            assert!(value.co >= 1);
            assert!(value.is_within(&bound));
        }
    }

    #[test]
    fn test_less_random_co_exp_unit_bound() {
        let mut fixtures = Fixtures::seeded(7);
        assert_eq!(fixtures.less_random_co_exp(CoExp::new(1, 0)), Ok(CoExp::new(1, 0)));
    }

    #[test]
    fn test_less_random_co_exp_rejects_zero_coefficient() {
        let mut fixtures = Fixtures::seeded(7);
        assert_eq!(
            fixtures.less_random_co_exp(CoExp::new(0, 5)),
            Err(FixtureError::InvalidBound { co: 0 })
        );
    }
}
