use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::ir::{Case, Dispatch, Overflow};

/// CLI argument → highest arity covered.
///
/// The argument excludes one extra case reserved internally, so the bound is
/// always `num_of_cases + 1`. Every generated threshold shifts with this.
pub fn effective_bound(num_of_cases: u32) -> Result<u32> {
    num_of_cases
        .checked_add(1)
        .ok_or(GenerateError::BoundOverflow { given: num_of_cases })
}

pub fn lower_case(arity: u32, cfg: &GeneratorConfig) -> Case {
    let bindings = (1..=arity).map(|i| cfg.placeholder(i)).collect();
    Case { arity, bindings }
}

/// First arity the cases don't cover; `u64` so it exists for `bound == u32::MAX`.
pub fn overflow_threshold(bound: u32) -> u64 {
    u64::from(bound) + 1
}

pub fn lower_to_ir(bound: u32, cfg: &GeneratorConfig) -> Dispatch {
    let cases = (0..=bound).map(|k| lower_case(k, cfg)).collect::<Vec<_>>();
    Dispatch {
        bound,
        cases,
        overflow: Overflow {
            threshold: overflow_threshold(bound),
            message: cfg.overflow_message.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_is_argument_plus_one() {
        assert_eq!(effective_bound(0).unwrap(), 1);
        assert_eq!(effective_bound(2).unwrap(), 3);
    }

    #[test]
    fn bound_overflow_is_rejected() {
        let err = effective_bound(u32::MAX).unwrap_err();
        assert!(matches!(err, GenerateError::BoundOverflow { given } if given == u32::MAX));
    }

    #[test]
    fn largest_accepted_argument_keeps_threshold_past_bound() {
        let bound = effective_bound(u32::MAX - 1).unwrap();
        assert_eq!(bound, u32::MAX);
        let threshold = overflow_threshold(bound);
        assert_eq!(threshold, u64::from(u32::MAX) + 1);
        assert!(threshold > u64::from(bound));
    }

    #[test]
    fn threshold_is_bound_plus_one() {
        for bound in [0u32, 1, 3, 16] {
            let d = lower_to_ir(bound, &GeneratorConfig::default());
            assert_eq!(d.overflow.threshold, u64::from(bound) + 1);
        }
    }

    #[test]
    fn zero_arity_case_has_no_bindings() {
        let case = lower_case(0, &GeneratorConfig::default());
        assert!(case.is_empty());
    }

    #[test]
    fn bindings_follow_declaration_order() {
        let case = lower_case(4, &GeneratorConfig::default());
        assert_eq!(case.bindings, vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn dispatch_covers_zero_through_bound() {
        let d = lower_to_ir(3, &GeneratorConfig::default());
        let arities = d.cases.iter().map(|c| c.arity).collect::<Vec<_>>();
        assert_eq!(arities, vec![0, 1, 2, 3]);
        assert_eq!(d.overflow.threshold, 4);
        assert_eq!(d.branch_count(), 5);
    }

    #[test]
    fn larger_bound_extends_smaller_one() {
        let cfg = GeneratorConfig::default();
        let small = lower_to_ir(2, &cfg);
        let large = lower_to_ir(5, &cfg);
        assert_eq!(&large.cases[..small.cases.len()], &small.cases[..]);
        assert_eq!(small.overflow.message, large.overflow.message);
        assert_ne!(small.overflow.threshold, large.overflow.threshold);
    }
}
