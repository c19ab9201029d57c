//! Property-based tests for the favorite decision

use proptest::prelude::*;

use bookshelf::backend::quotes::{evaluate, FavoriteError, FavoriteTransition};

proptest! {
    #[test]
    fn test_same_value_is_always_unchanged(
        value in any::<bool>(),
        count in 0usize..20,
        limit in 1usize..10,
    ) {
        prop_assert_eq!(evaluate(value, value, count, limit), Ok(FavoriteTransition::Unchanged));
    }

    #[test]
    fn test_unfavorite_is_always_allowed(count in 0usize..20, limit in 1usize..10) {
        prop_assert_eq!(evaluate(true, false, count, limit), Ok(FavoriteTransition::Unfavorite));
    }

    #[test]
    fn test_favorite_allowed_only_under_limit(count in 0usize..20, limit in 1usize..10) {
        let result = evaluate(false, true, count, limit);
        if count < limit {
            prop_assert_eq!(result, Ok(FavoriteTransition::Favorite));
        } else {
            prop_assert_eq!(result, Err(FavoriteError::LimitExceeded { limit }));
        }
    }

    #[test]
    fn test_applying_decisions_never_exceeds_limit(
        requests in proptest::collection::vec((0usize..8, any::<bool>()), 0..60),
        limit in 1usize..6,
    ) {
        // Eight quotes, all linked to one user.
        let mut flags = [false; 8];
        for (quote, desired) in requests {
            let count = flags.iter().filter(|f| **f).count();
            match evaluate(flags[quote], desired, count, limit) {
                Ok(FavoriteTransition::Favorite) => flags[quote] = true,
                Ok(FavoriteTransition::Unfavorite) => flags[quote] = false,
                Ok(FavoriteTransition::Unchanged) => prop_assert_eq!(flags[quote], desired),
                Err(FavoriteError::LimitExceeded { .. }) => prop_assert!(count >= limit),
            }
            prop_assert!(flags.iter().filter(|f| **f).count() <= limit);
        }
    }
}
