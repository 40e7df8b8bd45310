use crate::domain::model::{GroupAdjustment, Resolution, GROUP_CAPACITY};

/// Clamps a requested group count into `[ceil(n / 4), n]`.
///
/// Both arguments are expected to be at least 1; callers validate that before
/// getting here.
pub fn resolve(participant_count: usize, requested_groups: usize) -> Resolution {
    let min_groups = participant_count.div_ceil(GROUP_CAPACITY);
    let max_groups = participant_count;

    let (groups, adjustment) = if requested_groups < min_groups {
        (
            min_groups,
            Some(GroupAdjustment::Increased {
                requested: requested_groups,
                minimum: min_groups,
            }),
        )
    } else if requested_groups > max_groups {
        (
            max_groups,
            Some(GroupAdjustment::Decreased {
                requested: requested_groups,
                maximum: max_groups,
            }),
        )
    } else {
        (requested_groups, None)
    };

    if let Some(adjustment) = &adjustment {
        tracing::warn!("⚠️ {}", adjustment);
    }
    tracing::debug!(
        participant_count,
        requested_groups,
        resolved_groups = groups,
        "Resolved group count"
    );

    Resolution {
        requested: requested_groups,
        groups,
        adjustment,
    }
}

pub fn resolve_group_count(participant_count: usize, requested_groups: usize) -> usize {
    resolve(participant_count, requested_groups).groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increases_to_capacity_minimum() {
        let resolution = resolve(5, 1);
        assert_eq!(resolution.groups, 2);
        assert_eq!(
            resolution.adjustment,
            Some(GroupAdjustment::Increased {
                requested: 1,
                minimum: 2
            })
        );
    }

    #[test]
    fn test_decreases_to_participant_count() {
        let resolution = resolve(3, 7);
        assert_eq!(resolution.groups, 3);
        assert_eq!(
            resolution.adjustment,
            Some(GroupAdjustment::Decreased {
                requested: 7,
                maximum: 3
            })
        );
    }

    #[test]
    fn test_passthrough_when_in_range() {
        let resolution = resolve(4, 4);
        assert_eq!(resolution.groups, 4);
        assert!(!resolution.was_adjusted());
        assert_eq!(resolve_group_count(1, 1), 1);
        assert_eq!(resolve_group_count(16, 4), 4);
    }

    #[test]
    fn test_result_always_within_bounds() {
        for n in 1..=40usize {
            let min = n.div_ceil(GROUP_CAPACITY);
            for r in 1..=45usize {
                let g = resolve_group_count(n, r);
                assert!(g >= min && g <= n, "n={} r={} g={}", n, r, g);
                if r >= min && r <= n {
                    assert_eq!(g, r);
                }
            }
        }
    }
}
