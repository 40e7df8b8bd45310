use crate::domain::model::{Group, GroupingResult, Participant, GROUP_CAPACITY};
use crate::utils::error::{GroupingError, Result};

/// Greedy least-average assignment.
///
/// Participants are taken in descending score order (stable, so equal scores
/// keep their input order) and each one joins the non-full group with the
/// lowest current average. Ties on the average go to the lowest group index.
/// Groups come back in index order.
pub fn balance(participants: &[Participant], group_count: usize) -> Result<GroupingResult> {
    if group_count == 0 {
        return Err(GroupingError::ValidationError {
            message: "group count must be at least 1".to_string(),
        });
    }
    if !within_capacity(participants.len(), group_count) {
        return Err(GroupingError::CapacityExceeded {
            participants: participants.len(),
            groups: group_count,
            capacity: GROUP_CAPACITY,
        });
    }

    let mut ordered: Vec<&Participant> = participants.iter().collect();
    ordered.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut groups = vec![Group::new(); group_count];

    for participant in ordered {
        let index = lowest_average_open_group(&groups).ok_or(GroupingError::CapacityExceeded {
            participants: participants.len(),
            groups: group_count,
            capacity: GROUP_CAPACITY,
        })?;

        tracing::debug!(
            participant = %participant.name,
            score = participant.score,
            group = index + 1,
            group_average = groups[index].average(),
            "Assigning participant"
        );
        groups[index].push(participant.clone());
    }

    Ok(GroupingResult::new(groups))
}

fn within_capacity(participant_count: usize, group_count: usize) -> bool {
    group_count.saturating_mul(GROUP_CAPACITY) >= participant_count
}

// First match wins on equal averages; `Iterator::min_by` would keep the last.
fn lowest_average_open_group(groups: &[Group]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, group) in groups.iter().enumerate() {
        if group.is_full() {
            continue;
        }
        let average = group.average();
        match best {
            Some((_, best_average)) if average >= best_average => {}
            _ => best = Some((index, average)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(scores: &[f64]) -> Vec<Participant> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| Participant::new(Participant::default_name(i + 1), s))
            .collect()
    }

    fn scores_of(group: &Group) -> Vec<f64> {
        group.members().iter().map(|p| p.score).collect()
    }

    #[test]
    fn test_five_participants_two_groups() {
        let result = balance(&people(&[9.0, 8.0, 7.0, 6.0, 5.0]), 2).unwrap();
        let groups = result.groups();
        assert_eq!(scores_of(&groups[0]), vec![9.0]);
        assert_eq!(scores_of(&groups[1]), vec![8.0, 7.0, 6.0, 5.0]);
        assert_eq!(result.rounded_averages()[1].1, 6.5);
    }

    #[test]
    fn test_equal_scores_fill_singletons() {
        let result = balance(&people(&[10.0, 10.0, 10.0, 10.0]), 4).unwrap();
        for (i, group) in result.groups().iter().enumerate() {
            assert_eq!(group.len(), 1);
            assert_eq!(group.average(), 10.0);
            assert_eq!(group.members()[0].name, format!("Person {}", i + 1));
        }
    }

    #[test]
    fn test_single_participant() {
        let result = balance(&people(&[7.25]), 1).unwrap();
        assert_eq!(result.group_count(), 1);
        assert_eq!(result.groups()[0].average(), 7.25);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            Participant::new("a", 5.0),
            Participant::new("b", 8.0),
            Participant::new("c", 5.0),
            Participant::new("d", 8.0),
        ];
        let result = balance(&input, 2).unwrap();
        let names: Vec<Vec<&str>> = result
            .groups()
            .iter()
            .map(|g| g.members().iter().map(|p| p.name.as_str()).collect())
            .collect();
        // b -> G1, d -> G2, a -> G1 (tie at 8), c -> G1 (6.5 < 8)
        assert_eq!(names, vec![vec!["b", "a", "c"], vec!["d"]]);
    }

    #[test]
    fn test_full_groups_are_skipped() {
        let result = balance(&people(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 9.0]), 3).unwrap();
        assert!(result.groups().iter().all(|g| g.len() <= GROUP_CAPACITY));
        assert_eq!(result.participant_count(), 9);
    }

    #[test]
    fn test_capacity_exceeded_is_rejected() {
        let err = balance(&people(&[1.0; 9]), 2).unwrap_err();
        assert!(matches!(
            err,
            GroupingError::CapacityExceeded {
                participants: 9,
                groups: 2,
                capacity: 4
            }
        ));
    }

    #[test]
    fn test_capacity_check_does_not_overflow() {
        assert!(within_capacity(5, usize::MAX));
        assert!(within_capacity(usize::MAX, usize::MAX / 2));
        assert!(within_capacity(8, 2));
        assert!(!within_capacity(9, 2));
    }

    #[test]
    fn test_zero_groups_is_rejected() {
        assert!(balance(&people(&[1.0]), 0).is_err());
    }

    #[test]
    fn test_empty_participants_yield_empty_groups() {
        let result = balance(&[], 2).unwrap();
        assert_eq!(result.group_count(), 2);
        assert_eq!(result.averages(), vec![0.0, 0.0]);
    }
}
