use crate::domain::model::Participant;
use crate::utils::error::{GroupingError, Result};
use crate::utils::validation::validate_range;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ParticipantRow {
    #[serde(default)]
    name: Option<String>,
    score: String,
}

/// Reads participants from CSV with a `score` column and an optional `name`
/// column. Rows without a name are called `Person {row}`.
pub fn parse_participants_csv(data: &[u8], bounds: (f64, f64)) -> Result<Vec<Participant>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut participants = Vec::new();
    for (index, row) in reader.deserialize::<ParticipantRow>().enumerate() {
        let row_number = index + 1;
        let row = row?;

        let score: f64 = row
            .score
            .parse()
            .map_err(|_| GroupingError::InvalidParticipantError {
                row: row_number,
                reason: format!("score '{}' is not a number", row.score),
            })?;
        check_score(row_number, score, bounds)?;

        let name = row
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| Participant::default_name(row_number));

        participants.push(Participant::new(name, score));
    }

    tracing::debug!("Parsed {} participants from CSV", participants.len());
    Ok(participants)
}

/// Builds `Person 1..n` participants from a plain score list.
pub fn participants_from_scores(scores: &[f64], bounds: (f64, f64)) -> Result<Vec<Participant>> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| {
            check_score(index + 1, score, bounds)?;
            Ok(Participant::new(Participant::default_name(index + 1), score))
        })
        .collect()
}

fn check_score(row: usize, score: f64, (min, max): (f64, f64)) -> Result<()> {
    if !score.is_finite() {
        return Err(GroupingError::InvalidParticipantError {
            row,
            reason: "score must be a finite number".to_string(),
        });
    }
    validate_range("score", score, min, max).map_err(|e| match e {
        GroupingError::InvalidConfigValueError { reason, .. } => {
            GroupingError::InvalidParticipantError {
                row,
                reason: format!("score {}: {}", score, reason),
            }
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: (f64, f64) = (0.0, 10.0);

    #[test]
    fn test_parse_named_rows() {
        let data = b"name,score\nAlice,9.5\nBob , 7\n";
        let participants = parse_participants_csv(data, BOUNDS).unwrap();
        assert_eq!(
            participants,
            vec![Participant::new("Alice", 9.5), Participant::new("Bob", 7.0)]
        );
    }

    #[test]
    fn test_missing_names_get_defaults() {
        let data = b"score\n8.0\n6.5\n";
        let participants = parse_participants_csv(data, BOUNDS).unwrap();
        assert_eq!(participants[0].name, "Person 1");
        assert_eq!(participants[1].name, "Person 2");

        let data = b"name,score\n,8.0\nCara,6.5\n";
        let participants = parse_participants_csv(data, BOUNDS).unwrap();
        assert_eq!(participants[0].name, "Person 1");
        assert_eq!(participants[1].name, "Cara");
    }

    #[test]
    fn test_bad_score_names_row() {
        let data = b"name,score\nAlice,9\nBob,high\n";
        let err = parse_participants_csv(data, BOUNDS).unwrap_err();
        assert!(matches!(err, GroupingError::InvalidParticipantError { row: 2, .. }));
    }

    #[test]
    fn test_out_of_bounds_score() {
        let data = b"score\n10.5\n";
        assert!(parse_participants_csv(data, BOUNDS).is_err());
        assert!(participants_from_scores(&[3.0, -1.0], BOUNDS).is_err());
        assert!(participants_from_scores(&[f64::NAN], BOUNDS).is_err());
    }

    #[test]
    fn test_bounds_error_carries_row_and_range() {
        let err = participants_from_scores(&[5.0, 7.0, 12.5], BOUNDS).unwrap_err();
        match err {
            GroupingError::InvalidParticipantError { row, reason } => {
                assert_eq!(row, 3);
                assert!(reason.contains("between 0 and 10"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(participants_from_scores(&[0.0, 10.0], BOUNDS).is_ok());
    }

    #[test]
    fn test_inline_scores() {
        let participants = participants_from_scores(&[9.0, 8.0], BOUNDS).unwrap();
        assert_eq!(participants[1], Participant::new("Person 2", 8.0));
    }
}
