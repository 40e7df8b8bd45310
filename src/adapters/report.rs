use crate::domain::model::{group_label, round2, GroupAdjustment, GroupingResult, Resolution};
use crate::domain::ports::OutputFormat;
use crate::utils::error::{GroupingError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    requested_groups: usize,
    resolved_groups: usize,
    adjustment: Option<GroupAdjustment>,
    groups: Vec<JsonGroup<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonGroup<'a> {
    label: String,
    members: Vec<JsonMember<'a>>,
    size: usize,
    average: f64,
}

#[derive(Debug, Serialize)]
struct JsonMember<'a> {
    name: &'a str,
    score: f64,
}

/// Renders the result in the requested format.
pub fn render(result: &GroupingResult, resolution: &Resolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result, resolution)),
        OutputFormat::Csv => render_csv(result),
        OutputFormat::Json => render_json(result, resolution),
    }
}

/// Two text tables: every member with its group, then each group's average.
/// An adjustment notice, if any, comes first.
pub fn render_table(result: &GroupingResult, resolution: &Resolution) -> String {
    let mut out = String::new();

    if let Some(adjustment) = &resolution.adjustment {
        out.push_str(&format!("Notice: {}\n\n", adjustment));
    }

    let mut member_rows = Vec::new();
    for (i, group) in result.groups().iter().enumerate() {
        for member in group.members() {
            member_rows.push(vec![
                group_label(i),
                member.name.clone(),
                format!("{:.2}", member.score),
            ]);
        }
    }
    out.push_str("Final Groups\n");
    out.push_str(&text_table(&["Group #", "Participant", "Score"], &member_rows));

    let average_rows: Vec<Vec<String>> = result
        .rounded_averages()
        .into_iter()
        .map(|(label, average)| vec![label, format!("{:.2}", average)])
        .collect();
    out.push_str("\nGroup Averages\n");
    out.push_str(&text_table(&["Group", "Average"], &average_rows));

    out
}

/// One `group,participant,score` row per member, in group order.
pub fn render_csv(result: &GroupingResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["group", "participant", "score"])?;
    for (i, group) in result.groups().iter().enumerate() {
        for member in group.members() {
            writer.write_record([group_label(i), member.name.clone(), member.score.to_string()])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| GroupingError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| GroupingError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Pretty-printed JSON with resolution details and per-group averages.
pub fn render_json(result: &GroupingResult, resolution: &Resolution) -> Result<String> {
    let report = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        requested_groups: resolution.requested,
        resolved_groups: resolution.groups,
        adjustment: resolution.adjustment,
        groups: result
            .groups()
            .iter()
            .enumerate()
            .map(|(i, group)| JsonGroup {
                label: group_label(i),
                members: group
                    .members()
                    .iter()
                    .map(|m| JsonMember {
                        name: &m.name,
                        score: m.score,
                    })
                    .collect(),
                size: group.len(),
                average: round2(group.average()),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = format_row(headers.to_vec());
    out.push_str(&format!("|-{}-|\n", separator.join("-|-")));
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{balancer::balance, resolver::resolve};
    use crate::domain::model::Participant;

    fn sample() -> (GroupingResult, Resolution) {
        let participants: Vec<Participant> = [9.0, 8.0, 7.0, 6.0, 5.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| Participant::new(Participant::default_name(i + 1), s))
            .collect();
        let resolution = resolve(participants.len(), 1);
        let result = balance(&participants, resolution.groups).unwrap();
        (result, resolution)
    }

    #[test]
    fn test_table_has_both_sections() {
        let (result, resolution) = sample();
        let table = render_table(&result, &resolution);
        assert!(table.starts_with("Notice: Minimum number of groups required is 2"));
        assert!(table.contains("Final Groups"));
        assert!(table.contains("| Group 1 | Person 1    | 9.00  |"));
        assert!(table.contains("Group Averages"));
        assert!(table.contains("| Group 2 | 6.50    |"));
    }

    #[test]
    fn test_csv_rows() {
        let (result, _) = sample();
        let csv = render_csv(&result).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "group,participant,score");
        assert_eq!(lines[1], "Group 1,Person 1,9");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_json_report() {
        let (result, resolution) = sample();
        let json = render_json(&result, &resolution).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["requested_groups"], 1);
        assert_eq!(value["resolved_groups"], 2);
        assert_eq!(value["adjustment"]["kind"], "increased");
        assert_eq!(value["groups"][1]["size"], 4);
        assert_eq!(value["groups"][1]["average"], 6.5);
        assert_eq!(value["groups"][0]["members"][0]["name"], "Person 1");
    }

    #[test]
    fn test_json_average_rounds_half_way_like_table() {
        let participants = vec![Participant::new("Ada", 0.25), Participant::new("Bo", 0.0)];
        let resolution = resolve(participants.len(), 1);
        let result = balance(&participants, resolution.groups).unwrap();

        let json = render_json(&result, &resolution).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["groups"][0]["average"], 0.12);
        assert!(render_table(&result, &resolution).contains("| Group 1 | 0.12    |"));
    }
}
