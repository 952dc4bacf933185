use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::model::RiskLevel;
use crate::report::ImpactReport;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a 0-1 score as a percentage with one decimal ("37.2%").
/// NaN renders as "n/a".
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.1}%", score * 100.0)
    }
}

/// Format a head count in compact notation (1.5k, 2.3M, 847)
pub fn format_count(count: f64) -> String {
    if count.is_nan() {
        return "n/a".to_string();
    }

    let formatted = if count >= 1_000_000.0 {
        format!("{:.1}M", count / 1_000_000.0)
    } else if count >= 1_000.0 {
        format!("{:.1}k", count / 1_000.0)
    } else {
        format!("{:.0}", count)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    formatted
        .replace(".0M", "M")
        .replace(".0k", "k")
}

/// Format a duration in months ("54mo")
pub fn format_months(months: f64) -> String {
    if months.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.0}mo", months)
    }
}

/// Pad a risk level to `width`, then color it (padding first so ANSI codes
/// don't break alignment)
fn format_level(level: RiskLevel, width: usize, use_colors: bool) -> String {
    let text = format!("{:<width$}", level.as_str(), width = width);
    if !use_colors {
        return text;
    }
    match level {
        RiskLevel::High => text.red().bold().to_string(),
        RiskLevel::Medium => text.yellow().to_string(),
        RiskLevel::Low => text.green().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a scenario name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked reports as a table with columns: Index, Score, Name, Duration, Risk
/// No headers. Index column: 3 chars (fits "99."), right-aligned.
/// Score column is right-aligned, 6 chars wide (fits "100.0%")
pub fn format_report_table(reports: &[ImpactReport], use_colors: bool) -> String {
    if reports.is_empty() {
        return "No scenarios configured.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 6;
    let duration_width = 5;
    let risk_width = 6;
    let separator = "  ";

    reports
        .iter()
        .enumerate()
        .map(|(idx, report)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(report.impact_score), width = score_width);
            let duration_padded = format!(
                "{:>width$}",
                format_months(report.timeline.total_duration),
                width = duration_width
            );

            let fixed_width = index_width + 1 + score_width + duration_width + risk_width + separator.len() * 3;
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_name(&report.name, width - fixed_width),
                Some(_) => truncate_name(&report.name, 20),
                None => report.name.clone(),
            };

            let level = report.risks.highest_level();
            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name,
                    separator,
                    duration_padded,
                    separator,
                    format_level(level, 0, true)
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, name, separator, duration_padded, separator, level
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format reports as tab-separated values for scripting
/// Columns: score, name, total_duration, highest_risk (no headers, no colors)
pub fn format_tsv(reports: &[ImpactReport]) -> String {
    if reports.is_empty() {
        return String::new();
    }

    reports
        .iter()
        .map(|report| {
            format!(
                "{:.4}\t{}\t{}\t{}",
                report.impact_score,
                report.name,
                report.timeline.total_duration,
                report.risks.highest_level()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of full reports
pub fn format_json(reports: &[ImpactReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("Failed to serialize reports")
}

/// Format a single report with detailed multi-line output
pub fn format_report_detail(report: &ImpactReport, use_colors: bool) -> String {
    let heading = |text: &str| {
        if use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };

    let inputs = &report.inputs;
    let metrics = &report.secondary_metrics;
    let equity = &report.equity;
    let mut lines = Vec::new();

    let name = if use_colors {
        report.name.cyan().bold().to_string()
    } else {
        report.name.clone()
    };
    lines.push(format!("{} ({} model)", name, report.model.as_str()));
    lines.push(format!(
        "  Inputs: budget {}, internet {}%, training {}, community {}",
        inputs.budget, inputs.internet, inputs.training, inputs.community
    ));
    lines.push(format!("  Impact score: {}", format_score(report.impact_score)));
    lines.push(format!(
        "  Digital divide reduction: {:.1} pts",
        report.digital_divide_reduction
    ));
    lines.push(format!(
        "  Engagement: {:.1} h/week",
        report.engagement_time
    ));
    lines.push(format!(
        "  Reach: {} students, {} schools, {} teachers",
        format_count(metrics.students_equipped),
        format_count(metrics.schools_improved),
        format_count(metrics.teachers_trained)
    ));

    lines.push(String::new());
    lines.push(heading(&format!(
        "Timeline ({})",
        format_months(report.timeline.total_duration)
    )));
    for phase in report.timeline.phases() {
        lines.push(format!(
            "  {:>5}  {}: {}",
            format_months(phase.duration),
            phase.name,
            phase.activities.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push(heading("Risks"));
    for (label, entry) in report.risks.iter() {
        lines.push(format!(
            "  {:<10} {} p={:.2}  {}",
            label,
            format_level(entry.level, 6, use_colors),
            entry.probability,
            entry.mitigation
        ));
    }

    lines.push(String::new());
    lines.push(heading("Equity"));
    lines.push(format!(
        "  Gender: male {}, female {}, non-binary {}",
        format_score(equity.gender.male),
        format_score(equity.gender.female),
        format_score(equity.gender.non_binary)
    ));
    lines.push(format!(
        "  Disability: with {}, without {}",
        format_score(equity.disability.with_disability),
        format_score(equity.disability.without_disability)
    ));
    lines.push(format!(
        "  Language: native {}, ESL {}, multilingual {}",
        format_score(equity.language.native_speakers),
        format_score(equity.language.esl),
        format_score(equity.language.multilingual)
    ));
    lines.push(format!(
        "  Geographic: urban {}, suburban {}, rural {}, remote {}",
        format_score(equity.geographic.urban),
        format_score(equity.geographic.suburban),
        format_score(equity.geographic.rural),
        format_score(equity.geographic.remote)
    ));
    lines.push(format!(
        "  Widest gap: {}",
        format_score(equity.max_gap())
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImpactOptions, InputVector};
    use crate::report::ModelKind;

    fn sample_report(name: &str, inputs: [f64; 4]) -> ImpactReport {
        ImpactReport::build(
            name,
            InputVector::from(inputs),
            ModelKind::Basic,
            ImpactOptions::default(),
        )
    }

    // format_score tests
    #[test]
    fn test_format_score_percent() {
        assert_eq!(format_score(0.372), "37.2%");
        assert_eq!(format_score(0.0), "0.0%");
        assert_eq!(format_score(0.99), "99.0%");
    }

    #[test]
    fn test_format_score_nan() {
        assert_eq!(format_score(f64::NAN), "n/a");
    }

    // format_count tests
    #[test]
    fn test_format_count_small() {
        assert_eq!(format_count(847.0), "847");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn test_format_count_thousands() {
        assert_eq!(format_count(60000.0), "60k");
        assert_eq!(format_count(1500.0), "1.5k");
    }

    #[test]
    fn test_format_count_million() {
        assert_eq!(format_count(2_300_000.0), "2.3M");
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(54.0), "54mo");
        assert_eq!(format_months(f64::NAN), "n/a");
    }

    // truncate_name tests
    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("district-a", 20), "district-a");
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("This is a very long name", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_name_very_narrow() {
        assert_eq!(truncate_name("district", 3), "dis");
    }

    // format_report_table tests
    #[test]
    fn test_format_report_table_empty() {
        assert_eq!(format_report_table(&[], false), "No scenarios configured.");
    }

    #[test]
    fn test_format_report_table_rows() {
        let reports = vec![
            sample_report("district-a", [0.0, 0.0, 0.0, 0.0]),
            sample_report("district-b", [10000.0, 90.0, 1.0, 1.0]),
        ];
        let result = format_report_table(&reports, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("district-a"));
        assert!(lines[0].contains("54mo"));
        assert!(lines[0].ends_with("high"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("11mo"));
        assert!(lines[1].ends_with("low"));
    }

    // format_tsv tests
    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_tsv_columns() {
        let reports = vec![sample_report("district-a", [0.0, 0.0, 0.0, 0.0])];
        let result = format_tsv(&reports);
        let fields: Vec<&str> = result.split('\t').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "0.0089");
        assert_eq!(fields[1], "district-a");
        assert_eq!(fields[2], "54");
        assert_eq!(fields[3], "high");
    }

    #[test]
    fn test_format_json_array() {
        let reports = vec![sample_report("district-a", [2500.0, 75.0, 0.5, 0.4])];
        let json = format_json(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "district-a");
        assert_eq!(value[0]["timeline"]["totalDuration"], 30.0);
    }

    #[test]
    fn test_format_report_detail() {
        let report = sample_report("district-a", [2500.0, 75.0, 0.5, 0.4]);
        let result = format_report_detail(&report, false);
        assert!(result.starts_with("district-a (basic model)"));
        assert!(result.contains("Inputs: budget 2500, internet 75%, training 0.5, community 0.4"));
        assert!(result.contains("Timeline (30mo)"));
        assert!(result.contains("Infrastructure & Planning: Hardware procurement, Network setup, Policy framework"));
        assert!(result.contains("funding    medium"));
        assert!(result.contains("Secure multiple funding sources"));
        assert!(result.contains("Geographic: urban"));
        // urban 1.1x vs remote 0.55x of the score
        let gap = format_score(report.impact_score * 0.55);
        assert!(result.ends_with(&format!("Widest gap: {}", gap)));
    }

    #[test]
    fn test_format_report_detail_nan_scenario() {
        let report = sample_report("unknown-budget", [f64::NAN, 75.0, 0.5, 0.4]);
        let result = format_report_detail(&report, false);
        assert!(result.contains("Impact score: n/a"));
        assert!(result.contains("Reach: n/a students, n/a schools, n/a teachers"));
        assert!(result.contains("Timeline (n/a)"));
        assert!(result.contains("Widest gap: n/a"));
    }
}
