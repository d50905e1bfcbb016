//! Plain-stdout presentation for the one-shot `eval` and `catalog`
//! subcommands: verdict banner, recommendation table, per-crop detail,
//! and the TSV/JSON machine formats.

use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::assess::{Assessment, CropEvaluation};
use crate::catalog::CATALOG;
use crate::config::Lang;
use crate::scoring::Verdict;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a cell to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Pad a cell to `width` columns, counting chars (good enough for the
/// Arabic and Latin text in the catalog).
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn header_labels(lang: Lang) -> [&'static str; 3] {
    match lang {
        Lang::Ar => ["المحصول", "نسبة التوافق (%)", "الإنتاجية المتوقعة (طن/فدان)"],
        Lang::En => ["Crop", "Suitability (%)", "Expected yield (ton/feddan)"],
    }
}

/// The "no suitable crops" notice, shared with the TUI's empty table state.
pub fn empty_notice(lang: Lang) -> &'static str {
    match lang {
        Lang::Ar => "⚠️ لا توجد محاصيل مناسبة حاليًا بناءً على المعايير المدخلة.",
        Lang::En => "No suitable crops for the entered conditions.",
    }
}

/// The fixed estimate disclaimer shown under every result.
pub fn format_disclaimer(lang: Lang) -> &'static str {
    match lang {
        Lang::Ar => {
            "📌 ملاحظة: النتائج تقديرية وتفترض وجود مصدر ري مناسب، ولا تشمل خصائص مثل ملوحة المياه أو نوع السماد أو الآفات."
        }
        Lang::En => {
            "Note: results are estimates and assume an adequate irrigation source; water salinity, fertilizer type, and pests are not considered."
        }
    }
}

/// Verdict banner: localized tier label plus the best suitability over the
/// whole catalog, e.g. "✅ مناسبة للزراعة (أقصى توافق: 80.0%)".
pub fn format_banner(assessment: &Assessment, lang: Lang, use_colors: bool) -> String {
    let label = assessment.verdict.label(lang);
    let max = match lang {
        Lang::Ar => format!("(أقصى توافق: {:.1}%)", assessment.max_suitability),
        Lang::En => format!("(max suitability: {:.1}%)", assessment.max_suitability),
    };

    if use_colors {
        let colored_label = match assessment.verdict {
            Verdict::Excellent => label.green().bold().to_string(),
            Verdict::Suitable => label.cyan().bold().to_string(),
            Verdict::Marginal => label.yellow().bold().to_string(),
            Verdict::Unsuitable => label.red().bold().to_string(),
        };
        format!("{} {}", colored_label, max.dimmed())
    } else {
        format!("{} {}", label, max)
    }
}

/// Recommendation table: one row per crop at or above the threshold, best
/// first. Empty list renders the "no suitable crops" notice instead.
pub fn format_table(assessment: &Assessment, lang: Lang, use_colors: bool) -> String {
    if assessment.recommended.is_empty() {
        return empty_notice(lang).to_string();
    }

    let headers = header_labels(lang);
    let names: Vec<String> = assessment
        .recommended
        .iter()
        .map(|e| e.crop.display_name())
        .collect();
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .chain([headers[0].chars().count()])
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(assessment.recommended.len() + 1);
    let header = format!(
        "{}  {:>16}  {:>28}",
        pad(headers[0], name_width),
        headers[1],
        headers[2]
    );
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    for (eval, name) in assessment.recommended.iter().zip(&names) {
        // Pad before coloring so the ANSI escapes don't skew the columns.
        let suitability = format!("{:>16}", format!("{:.1}", eval.suitability));
        let yield_str = format!("{:>28}", format!("{:.2}", eval.expected_yield));
        if use_colors {
            lines.push(format!(
                "{}  {}  {}",
                pad(name, name_width),
                suitability.green(),
                yield_str.yellow()
            ));
        } else {
            lines.push(format!(
                "{}  {}  {}",
                pad(name, name_width),
                suitability,
                yield_str
            ));
        }
    }

    lines.join("\n")
}

/// Multi-line per-crop detail for verbose mode: every criterion with its
/// pass/fail mark and the compared values.
pub fn format_crop_detail(eval: &CropEvaluation, use_colors: bool) -> String {
    let mut lines = vec![if use_colors {
        format!(
            "{}  {:.1}% -> {:.2} ton/feddan",
            eval.crop.display_name().bold(),
            eval.suitability,
            eval.expected_yield
        )
    } else {
        format!(
            "{}  {:.1}% -> {:.2} ton/feddan",
            eval.crop.display_name(),
            eval.suitability,
            eval.expected_yield
        )
    }];

    for check in &eval.score.checks {
        let mark = if check.passed { "✓" } else { "✗" };
        let line = format!("  {} {:<12} {}", mark, check.label, check.detail);
        if use_colors {
            if check.passed {
                lines.push(line.green().to_string());
            } else {
                lines.push(line.red().to_string());
            }
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Tab-separated values for scripting: crop, suitability, expected yield.
/// No headers, no colors, recommended rows only.
pub fn format_tsv(assessment: &Assessment) -> String {
    assessment
        .recommended
        .iter()
        .map(|e| {
            format!(
                "{}\t{}\t{:.1}\t{:.2}",
                e.crop.name, e.crop.name_en, e.suitability, e.expected_yield
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonCrop<'a> {
    crop: &'a str,
    crop_en: &'a str,
    suitability: f64,
    expected_yield: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    verdict: &'a str,
    max_suitability: f64,
    recommended: Vec<JsonCrop<'a>>,
}

/// JSON report: verdict tier, max suitability, and the recommended rows.
pub fn format_json(assessment: &Assessment) -> anyhow::Result<String> {
    let report = JsonReport {
        verdict: assessment.verdict.as_str(),
        max_suitability: assessment.max_suitability,
        recommended: assessment
            .recommended
            .iter()
            .map(|e| JsonCrop {
                crop: e.crop.name,
                crop_en: e.crop.name_en,
                suitability: e.suitability,
                expected_yield: e.expected_yield,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Reference catalog table for the `catalog` subcommand.
pub fn format_catalog(use_colors: bool) -> String {
    let names: Vec<String> = CATALOG.iter().map(|c| c.display_name()).collect();
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(CATALOG.len() + 1);
    let header = format!(
        "{}  {:>9}  {:>12}  {:>9}  {:>12}  {:>7}  soil",
        pad("crop", name_width),
        "pH",
        "rain mm",
        "temp °C",
        "salinity",
        "yield"
    );
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    // Everything left of the soil column is fixed-width.
    let fixed_width = name_width + 9 + 12 + 9 + 12 + 7 + 6 * 2;
    let soil_width = get_terminal_width()
        .map(|w| w.saturating_sub(fixed_width).max(16))
        .unwrap_or(usize::MAX);

    for (crop, name) in CATALOG.iter().zip(&names) {
        lines.push(format!(
            "{}  {:>9}  {:>12}  {:>9}  {:>12}  {:>7}  {}",
            pad(name, name_width),
            format!("{}-{}", crop.ph.min, crop.ph.max),
            format!("{}-{}", crop.rainfall.min, crop.rainfall.max),
            format!("{}-{}", crop.temperature.min, crop.temperature.max),
            format!("{}-{}", crop.salinity.min, crop.salinity.max),
            format!("{:.1}", crop.average_yield),
            truncate(crop.soil, soil_width),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::assess;
    use crate::land::LandConditions;

    fn empty_assessment() -> Assessment {
        assess(&LandConditions {
            soil: "unmatched-string".to_string(),
            ph: 4.0,
            rainfall: 0,
            temperature: 0,
            salinity: 0.0,
        })
    }

    #[test]
    fn test_banner_formats_max_to_one_decimal() {
        let assessment = assess(&LandConditions::default());
        let banner = format_banner(&assessment, Lang::En, false);
        assert!(banner.contains("80.0%"), "banner was: {banner}");
        assert!(banner.contains("Suitable"));
    }

    #[test]
    fn test_banner_localized() {
        let assessment = empty_assessment();
        let ar = format_banner(&assessment, Lang::Ar, false);
        assert!(ar.contains("غير مناسبة"));
        let en = format_banner(&assessment, Lang::En, false);
        assert!(en.contains("unsuitable"));
    }

    #[test]
    fn test_empty_table_shows_notice() {
        let assessment = empty_assessment();
        assert_eq!(format_table(&assessment, Lang::En, false), empty_notice(Lang::En));
        assert!(format_table(&assessment, Lang::Ar, false).contains("لا توجد محاصيل"));
    }

    #[test]
    fn test_table_rows_formatted_to_spec_decimals() {
        let assessment = assess(&LandConditions::default());
        let table = format_table(&assessment, Lang::En, false);
        // Wheat: 80% of 3.5 ton/feddan
        assert!(table.contains("قمح (wheat)"));
        assert!(table.contains("80.0"));
        assert!(table.contains("2.80"));
    }

    #[test]
    fn test_tsv_one_row_per_recommendation() {
        let assessment = assess(&LandConditions::default());
        let tsv = format_tsv(&assessment);
        assert_eq!(tsv.lines().count(), assessment.recommended.len());
        assert!(tsv.lines().next().unwrap().split('\t').count() == 4);
    }

    #[test]
    fn test_tsv_empty_when_nothing_recommended() {
        assert!(format_tsv(&empty_assessment()).is_empty());
    }

    #[test]
    fn test_json_parses_back() {
        let assessment = assess(&LandConditions::default());
        let json = format_json(&assessment).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"], "suitable");
        assert_eq!(value["max_suitability"], 80.0);
        assert_eq!(
            value["recommended"].as_array().unwrap().len(),
            assessment.recommended.len()
        );
    }

    #[test]
    fn test_crop_detail_lists_five_checks() {
        let assessment = assess(&LandConditions::default());
        let detail = format_crop_detail(&assessment.all[0], false);
        assert_eq!(detail.lines().count(), 6); // title + 5 criteria
        assert!(detail.contains("Rainfall"));
        assert!(detail.contains("✗"));
    }

    #[test]
    fn test_catalog_lists_all_crops() {
        let catalog = format_catalog(false);
        assert_eq!(catalog.lines().count(), 11); // header + 10 crops
        assert!(catalog.contains("نخيل (date palm)"));
    }
}
