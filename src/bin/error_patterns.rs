use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use phonerr::{AnalyzerBuilder, AnalyzerConfig, ErrorLabel, ErrorPatternAnalyzer};

#[derive(Debug, Parser)]
#[command(name = "error_patterns")]
#[command(about = "Label phonological error patterns for a dataset of IPA transcription pairs")]
struct Args {
    /// Input CSV holding target and actual transcription columns.
    input: PathBuf,
    #[arg(long, env = "PHONERR_OUT", default_value = "error_patterns.csv")]
    out: PathBuf,
    #[arg(long, default_value = "IPA Target")]
    target_column: String,
    #[arg(long, default_value = "IPA Actual")]
    actual_column: String,
    /// Optional analyzer config JSON (penalties, thresholds, weights).
    #[arg(long, env = "PHONERR_CONFIG")]
    config: Option<PathBuf>,
    /// Skip the second-pass resolution of "_other" labels.
    #[arg(long)]
    no_resolver: bool,
    /// Skip the severity score column.
    #[arg(long)]
    no_score: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        tracing::error!(error = %err, "error_patterns failed");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = AnalyzerBuilder::new(config).build()?;

    let mut reader = ReaderBuilder::new().from_path(&args.input)?;
    let headers = reader.headers()?.clone();
    let target_idx = column_index(&headers, &args.target_column)?;
    let actual_idx = column_index(&headers, &args.actual_column)?;

    let rows: Vec<StringRecord> = reader.records().collect::<Result<_, _>>()?;
    tracing::info!(rows = rows.len(), input = %args.input.display(), "analyzing transcriptions");

    let mut writer = WriterBuilder::new().from_path(&args.out)?;
    let mut out_headers = vec![
        args.target_column.as_str(),
        args.actual_column.as_str(),
        "error_pattern",
        "error_basic",
    ];
    if !args.no_resolver {
        out_headers.push("resolved_error");
    }
    if !args.no_score {
        out_headers.push("error_score");
    }
    writer.write_record(&out_headers)?;

    let progress = ProgressBar::new(rows.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} rows {msg}")
            .expect("valid progress template"),
    );

    let mut failed_rows = 0usize;
    for (row_number, row) in rows.iter().enumerate() {
        let target = row.get(target_idx).unwrap_or_default();
        let actual = row.get(actual_idx).unwrap_or_default();
        let mut record = vec![target.to_string(), actual.to_string()];

        match analyze_row(&analyzer, args, target, actual) {
            Ok(columns) => record.extend(columns),
            Err(err) => {
                // One malformed transcription must not abort the dataset.
                failed_rows += 1;
                tracing::warn!(row = row_number + 1, target, actual, error = %err, "row skipped");
                record.extend(blank_columns(args));
            }
        }
        writer.write_record(&record)?;
        progress.inc(1);
    }
    progress.finish_and_clear();
    writer.flush()?;

    if failed_rows > 0 {
        tracing::warn!(failed_rows, "some rows could not be analyzed");
    }
    tracing::info!(out = %args.out.display(), "error patterns written");
    Ok(())
}

fn analyze_row(
    analyzer: &ErrorPatternAnalyzer,
    args: &Args,
    target: &str,
    actual: &str,
) -> Result<Vec<String>, Box<dyn Error>> {
    let label = analyzer.error_pattern(target, actual)?;
    let mut columns = vec![label.to_string(), basic_pattern(&label)];

    let effective = if args.no_resolver {
        label
    } else {
        let (resolved, _) = analyzer.error_pattern_resolver(target, actual, &label)?;
        if resolved == label {
            columns.push(String::new());
        } else {
            columns.push(resolved.to_string());
        }
        resolved
    };

    if !args.no_score {
        columns.push(format!("{}", analyzer.error_quantifier(&effective)?));
    }
    Ok(columns)
}

/// Label head for coarse grouping: everything before the first qualifier,
/// keeping the `_other` suffix so unresolved rows stay distinguishable.
fn basic_pattern(label: &ErrorLabel) -> String {
    let rendered = label.to_string();
    match rendered.split_once('-') {
        Some((head, _)) => head.to_string(),
        None => rendered,
    }
}

fn blank_columns(args: &Args) -> Vec<String> {
    let mut columns = vec![String::new(), String::new()];
    if !args.no_resolver {
        columns.push(String::new());
    }
    if !args.no_score {
        columns.push(String::new());
    }
    columns
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, Box<dyn Error>> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| format!("input CSV has no {name:?} column").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_pattern_keeps_other_suffix() {
        let label: ErrorLabel = "substitution_other".parse().unwrap();
        assert_eq!(basic_pattern(&label), "substitution_other");
    }

    #[test]
    fn basic_pattern_strips_qualifiers() {
        let label: ErrorLabel = "substitution-C1pres-C2sub".parse().unwrap();
        assert_eq!(basic_pattern(&label), "substitution");
        let label: ErrorLabel = "deletion-final".parse().unwrap();
        assert_eq!(basic_pattern(&label), "deletion");
        let label: ErrorLabel = "correct".parse().unwrap();
        assert_eq!(basic_pattern(&label), "correct");
    }
}
