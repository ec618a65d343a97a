//! Analyze command - run the full pipeline and report

use super::Session;
use crate::config::ProjectConfig;
use crate::pipeline::{AnalysisOptions, Pipeline};
use crate::reporters::{self, export, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Flags of the analyze command; `None` defers to the config
#[derive(Debug, Default)]
pub(super) struct AnalyzeArgs {
    pub window: Option<usize>,
    pub min_observed: Option<u32>,
    pub top: Option<usize>,
    pub threshold: Option<f64>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
}

/// Settings after CLI flags are layered over the config
#[derive(Debug)]
struct ResolvedSettings {
    options: AnalysisOptions,
    format: OutputFormat,
    export_dir: Option<PathBuf>,
}

/// CLI flags win over config values, which win over built-in defaults.
fn apply_config_defaults(args: &AnalyzeArgs, config: &ProjectConfig) -> Result<ResolvedSettings> {
    let mut options = config.analysis_options();
    if let Some(window) = args.window {
        options.window_size = window;
    }
    if let Some(min_observed) = args.min_observed {
        options.min_observed = min_observed;
    }
    if let Some(top) = args.top {
        options.top_n = top;
    }
    if let Some(threshold) = args.threshold {
        options.significance_threshold = threshold;
    }

    let format_name = args.format.as_deref().unwrap_or(&config.output.format);
    let format = OutputFormat::from_str(format_name)?;

    Ok(ResolvedSettings {
        options,
        format,
        export_dir: args.export_dir.clone().or_else(|| config.output.export_dir.clone()),
    })
}

/// Run the analyze command
pub(super) fn run(session: &Session, corpus_path: &Path, args: AnalyzeArgs) -> Result<()> {
    let settings = apply_config_defaults(&args, &session.config)?;
    let corpus = session.load_corpus(corpus_path)?;
    if corpus.is_empty() {
        eprintln!(
            "{} No characters found in {}",
            style("[!!]").yellow(),
            corpus_path.display()
        );
    }

    let analysis = Pipeline::new(&session.table, settings.options)
        .with_workers(session.workers)
        .run(&corpus);
    let rendered = reporters::report_with_format(&analysis.report(), settings.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} Wrote {} report to {}",
                style("[OK]").green(),
                settings.format,
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }

    if let Some(dir) = &settings.export_dir {
        let written = export::export_all(&analysis, &corpus, &session.table, dir)?;
        info!("Exported {} CSV files", written.len());

        let report_path = dir.join(format!(
            "report.{}",
            reporters::file_extension(settings.format)
        ));
        std::fs::write(&report_path, &rendered)
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

        eprintln!(
            "{} Exported {} CSV files and {} to {}",
            style("[OK]").green(),
            written.len(),
            report_path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
            style(dir.display()).cyan()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_values_apply_without_flags() {
        let mut config = ProjectConfig::default();
        config.analysis.window_size = 3;
        config.analysis.top_n = 8;
        config.output.format = "json".into();
        config.output.export_dir = Some(PathBuf::from("csv"));

        let settings = apply_config_defaults(&AnalyzeArgs::default(), &config).unwrap();
        assert_eq!(settings.options.window_size, 3);
        assert_eq!(settings.options.top_n, 8);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.export_dir, Some(PathBuf::from("csv")));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = ProjectConfig::default();
        config.analysis.window_size = 3;
        config.output.format = "json".into();

        let args = AnalyzeArgs {
            window: Some(6),
            threshold: Some(6.63),
            format: Some("md".into()),
            ..Default::default()
        };
        let settings = apply_config_defaults(&args, &config).unwrap();
        assert_eq!(settings.options.window_size, 6);
        assert_eq!(settings.options.significance_threshold, 6.63);
        assert_eq!(settings.options.min_observed, 5);
        assert_eq!(settings.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_bad_config_format_is_an_error() {
        let mut config = ProjectConfig::default();
        config.output.format = "pdf".into();
        assert!(apply_config_defaults(&AnalyzeArgs::default(), &config).is_err());
    }
}
