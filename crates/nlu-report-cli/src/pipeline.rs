//! Compare and format pipelines: load → combine → diff → render.
//!
//! Each label type becomes one section of the output document, always in
//! the order intents, entities, retrieval intents.

use nlu_report_tools::render::{build_result_set_table, build_table};
use nlu_report_tools::{
    CombinedReport, CombinedReportFile, Document, RenderOptions, ReportError, ReportResult,
    ReportSource, ResultSet, Section, combine, diff,
};
use nlu_report_types::LabelType;

use crate::config::ReportConfig;
use crate::inputs::InputSpec;

/// Everything the compare pipeline needs, resolved from flags and config.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub inputs: Vec<InputSpec>,
    /// Restrict to one label type; report file inputs require it.
    pub label_type: Option<LabelType>,
    pub baseline: Option<String>,
    /// Overrides the per-label-type config for every section.
    pub diff_metrics: Option<Vec<String>>,
    pub display_metrics: Option<Vec<String>>,
    pub sort_metric: Option<String>,
    pub only_changed: bool,
    pub title: Option<String>,
    /// Result sets carried over from an earlier combined report.
    pub previous: Option<CombinedReportFile>,
}

impl CompareOptions {
    pub fn new(inputs: Vec<InputSpec>) -> Self {
        Self {
            inputs,
            label_type: None,
            baseline: None,
            diff_metrics: None,
            display_metrics: None,
            sort_metric: None,
            only_changed: false,
            title: None,
            previous: None,
        }
    }
}

/// Rendered document plus the combined reports behind it.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    pub document: Document,
    pub combined: Vec<CombinedReport>,
}

/// Combine every input per label type, diff against the baseline and
/// build one table section per label type.
pub fn compare(
    source: &dyn ReportSource,
    options: &CompareOptions,
    config: &ReportConfig,
) -> ReportResult<CompareOutcome> {
    if options.label_type.is_none() {
        if let Some(file) = options.inputs.iter().find(|i| i.is_report_file(source)) {
            return Err(ReportError::InvalidArgument(format!(
                "{} is a report file; pass --label-type to say which kind it is",
                file.path.display()
            )));
        }
    }

    let label_types: Vec<LabelType> = match options.label_type {
        Some(lt) => vec![lt],
        None => LabelType::ALL.to_vec(),
    };
    let sort_metric = options
        .sort_metric
        .clone()
        .unwrap_or_else(|| config.sort_metric.clone());

    let mut sections = Vec::new();
    let mut combined_reports = Vec::new();
    let mut baseline_name: Option<String> = None;

    for label_type in label_types {
        if should_skip(source, options, label_type) {
            tracing::info!(label_type = %label_type, "no report in first result set, skipping section");
            continue;
        }

        let combined = combine_label_type(source, options, label_type)?;
        if combined.result_set_names().is_empty() {
            tracing::warn!(label_type = %label_type, "no result sets to combine");
            continue;
        }

        let diff_metrics = options
            .diff_metrics
            .clone()
            .unwrap_or_else(|| config.diff_metrics(label_type));
        let display_metrics = options
            .display_metrics
            .clone()
            .unwrap_or_else(|| config.display_metrics(label_type));

        if let Some(baseline) = &options.baseline {
            if !combined.has_result_set(baseline) {
                return Err(ReportError::UnknownBaseline(baseline.clone()));
            }
        }

        let diff_report = if combined.result_set_names().len() > 1 {
            Some(diff(&combined, options.baseline.as_deref(), &diff_metrics)?)
        } else {
            if options.only_changed {
                tracing::warn!(
                    label_type = %label_type,
                    "only one result set, showing all labels"
                );
            }
            None
        };

        let labels = match (&diff_report, options.only_changed) {
            (Some(d), true) => Some(
                d.find_labels_with_changes()
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>(),
            ),
            _ => None,
        };
        if baseline_name.is_none() {
            baseline_name = diff_report
                .as_ref()
                .map(|d| d.baseline().to_string())
                .or_else(|| combined.result_set_names().first().cloned());
        }

        let render_options = RenderOptions {
            metrics: display_metrics,
            sort_metric: (!sort_metric.is_empty()).then(|| sort_metric.clone()),
            labels,
            diff: diff_report.as_ref(),
        };
        let table = build_table(&combined, &render_options);
        tracing::info!(
            label_type = %label_type,
            rows = table.rows.len(),
            result_sets = combined.result_set_names().len(),
            "section rendered"
        );
        sections.push(Section::new(label_type, table));
        combined_reports.push(combined);
    }

    let intro = match (options.only_changed, baseline_name) {
        (true, Some(baseline)) => Some(format!(
            "These tables display only items with changes in at least one metric compared to {baseline}."
        )),
        _ => None,
    };
    let document = Document {
        title: Some(options.title.clone().unwrap_or_else(|| config.title.clone())),
        intro,
        sections,
    };
    Ok(CompareOutcome {
        document,
        combined: combined_reports,
    })
}

// Entity and retrieval-intent sections only exist when the first result
// set produced that report. An explicit label type is always processed.
fn should_skip(source: &dyn ReportSource, options: &CompareOptions, label_type: LabelType) -> bool {
    if options.label_type.is_some() || label_type == LabelType::Intents {
        return false;
    }
    let carried_over = options
        .previous
        .as_ref()
        .is_some_and(|file| !file.rows(label_type).is_empty());
    if carried_over {
        return false;
    }
    match options.inputs.first() {
        Some(first) => !source.exists(&first.report_path(source, label_type)),
        None => true,
    }
}

fn combine_label_type(
    source: &dyn ReportSource,
    options: &CompareOptions,
    label_type: LabelType,
) -> ReportResult<CombinedReport> {
    let sets = options
        .inputs
        .iter()
        .map(|input| {
            ResultSet::from_file(
                source,
                &input.report_path(source, label_type),
                input.name.clone(),
                label_type,
            )
        })
        .collect::<ReportResult<Vec<_>>>()?;
    let fresh = combine(&sets, label_type)?;

    match &options.previous {
        Some(file) => {
            let mut combined = file.report(label_type);
            combined.extend(&fresh)?;
            Ok(combined)
        }
        None => Ok(fresh),
    }
}

/// Tables for every report of a single results directory.
///
/// Sections whose report is missing or empty are left out.
pub fn format_results(
    source: &dyn ReportSource,
    dir: &std::path::Path,
    sort_metric: Option<&str>,
    config: &ReportConfig,
) -> ReportResult<Document> {
    let sort_metric = sort_metric.unwrap_or(&config.sort_metric);
    let name = dir.display().to_string();
    if !source.is_dir(dir) {
        tracing::warn!(dir = %name, "results directory does not exist");
    }

    let mut sections = Vec::new();
    for label_type in LabelType::ALL {
        let set = ResultSet::from_dir(source, dir, name.clone(), label_type)?;
        if set.report().is_empty() {
            tracing::debug!(label_type = %label_type, dir = %name, "empty report, skipping section");
            continue;
        }
        let metrics = config.display_metrics(label_type);
        let table = build_result_set_table(
            &set,
            &metrics,
            (!sort_metric.is_empty()).then_some(sort_metric),
        );
        sections.push(Section::new(label_type, table));
    }

    Ok(Document {
        title: Some(config.title.clone()),
        intro: None,
        sections,
    })
}
