use crate::application::assembler::build_document;
use crate::application::loader::load_quotes;
use crate::config::PipelineConfig;
use crate::domain::errors::PipelineError;
use crate::infrastructure::report_writer::ReportWriter;
use std::path::PathBuf;
use tracing::info;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub total_records: usize,
    pub companies: usize,
    pub dropped_rows: usize,
    pub json_path: PathBuf,
    pub script_path: PathBuf,
}

/// Load, clean, aggregate and write. Any input error aborts before either
/// output file is touched.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary, PipelineError> {
    info!("Loading data from {}...", config.input_path.display());
    let table = load_quotes(&config.input_path)?;
    let companies = table.companies().len();
    info!("Loaded {} records for {} companies", table.len(), companies);

    info!("Processing statistics...");
    let document = build_document(&table, config)?;

    let writer = ReportWriter::new(
        config.json_path(),
        config.script_path(),
        config.script_constant.clone(),
    );
    writer.write(&document)?;

    Ok(PipelineSummary {
        total_records: table.len(),
        companies,
        dropped_rows: table.dropped_rows(),
        json_path: config.json_path(),
        script_path: config.script_path(),
    })
}
