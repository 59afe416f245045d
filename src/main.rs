mod config;
mod harmonizer;
mod linker;
mod model;
mod normalizer;
mod workbook;

use config::{AppConfig, load_config, require_openai_key};
use harmonizer::harmonize;
use tracing::{error, info};
use workbook::{XLSX_MIME, read_table, write_workbook};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Fail fast: the report assistant cannot start without its key.
    if let Err(e) = require_openai_key() {
        error!("Startup error: {}", e);
        return;
    }

    // Load configuration from file
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    info!("📂 Reading {}...", config.input_file);
    let table = match read_table(&config.input_file) {
        Ok(t) => t,
        Err(e) => {
            error!("Ingest error: {}", e);
            return;
        }
    };
    info!(
        "Aperçu du fichier original:\n{}",
        table.preview(config.preview_rows)
    );

    info!(
        "Harmonizing column '{}' (brand: {})...",
        config.model_column,
        config.brand_column.as_deref().unwrap_or("none")
    );
    let harmonized = match harmonize(&table, &config.model_column, config.brand_column.as_deref()) {
        Ok(h) => h,
        Err(e) => {
            error!("Harmonization error: {}", e);
            return;
        }
    };

    info!(
        "Aperçu après harmonisation:\n{}",
        harmonized.table.preview(config.preview_rows)
    );
    let summary = &harmonized.summary;
    info!(
        "✅ {} rows processed | {} clusters | {} blank models | finished {}",
        summary.rows_processed, summary.clusters_created, summary.blank_models, summary.completed_at
    );

    if let Err(e) = write_workbook(&harmonized.table, &config.sheet_name, &config.output_file) {
        error!("Export error: {}", e);
        return;
    }
    info!(
        "⬇️ Harmonized workbook saved: {} ({})",
        config.output_file, XLSX_MIME
    );
}
