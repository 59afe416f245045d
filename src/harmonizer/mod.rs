// Harmonizer module: the clustering engine plus the table fold around it.

pub mod canonical;

// Re-export the clustering engine for ease of use.
pub use canonical::Canonicalizer;

use chrono::Utc;

use crate::linker::search_link;
use crate::model::{IngestError, RunSummary, SheetTable};
use crate::normalizer::normalize;

/// Name of the appended canonical-model column.
pub const CANONICAL_COLUMN: &str = "model_canonique";
/// Name of the appended search-link column.
pub const LINK_COLUMN: &str = "Lien_recherche";

/// Result of one harmonization pass: the enriched table plus run totals.
#[derive(Debug, Clone)]
pub struct HarmonizedTable {
    pub table: SheetTable,
    pub summary: RunSummary,
}

/// Folds the table through normalize → canonicalize → link, appending the
/// canonical-model and search-link columns. Original cells and row order
/// are untouched; the registry lives and dies inside this call. Column
/// selections are by name and must exist in the input.
pub fn harmonize(
    input: &SheetTable,
    model_column: &str,
    brand_column: Option<&str>,
) -> Result<HarmonizedTable, IngestError> {
    let model_idx = input
        .column_index(model_column)
        .ok_or_else(|| IngestError::ColumnNotFound(model_column.to_string()))?;
    let brand_idx = match brand_column {
        Some(name) => Some(
            input
                .column_index(name)
                .ok_or_else(|| IngestError::ColumnNotFound(name.to_string()))?,
        ),
        None => None,
    };

    let mut headers = input.headers.clone();
    headers.push(CANONICAL_COLUMN.to_string());
    headers.push(LINK_COLUMN.to_string());

    let mut canonicalizer = Canonicalizer::new();
    let mut out = SheetTable::new(headers);
    let mut blank_models = 0;

    for row in &input.rows {
        let key = normalize(row.get(model_idx).map(String::as_str));
        if key.is_empty() {
            blank_models += 1;
        }
        // La marque est lue telle quelle, sans normalisation.
        let brand = brand_idx.and_then(|idx| row.get(idx)).map(String::as_str);
        let label = canonicalizer.assign(&key, brand);
        let link = search_link(&label);

        let mut enriched = row.clone();
        enriched.resize(input.headers.len(), String::new());
        enriched.push(label);
        enriched.push(link);
        out.push_row(enriched);
    }

    let summary = RunSummary {
        rows_processed: out.rows.len(),
        clusters_created: canonicalizer.cluster_count(),
        blank_models,
        completed_at: Utc::now(),
    };

    Ok(HarmonizedTable {
        table: out,
        summary,
    })
}
