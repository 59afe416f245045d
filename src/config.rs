use serde::Deserialize;
use std::fs;

fn default_sheet_name() -> String {
    "Harmonized".to_string()
}

fn default_preview_rows() -> usize {
    5
}

/// File locations and column selections for one harmonization run.
/// Columns are picked by header name, the way the upload surface exposes
/// them; the brand column is optional.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub input_file: String,
    pub output_file: String,
    pub model_column: String,
    pub brand_column: Option<String>,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Clé OpenAI pour l'assistant de rapport, lue depuis l'environnement
/// (fichier .env accepté). Une clé absente interrompt le démarrage.
pub fn require_openai_key() -> Result<String, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err("OPENAI_API_KEY missing! Check your .env file".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "input_file": "inventaire.xlsx",
                "output_file": "harmonized_output.xlsx",
                "model_column": "Modele"
            }"#,
        )
        .unwrap();
        assert_eq!(config.brand_column, None);
        assert_eq!(config.sheet_name, "Harmonized");
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn full_config_round_trips() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "input_file": "in.xlsx",
                "output_file": "out.xlsx",
                "model_column": "Modele",
                "brand_column": "Marque",
                "sheet_name": "Harmonisation",
                "preview_rows": 10
            }"#,
        )
        .unwrap();
        assert_eq!(config.brand_column.as_deref(), Some("Marque"));
        assert_eq!(config.sheet_name, "Harmonisation");
        assert_eq!(config.preview_rows, 10);
    }
}
