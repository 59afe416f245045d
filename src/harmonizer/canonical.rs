use strsim::levenshtein;

/// A cluster absorbs a row only when the score is strictly above this.
const SIMILARITY_THRESHOLD: f64 = 85.0;

/// Symmetric 0–100 similarity ratio between two strings: 100 for identical
/// input, falling with edit distance, normalized by the longer length.
/// Computed from the integer Levenshtein distance so boundary scores like
/// 85 are float-exact.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    let longest = a.chars().count().max(b.chars().count());
    let distance = levenshtein(a, b);
    100.0 * (longest - distance) as f64 / longest as f64
}

struct CanonEntry {
    key: String,
    label: String,
}

/// Online clustering of normalized model keys into canonical labels.
///
/// The registry is append-only for the lifetime of a run and scanned in
/// first-seen order: the first canon key scoring above the threshold
/// absorbs the row. Candidates are compared against inserted canon keys
/// only, never against members merged in afterwards, so cluster membership
/// chains off whichever key happened to come first.
pub struct Canonicalizer {
    registry: Vec<CanonEntry>,
}

impl Canonicalizer {
    pub fn new() -> Self {
        Self {
            registry: Vec::new(),
        }
    }

    /// Number of clusters created so far.
    pub fn cluster_count(&self) -> usize {
        self.registry.len()
    }

    /// Assigns a canonical label to one normalized key. Blank keys get a
    /// blank label and leave the registry untouched.
    pub fn assign(&mut self, key: &str, brand: Option<&str>) -> String {
        if key.is_empty() {
            return String::new();
        }
        for entry in &self.registry {
            if similarity_ratio(key, &entry.key) > SIMILARITY_THRESHOLD {
                return entry.label.clone();
            }
        }
        let label = build_label(key, brand);
        self.registry.push(CanonEntry {
            key: key.to_string(),
            label: label.clone(),
        });
        label
    }
}

/// Uppercases the key and joins it with underscores; a non-blank brand is
/// uppercased as-is and prepended with an underscore separator. A brand
/// that is blank after trimming adds no prefix and no separator.
fn build_label(key: &str, brand: Option<&str>) -> String {
    let canon = key.to_uppercase().replace(' ', "_");
    match brand.map(|b| b.trim().to_uppercase()) {
        Some(brand) if !brand.is_empty() => format!("{}_{}", brand, canon),
        _ => canon,
    }
}
