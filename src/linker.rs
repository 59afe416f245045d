// Search-link derivation for canonical labels.

use url::Url;

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Builds the search URL for a canonical label; an empty label maps to an
/// empty link. The label is form-urlencoded into the `q` parameter: spaces
/// become `+` and reserved characters are escaped, never rejected. One
/// encoding discipline for every label in a run.
pub fn search_link(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }
    let mut url = Url::parse(SEARCH_ENDPOINT).expect("static search endpoint must parse");
    url.query_pairs_mut().append_pair("q", label);
    url.to_string()
}
