use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const ANSI_ORGS_JSON: &str = include_str!("../../../../orgs/ansi-orgs.json");

/// One row of the static organization table: the short operating name
/// (acronym) of an accredited standards developer, its full legal name,
/// and its website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgEntry {
    pub operating_name: String,
    pub legal_name: String,
    pub website: String,
}

/// Known ANSI-accredited standards developers, loaded from the embedded
/// table. Extending coverage means editing `orgs/ansi-orgs.json`, not code.
pub static KNOWN_ORGS: Lazy<Vec<OrgEntry>> = Lazy::new(|| {
    serde_json::from_str(ANSI_ORGS_JSON).expect("embedded organization table is valid JSON")
});

/// Look up an organization by operating name (case-insensitive).
pub fn lookup(operating_name: &str) -> Option<&'static OrgEntry> {
    let name = operating_name.trim();
    KNOWN_ORGS
        .iter()
        .find(|o| o.operating_name.eq_ignore_ascii_case(name))
}
