use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered identifier matchers, first match wins. Each pattern anchors at
/// the start of a candidate block and captures the document identifier in
/// group 1.
static MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // ANSI with one or more organization tokens, then a code:
        // "ANSI/ASSP A10.1", "ANSI/AAMI/ISO 11135:2014"
        r"^(ANSI(?:/[A-Za-z]{1,10}\.?)+ [A-Za-z]{0,6}[0-9][A-Za-z0-9.:-]*)",
        // INCITS with optional organization tokens:
        // "INCITS 559-2021", "INCITS/ISO/IEC 29100:2011"
        r"^(INCITS(?:/[A-Za-z]{1,10})* [A-Za-z]{0,6}[0-9][A-Za-z0-9.:-]*)",
        // Bare ANSI code: "ANSI Z535.1-2017"
        r"^(ANSI [A-Za-z]{0,6}[0-9][A-Za-z0-9.:-]*)",
        // Comma-delimited fallback: everything before the first comma
        r"^((?:ANSI|INCITS)[^,\n]{0,80}?)\s*,",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("identifier pattern compiles"))
    .collect()
});

/// Match the document identifier at the start of a block.
///
/// Returns the identifier and the byte offset just past it, or None when no
/// pattern matches (the block is then discarded by the caller).
pub fn match_identifier(text: &str) -> Option<(String, usize)> {
    for re in MATCHERS.iter() {
        if let Some(m) = re.captures(text).and_then(|c| c.get(1)) {
            return Some((m.as_str().trim().to_string(), m.end()));
        }
    }
    None
}
