pub mod date;
pub mod identifier;

use crate::error::StandexError;
use crate::model::StandardRecord;
use crate::orgs;
use once_cell::sync::Lazy;
use regex::Regex;

/// Organization header lines look like
/// "ASSP (American Society of Safety Professionals) | p: 847-699-2929 | w: www.assp.org".
static ORG_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Z0-9&.-]{1,11})\s+\((.+)").expect("org header compiles"));

/// Marker phrase for American National Standard status. The word boundary
/// keeps "American National Standards Institute" footers from matching.
static AMERICAN_STANDARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"American National Standard\b").expect("marker compiles"));

/// Report boilerplate the source appends to some organization lines.
const REPORT_BOILERPLATE: &str = "The data in this document is reported";

/// Organization fields carried forward across the blocks listed under one
/// organization header.
#[derive(Debug, Clone, Default)]
struct OrgContext {
    operating_name: String,
    legal_name: String,
    website: String,
}

/// Parse extracted text into standard records, in source order.
///
/// Candidate blocks open at each document identifier line and close at the
/// next identifier or organization header. A block with no identifier is
/// skipped; a missing optional field leaves that field empty. Only empty
/// input is an error.
pub fn parse_records(text: &str) -> Result<Vec<StandardRecord>, StandexError> {
    if text.trim().is_empty() {
        return Err(StandexError::EmptyInput);
    }

    let mut records = Vec::new();
    let mut org = OrgContext::default();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(ctx) = parse_org_header(trimmed) {
            flush_block(&mut block, &org, &mut records);
            org = ctx;
        } else if is_block_start(trimmed) {
            flush_block(&mut block, &org, &mut records);
            block.push(trimmed);
        } else if !block.is_empty() {
            block.push(trimmed);
        } else if let Some(site) = extract_website(trimmed) {
            // Contact line following an organization header
            org.website = site;
        }
    }
    flush_block(&mut block, &org, &mut records);

    Ok(records)
}

/// Each new "ANSI..." or "INCITS..." token opens a candidate block. Whether
/// the block actually carries a document identifier is decided at parse time.
fn is_block_start(line: &str) -> bool {
    line.starts_with("ANSI") || line.starts_with("INCITS")
}

fn flush_block(block: &mut Vec<&str>, org: &OrgContext, records: &mut Vec<StandardRecord>) {
    if block.is_empty() {
        return;
    }
    let lines = std::mem::take(block);
    match parse_block(&lines, org) {
        Some(record) => records.push(record),
        None => log::debug!("skipping block without document identifier: {:?}", lines.first()),
    }
}

/// Parse one candidate block. Returns None when no identifier matches.
fn parse_block(lines: &[&str], org: &OrgContext) -> Option<StandardRecord> {
    let text = lines.join(" ");
    let (document_name, id_end) = identifier::match_identifier(&text)?;

    Some(StandardRecord {
        operating_name: org.operating_name.clone(),
        legal_name: org.legal_name.clone(),
        website: extract_website(&text).unwrap_or_else(|| org.website.clone()),
        document_name,
        standard_title: extract_title(&text[id_end..]),
        publishing_date: date::find_publishing_date(&text),
        is_american_standard: AMERICAN_STANDARD.is_match(&text),
    })
}

/// Title is the descriptive text between the identifier and the date marker
/// (or the American National Standard marker, whichever comes first).
fn extract_title(rest: &str) -> String {
    let lower = rest.to_lowercase();
    let mut cut = date::KEYWORDS
        .iter()
        .filter_map(|k| lower.find(k))
        .min()
        .unwrap_or(rest.len());
    if let Some(m) = AMERICAN_STANDARD.find(rest) {
        cut = cut.min(m.start());
    }
    rest[..cut]
        .trim_matches(|c: char| c == ',' || c == '|' || c == '.' || c.is_whitespace())
        .to_string()
}

/// Match an organization header line, preferring the static table for the
/// legal name and website of known operating names.
fn parse_org_header(line: &str) -> Option<OrgContext> {
    let caps = ORG_HEADER.captures(line)?;
    let operating = caps[1].to_string();

    let mut ctx = match orgs::lookup(&operating) {
        Some(entry) => OrgContext {
            operating_name: entry.operating_name.clone(),
            legal_name: entry.legal_name.clone(),
            website: entry.website.clone(),
        },
        None => {
            // Positional heuristic: the legal name is the parenthesized text
            let mut legal = caps[2].to_string();
            if let Some(end) = legal.find(')') {
                legal.truncate(end);
            }
            if let Some(idx) = legal.find(REPORT_BOILERPLATE) {
                legal.truncate(idx);
            }
            OrgContext {
                operating_name: operating,
                legal_name: legal.trim().trim_end_matches(',').to_string(),
                website: String::new(),
            }
        }
    };

    // The document's own contact segment wins over the table entry
    if let Some(site) = extract_website(line) {
        ctx.website = site;
    }
    Some(ctx)
}

/// Websites appear in contact segments like "| w: www.assp.org".
fn extract_website(text: &str) -> Option<String> {
    let idx = text.find("w: ")?;
    let site = text[idx + 3..].split('|').next().unwrap_or("").trim();
    if site.is_empty() {
        None
    } else {
        Some(site.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block() {
        let text = "ASSP (American Society of Safety Professionals) | w: www.assp.org\n\
                    ANSI/ASSP A10.1 Safety Requirements for Construction,\n\
                    | Final Action Date: May 3, 2021 | American National Standard";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.document_name, "ANSI/ASSP A10.1");
        assert!(r.standard_title.contains("Safety Requirements"));
        assert_eq!(r.publishing_date, "May 3, 2021");
        assert_eq!(r.operating_name, "ASSP");
        assert_eq!(r.legal_name, "American Society of Safety Professionals");
        assert_eq!(r.website, "www.assp.org");
        assert!(r.is_american_standard);
    }

    #[test]
    fn test_blocks_preserve_source_order() {
        let text = "ANSI/ASSP A10.1 First standard, Final Action Date: May 3, 2021\n\
                    ANSI/ASSP A10.2 Second standard, Final Action Date: June 4, 2022\n\
                    INCITS 559-2021 Third standard, Final Action Date: July 5, 2023";
        let records = parse_records(text).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.document_name.as_str()).collect();
        assert_eq!(names, ["ANSI/ASSP A10.1", "ANSI/ASSP A10.2", "INCITS 559-2021"]);
    }

    #[test]
    fn test_missing_date_yields_empty_field() {
        let text = "ANSI/ASSP A10.1 First standard, Final Action Date: May 3, 2021\n\
                    ANSI/ASSP A10.2 Second standard with no date";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].publishing_date, "May 3, 2021");
        assert_eq!(records[1].publishing_date, "");
    }

    #[test]
    fn test_missing_website_yields_empty_field() {
        let text = "QQQQ (Quiet Quality Quorum)\nANSI 12.3-2020 Some title";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].website, "");
        assert_eq!(records[0].legal_name, "Quiet Quality Quorum");
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(parse_records(""), Err(StandexError::EmptyInput)));
        assert!(matches!(parse_records("  \n \n"), Err(StandexError::EmptyInput)));
    }

    #[test]
    fn test_no_identifier_blocks_yield_empty_sequence() {
        let text = "Some preamble text\nwith no standards in it";
        let records = parse_records(text).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_block_without_identifier_is_skipped() {
        let text = "ANSI Essential Requirements procedural overview\n\
                    continuation of the overview text\n\
                    ANSI/ASSP A10.1 Safety Requirements, Final Action Date: May 3, 2021";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].document_name, "ANSI/ASSP A10.1");
    }

    #[test]
    fn test_org_context_carries_across_blocks() {
        let text = "ASME (The American Society of Mechanical Engineers) | w: www.asme.org\n\
                    ANSI/ASME B30.2 Overhead Cranes, Final Action Date: May 3, 2021\n\
                    ANSI/ASME B30.5 Mobile Cranes, Final Action Date: June 4, 2022";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 2);
        for r in &records {
            assert_eq!(r.operating_name, "ASME");
            assert_eq!(r.legal_name, "American Society of Mechanical Engineers");
            assert_eq!(r.website, "www.asme.org");
        }
    }

    #[test]
    fn test_unknown_org_uses_header_heuristics() {
        let text = "ZZAP (Zone Zero Abatement Panel) | w: www.zzap.example\n\
                    ANSI/ZZAP Z1.1 Zone abatement, Final Action Date: May 3, 2021";
        let records = parse_records(text).unwrap();
        assert_eq!(records[0].operating_name, "ZZAP");
        assert_eq!(records[0].legal_name, "Zone Zero Abatement Panel");
        assert_eq!(records[0].website, "www.zzap.example");
    }

    #[test]
    fn test_boilerplate_stripped_from_legal_name() {
        let text = format!(
            "ZZAP (Zone Zero Abatement Panel {REPORT_BOILERPLATE} as of January 2023)\n\
             ANSI/ZZAP Z1.1 Zone abatement"
        );
        let records = parse_records(&text).unwrap();
        assert_eq!(records[0].legal_name, "Zone Zero Abatement Panel");
    }

    #[test]
    fn test_institute_footer_is_not_american_marker() {
        let text = "ANSI/ASSP A10.1 Safety Requirements\n\
                    Published by the American National Standards Institute";
        let records = parse_records(text).unwrap();
        assert!(!records[0].is_american_standard);
    }

    #[test]
    fn test_american_marker_detected() {
        let text = "ANSI/ASSP A10.1 Safety Requirements | American National Standard";
        let records = parse_records(text).unwrap();
        assert!(records[0].is_american_standard);
    }

    #[test]
    fn test_block_spanning_lines() {
        let text = "ANSI/NSF 61 Drinking Water System Components -\n\
                    Health Effects, | Final Action Date: 10/12/2022";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].document_name, "ANSI/NSF 61");
        assert!(records[0].standard_title.contains("Health Effects"));
        assert_eq!(records[0].publishing_date, "10/12/2022");
    }
}
