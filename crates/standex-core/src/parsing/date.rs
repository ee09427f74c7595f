use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords that anchor the publishing date within a block (lowercase).
pub const KEYWORDS: &[&str] = &["final action date", "final action", "approved"];

/// Ordered date matchers, first rule with any match wins.
static MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "May 3, 2021"
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s*\d{4}",
        // "5/3/2021"
        r"\b\d{1,2}/\d{1,2}/\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("date pattern compiles"))
    .collect()
});

/// Locate the publishing date in a candidate block.
///
/// Among the matches of the first applicable rule, picks the date nearest a
/// keyword occurrence; ties prefer a date at or after the keyword. When the
/// block has no keyword, the first date wins. No date yields an empty string.
pub fn find_publishing_date(text: &str) -> String {
    let lower = text.to_lowercase();
    let keyword_positions: Vec<usize> = KEYWORDS
        .iter()
        .flat_map(|k| lower.match_indices(k).map(|(i, _)| i))
        .collect();

    for re in MATCHERS.iter() {
        let matches: Vec<(usize, &str)> = re
            .find_iter(text)
            .map(|m| (m.start(), m.as_str()))
            .collect();
        if matches.is_empty() {
            continue;
        }

        if keyword_positions.is_empty() {
            return matches[0].1.trim().to_string();
        }

        let best = matches.iter().min_by_key(|(start, _)| {
            let dist = keyword_positions
                .iter()
                .map(|&k| if *start >= k { *start - k } else { k - *start })
                .min()
                .unwrap_or(usize::MAX);
            let before_all = keyword_positions.iter().all(|&k| *start < k);
            (dist, usize::from(before_all), *start)
        });
        if let Some((_, date)) = best {
            return date.trim().to_string();
        }
    }

    String::new()
}
