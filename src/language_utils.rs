use isolang::Language;

/// Language utilities for log-friendly language names
///
/// Store keys are opaque, so nothing here rejects an id. When an id happens
/// to be an ISO 639-1 or ISO 639-2 code it can be resolved to a readable name.
/// ISO 639-2/B codes and their ISO 639-2/T equivalents
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Resolve an id to an ISO language, if it is an ISO code at all
fn iso_language(id: &str) -> Option<Language> {
    let code = id.trim().to_lowercase();

    match code.len() {
        2 => Language::from_639_1(&code),
        3 => {
            let part2t = PART2B_TO_PART2T
                .iter()
                .find(|(b, _)| *b == code)
                .map_or(code.as_str(), |&(_, t)| t);
            Language::from_639_3(part2t)
        }
        _ => None,
    }
}

/// Normalize an ISO id to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(id: &str) -> Option<String> {
    iso_language(id).map(|lang| lang.to_639_3().to_string())
}

/// Check if two ids name the same ISO language ("en", "eng")
///
/// Ids that are not ISO codes only match themselves.
pub fn language_codes_match(a: &str, b: &str) -> bool {
    match (normalize_to_part2t(a), normalize_to_part2t(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// English name of the language an id denotes
pub fn language_display_name(id: &str) -> Option<String> {
    iso_language(id).map(|lang| lang.to_name().to_string())
}

/// Id with its English name when one is known, e.g. `rus (Russian)`
pub fn describe_language(id: &str) -> String {
    match language_display_name(id) {
        Some(name) => format!("{} ({})", id, name),
        None => id.to_string(),
    }
}
