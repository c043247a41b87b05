//! Text conversions shared by the catalog readers and writers.

/// Entity table in escape order. Ampersand must be replaced first so the
/// entities introduced by later substitutions are not escaped again.
const XML_ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('\'', "&apos;"),
    ('"', "&quot;"),
    ('\n', "&#10;"),
    ('\r', "&#13;"),
    ('\t', "&#9;"),
];

/// Escape text for inclusion inside an XML element.
///
/// Newlines, carriage returns and tabs are written as character references
/// so multi-line plots survive the EmulationStation parser intact.
pub fn escape_xml(s: &str) -> String {
    let mut out = s.to_string();
    for &(ch, entity) in XML_ENTITIES {
        if out.contains(ch) {
            out = out.replace(ch, entity);
        }
    }
    out
}

/// Inverse of [`escape_xml`]. Ampersand is restored last.
pub fn unescape_xml(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = s.to_string();
    for &(ch, entity) in XML_ENTITIES.iter().rev() {
        out = out.replace(entity, &ch.to_string());
    }
    out
}

/// Convert an AEL release year into EmulationStation's `YYYYMMDDTHHMMSS`.
///
/// AEL only tracks the year, so month and day are always January 1st.
/// Anything other than exactly four ASCII digits yields an empty string.
pub fn release_date(year: &str) -> String {
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        format!("{year}0101T000000")
    } else {
        String::new()
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
