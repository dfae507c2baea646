/// Dash-like code points folded into an ASCII hyphen before lookup.
const DASH_VARIANTS: [char; 6] = [
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
];

/// Trims the query and unifies every dash variant to `-`.
pub fn normalize_term(term: &str) -> String {
    term.trim()
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect()
}

/// `spores` -> `spore`, but leaves `-ss` endings (`mass`) alone.
pub fn strip_plural_s(term: &str) -> Option<&str> {
    if term.ends_with('s') && !term.ends_with("ss") {
        term.strip_suffix('s')
    } else {
        None
    }
}

/// `hyphes` -> `hyph`.
pub fn strip_plural_es(term: &str) -> Option<&str> {
    term.strip_suffix("es")
}
