//! Number separators per locale.

/// Decimal and grouping separators used by a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Separates the integer and fractional parts.
    pub decimal: char,
    /// Separates digit groups in the integer part.
    pub group: char,
}

const NARROW_NBSP: char = '\u{202f}';
const NBSP: char = '\u{a0}';

const DOT_COMMA: Separators = Separators {
    decimal: '.',
    group: ',',
};
const COMMA_DOT: Separators = Separators {
    decimal: ',',
    group: '.',
};
const COMMA_NBSP: Separators = Separators {
    decimal: ',',
    group: NBSP,
};
const COMMA_NARROW_NBSP: Separators = Separators {
    decimal: ',',
    group: NARROW_NBSP,
};
const DOT_APOSTROPHE: Separators = Separators {
    decimal: '.',
    group: '’',
};

static LOCALES: &[(&str, Separators)] = &[
    ("en", DOT_COMMA),
    ("en-in", DOT_COMMA),
    ("pt", COMMA_NBSP),
    ("pt-br", COMMA_DOT),
    ("de", COMMA_DOT),
    ("de-ch", DOT_APOSTROPHE),
    ("fr", COMMA_NARROW_NBSP),
    ("fr-ch", COMMA_NARROW_NBSP),
    ("es", COMMA_DOT),
    ("es-mx", DOT_COMMA),
    ("it", COMMA_DOT),
    ("nl", COMMA_DOT),
    ("ja", DOT_COMMA),
    ("zh", DOT_COMMA),
    ("ko", DOT_COMMA),
    ("ru", COMMA_NBSP),
    ("pl", COMMA_NBSP),
    ("sv", COMMA_NBSP),
    ("nb", COMMA_NBSP),
    ("da", COMMA_DOT),
    ("fi", COMMA_NBSP),
    ("id", COMMA_DOT),
    ("tr", COMMA_DOT),
    ("cs", COMMA_NBSP),
    ("hi", DOT_COMMA),
];

fn find(tag: &str) -> Option<Separators> {
    LOCALES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, separators)| *separators)
}

/// Resolves the separators for a BCP-47 tag.
///
/// Tries the full tag, then the language subtag, then falls back to `en`.
/// Matching ignores case and accepts `_` as the subtag delimiter.
#[must_use]
pub fn separators_for(locale: &str) -> Separators {
    let tag = locale.trim().to_lowercase().replace('_', "-");
    let language = tag.split('-').next().unwrap_or_default();
    find(&tag).or_else(|| find(language)).unwrap_or(DOT_COMMA)
}
