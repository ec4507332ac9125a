use crate::types::error::FieldErrors;

pub const BANNED_WORDS_KEY: &str = "banned_words";
pub const BANNED_WORDS_MESSAGE: &str = "Нельзя публиковать запрещенные материалы";

/// Stock list: gambling, crypto get-rich schemes, scammy discounts and
/// law-enforcement bait. Overridable via BANNED_TITLE_TERMS.
pub const DEFAULT_BANNED_TERMS: [&str; 9] = [
    "биржа",
    "казино",
    "криптовалюта",
    "крипта",
    "дешево",
    "бесплатно",
    "обман",
    "полиция",
    "радар",
];

pub const TITLE_MAX_CHARS: usize = 30;
pub const TITLE_TOO_LONG_MESSAGE: &str =
    "Убедитесь, что это значение содержит не более 30 символов.";

/// Rejects titles containing a banned term anywhere, case insensitively.
/// The list is injected at construction, nothing here reads global state.
#[derive(Debug, Clone)]
pub struct TitleValidator {
    banned: Vec<String>,
}

impl TitleValidator {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TitleValidator {
            banned: terms
                .into_iter()
                .map(|term| term.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// First configured term contained in `title`, if any.
    pub fn matched_term(&self, title: &str) -> Option<&str> {
        let haystack = title.to_lowercase();
        self.banned
            .iter()
            .find(|term| haystack.contains(term.as_str()))
            .map(|term| term.as_str())
    }

    pub fn check(&self, title: &str) -> Result<(), FieldErrors> {
        if self.matched_term(title).is_some() {
            return Err(FieldErrors::single(BANNED_WORDS_KEY, BANNED_WORDS_MESSAGE));
        }
        Ok(())
    }
}

/// Length cap on titles, counted in characters, not bytes. Runs before the
/// banned-term check.
pub fn check_title_length(title: &str) -> Result<(), FieldErrors> {
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(FieldErrors::single("title", TITLE_TOO_LONG_MESSAGE));
    }
    Ok(())
}
