/// Characters shown in a hover preview before truncation.
pub const PREVIEW_LENGTH: usize = 150;
pub const PREVIEW_SUFFIX: &str = "... (click for more)";

pub const NOT_FOUND_TEXT: &str = "Definition not found.";
pub const UNAVAILABLE_TEXT: &str = "Unable to load definition.";

/// Outcome of asking the server for one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionLookup {
    Found(String),
    /// The server answered that the term is unknown.
    NotFound,
    /// Transport failure, server error or malformed response.
    Unavailable,
}

impl DefinitionLookup {
    /// Definite answers are worth remembering; failures should be retried.
    pub fn is_cacheable(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    pub fn display_text(&self) -> String {
        match self {
            Self::Found(definition) => definition.clone(),
            Self::NotFound => NOT_FOUND_TEXT.to_string(),
            Self::Unavailable => UNAVAILABLE_TEXT.to_string(),
        }
    }
}
