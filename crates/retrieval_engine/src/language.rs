/// Text-to-language boundary. `None` means detection failed.
pub trait LanguageDetector: Send + Sync {
    /// ISO 639-3 code such as `eng`.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Trigram detector backed by whatlang.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        whatlang::detect(text).map(|info| info.lang().code().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_sentence_is_detected() {
        let detected = WhatlangDetector.detect("Aerial view of the solar power station near the river");
        assert_eq!(detected.as_deref(), Some("eng"));
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(WhatlangDetector.detect(""), None);
    }
}
