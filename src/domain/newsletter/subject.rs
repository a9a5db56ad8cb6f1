use std::fmt;
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

/// The email subject line. Doubles as the fallback header title and as the
/// stem of the suggested export filename.
#[derive(Debug, Clone)]
pub struct Subject(String);

impl Subject {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid subject: cannot be empty.".to_string());
        }

        let grapheme_count = trimmed.graphemes(true).count();

        if grapheme_count > 200 {
            return Err("Invalid subject: cannot be longer than 200 characters.".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// `<subject-with-spaces-replaced-by-underscores>_newsletter.html`
    pub fn export_filename(&self) -> String {
        format!("{}_newsletter.html", self.0.replace(' ', "_"))
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
