/// Named font stacks selectable for the whole document. The web fonts carry a
/// hosted stylesheet link; clients that strip it fall back to the stack tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Arial,
    Helvetica,
    Georgia,
    TimesNewRoman,
    Verdana,
    CourierNew,
    TrebuchetMs,
    ComicSansMs,
    Roboto,
    OpenSans,
    Lato,
}

impl FontFamily {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "arial" => Ok(Self::Arial),
            "helvetica" => Ok(Self::Helvetica),
            "georgia" => Ok(Self::Georgia),
            "times-new-roman" => Ok(Self::TimesNewRoman),
            "verdana" => Ok(Self::Verdana),
            "courier-new" => Ok(Self::CourierNew),
            "trebuchet-ms" => Ok(Self::TrebuchetMs),
            "comic-sans-ms" => Ok(Self::ComicSansMs),
            "roboto" => Ok(Self::Roboto),
            "open-sans" => Ok(Self::OpenSans),
            "lato" => Ok(Self::Lato),
            other => Err(format!("Invalid font family: '{other}' is not a known stack.")),
        }
    }

    pub fn stack(&self) -> &'static str {
        match self {
            Self::Arial => "Arial, sans-serif",
            Self::Helvetica => "Helvetica, sans-serif",
            Self::Georgia => "Georgia, serif",
            Self::TimesNewRoman => "'Times New Roman', serif",
            Self::Verdana => "Verdana, sans-serif",
            Self::CourierNew => "'Courier New', monospace",
            Self::TrebuchetMs => "'Trebuchet MS', sans-serif",
            Self::ComicSansMs => "'Comic Sans MS', cursive",
            Self::Roboto => "'Roboto', Arial, sans-serif",
            Self::OpenSans => "'Open Sans', Arial, sans-serif",
            Self::Lato => "'Lato', Arial, sans-serif",
        }
    }

    /// A stylesheet `<link>` target for families that are not web-safe.
    pub fn stylesheet_href(&self) -> Option<&'static str> {
        match self {
            Self::Roboto => Some("https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;600;700&display=swap"),
            Self::OpenSans => Some("https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;500;600;700&display=swap"),
            Self::Lato => Some("https://fonts.googleapis.com/css2?family=Lato:wght@400;700&display=swap"),
            _ => None,
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::Arial
    }
}
