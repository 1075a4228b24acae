/// Page colour scheme. The page mounts in `Dark`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// CSS classes derived from the current theme and threaded into every section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub band: &'static str,
}

const DARK_TOKENS: ThemeTokens = ThemeTokens {
    background: "bg-night",
    text: "text-on-night",
    secondary_text: "text-subtle-night",
    band: "bg-band-night",
};

const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    background: "bg-day",
    text: "text-on-day",
    secondary_text: "text-subtle-day",
    band: "bg-band-day",
};

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn tokens(self) -> ThemeTokens {
        match self {
            Theme::Dark => DARK_TOKENS,
            Theme::Light => LIGHT_TOKENS,
        }
    }

    /// Background of the testimonials band: tinted in dark mode, plain page background in light.
    pub fn testimonials_band(self) -> &'static str {
        let tokens = self.tokens();
        if self.is_dark() {
            tokens.band
        } else {
            tokens.background
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().tokens().background, "bg-night");
    }

    #[test]
    fn double_toggle_restores_tokens() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled().tokens(), theme.tokens());
            assert_ne!(theme.toggled().tokens(), theme.tokens());
        }
    }

    #[test]
    fn light_tokens() {
        let tokens = Theme::Light.tokens();
        assert_eq!(tokens.background, "bg-day");
        assert_eq!(tokens.text, "text-on-day");
        assert_eq!(tokens.secondary_text, "text-subtle-day");
        assert_eq!(Theme::Light.testimonials_band(), "bg-day");
        assert_eq!(Theme::Dark.testimonials_band(), "bg-band-night");
    }
}
