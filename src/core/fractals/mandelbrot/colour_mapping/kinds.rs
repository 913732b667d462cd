#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    InteriorGlow,
    EscapeHue,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::InteriorGlow, Self::EscapeHue];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::InteriorGlow => "Interior glow",
            Self::EscapeHue => "Escape hue",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
