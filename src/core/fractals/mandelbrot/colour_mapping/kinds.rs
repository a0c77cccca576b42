#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    DuskGradient,
    SlateGradient,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::DuskGradient, Self::SlateGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DuskGradient => "Dusk gradient",
            Self::SlateGradient => "Slate gradient",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
