use std::fmt;

/// Colour variant of a status chip or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChipTone {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Danger,
}

impl ChipTone {
    /// CSS modifier class, e.g. `chip-success`.
    pub fn class(&self) -> &'static str {
        match self {
            ChipTone::Default => "chip-default",
            ChipTone::Primary => "chip-primary",
            ChipTone::Success => "chip-success",
            ChipTone::Warning => "chip-warning",
            ChipTone::Danger => "chip-danger",
        }
    }
}

impl fmt::Display for ChipTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}
