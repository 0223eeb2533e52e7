//! Tone calibration — collapses free-text tone requests onto a closed set.

use std::fmt;

/// Stylistic register of the generated email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Direct,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Direct => "direct",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted spellings and synonyms, lowercase.
static TONE_SYNONYMS: &[(&str, Tone)] = &[
    ("profesional", Tone::Formal),
    ("formal", Tone::Formal),
    ("friendly", Tone::Friendly),
    ("casual", Tone::Friendly),
    ("direct", Tone::Direct),
    ("straight", Tone::Direct),
];

/// Maps a requested tone onto [`Tone`]. Absent or unrecognized input is `Formal`.
pub fn normalize_tone(tone: Option<&str>) -> Tone {
    let Some(tone) = tone else {
        return Tone::default();
    };
    let lowered = tone.to_lowercase();
    TONE_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == lowered)
        .map(|(_, t)| *t)
        .unwrap_or_default()
}
