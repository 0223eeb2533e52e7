//! Text normalization — fixes common misspellings and casing in applicant input
//! before it is embedded in a prompt.
//!
//! Every function here is total: empty input gives empty output and nothing fails.
//! Tokens are split on single spaces so the caller's spacing survives.

use crate::generation::tone::normalize_tone;
use crate::models::applicant::{ApplicantInput, NormalizedApplicantInput};

/// Job title misspellings, keyed by lowercase token.
static TITLE_CORRECTIONS: &[(&str, &str)] = &[
    ("senir", "Senior"),
    ("softwre", "Software"),
    ("enginer", "Engineer"),
    ("develper", "Developer"),
    ("programer", "Programmer"),
    ("arcitect", "Architect"),
    ("devops", "DevOps"),
];

/// Technology names, keyed by the lowercase form of the whole term.
static TERM_CORRECTIONS: &[(&str, &str)] = &[
    ("pythn", "Python"),
    ("javascipt", "JavaScript"),
    ("react", "React"),
    ("nod", "Node"),
    ("typescript", "TypeScript"),
    ("vue", "Vue.js"),
];

/// Applied in order, as plain substring replacements.
static EXPERIENCE_REPLACEMENTS: &[(&str, &str)] = &[
    ("yrs", "years"),
    ("expernce", "experience"),
    ("dev", "development"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Uppercases the first character; the rest is lowercased or kept as-is.
fn capitalize_token(token: &str, lowercase_rest: bool) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    if lowercase_rest {
        out.push_str(&chars.as_str().to_lowercase());
    } else {
        out.push_str(chars.as_str());
    }
    out
}

fn map_tokens(s: &str, f: impl Fn(&str) -> String) -> String {
    s.split(' ').map(f).collect::<Vec<_>>().join(" ")
}

/// "jANE doe" -> "Jane Doe". Used for person names.
pub fn capitalize_words(s: &str) -> String {
    map_tokens(s, |w| capitalize_token(w, true))
}

/// "acme iOS labs" -> "Acme IOS Labs". Keeps the casing after each first letter.
pub fn capitalize_word_starts(s: &str) -> String {
    map_tokens(s, |w| capitalize_token(w, false))
}

/// "chat app in Rust" -> "Chat app in Rust". Only the very first character changes.
pub fn capitalize_first(s: &str) -> String {
    capitalize_token(s, false)
}

/// Corrects known misspelled title words and title-cases every token.
pub fn correct_title(s: &str) -> String {
    map_tokens(&s.to_lowercase(), |w| {
        let corrected = lookup(TITLE_CORRECTIONS, w).unwrap_or(w);
        capitalize_token(corrected, false)
    })
}

/// Whole-term, case-insensitive correction. Unknown terms keep their casing.
pub fn correct_term(s: &str) -> String {
    lookup(TERM_CORRECTIONS, &s.to_lowercase())
        .map(str::to_string)
        .unwrap_or_else(|| s.to_string())
}

/// Global, case-sensitive substring replacement with no word boundaries,
/// so "devops" becomes "developmentops".
pub fn correct_experience_text(s: &str) -> String {
    EXPERIENCE_REPLACEMENTS
        .iter()
        .fold(s.to_string(), |text, (from, to)| text.replace(from, to))
}

/// Runs every field of the applicant through its correction rule.
pub fn normalize_input(input: ApplicantInput) -> NormalizedApplicantInput {
    NormalizedApplicantInput {
        name: capitalize_words(&input.name),
        role: correct_title(&input.role),
        skills: input.skills.iter().map(|s| correct_term(s)).collect(),
        experience: correct_experience_text(&input.experience),
        projects: input.projects.iter().map(|p| capitalize_first(p)).collect(),
        portfolio_link: input.portfolio_link,
        linkedin_link: input.linkedin_link,
        company_name: capitalize_word_starts(&input.company_name),
        target_role: correct_title(&input.target_role),
        recruiter_name: input.recruiter_name.as_deref().map(capitalize_first),
        tone: normalize_tone(input.tone.as_deref()),
    }
}
