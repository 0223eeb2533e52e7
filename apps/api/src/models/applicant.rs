use serde::Deserialize;

use crate::generation::tone::Tone;
use crate::llm_client::{LlmError, DEFAULT_MODEL};

/// Applicant data as submitted by the web form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInput {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub projects: Vec<String>,
    pub portfolio_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub company_name: String,
    pub target_role: String,
    pub recruiter_name: Option<String>,
    /// Free text; collapsed onto [`Tone`] during normalization.
    pub tone: Option<String>,
}

/// Applicant data after correction and casing. Only ever built by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedApplicantInput {
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: Vec<String>,
    pub portfolio_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub company_name: String,
    pub target_role: String,
    pub recruiter_name: Option<String>,
    pub tone: Tone,
}

/// Per-request generation settings. Anything left empty falls back to
/// process-wide configuration during [`GenerationConfig::resolve`].
#[derive(Debug, Clone, Default)]
pub struct GenerationConfig {
    pub provider: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

/// Settings that are ready to go on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGeneration {
    pub api_key: String,
    pub model: String,
}

impl GenerationConfig {
    /// Config used by the HTTP endpoint: Groq, no per-request overrides.
    pub fn groq() -> Self {
        Self {
            provider: Some("groq".to_string()),
            ..Self::default()
        }
    }

    /// Resolves the credential (explicit, then `env_api_key`, then fail) and the model.
    /// Empty strings count as absent; whitespace-only values are kept as given.
    pub fn resolve(&self, env_api_key: Option<&str>) -> Result<ResolvedGeneration, LlmError> {
        let api_key = non_empty(self.api_key.as_deref())
            .or_else(|| non_empty(env_api_key))
            .ok_or(LlmError::MissingCredential)?;

        let model = non_empty(self.model.as_deref()).unwrap_or(DEFAULT_MODEL);

        Ok(ResolvedGeneration {
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_applicant_input_uses_camel_case() {
        let input: ApplicantInput = serde_json::from_value(json!({
            "name": "jane doe",
            "role": "develper",
            "skills": ["pythn"],
            "experience": "3 yrs",
            "projects": ["chat app"],
            "portfolioLink": "https://jane.dev",
            "companyName": "acme corp",
            "targetRole": "senir enginer",
            "recruiterName": "bob",
            "tone": "casual"
        }))
        .unwrap();

        assert_eq!(input.company_name, "acme corp");
        assert_eq!(input.target_role, "senir enginer");
        assert_eq!(input.portfolio_link.as_deref(), Some("https://jane.dev"));
        assert!(input.linkedin_link.is_none());
        assert_eq!(input.recruiter_name.as_deref(), Some("bob"));
    }

    #[test]
    fn test_applicant_input_defaults_lists_and_experience() {
        let input: ApplicantInput = serde_json::from_value(json!({
            "name": "jane",
            "role": "dev",
            "companyName": "acme",
            "targetRole": "engineer"
        }))
        .unwrap();

        assert!(input.skills.is_empty());
        assert!(input.projects.is_empty());
        assert_eq!(input.experience, "");
        assert!(input.tone.is_none());
    }

    #[test]
    fn test_applicant_input_requires_company_name() {
        let result: Result<ApplicantInput, _> = serde_json::from_value(json!({
            "name": "jane",
            "role": "dev",
            "targetRole": "engineer"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_prefers_explicit_key() {
        let config = GenerationConfig {
            api_key: Some("explicit".to_string()),
            ..GenerationConfig::groq()
        };
        let resolved = config.resolve(Some("from-env")).unwrap();
        assert_eq!(resolved.api_key, "explicit");
        assert_eq!(resolved.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_resolve_falls_back_to_env_key() {
        let resolved = GenerationConfig::groq().resolve(Some("from-env")).unwrap();
        assert_eq!(resolved.api_key, "from-env");
    }

    #[test]
    fn test_resolve_empty_explicit_key_uses_env() {
        let config = GenerationConfig {
            api_key: Some(String::new()),
            ..GenerationConfig::default()
        };
        let resolved = config.resolve(Some("from-env")).unwrap();
        assert_eq!(resolved.api_key, "from-env");
    }

    #[test]
    fn test_resolve_keeps_whitespace_key() {
        let config = GenerationConfig {
            api_key: Some("  ".to_string()),
            ..GenerationConfig::default()
        };
        let resolved = config.resolve(Some("from-env")).unwrap();
        assert_eq!(resolved.api_key, "  ");

        let resolved = GenerationConfig::default().resolve(Some(" ")).unwrap();
        assert_eq!(resolved.api_key, " ");
    }

    #[test]
    fn test_resolve_without_any_key_fails() {
        let err = GenerationConfig::groq().resolve(None).unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential));
    }

    #[test]
    fn test_resolve_uses_explicit_model() {
        let config = GenerationConfig {
            model: Some("llama-3.1-70b-versatile".to_string()),
            ..GenerationConfig::default()
        };
        let resolved = config.resolve(Some("k")).unwrap();
        assert_eq!(resolved.model, "llama-3.1-70b-versatile");
    }
}
