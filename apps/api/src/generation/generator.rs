//! Email generation — normalizes applicant input, builds the prompt and makes
//! the single completion call.
//!
//! Flow: normalize_input → build_email_prompt → resolve credentials → LLM call.
//! No retries: any failure is logged once and returned to the caller.

use tracing::{debug, error, info};

use crate::generation::normalizer::normalize_input;
use crate::generation::prompts::{EMAIL_PROMPT_TEMPLATE, FALLBACK_EMAIL};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::applicant::{ApplicantInput, GenerationConfig, NormalizedApplicantInput};

/// Generates a cold outreach email for the applicant.
///
/// Credentials are resolved before anything touches the network, so a missing
/// key fails without an outbound request.
pub async fn generate_email(
    llm: &LlmClient,
    input: ApplicantInput,
    config: &GenerationConfig,
) -> Result<String, LlmError> {
    let applicant = normalize_input(input);
    info!(
        "Generating {} email for {} at {}",
        applicant.tone, applicant.target_role, applicant.company_name
    );
    let prompt = build_email_prompt(&applicant);

    let result = request_email(llm, config, &prompt).await;
    if let Err(e) = &result {
        error!("Error generating email: {e}");
    }
    result
}

async fn request_email(
    llm: &LlmClient,
    config: &GenerationConfig,
    prompt: &str,
) -> Result<String, LlmError> {
    let generation = config.resolve(llm.default_api_key())?;

    debug!(
        "Requesting completion from {} (model: {})",
        config.provider.as_deref().unwrap_or("default provider"),
        generation.model
    );

    let response = llm.call(&generation, prompt).await?;

    Ok(response
        .text()
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_EMAIL.to_string()))
}

/// Fills the email prompt template from normalized applicant data.
pub fn build_email_prompt(applicant: &NormalizedApplicantInput) -> String {
    let skills = applicant.skills.join(", ");
    let projects = applicant.projects.join("; ");

    fill_template(EMAIL_PROMPT_TEMPLATE, |key| match key {
        "name" => Some(applicant.name.as_str()),
        "role" => Some(applicant.role.as_str()),
        "target_role" => Some(applicant.target_role.as_str()),
        "company_name" => Some(applicant.company_name.as_str()),
        "experience" => Some(applicant.experience.as_str()),
        "skills" => Some(skills.as_str()),
        "projects" => Some(projects.as_str()),
        "tone" => Some(applicant.tone.as_str()),
        _ => None,
    })
}

/// Substitutes `{key}` placeholders in a single left-to-right pass.
/// Inserted values are never rescanned, and unknown placeholders are left as written.
fn fill_template<'a>(template: &str, value_for: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after
            .find('}')
            .and_then(|close| value_for(&after[..close]).map(|value| (close, value)));

        match filled {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
