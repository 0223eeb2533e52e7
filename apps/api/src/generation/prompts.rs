// All LLM prompt constants for the Generation module.

/// Returned when the model answers without any usable content.
pub const FALLBACK_EMAIL: &str = "Failed to generate email.";

/// Cold email prompt template.
/// Replace: {name}, {role}, {target_role}, {company_name}, {experience},
///          {skills}, {projects}, {tone}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"
Create a unique and personalized cold email for a job application with the following requirements:

Context:
- Applicant: {name}, {role}
- Target: {target_role} at {company_name}
- Experience: {experience}
- Skills: {skills}
- Key Projects: {projects}
- Tone: {tone}

Requirements:
1. Write a completely original email that sounds like it was written by a real person
2. Use natural language and vary sentence structure
3. Include specific details about the applicant's experience and skills
4. Reference the company's industry and needs
5. No templates or formulaic structures
6. Make every sentence unique and contextual
7. Add personal insights about why this specific role at this company

Output Format:
- Include a clear subject line
- Use proper email structure
- Add a professional signature if provided links exist
"#;
