// Cold email generation.
// Implements: input normalization, tone mapping, prompt building, generation.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod generator;
pub mod handlers;
pub mod normalizer;
pub mod prompts;
pub mod tone;
