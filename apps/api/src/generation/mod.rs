// Letter generation: tone, refinement requests, prompt building, and the
// generate → analyze pipeline. All provider calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod refine;
pub mod tone;
