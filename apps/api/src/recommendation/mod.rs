// Product recommendations: gender-filtered catalog + profile → prompt,
// then reconcile the model's titles back to catalog IDs.

pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod reconcile;
