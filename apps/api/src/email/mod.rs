// Order emails: summarise line items, render the admin or customer template,
// and hand the prompt to the model once.

pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod summary;
