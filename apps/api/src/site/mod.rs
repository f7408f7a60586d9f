// Site builder: free text → site record → HTML page.
// All model calls go through llm_client; publishing lives in crate::publish.

pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod record;
pub mod renderer;
pub mod styles;
