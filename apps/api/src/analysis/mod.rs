// Judge-backed analysis pipelines.
// Each pipeline takes `&dyn Judge`; deterministic scoring lives in crate::scoring.

pub mod handlers;
pub mod job_match;
pub mod prompts;
pub mod resume_review;
pub mod roadmap;
pub mod tailoring;
pub mod verdict;
