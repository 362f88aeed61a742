// Deterministic scoring core.
// Pure functions over input text. Nothing here calls the judge or returns an error.

pub mod blend;
pub mod job_keywords;
pub mod keyword_match;
pub mod resume_rules;
