//! Keyword matching. Partitions each job keyword category into matched and missing
//! against a resume, and computes an overall match rate.
//!
//! Skills match as exact lower-case substrings. Requirements match loosely: any token
//! longer than three characters found anywhere in the resume is enough.

use serde::{Deserialize, Serialize};

use crate::scoring::job_keywords::JobKeywordSet;

const REQUIREMENT_TOKEN_MIN_CHARS: usize = 4;

/// Matched/missing partition of one keyword category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl CategoryMatch {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    pub tech_skills: CategoryMatch,
    pub soft_skills: CategoryMatch,
    pub requirements: CategoryMatch,
    pub overall_match_rate: u32, // 0-100
    pub total_keywords: u32,
    pub matched_count: u32,
}

/// Matches a resume against extracted job keywords. `tools` is not counted.
pub fn match_keywords(resume_text: &str, keywords: &JobKeywordSet) -> KeywordMatchResult {
    let resume_lower = resume_text.to_lowercase();

    let tech_skills = partition(&keywords.tech_skills, |kw| resume_lower.contains(kw));
    let soft_skills = partition(&keywords.soft_skills, |kw| resume_lower.contains(kw));
    let requirements = partition(&keywords.requirements, |req| {
        requirement_matches(&resume_lower, req)
    });

    let total = tech_skills.total() + soft_skills.total() + requirements.total();
    let matched =
        tech_skills.matched.len() + soft_skills.matched.len() + requirements.matched.len();

    KeywordMatchResult {
        tech_skills,
        soft_skills,
        requirements,
        overall_match_rate: match_rate(matched, total),
        total_keywords: total as u32,
        matched_count: matched as u32,
    }
}

/// `round(matched / total × 100)`, or 0 when there is nothing to match.
pub fn match_rate(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

fn partition<'a, I, F>(keywords: I, is_match: F) -> CategoryMatch
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> bool,
{
    let mut result = CategoryMatch::default();
    for keyword in keywords {
        if is_match(&keyword.to_lowercase()) {
            result.matched.push(keyword.clone());
        } else {
            result.missing.push(keyword.clone());
        }
    }
    result
}

fn requirement_matches(resume_lower: &str, requirement_lower: &str) -> bool {
    requirement_lower
        .split_whitespace()
        .filter(|token| token.chars().count() >= REQUIREMENT_TOKEN_MIN_CHARS)
        .any(|token| resume_lower.contains(token))
}

impl KeywordMatchResult {
    /// Plain-text digest handed to the external judge alongside resume and job text.
    pub fn to_prompt_summary(&self) -> String {
        format!(
            "KEYWORD ANALYSIS (objective detection):\n\
             {}\n{}\n{}\n\
             - Overall Keyword Match Rate: {}%",
            category_summary("Technical Skills Found", &self.tech_skills),
            category_summary("Soft Skills Found", &self.soft_skills),
            category_summary("Requirements", &self.requirements),
            self.overall_match_rate,
        )
    }
}

fn category_summary(label: &str, category: &CategoryMatch) -> String {
    format!(
        "- {label}: {} of {}\n  - Matched: {}\n  - Missing: {}",
        category.matched.len(),
        category.total(),
        join_or_none(&category.matched),
        join_or_none(&category.missing),
    )
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}
