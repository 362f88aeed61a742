// All judge prompt templates for the analysis pipelines.
// Placeholders are filled with llm_client::prompts::render.

/// Resume review. Replace: {current_year}, {findings_summary}, {resume_text}, {json_only}
pub const RESUME_REVIEW_PROMPT_TEMPLATE: &str = r#"You are a brutally honest resume expert and career coach. Review this resume the way a recruiter would and be direct about weaknesses.

The current year is {current_year}. When a role runs "to Present" or "to Current", use {current_year} as its end year and compute years of experience from the actual dates.

{findings_summary}

RESUME TEXT:
{resume_text}

SCORING GUIDELINES (use the full range):
- 90-100: exceptional, complete, strong metrics, ready for senior roles
- 80-89: very strong, minor improvements possible
- 70-79: solid foundation, missing some elements or metrics
- 60-69: has the basics, needs significant work on metrics/content
- 50-59: missing key sections or has major quality issues
- 40-49: multiple missing sections, vague content
- 0-39: barely qualifies as a resume

1. COMPLETENESS SCORE (0-100), grounded in the pre-analysis findings above:
   - missing email, phone, experience OR education: below 60
   - few quantified achievements and many weak phrases: below 70
   - above 85 only with comprehensive sections, strong metrics and few weaknesses
2. SECTION SCORES (0-5 each, 0 if missing): summary, education, experience, other (projects, awards, skills, certifications, volunteering)
3. SUGGESTIONS: 5-8 specific, actionable items. Call out buzzwords, vague statements, weak verbs and missing results. Do NOT suggest specific numbers.

{json_only}
{"completenessScore": <0-100>, "completenessRationale": "...", "sectionScores": {"summary": <0-5>, "education": <0-5>, "experience": <0-5>, "other": <0-5>}, "suggestions": ["..."]}"#;

/// Job match. Replace: {keyword_summary}, {resume_text}, {job_description}, {json_only}
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"You are a senior technical recruiter. Judge how well this resume fits the job description using BOTH semantic understanding AND the keyword analysis below.

{keyword_summary}

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

SCORING GUIDELINES (use the full range):
- 90-100: meets or exceeds every requirement
- 80-89: meets most requirements and key skills
- 70-79: meets core requirements, missing some preferred skills
- 60-69: some requirements met, transferable skills, needs upskilling
- 50-59: foundational skills only, significant gaps
- 40-49: limited overlap
- 0-39: lacks most required qualifications

1. ALIGNMENT SCORE: keyword coverage plus semantic fit (years of experience, domain, trajectory)
2. GAPS: 3-8 gaps, each with a severity
   - high: missing must-have requirements or core technical skills
   - medium: missing preferred qualifications or secondary skills
   - low: minor or nice-to-have gaps
3. STRENGTHS: 3-6 specific areas of strong alignment
4. RECOMMENDATIONS: 5-8 actionable steps

{json_only}
{"alignmentScore": <0-100>, "alignmentRationale": "...", "gaps": [{"category": "...", "description": "...", "severity": "high|medium|low"}], "strengths": ["..."], "recommendations": ["..."]}"#;

/// Job description generation. Replace: {role}, {location}
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Write a realistic job description for a {role} position in {location}.

Include:
- Company overview (a generic tech company)
- 5-7 key responsibilities
- Required qualifications
- Preferred qualifications
- Benefits overview

Respond with the job description text only, no JSON."#;

/// Final verdict. Replace: {alignment_score}, {gap_details}, {resume_excerpt},
/// {job_excerpt}, {json_only}
pub const VERDICT_PROMPT_TEMPLATE: &str = r#"You are an expert career coach. Using the analysis and the candidate's self-reported proficiency in each gap, give a final recommendation.

ALIGNMENT SCORE: {alignment_score}%

GAPS AND PROFICIENCY:
{gap_details}

RESUME (excerpt):
{resume_excerpt}

JOB DESCRIPTION (excerpt):
{job_excerpt}

Provide:
1. A final verdict of 2-3 encouraging paragraphs
2. Whether they should apply (true if the score is at least 50% or they report proficiency in the gaps)

{json_only}
{"verdict": "...", "shouldApply": true}"#;

/// Tailored resume. Replace: {resume_text}, {job_excerpt}, {strengths}, {confirmed_skills},
/// {no_invented_metrics}, {json_only}
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Produce a tailored, ATS-optimized version of this resume for the target job.

ORIGINAL RESUME:
{resume_text}

TARGET JOB:
{job_excerpt}

STRENGTHS TO HIGHLIGHT:
{strengths}

SKILLS THE CANDIDATE CONFIRMED:
{confirmed_skills}

RULES:
- Replace weak phrasing with strong verbs ("responsible for" -> "led", "worked on" -> "architected")
- {no_invented_metrics}
- Preserve EVERY section of the original (volunteering, awards, certifications, memberships, ...)
- Keep every contact link exactly as written
- Add confirmed skills to the skills section

{json_only}
{
  "changes_summary": ["..."],
  "header": {"name": "...", "titles": ["..."], "email": "...", "phone": "...", "location": "...", "linkedin": "...", "github": "..."},
  "sections": [
    {"title": "PROFESSIONAL SUMMARY", "type": "paragraph", "content": "..."},
    {"title": "TECHNICAL SKILLS", "type": "skills", "content": [{"category": "...", "items": "..."}]},
    {"title": "EXPERIENCE", "type": "jobs", "content": [{"job_title": "...", "company": "...", "location": "...", "dates": "...", "bullets": ["..."]}]},
    {"title": "EDUCATION", "type": "education", "content": [{"degree": "...", "institution": "...", "dates": "...", "bullets": ["..."]}]},
    {"title": "AWARDS", "type": "bullets", "content": ["..."]}
  ]
}"#;

/// Career roadmap. Replace: {resume_text}, {dream_role}, {dream_location}, {timeframe},
/// {json_only}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert career coach helping someone move into their dream role.

CURRENT RESUME:
{resume_text}

CAREER GOAL:
Dream role: {dream_role}
Dream location: {dream_location}
Timeframe: {timeframe}

Provide:
1. CURRENT GAPS (3-6 items)
2. SKILLS TO ACQUIRE (5-8 specific skills)
3. ACTION PLAN (3-4 phases, each with a name, a duration and 3-5 actions)
4. RESOURCES (4-6 specific recommendations)
5. MILESTONES (4-6 measurable checkpoints)

{json_only}
{"currentGaps": ["..."], "skillsToAcquire": ["..."], "actionPlan": [{"phase": "...", "duration": "...", "actions": ["..."]}], "resources": ["..."], "milestones": ["..."]}"#;
