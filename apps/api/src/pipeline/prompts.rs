// All LLM prompt constants for the pipeline's two extraction steps.
// The JSON-only system fragment from llm_client::prompts is appended by the
// step wrappers.

/// System prompt for the profile-analysis step.
pub const PROFILE_ANALYZER_SYSTEM: &str = "\
    You are a professional career advisor and job market expert. \
    Your task is to analyze a LinkedIn profile and identify the most relevant \
    job titles that match the person's skills, experience, and background.";

/// Profile-analysis prompt template. Replace `{profile_json}` before sending.
pub const PROFILE_ANALYZER_PROMPT_TEMPLATE: &str = r#"Analyze this LinkedIn profile and determine the 5 most suitable job titles for this person.

Consider:
1. Their work experiences and roles
2. Educational background
3. Skills listed on their profile
4. Projects, publications, and other professional activities
5. Industry expertise demonstrated in their profile

Return a JSON object with this EXACT schema (no extra fields):
{
  "relevant_job_titles": ["Senior Data Engineer", "Analytics Engineer"]
}

Provide only the 5 most relevant job titles that best match their qualifications and career trajectory — never more than 5.

LINKEDIN PROFILE:
{profile_json}"#;

/// System prompt for the job-selection-and-coaching step.
pub const JOB_COACHING_SYSTEM: &str = "\
    You are an expert job coach and career advisor. \
    Your task is to select the most relevant jobs for a candidate from a list \
    of potential job opportunities, and to prepare personalized cover letters \
    for each selected job.";

/// Job-coaching prompt template.
/// Replace: {profile_json}, {jobs_json}
pub const JOB_COACHING_PROMPT_TEMPLATE: &str = r#"Select the 5 most relevant and varied jobs for this candidate, explain why each was selected, and write a personalized cover letter for each.

Your selection process should:
1. Identify jobs that best match the candidate's skills, experience, and background
2. Ensure variety in the selected jobs (different companies, seniority levels, or role focuses)
3. Consider the candidate's potential for growth and career advancement
4. Select roles where the candidate has a competitive advantage

Each cover letter must be markdown formatted and:
- Address the specific company and role
- Highlight the most relevant experience and skills from the candidate's profile
- Demonstrate understanding of the company and position requirements
- Show enthusiasm for the role and organization
- Maintain a professional, confident tone
- Be concise yet comprehensive (250-350 words)

The executive summary must:
1. Outline the overall job selection strategy
2. Highlight the key themes and patterns in the selected positions
3. Explain how these choices align with the candidate's career trajectory
4. Offer recommendations for prioritizing the applications

Return a JSON object with this EXACT schema (no extra fields):
{
  "selected_jobs": [
    {
      "job_id": "the job_id of the selected job, exactly as it appears in the job pool",
      "reason": "why this job was selected",
      "cover_letter": "the cover letter in markdown format"
    }
  ],
  "summary": "the executive summary"
}

Select at most 5 jobs. Every job_id MUST come from the job pool below.

CANDIDATE'S LINKEDIN PROFILE:
{profile_json}

POTENTIAL JOB OPPORTUNITIES:
{jobs_json}"#;
