// All LLM prompt text for letter generation.

use crate::generation::refine::Refinement;
use crate::generation::tone::tone_guidance;

/// System prompt for every generation call.
pub const GENERATION_SYSTEM: &str = "You are an elite professional cover letter writer \
    with extensive experience in HR and recruitment. You create compelling, personalized \
    cover letters that stand out to hiring managers and significantly increase interview \
    rates. Your writing is sophisticated yet authentic, strategic yet human.";

const GENERATION_INTRO: &str = "Create a highly compelling and personalized cover letter for \
    the following job description. This letter should be comprehensive, sophisticated, and \
    significantly longer than typical cover letters to showcase deep understanding and \
    enthusiasm.";

const LENGTH_INSTRUCTION: &str =
    "Write a comprehensive letter (800-1200 words) that thoroughly addresses the role";
const STRUCTURE_INSTRUCTION: &str =
    "Strong opening hook, detailed body paragraphs with specific examples, compelling closing";
const STYLE_INSTRUCTION: &str =
    "Professional yet engaging, confident but not arrogant, authentic and human";

const REQUIREMENTS: &[&str] = &[
    "Open with a compelling hook that immediately shows understanding of the company/role",
    "Include 2-3 detailed paragraphs with specific examples and quantifiable achievements",
    "Address the company's needs and pain points directly",
    "Show genuine enthusiasm and cultural fit",
    "Include a strong call-to-action in the closing",
    "Use active voice and varied sentence structure",
    "Avoid generic phrases and clichés",
    "Make it sound authentic and personally written, not AI-generated",
    "End with a professional but warm closing",
];

const WRITE_NOW: &str = "Write the complete cover letter now:";
const REVISE_NOW: &str = "Return only the complete revised cover letter:";

/// Builds the user prompt for a fresh letter.
///
/// The key-skills block is omitted when `keywords` is empty, and the highlight
/// block when `key_strength` is blank.
pub fn build_generation_prompt(
    job_description: &str,
    tone: &str,
    key_strength: Option<&str>,
    keywords: &[String],
) -> String {
    let mut prompt = format!("{GENERATION_INTRO}\n\n");

    prompt.push_str(&format!("JOB DESCRIPTION:\n{job_description}\n\n"));
    push_writing_instructions(&mut prompt, tone);
    push_keywords_and_strength(&mut prompt, key_strength, keywords);

    prompt.push_str("REQUIREMENTS:\n");
    for requirement in REQUIREMENTS {
        prompt.push_str(&format!("• {requirement}\n"));
    }
    prompt.push('\n');

    prompt.push_str(WRITE_NOW);
    prompt
}

/// Builds the user prompt for revising an existing letter.
pub fn build_refinement_prompt(
    job_description: &str,
    tone: &str,
    key_strength: Option<&str>,
    keywords: &[String],
    refinement: &Refinement<'_>,
) -> String {
    let mut prompt = String::from(
        "Revise the cover letter below for the same job description. Keep what already works.\n\n",
    );

    prompt.push_str(&format!("JOB DESCRIPTION:\n{job_description}\n\n"));
    prompt.push_str(&format!(
        "CURRENT LETTER:\n{}\n\n",
        refinement.existing_letter.trim()
    ));
    prompt.push_str(&format!(
        "REVISION GOAL:\n{}\n\n",
        refinement.kind.instruction()
    ));
    push_writing_instructions(&mut prompt, tone);
    push_keywords_and_strength(&mut prompt, key_strength, keywords);

    prompt.push_str(REVISE_NOW);
    prompt
}

fn push_writing_instructions(prompt: &mut String, tone: &str) {
    prompt.push_str("WRITING INSTRUCTIONS:\n");
    prompt.push_str(&format!("• Tone: {tone}\n"));
    if let Some(guidance) = tone_guidance(tone) {
        prompt.push_str(&format!("• Tone guidance: {guidance}\n"));
    }
    prompt.push_str(&format!("• Length: {LENGTH_INSTRUCTION}\n"));
    prompt.push_str(&format!("• Structure: {STRUCTURE_INSTRUCTION}\n"));
    prompt.push_str(&format!("• Style: {STYLE_INSTRUCTION}\n\n"));
}

fn push_keywords_and_strength(prompt: &mut String, key_strength: Option<&str>, keywords: &[String]) {
    if !keywords.is_empty() {
        prompt.push_str(&format!(
            "KEY SKILLS TO INTEGRATE NATURALLY:\n{}\n\n",
            keywords.join(", ")
        ));
    }

    if let Some(strength) = key_strength.map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("HIGHLIGHT THIS ACHIEVEMENT/STRENGTH:\n{strength}\n\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::refine::RefinementKind;

    const JD: &str = "Backend engineer. Python, Docker, and SQL required.";

    fn kws() -> Vec<String> {
        vec!["python".to_string(), "docker".to_string(), "sql".to_string()]
    }

    #[test]
    fn test_generation_prompt_contains_all_sections() {
        let prompt = build_generation_prompt(
            JD,
            "Bold & Assertive",
            Some("Cut infra costs by 40%"),
            &kws(),
        );
        assert!(prompt.contains(JD));
        assert!(prompt.contains("• Tone: Bold & Assertive"));
        assert!(prompt.contains("Tone guidance: Confident language"));
        assert!(prompt.contains("KEY SKILLS TO INTEGRATE NATURALLY:\npython, docker, sql"));
        assert!(prompt.contains("HIGHLIGHT THIS ACHIEVEMENT/STRENGTH:\nCut infra costs by 40%"));
        assert!(prompt.contains("• Include a strong call-to-action in the closing"));
        assert!(prompt.ends_with(WRITE_NOW));
    }

    #[test]
    fn test_generation_prompt_omits_empty_sections() {
        let prompt = build_generation_prompt(JD, "Professional & Formal", Some("   "), &[]);
        assert!(!prompt.contains("KEY SKILLS"));
        assert!(!prompt.contains("HIGHLIGHT THIS"));
    }

    #[test]
    fn test_unknown_tone_has_no_guidance_line() {
        let prompt = build_generation_prompt(JD, "Playful", None, &kws());
        assert!(prompt.contains("• Tone: Playful"));
        assert!(!prompt.contains("Tone guidance"));
    }

    #[test]
    fn test_refinement_prompt_includes_letter_and_goal() {
        let refinement = Refinement {
            kind: RefinementKind::StrengthenOpener,
            existing_letter: "  Dear team, I am applying.  ",
        };
        let prompt =
            build_refinement_prompt(JD, "Professional & Formal", None, &kws(), &refinement);
        assert!(prompt.contains("CURRENT LETTER:\nDear team, I am applying.\n"));
        assert!(prompt.contains(RefinementKind::StrengthenOpener.instruction()));
        assert!(prompt.contains("python, docker, sql"));
        assert!(prompt.ends_with(REVISE_NOW));
        assert!(!prompt.contains(WRITE_NOW));
    }
}
