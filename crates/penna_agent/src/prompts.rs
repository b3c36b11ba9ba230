//! Prompt construction for the three generation calls.

use penna_core::{Platform, ResearchResult};

/// Prompt for the research-insights call.
pub fn research_prompt(query: &str) -> String {
    format!(
        "You are an AI research assistant. Provide 3-5 key insights about: {query}\n\
         \n\
         Focus on:\n\
         - Recent developments and trends\n\
         - Real-world applications and use cases\n\
         - Impact on businesses and society\n\
         - Future implications and predictions\n\
         - Specific examples where possible\n\
         \n\
         Keep insights factual, specific, current, and actionable.\n\
         Write in a clear, professional yet conversational tone."
    )
}

/// Prompt for the topic-selection call.
///
/// Combines every research result into one context block and instructs a
/// single 8-12 word title distinct from the recent topics. Avoidance is
/// instruction-only; novelty is best-effort, not verified.
pub fn topic_prompt(research: &[ResearchResult], recent_topics: &[String]) -> String {
    let combined_insights = research
        .iter()
        .map(|r| format!("Topic: {}\nInsights: {}", r.query, r.insights))
        .collect::<Vec<_>>()
        .join("\n\n");

    let recent = if recent_topics.is_empty() {
        "None".to_string()
    } else {
        recent_topics.join(", ")
    };

    format!(
        "Based on the following AI research insights, suggest ONE specific, engaging \
         article topic that would be valuable for LinkedIn and Medium audiences.\n\
         \n\
         Research Insights:\n\
         {combined_insights}\n\
         \n\
         Recent topics to AVOID repeating:\n\
         {recent}\n\
         \n\
         Requirements:\n\
         - Must be specific and actionable (not generic)\n\
         - Should appeal to professionals, tech leaders, and AI enthusiasts\n\
         - Must be completely different from recent topics\n\
         - Should provide unique value or fresh perspective\n\
         - Should be timely and relevant to current AI landscape\n\
         - Make it sound intriguing and click-worthy\n\
         \n\
         Respond with ONLY the topic title (8-12 words maximum). No quotes, no \
         explanation, just the title."
    )
}

/// Prompt for a content-generation call.
///
/// The character budget is an instruction only; the generator enforces the
/// real ceiling with deterministic trimming afterwards.
pub fn content_prompt(
    topic: &str,
    platform: Platform,
    target_length: usize,
    avoid_phrases: &[String],
) -> String {
    let avoid = if avoid_phrases.is_empty() {
        "generic AI cliches".to_string()
    } else {
        avoid_phrases.join(", ")
    };

    match platform {
        Platform::LinkedIn => format!(
            "You are writing an authentic, personal LinkedIn post about: \"{topic}\"\n\
             \n\
             CRITICAL: Make this sound like a REAL HUMAN wrote it, not AI. Be \
             conversational, personal, and genuine.\n\
             \n\
             FORMAT:\n\
             - Start with a catchy title line (under 60 characters), then a blank line\n\
             - The first 210 characters after that must grab attention, because that \
             is what shows before \"see more\"\n\
             - Personal story or observation, then a key insight with a specific \
             example, then a practical takeaway\n\
             - Close with a question or call to action, a blank line, and 3-5 \
             hashtags on separate lines\n\
             \n\
             STYLE:\n\
             - Write like you're texting a smart friend about something exciting\n\
             - Use contractions liberally and vary sentence length\n\
             - Include a couple of personal opinions or hot takes\n\
             - Add strategic line breaks every 2-3 sentences for mobile readability\n\
             - One or two light emojis at most\n\
             \n\
             NEVER use: {avoid}\n\
             Don't sound preachy, corporate, or stiff.\n\
             \n\
             CHARACTER LIMIT: MUST stay under {target_length} characters (count carefully!)\n\
             \n\
             Now write the complete LinkedIn post about \"{topic}\" in this \
             authentic, human style."
        ),
        Platform::Medium => format!(
            "You are writing a thoughtful, personal Medium essay about: \"{topic}\"\n\
             \n\
             CRITICAL: Make this sound like a REAL HUMAN wrote it, not AI. Depth over \
             polish; genuine over impressive.\n\
             \n\
             FORMAT:\n\
             - Start with the article title on the first line, then a blank line\n\
             - Full article in markdown with ## section headings\n\
             - Open with a personal story or concrete scene, develop one clear \
             argument with specific examples, end with what you'd tell a friend to do\n\
             \n\
             STYLE:\n\
             - First person, conversational but substantive\n\
             - Use contractions and vary sentence length\n\
             - Admit uncertainty or mistakes where honest\n\
             - No hashtags, no emoji\n\
             \n\
             NEVER use: {avoid}\n\
             Don't sound preachy, corporate, or stiff.\n\
             \n\
             CHARACTER LIMIT: MUST stay under {target_length} characters (count carefully!)\n\
             \n\
             Now write the complete Medium article about \"{topic}\" in this \
             authentic, human style."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_prompt_joins_research_blocks() {
        let research = vec![
            ResearchResult {
                query: "agents".into(),
                insights: "one".into(),
            },
            ResearchResult {
                query: "evals".into(),
                insights: "two".into(),
            },
        ];
        let prompt = topic_prompt(&research, &[]);
        assert!(prompt.contains("Topic: agents\nInsights: one"));
        assert!(prompt.contains("Topic: evals\nInsights: two"));
        assert!(prompt.contains("None"));
    }

    #[test]
    fn topic_prompt_lists_recent_topics() {
        let recent = vec!["old topic one".to_string(), "old topic two".to_string()];
        let prompt = topic_prompt(&[], &recent);
        assert!(prompt.contains("old topic one, old topic two"));
    }

    #[test]
    fn content_prompt_carries_budget_and_avoid_list() {
        let avoid = vec!["delve".to_string(), "game-changer".to_string()];
        let prompt = content_prompt("agent memory", Platform::LinkedIn, 2750, &avoid);
        assert!(prompt.contains("under 2750 characters"));
        assert!(prompt.contains("delve, game-changer"));
    }

    #[test]
    fn medium_prompt_requests_markdown_headings() {
        let prompt = content_prompt("agent memory", Platform::Medium, 4500, &[]);
        assert!(prompt.contains("## section headings"));
    }
}
