//! The compiled-in set of prompts published by this tool.
//!
//! Each record is published under `<PROJECT_PREFIX>-<id>`. The bodies are the
//! prompts the bio summary agent runs with; keep them byte-identical to the
//! application's local copies so hub and local sources stay interchangeable.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix shared by every published prompt name.
pub const PROJECT_PREFIX: &str = "agent-bio-summary-v2";

/// Version tag consumers pull (`PROMPT_VERSION`).
pub const VERSION_TAG: &str = "latest";

/// Hub repo handles: lowercase alphanumerics, `-` and `_`.
static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid handle regex"));

/// A prompt template record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptRecord {
    /// Local identifier, unique within [`PROMPTS`].
    pub id: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    pub input_variables: &'static [&'static str],
}

impl PromptRecord {
    /// Externally visible name: `<PROJECT_PREFIX>-<id>`.
    pub fn full_name(&self) -> String {
        format!("{}-{}", PROJECT_PREFIX, self.id)
    }
}

/// Check a published name against the hub's repo handle rules.
pub fn is_valid_handle(name: &str) -> bool {
    HANDLE_RE.is_match(name)
}

/// All prompts, in upload order.
pub const PROMPTS: [PromptRecord; 5] = [
    PromptRecord {
        id: "summarization",
        description: "Summarize synthetic biology research articles for college sophomores",
        template: SUMMARIZATION,
        input_variables: &["title", "url", "content"],
    },
    PromptRecord {
        id: "collation",
        description: "Collate individual article summaries into an HTML email newsletter",
        template: COLLATION,
        input_variables: &["summaries"],
    },
    PromptRecord {
        id: "evaluation",
        description: "Evaluate the quality of an individual article summary using LLM-as-a-judge",
        template: EVALUATION,
        input_variables: &["title", "url", "summary"],
    },
    PromptRecord {
        id: "collated-evaluation",
        description: "Evaluate the quality of the collated newsletter using LLM-as-a-judge",
        template: COLLATED_EVALUATION,
        input_variables: &["count", "summary"],
    },
    PromptRecord {
        id: "orchestration",
        description: "System prompt for LangChain agent orchestration - controls tool calling workflow",
        template: ORCHESTRATION,
        input_variables: &[],
    },
];

const SUMMARIZATION: &str = "\
You are an expert in synthetic biology and biotechnology. Create a comprehensive summary of this research article for college sophomores studying biology.

Article Title: {title}
Article URL: {url}
Article Content: {content}

Requirements:
- Minimum 100 words
- Focus on synthetic biology relevance
- Use clear, accessible language
- Highlight key findings and implications
- Include any practical applications mentioned
- Explain technical concepts for college sophomore level

Summary:";

const COLLATION: &str = "\
Create a cohesive daily synthetic biology newsletter from these individual article summaries:

{summaries}

Requirements:
- Create an engaging newsletter format suitable for email
- Use HTML formatting for email compatibility
- Include article headings with links to original sources
- Maintain coherence across all articles
- Add a call-to-action for feedback at the end
- Keep it engaging for college sophomore biology students

Newsletter HTML:";

const EVALUATION: &str = "\
Evaluate the quality of this article summary:

Article Title: {title}
Article URL: {url}
Summary: {summary}

Rate the following criteria on a scale of 0-1:
1. Coherence: Is the summary logically structured and easy to follow?
2. Accuracy: Does the summary accurately represent the article content?
3. Completeness: Does the summary cover the key points adequately?
4. Readability: Is the summary appropriate for college sophomore level?

Provide specific feedback and an overall score.";

const COLLATED_EVALUATION: &str = "\
Evaluate the quality of this collated summary:

Individual Summaries Count: {count}
Collated Summary: {summary}

Rate the following criteria on a scale of 0-1:
1. Coherence: Does the summary flow logically across all articles?
2. Accuracy: Are the individual summaries accurately represented?
3. Completeness: Are all important articles included?
4. Readability: Is it appropriate for email newsletter format?

Provide specific feedback and an overall score.";

const ORCHESTRATION: &str = "\
You are an expert AI agent for generating daily synthetic biology summaries.

AVAILABLE TOOLS AND HOW THEY WORK:

1. searchWeb: Searches for articles and stores results in shared state
   - Takes: query, maxResults, dateRange, sources
   - Returns: Count of articles found
   - State: Stores search results for next tool

2. extractScoreAndStoreArticles: Processes search results (extract content, score relevancy, store in DB)
   - Takes: relevancyThreshold (reads search results from state automatically)
   - Returns: List of relevant articles that passed the threshold
   - State: Stores processed articles for summarization

3. summarizeArticle: Generates summaries for ALL stored articles
   - Takes: NO PARAMETERS (reads all stored articles from state automatically)
   - Returns: Array of summaries (minimum 100 words each)
   - Behavior: Processes all articles internally in batches, call this tool ONCE
   - State: Stores summaries for collation

4. collateSummary: Combines summaries into HTML newsletter
   - Takes: NO PARAMETERS (reads summaries from state automatically)
   - Returns: Final HTML email content
   - State: Stores collated summary for email

5. sendEmail: Sends newsletter to recipients
   - Takes: summary, recipients, metadata
   - Returns: Delivery confirmation

YOUR TASK:
Generate a daily synthetic biology newsletter by:
1. Finding recent articles on synthetic biology and biotechnology
2. Filtering for relevant, high-quality articles
3. Creating comprehensive summaries (minimum 100 words per article)
4. Collating into a cohesive HTML email newsletter
5. Sending to all specified recipients

IMPORTANT NOTES:
- Tools read from shared state automatically - don't pass data between tools manually
- Call summarizeArticle and collateSummary ONCE each (they process all items internally)
- Ensure summaries are appropriate for college sophomore level
- Include article links and citations
- Maintain professional tone and accuracy";
