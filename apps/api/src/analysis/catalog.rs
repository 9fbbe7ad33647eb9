//! Keyword catalog — the fixed vocabulary used to detect topical relevance in a job description.

/// Category a catalog term belongs to. Order here is the order terms are matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    Technical,
    Business,
    SoftSkill,
    General,
}

const TECHNICAL: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "typescript",
    "html",
    "css",
    "sql",
    "mongodb",
    "postgresql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "api",
    "rest",
    "graphql",
    "microservices",
    "devops",
    "ci/cd",
    "agile",
    "scrum",
];

const BUSINESS: &[&str] = &[
    "marketing",
    "sales",
    "business development",
    "strategy",
    "analytics",
    "roi",
    "revenue",
    "growth",
    "customer acquisition",
    "retention",
    "conversion",
    "crm",
    "b2b",
    "b2c",
    "saas",
    "digital marketing",
    "seo",
    "sem",
    "social media",
];

const SOFT_SKILL: &[&str] = &[
    "leadership",
    "communication",
    "collaboration",
    "teamwork",
    "problem solving",
    "critical thinking",
    "creativity",
    "adaptability",
    "time management",
    "organization",
    "presentation",
    "negotiation",
    "mentoring",
    "coaching",
    "cross-functional",
];

const GENERAL: &[&str] = &[
    "management",
    "development",
    "analysis",
    "research",
    "design",
    "implementation",
    "optimization",
    "innovation",
    "quality",
    "efficiency",
    "productivity",
    "project",
    "customer",
    "client",
    "stakeholder",
    "experience",
    "skills",
    "knowledge",
    "expertise",
];

/// Category → term list, in match order. All terms are lower-case.
pub const KEYWORD_CATALOG: &[(KeywordCategory, &[&str])] = &[
    (KeywordCategory::Technical, TECHNICAL),
    (KeywordCategory::Business, BUSINESS),
    (KeywordCategory::SoftSkill, SOFT_SKILL),
    (KeywordCategory::General, GENERAL),
];

/// Function words ignored by frequency extraction.
pub const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "from", "they", "have", "will", "been", "were", "their", "what",
    "your", "when", "where", "more", "some", "like", "into", "time", "very", "only", "know",
    "just", "first", "also", "after", "back", "other", "many", "than", "then", "them", "these",
    "most", "over", "such", "about", "would", "there", "could", "should",
];

/// Flattened catalog terms in category order.
pub fn terms() -> impl Iterator<Item = &'static str> {
    KEYWORD_CATALOG
        .iter()
        .flat_map(|(_, words)| words.iter().copied())
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
