//! Category classification by ordered heuristic rules.
//!
//! An explicit ordered list of (predicate, category) rules evaluated
//! top-to-bottom, first match wins. Rule order is significant:
//! essential-infra ids before vendor prefixes before keyword groups.
//! Total function — the final fallback always assigns a category.

use pieceworks_core::Category;

/// One rule group: a category plus the literal, prefix, and substring
/// checks that select it.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    pub exact: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub substrings: &'static [&'static str],
}

impl CategoryRule {
    fn matches(&self, id: &str) -> bool {
        self.exact.contains(&id)
            || self.prefixes.iter().any(|p| id.starts_with(p))
            || self.substrings.iter().any(|s| id.contains(s))
    }
}

/// The curated rule groups, in evaluation order.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Essential,
        exact: &["webhook", "schedule", "branch", "code", "delay", "loop", "storage", "http"],
        prefixes: &[],
        substrings: &[],
    },
    CategoryRule {
        category: Category::Google,
        exact: &["gmail", "googlechat"],
        prefixes: &["google-"],
        substrings: &[],
    },
    CategoryRule {
        category: Category::Microsoft,
        exact: &[],
        prefixes: &["microsoft-"],
        substrings: &[],
    },
    CategoryRule {
        category: Category::Ai,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "openai", "anthropic", "gemini", "claude", "hugging", "deepseek", "groq",
            "mistral", "cohere", "perplexity", "replicate", "stability", "amazon-bedrock",
        ],
    },
    CategoryRule {
        category: Category::Communication,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "slack", "discord", "telegram", "whatsapp", "twilio", "sms", "sendgrid",
            "mailgun", "smtp", "email", "mailer", "postmark", "pushover", "ntfy",
            "intercom", "crisp", "freshdesk", "zendesk", "tawk",
        ],
    },
    CategoryRule {
        category: Category::Crm,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "hubspot", "salesforce", "zoho-crm", "pipedrive", "freshsales", "attio",
            "close-crm", "copper",
        ],
    },
    CategoryRule {
        category: Category::Ecommerce,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "shopify", "woocommerce", "stripe", "paypal", "square", "lemonsqueezy",
            "gumroad", "paddle",
        ],
    },
    CategoryRule {
        category: Category::Marketing,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "mailchimp", "activecampaign", "convertkit", "drip", "campaign", "facebook",
            "instagram", "twitter", "linkedin", "tiktok", "youtube", "pinterest",
            "reddit", "hootsuite", "buffer",
        ],
    },
    CategoryRule {
        category: Category::Database,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "mysql", "postgres", "supabase", "firebase", "mongodb", "redis", "sql",
            "database", "pinecone", "qdrant", "weaviate", "milvus", "snowflake",
            "bigquery", "clickhouse", "airtable", "baserow", "nocodb",
        ],
    },
    CategoryRule {
        category: Category::Dev,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "github", "gitlab", "bitbucket", "jira", "jenkins", "docker", "aws",
            "azure", "vercel", "netlify", "sentry", "datadog", "pagerduty", "linear",
        ],
    },
    CategoryRule {
        category: Category::Content,
        exact: &[],
        prefixes: &[],
        substrings: &["wordpress", "webflow", "contentful", "strapi", "cms", "ghost", "medium"],
    },
    CategoryRule {
        category: Category::Finance,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "invoice", "accounting", "quickbooks", "xero", "freshbooks", "billing",
            "zoho-invoice", "wave",
        ],
    },
    CategoryRule {
        category: Category::Productivity,
        exact: &[],
        prefixes: &[],
        substrings: &[
            "notion", "trello", "clickup", "asana", "monday", "todoist", "basecamp",
            "calendly", "cal-com",
        ],
    },
];

/// Classify a piece identifier into exactly one category. Never fails.
pub fn classify(piece_id: &str) -> Category {
    let id = piece_id.to_lowercase();
    for rule in CATEGORY_RULES {
        if rule.matches(&id) {
            return rule.category;
        }
    }
    Category::Productivity
}
