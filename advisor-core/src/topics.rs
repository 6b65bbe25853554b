//! Topic classification over question text and search snippets.
//!
//! Company detection runs in three stages over the lowercased input: exact
//! full-string match, substring containment in list order (first match wins,
//! no ranking by length or specificity), then exact token equality. Only if
//! no company matches do the keyword sets run, in fixed priority order
//! job → finance → gaming → coding, with `General` as the default.

use std::fmt;

use serde::Serialize;

/// Fixed topic enumeration used for prompt selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Question centers on a known company.
    Company,
    /// Careers, hiring, interviews.
    Job,
    /// Investing, markets, taxation.
    Finance,
    /// Game development and the games industry.
    Gaming,
    /// Programming, algorithms, debugging.
    Coding,
    /// Everything else.
    General,
}

impl Topic {
    /// Lowercase label as stored in sessions and returned over HTTP.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Company => "company",
            Topic::Job => "job",
            Topic::Finance => "finance",
            Topic::Gaming => "gaming",
            Topic::Coding => "coding",
            Topic::General => "general",
        }
    }

    /// Parses a stored label back into a topic, defaulting to `General`.
    pub fn from_label(label: &str) -> Topic {
        match label {
            "company" => Topic::Company,
            "job" => Topic::Job,
            "finance" => Topic::Finance,
            "gaming" => Topic::Gaming,
            "coding" => Topic::Coding,
            _ => Topic::General,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known company names, lowercase. Matching is first-hit in this order.
pub const KNOWN_COMPANIES: &[&str] = &[
    // Big Tech
    "microsoft", "google", "alphabet", "apple", "amazon", "meta", "facebook",
    "netflix", "tesla", "nvidia", "intel", "amd", "qualcomm", "broadcom",
    "ibm", "oracle", "cisco", "vmware", "salesforce", "adobe",
    // Global Tech & SaaS
    "spotify", "zoom", "dropbox", "slack", "atlassian", "shopify",
    "snowflake", "databricks", "palantir", "asana", "cloudflare",
    "twilio", "digitalocean", "mongodb", "elastic", "zendesk",
    "service now", "red hat", "openai", "deepmind",
    // Gaming
    "ea", "electronic arts", "ubisoft", "activision", "epic games",
    "riot games", "bethesda", "rockstar games", "cd projekt red",
    "supercell", "blizzard", "square enix", "sega",
    // Indian Tech
    "tcs", "infosys", "wipro", "hcl", "tech mahindra", "lti mindtree",
    "persistent", "mphasis", "zoho", "freshworks",
    // Indian Startups + Unicorns
    "swiggy", "zomato", "ola", "oyo", "paytm", "byju", "phonepe",
    "urban company", "naukri", "flipkart",
    // Fintech
    "visa", "mastercard", "paypal", "stripe", "coinbase", "robinhood",
    "revolut", "nubank",
    // Cloud/Infra
    "aws", "azure", "gcp", "google cloud", "digital ocean", "cloudflare",
    // Consulting
    "deloitte", "accenture", "ey", "ernst and young", "kpmg",
    "mckinsey", "bcg", "bain",
    // Automobile Tech
    "bmw", "mercedes", "volvo", "toyota", "honda",
    // Semiconductor
    "tsmc", "samsung", "micron", "arm",
    // E-commerce & Retail
    "ebay", "alibaba", "walmart", "target",
    // Others (Global)
    "siemens", "sap", "huawei", "xiaomi", "lenovo", "philips",
];

const JOB_KEYWORDS: &[&str] = &["job", "hiring", "resume", "interview", "salary", "careers"];

const FINANCE_KEYWORDS: &[&str] = &[
    "stock", "invest", "investment", "portfolio", "sip", "nifty", "crypto", "mutual fund",
];

const GAMING_KEYWORDS: &[&str] = &["game", "gaming", "unity", "unreal", "developer", "gamedev"];

const CODING_KEYWORDS: &[&str] = &["python", "java", "c++", "leetcode", "algorithm", "debug"];

/// Scans text for a known company name, title-cased on hit.
///
/// Stages: exact full-string match, then substring containment in list
/// order, then whitespace-token equality. Returns `None` on empty input.
pub fn detect_company_from_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let t = text.to_lowercase();

    // Full exact match first
    for c in KNOWN_COMPANIES {
        if *c == t.trim() {
            return Some(title_case(c));
        }
    }

    // Partial match detection
    for c in KNOWN_COMPANIES {
        if t.contains(c) {
            return Some(title_case(c));
        }
    }

    // Token match (e.g., "I want microsoft job" -> "Microsoft")
    for w in t.split_whitespace() {
        for c in KNOWN_COMPANIES {
            if w == *c {
                return Some(title_case(c));
            }
        }
    }

    None
}

/// Classifies the main topic of a question, company name included when
/// the topic is [`Topic::Company`].
///
/// Classification runs over the question plus any snippet text, so a
/// company only named in web results still steers the answer schema.
/// Empty input falls through to `General`.
pub fn detect_topic(user_text: &str, snippets: &str) -> (Topic, Option<String>) {
    let text = format!("{} {}", user_text.to_lowercase(), snippets.to_lowercase());

    if let Some(company) = detect_company_from_text(&text) {
        return (Topic::Company, Some(company));
    }

    if JOB_KEYWORDS.iter().any(|k| text.contains(k)) {
        return (Topic::Job, None);
    }
    if FINANCE_KEYWORDS.iter().any(|k| text.contains(k)) {
        return (Topic::Finance, None);
    }
    if GAMING_KEYWORDS.iter().any(|k| text.contains(k)) {
        return (Topic::Gaming, None);
    }
    if CODING_KEYWORDS.iter().any(|k| text.contains(k)) {
        return (Topic::Coding, None);
    }

    (Topic::General, None)
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_company_name_matches() {
        assert_eq!(detect_company_from_text("google"), Some("Google".into()));
        assert_eq!(
            detect_company_from_text("  Epic Games  "),
            Some("Epic Games".into())
        );
    }

    #[test]
    fn company_inside_sentence_matches() {
        for (text, expect) in [
            ("I want to work at Google", "Google"),
            ("I want to work at Stripe", "Stripe"),
            ("I want to work at epic games", "Epic Games"),
            ("I want to work at TCS", "Tcs"),
            ("tell me about nvidia hiring", "Nvidia"),
        ] {
            assert_eq!(detect_company_from_text(text).as_deref(), Some(expect));
        }
    }

    // Substring containment is first-hit in list order, so a name embedded
    // in a longer name wins if it comes earlier ("ey" inside "mckinsey").
    #[test]
    fn overlapping_names_resolve_in_list_order() {
        assert_eq!(detect_company_from_text("mckinsey").as_deref(), Some("Ey"));
        assert_eq!(detect_company_from_text("toyota").as_deref(), Some("Oyo"));
    }

    #[test]
    fn no_company_in_plain_text() {
        assert_eq!(detect_company_from_text("how do plants grow"), None);
        assert_eq!(detect_company_from_text(""), None);
        assert_eq!(detect_company_from_text("   "), None);
    }

    #[test]
    fn company_topic_wins_over_keywords() {
        let (topic, company) = detect_topic("Tell me about Google hiring", "");
        assert_eq!(topic, Topic::Company);
        assert_eq!(company.as_deref(), Some("Google"));
    }

    #[test]
    fn company_detected_from_snippets_only() {
        let (topic, company) = detect_topic("who makes the 4090", "NVIDIA Corporation designs GPUs");
        assert_eq!(topic, Topic::Company);
        assert_eq!(company.as_deref(), Some("Nvidia"));
    }

    #[test]
    fn keyword_topics_in_priority_order() {
        assert_eq!(detect_topic("how to write a resume", "").0, Topic::Job);
        assert_eq!(detect_topic("best mutual fund strategy", "").0, Topic::Finance);
        assert_eq!(detect_topic("gamedev roadmap", "").0, Topic::Gaming);
        assert_eq!(detect_topic("how to debug a segfault", "").0, Topic::Coding);
    }

    #[test]
    fn plain_text_defaults_to_general() {
        let (topic, company) = detect_topic("why is the sky blue", "");
        assert_eq!(topic, Topic::General);
        assert!(company.is_none());
    }

    #[test]
    fn empty_input_is_general() {
        let (topic, company) = detect_topic("", "");
        assert_eq!(topic, Topic::General);
        assert!(company.is_none());
    }

    #[test]
    fn labels_roundtrip() {
        for t in [
            Topic::Company,
            Topic::Job,
            Topic::Finance,
            Topic::Gaming,
            Topic::Coding,
            Topic::General,
        ] {
            assert_eq!(Topic::from_label(t.as_str()), t);
        }
        assert_eq!(Topic::from_label("nonsense"), Topic::General);
    }
}
