//! Closed word lists used by the token and phrase filters.
//!
//! These are data, not logic: tune them here (and bump
//! [`super::LEXICON_VERSION`]) without touching the pipeline stages.

/// High-frequency English function words and news boilerplate.
pub const NEWS_STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "are", "was", "were",
    "has", "have", "had", "been", "being", "will", "would", "could", "should", "can",
    "may", "might", "must", "its", "their", "they", "them", "our", "your", "you",
    "his", "her", "she", "him", "who", "what", "when", "where", "which", "why",
    "how", "about", "after", "before", "over", "under", "into", "onto", "than", "then",
    "there", "here", "these", "those", "such", "also", "just", "more", "most", "some",
    "any", "all", "not", "but", "out", "new", "says", "said", "say", "year",
    "years", "week", "today", "read", "story", "news", "report", "according", "first", "last",
    "one", "two", "three", "other", "very", "much", "many", "does", "did", "while",
    "during", "because", "between", "through", "only", "now", "like", "get", "make", "made",
    "per", "via", "amid", "across", "against", "within", "without", "still", "even", "each",
];

/// Web and markup artifacts that leak into feed text.
pub const JUNK_TOKENS: &[&str] = &[
    "nbsp", "webp", "jpeg", "jpg", "png", "gif", "svg", "img", "src", "href",
    "https", "html", "htm", "pagetype", "quot", "apos", "cdata", "div", "span", "class",
    "style", "srcset", "alt", "figure", "figcaption", "thumbnail", "thumb", "image", "photo", "getty",
    "shutterstock", "caption", "credit", "subscribe", "newsletter", "cookie", "javascript", "iframe", "embed", "rel",
    "nofollow", "noopener", "noreferrer", "wordpress", "uploads", "permalink", "continue", "reading", "appeared", "originally",
    "published", "copyright", "rights", "reserved", "privacy", "policy", "sponsored", "advertisement", "utm", "wp", "target", "blank",
];

/// Substrings that mark a token as URL or feed debris.
pub const NOISE_SUBSTRINGS: &[&str] = &["http", "www", ".com", "utm_", "amp", "rss", "feed"];

/// Industry vocabulary. A multi-word phrase needs at least one of these.
///
/// Entries are in stemmed form, so plurals such as "batteries" appear as
/// "batterie".
pub const DOMAIN_TERMS: &[&str] = &[
    // battery and storage
    "battery", "batterie", "lithium", "cathode", "anode", "electrolyte", "cell", "graphite", "nickel", "cobalt",
    "manganese", "sodium", "gigafactory", "charging", "charger", "storage", "recycling", "separator",
    // energy
    "energy", "solar", "wind", "hydrogen", "grid", "renewable", "nuclear", "power", "fuel", "electric",
    "electricity", "vehicle", "emission", "carbon", "utility",
    // petrochemical
    "oil", "gas", "lng", "crude", "refinery", "petrochemical", "chemical", "ethylene", "propylene", "naphtha",
    "polymer", "plastic", "resin", "catalyst",
    // materials
    "material", "composite", "graphene", "alloy", "ceramic", "coating", "steel", "aluminum", "copper", "silicon",
    "semiconductor", "chip", "wafer", "foundry", "mining", "mineral",
    // pharma
    "pharma", "pharmaceutical", "drug", "vaccine", "clinical", "trial", "fda", "biotech", "therapy", "oncology",
    "approval",
    // industry
    "plant", "capacity", "production", "supply", "factory", "manufacturing",
];
