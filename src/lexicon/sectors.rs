//! Sector term lists used for boosting and strict filtering.
//!
//! The ranker never sees sector names; callers resolve a name here and pass
//! the resulting term list in [`crate::types::ExtractionOptions`].

use rustc_hash::FxHashMap;

/// Built-in sectors and their terms, in display order.
pub const DEFAULT_SECTORS: &[(&str, &[&str])] = &[
    (
        "Advanced Materials",
        &[
            "graphene", "composite", "carbon fiber", "nanomaterial", "ceramic", "polymer",
            "coating", "alloy", "material", "aerogel", "membrane",
        ],
    ),
    (
        "Battery",
        &[
            "battery", "batterie", "lithium", "cathode", "anode", "electrolyte", "cell",
            "gigafactory", "solid state", "sodium ion", "energy storage", "charging",
            "recycling", "nickel", "cobalt", "graphite",
        ],
    ),
    (
        "Energy",
        &[
            "energy", "solar", "wind", "hydrogen", "grid", "renewable", "nuclear", "power",
            "utility", "electricity", "fuel",
        ],
    ),
    (
        "Petrochemical",
        &[
            "petrochemical", "ethylene", "propylene", "refinery", "crude", "naphtha",
            "polymer", "plastic", "resin", "chemical", "lng",
        ],
    ),
    (
        "Pharmaceutical",
        &[
            "pharma", "pharmaceutical", "drug", "vaccine", "clinical", "trial", "fda",
            "biotech", "therapy", "oncology", "approval",
        ],
    ),
    (
        "Semiconductor",
        &[
            "semiconductor", "chip", "wafer", "foundry", "silicon", "lithography",
            "processor", "memory",
        ],
    ),
];

#[derive(Debug, Clone)]
struct SectorEntry {
    name: String,
    terms: Vec<String>,
}

/// Sector name → term list, looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct SectorTable {
    /// Lowercased name -> index into `sectors`
    by_key: FxHashMap<String, usize>,
    sectors: Vec<SectorEntry>,
}

impl Default for SectorTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (name, terms) in DEFAULT_SECTORS {
            table.insert(name, terms.iter().copied());
        }
        table
    }
}

impl SectorTable {
    pub fn empty() -> Self {
        Self {
            by_key: FxHashMap::default(),
            sectors: Vec::new(),
        }
    }

    /// Add or replace a sector.
    pub fn insert<I, S>(&mut self, name: &str, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = SectorEntry {
            name: name.to_string(),
            terms: terms.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
        };
        let key = name.trim().to_lowercase();
        match self.by_key.get(&key) {
            Some(&idx) => self.sectors[idx] = entry,
            None => {
                self.by_key.insert(key, self.sectors.len());
                self.sectors.push(entry);
            }
        }
    }

    /// Terms for `name`, if the sector is known
    pub fn terms(&self, name: &str) -> Option<&[String]> {
        self.by_key
            .get(&name.trim().to_lowercase())
            .map(|&idx| self.sectors[idx].terms.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.terms(name).is_some()
    }

    /// Sector display names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

/// Whether `keyword` and `term` overlap as substrings in either direction.
pub fn matches_term(keyword: &str, term: &str) -> bool {
    !term.is_empty() && (keyword.contains(term) || term.contains(keyword))
}

/// Whether `keyword` matches any of `terms`
pub fn matches_any_term(keyword: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| matches_term(keyword, term))
}
