//! Treemap tiles from a ranked keyword list.

use serde::{Deserialize, Serialize};

use crate::types::KeywordEntry;

/// Visual size class of a tile relative to the largest keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreemapTier {
    /// At least two thirds of the largest count
    Large,
    /// At least one third of the largest count
    Medium,
    Small,
}

impl TreemapTier {
    fn classify(count: usize, max: usize) -> Self {
        // widened so thirds stay exact for any usize count
        let (count, max) = (count as u128, max as u128);
        if count * 3 >= max * 2 {
            TreemapTier::Large
        } else if count * 3 >= max {
            TreemapTier::Medium
        } else {
            TreemapTier::Small
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapTile {
    pub word: String,
    pub count: usize,
    /// Fraction of the summed counts, 0.0 to 1.0
    pub share: f64,
    pub tier: TreemapTier,
}

/// One tile per keyword, in input order.
pub fn bucket_treemap(keywords: &[KeywordEntry]) -> Vec<TreemapTile> {
    let total: u128 = keywords.iter().map(|k| k.count as u128).sum();
    let max = keywords.iter().map(|k| k.count).max().unwrap_or(0);

    keywords
        .iter()
        .map(|k| TreemapTile {
            word: k.word.clone(),
            count: k.count,
            share: if total == 0 {
                0.0
            } else {
                k.count as f64 / total as f64
            },
            tier: TreemapTier::classify(k.count, max),
        })
        .collect()
}
