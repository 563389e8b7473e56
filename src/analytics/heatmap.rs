//! Sector × keyword heatmap.
//!
//! Each sector's articles are extracted with that sector's terms in boost
//! mode. Intensities share one scale: every count is divided by the largest
//! count anywhere in the heatmap, so cells are comparable across rows.

use serde::{Deserialize, Serialize};

use crate::lexicon::sectors::SectorTable;
use crate::pipeline::runner::KeywordPipeline;
use crate::pipeline::traits::Preprocessor;
use crate::types::{ArticleRecord, ExtractionOptions, KeywordEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub word: String,
    pub count: usize,
    /// `count` over the heatmap's largest count, 0.0 to 1.0
    pub intensity: f64,
}

/// Ranked keywords of one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRow {
    pub sector: String,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorHeatmap {
    pub rows: Vec<SectorRow>,
    /// Largest count across all rows
    pub max_count: usize,
}

impl SectorHeatmap {
    pub fn row(&self, sector: &str) -> Option<&SectorRow> {
        self.rows
            .iter()
            .find(|r| r.sector.eq_ignore_ascii_case(sector))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.cells.is_empty())
    }
}

/// Build a heatmap with up to `top_n` keywords per sector.
///
/// Sectors missing from `sectors` are extracted without boosting.
pub fn sector_heatmap<Pre: Preprocessor>(
    pipeline: &KeywordPipeline<Pre>,
    inputs: &[(&str, &[ArticleRecord])],
    sectors: &SectorTable,
    top_n: usize,
) -> SectorHeatmap {
    let ranked: Vec<(&str, Vec<KeywordEntry>)> = inputs
        .iter()
        .map(|&(sector, articles)| {
            let mut options = ExtractionOptions::default().with_top_n(top_n);
            match sectors.terms(sector) {
                Some(terms) => options = options.with_sector_terms(terms),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(sector, "unknown sector; extracting without sector terms");
                }
            }
            (sector, pipeline.extract(articles, &options))
        })
        .collect();

    let max_count = ranked
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().map(|k| k.count))
        .max()
        .unwrap_or(0);

    let rows = ranked
        .into_iter()
        .map(|(sector, keywords)| SectorRow {
            sector: sector.to_string(),
            cells: keywords
                .into_iter()
                .map(|k| HeatmapCell {
                    intensity: if max_count == 0 {
                        0.0
                    } else {
                        k.count as f64 / max_count as f64
                    },
                    word: k.word,
                    count: k.count,
                })
                .collect(),
        })
        .collect();

    SectorHeatmap { rows, max_count }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles(titles: &[&str]) -> Vec<ArticleRecord> {
        titles.iter().map(|t| ArticleRecord::titled(*t)).collect()
    }

    #[test]
    fn test_heatmap_shared_scale() {
        let battery = articles(&["Lithium lithium prices", "Cathode output"]);
        let pharma = articles(&["Vaccine approval", "Vaccine rollout"]);
        let table = SectorTable::default();

        let heatmap = sector_heatmap(
            &KeywordPipeline::new(),
            &[("Battery", battery.as_slice()), ("Pharmaceutical", pharma.as_slice())],
            &table,
            5,
        );

        // lithium: 2 occurrences boosted by 2
        assert_eq!(heatmap.max_count, 4);
        let battery_row = heatmap.row("battery").unwrap();
        assert_eq!(battery_row.cells[0].word, "lithium");
        assert_eq!(battery_row.cells[0].intensity, 1.0);

        let pharma_row = heatmap.row("Pharmaceutical").unwrap();
        let vaccine = pharma_row.cells.iter().find(|c| c.word == "vaccine").unwrap();
        assert_eq!(vaccine.count, 4);
        assert!(pharma_row.cells.iter().all(|c| c.intensity <= 1.0));
    }

    #[test]
    fn test_unknown_sector_is_not_boosted() {
        let text = articles(&["Lithium lithium prices"]);
        let heatmap = sector_heatmap(
            &KeywordPipeline::new(),
            &[("Fintech", text.as_slice())],
            &SectorTable::default(),
            5,
        );
        let row = heatmap.row("Fintech").unwrap();
        assert_eq!(row.cells[0].count, 2);
    }

    #[test]
    fn test_empty_heatmap() {
        let heatmap = sector_heatmap(&KeywordPipeline::new(), &[], &SectorTable::default(), 5);
        assert!(heatmap.is_empty());
        assert_eq!(heatmap.max_count, 0);
    }
}
