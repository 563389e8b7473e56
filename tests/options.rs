use keyword_trends::pipeline::error_code::ErrorCode;
use keyword_trends::{
    bucket_treemap, extract_keywords_from_articles, load_options, sector_heatmap, ArticleRecord,
    KeywordEntry, KeywordPipeline, Lexicon, LexiconOverrides, RankerConfig, SectorTable, SpecError,
    TreemapTier,
};

#[test]
fn test_json_options_drive_extraction() {
    let table = SectorTable::default();
    let loaded = load_options(
        r#"{
            "topN": 3,
            "sectorName": "Battery",
            "includeWords": [{ "word": "Lithium", "weight": 3 }],
            "excludeWords": ["tesla"]
        }"#,
        &table,
    )
    .unwrap();
    assert!(loaded.report.is_empty());

    let articles = vec![
        ArticleRecord::new("Lithium prices rise", "Lithium supply tight"),
        ArticleRecord::new("Tesla tariffs", "Tesla tariffs expand"),
    ];
    let out = KeywordPipeline::new()
        .with_ranker_config(loaded.ranker)
        .extract(&articles, &loaded.options);

    // 2 occurrences, boosted x2 by the sector, then weighted x3
    assert_eq!(out[0], KeywordEntry::new("lithium", 12));
    assert!(out.len() <= 3);
    assert!(out.iter().all(|e| !e.word.contains("tesla")));
}

#[test]
fn test_malformed_options_degrade_to_warnings() {
    let loaded = load_options(
        r#"{ "includeWords": ["cobalt", 7, { "word": "nickel", "weight": "heavy" }], "colour": 1 }"#,
        &SectorTable::default(),
    )
    .unwrap();

    let codes: Vec<ErrorCode> = loaded.report.warnings().map(|w| w.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::MalformedEntry, ErrorCode::MalformedEntry, ErrorCode::UnknownField]
    );
    let words: Vec<&str> = loaded
        .options
        .include_words
        .iter()
        .map(|w| w.word.as_str())
        .collect();
    assert_eq!(words, vec!["cobalt", "nickel"]);
}

#[test]
fn test_strict_options_reject_unknown_fields() {
    let err = load_options(r#"{ "strict": true, "topm": 4 }"#, &SectorTable::default()).unwrap_err();
    match err {
        SpecError::Invalid(report) => {
            assert_eq!(report.errors().count(), 1);
            assert_eq!(report.errors().next().unwrap().path, "/topm");
        }
        other => panic!("expected validation failure, got {other}"),
    }
}

#[test]
fn test_ranker_config_from_json() {
    let loaded = load_options(
        r#"{ "ranker": { "minBigramCount": 1, "requireDomainTerm": false } }"#,
        &SectorTable::default(),
    )
    .unwrap();
    assert_eq!(
        loaded.ranker,
        RankerConfig::default()
            .with_min_bigram_count(1)
            .with_require_domain_term(false)
    );

    let articles = vec![ArticleRecord::titled("Central bankers meet")];
    let out = KeywordPipeline::new()
        .with_ranker_config(loaded.ranker)
        .extract(&articles, &loaded.options);
    assert!(out.iter().any(|e| e.word == "central banker"));
}

#[test]
fn test_lexicon_overrides() {
    let overrides: LexiconOverrides =
        serde_json::from_str(r#"{ "extraStopwords": ["tariff"], "extraDomainTerms": ["tariff"] }"#)
            .unwrap();
    let lexicon = Lexicon::news().with_overrides(&overrides).unwrap();
    let articles = vec![ArticleRecord::titled("Tariff tariff copper")];

    let default_out = extract_keywords_from_articles(&articles, &Default::default());
    let custom_out = KeywordPipeline::new()
        .with_lexicon(lexicon)
        .extract(&articles, &Default::default());

    assert!(default_out.iter().any(|e| e.word == "tariff"));
    assert!(custom_out.iter().all(|e| e.word != "tariff"));
}

#[test]
fn test_bad_firewall_override_is_an_error() {
    let overrides = LexiconOverrides {
        extra_firewall_patterns: vec!["(unclosed".into()],
        ..Default::default()
    };
    let err = Lexicon::news().with_overrides(&overrides).unwrap_err();
    assert!(err.to_string().contains("(unclosed"));
}

#[test]
fn test_dashboard_consumers() {
    let articles = vec![
        ArticleRecord::new("Cathode plant expansion", "Cathode output doubles"),
        ArticleRecord::new("Solar tariffs", "Solar panel imports fall"),
    ];
    let keywords = extract_keywords_from_articles(&articles, &Default::default());
    let tiles = bucket_treemap(&keywords);
    assert_eq!(tiles.len(), keywords.len());
    assert_eq!(tiles[0].tier, TreemapTier::Large);

    let table = SectorTable::default();
    let heatmap = sector_heatmap(
        &KeywordPipeline::new(),
        &[("Battery", &articles[..1]), ("Energy", &articles[1..])],
        &table,
        5,
    );
    assert_eq!(heatmap.rows.len(), 2);
    assert!(heatmap
        .rows
        .iter()
        .flat_map(|r| r.cells.iter())
        .any(|c| c.intensity == 1.0));
}
