use cantina_analyzer::analyzers::analyzer::{analyze, build_report, summarize};
use cantina_analyzer::filter::commented;
use cantina_analyzer::loader::load_reviews;
use cantina_analyzer::output::{
    AVERAGES_FILE, COMMENT_DETAILS_FILE, REVIEW_COUNTS_FILE, SENTIMENT_BY_CANTEEN_FILE,
    SENTIMENT_TOTALS_FILE,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/avaliacoes.csv")
}

fn read_json(dir: &Path, name: &str) -> Value {
    let content = fs::read_to_string(dir.join(name)).expect("output file missing");
    serde_json::from_str(&content).expect("output is not valid JSON")
}

#[test]
fn test_full_pipeline() {
    let out = std::env::temp_dir().join("cantina_analyzer_it_full_pipeline");
    let _ = fs::remove_dir_all(&out);

    let report = analyze(&fixture(), &out).expect("pipeline failed");
    assert_eq!(report.averages.len(), 3);

    let counts = read_json(&out, REVIEW_COUNTS_FILE);
    let counts = counts.as_array().unwrap();
    let names: Vec<_> = counts.iter().map(|c| c["cantina"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Cantina Central", "Cantina do Bloco B", "Lanchonete Norte"]
    );
    let total: u64 = counts.iter().map(|c| c["num_avaliacoes"].as_u64().unwrap()).sum();
    assert_eq!(total, 8);

    let averages = read_json(&out, AVERAGES_FILE);
    let norte = &averages[2];
    assert_eq!(norte["higiene"], 3.0);
    assert_eq!(norte["precos"], 3.5);
    assert_eq!(norte["atendimento"], 4.0);
    assert_eq!(norte["nota_geral"], 3.5);
    // Service has one missing rating in Bloco B
    assert_eq!(averages[1]["atendimento"], 3.5);

    let totals = read_json(&out, SENTIMENT_TOTALS_FILE);
    let totals = totals.as_array().unwrap();
    let sum: u64 = totals.iter().map(|t| t["count"].as_u64().unwrap()).sum();
    assert_eq!(sum, 6);
    assert!(totals.iter().all(|t| t["sentimento_label"] != "Sem comentário"));
    assert!(totals.iter().any(|t| t["sentimento_label"].is_null() && t["count"] == 1));

    let by_canteen = read_json(&out, SENTIMENT_BY_CANTEEN_FILE);
    assert_eq!(by_canteen["Cantina Central"]["Positivo"], 1);
    assert_eq!(by_canteen["Cantina Central"]["Neutro"], 0);
    assert_eq!(by_canteen["Lanchonete Norte"]["Neutro"], 1);
    assert_eq!(by_canteen["Lanchonete Norte"][""], 1);

    let details = read_json(&out, COMMENT_DETAILS_FILE);
    let details = details.as_array().unwrap();
    assert_eq!(details.len(), 2);
    let central = details[0]["detalhes_comentarios"].as_array().unwrap();
    assert_eq!(central.len(), 2);
    assert_eq!(central[0]["comentarios"], "Comida ótima e ambiente limpo");
    assert_eq!(central[1]["sentimento_label"], "Negativo");

    let raw = fs::read_to_string(out.join(AVERAGES_FILE)).unwrap();
    assert!(raw.starts_with("[\n    {\n        \"cantina\""));

    fs::remove_dir_all(&out).unwrap();
}

#[test]
fn test_matrix_rows_match_commented_subset() {
    let reviews = load_reviews(fixture()).unwrap();
    let subset = commented(&reviews);
    let report = build_report(&reviews);

    for (canteen, row) in &report.sentiment_by_canteen {
        let expected = subset.iter().filter(|r| &r.canteen == canteen).count();
        assert_eq!(row.values().sum::<usize>(), expected, "{}", canteen);
    }
}

#[test]
fn test_summary() {
    let summary = summarize(&fixture()).unwrap();

    assert_eq!(summary.total_reviews, 8);
    assert_eq!(summary.commented_reviews, 6);
    assert_eq!(summary.canteens, 3);
    assert!(summary.global_mean.is_some());
}

#[test]
fn test_missing_input_fails() {
    let out = std::env::temp_dir().join("cantina_analyzer_it_missing_input");
    let result = analyze(Path::new("does/not/exist.csv"), &out);
    assert!(result.is_err());
}
