// Integration tests for Mentor Match

use mentor_match::core::{gap, score};
use mentor_match::models::{Candidate, Recommendations, ScoredCandidate};
use serde_json::json;

fn create_alumnus(id: &str, skills: &[&str]) -> Candidate {
    Candidate::new(skills.iter().map(|s| s.to_string()).collect())
        .with_field("_id", id)
        .with_field("firstName", format!("Alumnus {}", id))
        .with_field("currentCompany", "Acme")
}

fn ranked_ids(scored: &[ScoredCandidate]) -> Vec<&str> {
    scored
        .iter()
        .map(|s| s.candidate.field("_id").and_then(|v| v.as_str()).unwrap())
        .collect()
}

#[test]
fn test_integration_end_to_end_ranking() {
    let student = ["React", "Node", "machine learning"];
    let alumni = vec![
        create_alumnus("1", &["python", "react"]),
        create_alumnus("2", &["react", "node", "python"]),
        create_alumnus("3", &["Machine Learning", "python", "node"]),
        create_alumnus("4", &["java", "spring"]),
        create_alumnus("5", &["React", "Node", "Machine Learning"]),
    ];

    let result = score(&student, &alumni);
    let ranked = result.ranked().expect("non-degenerate input is ranked");

    assert_eq!(ranked.len(), alumni.len());

    // Identical profile (case differs) ranks first with a perfect score
    assert_eq!(ranked_ids(ranked)[0], "5");
    assert_eq!(ranked[0].match_score, 100.0);

    // No overlap ranks last with zero
    assert_eq!(ranked_ids(ranked)[4], "4");
    assert_eq!(ranked[4].match_score, 0.0);

    // Metadata passes through
    assert_eq!(ranked[0].candidate.field("currentCompany"), Some(&json!("Acme")));
}

#[test]
fn test_score_range_and_order() {
    let alumni: Vec<Candidate> = (0..40)
        .map(|i| {
            let skills: Vec<String> = (0..(i % 7 + 1))
                .map(|j| format!("skill{}", (i + j) % 11))
                .collect();
            Candidate::new(skills).with_field("_id", i)
        })
        .collect();

    let result = score(&["skill1", "skill2", "skill3"], &alumni);
    let ranked = result.ranked().unwrap();

    assert_eq!(ranked.len(), 40);
    for s in ranked {
        assert!(s.match_score >= 0.0 && s.match_score <= 100.0);
        // Two-decimal precision
        assert!(((s.match_score * 100.0).round() - s.match_score * 100.0).abs() < 1e-6);
    }
    assert!(ranked.windows(2).all(|w| w[0].match_score >= w[1].match_score));
}

#[test]
fn test_equal_scores_keep_input_order() {
    let alumni = vec![
        create_alumnus("a", &["sql"]),
        create_alumnus("b", &["rust"]),
        create_alumnus("c", &["sql"]),
        create_alumnus("d", &["rust"]),
        create_alumnus("e", &["sql"]),
    ];

    let result = score(&["sql"], &alumni);
    assert_eq!(ranked_ids(result.ranked().unwrap()), vec!["a", "c", "e", "b", "d"]);
}

#[test]
fn test_scoring_is_deterministic() {
    let alumni = vec![
        create_alumnus("1", &["go", "kubernetes", "docker"]),
        create_alumnus("2", &["docker", "aws"]),
        create_alumnus("3", &["go"]),
    ];
    let student = ["go", "docker"];

    assert_eq!(score(&student, &alumni), score(&student, &alumni));
}

#[test]
fn test_stop_word_only_candidate_scores_zero() {
    let alumni = vec![create_alumnus("1", &["the", "a"])];

    let result = score(&["react"], &alumni);
    let ranked = result.ranked().unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].match_score, 0.0);
}

#[test]
fn test_all_stop_words_passes_through_unscored() {
    let alumni = vec![create_alumnus("1", &["the"]), create_alumnus("2", &["and", "of"])];

    let result = score(&["a"], &alumni);

    assert_eq!(result, Recommendations::Unranked(alumni.clone()));
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert!(value[0].get("match_score").is_none());
}

#[test]
fn test_no_candidates() {
    let result = score(&["react"], &[]);
    assert!(result.is_ranked());
    assert!(result.is_empty());
}

#[test]
fn test_gap_examples() {
    let none: [&str; 0] = [];

    assert_eq!(gap(&["python"], &["python", "sql"]), vec!["sql"]);
    assert_eq!(gap(&none, &["sql", "react"]), vec!["react", "sql"]);
    assert!(gap(&["python"], &none).is_empty());
}

#[test]
fn test_gap_ignores_input_order() {
    let a = gap(&["sql", "python"], &["docker", "python", "aws", "sql"]);
    let b = gap(&["python", "sql"], &["sql", "aws", "python", "docker"]);

    assert_eq!(a, b);
    assert_eq!(a, vec!["aws", "docker"]);
}
