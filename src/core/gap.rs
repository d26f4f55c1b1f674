use std::collections::{BTreeSet, HashSet};

/// Skills in `target_skills` that the student does not list
///
/// Comparison is exact and case-sensitive. The result holds each missing
/// skill once, sorted lexicographically.
pub fn gap<S: AsRef<str>, T: AsRef<str>>(student_skills: &[S], target_skills: &[T]) -> Vec<String> {
    let have: HashSet<&str> = student_skills.iter().map(|s| s.as_ref()).collect();

    target_skills
        .iter()
        .map(|s| s.as_ref())
        .filter(|skill: &&str| !have.contains(skill))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_missing_skill() {
        assert_eq!(gap(&["python"], &["python", "sql"]), vec!["sql"]);
    }

    #[test]
    fn test_empty_student_returns_target() {
        assert_eq!(gap(&NONE, &["sql", "react"]), vec!["react", "sql"]);
    }

    #[test]
    fn test_empty_target() {
        assert!(gap(&["python"], &NONE).is_empty());
    }

    #[test]
    fn test_case_sensitive_and_deduplicated() {
        assert_eq!(gap(&["Python"], &["python", "sql", "sql"]), vec!["python", "sql"]);
    }
}
