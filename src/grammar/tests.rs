use super::languagetool::CheckResponse;
use super::rules::*;
use super::*;
use serial_test::serial;

fn rule_ids(text: &str) -> Vec<String> {
    RuleChecker::new()
        .check(text)
        .expect("rule checker is infallible")
        .into_iter()
        .map(|issue| issue.rule_id)
        .collect()
}

#[test]
fn test_clean_title_has_no_issues() {
    assert!(rule_ids("Nike Men's Running Shoe, Black, Size 10").is_empty());
    assert!(rule_ids("Levi's 501 Original Fit Jeans (Dark Wash) - 32x34").is_empty());
}

#[test]
fn test_doubled_word() {
    let issues = RuleChecker::new().check("Running the the Shoe").unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule_id, RULE_DOUBLED_WORD);
    assert_eq!(issues[0].offset, 8);
    assert_eq!(issues[0].length, 7);
}

#[test]
fn test_doubled_word_is_case_insensitive() {
    assert_eq!(rule_ids("Shoe shoe Black"), vec![RULE_DOUBLED_WORD]);
}

#[test]
fn test_repeated_numbers_are_not_doubled_words() {
    assert!(rule_ids("Socks Pack of 2 2 Pairs").is_empty());
}

#[test]
fn test_words_split_by_punctuation_are_not_doubled() {
    assert!(rule_ids("Black, Black Edition").is_empty());
}

#[test]
fn test_space_before_punctuation() {
    assert_eq!(rule_ids("Running Shoe , Black"), vec![RULE_SPACE_BEFORE_PUNCT]);
}

#[test]
fn test_dash_separator_is_allowed() {
    assert!(rule_ids("Running Shoe - Black | Size 10").is_empty());
}

#[test]
fn test_missing_space_after_comma() {
    assert_eq!(rule_ids("Running Shoe,Black"), vec![RULE_MISSING_SPACE]);
}

#[test]
fn test_thousands_separator_is_allowed() {
    assert!(rule_ids("Power Bank 10,000mAh").is_empty());
}

#[test]
fn test_repeated_whitespace_counts_once_per_run() {
    let issues = RuleChecker::new().check("Running   Shoe  Black").unwrap();
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.rule_id == RULE_REPEATED_WHITESPACE));
    assert_eq!(issues[0].offset, 7);
    assert_eq!(issues[0].length, 3);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert!(rule_ids("   Running Shoe   ").is_empty());
}

#[test]
fn test_unpaired_brackets() {
    assert_eq!(rule_ids("Running Shoe (Black"), vec![RULE_UNPAIRED_BRACKET]);
    assert_eq!(rule_ids("Running Shoe Black)"), vec![RULE_UNPAIRED_BRACKET]);
    assert_eq!(
        rule_ids("Running Shoe [Black)"),
        vec![RULE_UNPAIRED_BRACKET, RULE_UNPAIRED_BRACKET]
    );
    assert!(rule_ids("Shoe (Black [Mesh])").is_empty());
}

#[test]
fn test_issues_are_sorted_by_offset() {
    let issues = RuleChecker::new().check("Shoe shoe , Black)").unwrap();
    let offsets: Vec<usize> = issues.iter().map(|i| i.offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort();
    assert_eq!(offsets, sorted);
    assert_eq!(issues.len(), 3);
}

#[test]
fn test_languagetool_response_parsing() {
    let body = r#"{
        "software": {"name": "LanguageTool"},
        "matches": [
            {
                "message": "Possible spelling mistake found.",
                "offset": 5,
                "length": 4,
                "rule": {"id": "MORFOLOGIK_RULE_EN_US", "category": {"id": "TYPOS"}}
            },
            {"message": "Missing rule", "offset": 0, "length": 1}
        ]
    }"#;

    let parsed: CheckResponse = serde_json::from_str(body).unwrap();
    let issues = parsed.into_issues();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].rule_id, "MORFOLOGIK_RULE_EN_US");
    assert_eq!(issues[0].offset, 5);
    assert_eq!(issues[0].length, 4);
    assert_eq!(issues[1].rule_id, "");
}

#[test]
fn test_languagetool_response_without_matches() {
    let parsed: CheckResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.into_issues().is_empty());
}

#[test]
fn test_languagetool_endpoint() {
    let checker = LanguageToolChecker::new("http://localhost:8081/", "en-GB").unwrap();
    assert_eq!(checker.endpoint(), "http://localhost:8081/v2/check");
    assert_eq!(checker.language(), "en-GB");
}

#[test]
fn test_languagetool_rejects_empty_config() {
    assert!(matches!(
        LanguageToolChecker::new("  ", "en-US"),
        Err(GrammarError::InvalidConfig { .. })
    ));
    assert!(matches!(
        LanguageToolChecker::new("http://localhost:8081", ""),
        Err(GrammarError::InvalidConfig { .. })
    ));
}

#[test]
fn test_languagetool_unreachable_server_propagates() {
    // Port 9 (discard) is not expected to run an HTTP server.
    let checker = LanguageToolChecker::new("http://127.0.0.1:9", "en-US").unwrap();
    let err = checker.check("Running Shoe").unwrap_err();
    assert!(matches!(err, GrammarError::RequestFailed { .. }));
}

#[test]
fn test_build_checker_defaults_to_rules() {
    let checker = build_checker(&GrammarConfig::default()).unwrap();
    assert!(checker.check("Running Shoe").unwrap().is_empty());
}

#[test]
fn test_mock_checker() {
    let mock = MockGrammarChecker::with_issues(3);
    assert_eq!(mock.check("anything").unwrap().len(), 3);
    assert_eq!(mock.calls(), 1);
    assert!(MockGrammarChecker::failing().check("anything").is_err());
}

#[test]
#[serial]
fn test_grammar_config_from_env() {
    // SAFETY: Test code only, serialized with other env tests.
    unsafe {
        std::env::set_var(GrammarConfig::ENV_LANGUAGETOOL_URL, " http://lt:8010 ");
        std::env::set_var(GrammarConfig::ENV_LANGUAGE, "de-DE");
    }
    let config = GrammarConfig::from_env();
    unsafe {
        std::env::remove_var(GrammarConfig::ENV_LANGUAGETOOL_URL);
        std::env::remove_var(GrammarConfig::ENV_LANGUAGE);
    }

    assert_eq!(config.languagetool_url.as_deref(), Some("http://lt:8010"));
    assert_eq!(config.language, "de-DE");
}

#[test]
#[serial]
fn test_grammar_config_from_env_defaults() {
    // SAFETY: Test code only, serialized with other env tests.
    unsafe {
        std::env::remove_var(GrammarConfig::ENV_LANGUAGETOOL_URL);
        std::env::remove_var(GrammarConfig::ENV_LANGUAGE);
    }
    assert_eq!(GrammarConfig::from_env(), GrammarConfig::default());
}
