use std::sync::Arc;

use super::*;
use crate::embedding::MockEmbedder;
use crate::grammar::MockGrammarChecker;
use crate::scoring::Criterion;

fn stub_engine() -> RewardEngine {
    RewardEngine::stub().expect("stub engine should build")
}

fn shoe_context() -> RewardContext {
    RewardContext::new()
        .with_reference("Nike Men's Running Shoe, Black")
        .with_keywords(["nike", "running", "shoe"])
        .with_attributes(
            ProductAttributes::new()
                .with_brand("Nike")
                .with_product_type("Shoe")
                .with_color("Black"),
        )
}

mod keyword_list_tests {
    use super::*;

    #[test]
    fn test_parse_comma_string() {
        let list = KeywordList::parse(" nike, running ,, shoe ,");
        assert_eq!(list.as_slice(), ["nike", "running", "shoe"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_parse_blank_string() {
        assert!(KeywordList::parse(" , ,").is_empty());
    }

    #[test]
    fn test_deserialize_forms() {
        let list: KeywordList = serde_json::from_str(r#"["nike", " shoe "]"#).unwrap();
        assert_eq!(list.as_slice(), ["nike", " shoe "]);

        let list: KeywordList = serde_json::from_str(r#""nike, shoe""#).unwrap();
        assert_eq!(list.as_slice(), ["nike", "shoe"]);

        let list: KeywordList = serde_json::from_str("null").unwrap();
        assert!(list.is_empty());

        assert!(serde_json::from_str::<KeywordList>("42").is_err());
    }

    #[test]
    fn test_serializes_as_list() {
        let list = KeywordList::parse("nike,shoe");
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["nike","shoe"]"#);
    }
}

mod request_tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let request: RewardRequest =
            serde_json::from_str(r#"{"generated_title": "Nike Running Shoe"}"#).unwrap();
        assert_eq!(request, RewardRequest::new("Nike Running Shoe"));
        assert!(request.category_keywords.is_empty());
        assert!(request.weights.is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let request: RewardRequest = serde_json::from_str(
            r#"{
                "generated_title": "Nike Running Shoe",
                "reference_title": "Nike Men's Running Shoe",
                "category_keywords": "nike, running",
                "product_info": {"brand": "Nike", "product_type": "Shoe", "size": 10},
                "weights": {"semantic": 1, "seo": 0, "grammar": 0, "structure": 0, "length": 0}
            }"#,
        )
        .unwrap();

        assert_eq!(request.category_keywords.as_slice(), ["nike", "running"]);
        assert_eq!(request.product_info.get("size"), Some("10"));

        let context = request.context();
        assert_eq!(context.reference.as_deref(), Some("Nike Men's Running Shoe"));
        assert_eq!(context.keywords, vec!["nike", "running"]);
        assert_eq!(context.attributes.brand(), Some("Nike"));
    }

    #[test]
    fn test_evaluate_uses_request_weights() {
        let engine = stub_engine();
        let mut request = RewardRequest::new("Nike Running Shoe");
        request.weights = Some(
            Criterion::ALL
                .iter()
                .map(|c| (c.as_str().to_string(), 0.0))
                .chain([("seo".to_string(), 1.0)])
                .collect(),
        );
        request.category_keywords = KeywordList::parse("nike, boot");

        let breakdown = request.evaluate(&engine).unwrap();
        assert!((breakdown.seo - 0.6).abs() < 1e-9);
        assert!((breakdown.total - breakdown.seo).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_incomplete_weights_fail_before_scoring() {
        let embedder = Arc::new(MockEmbedder::new(4));
        let grammar = Arc::new(MockGrammarChecker::with_issues(0));
        let engine = RewardEngine::new(embedder.clone(), grammar.clone());

        let mut request = RewardRequest::new("Nike Running Shoe");
        request.reference_title = Some("Nike Shoe".to_string());
        request.weights = Some([("semantic".to_string(), 1.0)].into_iter().collect());

        let err = request.evaluate(&engine).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::MissingWeight { criterion: "seo" }
        ));
        assert_eq!(embedder.calls(), 0);
        assert_eq!(grammar.calls(), 0);
    }

    #[test]
    fn test_evaluate_matches_engine() {
        let engine = stub_engine();
        let context = shoe_context();
        let request = RewardRequest {
            generated_title: "Nike Running Shoe in Black".to_string(),
            reference_title: context.reference.clone(),
            category_keywords: KeywordList::from(context.keywords.clone()),
            product_info: context.attributes.clone(),
            weights: None,
        };

        assert_eq!(
            request.evaluate(&engine).unwrap(),
            engine.score("Nike Running Shoe in Black", &context).unwrap()
        );
    }
}

mod group_tests {
    use super::*;

    #[test]
    fn test_empty_group() {
        let none: [&str; 0] = [];
        let group = score_group(&stub_engine(), &shoe_context(), &none).unwrap();
        assert!(group.rewards.is_empty());
        assert_eq!(group.best_index, None);
        assert_eq!(group.best(), None);
        assert_eq!(group.mean, 0.0);
    }

    #[test]
    fn test_best_and_mean() {
        let completions = [
            "shoe",
            "Nike Men's Running Shoe in Black, Lightweight Mesh Upper, Size 10",
            "Black Running Trainers",
        ];
        let group = score_group(&stub_engine(), &shoe_context(), &completions).unwrap();

        assert_eq!(group.rewards.len(), 3);
        assert_eq!(group.best_index, Some(1));

        let totals: Vec<f64> = group.totals().collect();
        let mean = totals.iter().sum::<f64>() / 3.0;
        assert!((group.mean - mean).abs() < 1e-12);
        assert!(totals.iter().all(|t| *t <= totals[1]));
        assert_eq!(group.best().map(|b| b.total), Some(totals[1]));
    }

    #[test]
    fn test_ties_pick_first() {
        let completions = ["Nike Running Shoe", "Nike Running Shoe"];
        let group = score_group(&stub_engine(), &shoe_context(), &completions).unwrap();
        assert_eq!(group.best_index, Some(0));
    }

    #[test]
    fn test_group_stops_on_failure() {
        let engine = RewardEngine::new(
            Arc::new(MockEmbedder::new(4)),
            Arc::new(MockGrammarChecker::failing()),
        );
        let result = score_group(&engine, &shoe_context(), &["Nike Running Shoe"]);
        assert!(matches!(result, Err(ScoringError::Grammar(_))));
    }

    #[test]
    fn test_batch_keeps_going_after_failure() {
        let engine = stub_engine();
        let mut bad = RewardRequest::new("Nike Shoe");
        bad.weights = Some(HashMap::new());

        let results = score_batch(
            &engine,
            &[RewardRequest::new("Nike Shoe"), bad, RewardRequest::new("Boot")],
        );
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(ScoringError::MissingWeight {
                criterion: "semantic"
            })
        ));
        assert!(results[2].is_ok());
    }
}
