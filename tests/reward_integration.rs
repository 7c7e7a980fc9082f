//! End-to-end scoring through the public API.

use std::sync::Arc;

use title_reward::{
    Criterion, FALLBACK_SCORE, GrammarChecker, MockEmbedder, MockGrammarChecker,
    ProductAttributes, RewardContext, RewardEngine, RewardRequest, RuleChecker, ScoringError,
    SentenceConfig, SentenceEmbedder, WeightProfile, score_group,
};

const NIKE_TITLE: &str = "Nike Men's Running Shoe, Black, Size 10";

fn nike_context() -> RewardContext {
    RewardContext::new()
        .with_reference(NIKE_TITLE)
        .with_keywords(["nike", "shoe", "running", "black"])
        .with_attributes(
            ProductAttributes::new()
                .with_brand("Nike")
                .with_product_type("Shoe")
                .with_color("Black")
                .with_material("Mesh")
                .with_size("10"),
        )
}

#[test]
fn test_nike_scenario_breakdown() {
    let engine = RewardEngine::stub().expect("stub engine");
    let breakdown = engine.score(NIKE_TITLE, &nike_context()).unwrap();

    assert!((breakdown.semantic - 1.0).abs() < 1e-9);
    assert_eq!(breakdown.seo, 1.0);
    assert_eq!(breakdown.grammar, 1.0);
    assert!((breakdown.structure - 0.8).abs() < 1e-9);
    assert!((breakdown.length - 0.405).abs() < 1e-9);
    assert!((breakdown.total - 0.86075).abs() < 1e-9);
}

#[test]
fn test_compute_total_reward_matches_breakdown() {
    let engine = RewardEngine::stub().expect("stub engine");
    let ctx = nike_context();

    let total = engine
        .compute_total_reward(
            NIKE_TITLE,
            ctx.reference.as_deref(),
            &ctx.keywords,
            &ctx.attributes,
            None,
        )
        .unwrap();
    assert_eq!(total, engine.score(NIKE_TITLE, &ctx).unwrap().total);
}

#[test]
fn test_custom_embedder_and_checker() {
    let embedder = MockEmbedder::new(2)
        .with_vector("Nike Shoe", vec![1.0, 0.0])
        .with_vector("Adidas Boot", vec![-1.0, 0.0]);
    let engine = RewardEngine::new(
        Arc::new(embedder),
        Arc::new(MockGrammarChecker::with_issues(2)),
    );

    let semantic_and_grammar = WeightProfile::new(0.5, 0.0, 0.5, 0.0, 0.0).unwrap();
    let breakdown = engine
        .evaluate::<&str>(
            "Nike Shoe",
            Some("Adidas Boot"),
            &[],
            &ProductAttributes::new(),
            Some(&semantic_and_grammar),
        )
        .unwrap();

    assert_eq!(breakdown.semantic, 0.0);
    assert!((breakdown.grammar - 0.8).abs() < 1e-9);
    assert!((breakdown.total - 0.4).abs() < 1e-9);
}

#[test]
fn test_missing_context_uses_fallbacks() {
    let engine = RewardEngine::stub().expect("stub engine");
    let breakdown = engine
        .score("Lightweight Breathable Trail Running Shoe for Men", &RewardContext::new())
        .unwrap();

    assert_eq!(breakdown.semantic, FALLBACK_SCORE);
    assert_eq!(breakdown.seo, FALLBACK_SCORE);
    assert_eq!(breakdown.structure, 0.0);
}

#[test]
fn test_stub_embedder_prefers_related_titles() {
    let embedder = SentenceEmbedder::load(SentenceConfig::stub()).unwrap();
    let engine = RewardEngine::new(Arc::new(embedder), Arc::new(RuleChecker::new()));
    let reference = "Nike Men's Running Shoe Black";

    let close = engine
        .score("Nike Running Shoe for Men", &RewardContext::new().with_reference(reference))
        .unwrap();
    let far = engine
        .score("Ceramic Coffee Mug 12oz", &RewardContext::new().with_reference(reference))
        .unwrap();

    assert!(close.semantic > far.semantic);
}

#[test]
fn test_rule_checker_lowers_fluency() {
    let engine = RewardEngine::stub().expect("stub engine");
    let ctx = nike_context();

    let clean = engine.score(NIKE_TITLE, &ctx).unwrap();
    let sloppy = engine
        .score("Nike Men's Running Shoe , Black,Size 10 10 (new", &ctx)
        .unwrap();

    assert_eq!(RuleChecker::new().check("Nike  Shoe").unwrap().len(), 1);
    assert!(sloppy.grammar < clean.grammar);
}

#[test]
fn test_grammar_failure_is_not_defaulted() {
    let engine = RewardEngine::new(
        Arc::new(MockEmbedder::new(8)),
        Arc::new(MockGrammarChecker::failing()),
    );

    let err = engine.score(NIKE_TITLE, &nike_context()).unwrap_err();
    assert!(matches!(err, ScoringError::Grammar(_)));
    assert!(err.to_string().contains("grammar"));
}

#[test]
fn test_request_roundtrip_through_json() {
    let engine = RewardEngine::stub().expect("stub engine");
    let line = r#"{"generated_title": "Nike Men's Running Shoe, Black, Size 10",
        "reference_title": "Nike Men's Running Shoe, Black, Size 10",
        "category_keywords": "nike, shoe, running, black",
        "product_info": {"brand": "Nike", "product_type": "Shoe", "color": "Black", "material": "Mesh", "size": 10}}"#;

    let request: RewardRequest = serde_json::from_str(line).unwrap();
    let breakdown = request.evaluate(&engine).unwrap();
    assert!((breakdown.total - 0.86075).abs() < 1e-9);

    let json = serde_json::to_value(breakdown).unwrap();
    for criterion in Criterion::ALL {
        assert!(json.get(criterion.as_str()).is_some(), "missing {criterion}");
    }
    assert!(json.get("total").is_some());
}

#[test]
fn test_group_scoring_across_threads() {
    let engine = Arc::new(RewardEngine::stub().expect("stub engine"));
    let ctx = Arc::new(nike_context());
    let completions = vec![
        NIKE_TITLE.to_string(),
        "Nike Shoe".to_string(),
        "Running Shoe by Nike in Black with Mesh Upper, Men's Size 10".to_string(),
    ];
    let expected = score_group(&engine, &ctx, &completions).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let ctx = Arc::clone(&ctx);
            let completions = completions.clone();
            std::thread::spawn(move || score_group(&engine, &ctx, &completions).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
