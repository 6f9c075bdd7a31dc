use onpage_score::checklist::{
    CONTENT_LENGTH, FEATURED_IMAGE, FOCUS_KEYWORD, HEADING_STRUCTURE, READABILITY, TITLE_LENGTH,
};
use onpage_score::keyword::{keyword_density, placement_score};
use onpage_score::normalize::{first_paragraph, heading_texts, split_paragraphs, strip_tags};
use onpage_score::readability::count_syllables;
use onpage_score::report::request_key;
use onpage_score::{
    analyze, analyze_citability, analyze_content_structure, analyze_keyword_placement,
    compute_checklist_score, count_links, count_links_for_site, normalize, record_citability,
    score_readability, AnalysisRequest, CitabilityRecord, CitabilityStore,
    InMemoryCitabilityStore, KeywordPlacement, ReadabilityGrade, ReportCache, ScoreError, Scorer,
    ScoringWeights, Status,
};

fn filler(word: &str, n: usize) -> String {
    vec![word; n].join(" ")
}

fn full_marks_request() -> AnalysisRequest {
    let body = "The cat sat on the mat. ".repeat(100);
    AnalysisRequest {
        content: format!(
            "<p>Green tea is a drink.</p>\
             <h2>Green tea facts</h2><p>{body}</p>\
             <h2>More notes</h2>\
             <p>See <a href=\"/a\">one</a> and <a href=\"/b\">two</a> and <a href=\"https://other.org\">src</a>.</p>"
        ),
        title: "Green tea guide for curious beginners everywhere".to_string(),
        slug: "green-tea-guide".to_string(),
        meta_description: "Green tea notes. ".repeat(8),
        focus_keyword: "Green Tea".to_string(),
        image_alt: "green tea cup".to_string(),
        keywords_list: "green tea, matcha, sencha, oolong".to_string(),
        featured_image: "/img/tea.jpg".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

#[test]
fn paragraphs_split_on_blank_lines_in_order() {
    let paragraphs = split_paragraphs("First para.\n\n\n  \nSecond para.\n\nThird.");
    assert_eq!(paragraphs, vec!["First para.", "Second para.", "Third."]);
}

#[test]
fn editor_blocks_become_paragraphs() {
    let normalized = normalize("<p>One <strong>bold</strong> idea.</p><p>Two &amp; three.</p>");
    assert_eq!(normalized.paragraphs, vec!["One bold idea.", "Two & three."]);
    assert_eq!(normalized.word_count(), 6);
}

#[test]
fn malformed_markup_degrades_without_failing() {
    let text = strip_tags("<p>Unclosed <em>emphasis <div attr='x'>text");
    assert_eq!(text, "Unclosed emphasis text");
    assert_eq!(strip_tags("a < b and c"), "a < b and c");
}

#[test]
fn first_paragraph_and_headings() {
    let markup = "<h2>Intro</h2><p class=\"lead\">Lead text.</p><h3>Detail <em>one</em></h3><p>Body.</p>";
    assert_eq!(first_paragraph(markup), "Lead text.");
    assert_eq!(heading_texts(markup), vec!["Intro", "Detail one"]);
    assert_eq!(first_paragraph("Plain lead.\n\nSecond."), "Plain lead.");
    assert_eq!(first_paragraph(""), "");
}

#[test]
fn first_paragraph_skips_empty_paragraph_elements() {
    let markup = "<p></p><h2>Green tea</h2><p> <br> </p><p>Intro text.</p>";
    assert_eq!(first_paragraph(markup), "Intro text.");

    let request = AnalysisRequest {
        content: markup.to_string(),
        focus_keyword: "green tea".to_string(),
        ..Default::default()
    };
    let placements = analyze_keyword_placement(&request).placements;
    assert!(placements.headings);
    assert!(!placements.first_paragraph);
}

// ---------------------------------------------------------------------------
// Keyword placement
// ---------------------------------------------------------------------------

#[test]
fn empty_keyword_returns_zero_result() {
    let request = AnalysisRequest {
        content: "<p>Some content about tea.</p>".to_string(),
        title: "Tea".to_string(),
        focus_keyword: "   ".to_string(),
        ..Default::default()
    };
    let result = analyze_keyword_placement(&request);
    assert_eq!(result.placements, KeywordPlacement::default());
    assert_eq!(result.density, 0.0);
    assert_eq!(result.score, 0);
    assert_eq!(result.keyword_occurrences, 0);
    assert_eq!(result.status, Status::Poor);
}

#[test]
fn keyword_found_in_every_zone() {
    let request = AnalysisRequest {
        content: format!(
            "<p>Content marketing builds trust.</p><h2>Why content marketing works</h2><p>{}</p>",
            filler("lorem", 200)
        ),
        title: "The Content Marketing Guide".to_string(),
        slug: "content-marketing-guide".to_string(),
        meta_description: "Learn content marketing step by step.".to_string(),
        focus_keyword: "  Content   Marketing ".to_string(),
        image_alt: "content marketing funnel".to_string(),
        ..Default::default()
    };
    let result = analyze_keyword_placement(&request);
    let p = result.placements;
    assert!(p.title && p.slug && p.meta_description && p.first_paragraph && p.headings && p.image_alt);
    assert_eq!(result.word_count, 208);
    assert_eq!(result.keyword_occurrences, 2);
    assert!((result.density - 1.92).abs() < 1e-9, "density {}", result.density);
    assert_eq!(result.score, 100);
    assert_eq!(result.status, Status::Good);
}

#[test]
fn keyword_matching_is_case_insensitive_and_spans_line_breaks() {
    let request = AnalysisRequest {
        content: "GREEN Tea today.\ngreen\ntea tomorrow.".to_string(),
        focus_keyword: "green tea".to_string(),
        ..Default::default()
    };
    assert_eq!(analyze_keyword_placement(&request).keyword_occurrences, 2);
}

#[test]
fn slug_matches_hyphenated_keyword() {
    let request = AnalysisRequest {
        slug: "best-green-tea-2024".to_string(),
        focus_keyword: "Green Tea".to_string(),
        ..Default::default()
    };
    let result = analyze_keyword_placement(&request);
    assert!(result.placements.slug);
    assert!(!result.placements.title);
    assert_eq!(result.score, 15);
    assert_eq!(result.status, Status::Poor);
}

#[test]
fn keyword_special_characters_are_escaped() {
    let request = AnalysisRequest {
        content: "We compare c++ and c# here. c++ wins.".to_string(),
        focus_keyword: "c++".to_string(),
        ..Default::default()
    };
    assert_eq!(analyze_keyword_placement(&request).keyword_occurrences, 2);
}

#[test]
fn stuffing_is_penalized_relative_to_natural_use() {
    let stuffed_content = format!("{} {}", filler("green tea", 10), filler("word", 80));
    let natural_content = format!("green tea {}", filler("word", 98));
    let base = AnalysisRequest {
        title: "Green tea benefits".to_string(),
        focus_keyword: "green tea".to_string(),
        ..Default::default()
    };

    let stuffed = analyze_keyword_placement(&AnalysisRequest {
        content: stuffed_content,
        ..base.clone()
    });
    let natural = analyze_keyword_placement(&AnalysisRequest {
        content: natural_content,
        ..base
    });

    assert_eq!(stuffed.word_count, 100);
    assert_eq!(stuffed.keyword_occurrences, 10);
    assert!(stuffed.density > 2.5, "density {}", stuffed.density);
    assert_eq!(natural.density, 2.0);
    assert_eq!(stuffed.score, 30);
    assert_eq!(natural.score, 45);
    assert!(stuffed.score < natural.score);
}

#[test]
fn placement_score_is_clamped_both_ways() {
    let all = KeywordPlacement {
        title: true,
        slug: true,
        meta_description: true,
        first_paragraph: true,
        headings: true,
        image_alt: true,
    };
    let generous = ScoringWeights {
        keyword_title_points: 80,
        keyword_first_paragraph_points: 80,
        ..ScoringWeights::default()
    };
    assert_eq!(placement_score(&all, 1.0, &generous), 100);

    let harsh = ScoringWeights {
        density_stuffing_penalty: -50,
        ..ScoringWeights::default()
    };
    assert_eq!(placement_score(&KeywordPlacement::default(), 9.0, &harsh), 0);
}

#[test]
fn density_rounds_to_two_decimals_and_guards_zero_words() {
    assert_eq!(keyword_density(1, 1, 3), 33.33);
    assert_eq!(keyword_density(5, 2, 0), 0.0);
}

// ---------------------------------------------------------------------------
// Structure and links
// ---------------------------------------------------------------------------

#[test]
fn h3_before_h2_breaks_hierarchy() {
    let result = analyze_content_structure("<h3>Early</h3><p>x</p><h2>Late</h2>");
    assert_eq!(result.h2_count, 1);
    assert_eq!(result.h3_count, 1);
    assert!(!result.has_proper_hierarchy);
}

#[test]
fn nested_headings_keep_hierarchy() {
    let result = analyze_content_structure(
        "<H2 id=\"a\">A</H2><h3>A.1</h3><h2>B</h2><h3 class=\"x\">B.1</h3><header>not a heading</header>",
    );
    assert_eq!(result.h2_count, 2);
    assert_eq!(result.h3_count, 2);
    assert!(result.has_proper_hierarchy);
}

#[test]
fn no_headings_is_not_a_hierarchy_violation() {
    let result = analyze_content_structure("<p>Just text.</p>");
    assert_eq!(result.h2_count, 0);
    assert!(result.has_proper_hierarchy);
}

#[test]
fn links_are_classified_against_site_domain() {
    let markup = r##"
        <a href="/about">About</a>
        <a class="btn" href="https://www.Example.com/pricing">Pricing</a>
        <a href='https://other.org/paper'>Paper</a>
        <a href="//cdn.other.net/file">CDN</a>
        <a href="#top">Top</a>
        <a href="mailto:hi@example.com">Mail</a>
        <a href="/about">About again</a>
    "##;
    let with_site = count_links_for_site(markup, "example.com");
    assert_eq!(with_site.internal, 3);
    assert_eq!(with_site.external, 2);

    let without_site = count_links(markup);
    assert_eq!(without_site.internal, 2);
    assert_eq!(without_site.external, 3);

    let from_url = count_links_for_site(markup, "https://example.com/");
    assert_eq!(from_url, with_site);
}

#[test]
fn href_is_not_confused_with_prefixed_attributes() {
    let counts = count_links_for_site(
        r#"<a data-href="https://other.org" href="/about">x</a>"#,
        "example.com",
    );
    assert_eq!(counts.internal, 1);
    assert_eq!(counts.external, 0);

    let counts = count_links(r#"<a data-href="/about">x</a>"#);
    assert_eq!(counts.internal + counts.external, 0);
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

#[test]
fn empty_content_has_no_readability_score() {
    for content in ["", "   ", "<p></p>"] {
        let result = score_readability(content);
        assert_eq!(result.flesch_score, 0);
        assert_eq!(result.grade, ReadabilityGrade::NotAvailable);
        assert_eq!(result.status, Status::Poor);
    }
}

#[test]
fn simple_text_is_easy() {
    let result = score_readability("<p>The cat sat on the mat. The dog ran.</p>");
    assert_eq!(result.flesch_score, 100);
    assert_eq!(result.grade, ReadabilityGrade::Easy);
    assert_eq!(result.status, Status::Good);
}

#[test]
fn dense_polysyllabic_text_is_very_difficult() {
    let text = filler("institutionalization internationalization characterization", 10);
    let result = score_readability(&text);
    assert_eq!(result.flesch_score, 0);
    assert_eq!(result.grade, ReadabilityGrade::VeryDifficult);
    assert_eq!(result.grade.label(), "Very Difficult");
    assert_eq!(result.status, Status::Poor);
}

#[test]
fn syllable_heuristic() {
    assert_eq!(count_syllables("the"), 1);
    assert_eq!(count_syllables("readability"), 5);
    assert_eq!(count_syllables("table"), 2);
    assert_eq!(count_syllables("makes"), 1);
    assert_eq!(count_syllables("Hello,"), 2);
    assert_eq!(count_syllables("--"), 1);
}

// ---------------------------------------------------------------------------
// Citability
// ---------------------------------------------------------------------------

#[test]
fn empty_content_has_zero_citability() {
    let result = analyze_citability("", None);
    assert_eq!(result.overall_score, 0);
    assert!(result.paragraph_scores.is_empty());
    assert!(result.recommendations.is_empty());
}

#[test]
fn optimal_paragraph_is_quotable() {
    let text = format!("How fast did traffic grow? Traffic grew 42% {}", filler("lorem", 142));
    let result = analyze_citability(&text, Some("Growth"));
    assert_eq!(result.paragraph_scores.len(), 1);
    let p = &result.paragraph_scores[0];
    assert_eq!(p.word_count, 150);
    assert_eq!(p.score, 100);
    assert!(p.quotable);
    assert_eq!(result.overall_score, 100);
    assert!(
        !result.recommendations.iter().any(|r| r.contains("question")),
        "a question is present: {:?}",
        result.recommendations
    );
}

#[test]
fn short_paragraph_is_penalized() {
    let result = analyze_citability("Short text here.", None);
    let p = &result.paragraph_scores[0];
    assert_eq!(p.score, 60);
    assert!(!p.quotable);
    assert_eq!(p.issues.len(), 2, "issues: {:?}", p.issues);
    assert!(p.issues[0].to_lowercase().contains("too short"));
    assert!(p.issues[1].to_lowercase().contains("no specific numbers"));
}

#[test]
fn word_count_bands() {
    let brief = analyze_citability(&filler("alpha", 80), None);
    assert_eq!(brief.paragraph_scores[0].score, 75);
    assert!(brief.paragraph_scores[0].issues[0]
        .to_lowercase()
        .contains("could be more comprehensive"));

    let slightly_long = analyze_citability(&filler("alpha", 200), None);
    assert_eq!(slightly_long.paragraph_scores[0].score, 80);
    assert!(slightly_long.paragraph_scores[0].issues[0]
        .to_lowercase()
        .contains("slightly long"));

    let too_long = analyze_citability(&filler("alpha", 300), None);
    assert_eq!(too_long.paragraph_scores[0].score, 65);
    assert!(too_long.paragraph_scores[0].issues[0]
        .to_lowercase()
        .contains("too long for ai quoting"));
    assert!(too_long
        .recommendations
        .iter()
        .any(|r| r.starts_with("Break up")));
}

#[test]
fn vague_qualifiers_are_penalized() {
    let result = analyze_citability("This is very very really quite good.", None);
    let p = &result.paragraph_scores[0];
    assert_eq!(p.score, 45);
    assert!(p
        .issues
        .iter()
        .any(|i| i.to_lowercase().contains("vague qualifiers")));
}

#[test]
fn clarifying_phrase_earns_bonus() {
    let text = format!("For example, 3 cups. {}", filler("alpha", 147));
    let p = &analyze_citability(&text, None).paragraph_scores[0];
    assert_eq!(p.word_count, 151);
    assert_eq!(p.score, 100);
    assert!(p.issues.is_empty(), "issues: {:?}", p.issues);
}

#[test]
fn recommendations_follow_paragraph_population() {
    let result = analyze_citability("Very very very short.", None);
    assert_eq!(result.overall_score, 45);
    let recs = &result.recommendations;
    assert_eq!(recs.len(), 4, "recommendations: {recs:?}");
    assert!(recs[0].starts_with("Expand short paragraphs"));
    assert!(recs[1].contains("specific data"));
    assert!(recs[2].contains("question-and-answer"));
    assert!(recs[3].contains("definitive"));
}

#[test]
fn overall_is_rounded_mean_in_source_order() {
    let result = analyze_citability("<p>Short text here.</p><p>This is very very really quite good.</p>", None);
    let scores: Vec<i32> = result.paragraph_scores.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![60, 45]);
    assert_eq!(result.overall_score, 53);
    assert_eq!(result.paragraph_scores[0].text, "Short text here.");
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

#[test]
fn complete_page_earns_full_checklist() {
    let request = full_marks_request();
    let result = compute_checklist_score(&request, &request.keywords_list);
    assert_eq!(
        result.achieved_points, result.max_points,
        "criteria: {:?}",
        result.criteria_achieved
    );
    assert_eq!(result.max_points, 100);
    assert_eq!(result.overall_score, 100);
    assert_eq!(result.criteria_achieved[FOCUS_KEYWORD], 20);
    assert_eq!(result.criteria_achieved.len(), 11);
}

#[test]
fn empty_request_scores_zero() {
    let result = compute_checklist_score(&AnalysisRequest::default(), "");
    assert_eq!(result.overall_score, 0);
    assert!(result.criteria_achieved.values().all(|&points| points == 0));
}

#[test]
fn partial_credit_for_out_of_range_fields() {
    let mut request = full_marks_request();
    request.title = "Green tea".to_string();
    request.featured_image.clear();
    request.content = request.content.replace("<h2>More notes</h2>", "<h3>More notes</h3>");
    let result = compute_checklist_score(&request, "green tea");

    assert_eq!(result.criteria_achieved[TITLE_LENGTH], 5);
    assert_eq!(result.criteria_achieved[FEATURED_IMAGE], 0);
    assert_eq!(result.criteria_achieved[HEADING_STRUCTURE], 5);
    assert_eq!(result.criteria_achieved["keywordCount"], 5);
    assert_eq!(result.criteria_achieved[CONTENT_LENGTH], 10);
    assert_eq!(result.criteria_achieved[READABILITY], 5);
    assert!(result.overall_score < 100);
}

// ---------------------------------------------------------------------------
// Report, cache, history
// ---------------------------------------------------------------------------

#[test]
fn analysis_is_idempotent() {
    let request = full_marks_request();
    let first = analyze(&request);
    let second = analyze(&request);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn json_output_uses_camel_case() {
    let report = analyze(&full_marks_request());
    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed["keyword"]["placements"].get("metaDescription").is_some());
    assert!(parsed["keyword"].get("keywordOccurrences").is_some());
    assert!(parsed["structure"].get("hasProperHierarchy").is_some());
    assert_eq!(parsed["readability"]["status"], "good");
    assert!(parsed["citability"].get("paragraphScores").is_some());
    assert!(parsed["checklist"]["criteriaAchieved"].get("slugLength").is_some());
}

#[test]
fn request_deserializes_with_missing_fields() {
    let request: AnalysisRequest =
        serde_json::from_str(r#"{"content": "<p>Hi</p>", "focusKeyword": "hi"}"#).unwrap();
    assert_eq!(request.focus_keyword, "hi");
    assert!(request.meta_description.is_empty());
    assert!(request.featured_image.is_empty());
}

#[test]
fn cache_reuses_reports_for_identical_requests() {
    let scorer = Scorer::default();
    let mut cache = ReportCache::with_capacity(2);
    let request = full_marks_request();

    let first = cache.get_or_analyze(&scorer, &request);
    let second = cache.get_or_analyze(&scorer, &request);
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&request).is_some());

    let mut edited = request.clone();
    edited.title.push('!');
    cache.get_or_analyze(&scorer, &edited);
    assert_eq!(cache.len(), 2);

    let mut third = request.clone();
    third.slug = "other".to_string();
    cache.get_or_analyze(&scorer, &third);
    assert_eq!(cache.len(), 2);
    assert!(cache.get(&request).is_none(), "oldest entry should be evicted");

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 2);
    assert_eq!(ReportCache::with_capacity(0).capacity(), 1);
}

#[test]
fn request_key_separates_fields() {
    let a = AnalysisRequest {
        content: "ab".to_string(),
        ..Default::default()
    };
    let b = AnalysisRequest {
        content: "a".to_string(),
        title: "b".to_string(),
        ..Default::default()
    };
    assert_ne!(request_key(&a), request_key(&b));
    assert_eq!(request_key(&a), request_key(&a.clone()));
    assert_eq!(request_key(&a).len(), 64);
}

struct FailingStore;

impl CitabilityStore for FailingStore {
    fn save(&mut self, _record: CitabilityRecord) -> onpage_score::Result<()> {
        Err(ScoreError::Storage("database unavailable".to_string()))
    }
}

#[test]
fn history_records_by_site() {
    let content = "Short text here.\n\nThis is very very really quite good.";
    let result = analyze_citability(content, Some("Draft"));
    let mut store = InMemoryCitabilityStore::new();

    assert!(record_citability(&mut store, "site-a", "Draft", content, &result));
    assert!(record_citability(&mut store, "site-a", "Draft v2", content, &result));
    assert_eq!(store.records_for("site-a").len(), 2);
    assert!(store.records_for("site-b").is_empty());

    let latest = store.latest_for("site-a").unwrap();
    assert_eq!(latest.title, "Draft v2");
    assert_eq!(latest.overall_score, result.overall_score);
    assert_eq!(latest.paragraph_count, 2);
    assert_eq!(latest.quotable_count, 0);
}

#[test]
fn storage_failure_leaves_result_intact() {
    let content = "Short text here.";
    let result = analyze_citability(content, None);
    let before = result.clone();
    assert!(!record_citability(&mut FailingStore, "site-a", "", content, &result));
    assert_eq!(result, before);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn weights_override_subset_from_json() {
    let weights = ScoringWeights::from_json_str(r#"{"keyword_title_points": 40}"#).unwrap();
    assert_eq!(weights.keyword_title_points, 40);
    assert_eq!(weights.keyword_slug_points, 15);

    let scorer = Scorer::new(weights);
    assert_eq!(scorer.weights().keyword_title_points, 40);
    let request = AnalysisRequest {
        title: "green tea".to_string(),
        focus_keyword: "green tea".to_string(),
        ..Default::default()
    };
    assert_eq!(scorer.keyword_placement(&request).score, 40);
}

#[test]
fn weights_reject_unknown_and_inverted_entries() {
    assert!(matches!(
        ScoringWeights::from_json_str(r#"{"no_such_weight": 1}"#),
        Err(ScoreError::Json(_))
    ));
    assert!(matches!(
        ScoringWeights::from_json_str(r#"{"checklist_title_min_chars": 90}"#),
        Err(ScoreError::InvalidWeights(_))
    ));
    assert!(matches!(
        ScoringWeights::from_json_str(r#"{"density_natural_min": 3.0}"#),
        Err(ScoreError::InvalidWeights(_))
    ));
    assert!(ScoringWeights::default().validate().is_ok());
}

#[test]
fn weights_reject_out_of_range_points() {
    for json in [
        r#"{"checklist_title_points": 4294967295}"#,
        r#"{"checklist_readability_ok": 101}"#,
        r#"{"checklist_slug_partial": 9}"#,
        r#"{"citability_vague_penalty_each": -1000000000}"#,
        r#"{"keyword_title_points": 2147483647}"#,
    ] {
        assert!(
            matches!(
                ScoringWeights::from_json_str(json),
                Err(ScoreError::InvalidWeights(_))
            ),
            "{json} should be rejected"
        );
    }
}

#[test]
fn extreme_unvalidated_weights_stay_in_range() {
    let weights = ScoringWeights {
        keyword_title_points: i32::MAX,
        keyword_first_paragraph_points: i32::MAX,
        density_stuffing_penalty: i32::MIN,
        citability_vague_penalty_each: -1_000_000_000,
        citability_question_bonus: i32::MAX,
        checklist_title_points: u32::MAX,
        checklist_meta_points: u32::MAX,
        ..ScoringWeights::default()
    };
    assert_eq!(weights.checklist_max_points(), u32::MAX);

    let scorer = Scorer::new(weights);
    let vague = scorer.citability("very really quite good", None);
    assert_eq!(vague.paragraph_scores[0].score, 0);
    let question = scorer.citability("Is it good?", None);
    assert_eq!(question.paragraph_scores[0].score, 100);

    let report = scorer.analyze(&full_marks_request());
    assert_eq!(report.keyword.score, 100);
    assert!((0..=100).contains(&report.checklist.overall_score));
}

#[test]
fn weights_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    std::fs::write(&path, r#"{"citability_question_bonus": 20}"#).unwrap();
    let weights = ScoringWeights::from_json_file(&path).unwrap();
    assert_eq!(weights.citability_question_bonus, 20);

    let missing = ScoringWeights::from_json_file(dir.path().join("absent.json"));
    assert!(matches!(missing, Err(ScoreError::Io(_))));
}

#[test]
fn scorer_site_domain_feeds_link_counts() {
    let scorer = Scorer::default().with_site_domain("example.com");
    assert_eq!(scorer.site_domain(), Some("example.com"));
    let counts = scorer.links(r#"<a href="https://example.com/a">a</a>"#);
    assert_eq!(counts.internal, 1);
    assert_eq!(counts.external, 0);
    assert_eq!(Scorer::default().with_site_domain("  ").site_domain(), None);
}
