use super::*;

fn raw(lines: &[&str]) -> Vec<RawLine> {
    lines
        .iter()
        .map(|text| RawLine {
            text: text.to_string(),
            page_index: 0,
        })
        .collect()
}

fn raw_pages(pages: &[&[&str]]) -> Vec<RawLine> {
    let mut records = Vec::new();
    for (page_index, page) in pages.iter().enumerate() {
        for text in *page {
            records.push(RawLine {
                text: text.to_string(),
                page_index,
            });
        }
    }
    records
}

fn config() -> SegmentConfig {
    SegmentConfig::new().expect("default config")
}

fn run(lines: &[&str]) -> Segmentation {
    segment_document(&raw(lines), &config()).expect("segmentation should succeed")
}

fn paper() -> Vec<&'static str> {
    vec![
        "Deep Learning for X",
        "Jane Doe, John Smith",
        "jane@example.com",
        "",
        "Abstract",
        "This paper studies X. In this work, we propose a novel method for Y.",
        "Results look promising overall.",
        "",
        "1. Introduction",
        "Segmenting papers is useful for downstream tooling.",
        "It remains difficult in practice.",
        "",
        "2. Method",
        "We describe the heading detector and the boundary resolver in detail.",
        "Both operate over normalized lines.",
        "",
        "3. Results",
        "The detector finds headings reliably on the benchmark set.",
        "Precision stays high across documents.",
        "",
        "4. Conclusion",
        "Heuristic segmentation is fast and predictable.",
        "",
        "References",
        "[1] A. Author. A prior paper. 2019.",
    ]
}

#[test]
fn normalize_trims_and_marks_blank_before() {
    let (lines, stats) = normalize_lines(&raw(&["  Hello  ", "", "World"]));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "Hello");
    assert!(!lines[0].blank_before);
    assert_eq!(lines[1].text, "World");
    assert!(lines[1].blank_before);
    assert_eq!(stats.blank_line_count, 1);
}

#[test]
fn normalize_drops_isolated_page_numbers() {
    let (lines, stats) = normalize_lines(&raw(&["Intro text", "", "3", "", "More text"]));
    assert_eq!(stats.artifact_lines_dropped, 1);
    assert!(lines.iter().all(|line| line.text != "3"));
}

#[test]
fn normalize_keeps_digits_that_are_not_isolated() {
    let (lines, stats) = normalize_lines(&raw(&["Table", "3", "shows the outcome"]));
    assert_eq!(stats.artifact_lines_dropped, 0);
    assert_eq!(lines[1].text, "3");
}

#[test]
fn normalize_joins_hyphenated_lines() {
    let (lines, stats) = normalize_lines(&raw(&[
        "The seg-",
        "mentation engine",
        "",
        "Another paragraph",
    ]));
    assert_eq!(stats.dehyphenation_merges, 1);
    assert_eq!(lines[0].text, "The segmentation engine");
    assert_eq!(lines.len(), 2);
}

#[test]
fn normalize_keeps_hyphen_before_uppercase_continuation() {
    let (lines, stats) = normalize_lines(&raw(&["Multi-", "Agent systems"]));
    assert_eq!(stats.dehyphenation_merges, 0);
    assert_eq!(lines.len(), 2);
}

#[test]
fn normalize_of_blank_document_yields_empty_input() {
    let error = segment_document(&raw(&["", "   ", "\t"]), &config()).unwrap_err();
    assert_eq!(error, SegmentError::EmptyInput);
}

#[test]
fn detector_strips_enumerators() {
    let (lines, _) = normalize_lines(&raw(&[
        "Opening line",
        "",
        "1. Introduction",
        "",
        "IV. Method",
        "",
        "1.2 Results",
    ]));
    let candidates = detect_candidates(&lines, &config());
    let names: Vec<SectionName> = candidates.iter().map(|candidate| candidate.name).collect();
    assert_eq!(
        names,
        vec![
            SectionName::Introduction,
            SectionName::Method,
            SectionName::Results
        ]
    );
}

#[test]
fn detector_requires_blank_before_or_page_start() {
    let (lines, _) = normalize_lines(&raw(&["Some sentence here", "Introduction"]));
    let candidates = detect_candidates(&lines, &config());
    assert!(candidates.is_empty());

    let (lines, _) = normalize_lines(&raw_pages(&[&["body of page one"], &["Introduction"]]));
    let candidates = detect_candidates(&lines, &config());
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, SectionName::Introduction);
}

#[test]
fn detector_rejects_terminal_punctuation() {
    let (lines, _) = normalize_lines(&raw(&["Before", "", "Introduction."]));
    let candidates = detect_candidates(&lines, &config());
    assert!(candidates.is_empty());
}

#[test]
fn detector_prefix_match_requires_word_boundary() {
    let (lines, _) = normalize_lines(&raw(&["Before", "", "Resultant Forces"]));
    let candidates = detect_candidates(&lines, &config());
    assert!(candidates.is_empty());

    let (lines, _) = normalize_lines(&raw(&["Before", "", "Results and Analysis"]));
    let candidates = detect_candidates(&lines, &config());
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, SectionName::Results);
}

#[test]
fn detector_scores_exact_above_prefix() {
    let (lines, _) = normalize_lines(&raw(&["Before", "", "Results", "", "Results and Analysis"]));
    let candidates = detect_candidates(&lines, &config());
    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].confidence > candidates[1].confidence);
}

#[test]
fn detector_boosts_formatted_headings() {
    let (lines, _) = normalize_lines(&raw(&["Before", "", "INTRODUCTION", "", "introduction"]));
    let candidates = detect_candidates(&lines, &config());
    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].confidence > candidates[1].confidence);
}

#[test]
fn detector_skips_long_lines() {
    let long = "Introduction to a very long and winding discussion of everything we ever did";
    let (lines, _) = normalize_lines(&raw(&["Before", "", long]));
    let candidates = detect_candidates(&lines, &config());
    assert!(candidates.is_empty());
}

#[test]
fn resolver_selects_real_heading_over_toc_block() {
    let mut doc = vec![
        "A Survey of Things",
        "",
        "Contents",
        "",
        "Introduction",
        "",
        "Method",
        "",
        "Results",
        "",
        "Introduction",
    ];
    let body = "The introduction body keeps going with plenty of real sentences and words.";
    for _ in 0..20 {
        doc.push(body);
    }

    let outcome = run(&doc);
    let introduction = outcome
        .map
        .get(SectionName::Introduction)
        .expect("introduction resolved");
    assert_eq!(introduction.lines, Some((6, 26)));
    assert!(introduction.text.contains("introduction body"));

    // the table-of-contents entries never become sections of their own
    assert!(!outcome.map.contains(SectionName::Method));
    assert!(!outcome.map.contains(SectionName::Results));
    assert_eq!(outcome.stats.rejected_candidate_count, 3);
}

#[test]
fn resolver_drops_trailing_empty_span() {
    let outcome = run(&[
        "Some Title",
        "",
        "Abstract",
        "The abstract body sentence.",
        "",
        "References",
    ]);
    assert!(outcome.map.contains(SectionName::Abstract));
    assert!(!outcome.map.contains(SectionName::References));
    assert_eq!(outcome.stats.empty_spans_dropped, 1);
}

#[test]
fn resolved_spans_are_ordered_and_disjoint() {
    let outcome = run(&paper());
    let spans = outcome.map.spans();
    assert!(!spans.is_empty());

    for span in spans {
        assert!(span.start_line <= span.end_line);
    }
    for pair in spans.windows(2) {
        assert!(pair[0].end_line <= pair[1].start_line);
    }
}

#[test]
fn section_map_follows_report_order() {
    let outcome = run(&paper());
    let names = outcome.map.names();
    let order: Vec<usize> = names
        .iter()
        .map(|name| {
            SectionName::REPORT_ORDER
                .iter()
                .position(|candidate| candidate == name)
                .expect("canonical name")
        })
        .collect();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted);
}

#[test]
fn segmentation_is_idempotent() {
    let records = raw(&paper());
    let config = config();
    let first = segment_document(&records, &config).unwrap();
    let second = segment_document(&records, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_section_reports_not_found() {
    let outcome = run(&paper());
    assert_eq!(
        outcome.map.section(SectionName::LiteratureReview),
        Err(SegmentError::SectionNotFound(SectionName::LiteratureReview))
    );
    assert!(outcome.map.get(SectionName::Abstract).is_some());
}

#[test]
fn title_skips_author_and_email_lines() {
    let outcome = run(&paper());
    let title = outcome.map.get(SectionName::Title).expect("title resolved");
    assert_eq!(title.text, "Deep Learning for X");
}

#[test]
fn title_ignores_recurring_running_headers() {
    let outcome = segment_document(
        &raw_pages(&[
            &[
                "JOURNAL OF TESTING",
                "A Paper About Segmentation",
                "Author One, Author Two",
                "",
                "Abstract",
                "The abstract body talks about the approach in a few words.",
            ],
            &[
                "JOURNAL OF TESTING",
                "The text continues with more discussion of the approach.",
            ],
        ]),
        &config(),
    )
    .unwrap();

    let title = outcome.map.get(SectionName::Title).expect("title resolved");
    assert_eq!(title.text, "A Paper About Segmentation");
}

#[test]
fn title_joins_wrapped_title_lines() {
    let outcome = run(&[
        "A Very Long Title That",
        "Wraps Onto a Second Line",
        "",
        "Abstract",
        "Abstract body sentence.",
        "More abstract body.",
    ]);
    let title = outcome.map.get(SectionName::Title).expect("title resolved");
    assert_eq!(title.text, "A Very Long Title That Wraps Onto a Second Line");
}

#[test]
fn contribution_collects_cue_sentences_verbatim() {
    let outcome = run(&paper());
    let contribution = outcome
        .map
        .get(SectionName::Contribution)
        .expect("contribution resolved");
    assert_eq!(
        contribution.text,
        "In this work, we propose a novel method for Y."
    );
    assert!(!contribution.low_confidence);
}

#[test]
fn contribution_falls_back_to_abstract_lead() {
    let outcome = run(&[
        "Paper Title",
        "",
        "Abstract",
        "First abstract sentence here. Second abstract sentence follows. Third one.",
        "",
        "Introduction",
        "The introduction says ordinary things without cues.",
        "Another ordinary line.",
    ]);
    let contribution = outcome
        .map
        .get(SectionName::Contribution)
        .expect("fallback contribution");
    assert_eq!(
        contribution.text,
        "First abstract sentence here. Second abstract sentence follows."
    );
    assert!(contribution.low_confidence);
}

#[test]
fn contribution_absent_without_cues_or_abstract() {
    let outcome = run(&[
        "Paper Title",
        "",
        "Introduction",
        "The introduction says ordinary things.",
        "Nothing resembles a cue phrase.",
    ]);
    assert!(!outcome.map.contains(SectionName::Contribution));
}

#[test]
fn no_heading_document_keeps_title_and_whole_text() {
    let outcome = run(&["Just some notes", "with no headings at all", "", "more text"]);

    let title = outcome.map.get(SectionName::Title).expect("fallback title");
    assert_eq!(title.text, "Just some notes");

    assert_eq!(outcome.map.names(), vec![SectionName::Title]);
    assert!(!outcome.map.document_text().is_empty());
    assert!(outcome.map.document_text().contains("more text"));
    assert!(outcome.map.spans().is_empty());
}

#[test]
fn author_line_heuristics() {
    let config = config();
    assert!(super::virtual_sections::looks_like_author_list(
        "Jane Doe, John Smith",
        &config
    ));
    assert!(super::virtual_sections::looks_like_author_list(
        "Jane Doe and John Smith",
        &config
    ));
    assert!(!super::virtual_sections::looks_like_author_list(
        "Deep Learning for Robots",
        &config
    ));
    assert!(super::virtual_sections::is_metadata_line(
        "jane@example.com",
        &config
    ));
}

#[test]
fn span_text_excludes_heading_line() {
    let outcome = run(&paper());
    let abstract_section = outcome.map.get(SectionName::Abstract).expect("abstract");
    assert!(!abstract_section.text.contains("Abstract"));
    assert!(abstract_section.text.contains("This paper studies X."));
}

#[test]
fn custom_alias_table_drives_detection() {
    let mut config = config();
    config.aliases = vec![HeadingAlias {
        name: SectionName::Abstract,
        patterns: vec!["zusammenfassung".to_string()],
    }];

    let outcome = segment_document(
        &raw(&[
            "Ein Titel",
            "",
            "Zusammenfassung",
            "Der Text der Zusammenfassung steht hier.",
        ]),
        &config,
    )
    .unwrap();
    assert!(outcome.map.contains(SectionName::Abstract));
}
