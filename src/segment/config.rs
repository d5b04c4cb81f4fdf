use anyhow::{Context, Result};
use regex::Regex;

use super::types::SectionName;

#[derive(Clone, Debug)]
pub struct HeadingAlias {
    pub name: SectionName,
    pub patterns: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct SegmentConfig {
    pub max_heading_chars: usize,
    pub min_content_gap: usize,
    pub exact_match_confidence: f32,
    pub prefix_match_confidence: f32,
    pub formatting_bonus: f32,
    pub contribution_scan_fraction: f64,
    pub repeated_line_min_pages: usize,
    pub aliases: Vec<HeadingAlias>,
    pub cue_phrases: Vec<String>,
    pub enumerator: Regex,
    pub author_name: Regex,
}

impl SegmentConfig {
    pub fn new() -> Result<Self> {
        let enumerator = Regex::new(r"(?i)^(?:\d{1,2}(?:\.\d{1,2})*|[ivxlcdm]{1,6})[.):]?\s+")
            .context("failed to compile heading enumerator regex")?;
        let author_name = Regex::new(r"^[A-Z][A-Za-z0-9'.\-]*(?: [A-Z][A-Za-z0-9'.\-]*){0,3}$")
            .context("failed to compile author name regex")?;

        Ok(Self {
            max_heading_chars: 60,
            min_content_gap: 1,
            exact_match_confidence: 0.8,
            prefix_match_confidence: 0.55,
            formatting_bonus: 0.2,
            contribution_scan_fraction: 0.4,
            repeated_line_min_pages: 2,
            aliases: default_aliases(),
            cue_phrases: default_cue_phrases(),
            enumerator,
            author_name,
        })
    }
}

fn default_aliases() -> Vec<HeadingAlias> {
    fn alias(name: SectionName, patterns: &[&str]) -> HeadingAlias {
        HeadingAlias {
            name,
            patterns: patterns.iter().map(|pattern| pattern.to_string()).collect(),
        }
    }

    vec![
        alias(SectionName::Abstract, &["abstract"]),
        alias(SectionName::Introduction, &["introduction"]),
        alias(
            SectionName::Method,
            &[
                "method",
                "methods",
                "methodology",
                "materials and methods",
                "proposed method",
                "approach",
            ],
        ),
        alias(
            SectionName::Results,
            &[
                "results",
                "result",
                "experiments",
                "experimental results",
                "experiments and results",
                "evaluation",
                "findings",
            ],
        ),
        alias(
            SectionName::Conclusion,
            &[
                "conclusion",
                "conclusions",
                "discussion",
                "concluding remarks",
                "conclusion and future work",
                "discussion and conclusion",
            ],
        ),
        alias(
            SectionName::LiteratureReview,
            &[
                "related work",
                "related works",
                "literature review",
                "prior work",
                "background",
            ],
        ),
        alias(
            SectionName::References,
            &["references", "reference", "bibliography", "works cited"],
        ),
    ]
}

fn default_cue_phrases() -> Vec<String> {
    [
        "we propose",
        "we present",
        "we introduce",
        "we develop",
        "we show that",
        "our contribution",
        "our contributions",
        "our main contribution",
        "this paper presents",
        "this paper proposes",
        "this paper introduces",
        "in this work",
        "in this paper",
    ]
    .iter()
    .map(|phrase| phrase.to_string())
    .collect()
}
