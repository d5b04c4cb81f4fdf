use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Title,
    Abstract,
    Introduction,
    Method,
    Results,
    Conclusion,
    Contribution,
    LiteratureReview,
    References,
}

impl SectionName {
    pub const REPORT_ORDER: [SectionName; 9] = [
        SectionName::Title,
        SectionName::Abstract,
        SectionName::Introduction,
        SectionName::Method,
        SectionName::Results,
        SectionName::Conclusion,
        SectionName::Contribution,
        SectionName::LiteratureReview,
        SectionName::References,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Abstract => "abstract",
            Self::Introduction => "introduction",
            Self::Method => "method",
            Self::Results => "results",
            Self::Conclusion => "conclusion",
            Self::Contribution => "contribution",
            Self::LiteratureReview => "literature_review",
            Self::References => "references",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Abstract => "Abstract",
            Self::Introduction => "Introduction",
            Self::Method => "Method",
            Self::Results => "Results",
            Self::Conclusion => "Conclusion",
            Self::Contribution => "Contribution",
            Self::LiteratureReview => "Literature review",
            Self::References => "References",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("no text lines remained after normalization")]
    EmptyInput,
    #[error("section '{0}' was not found in the document")]
    SectionNotFound(SectionName),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawLine {
    pub text: String,
    pub page_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub text: String,
    pub page_index: usize,
    pub blank_before: bool,
}

#[derive(Clone, Debug)]
pub struct Candidate {
    pub line_index: usize,
    pub name: SectionName,
    pub confidence: f32,
    pub matched_alias: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionSpan {
    pub name: SectionName,
    pub start_line: usize,
    pub end_line: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section {
    pub name: SectionName,
    pub lines: Option<(usize, usize)>,
    pub low_confidence: bool,
    pub text: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SegmentStats {
    pub raw_line_count: usize,
    pub line_count: usize,
    pub blank_line_count: usize,
    pub artifact_lines_dropped: usize,
    pub dehyphenation_merges: usize,
    pub candidate_count: usize,
    pub duplicate_heading_groups: usize,
    pub rejected_candidate_count: usize,
    pub empty_spans_dropped: usize,
    pub resolved_section_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionMap {
    sections: Vec<Section>,
    spans: Vec<SectionSpan>,
    document_text: String,
}

impl SectionMap {
    pub fn new(sections: Vec<Section>, spans: Vec<SectionSpan>, document_text: String) -> Self {
        Self {
            sections,
            spans,
            document_text,
        }
    }

    pub fn get(&self, name: SectionName) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn section(&self, name: SectionName) -> Result<&Section, SegmentError> {
        self.get(name).ok_or(SegmentError::SectionNotFound(name))
    }

    pub fn contains(&self, name: SectionName) -> bool {
        self.get(name).is_some()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn names(&self) -> Vec<SectionName> {
        self.sections.iter().map(|section| section.name).collect()
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn document_text(&self) -> &str {
        &self.document_text
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segmentation {
    pub map: SectionMap,
    pub stats: SegmentStats,
}
