use serde::Serialize;

use crate::segment::{SectionName, SegmentStats};

#[derive(Debug, Clone, Serialize)]
pub struct ReportCounts {
    pub page_count: usize,
    pub raw_line_count: usize,
    pub line_count: usize,
    pub blank_line_count: usize,
    pub artifact_lines_dropped: usize,
    pub dehyphenation_merges: usize,
    pub heading_candidate_count: usize,
    pub duplicate_heading_groups: usize,
    pub rejected_candidate_count: usize,
    pub empty_spans_dropped: usize,
    pub resolved_section_count: usize,
    pub rendered_section_count: usize,
}

impl ReportCounts {
    pub fn from_stats(stats: &SegmentStats, page_count: usize, rendered: usize) -> Self {
        Self {
            page_count,
            raw_line_count: stats.raw_line_count,
            line_count: stats.line_count,
            blank_line_count: stats.blank_line_count,
            artifact_lines_dropped: stats.artifact_lines_dropped,
            dehyphenation_merges: stats.dehyphenation_merges,
            heading_candidate_count: stats.candidate_count,
            duplicate_heading_groups: stats.duplicate_heading_groups,
            rejected_candidate_count: stats.rejected_candidate_count,
            empty_spans_dropped: stats.empty_spans_dropped,
            resolved_section_count: stats.resolved_section_count,
            rendered_section_count: rendered,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRunManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub tool_version: String,
    pub pdftotext_version: Option<String>,
    pub input_path: String,
    pub input_sha256: String,
    pub output_path: String,
    pub requested_sections: Vec<String>,
    pub rendered_sections: Vec<String>,
    pub missing_sections: Vec<SectionName>,
    pub low_confidence_sections: Vec<SectionName>,
    pub counts: ReportCounts,
    pub warnings: Vec<String>,
}
