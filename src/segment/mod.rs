mod config;
mod detect;
mod map;
mod normalize;
mod resolve;
#[cfg(test)]
mod tests;
mod types;
mod virtual_sections;

pub use config::{HeadingAlias, SegmentConfig};
pub use detect::detect_candidates;
pub use map::build_section_map;
pub use normalize::{join_lines, normalize_lines};
pub use resolve::{Resolution, resolve_boundaries};
pub use types::{
    Candidate, Line, RawLine, Section, SectionMap, SectionName, SectionSpan, SegmentError,
    SegmentStats, Segmentation,
};
pub use virtual_sections::{extract_contribution, extract_title};

pub fn segment_document(
    raw: &[RawLine],
    config: &SegmentConfig,
) -> Result<Segmentation, SegmentError> {
    let (lines, mut stats) = normalize_lines(raw);
    if lines.is_empty() {
        return Err(SegmentError::EmptyInput);
    }

    let candidates = detect_candidates(&lines, config);
    stats.candidate_count = candidates.len();

    let resolution = resolve_boundaries(&candidates, &lines, config);
    stats.duplicate_heading_groups = resolution.duplicate_heading_groups;
    stats.rejected_candidate_count = resolution.rejected_candidate_count;
    stats.empty_spans_dropped = resolution.empty_spans_dropped;
    stats.resolved_section_count = resolution.spans.len();

    let title = extract_title(&lines, &resolution.spans, config);
    let contribution = extract_contribution(&lines, &resolution.spans, config);
    let map = build_section_map(&lines, resolution.spans, title, contribution);

    Ok(Segmentation { map, stats })
}
