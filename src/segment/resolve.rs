use tracing::debug;

use super::config::SegmentConfig;
use super::normalize::join_lines;
use super::types::{Candidate, Line, SectionName, SectionSpan};

#[derive(Debug, Default)]
pub struct Resolution {
    pub spans: Vec<SectionSpan>,
    pub duplicate_heading_groups: usize,
    pub rejected_candidate_count: usize,
    pub empty_spans_dropped: usize,
}

pub fn resolve_boundaries(
    candidates: &[Candidate],
    lines: &[Line],
    config: &SegmentConfig,
) -> Resolution {
    let mut resolution = Resolution::default();

    // A candidate immediately followed by another candidate of any name sits
    // inside a dense run (table of contents, index column) and is discarded.
    let mut survivors = Vec::<(&Candidate, usize)>::new();
    for (position, candidate) in candidates.iter().enumerate() {
        let next_line = candidates
            .get(position + 1)
            .map(|next| next.line_index)
            .unwrap_or(lines.len());
        let gap = next_line - candidate.line_index - 1;

        if position + 1 < candidates.len() && gap < config.min_content_gap {
            debug!(
                section = %candidate.name,
                line = candidate.line_index,
                gap,
                "rejected heading candidate in dense candidate run"
            );
            resolution.rejected_candidate_count += 1;
            continue;
        }

        survivors.push((candidate, gap));
    }

    let mut selected = Vec::<&Candidate>::new();
    for name in SectionName::REPORT_ORDER {
        let group: Vec<&(&Candidate, usize)> = survivors
            .iter()
            .filter(|(candidate, _)| candidate.name == name)
            .collect();

        let Some((best, best_gap)) = group
            .iter()
            .map(|(candidate, gap)| (*candidate, *gap))
            .max_by_key(|(candidate, gap)| (*gap, candidate.line_index))
        else {
            continue;
        };

        if group.len() > 1 {
            resolution.duplicate_heading_groups += 1;
            let ties = group.iter().filter(|(_, gap)| *gap == best_gap).count();
            if ties > 1 {
                // tie broken by later document position; TOC entries precede
                // the true heading
                debug!(
                    section = %name,
                    line = best.line_index,
                    alias = %best.matched_alias,
                    confidence = best.confidence as f64,
                    "ambiguous heading, kept later occurrence"
                );
            } else {
                debug!(
                    section = %name,
                    line = best.line_index,
                    candidates = group.len(),
                    "duplicate headings resolved by following content"
                );
            }
        }

        selected.push(best);
    }

    selected.sort_by_key(|candidate| candidate.line_index);

    // A heading whose span holds no content is a false positive; drop it and
    // let the neighboring spans re-extend.
    loop {
        let empty = (0..selected.len()).find(|&index| {
            let (start, end) = span_bounds(&selected, index, lines.len());
            !lines[start..end].iter().any(|line| !line.text.trim().is_empty())
        });
        match empty {
            Some(index) => {
                selected.remove(index);
                resolution.empty_spans_dropped += 1;
            }
            None => break,
        }
    }

    resolution.spans = selected
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let (start, end) = span_bounds(&selected, index, lines.len());
            SectionSpan {
                name: candidate.name,
                start_line: start,
                end_line: end,
                text: join_lines(&lines[start..end]),
            }
        })
        .collect();

    resolution
}

fn span_bounds(selected: &[&Candidate], index: usize, line_count: usize) -> (usize, usize) {
    let start = selected[index].line_index + 1;
    let end = selected
        .get(index + 1)
        .map(|next| next.line_index)
        .unwrap_or(line_count);
    (start, end)
}
