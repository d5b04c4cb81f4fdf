use std::collections::{HashMap, HashSet};

use super::config::SegmentConfig;
use super::normalize::join_lines;
use super::types::{Line, Section, SectionName, SectionSpan};
use crate::util::split_sentences;

pub fn extract_title(
    lines: &[Line],
    spans: &[SectionSpan],
    config: &SegmentConfig,
) -> Option<Section> {
    let Some(first_heading) = spans.first().map(|span| span.start_line.saturating_sub(1)) else {
        // no heading resolved anywhere: the first line is the best guess
        let line = lines.first()?;
        return Some(Section {
            name: SectionName::Title,
            lines: Some((0, 1)),
            low_confidence: false,
            text: line.text.clone(),
        });
    };

    if first_heading == 0 {
        return None;
    }

    let recurring = recurring_short_caps_lines(lines, config);
    let mut runs = Vec::<(usize, usize)>::new();
    let mut current: Option<(usize, usize)> = None;

    for (index, line) in lines.iter().enumerate().take(first_heading) {
        let excluded = is_metadata_line(&line.text, config) || recurring.contains(line.text.trim());
        if excluded || (line.blank_before && current.is_some()) {
            if let Some(run) = current.take() {
                runs.push(run);
            }
        }
        if excluded {
            continue;
        }
        current = match current {
            Some((start, _)) => Some((start, index + 1)),
            None => Some((index, index + 1)),
        };
    }
    if let Some(run) = current.take() {
        runs.push(run);
    }

    let (start, end) = runs
        .into_iter()
        .max_by_key(|(start, end)| (end - start, std::cmp::Reverse(*start)))?;

    let text = lines[start..end]
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<&str>>()
        .join(" ");

    Some(Section {
        name: SectionName::Title,
        lines: Some((start, end)),
        low_confidence: false,
        text,
    })
}

pub fn extract_contribution(
    lines: &[Line],
    spans: &[SectionSpan],
    config: &SegmentConfig,
) -> Option<Section> {
    let mut scanned: Vec<&SectionSpan> = spans
        .iter()
        .filter(|span| {
            span.name == SectionName::Abstract || span.name == SectionName::Introduction
        })
        .collect();
    scanned.sort_by_key(|span| span.start_line);

    let scan_text = if scanned.is_empty() {
        let cutoff = ((lines.len() as f64) * config.contribution_scan_fraction).ceil() as usize;
        join_lines(&lines[..cutoff.min(lines.len())])
    } else {
        scanned
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<&str>>()
            .join("\n\n")
    };

    let matched: Vec<String> = split_sentences(&scan_text)
        .into_iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            config.cue_phrases.iter().any(|cue| lowered.contains(cue.as_str()))
        })
        .collect();

    if !matched.is_empty() {
        return Some(Section {
            name: SectionName::Contribution,
            lines: None,
            low_confidence: false,
            text: matched.join(" "),
        });
    }

    // no cue phrase anywhere: fall back to the opening of the abstract
    let abstract_span = spans.iter().find(|span| span.name == SectionName::Abstract)?;
    let lead: Vec<String> = split_sentences(&abstract_span.text)
        .into_iter()
        .take(2)
        .collect();
    if lead.is_empty() {
        return None;
    }

    Some(Section {
        name: SectionName::Contribution,
        lines: None,
        low_confidence: true,
        text: lead.join(" "),
    })
}

pub(crate) fn is_metadata_line(text: &str, config: &SegmentConfig) -> bool {
    text.contains('@') || looks_like_author_list(text, config)
}

pub(crate) fn looks_like_author_list(text: &str, config: &SegmentConfig) -> bool {
    if text.chars().count() > 90 {
        return false;
    }

    let normalized = text.replace(" and ", ", ");
    let parts: Vec<&str> = normalized
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 2 {
        return false;
    }

    parts.iter().all(|part| config.author_name.is_match(part))
}

// Running headers repeat verbatim across pages; the recurrence count is over
// distinct pages so a twice-wrapped line on one page does not qualify.
pub(crate) fn recurring_short_caps_lines(lines: &[Line], config: &SegmentConfig) -> HashSet<String> {
    let mut pages_by_text = HashMap::<&str, HashSet<usize>>::new();
    for line in lines {
        let text = line.text.trim();
        if text.is_empty() || text.chars().count() > 80 || !is_all_caps_text(text) {
            continue;
        }
        pages_by_text.entry(text).or_default().insert(line.page_index);
    }

    pages_by_text
        .into_iter()
        .filter(|(_, pages)| pages.len() >= config.repeated_line_min_pages)
        .map(|(text, _)| text.to_string())
        .collect()
}

fn is_all_caps_text(text: &str) -> bool {
    let mut has_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            has_alpha = true;
            if ch.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}
