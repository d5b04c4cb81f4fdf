use super::types::{Line, RawLine, SegmentStats};

pub fn normalize_lines(raw: &[RawLine]) -> (Vec<Line>, SegmentStats) {
    let mut stats = SegmentStats {
        raw_line_count: raw.len(),
        ..SegmentStats::default()
    };
    let mut lines = Vec::<Line>::new();
    let mut blank_pending = false;
    let mut index = 0usize;

    while index < raw.len() {
        let record = &raw[index];
        let trimmed = record.text.trim();

        if trimmed.is_empty() {
            stats.blank_line_count += 1;
            blank_pending = true;
            index += 1;
            continue;
        }

        if is_page_number_artifact(raw, index) {
            stats.artifact_lines_dropped += 1;
            index += 1;
            continue;
        }

        let mut text = trimmed.to_string();
        while index + 1 < raw.len() && raw[index + 1].page_index == record.page_index {
            let next = raw[index + 1].text.trim();
            if !should_join_hyphenated(&text, next) {
                break;
            }
            text = format!("{}{}", text.trim_end_matches('-'), next);
            stats.dehyphenation_merges += 1;
            index += 1;
        }

        lines.push(Line {
            text,
            page_index: record.page_index,
            blank_before: blank_pending,
        });
        blank_pending = false;
        index += 1;
    }

    stats.line_count = lines.len();
    (lines, stats)
}

pub fn join_lines(lines: &[Line]) -> String {
    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            if line.blank_before {
                out.push_str("\n\n");
            } else {
                out.push('\n');
            }
        }
        out.push_str(&line.text);
    }
    out
}

pub fn first_on_page(lines: &[Line], index: usize) -> bool {
    index == 0 || lines[index - 1].page_index != lines[index].page_index
}

// A short all-digit line isolated by blank lines or page edges is a printed
// page number, not content. Anything else passes through unmodified.
fn is_page_number_artifact(raw: &[RawLine], index: usize) -> bool {
    let text = raw[index].text.trim();
    if text.is_empty() || text.len() > 4 || !text.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }

    let isolated_above = index == 0
        || raw[index - 1].text.trim().is_empty()
        || raw[index - 1].page_index != raw[index].page_index;
    let isolated_below = index + 1 == raw.len()
        || raw[index + 1].text.trim().is_empty()
        || raw[index + 1].page_index != raw[index].page_index;

    isolated_above && isolated_below
}

fn should_join_hyphenated(current: &str, next: &str) -> bool {
    if !current.ends_with('-') {
        return false;
    }

    let continues_lowercase = next
        .chars()
        .next()
        .map(|ch| ch.is_ascii_lowercase())
        .unwrap_or(false);
    if !continues_lowercase {
        return false;
    }

    current
        .trim_end_matches('-')
        .chars()
        .last()
        .map(|ch| ch.is_ascii_alphabetic())
        .unwrap_or(false)
}
