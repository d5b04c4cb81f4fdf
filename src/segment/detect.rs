use super::config::{HeadingAlias, SegmentConfig};
use super::normalize::first_on_page;
use super::types::{Candidate, Line, SectionName};

pub fn detect_candidates(lines: &[Line], config: &SegmentConfig) -> Vec<Candidate> {
    let mut candidates = Vec::<Candidate>::new();

    for (index, line) in lines.iter().enumerate() {
        if line.text.chars().count() > config.max_heading_chars {
            continue;
        }
        if !line.blank_before && !first_on_page(lines, index) {
            continue;
        }
        if line.text.ends_with(['.', ',', ';']) {
            continue;
        }

        let stripped = config.enumerator.replace(&line.text, "");
        let lowered = stripped.trim().to_lowercase();
        if lowered.is_empty() {
            continue;
        }

        let Some((name, pattern, exact)) = best_alias_match(&lowered, &config.aliases) else {
            continue;
        };

        let base = if exact {
            config.exact_match_confidence
        } else {
            config.prefix_match_confidence
        };
        let bonus = if is_all_caps(&line.text) || is_title_case(stripped.trim()) {
            config.formatting_bonus
        } else {
            0.0
        };

        candidates.push(Candidate {
            line_index: index,
            name,
            confidence: (base + bonus).min(1.0),
            matched_alias: pattern.to_string(),
        });
    }

    candidates
}

fn best_alias_match<'a>(
    text: &str,
    aliases: &'a [HeadingAlias],
) -> Option<(SectionName, &'a str, bool)> {
    let mut best: Option<(SectionName, &'a str, bool)> = None;

    for alias in aliases {
        for pattern in &alias.patterns {
            let Some(exact) = pattern_match(text, pattern) else {
                continue;
            };
            match best {
                None => best = Some((alias.name, pattern.as_str(), exact)),
                Some((_, _, false)) if exact => best = Some((alias.name, pattern.as_str(), exact)),
                _ => {}
            }
        }
    }

    best
}

// Exact equality, or a prefix whose continuation starts at a word boundary:
// "results and discussion" matches "results", "resultant" does not.
fn pattern_match(text: &str, pattern: &str) -> Option<bool> {
    if text == pattern {
        return Some(true);
    }

    let rest = text.strip_prefix(pattern)?;
    match rest.chars().next() {
        Some(ch) if !ch.is_alphanumeric() => Some(false),
        _ => None,
    }
}

fn is_all_caps(text: &str) -> bool {
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

fn is_title_case(text: &str) -> bool {
    let mut capitalized = 0usize;
    for word in text.split_whitespace() {
        let Some(first) = word.chars().find(|ch| ch.is_alphabetic()) else {
            continue;
        };
        if first.is_uppercase() {
            capitalized += 1;
            continue;
        }
        // short connectives ("and", "of") stay lowercase in title case
        if word.chars().filter(|ch| ch.is_alphabetic()).count() > 3 {
            return false;
        }
    }
    capitalized > 0
}
