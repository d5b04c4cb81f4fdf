use std::collections::HashMap;

use thiserror::Error;

use crate::util::split_sentences;

#[derive(Clone, Copy, Debug)]
pub struct LengthBounds {
    pub min_words: usize,
    pub max_words: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("cannot summarize empty text")]
    EmptyText,
    #[error("minimum length {min} exceeds maximum length {max}")]
    InvalidBounds { min: usize, max: usize },
}

pub trait Summarizer {
    fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError>;
}

// Deterministic extractive fallback for offline runs: sentences are scored by
// content-word frequency within their chunk and emitted in document order.
pub struct ExtractiveSummarizer {
    pub max_chunk_chars: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self {
            max_chunk_chars: 1024,
        }
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError> {
        if bounds.min_words > bounds.max_words {
            return Err(SummarizeError::InvalidBounds {
                min: bounds.min_words,
                max: bounds.max_words,
            });
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        let sentences = split_sentences(trimmed);
        let chunks = chunk_sentences(sentences, self.max_chunk_chars);
        let parts: Vec<String> = chunks
            .iter()
            .map(|chunk| summarize_chunk(chunk, bounds))
            .filter(|part| !part.is_empty())
            .collect();

        Ok(parts.join(" "))
    }
}

fn chunk_sentences(sentences: Vec<String>, max_chars: usize) -> Vec<Vec<String>> {
    let mut chunks = Vec::<Vec<String>>::new();
    let mut current = Vec::<String>::new();
    let mut current_chars = 0usize;

    for sentence in sentences {
        let length = sentence.chars().count();
        if !current.is_empty() && current_chars + length > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        current_chars += length;
        current.push(sentence);
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn summarize_chunk(sentences: &[String], bounds: LengthBounds) -> String {
    let word_counts: Vec<usize> = sentences
        .iter()
        .map(|sentence| sentence.split_whitespace().count())
        .collect();
    let total_words: usize = word_counts.iter().sum();

    if total_words <= bounds.max_words {
        return sentences.join(" ");
    }

    let mut frequency = HashMap::<String, usize>::new();
    for sentence in sentences {
        for word in content_words(sentence) {
            *frequency.entry(word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let words = content_words(sentence);
            let score = if words.is_empty() {
                0.0
            } else {
                let sum: usize = words
                    .iter()
                    .map(|word| frequency.get(word).copied().unwrap_or(0))
                    .sum();
                sum as f64 / words.len() as f64
            };
            (index, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut chosen = Vec::<usize>::new();
    let mut word_total = 0usize;
    for (index, _) in ranked {
        let words = word_counts[index];
        if !chosen.is_empty()
            && word_total >= bounds.min_words
        {
            break;
        }
        if !chosen.is_empty() && word_total + words > bounds.max_words {
            continue;
        }
        chosen.push(index);
        word_total += words;
    }
    chosen.sort_unstable();

    chosen
        .into_iter()
        .map(|index| sentences[index].as_str())
        .collect::<Vec<&str>>()
        .join(" ")
}

fn content_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|ch| ch.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| word.chars().count() > 3)
        .collect()
}
