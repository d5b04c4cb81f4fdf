use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::InspectArgs;
use crate::extract;
use crate::segment::{SegmentConfig, SegmentStats, Segmentation, segment_document};
use crate::util::now_utc_string;

#[derive(Debug, Serialize)]
struct InspectSection {
    name: String,
    lines: Option<(usize, usize)>,
    low_confidence: bool,
    chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    input: String,
    generated_at: String,
    page_count: usize,
    stats: SegmentStats,
    sections: Vec<InspectSection>,
}

pub fn run(args: InspectArgs) -> Result<()> {
    info!(input = %args.input.display(), "inspecting paper");
    let pages = extract::extract_pages(&args.input, args.max_pages)?;
    let records = extract::raw_lines(&pages);

    let config = SegmentConfig::new()?;
    let outcome = segment_document(&records, &config)
        .with_context(|| format!("failed to segment {}", args.input.display()))?;

    let response = build_response(&args, pages.len(), &outcome);

    if args.json {
        write_json_response(&response)
    } else {
        write_text_response(&response)
    }
}

fn build_response(args: &InspectArgs, page_count: usize, outcome: &Segmentation) -> InspectResponse {
    let sections = outcome
        .map
        .sections()
        .iter()
        .map(|section| InspectSection {
            name: section.name.as_str().to_string(),
            lines: section.lines,
            low_confidence: section.low_confidence,
            chars: section.text.chars().count(),
            text: args.with_text.then(|| section.text.clone()),
        })
        .collect();

    InspectResponse {
        input: args.input.display().to_string(),
        generated_at: now_utc_string(),
        page_count,
        stats: outcome.stats,
        sections,
    }
}

fn write_json_response(response: &InspectResponse) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, response)
        .context("failed to serialize inspect json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_response(response: &InspectResponse) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Input: {}", response.input)?;
    writeln!(
        output,
        "Pages: {} Lines: {} (raw {}, blank {}, artifacts {}, dehyphenation merges {})",
        response.page_count,
        response.stats.line_count,
        response.stats.raw_line_count,
        response.stats.blank_line_count,
        response.stats.artifact_lines_dropped,
        response.stats.dehyphenation_merges,
    )?;
    writeln!(
        output,
        "Headings: candidates={} rejected={} duplicate_groups={} empty_spans_dropped={} resolved={}",
        response.stats.candidate_count,
        response.stats.rejected_candidate_count,
        response.stats.duplicate_heading_groups,
        response.stats.empty_spans_dropped,
        response.stats.resolved_section_count,
    )?;
    writeln!(output, "Sections: {}", response.sections.len())?;

    for section in &response.sections {
        let range = section
            .lines
            .map(|(start, end)| format!("lines {start}..{end}"))
            .unwrap_or_else(|| "derived".to_string());
        let flag = if section.low_confidence {
            " (low confidence)"
        } else {
            ""
        };
        writeln!(
            output,
            "{}\t{}\tchars {}{}",
            section.name, range, section.chars, flag
        )?;
        if let Some(text) = &section.text {
            writeln!(output, "\t{text}")?;
        }
    }

    output.flush()?;
    Ok(())
}
