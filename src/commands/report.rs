use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::{ReportArgs, SectionChoice};
use crate::extract;
use crate::model::{ReportCounts, ReportRunManifest};
use crate::segment::{
    Section, SectionMap, SectionName, SegmentConfig, segment_document,
};
use crate::summarize::{ExtractiveSummarizer, LengthBounds, Summarizer};
use crate::util::{now_utc_string, sha256_file, write_json_pretty, write_text_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderRequest {
    Summary,
    Section(SectionName),
}

pub fn run(args: ReportArgs) -> Result<()> {
    let bounds = LengthBounds {
        min_words: args.min_length,
        max_words: args.max_length,
    };

    info!(input = %args.input.display(), "processing paper");
    let pages = extract::extract_pages(&args.input, args.max_pages)?;
    let records = extract::raw_lines(&pages);

    let config = SegmentConfig::new()?;
    let outcome = segment_document(&records, &config)
        .with_context(|| format!("failed to segment {}", args.input.display()))?;
    info!(
        sections = outcome.map.sections().len(),
        candidates = outcome.stats.candidate_count,
        "segmentation complete"
    );

    let requests = expand_requests(&args.sections, &outcome.map);
    let summarizer = ExtractiveSummarizer::default();

    let mut blocks = Vec::<(String, String)>::new();
    let mut rendered_sections = Vec::<String>::new();
    let mut missing_sections = Vec::<SectionName>::new();
    let mut warnings = Vec::<String>::new();

    for request in requests {
        match request {
            RenderRequest::Summary => {
                let summary = summarizer
                    .summarize(outcome.map.document_text(), bounds)
                    .context("failed to summarize document")?;
                blocks.push(("Summary".to_string(), summary));
                rendered_sections.push("summary".to_string());
            }
            RenderRequest::Section(name) => match outcome.map.section(name) {
                Ok(section) => {
                    let body = render_section_body(section, &summarizer, bounds)?;
                    blocks.push((name.heading().to_string(), body));
                    rendered_sections.push(name.as_str().to_string());
                }
                Err(error) => {
                    warn!(section = %name, "requested section not found in document");
                    missing_sections.push(name);
                    warnings.push(error.to_string());
                }
            },
        }
    }

    let title = outcome.map.get(SectionName::Title).map(|s| s.text.as_str());
    let markdown = render_markdown(title, &blocks);
    write_text_file(&args.output, &markdown)?;
    info!(path = %args.output.display(), sections = blocks.len(), "wrote report");

    if let Some(manifest_path) = &args.manifest_path {
        let manifest = ReportRunManifest {
            manifest_version: 1,
            generated_at: now_utc_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            pdftotext_version: extract::pdftotext_version(),
            input_path: args.input.display().to_string(),
            input_sha256: sha256_file(&args.input)?,
            output_path: args.output.display().to_string(),
            requested_sections: args
                .sections
                .iter()
                .map(|choice| choice.as_str().to_string())
                .collect(),
            rendered_sections,
            missing_sections,
            low_confidence_sections: outcome
                .map
                .sections()
                .iter()
                .filter(|section| section.low_confidence)
                .map(|section| section.name)
                .collect(),
            counts: ReportCounts::from_stats(&outcome.stats, pages.len(), blocks.len()),
            warnings,
        };
        write_json_pretty(manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote run manifest");
    }

    Ok(())
}

fn expand_requests(choices: &[SectionChoice], map: &SectionMap) -> Vec<RenderRequest> {
    let mut requests = Vec::<RenderRequest>::new();

    for choice in choices {
        match choice {
            SectionChoice::All => {
                for name in map.names() {
                    push_unique(&mut requests, RenderRequest::Section(name));
                }
            }
            SectionChoice::Summary => push_unique(&mut requests, RenderRequest::Summary),
            other => {
                if let Some(name) = other.canonical() {
                    push_unique(&mut requests, RenderRequest::Section(name));
                }
            }
        }
    }

    requests
}

fn push_unique(requests: &mut Vec<RenderRequest>, request: RenderRequest) {
    if !requests.contains(&request) {
        requests.push(request);
    }
}

fn render_section_body(
    section: &Section,
    summarizer: &ExtractiveSummarizer,
    bounds: LengthBounds,
) -> Result<String> {
    match section.name {
        // short or enumerative sections are reproduced verbatim
        SectionName::Title | SectionName::Abstract | SectionName::References => {
            Ok(section.text.clone())
        }
        SectionName::Contribution => {
            if section.low_confidence {
                Ok(format!(
                    "{}\n\n_Low confidence: inferred from the abstract, no contribution cue found._",
                    section.text
                ))
            } else {
                Ok(section.text.clone())
            }
        }
        name => summarizer
            .summarize(&section.text, bounds)
            .with_context(|| format!("failed to summarize section '{name}'")),
    }
}

fn render_markdown(title: Option<&str>, blocks: &[(String, String)]) -> String {
    let mut out = format!("# Analysis of {}\n\n", title.unwrap_or("Untitled paper"));
    for (heading, body) in blocks {
        out.push_str("## ");
        out.push_str(heading);
        out.push('\n');
        out.push_str(body);
        out.push_str("\n\n");
    }
    out.push_str("---\n*Report generated by paperdec.*\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: SectionName, text: &str) -> Section {
        Section {
            name,
            lines: None,
            low_confidence: false,
            text: text.to_string(),
        }
    }

    fn sample_map() -> SectionMap {
        SectionMap::new(
            vec![
                section(SectionName::Title, "A Title"),
                section(SectionName::Abstract, "An abstract."),
                section(SectionName::Conclusion, "A conclusion."),
            ],
            Vec::new(),
            "A Title\n\nAn abstract.\n\nA conclusion.".to_string(),
        )
    }

    #[test]
    fn all_expands_to_present_sections_only() {
        let requests = expand_requests(&[SectionChoice::All], &sample_map());
        assert_eq!(
            requests,
            vec![
                RenderRequest::Section(SectionName::Title),
                RenderRequest::Section(SectionName::Abstract),
                RenderRequest::Section(SectionName::Conclusion),
            ]
        );
    }

    #[test]
    fn duplicate_requests_collapse() {
        let requests = expand_requests(
            &[
                SectionChoice::Abstract,
                SectionChoice::Summary,
                SectionChoice::Abstract,
                SectionChoice::All,
            ],
            &sample_map(),
        );
        assert_eq!(
            requests,
            vec![
                RenderRequest::Section(SectionName::Abstract),
                RenderRequest::Summary,
                RenderRequest::Section(SectionName::Title),
                RenderRequest::Section(SectionName::Conclusion),
            ]
        );
    }

    #[test]
    fn missing_section_is_not_expanded_by_all() {
        let requests = expand_requests(&[SectionChoice::All], &sample_map());
        assert!(!requests.contains(&RenderRequest::Section(SectionName::Method)));
    }

    #[test]
    fn markdown_layout_matches_report_shape() {
        let blocks = vec![("Abstract".to_string(), "Body text.".to_string())];
        let markdown = render_markdown(Some("A Title"), &blocks);
        assert!(markdown.starts_with("# Analysis of A Title\n\n"));
        assert!(markdown.contains("## Abstract\nBody text.\n\n"));
        assert!(markdown.ends_with("---\n*Report generated by paperdec.*\n"));
    }

    #[test]
    fn low_confidence_contribution_is_flagged_in_body() {
        let summarizer = ExtractiveSummarizer::default();
        let bounds = LengthBounds {
            min_words: 5,
            max_words: 50,
        };
        let entry = Section {
            name: SectionName::Contribution,
            lines: None,
            low_confidence: true,
            text: "First sentence. Second sentence.".to_string(),
        };
        let body = render_section_body(&entry, &summarizer, bounds).unwrap();
        assert!(body.starts_with("First sentence. Second sentence."));
        assert!(body.contains("Low confidence"));
    }
}
