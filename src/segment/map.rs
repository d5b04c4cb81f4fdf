use super::normalize::join_lines;
use super::types::{Line, Section, SectionMap, SectionName, SectionSpan};

pub fn build_section_map(
    lines: &[Line],
    spans: Vec<SectionSpan>,
    title: Option<Section>,
    contribution: Option<Section>,
) -> SectionMap {
    let document_text = join_lines(lines);
    let mut sections = Vec::<Section>::new();

    for name in SectionName::REPORT_ORDER {
        match name {
            SectionName::Title => {
                if let Some(section) = &title {
                    sections.push(section.clone());
                }
            }
            SectionName::Contribution => {
                if let Some(section) = &contribution {
                    sections.push(section.clone());
                }
            }
            _ => {
                if let Some(span) = spans.iter().find(|span| span.name == name) {
                    sections.push(Section {
                        name,
                        lines: Some((span.start_line, span.end_line)),
                        low_confidence: false,
                        text: span.text.clone(),
                    });
                }
            }
        }
    }

    SectionMap::new(sections, spans, document_text)
}
