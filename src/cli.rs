use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::segment::SectionName;

#[derive(Parser, Debug)]
#[command(
    name = "paperdec",
    version,
    about = "Deconstruct a research paper into a structured Markdown report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Report(ReportArgs),
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub output: PathBuf,

    #[arg(long = "section", value_enum, required = true)]
    pub sections: Vec<SectionChoice>,

    #[arg(long, default_value_t = 40)]
    pub min_length: usize,

    #[arg(long, default_value_t = 150)]
    pub max_length: usize,

    #[arg(long)]
    pub max_pages: Option<usize>,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub max_pages: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub with_text: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SectionChoice {
    Title,
    Abstract,
    Summary,
    Introduction,
    Method,
    Results,
    Conclusion,
    Contribution,
    LiteratureReview,
    References,
    All,
}

impl SectionChoice {
    pub fn canonical(self) -> Option<SectionName> {
        match self {
            Self::Title => Some(SectionName::Title),
            Self::Abstract => Some(SectionName::Abstract),
            Self::Introduction => Some(SectionName::Introduction),
            Self::Method => Some(SectionName::Method),
            Self::Results => Some(SectionName::Results),
            Self::Conclusion => Some(SectionName::Conclusion),
            Self::Contribution => Some(SectionName::Contribution),
            Self::LiteratureReview => Some(SectionName::LiteratureReview),
            Self::References => Some(SectionName::References),
            Self::Summary | Self::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Abstract => "abstract",
            Self::Summary => "summary",
            Self::Introduction => "introduction",
            Self::Method => "method",
            Self::Results => "results",
            Self::Conclusion => "conclusion",
            Self::Contribution => "contribution",
            Self::LiteratureReview => "literature_review",
            Self::References => "references",
            Self::All => "all",
        }
    }
}
