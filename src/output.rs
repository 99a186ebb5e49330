use clap::ValueEnum;

use crate::check::{Report, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn progress_line(target: &Target) -> String {
    format!(
        "Searching for default_tags in {} on branch {}...",
        target.path, target.branch
    )
}

pub fn render_text(report: &Report) -> String {
    let providers: String = report
        .providers
        .iter()
        .map(|provider| {
            let tags: String = provider
                .tags
                .iter()
                .map(|tag| format!("  ✓ {}\n", tag))
                .collect();
            format!("Provider: {}\nTags:\n{}\n", provider.name, tags)
        })
        .collect();

    format!(
        "✅ All {} AWS provider(s) have the required tags\n\n{}",
        report.providers.len(),
        providers
    )
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
