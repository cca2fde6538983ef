//! Output formatters: console, JSON, Markdown and HTML renderings of a match report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Character width of the console score bar.
const BAR_CELLS: usize = 40;

pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Keyword Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .score-bar {
            background: #e9ecef;
            border-radius: 6px;
            height: 18px;
            overflow: hidden;
        }
        .score-bar-inner { height: 100%; }
        .band-strong { background: #28a745; }
        .band-decent { background: #ffc107; }
        .band-low { background: #dc3545; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>Resume Keyword Match Report</h1>
        <p id="summary">{{ summary_line }}</p>
        <div class="score-bar">
            <div class="score-bar-inner {{ band_class }}" style="width: {{ bar_width }}%"></div>
        </div>

        <div class="section">
            <h2>Present keywords</h2>
            <p id="present">{{ present_list }}</p>
        </div>

        <div class="section">
            <h2>Missing keywords</h2>
            <p id="missing">{{ missing_list }}</p>
        </div>

        {% if !tips.is_empty() %}
        <div class="section">
            <h2>Tips</h2>
            <ul id="tipsList">
                {% for tip in tips %}
                <li>{{ tip }}</li>
                {% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="metadata">
            Generated {{ generated_at }} by resume-matcher v{{ version }} |
            Resume: {{ resume_source }} | Job: {{ job_source }} | Seniority: {{ seniority }}
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    summary_line: String,
    band_class: String,
    bar_width: String,
    present_list: String,
    missing_list: String,
    tips: Vec<String>,
    generated_at: String,
    version: String,
    resume_source: String,
    job_source: String,
    seniority: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn band_color(band: ScoreBand) -> Color {
        match band {
            ScoreBand::Low => Color::Red,
            ScoreBand::Decent => Color::Yellow,
            ScoreBand::Strong => Color::Green,
        }
    }

    fn format_score_bar(&self, report: &MatchReport) -> String {
        let filled = ((score_bar_width(report.summary.score) / 100.0) * BAR_CELLS as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled));
        let badge = format!("[{}]", report.band().label());

        if self.use_colors {
            let color = Self::band_color(report.band());
            format!("{} {}", bar.color(color), badge.color(color).bold())
        } else {
            format!("{} {}", bar, badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME KEYWORD MATCH"));
        output.push_str(&format!("{}\n", report.summary.summary_line()));
        output.push_str(&format!("{}\n", self.format_score_bar(report)));

        output.push_str(&self.format_header("Present keywords"));
        output.push_str(&format!("{}\n", self.colorize(&format_keyword_list(&report.present), Color::Green)));

        output.push_str(&self.format_header("Missing keywords"));
        output.push_str(&format!("{}\n", self.colorize(&format_keyword_list(&report.missing), Color::Yellow)));

        if !report.tips.is_empty() {
            output.push_str(&self.format_header("Tips"));
            for tip in &report.tips {
                output.push_str(&format!("  • {}\n", tip));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Details"));
            output.push_str(&format!("Job keywords: {}\n", format_keyword_list(&report.keywords)));
            output.push_str(&format!("Resume: {}\n", report.metadata.resume_source));
            output.push_str(&format!("Job description: {}\n", report.metadata.job_source));
            output.push_str(&format!("Seniority: {}\n", report.seniority));
            output.push_str(&format!(
                "Generated: {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn inline_code_list(keywords: &[String]) -> String {
        if keywords.is_empty() {
            EMPTY_LIST.to_string()
        } else {
            format!("`{}`", keywords.join("`, `"))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Keyword Match Report\n\n");
        output.push_str(&format!("**{}**\n\n", report.summary.summary_line()));

        output.push_str("| Score | JD keywords | Present | Missing |\n");
        output.push_str("|-------|-------------|---------|---------|\n");
        output.push_str(&format!(
            "| {}% | {} | {} | {} |\n\n",
            report.summary.score,
            report.summary.total_keywords,
            report.summary.present_count,
            report.summary.missing_count
        ));

        output.push_str("## Present keywords\n\n");
        output.push_str(&format!("{}\n\n", Self::inline_code_list(&report.present)));

        output.push_str("## Missing keywords\n\n");
        output.push_str(&format!("{}\n\n", Self::inline_code_list(&report.missing)));

        if !report.tips.is_empty() {
            output.push_str("## Tips\n\n");
            for tip in &report.tips {
                output.push_str(&format!("- {}\n", tip));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated {} by resume-matcher v{} | Resume: `{}` | Job: `{}` | Seniority: {}*\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.matcher_version,
                report.metadata.resume_source,
                report.metadata.job_source,
                report.seniority
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &MatchReport) -> HtmlTemplate {
        let band_class = match report.band() {
            ScoreBand::Low => "band-low",
            ScoreBand::Decent => "band-decent",
            ScoreBand::Strong => "band-strong",
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            summary_line: report.summary.summary_line(),
            band_class: band_class.to_string(),
            bar_width: score_bar_width(report.summary.score).to_string(),
            present_list: format_keyword_list(&report.present),
            missing_list: format_keyword_list(&report.missing),
            tips: report.tips.clone(),
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            version: report.metadata.matcher_version.clone(),
            resume_source: report.metadata.resume_source.clone(),
            job_source: report.metadata.job_source.clone(),
            seniority: report.seniority.to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
