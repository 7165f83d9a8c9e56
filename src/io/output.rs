use super::summary_view::{summary_sections, Emphasis, SummarySection};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::scoring::CalculationResults;
use crate::strategy::{
    key_variable_strategies, split_routine, tertiary_variable_strategies, SearchStrategy,
};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Everything a `calculate` run reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub results: CalculationResults,
    pub key_strategies: Vec<SearchStrategy>,
    pub tertiary_strategies: Vec<SearchStrategy>,
}

impl SummaryReport {
    pub fn new(results: CalculationResults) -> Self {
        let key_strategies = key_variable_strategies(&results);
        let tertiary_strategies = tertiary_variable_strategies(&results);
        Self {
            results,
            key_strategies,
            tertiary_strategies,
        }
    }

    /// The same report with the strategy lists emptied.
    pub fn without_strategies(self) -> Self {
        Self {
            key_strategies: Vec::new(),
            tertiary_strategies: Vec::new(),
            ..self
        }
    }

    pub fn has_strategies(&self) -> bool {
        !self.key_strategies.is_empty() || !self.tertiary_strategies.is_empty()
    }

    /// Strategies to print: the key variables when any is positive, else the
    /// tertiary list.
    pub fn governing_strategies(&self) -> &[SearchStrategy] {
        if self.key_strategies.is_empty() {
            &self.tertiary_strategies
        } else {
            &self.key_strategies
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &SummaryReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SummaryReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &SummaryReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Structural Summary")?;
        writeln!(self.writer)?;
        for section in summary_sections(&report.results) {
            self.write_section(&section)?;
        }
        self.write_strategies(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_section(&mut self, section: &SummarySection) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", section.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Variable | Value |")?;
        writeln!(self.writer, "|----------|-------|")?;
        for row in &section.rows {
            let value = match row.emphasis {
                Emphasis::Flagged => format!("**{}**", row.value),
                _ => row.value.clone(),
            };
            writeln!(self.writer, "| {} | {} |", escape_pipes(row.label), value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_strategies(&mut self, report: &SummaryReport) -> anyhow::Result<()> {
        if !report.has_strategies() {
            return Ok(());
        }

        writeln!(self.writer, "## Strategy")?;
        writeln!(self.writer)?;
        let heading = if report.key_strategies.is_empty() {
            "Tertiary variables"
        } else {
            "Key variables"
        };
        writeln!(self.writer, "### {heading}")?;
        writeln!(self.writer)?;
        for strategy in report.governing_strategies() {
            match split_routine(&strategy.routine) {
                (order, Some(note)) => {
                    writeln!(self.writer, "- **{}**: {order} _{note}_", strategy.variable)?
                }
                (order, None) => writeln!(self.writer, "- **{}**: {order}", strategy.variable)?,
            }
        }
        Ok(())
    }
}

fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            config,
            formatter: formatter_for(config),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.config.unicode { UTF8_FULL } else { ASCII_FULL })
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn write_section(&mut self, section: &SummarySection) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["Variable", "Value"]);
        for row in &section.rows {
            let value = match row.emphasis {
                Emphasis::Flagged => self.formatter.positive(&row.value),
                Emphasis::Clear => self.formatter.negative(&row.value),
                Emphasis::None => row.value.clone(),
            };
            table.add_row(vec![row.label.to_string(), value]);
        }

        writeln!(self.writer, "{}", self.formatter.header(section.title))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_strategies(&mut self, report: &SummaryReport) -> anyhow::Result<()> {
        if !report.has_strategies() {
            return Ok(());
        }

        let title = if report.key_strategies.is_empty() {
            "Strategy (tertiary variables)"
        } else {
            "Strategy (key variables)"
        };
        let mut table = self.table();
        table.set_header(vec!["Variable", "Search routine"]);
        for strategy in report.governing_strategies() {
            let variable = if strategy.is_primary {
                self.formatter.bold(&strategy.variable)
            } else {
                strategy.variable.clone()
            };
            let routine = match split_routine(&strategy.routine) {
                (order, Some(note)) => format!("{order}\n{}", self.formatter.dim(note)),
                (order, None) => order.to_string(),
            };
            table.add_row(vec![variable, routine]);
        }

        writeln!(self.writer, "{}", self.formatter.header(title))?;
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SummaryReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Structural Summary"))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&format!("R = {}", report.results.r))
        )?;
        writeln!(self.writer)?;
        for section in summary_sections(&report.results) {
            self.write_section(&section)?;
        }
        self.write_strategies(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    config: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, config)),
    }
}
