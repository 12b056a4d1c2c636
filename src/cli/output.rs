//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::MorphemizerInfo;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::frequency::FrequencyEntry;
use crate::morpheme::Morpheme;

/// Morphemes found in one input expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentedExpression {
    pub expression: String,
    pub morphemes: Vec<Morpheme>,
}

/// Result of the `frequency` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub morphemizer: String,
    pub lines: usize,
    pub total_morphemes: u64,
    pub distinct_morphemes: usize,
    pub entries: Vec<FrequencyEntry>,
}

/// Write the registered morphemizers.
pub fn write_morphemizers<W: Write>(
    out: &mut W,
    infos: &[MorphemizerInfo],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let width = infos.iter().map(|i| i.name.chars().count()).max().unwrap_or(0);
            for info in infos {
                writeln!(out, "{:<width$}  {}", info.name, info.description)?;
            }
        }
        OutputFormat::Json => write_json(out, infos, pretty)?,
        OutputFormat::Tsv => {
            writeln!(out, "name\tdescription")?;
            for info in infos {
                writeln!(out, "{}\t{}", info.name, tsv_field(&info.description))?;
            }
        }
    }
    Ok(())
}

/// Write segmentation results.
pub fn write_segments<W: Write>(
    out: &mut W,
    segments: &[SegmentedExpression],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for segment in segments {
                writeln!(out, "{}", segment.expression)?;
                if segment.morphemes.is_empty() {
                    writeln!(out, "  (no morphemes)")?;
                }
                for morpheme in &segment.morphemes {
                    writeln!(out, "  {}", describe(morpheme))?;
                }
            }
        }
        OutputFormat::Json => write_json(out, segments, pretty)?,
        OutputFormat::Tsv => {
            writeln!(out, "{}", Morpheme::TSV_HEADER)?;
            for morpheme in segments.iter().flat_map(|s| &s.morphemes) {
                writeln!(out, "{morpheme}")?;
            }
        }
    }
    Ok(())
}

/// Write a frequency table.
pub fn write_frequency<W: Write>(
    out: &mut W,
    report: &FrequencyReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(
                out,
                "{}: {} morphemes, {} distinct, {} lines",
                report.morphemizer, report.total_morphemes, report.distinct_morphemes, report.lines
            )?;
            writeln!(out)?;
            for entry in &report.entries {
                writeln!(
                    out,
                    "{:>8}  {}  [{}]  {}",
                    entry.count,
                    entry.norm,
                    entry.pos,
                    entry.inflections.join(", ")
                )?;
            }
        }
        OutputFormat::Json => write_json(out, report, pretty)?,
        OutputFormat::Tsv => {
            writeln!(out, "count\tnorm\tbase\tpos\tinflections")?;
            for entry in &report.entries {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    entry.count,
                    entry.norm,
                    entry.base,
                    entry.pos,
                    entry.inflections.join(",")
                )?;
            }
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

/// One line summary of a morpheme for human output.
fn describe(morpheme: &Morpheme) -> String {
    let mut line = morpheme.inflected().to_string();
    if morpheme.norm() != morpheme.inflected() {
        line.push_str(" -> ");
        line.push_str(morpheme.norm());
    }
    if morpheme.read() != morpheme.norm() {
        line.push_str(&format!(" ({})", morpheme.read()));
    }
    line.push_str(&format!(" [{}/{}]", morpheme.pos(), morpheme.sub_pos()));
    line
}

fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n'], " ")
}
