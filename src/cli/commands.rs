//! Command implementations for the morphemizer CLI.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use crate::analysis::{CachedMorphemizer, MorphemizerRegistry};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::MorphemizerConfig;
use crate::frequency::MorphemeFrequency;

/// Execute a CLI command.
pub fn execute_command(args: MorphemizerArgs) -> Result<()> {
    let registry = load_registry(&args)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &args.command {
        Command::List => list_morphemizers(&registry, &args, &mut out)?,
        Command::Segment(segment_args) => segment_text(&registry, segment_args, &args, &mut out)?,
        Command::Frequency(frequency_args) => {
            count_frequencies(&registry, frequency_args, &args, &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}

/// The process-wide registry, or one built from `--config`.
enum Registry {
    Global(&'static MorphemizerRegistry),
    Configured(MorphemizerRegistry),
}

impl Deref for Registry {
    type Target = MorphemizerRegistry;

    fn deref(&self) -> &MorphemizerRegistry {
        match self {
            Registry::Global(registry) => registry,
            Registry::Configured(registry) => registry,
        }
    }
}

fn load_registry(args: &MorphemizerArgs) -> Result<Registry> {
    match &args.config {
        Some(path) => {
            let config = MorphemizerConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            let registry = MorphemizerRegistry::build(&config)
                .context("Failed to construct morphemizers")?;
            Ok(Registry::Configured(registry))
        }
        None => {
            let registry =
                MorphemizerRegistry::global().context("Failed to construct morphemizers")?;
            Ok(Registry::Global(registry))
        }
    }
}

fn resolve(registry: &MorphemizerRegistry, name: &str) -> Result<Arc<CachedMorphemizer>> {
    registry.get_by_name(name).ok_or_else(|| {
        anyhow!(
            "Unknown morphemizer '{name}'. Available: {}",
            registry.names().join(", ")
        )
    })
}

/// Print the registered morphemizers.
fn list_morphemizers<W: Write>(
    registry: &MorphemizerRegistry,
    cli_args: &MorphemizerArgs,
    out: &mut W,
) -> Result<()> {
    write_morphemizers(
        out,
        &registry.descriptors(),
        cli_args.output_format,
        cli_args.pretty,
    )?;
    Ok(())
}

/// Segment the given text, input file or stdin.
fn segment_text<W: Write>(
    registry: &MorphemizerRegistry,
    args: &SegmentArgs,
    cli_args: &MorphemizerArgs,
    out: &mut W,
) -> Result<()> {
    let morphemizer = resolve(registry, &args.morphemizer)?;

    let expressions: Vec<String> = match (&args.text, &args.input) {
        (Some(text), _) => vec![text.clone()],
        (None, Some(path)) => read_lines(path)?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer.lines().map(str::to_string).collect()
        }
    };

    let start = Instant::now();
    let results = morphemizer.segment_batch(&expressions);
    debug!(
        "Segmented {} expressions in {:?}",
        expressions.len(),
        start.elapsed()
    );

    let segments: Vec<SegmentedExpression> = expressions
        .into_iter()
        .zip(results)
        .map(|(expression, morphemes)| SegmentedExpression {
            expression,
            morphemes: morphemes.as_ref().clone(),
        })
        .collect();

    write_segments(out, &segments, cli_args.output_format, cli_args.pretty)?;
    Ok(())
}

/// Count morpheme types in a file.
fn count_frequencies<W: Write>(
    registry: &MorphemizerRegistry,
    args: &FrequencyArgs,
    cli_args: &MorphemizerArgs,
    out: &mut W,
) -> Result<()> {
    let morphemizer = resolve(registry, &args.morphemizer)?;
    let lines = read_lines(&args.input)?;

    let start = Instant::now();
    let mut frequency = MorphemeFrequency::new();
    for morphemes in morphemizer.segment_batch(&lines) {
        frequency.extend(morphemes.iter());
    }

    let stats = morphemizer.cache().stats();
    info!(
        "Counted {} morphemes in {:?} (cache hit rate {:.1}%)",
        frequency.total(),
        start.elapsed(),
        stats.hit_rate() * 100.0
    );

    let entries = match args.limit {
        Some(limit) => frequency.top(limit),
        None => frequency.entries(),
    };

    let report = FrequencyReport {
        morphemizer: morphemizer.name().to_string(),
        lines: lines.len(),
        total_morphemes: frequency.total(),
        distinct_morphemes: frequency.distinct(),
        entries,
    };

    write_frequency(out, &report, cli_args.output_format, cli_args.pretty)?;
    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}
