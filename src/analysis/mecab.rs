//! Japanese morphological analysis through an external tool.
//!
//! [`MorphologicalTool`] is the seam to the analyzer; [`MecabCommand`] runs
//! the `mecab` executable as a local subprocess, one process per call.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MecabConfig;
use crate::error::{MorphemizerError, Result};

/// A token reported by a morphological analyzer.
///
/// Only the surface form is guaranteed; the analyzer leaves other fields
/// out for unknown words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    pub surface: String,
    pub base: Option<String>,
    pub reading: Option<String>,
    pub pos: Option<String>,
    pub sub_pos: Option<String>,
}

impl AnalyzedToken {
    pub fn new<S: Into<String>>(surface: S) -> Self {
        AnalyzedToken {
            surface: surface.into(),
            ..Default::default()
        }
    }

    pub fn with_base<S: Into<String>>(mut self, base: S) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_reading<S: Into<String>>(mut self, reading: S) -> Self {
        self.reading = Some(reading.into());
        self
    }

    pub fn with_pos<P: Into<String>, S: Into<String>>(mut self, pos: P, sub_pos: S) -> Self {
        self.pos = Some(pos.into());
        self.sub_pos = Some(sub_pos.into());
        self
    }
}

/// Trait for external morphological analyzers.
pub trait MorphologicalTool: Send + Sync {
    /// Analyze `text` into tokens, in order.
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>>;

    /// Version and dictionary of the tool; fails when the tool is missing.
    fn identity(&self) -> Result<String>;
}

/// Output line layout requested from mecab: surface, base, reading, pos, sub-pos.
const NODE_FORMAT: &str = "%m\\t%f[6]\\t%f[7]\\t%f[0]\\t%f[1]\\n";
const UNK_FORMAT: &str = "%m\\t*\\t*\\t%f[0]\\t%f[1]\\n";
const EOS_FORMAT: &str = "EOS\\n";

/// Runs the `mecab` command line tool.
#[derive(Clone, Debug)]
pub struct MecabCommand {
    command: String,
    args: Vec<String>,
}

impl MecabCommand {
    pub fn new(config: &MecabConfig) -> Self {
        MecabCommand {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    fn format_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--node-format={NODE_FORMAT}"),
            format!("--unk-format={UNK_FORMAT}"),
            format!("--eos-format={EOS_FORMAT}"),
        ];
        args.extend(self.args.iter().cloned());
        args
    }

    fn run(&self, args: &[String], input: Option<&str>) -> Result<String> {
        let mut child = Command::new(&self.command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                MorphemizerError::external_tool(format!("Failed to start '{}': {e}", self.command))
            })?;

        let stdin = child.stdin.take();

        // Input is fed from its own thread while stdout is drained here, so
        // neither side can fill its pipe and stall the other.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                if let (Some(mut stdin), Some(input)) = (stdin, input) {
                    stdin.write_all(input.as_bytes())?;
                    stdin.write_all(b"\n")?;
                }
                Ok(())
            });
            // Always reaps the child, even when writing failed.
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output?;
        if !output.status.success() {
            return Err(MorphemizerError::external_tool(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(MorphemizerError::external_tool(format!(
                    "Failed to write input to '{}': {e}",
                    self.command
                )));
            }
            Err(_) => {
                return Err(MorphemizerError::external_tool(format!(
                    "Input writer for '{}' panicked",
                    self.command
                )));
            }
        }

        String::from_utf8(output.stdout).map_err(|_| {
            MorphemizerError::external_tool(format!("'{}' produced non UTF-8 output", self.command))
        })
    }
}

impl MorphologicalTool for MecabCommand {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>> {
        // Newlines would be read as separate sentences.
        let text = text.replace(['\r', '\n'], " ");
        let stdout = self.run(&self.format_args(), Some(&text))?;
        debug!("mecab returned {} lines", stdout.lines().count());
        Ok(parse_output(&stdout))
    }

    fn identity(&self) -> Result<String> {
        let stdout = self.run(&["-v".to_string()], None)?;
        let identity = stdout.trim();
        if identity.is_empty() {
            return Err(MorphemizerError::external_tool(format!(
                "'{} -v' printed nothing",
                self.command
            )));
        }
        Ok(identity.to_string())
    }
}

/// Parse node-format output into tokens, skipping sentence ends.
pub fn parse_output(stdout: &str) -> Vec<AnalyzedToken> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty() && *line != "EOS")
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let surface = fields.next().filter(|s| !s.is_empty())?;
            let mut next = || fields.next().and_then(feature);
            Some(AnalyzedToken {
                surface: surface.to_string(),
                base: next(),
                reading: next(),
                pos: next(),
                sub_pos: next(),
            })
        })
        .collect()
}

/// `*` marks a feature mecab does not know.
fn feature(field: &str) -> Option<String> {
    let field = field.trim();
    (!field.is_empty() && field != "*").then(|| field.to_string())
}
