//! The generated requirements document.
//!
//! Lines are partitioned as they arrive: anything matching a CUDA wheel
//! marker keeps its arrival order in the torch section, everything else
//! lands in a sorted, deduplicated catch-all. Rendering reproduces the
//! layout the downstream install scripts expect, header comments
//! included.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::convert::rules;
use crate::error::Result;

const HEADER_GENERATED: &str = "# Generated from conda environment yml";
const HEADER_CUDA_NOTE: &str = "# PyTorch with CUDA support";
const SECTION_GPU: &str = "# PyTorch with CUDA";
const SECTION_OTHER: &str = "# Other dependencies";

/// Requirement lines grouped for rendering.
#[derive(Debug, Clone, Default)]
pub struct RequirementsDoc {
    /// CUDA wheel lines in arrival order. Duplicates are kept.
    gpu: Vec<String>,
    /// Everything else, deduplicated and sorted.
    other: BTreeSet<String>,
}

impl RequirementsDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a requirement line to the matching group.
    pub fn push_line(&mut self, line: String) {
        if rules::is_gpu_line(&line) {
            self.gpu.push(line);
        } else {
            self.other.insert(line);
        }
    }

    /// Lines in the CUDA wheel group, in arrival order.
    pub fn gpu_lines(&self) -> &[String] {
        &self.gpu
    }

    /// Lines in the catch-all group, sorted and unique.
    pub fn other_lines(&self) -> impl Iterator<Item = &str> {
        self.other.iter().map(String::as_str)
    }

    /// Total number of grouped lines.
    pub fn len(&self) -> usize {
        self.gpu.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gpu.is_empty() && self.other.is_empty()
    }

    /// Renders the full requirements.txt content.
    ///
    /// The torch section is omitted entirely when empty; the catch-all
    /// section header is always present. Empty lines and lines that
    /// would read as comments are dropped from the catch-all.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(HEADER_GENERATED);
        out.push('\n');
        out.push_str(HEADER_CUDA_NOTE);
        out.push('\n');
        out.push_str(rules::EXTRA_INDEX_URL);
        out.push_str("\n\n");

        if !self.gpu.is_empty() {
            out.push_str(SECTION_GPU);
            out.push('\n');
            for line in &self.gpu {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(SECTION_OTHER);
        out.push('\n');
        for line in &self.other {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            out.push_str(line);
            out.push('\n');
        }

        out
    }

    /// Writes the rendered document, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.render())?;
        debug!(path = %path.display(), lines = self.len(), "wrote requirements file");
        Ok(())
    }
}
