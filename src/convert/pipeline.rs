//! Conversion of a parsed conda environment into requirement lines.
//!
//! Plain conda specs run through a fixed sequence of rules; the nested
//! pip sub-list is forwarded verbatim. Grouping and ordering of the
//! resulting lines is the document's job, not ours.

use std::fmt;

use tracing::debug;

use crate::conda::{CondaEnvironment, SpecFields};
use crate::convert::document::RequirementsDoc;
use crate::convert::rules;

/// Why a conda spec produced no requirement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Matched a toolchain/native-runtime substring.
    Toolchain,
    /// Exact name on the conda-only skip list.
    CondaOnly,
    /// The interpreter itself.
    Interpreter,
    /// System certificate store.
    Certificates,
    /// Bare name without a version field.
    Unversioned,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipReason::Toolchain => "toolchain package",
            SkipReason::CondaOnly => "conda-only package",
            SkipReason::Interpreter => "python interpreter",
            SkipReason::Certificates => "system certificates",
            SkipReason::Unversioned => "unversioned spec",
        };
        f.write_str(label)
    }
}

/// Outcome of classifying one conda spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Emit this requirement line.
    Requirement(String),
    /// Drop the spec.
    Skip(SkipReason),
}

/// Classifies a single conda spec string.
///
/// Rule order matters and is fixed: substring disallow list over the
/// whole line, then the exact-name skip list, then renames (which
/// replace the line wholesale, input version ignored), then the
/// interpreter, then the versioned passthrough with its certificate
/// filter. A bare name that survives everything above is dropped, not
/// forwarded.
pub fn classify_spec(spec: &str) -> Disposition {
    if rules::is_disallowed(spec) {
        return Disposition::Skip(SkipReason::Toolchain);
    }

    let fields = SpecFields::parse(spec);

    if rules::is_skipped_name(fields.name) {
        return Disposition::Skip(SkipReason::CondaOnly);
    }
    if let Some(pinned) = rules::rename_for(fields.name) {
        return Disposition::Requirement(pinned.to_string());
    }
    if fields.name == "python" {
        return Disposition::Skip(SkipReason::Interpreter);
    }
    if !fields.is_versioned() {
        return Disposition::Skip(SkipReason::Unversioned);
    }
    if rules::is_cert_name(fields.name) {
        return Disposition::Skip(SkipReason::Certificates);
    }

    Disposition::Requirement(fields.to_pip_line())
}

/// Converts a parsed environment into a grouped requirements document.
pub fn convert_environment(env: &CondaEnvironment) -> RequirementsDoc {
    let mut doc = RequirementsDoc::new();
    let mut skipped = 0usize;

    for spec in env.conda_specs() {
        match classify_spec(spec) {
            Disposition::Requirement(line) => doc.push_line(line),
            Disposition::Skip(reason) => {
                skipped += 1;
                debug!(spec, %reason, "dropped conda spec");
            }
        }
    }

    for pkg in env.pip_specs() {
        doc.push_line(pkg.to_string());
    }

    debug!(kept = doc.len(), skipped, "conversion finished");
    doc
}
