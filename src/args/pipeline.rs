//! Pipeline — ties resolution and flag merging together.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::args::assembler::FlagAssembler;
use crate::args::merge::append_args;
use crate::args::probe::FileProbe;
use crate::args::resolver::{ArgumentResolver, SkippedArg};
use crate::args::tokenizer::FlagSet;
use crate::args::LOG_TARGET;

/// Everything the desktop shell needs to start.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchPlan {
    /// Files to open, absolute, in argument order.
    pub files: Vec<PathBuf>,
    /// Flags as parsed from the command line.
    pub flags: FlagSet,
    /// Configured flags merged with command-line and extra flags.
    pub effective_flags: Vec<String>,
    /// Positional arguments that were dropped.
    pub skipped: Vec<SkippedArg>,
}

/// Build a launch plan from raw arguments.
///
/// # Arguments
///
/// * `resolver` - Resolver used for file arguments
/// * `raw_args` - Launch argv, including the leading program token
/// * `cwd` - Directory relative file arguments are resolved against
/// * `base_flags` - Configured flags, lowest precedence
/// * `extra_flags` - Flags applied after the command-line flags
pub fn build_launch_plan<P, I>(
    resolver: &ArgumentResolver<P>,
    raw_args: I,
    cwd: &Path,
    base_flags: &[String],
    extra_flags: Vec<String>,
) -> LaunchPlan
where
    P: FileProbe,
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    // Stage 1: Resolve files and flags
    let resolved = resolver.parse(raw_args, cwd);

    // Stage 2: Assemble overrides
    let overrides = FlagAssembler::from_flag_tokens(&resolved.flag_tokens)
        .with_extra(extra_flags)
        .build();

    // Stage 3: Merge on top of configured flags
    let effective_flags = append_args(base_flags, overrides.as_slice());
    debug!(target: LOG_TARGET, ?effective_flags, "effective flags");

    LaunchPlan {
        files: resolved.files,
        flags: resolved.flags,
        effective_flags,
        skipped: resolved.skipped,
    }
}
