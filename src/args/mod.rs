//! Launch argument handling for the desktop modeler.
//!
//! ```text
//! Raw argv → Tokenize → Resolve files → Assemble overrides → Merge → LaunchPlan
//! ```
//!
//! Each stage is a plain function or builder that can be unit-tested on its own.
//! The file system is reached only through [`FileProbe`].

mod assembler;
mod merge;
mod pipeline;
mod probe;
mod resolver;
mod tokenizer;

pub use assembler::FlagAssembler;
pub use merge::append_args;
pub use pipeline::{build_launch_plan, LaunchPlan};
pub use probe::{FileKind, FileProbe, FsProbe};
pub use resolver::{parse, ArgumentResolver, ResolvedArgs, SkipReason, SkippedArg};
pub use tokenizer::{tokenize, FlagSet, FlagValue, ParsedArguments};

/// Tracing target for launch argument diagnostics.
pub const LOG_TARGET: &str = "modeler_launch::cli";
