//! Resolver — raw launch argv → existing files and parsed flags.
//!
//! Resolution is best-effort: bad entries are logged and dropped, never
//! returned as errors, so a mistyped file argument cannot block startup.

use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::args::probe::{FileKind, FileProbe, FsProbe};
use crate::args::tokenizer::{tokenize, FlagSet};
use crate::args::LOG_TARGET;

/// Why a positional argument did not make it into the file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The token is not valid Unicode.
    NotUtf8,
    Directory,
    /// Exists, but is a symlink, socket, device or similar.
    NotRegularFile,
    /// Missing or inaccessible; carries the I/O error message.
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotUtf8 => write!(f, "not a valid file argument"),
            SkipReason::Directory => write!(f, "is a directory"),
            SkipReason::NotRegularFile => write!(f, "not a regular file"),
            SkipReason::Unreadable(msg) => write!(f, "{}", msg),
        }
    }
}

/// A positional argument dropped during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArg {
    /// The original token (lossily converted if it was not Unicode).
    pub token: String,
    /// Absolute candidate path, if resolution got that far.
    pub path: Option<PathBuf>,
    pub reason: SkipReason,
}

/// Output of [`ArgumentResolver::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArgs {
    /// Absolute paths of existing regular files, in argument order.
    pub files: Vec<PathBuf>,
    pub flags: FlagSet,
    /// Flag tokens as typed, in command-line order.
    pub flag_tokens: Vec<String>,
    /// Everything dropped from `files`, in argument order.
    pub skipped: Vec<SkippedArg>,
}

type UnresolvedHook = Box<dyn Fn(&SkippedArg)>;

/// Splits launch arguments into files and flags.
pub struct ArgumentResolver<P = FsProbe> {
    probe: P,
    on_unresolved: Option<UnresolvedHook>,
}

impl<P: fmt::Debug> fmt::Debug for ArgumentResolver<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentResolver")
            .field("probe", &self.probe)
            .field("on_unresolved", &self.on_unresolved.is_some())
            .finish()
    }
}

impl ArgumentResolver<FsProbe> {
    /// Resolver backed by the real file system.
    pub fn new() -> Self {
        Self::with_probe(FsProbe)
    }
}

impl Default for ArgumentResolver<FsProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FileProbe> ArgumentResolver<P> {
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            on_unresolved: None,
        }
    }

    /// Called once for every dropped positional argument, after it is logged.
    pub fn on_unresolved(mut self, hook: impl Fn(&SkippedArg) + 'static) -> Self {
        self.on_unresolved = Some(Box::new(hook));
        self
    }

    /// Parse `args` (the first token is the program and is skipped) and
    /// resolve positional arguments against `cwd`.
    pub fn parse<I>(&self, args: I, cwd: &Path) -> ResolvedArgs
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        info!(target: LOG_TARGET, ?args, cwd = %cwd.display(), "parsing launch arguments");

        let parsed = tokenize(args.into_iter().skip(1));
        let base = absolute_base(cwd);

        let mut resolved = ResolvedArgs {
            flags: parsed.flags,
            flag_tokens: parsed.flag_tokens,
            ..ResolvedArgs::default()
        };

        for token in parsed.positional {
            match self.resolve_one(token, &base) {
                Ok(path) => resolved.files.push(path),
                Err(skipped) => {
                    if let Some(hook) = &self.on_unresolved {
                        hook(&skipped);
                    }
                    resolved.skipped.push(skipped);
                }
            }
        }

        debug!(
            target: LOG_TARGET,
            files = resolved.files.len(),
            flags = resolved.flags.len(),
            skipped = resolved.skipped.len(),
            "launch arguments resolved"
        );
        resolved
    }

    fn resolve_one(&self, token: OsString, base: &Path) -> Result<PathBuf, SkippedArg> {
        let text = match token.into_string() {
            Ok(text) => text,
            Err(raw) => {
                let token = raw.to_string_lossy().into_owned();
                info!(target: LOG_TARGET, %token, "skipping non-file arg");
                return Err(SkippedArg {
                    token,
                    path: None,
                    reason: SkipReason::NotUtf8,
                });
            }
        };

        let path = normalize(&base.join(&text));

        let reason = match self.probe.probe(&path) {
            Ok(FileKind::File) => return Ok(path),
            Ok(FileKind::Directory) => {
                info!(target: LOG_TARGET, path = %path.display(), "skipping directory");
                SkipReason::Directory
            }
            Ok(FileKind::Other) => {
                info!(target: LOG_TARGET, path = %path.display(), "skipping non-regular file");
                SkipReason::NotRegularFile
            }
            Err(e) => {
                info!(target: LOG_TARGET, path = %path.display(), error = %e, "skipping unreadable path");
                SkipReason::Unreadable(e.to_string())
            }
        };

        Err(SkippedArg {
            token: text,
            path: Some(path),
            reason,
        })
    }
}

/// Parse with a file-system backed resolver.
pub fn parse<I>(args: I, cwd: &Path) -> ResolvedArgs
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    ArgumentResolver::new().parse(args, cwd)
}

fn absolute_base(cwd: &Path) -> PathBuf {
    if cwd.is_absolute() {
        return normalize(cwd);
    }
    match std::env::current_dir() {
        Ok(dir) => normalize(&dir.join(cwd)),
        Err(_) => normalize(cwd),
    }
}

/// Fold `.` and `..` lexically. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
