//! Engine command line and exit status

use std::ffi::OsString;
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Number of cores the engine may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cores {
    /// Use every available core
    #[default]
    All,
    /// Use at most this many cores
    Limit(NonZeroU32),
}

impl From<Option<NonZeroU32>> for Cores {
    fn from(cores: Option<NonZeroU32>) -> Self {
        cores.map_or(Cores::All, Cores::Limit)
    }
}

impl fmt::Display for Cores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cores::All => f.write_str("all"),
            Cores::Limit(n) => write!(f, "{}", n),
        }
    }
}

/// A single engine invocation
///
/// Arguments are laid out as `--cores=<N|all> -p -s <entry point>` followed by
/// the forwarded tokens in the order they were received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    program: String,
    cores: Cores,
    entry_point: PathBuf,
    forwarded: Vec<OsString>,
    working_dir: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new(
        program: impl Into<String>,
        cores: Cores,
        entry_point: impl Into<PathBuf>,
        forwarded: Vec<OsString>,
    ) -> Self {
        Self {
            program: program.into(),
            cores,
            entry_point: entry_point.into(),
            forwarded,
            working_dir: None,
        }
    }

    /// Run the engine from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn cores(&self) -> Cores {
        self.cores
    }

    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    pub fn forwarded(&self) -> &[OsString] {
        &self.forwarded
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Arguments passed to the program, excluding the program itself
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![
            OsString::from(format!("--cores={}", self.cores)),
            OsString::from("-p"),
            OsString::from("-s"),
            self.entry_point.clone().into_os_string(),
        ];
        args.extend(self.forwarded.iter().cloned());
        args
    }

    /// Space-separated command line, for logging
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args().iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status of the engine, propagated as our own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome(i32);

impl ExitOutcome {
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn code(&self) -> i32 {
        self.0
    }

    pub fn success(&self) -> bool {
        self.0 == 0
    }
}

impl From<ExitStatus> for ExitOutcome {
    /// A child terminated by signal `S` maps to `128 + S`, as shells report it.
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self(128 + signal);
            }
        }

        Self(1)
    }
}
