use std::fmt;

/// Logging severity passed through to the SBOM engine.
///
/// Levels are ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Most verbose reasonable default; used whenever no recognizable
    /// verbosity is supplied.
    #[default]
    Verbose,
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

/// Result of resolving a free-form verbosity token.
///
/// Resolution is total: it always yields a valid level. An unrecognized
/// non-empty token degrades to the default and carries a warning for the
/// caller's diagnostic channel instead of failing the request.
#[derive(Debug, Clone)]
pub struct VerbosityResolution {
    pub level: Verbosity,
    pub warning: Option<String>,
}

impl Verbosity {
    /// Resolves a user-supplied verbosity token to a severity level.
    ///
    /// Matching is case-insensitive and tolerates surrounding whitespace.
    /// The accepted vocabulary covers both the event-level spelling used by
    /// build tasks (CRITICAL, INFORMATIONAL, LOGALWAYS, ...) and the native
    /// level names (Fatal, Information, Debug, ...).
    pub fn resolve(input: Option<&str>) -> VerbosityResolution {
        let token = input.map(str::trim).unwrap_or("");
        if token.is_empty() {
            return VerbosityResolution {
                level: Verbosity::default(),
                warning: None,
            };
        }

        match token.to_lowercase().as_str() {
            "critical" | "fatal" => VerbosityResolution {
                level: Verbosity::Fatal,
                warning: None,
            },
            "error" => VerbosityResolution {
                level: Verbosity::Error,
                warning: None,
            },
            "warning" => VerbosityResolution {
                level: Verbosity::Warning,
                warning: None,
            },
            "informational" | "information" => VerbosityResolution {
                level: Verbosity::Information,
                warning: None,
            },
            "debug" => VerbosityResolution {
                level: Verbosity::Debug,
                warning: None,
            },
            "logalways" | "verbose" => VerbosityResolution {
                level: Verbosity::Verbose,
                warning: None,
            },
            _ => VerbosityResolution {
                level: Verbosity::default(),
                warning: Some(format!(
                    "Unrecognized verbosity '{}'. Falling back to \"{}\"",
                    token,
                    Verbosity::default()
                )),
            },
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Verbose => "Verbose",
            Verbosity::Debug => "Debug",
            Verbosity::Information => "Information",
            Verbosity::Warning => "Warning",
            Verbosity::Error => "Error",
            Verbosity::Fatal => "Fatal",
        };
        write!(f, "{}", name)
    }
}
