//! Plugin options exposed to the embedding bundler integration.
//!
//! Options deserialize from whatever configuration format the embedder
//! uses (keys are camelCase, matching the JavaScript plugin ecosystem).
//! Legacy top-level aliases (`force`, `warningsAsErrors`,
//! `noPrintProgress`, `time`) are still accepted; the nested `build.*`
//! and `log.*` forms take precedence when both are present.

use std::path::PathBuf;

use serde::Deserialize;

use crate::core::layout::DEFAULT_BIN;

/// Logging verbosity exposed through plugin options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Debug,
    Trace,
    #[default]
    None,
}

impl LogLevel {
    /// Directive string for the tracing filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::None => "off",
        }
    }
}

/// The `log` option: either a bare level string or a detailed record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogConfig {
    Level(LogLevel),
    Detailed {
        #[serde(default)]
        level: Option<LogLevel>,
        #[serde(default)]
        time: Option<bool>,
    },
}

/// The `build` options section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildSection {
    pub force: Option<bool>,
    pub no_print_progress: Option<bool>,
    pub warnings_as_errors: Option<bool>,
}

/// The `resolve` options section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolveSection {
    pub allow_outside_source: Option<bool>,
}

/// Raw plugin options as provided by the embedder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    /// Compiler executable path or name (default: `gleam`)
    pub bin: Option<String>,

    /// Project root (default: process working directory)
    pub cwd: Option<PathBuf>,

    /// Logging configuration
    pub log: Option<LogConfig>,

    /// Compiler invocation settings
    pub build: Option<BuildSection>,

    /// Resolution policy settings
    pub resolve: Option<ResolveSection>,

    // Legacy top-level aliases, kept for older embedder configs.
    pub force: Option<bool>,
    pub warnings_as_errors: Option<bool>,
    pub no_print_progress: Option<bool>,
    pub time: Option<bool>,
}

/// Effective compiler invocation settings, aliases folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Run the compiler on the build-start hook
    pub force: bool,

    /// Pass `--no-print-progress` to the compiler
    pub no_print_progress: bool,

    /// Pass `--warnings-as-errors` to the compiler
    pub warnings_as_errors: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            force: false,
            no_print_progress: true,
            warnings_as_errors: false,
        }
    }
}

/// Effective resolution policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Allow normalized paths that escape the source root via `..`
    pub allow_outside_source: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            allow_outside_source: true,
        }
    }
}

/// Effective logging settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub level: LogLevel,
    pub time: bool,
}

/// Fully resolved options: every field defaulted, every alias folded.
#[derive(Debug, Clone, Default)]
pub struct EffectiveOptions {
    pub bin: String,
    pub cwd: Option<PathBuf>,
    pub log: LogOptions,
    pub build: BuildOptions,
    pub resolve: ResolveOptions,
}

impl PluginOptions {
    /// Set the compiler binary.
    pub fn with_bin(mut self, bin: impl Into<String>) -> Self {
        self.bin = Some(bin.into());
        self
    }

    /// Set the project root directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log = Some(LogConfig::Level(level));
        self
    }

    /// Force a compiler run before bundling starts.
    pub fn with_force(mut self, force: bool) -> Self {
        let mut build = self.build.take().unwrap_or_default();
        build.force = Some(force);
        self.build = Some(build);
        self
    }

    /// Fold aliases and defaults into concrete settings.
    ///
    /// Precedence: `build.*` / `log.*` over the legacy top-level
    /// aliases, and both over the built-in defaults.
    pub fn effective(&self) -> EffectiveOptions {
        let build_section = self.build.clone().unwrap_or_default();
        let build = BuildOptions {
            force: build_section.force.or(self.force).unwrap_or(false),
            no_print_progress: build_section
                .no_print_progress
                .or(self.no_print_progress)
                .unwrap_or(true),
            warnings_as_errors: build_section
                .warnings_as_errors
                .or(self.warnings_as_errors)
                .unwrap_or(false),
        };

        let (level, nested_time) = match &self.log {
            Some(LogConfig::Level(level)) => (*level, None),
            Some(LogConfig::Detailed { level, time }) => {
                (level.unwrap_or_default(), *time)
            }
            None => (LogLevel::None, None),
        };
        let log = LogOptions {
            level,
            time: nested_time.or(self.time).unwrap_or(false),
        };

        let resolve = ResolveOptions {
            allow_outside_source: self
                .resolve
                .as_ref()
                .and_then(|r| r.allow_outside_source)
                .unwrap_or(true),
        };

        EffectiveOptions {
            bin: self.bin.clone().unwrap_or_else(|| DEFAULT_BIN.to_string()),
            cwd: self.cwd.clone(),
            log,
            build,
            resolve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_defaults() {
        let effective = PluginOptions::default().effective();

        assert_eq!(effective.bin, "gleam");
        assert_eq!(effective.cwd, None);
        assert_eq!(effective.log.level, LogLevel::None);
        assert!(!effective.log.time);
        assert!(!effective.build.force);
        assert!(effective.build.no_print_progress);
        assert!(!effective.build.warnings_as_errors);
        assert!(effective.resolve.allow_outside_source);
    }

    #[test]
    fn test_legacy_aliases_fold() {
        let options: PluginOptions = toml::from_str(
            r#"
force = true
warningsAsErrors = true
noPrintProgress = false
time = true
"#,
        )
        .unwrap();

        let effective = options.effective();
        assert!(effective.build.force);
        assert!(effective.build.warnings_as_errors);
        assert!(!effective.build.no_print_progress);
        assert!(effective.log.time);
    }

    #[test]
    fn test_nested_sections_win_over_aliases() {
        let options: PluginOptions = toml::from_str(
            r#"
force = true
noPrintProgress = false

[build]
force = false
noPrintProgress = true
"#,
        )
        .unwrap();

        let effective = options.effective();
        assert!(!effective.build.force);
        assert!(effective.build.no_print_progress);
    }

    #[test]
    fn test_log_level_string_form() {
        let options: PluginOptions = toml::from_str("log = \"debug\"\n").unwrap();

        let effective = options.effective();
        assert_eq!(effective.log.level, LogLevel::Debug);
        assert!(!effective.log.time);
    }

    #[test]
    fn test_log_detailed_form() {
        let options: PluginOptions = toml::from_str(
            r#"
[log]
level = "trace"
time = true
"#,
        )
        .unwrap();

        let effective = options.effective();
        assert_eq!(effective.log.level, LogLevel::Trace);
        assert!(effective.log.time);
    }

    #[test]
    fn test_resolve_section() {
        let options: PluginOptions = toml::from_str(
            r#"
[resolve]
allowOutsideSource = false
"#,
        )
        .unwrap();

        assert!(!options.effective().resolve.allow_outside_source);
    }

    #[test]
    fn test_builder_setters() {
        let effective = PluginOptions::default()
            .with_bin("/opt/gleam/bin/gleam")
            .with_cwd("/p")
            .with_log_level(LogLevel::Info)
            .with_force(true)
            .effective();

        assert_eq!(effective.bin, "/opt/gleam/bin/gleam");
        assert_eq!(effective.cwd, Some(PathBuf::from("/p")));
        assert_eq!(effective.log.level, LogLevel::Info);
        assert!(effective.build.force);
    }
}
