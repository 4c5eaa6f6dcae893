//! Bundler host integration.
//!
//! The bundler is an external collaborator, modeled as the
//! [`BundlerHost`] capability trait: a plugin registers a build-start
//! hook and a resolve hook, and the host calls them from its own
//! scheduling loop. The host contract is that the build-start hook
//! runs to completion before any resolve call is issued.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::Result;
use regex::Regex;

use crate::compiler;
use crate::core::project::Project;
use crate::resolver::{self, Resolved};
use crate::util::config::PluginOptions;
use crate::util::logging;

/// Boxed future returned by the build-start hook.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Callback invoked by the host when its build starts.
pub type BuildStartHook = Box<dyn Fn() -> BoxFuture<Result<()>> + Send + Sync>;

/// Callback invoked by the host for each matching specifier.
///
/// `Ok(None)` means "not handled": the host applies its default
/// resolution.
pub type ResolveHook =
    Box<dyn Fn(&ResolveContext<'_>) -> Result<Option<Resolved>> + Send + Sync>;

/// Context the host passes to a resolve hook.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// The specifier as written in the importing file
    pub specifier: &'a str,

    /// The file the specifier was seen in, if any
    pub importer: Option<&'a Path>,
}

/// Capability surface a bundler host offers to plugins.
pub trait BundlerHost {
    /// Register a callback for the "build starting" lifecycle event.
    fn on_build_start(&mut self, hook: BuildStartHook);

    /// Register a resolve callback for specifiers matching `filter`.
    fn on_resolve(&mut self, filter: Regex, hook: ResolveHook);
}

/// The Gleam bundler plugin: one project, two hooks.
#[derive(Debug, Clone)]
pub struct GleamPlugin {
    project: Arc<Project>,
}

impl GleamPlugin {
    /// Initialize the plugin from embedder options.
    ///
    /// Sets up logging per the options and eagerly loads the project
    /// manifest, so misconfiguration surfaces here rather than midway
    /// through a bundle.
    pub fn new(options: PluginOptions) -> Result<Self> {
        let effective = options.effective();
        logging::init(&effective.log);

        let project = Project::new(&options)?;
        Ok(GleamPlugin {
            project: Arc::new(project),
        })
    }

    /// Get the initialized project.
    pub fn project(&self) -> &Arc<Project> {
        &self.project
    }

    /// Specifier filter for the resolve hook: relative `.gleam`
    /// imports and `hex:` registry references.
    pub fn specifier_filter() -> Regex {
        Regex::new(r"(^hex:)|(\.gleam$)").expect("valid specifier filter")
    }

    /// Register both hooks with a bundler host.
    pub fn attach(&self, host: &mut dyn BundlerHost) {
        let project = Arc::clone(&self.project);
        host.on_build_start(Box::new(move || -> BoxFuture<Result<()>> {
            let project = Arc::clone(&project);
            Box::pin(async move {
                compiler::trigger_build_if_forced(&project).await?;
                Ok(())
            })
        }));

        let project = Arc::clone(&self.project);
        host.on_resolve(
            Self::specifier_filter(),
            Box::new(move |ctx| {
                resolver::resolve(&project, ctx.specifier, ctx.importer).map_err(Into::into)
            }),
        );
    }
}
