//! End-to-end plugin tests against a mock bundler host and a stub
//! compiler binary.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use regex::Regex;
use tempfile::TempDir;

use gleam_resolve::host::{BuildStartHook, ResolveHook};
use gleam_resolve::{BundlerHost, GleamPlugin, PluginOptions, ResolveContext, Resolved};

/// Minimal in-memory bundler host: stores hooks, dispatches like a
/// real host would (filter first, then callback, first handler wins).
#[derive(Default)]
struct MockHost {
    build_start: Vec<BuildStartHook>,
    resolvers: Vec<(Regex, ResolveHook)>,
}

impl BundlerHost for MockHost {
    fn on_build_start(&mut self, hook: BuildStartHook) {
        self.build_start.push(hook);
    }

    fn on_resolve(&mut self, filter: Regex, hook: ResolveHook) {
        self.resolvers.push((filter, hook));
    }
}

impl MockHost {
    async fn start_build(&self) -> anyhow::Result<()> {
        for hook in &self.build_start {
            hook().await?;
        }
        Ok(())
    }

    fn resolve(
        &self,
        specifier: &str,
        importer: Option<&Path>,
    ) -> anyhow::Result<Option<Resolved>> {
        for (filter, hook) in &self.resolvers {
            if !filter.is_match(specifier) {
                continue;
            }
            if let Some(resolved) = hook(&ResolveContext { specifier, importer })? {
                return Ok(Some(resolved));
            }
        }
        Ok(None)
    }
}

/// A Gleam project fixture with a stub compiler that records its
/// invocations.
struct Fixture {
    tmp: TempDir,
    bin: PathBuf,
}

impl Fixture {
    fn new(name: &str, compiler_exit_code: i32) -> Self {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("gleam.toml"),
            format!("name = \"{}\"\ntarget = \"javascript\"\n", name),
        )
        .unwrap();
        std::fs::create_dir_all(tmp.path().join("src/app")).unwrap();
        std::fs::write(tmp.path().join("src/main.gleam"), "pub fn main() { 0 }\n").unwrap();

        let bin = tmp.path().join("gleam-stub");
        std::fs::write(
            &bin,
            format!(
                "#!/bin/sh\necho \"$@\" >> {}\necho \"compile error\" >&2\nexit {}\n",
                tmp.path().join("invocations.log").display(),
                compiler_exit_code
            ),
        )
        .unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

        Fixture { tmp, bin }
    }

    fn options(&self) -> PluginOptions {
        PluginOptions::default()
            .with_cwd(self.tmp.path())
            .with_bin(self.bin.to_string_lossy())
    }

    fn root(&self) -> &Path {
        self.tmp.path()
    }

    fn invocations(&self) -> usize {
        std::fs::read_to_string(self.tmp.path().join("invocations.log"))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }
}

#[tokio::test]
async fn forced_build_runs_compiler_once_then_resolves() {
    let fixture = Fixture::new("my_app", 0);
    let plugin = GleamPlugin::new(fixture.options().with_force(true)).unwrap();

    let mut host = MockHost::default();
    plugin.attach(&mut host);

    host.start_build().await.unwrap();
    assert_eq!(fixture.invocations(), 1);

    let importer = fixture.root().join("src/app/page.gleam");
    let resolved = host
        .resolve("./widget.gleam", Some(&importer))
        .unwrap()
        .unwrap();

    assert_eq!(
        resolved.path,
        fixture.root().join("build/my_app/app/widget.mjs")
    );
}

#[tokio::test]
async fn unforced_build_never_runs_compiler() {
    let fixture = Fixture::new("my_app", 0);
    let plugin = GleamPlugin::new(fixture.options()).unwrap();

    let mut host = MockHost::default();
    plugin.attach(&mut host);

    host.start_build().await.unwrap();
    assert_eq!(fixture.invocations(), 0);
}

#[tokio::test]
async fn failed_compiler_aborts_build_start_with_diagnostics() {
    let fixture = Fixture::new("my_app", 1);
    let plugin = GleamPlugin::new(fixture.options().with_force(true)).unwrap();

    let mut host = MockHost::default();
    plugin.attach(&mut host);

    let err = host.start_build().await.unwrap_err();
    assert!(err.to_string().contains("compile error"));
}

#[tokio::test]
async fn hex_specifiers_resolve_through_the_host() {
    let fixture = Fixture::new("my_app", 0);
    let plugin = GleamPlugin::new(fixture.options()).unwrap();

    let mut host = MockHost::default();
    plugin.attach(&mut host);

    let importer = fixture.root().join("src/main.gleam");
    let resolved = host
        .resolve("hex:gleam_stdlib/gleam/list", Some(&importer))
        .unwrap()
        .unwrap();

    assert_eq!(
        resolved.path,
        fixture
            .root()
            .join("build/my_app/gleam_stdlib/gleam/list.mjs")
    );
}

#[tokio::test]
async fn unrelated_specifiers_fall_through_to_default_resolution() {
    let fixture = Fixture::new("my_app", 0);
    let plugin = GleamPlugin::new(fixture.options()).unwrap();

    let mut host = MockHost::default();
    plugin.attach(&mut host);

    let importer = fixture.root().join("src/main.gleam");

    // Filter never matches, so the hook is not even consulted.
    assert!(host.resolve("./styles.css", Some(&importer)).unwrap().is_none());
    assert!(host.resolve("react", Some(&importer)).unwrap().is_none());

    // Entry resolution: no importer, hook runs but passes through.
    assert!(host.resolve("./main.gleam", None).unwrap().is_none());
}
