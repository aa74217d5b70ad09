//! Construction of package-manager command lines.
//!
//! Commands are built as structured argument vectors and handed to the
//! process layer without ever passing through a shell, so package specs and
//! template identifiers are never re-parsed or split.

use crate::config::{PackageManager, Variant};
use std::fmt::Display;

/// A program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Builds the command that installs `packages` as dependencies.
///
/// `options` (e.g. `-D`) are placed between the install keyword and the
/// package specs, which pass through verbatim.
pub fn install_command(
    manager: PackageManager,
    packages: &[&str],
    options: &[&str],
) -> CommandSpec {
    let keyword = match manager {
        PackageManager::Npm => "install",
        PackageManager::Yarn => "add",
        PackageManager::Pnpm => "install",
    };
    let args = std::iter::once(keyword)
        .chain(options.iter().copied())
        .chain(packages.iter().copied());
    CommandSpec::new(manager.to_string(), args)
}

/// Builds the command that runs a package binary without installing it.
///
/// npm proxies through `npx`, yarn invokes the binary directly, and pnpm
/// uses its `dlx` keyword.
pub fn exec_command(
    manager: PackageManager,
    command: &[&str],
    options: &[&str],
) -> CommandSpec {
    let tail = command.iter().chain(options.iter()).copied();
    match manager {
        PackageManager::Npm => CommandSpec::new("npx", tail),
        PackageManager::Yarn => CommandSpec::new("yarn", tail),
        PackageManager::Pnpm => {
            CommandSpec::new("pnpm", std::iter::once("dlx").chain(tail))
        }
    }
}

/// Builds the exact `create vite@latest` invocation for the chosen manager.
///
/// npm needs the `--` separator to forward `--template` to the generator;
/// yarn and pnpm pass it through directly.
pub fn scaffold_command(
    manager: PackageManager,
    app_name: &str,
    variant: Variant,
) -> CommandSpec {
    let template = variant.to_string();
    match manager {
        PackageManager::Npm => CommandSpec::new(
            "npm",
            ["create", "vite@latest", app_name, "--", "--template", template.as_str()],
        ),
        PackageManager::Yarn => CommandSpec::new(
            "yarn",
            ["create", "vite@latest", app_name, "--template", template.as_str()],
        ),
        PackageManager::Pnpm => CommandSpec::new(
            "pnpm",
            ["create", "vite@latest", app_name, "--template", template.as_str()],
        ),
    }
}
