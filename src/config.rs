use crate::error::{Error, Result};
use clap::ValueEnum;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Package manager used to scaffold the project and install dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Every supported package manager, in selection-menu order.
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// Human-facing label shown in the selection prompt.
    pub fn label(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "Yarn",
            PackageManager::Pnpm => "Pnpm",
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(Error::ValidationError(format!(
                "unrecognized package manager: '{other}'"
            ))),
        }
    }
}

/// Language and compiler combination for the generated project.
///
/// `Display` renders the Vite template identifier passed to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    React,
    ReactTs,
    ReactSwc,
    ReactSwcTs,
}

impl Variant {
    /// Every supported variant, in selection-menu order.
    pub const MENU: [Variant; 4] =
        [Variant::ReactTs, Variant::ReactSwcTs, Variant::React, Variant::ReactSwc];

    /// Human-facing label shown in the selection prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::React => "Javascript",
            Variant::ReactTs => "Typescript",
            Variant::ReactSwc => "Javascript + SWC",
            Variant::ReactSwcTs => "Typescript + SWC",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Variant::React => "react",
            Variant::ReactTs => "react-ts",
            Variant::ReactSwc => "react-swc",
            Variant::ReactSwcTs => "react-swc-ts",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "react" => Ok(Variant::React),
            "react-ts" => Ok(Variant::ReactTs),
            "react-swc" => Ok(Variant::ReactSwc),
            "react-swc-ts" => Ok(Variant::ReactSwcTs),
            other => {
                Err(Error::ValidationError(format!("unrecognized variant: '{other}'")))
            }
        }
    }
}

/// Partial configuration collected from the command line.
///
/// Missing fields are filled in by the prompt flow.
#[derive(Debug, Clone)]
pub struct Options {
    pub app_name: Option<String>,
    pub path: PathBuf,
    pub package_manager: Option<PackageManager>,
    pub tailwind: Option<bool>,
    pub variant: Option<Variant>,
}

/// Fully resolved configuration for one generation run.
///
/// Built once by the prompt flow and never mutated afterwards. The
/// application name is guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub path: PathBuf,
    pub package_manager: PackageManager,
    pub tailwind: bool,
    pub variant: Variant,
}

impl Config {
    /// Directory of the generated project, under the target path.
    pub fn project_dir(&self) -> PathBuf {
        self.path.join(&self.app_name)
    }
}
