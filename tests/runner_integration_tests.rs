//! End-to-end workflow tests with fake command runners
//!
//! The command-runner seam records or fails the commands the stages would
//! spawn, so the full sequencing can be asserted without touching any real
//! package manager.

use std::cell::RefCell;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use vitegen::cli::Runner;
use vitegen::commands::CommandSpec;
use vitegen::config::{Options, PackageManager, Variant};
use vitegen::error::{Error, Result};
use vitegen::process::CommandRunner;
use vitegen::prompt::{ScriptedPrompter, TAILWIND_PROMPT, VARIANT_PROMPT};

/// Records every command it is asked to run and reports success.
#[derive(Default)]
struct RecordingRunner {
    commands: RefCell<Vec<(String, PathBuf)>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec, current_dir: &Path) -> Result<()> {
        self.commands.borrow_mut().push((spec.to_string(), current_dir.to_path_buf()));
        Ok(())
    }
}

/// Records every command and fails each one with a non-zero status.
#[derive(Default)]
struct FailingRunner {
    commands: RefCell<Vec<String>>,
}

impl CommandRunner for FailingRunner {
    fn run(&self, spec: &CommandSpec, _current_dir: &Path) -> Result<()> {
        self.commands.borrow_mut().push(spec.to_string());
        Err(Error::CommandFailed {
            command: spec.to_string(),
            status: ExitStatus::from_raw(256),
        })
    }
}

fn options(
    package_manager: PackageManager,
    tailwind: Option<bool>,
    path: PathBuf,
) -> Options {
    Options {
        app_name: Some("demo".to_string()),
        path,
        package_manager: Some(package_manager),
        tailwind,
        variant: None,
    }
}

#[test]
fn scaffolds_with_npm_and_skips_tailwind_when_not_confirmed() {
    let prompter = ScriptedPrompter::new()
        .with_choice_response(VARIANT_PROMPT, 0)
        .with_confirmation_response(TAILWIND_PROMPT, false);
    let runner = RecordingRunner::default();

    Runner::new(
        options(PackageManager::Npm, None, PathBuf::from("/work")),
        prompter,
        &runner,
    )
    .run()
    .unwrap();

    let commands = runner.commands.borrow();
    assert_eq!(
        *commands,
        vec![(
            "npm create vite@latest demo -- --template react-ts".to_string(),
            PathBuf::from("/work"),
        )]
    );
}

#[test]
fn runs_the_full_tailwind_sequence_with_yarn() {
    let temp = tempfile::tempdir().unwrap();
    let prompter = ScriptedPrompter::new().with_choice_response(VARIANT_PROMPT, 0);
    let runner = RecordingRunner::default();

    Runner::new(
        options(PackageManager::Yarn, Some(true), temp.path().to_path_buf()),
        prompter,
        &runner,
    )
    .run()
    .unwrap();

    let project_dir = temp.path().join("demo");
    let commands = runner.commands.borrow();
    assert_eq!(
        *commands,
        vec![
            (
                "yarn create vite@latest demo --template react-ts".to_string(),
                temp.path().to_path_buf(),
            ),
            (
                "yarn add -D tailwindcss postcss autoprefixer".to_string(),
                project_dir.clone(),
            ),
            ("yarn tailwindcss init -p".to_string(), project_dir.clone()),
        ]
    );

    let config = std::fs::read_to_string(project_dir.join("tailwind.config.js")).unwrap();
    assert!(config.contains("tailwindcss"));
    let stylesheet =
        std::fs::read_to_string(project_dir.join("src").join("index.css")).unwrap();
    assert!(stylesheet.contains("@tailwind base;"));
}

#[test]
fn scaffold_failure_does_not_stop_the_run() {
    let prompter = ScriptedPrompter::new().with_choice_response(VARIANT_PROMPT, 0);
    let runner = FailingRunner::default();

    // The scaffold command fails; with the Tailwind stage disabled the run
    // still finishes successfully.
    Runner::new(
        options(PackageManager::Npm, Some(false), PathBuf::from("/work")),
        prompter,
        &runner,
    )
    .run()
    .unwrap();

    assert_eq!(runner.commands.borrow().len(), 1);
}

#[test]
fn tailwind_failure_stops_the_run() {
    let prompter = ScriptedPrompter::new().with_choice_response(VARIANT_PROMPT, 0);
    let runner = FailingRunner::default();

    let err = Runner::new(
        options(PackageManager::Yarn, Some(true), PathBuf::from("/work")),
        prompter,
        &runner,
    )
    .run()
    .unwrap_err();

    match err {
        Error::CommandFailed { command, .. } => {
            assert_eq!(command, "yarn add -D tailwindcss postcss autoprefixer");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Scaffold was attempted and reported, then the Tailwind install failed.
    assert_eq!(
        *runner.commands.borrow(),
        vec![
            "yarn create vite@latest demo --template react-ts".to_string(),
            "yarn add -D tailwindcss postcss autoprefixer".to_string(),
        ]
    );
}

#[test]
fn cancellation_during_prompts_runs_no_commands() {
    let prompter = ScriptedPrompter::new().with_cancellation(VARIANT_PROMPT);
    let runner = RecordingRunner::default();

    let err = Runner::new(
        options(PackageManager::Npm, Some(false), PathBuf::from("/work")),
        prompter,
        &runner,
    )
    .run()
    .unwrap_err();

    assert!(matches!(err, Error::Cancelled));
    assert!(runner.commands.borrow().is_empty());
}
