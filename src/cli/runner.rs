use crate::{
    cli::Args,
    config::Options,
    error::Result,
    process::{CommandRunner, SystemRunner},
    prompt::{DialoguerPrompter, PromptFlow, PromptProvider},
    scaffold, tailwind, ui,
};

/// Main CLI runner that orchestrates the entire generation workflow.
pub struct Runner<P: PromptProvider, R: CommandRunner> {
    options: Options,
    prompter: P,
    command_runner: R,
}

impl<P: PromptProvider, R: CommandRunner> Runner<P, R> {
    pub fn new(options: Options, prompter: P, command_runner: R) -> Self {
        Self { options, prompter, command_runner }
    }

    /// Executes the complete workflow: prompt flow, scaffold stage,
    /// Tailwind stage.
    ///
    /// A scaffold failure is reported but does not stop the run; the
    /// Tailwind stage aborts it. Errors propagate to the caller, which
    /// decides the exit code.
    pub fn run(self) -> Result<()> {
        let flow = PromptFlow::new(self.prompter);
        let config = flow.resolve(self.options)?;
        log::debug!("Resolved configuration: {config:?}");

        println!("{}", ui::heading(" Create Vite App "));

        if let Err(err) = scaffold::generate(&config, &self.command_runner) {
            eprintln!("{}", ui::error(&format!("Error creating the Vite app: {err}")));
        }

        tailwind::setup(&config, &self.command_runner)?;

        println!("{}", ui::success("Your project has been created!"));
        Ok(())
    }
}

/// Runs the workflow with the terminal prompter and the system runner.
pub fn run(args: Args) -> Result<()> {
    let options = args.to_options()?;
    Runner::new(options, DialoguerPrompter::new(), SystemRunner).run()
}
