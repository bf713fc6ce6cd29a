use std::collections::BTreeMap;
use std::path::PathBuf;

use svgpatch::{PatchOptions, api};

use super::args::CliArgs;
use super::errors::AppError;

type BoxError = Box<dyn std::error::Error>;

/// A command handler receives the input paths and the raw options bag.
pub type CommandHandler = Box<dyn Fn(&[PathBuf], &PatchOptions) -> Result<(), BoxError>>;

/// Explicit command table, built at startup and passed around by
/// reference. Handlers get the options unexpanded so each command is
/// free to define its own presets.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandHandler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, handler: CommandHandler) {
        self.commands.insert(name, handler);
    }

    pub fn dispatch(
        &self,
        name: &str,
        inputs: &[PathBuf],
        options: &PatchOptions,
    ) -> Result<(), BoxError> {
        match self.commands.get(name) {
            Some(handler) => handler(inputs, options),
            None => Err(AppError::UnknownCommand {
                name: name.to_string(),
                available: self.commands.keys().copied().collect::<Vec<_>>().join(", "),
            }
            .into()),
        }
    }
}

/// The registry shipped with the binary: just `patch` for now.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(
        "patch",
        Box::new(|inputs, options| {
            let mut stdout = std::io::stdout().lock();
            api::patch_paths_to(inputs, options, &mut stdout)?;
            Ok(())
        }),
    );
    registry
}

pub fn run(args: CliArgs) -> Result<(), BoxError> {
    // Documents own stdout; diagnostics go to stderr. WARN stays on so
    // the single-input "cannot load" diagnostic is visible without --log.
    tracing_subscriber::fmt()
        .with_max_level(if args.log {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let options = args.to_options();
    default_registry().dispatch(&args.command, &args.inputs, &options)
}
