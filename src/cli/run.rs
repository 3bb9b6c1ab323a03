use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, config_links::config_links, init::init, links::links,
        unused_assets::unused_assets,
    },
};
use anyhow::Result;

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the report location and finding count
/// - `Err` if the command fails (e.g., missing content root, unreadable file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::ConfigLinks(cmd)) => config_links(cmd),
        Some(Command::Links(cmd)) => links(cmd),
        Some(Command::UnusedAssets(cmd)) => unused_assets(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
