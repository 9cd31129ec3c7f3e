//! @acp:module "Command Command"
//! @acp:summary "Print the claude-sparc.sh invocation"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;

use super::overrides::ConfigOverrides;
use crate::command::compose_command;

/// Options for the command command
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub overrides: ConfigOverrides,
}

/// Execute the command command
pub fn execute_command(options: CommandOptions) -> Result<()> {
    let config = options.overrides.resolve()?;
    println!("{}", compose_command(&config));
    Ok(())
}
