//! Group command implementation

use clap::Args;
use envref_runtime::Env;

/// Group command arguments
#[derive(Args, Debug)]
pub struct GroupCommand {
    /// Name prefix, matched case-insensitively
    pub prefix: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl GroupCommand {
    /// Execute the group command
    pub fn execute(&self, env: &Env) -> anyhow::Result<()> {
        println!("{}", self.render(env)?);
        Ok(())
    }

    pub fn render(&self, env: &Env) -> anyhow::Result<String> {
        let group = env.get_prefixed_group(&self.prefix)?;
        let output = if self.pretty {
            serde_json::to_string_pretty(&group)?
        } else {
            serde_json::to_string(&group)?
        };
        Ok(output)
    }
}
