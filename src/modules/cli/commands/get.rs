//! Get command implementation

use clap::Args;
use envref_core::coerce;
use envref_runtime::Env;
use envref_types::TypedValue;

/// Get command arguments
#[derive(Args, Debug)]
pub struct GetCommand {
    /// Variable name
    pub name: String,

    /// Value printed when the variable is missing or blank
    #[arg(short, long)]
    pub default: Option<String>,

    /// Skip JSON and list decoding
    #[arg(long)]
    pub raw: bool,
}

impl GetCommand {
    /// Execute the get command
    pub fn execute(&self, env: &Env) -> anyhow::Result<()> {
        println!("{}", self.render(env)?);
        Ok(())
    }

    /// Typed value as JSON
    pub fn render(&self, env: &Env) -> anyhow::Result<String> {
        let default = self
            .default
            .as_deref()
            .map_or(TypedValue::Null, |d| coerce::scalar(Some(d), TypedValue::Null));

        let value = if self.raw {
            env.get_env(&self.name, default)
        } else {
            env.get(&self.name, default)
        };

        Ok(serde_json::to_string(&value)?)
    }
}
