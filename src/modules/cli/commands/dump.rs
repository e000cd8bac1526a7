//! Dump command implementation

use clap::Args;
use envref_runtime::Env;
use envref_types::TypedValue;
use serde_json::{Map, Value};

/// Dump command arguments
#[derive(Args, Debug)]
pub struct DumpCommand {
    /// Coerce values instead of printing raw strings
    #[arg(long)]
    pub typed: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl DumpCommand {
    /// Execute the dump command
    pub fn execute(&self, env: &Env) -> anyhow::Result<()> {
        println!("{}", self.render(env)?);
        Ok(())
    }

    pub fn render(&self, env: &Env) -> anyhow::Result<String> {
        let vars: Map<String, Value> = env
            .read_all(None)
            .into_iter()
            .map(|(name, raw)| {
                let value = if self.typed {
                    env.get(&name, TypedValue::Null).to_json()
                } else {
                    Value::String(raw)
                };
                (name, value)
            })
            .collect();

        let output = if self.pretty {
            serde_json::to_string_pretty(&vars)?
        } else {
            serde_json::to_string(&vars)?
        };
        Ok(output)
    }
}
