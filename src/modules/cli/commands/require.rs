//! Require command implementation

use clap::Args;
use envref_runtime::Env;

/// Require command arguments
#[derive(Args, Debug)]
pub struct RequireCommand {
    /// Variable names that must be set
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl RequireCommand {
    /// Execute the require command
    pub fn execute(&self, env: &Env) -> anyhow::Result<()> {
        for line in self.render(env)? {
            println!("{}", line);
        }
        Ok(())
    }

    /// `NAME=value` per variable, failing on the first missing one
    pub fn render(&self, env: &Env) -> anyhow::Result<Vec<String>> {
        self.names
            .iter()
            .map(|name| -> anyhow::Result<String> {
                let value = env.require_env(name)?;
                Ok(format!("{}={}", name, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envref_core::{EnvTable, EnvrefError, StoreRegistry};
    use envref_types::StoreMode;

    fn env() -> Env {
        let table = EnvTable::from_pairs([("HOST", "db"), ("PORT", "5432"), ("PASS", "null")]);
        Env::with_registry(StoreRegistry::empty().with_store(StoreMode::Env, Box::new(table)))
    }

    fn require(names: &[&str]) -> RequireCommand {
        RequireCommand {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_require_present() {
        let lines = require(&["HOST", "PORT"]).render(&env()).unwrap();
        assert_eq!(lines, vec!["HOST=db", "PORT=5432"]);
    }

    #[test]
    fn test_require_null_fails() {
        let err = require(&["HOST", "PASS"]).render(&env()).unwrap_err();
        let err = err.downcast_ref::<EnvrefError>().unwrap();
        assert!(matches!(err, EnvrefError::MissingRequiredVariable(name) if name == "PASS"));
        assert_eq!(err.exit_code(), 2);
    }
}
