use anyhow::Result;
use std::collections::HashMap;

/// Command line arguments structure
#[derive(Debug, Clone, PartialEq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    pub flags: HashMap<String, Option<String>>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>, flags: HashMap<String, Option<String>>) -> Self {
        Self { command, args, flags }
    }

    pub fn parse(input: &str) -> Result<Self> {
        // Normalize input by replacing non-breaking spaces and multiple spaces with a single space
        let normalized_input = input.replace('\u{a0}', " ");
        let mut parts: Vec<String> =
            normalized_input.split_whitespace().map(String::from).collect();

        if parts.is_empty() {
            return Err(anyhow::anyhow!("No command provided"));
        }

        // Tolerate the binary name in front of the command
        if parts.len() > 1 && parts[0].eq_ignore_ascii_case("berlin-clock") {
            parts.remove(0);
        }

        let first = parts.remove(0);
        let mut args = Vec::new();
        let mut flags = HashMap::new();

        // A bare time is shorthand for `convert <time>`
        let command = if first.contains(':') {
            args.push(first);
            "convert".to_string()
        } else {
            first.to_lowercase()
        };

        let mut i = 0;
        while i < parts.len() {
            if parts[i].starts_with("--") {
                let flag = parts[i].clone();
                if i + 1 < parts.len() && !parts[i + 1].starts_with("--") {
                    flags.insert(flag, Some(parts[i + 1].clone()));
                    i += 1;
                } else {
                    flags.insert(flag, None);
                }
            } else {
                args.push(parts[i].clone());
            }
            i += 1;
        }

        log::debug!("Parsed command: {:?}, args: {:?}, flags: {:?}", command, args, flags);

        Ok(CommandArgs { command, args, flags })
    }
}

// Command executor trait for handling commands
pub trait CommandExecutor {
    fn execute(&self, args: CommandArgs) -> Result<()>;
    fn can_handle(&self, command: &str) -> bool;
}

pub mod config;
pub mod convert;
pub mod help;

pub use config::ConfigCommand;
pub use convert::{ConvertCommand, NowCommand};
pub use help::HelpCommand;
