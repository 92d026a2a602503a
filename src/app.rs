use crate::commands::{
    CommandArgs, CommandExecutor, ConfigCommand, ConvertCommand, HelpCommand, NowCommand,
};
use anyhow::Result;
use log::{debug, info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Standardized input preprocessing function
pub fn preprocess_input(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn is_exit_command(input: &str) -> bool {
    matches!(
        preprocess_input(input).as_str(),
        "exit" | "quit" | "berlin-clock exit" | "berlin-clock quit"
    )
}

pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandExecutor>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandExecutor>> = vec![
            Box::new(ConvertCommand),
            Box::new(NowCommand),
            Box::new(ConfigCommand),
            Box::new(HelpCommand),
        ];
        Self { handlers }
    }

    /// Whether some handler accepts `command`
    pub fn handles(&self, command: &str) -> bool {
        self.handlers.iter().any(|handler| handler.can_handle(command))
    }

    pub fn execute(&self, args: CommandArgs) -> Result<()> {
        debug!("Attempting to execute command: {}", args.command);
        debug!("Parsed arguments: {:?}", args.args);

        match self.handlers.iter().find(|handler| handler.can_handle(&args.command)) {
            Some(handler) => {
                let command_name = args.command.clone();
                info!("Executing command '{}'", command_name);
                handler.execute(args).map_err(|e| {
                    log::error!("Failed to execute command '{}': {:?}", command_name, e);
                    e
                })
            }
            None => {
                warn!("Unrecognized command: {}", args.command);
                println!("Unrecognized command. Type 'help' for a list of available commands.");
                Ok(())
            }
        }
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Application {
    command_processor: CommandProcessor,
}

impl Application {
    pub fn new() -> Self {
        Self { command_processor: CommandProcessor::new() }
    }

    pub fn run(&self) -> Result<()> {
        info!("Starting Berlin Clock terminal");

        let mut rl = DefaultEditor::new()?;

        println!("Welcome to the Berlin Clock!");
        println!("Enter a time (HH:mm:ss) or type 'help' for commands.");
        let prompt = "⏰ ";

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    if is_exit_command(&line) {
                        info!("Exit command detected");
                        break;
                    }
                    if let Err(err) = self.process_input(&line) {
                        println!("Error: {}", err);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    pub fn process_input(&self, input: &str) -> Result<()> {
        let args = CommandArgs::parse(input)?;
        self.command_processor.execute(args)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("  QUIT "));
        assert!(is_exit_command("berlin-clock exit"));
        assert!(!is_exit_command("12:00:00"));
    }

    #[test]
    fn test_processor_routes_known_commands() {
        let processor = CommandProcessor::new();
        for command in ["convert", "show", "now", "config", "help"] {
            assert!(processor.handles(command), "{} should be handled", command);
        }
        assert!(!processor.handles("calendar"));
    }

    #[test]
    fn test_unrecognized_command_is_not_an_error() {
        let app = Application::new();
        assert!(app.process_input("calendar list").is_ok());
    }
}
