use crate::commands::CommandArgs;
use crate::commands::CommandExecutor;
use anyhow::Result;

pub struct HelpCommand;

impl CommandExecutor for HelpCommand {
    fn execute(&self, _args: CommandArgs) -> Result<()> {
        print_help()
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "help"
    }
}

pub fn print_help() -> Result<()> {
    println!("Berlin Clock - the time of day as rows of lamps");
    println!("\nUsage:");
    println!("  <HH:mm:ss>                       Convert a time (24:00 and 24:00:00 are accepted)");
    println!("  convert <time> [<time>...]       Convert one or more times");
    println!("  now                              Convert the current local time");

    println!("\nOptions:");
    println!("  --format <text|json>             Override the configured output format");

    println!("\nConfiguration:");
    println!("  config show [key]                Show current settings");
    println!("  config set <key> <value>         Change a setting");
    println!("Available Keys:");
    println!("  - display.format       text | json");
    println!("  - display.line_ending  lf | crlf");
    println!("  - display.show_input   true | false");

    println!("\nLegend:");
    println!("  Y  yellow lamp on    R  red lamp on    O  lamp off");
    println!("  Rows: seconds, 5 hours, 1 hour, 5 minutes, 1 minute");

    println!("\nOther:");
    println!("  help                             Show this help");
    println!("  exit | quit                      Leave the terminal");
    Ok(())
}
