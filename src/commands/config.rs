use crate::commands::{CommandArgs, CommandExecutor};
use crate::config::{get_config_path, Config};
use anyhow::Result;

pub struct ConfigCommand;

impl CommandExecutor for ConfigCommand {
    fn execute(&self, args: CommandArgs) -> Result<()> {
        match args.args.first().map(String::as_str) {
            Some("show") | Some("list") | Some("get") => {
                handle_show(args.args.get(1).map(String::as_str))
            }
            Some("set") if args.args.len() >= 3 => handle_set(&args.args[1], &args.args[2]),
            Some("set") => {
                println!("Usage: config set <key> <value>");
                Ok(())
            }
            Some(other) => {
                println!("Unknown config action '{}'. Available actions: show, set", other);
                Ok(())
            }
            None => handle_show(None),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "config"
    }
}

/// Describe the settings selected by `key` (all of them for `None` or "all")
pub fn describe(config: &Config, key: Option<&str>) -> Result<Vec<String>> {
    match key {
        None | Some("all") => Config::keys()
            .iter()
            .map(|key| -> Result<String> { Ok(format!("{} = {}", key, config.get(key)?)) })
            .collect(),
        Some(key) => Ok(vec![format!("{} = {}", key, config.get(key)?)]),
    }
}

pub fn handle_show(key: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    println!("\nCurrent Configuration ({}):", get_config_path()?.display());
    for line in describe(&config, key)? {
        println!("  {}", line);
    }
    Ok(())
}

pub fn handle_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    log::info!("Config {} set to {}", key, value);
    println!("{} updated to: {}", key, config.get(key)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_all() {
        let lines = describe(&Config::default(), None).unwrap();
        assert_eq!(
            lines,
            vec!["display.format = text", "display.line_ending = lf", "display.show_input = false"]
        );
    }

    #[test]
    fn test_describe_unknown_key() {
        assert!(describe(&Config::default(), Some("display.colour")).is_err());
    }
}
