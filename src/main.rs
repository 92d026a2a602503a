use anyhow::Result;
use berlin_clock::app::Application;
use berlin_clock::cli::{Cli, Commands, ConfigActions};
use berlin_clock::commands::{config, convert};
use clap::Parser;
use env_logger::Env;
use log::info;

fn main() -> Result<()> {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { times, format }) => convert::handle_convert(&times, format),
        Some(Commands::Now { format }) => convert::handle_now(format),
        Some(Commands::Config { action }) => match action {
            ConfigActions::Show { key } => config::handle_show(key.as_deref()),
            ConfigActions::Set { key, value } => config::handle_set(&key, &value),
        },
        None => {
            info!("No command given, entering interactive mode");
            Application::new().run()
        }
    }
}
