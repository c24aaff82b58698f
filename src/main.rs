use std::process;
use log::{error, LevelFilter};

use miaskit::utils::logger::Logger;
use miaskit::commands::{build_cli, log_dir, CommandFactory, MiasCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    let log_folder = match log_dir(&matches) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let logger = match Logger::new(log_folder.join("miaskit.log")) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(log_folder.join("miaskit-global.log"), level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = MiasCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
