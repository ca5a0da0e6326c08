use std::sync::Arc;

use loggate::config::{load_config, schema_json};
use loggate::startup::run;
use loggate::utils::logger::init_logging;

const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

fn main() {
    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--schema") {
        match schema_json() {
            Ok(schema) => println!("{}", schema),
            Err(e) => {
                eprintln!("Error rendering configuration schema: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let path = arg.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = match load_config(&path) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    run(config);
}
