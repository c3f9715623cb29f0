use clap::Parser;

use ascii_converter::cli::{handle_config_action, Args, Mode};
use ascii_converter::config::{self, Config};
use ascii_converter::pipeline;
use ascii_converter::pipeline_config::ConvertOptions;

fn main() {
    let args = Args::parse();

    // RUST_LOG wins over -v when set
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config_path = args.config.clone().unwrap_or_else(config::default_path);

    let input = match args.mode() {
        Ok(Mode::Convert(input)) => input.to_path_buf(),
        Ok(Mode::Config(action)) => {
            // `config init` may target a file that does not exist yet
            let cfg = match Config::load(Some(&config_path)) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = handle_config_action(action, &cfg, &config_path) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return;
        }
        Err(e) => e.exit(),
    };

    // If --config is specified, require the file to exist.
    // Otherwise, fall back to defaults if the default config is not found.
    let cfg = if args.config.is_some() {
        match Config::load_from_explicit(&config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load(None) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    };

    let result = ConvertOptions::resolve(input, &args.overrides(), &cfg.convert)
        .and_then(|options| pipeline::convert(&options));

    match result {
        Ok(path) => println!("File saved to: {}", path.display()),
        Err(e) => {
            log::debug!("Conversion failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
