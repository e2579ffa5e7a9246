use gridtoy::config::DEFAULT_CONFIG_PATH;
use gridtoy::{App, Config};
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--summary] [COMMAND_FILE]", program);
    eprintln!("Reads toy commands from COMMAND_FILE, or stdin when omitted");
    eprintln!("Commands: PLACE x,y,DIR | MOVE | LEFT | RIGHT | REPORT | BLOCK x,y | PATH x,y | GOTO x,y");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("gridtoy");

    let mut summary = false;
    let mut input_path = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(program);
                return Ok(());
            }
            "--summary" => summary = true,
            path if input_path.is_none() => input_path = Some(path.to_string()),
            other => {
                eprintln!("Unexpected argument: {}", other);
                print_usage(program);
                std::process::exit(2);
            }
        }
    }

    // Read the config before installing the subscriber so its level applies,
    // then report how loading went
    let loaded = Config::load_from(DEFAULT_CONFIG_PATH);
    let level = loaded
        .as_ref()
        .map(|config| config.logging.level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    init_tracing(&level);
    let config = Config::or_default(loaded);

    let input = match &input_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let board = config.board.build();
    info!(width = board.width(), height = board.height(), "board ready");

    let mut app = App::new(board);
    for line in app.process(&input) {
        println!("{}", line);
    }

    if summary {
        eprintln!("{}", app.log().summary());
    }

    if config.logging.enable_action_log {
        match app.log().save_to_file(&config.logging.action_log_path) {
            Ok(()) => info!(path = %config.logging.action_log_path, "saved action log"),
            Err(e) => warn!("failed to save action log: {}", e),
        }
    }

    Ok(())
}
