use horae_clock::{SystemClock, TzFormatter};
use horae_runner::{ConsoleSink, InputEvent, LogNotifier, WidgetConfig, WidgetController};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

fn print_help() {
    eprintln!(
        r#"Horae - terminal clock, stopwatch, timer and world clock

USAGE:
    horae [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

COMMANDS (one per line on stdin):
    format 12|24                    tz <zone>|local
    theme                           tab clock|stopwatch|timer|world
    sw start|pause|reset|lap        timer start|pause|reset
    timer hours|minutes|seconds <n> quit

ENVIRONMENT VARIABLES:
    HORAE_TIMEZONE      Initial timezone (IANA id or 'local')
    HORAE_TIME_FORMAT   Initial time format (12 or 24)
    RUST_LOG            Log level filter (default: horae=info)
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("horae=info"))
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            WidgetConfig::from_file(&path)?
        }
        None => WidgetConfig::default(),
    }
    .with_env_overrides()?;

    let controller = WidgetController::new(
        config,
        Arc::new(SystemClock::new()),
        Arc::new(TzFormatter::new()),
        ConsoleSink::stdout(),
        Arc::new(LogNotifier),
    );

    // Feed stdin commands to the controller
    let (input_tx, input_rx) = mpsc::channel::<InputEvent>(64);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match line.parse::<InputEvent>() {
                    Ok(event) => {
                        if input_tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => eprintln!("\n{}", e),
                },
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    controller.run(input_rx).await;
    println!();
    Ok(())
}
