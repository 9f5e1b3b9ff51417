// structty: animated terminal visualizer for elementary data structures

mod sim;
mod structures;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sim::{Engine, EngineConfig};
use structures::StructureKind;
use ui::App;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [options] [variant]", program_name);
    eprintln!();
    eprintln!("Variants:");
    eprintln!("  stack | linear | circular | priority   (default: stack)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --step-ms <n>      delay between operation phases (0 = instant)");
    eprintln!("  --cadence-ms <n>   auto-play removal cadence");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} circular                # watch the ring buffer wrap", program_name);
    eprintln!("  {} --step-ms 800 priority  # slow-motion priority scan", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("structty")
        .to_string();

    let mut config = EngineConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                usage(&program_name);
                return Ok(());
            }
            "--step-ms" => {
                i += 1;
                let Some(value) = args.get(i).and_then(|v| v.parse::<u64>().ok()) else {
                    eprintln!("Error: --step-ms needs a number of milliseconds");
                    eprintln!();
                    usage(&program_name);
                    std::process::exit(1);
                };
                config.step = Duration::from_millis(value);
            }
            "--cadence-ms" => {
                i += 1;
                let Some(value) = args.get(i).and_then(|v| v.parse::<u64>().ok()) else {
                    eprintln!("Error: --cadence-ms needs a number of milliseconds");
                    eprintln!();
                    usage(&program_name);
                    std::process::exit(1);
                };
                config.cadence = Duration::from_millis(value);
            }
            name => match StructureKind::from_name(name) {
                Some(kind) => config.kind = kind,
                None => {
                    eprintln!("Error: unknown argument '{}'", name);
                    eprintln!();
                    usage(&program_name);
                    std::process::exit(1);
                }
            },
        }
        i += 1;
    }

    let engine = Engine::new(config);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
