use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Mode {
    Scan,
    Watch,
    Locate,
}

#[derive(Debug)]
pub struct Args {
    pub mode: Mode,
    pub library_dir: Option<PathBuf>,
    pub display_index: Option<usize>,
    pub interval_secs: u64,
    pub debug_mode: bool,
}

impl Args {
    pub fn parse() -> Option<Self> {
        let args: Vec<String> = env::args().collect();

        let mut mode: Option<Mode> = None;
        let mut library_dir: Option<PathBuf> = None;
        let mut display_index: Option<usize> = None;
        let mut interval_secs: u64 = 5;
        let mut debug_mode = false;

        for arg in args.iter().skip(1) {
            if arg == "--help" || arg == "-h" {
                print_help();
                return None;
            } else if arg == "--version" || arg == "-v" {
                println!("room-watch v{}", env!("CARGO_PKG_VERSION"));
                return None;
            } else if arg == "--scan" || arg == "-s" {
                mode = Some(Mode::Scan);
            } else if arg == "--watch" || arg == "-w" {
                mode = Some(Mode::Watch);
            } else if arg == "--locate" {
                mode = Some(Mode::Locate);
            } else if arg == "--debug" {
                debug_mode = true;
            } else if let Some(val) = arg.strip_prefix("--library=") {
                library_dir = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--display=") {
                match val.parse::<usize>() {
                    Ok(index) => display_index = Some(index),
                    Err(_) => {
                        eprintln!("❌ Invalid display index: {}", val);
                        return None;
                    }
                }
            } else if let Some(val) = arg.strip_prefix("--interval=") {
                match val.parse::<u64>() {
                    Ok(secs) if secs > 0 => interval_secs = secs,
                    _ => {
                        eprintln!("❌ Invalid interval value: {}", val);
                        return None;
                    }
                }
            } else {
                eprintln!("❌ Unknown argument: {}", arg);
                print_help();
                return None;
            }
        }

        Some(Args {
            mode: mode.unwrap_or(Mode::Scan),
            library_dir,
            display_index,
            interval_secs,
            debug_mode,
        })
    }
}

fn print_help() {
    println!("👁️ Room Watch - screen anomaly detector");
    println!();
    println!("USAGE:");
    println!("    room-watch [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)          Run a single detection cycle");
    println!("    --scan, -s          Run a single detection cycle");
    println!("    --watch, -w         Run detection cycles on an interval");
    println!("    --locate            Print the baseline regions placed for each room");
    println!("    --library=PATH      Room library directory (default: rooms)");
    println!("    --display=N         Display index to capture (default: 0)");
    println!("    --interval=SECS     Seconds between watch cycles (default: 5)");
    println!("    --debug             Enable debug output");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    room-watch --scan");
    println!("    room-watch --watch --interval=10");
    println!("    room-watch --locate --library=/data/cabin");
}
