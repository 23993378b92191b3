use buriview::app;
use buriview::config::{Config, GlyphMetrics, LcdPalette, Rgb};
use clap::Parser;
use log::LevelFilter;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "buriview",
    about = "Watch the Buri microcomputer's LCD, serial terminal and memory."
)]
struct Args {
    /// Decrease verbosity.
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write the log here; logging is off without it since the UI owns the tty.
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Pre-load FILE into RAM.
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Address for --load, in hex.
    #[arg(long, value_name = "ADDR", default_value = "5000", value_parser = parse_addr)]
    load_addr: u16,

    /// Serial terminal rows.
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Serial terminal columns.
    #[arg(long, default_value_t = 80)]
    cols: usize,

    /// Lit LCD dot colour, RRGGBB.
    #[arg(long, value_name = "RRGGBB", value_parser = parse_colour)]
    lcd_on: Option<Rgb>,

    /// Unlit LCD dot colour, RRGGBB.
    #[arg(long, value_name = "RRGGBB", value_parser = parse_colour)]
    lcd_off: Option<Rgb>,

    /// LCD panel background colour, RRGGBB.
    #[arg(long, value_name = "RRGGBB", value_parser = parse_colour)]
    lcd_bg: Option<Rgb>,

    /// Memory view refresh period in milliseconds.
    #[arg(long, default_value_t = 66)]
    refresh_ms: u64,

    /// Don't beep on BEL.
    #[arg(long)]
    mute: bool,
}

fn parse_addr(s: &str) -> Result<u16, String> {
    let hex = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(hex, 16).map_err(|e| format!("bad address {:?}: {}", s, e))
}

fn parse_colour(s: &str) -> Result<Rgb, String> {
    Rgb::parse(s).map_err(|e| e.to_string())
}

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();
    match &args.log {
        Some(path) => {
            let level = match (args.quiet, args.verbose) {
                (true, _) => LevelFilter::Warn,
                (false, 0) => LevelFilter::Info,
                (false, 1) => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            };
            builder
                .filter_level(level)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let defaults = LcdPalette::default();
    let config = Config {
        palette: LcdPalette {
            on: args.lcd_on.unwrap_or(defaults.on),
            off: args.lcd_off.unwrap_or(defaults.off),
            background: args.lcd_bg.unwrap_or(defaults.background),
        },
        metrics: GlyphMetrics::TERMINAL,
        terminal_rows: args.rows,
        terminal_cols: args.cols,
        memory_refresh: Duration::from_millis(args.refresh_ms),
        mute: args.mute,
        load: args.load,
        load_addr: args.load_addr,
        ..Config::default()
    };

    app::run(config)
}
