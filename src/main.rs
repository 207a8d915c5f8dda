// Demo host for both utilities.
// What you SEE:
// • The terminal prints a freshly generated random grid.
// • A window opens with a "Hello Mojo!" button in the middle.
// • Click it and the terminal reports the click. Close the window or hold ESC to quit.

use clap::Parser;
use hello_button::window::Minifb;
use hello_button::{App, Error, Resolution, gen_random_values};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(version, about = "Random grid + one-button window demo")]
struct Args {
    /// Window geometry, WIDTHxHEIGHT with an optional +X+Y.
    #[arg(short, long, default_value = "800x600")]
    resolution: Resolution,

    /// Rows (and columns) of the random grid.
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Lower bound of every grid value.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    base: f64,

    /// Replace the default button label.
    #[arg(short, long)]
    label: Option<String>,

    /// Frame cap for the window loop (0 = uncapped).
    #[arg(long, default_value_t = 60)]
    fps: usize,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .unwrap_or_else(|err| eprintln!("logger: {err}"));

    /* --- Random grid ---
       Visual: one line per row in the terminal. */
    let grid = gen_random_values(args.size, args.base)?;
    for row in grid.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.4}")).collect();
        log::info!("[{}]", cells.join(", "));
    }
    log::info!("min {:.4}, max {:.4}", grid.min(), grid.max());

    /* --- Window + button --- */
    let mut app = App::with_toolkit(Minifb { target_fps: args.fps });
    app.create_with_resolution(args.resolution)?;
    if let Some(label) = &args.label {
        app.create_button(label)?;
    }

    /* ------------------------------ Host loop ------------------------------ */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    while app.is_open() && !app.esc_pressed() {
        app.update()?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::info!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
