use clap::Parser;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod print;
mod scene;
mod screen;

use screen::TextScreen;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let layout = cli.layout();
    let scenes = cli.scenes();
    info!(frames = cli.frames, ?scenes, ?layout, "starting");

    let mut screen = TextScreen::new(&layout);
    let mut stdout = std::io::stdout().lock();
    for frame in 0..cli.frames {
        screen.clear();
        scene::draw_scenes(&mut screen, &layout, &scenes)?;

        debug!(frame, "presenting frame");
        if frame > 0 {
            writeln!(stdout)?;
        }
        stdout.write_all(screen.render().as_bytes())?;
    }
    stdout.flush()?;

    info!("finished");
    Ok(())
}
