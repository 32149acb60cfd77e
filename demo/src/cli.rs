use crate::scene::Scene;
use crate::screen::Layout;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "demo")]
#[command(about = "Prints quaternion, rotation matrix and slerp results as a text screen")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Scene to draw, all of them when omitted
    #[arg(long, value_enum)]
    pub scene: Option<Scene>,

    /// Number of frames to run before exiting
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Height of a text row, in pixels
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(1..))]
    pub row_height: i32,

    /// Distance between numeric fields, in pixels
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(i32).range(1..))]
    pub column_width: i32,

    /// Width of a character on the console, in pixels
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(i32).range(1..))]
    pub char_width: i32,
}

impl Cli {
    pub fn layout(&self) -> Layout {
        Layout { row_height: self.row_height, column_width: self.column_width, char_width: self.char_width }
    }

    pub fn scenes(&self) -> Vec<Scene> {
        match self.scene {
            Some(scene) => vec![scene],
            None => Scene::ALL.to_vec(),
        }
    }
}
