pub mod completions;
pub mod draw;
pub mod info;
pub mod list;
pub mod render;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// strokepad - freehand stroke engine and drawing file tool
#[derive(Parser, Debug)]
#[command(name = "strokepad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project directory containing strokepad.yaml
    #[arg(long, short = 'C', global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a gesture script onto a drawing and save it
    Draw(draw::DrawArgs),

    /// Render a drawing to PNG
    Render(render::RenderArgs),

    /// Describe the strokes in a drawing
    Info(info::InfoArgs),

    /// List saved drawings
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
