//! List command implementation.
//!
//! Prints the names of saved drawings, one per line on stdout.

use clap::Args;

use crate::error::Result;
use crate::library::{DrawingLibrary, Settings};
use crate::output::{display_path, plural, Printer};

/// List saved drawings
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show each drawing's file path
    #[arg(long)]
    pub paths: bool,
}

pub fn run(args: ListArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let library = DrawingLibrary::from_settings(settings);
    let names = library.list();

    printer.info(
        "Found",
        &format!(
            "{} in {}",
            plural(names.len(), "drawing", "drawings"),
            display_path(library.root())
        ),
    );

    for name in &names {
        if args.paths {
            let path = library.path_for(name)?;
            println!("{}\t{}", name, printer.dim(&display_path(&path)));
        } else {
            println!("{}", name);
        }
    }

    Ok(())
}
