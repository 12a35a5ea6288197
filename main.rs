mod bigram;
mod error;
mod normalize;
mod report;
mod scan;

use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Print how often each pair of adjacent words occurs in a text file.
#[derive(Parser, Debug)]
#[command(name = "bigram-histogram")]
struct Cli {
    /// Location of the text file to analyze
    file: Option<OsString>,
}

impl Cli {
    /// The file to scan; an empty argument counts as none.
    fn input(self) -> Option<PathBuf> {
        self.file.filter(|file| !file.is_empty()).map(PathBuf::from)
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let Some(path) = Cli::parse().input() else {
        println!("{}", Cli::command().render_help());
        return;
    };

    let histogram = scan::scan_path(&path);

    let stdout = io::stdout();
    if let Err(e) = report::render(&histogram, BufWriter::new(stdout.lock())) {
        log::error!("Failed to write histogram for {}: {}", path.display(), e);
    }
}
