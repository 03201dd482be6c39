mod cli;
mod color_arg;
mod document;
mod links_cmd;
mod page_range;
mod recolor_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Recolor {
            ref file,
            ref color,
            ref pages,
            ref output,
        } => recolor_cmd::run(file, color, pages.as_deref(), output.as_deref()),
        cli::Commands::Links {
            ref file,
            ref pages,
            ref format,
        } => links_cmd::run(file, pages.as_deref(), format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
