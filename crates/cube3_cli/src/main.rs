//! Terminal front end for the 3x3x3 Rubik's Cube simulator.

#[macro_use]
extern crate lazy_static;

mod cli;
mod prefs;
mod render;
mod session;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;
    env_logger::builder().init();

    cli::exec(args)
}
