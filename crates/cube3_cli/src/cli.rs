use std::io;
use std::path::PathBuf;

use cube3_core::{CubeState, FaceGrid};
use eyre::{Context, Result};

use crate::prefs::Preferences;
use crate::render::Renderer;
use crate::session;

/// Terminal Rubik's Cube simulator
///
/// If no subcommand is specified, then an interactive prompt is opened.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,

    /// Preferences file to load on top of the built-in defaults.
    #[arg(long, global = true, env = "CUBE3_PREFS")]
    pub prefs: Option<PathBuf>,

    /// Print sticker letters without terminal colors.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply a sequence of moves to a solved cube and print the result.
    Apply {
        /// Moves to apply, such as `R U R' U'`.
        moves: Vec<String>,

        /// Print only this face (one of U D L R F B).
        #[arg(short, long)]
        face: Option<String>,
    },
    /// Print the key bindings for the interactive prompt.
    Keys,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());
    let renderer = Renderer::new(&prefs, args.no_color);

    match args.subcommand {
        None => {
            let mut cube = CubeState::new();
            let keymap = prefs.keymap();
            let stdin = io::stdin().lock();
            let n = session::run(&mut cube, &keymap, &renderer, stdin, io::stdout())
                .wrap_err("error running interactive prompt")?;
            log::info!("applied {n} moves");
            Ok(())
        }

        Some(Subcommand::Apply { moves, face }) => {
            let mut cube = CubeState::new();
            let sequence = moves.join(" ");
            let n = cube
                .apply_moves(&sequence)
                .wrap_err_with(|| format!("error applying {sequence:?}"))?;
            log::debug!("applied {n} moves");

            match face {
                Some(name) => {
                    let colors = cube.get_face_colors(&name)?;
                    println!("{}", renderer.face(&FaceGrid(colors)));
                }
                None => {
                    println!("{}", renderer.net(&cube));
                    println!("{}", renderer.status(&cube));
                }
            }
            Ok(())
        }

        Some(Subcommand::Keys) => {
            println!("{}", session::keymap_legend(&prefs.keymap()));
            Ok(())
        }
    }
}
