// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use colcarve::menu::{choose, offered_options, MenuOption};
use colcarve::{energy_to_image, grid_from_image, grid_to_image, EditSession, PixelGrid};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error, ResultExt};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    env_logger::init();

    let matches = App::new("colcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Shrink an image one column at a time, with undo")
        .arg(
            Arg::with_name("image")
                .help("The image to edit")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output-dir")
                .help("Where each step's image is written")
                .short("o")
                .long("output-dir")
                .value_name("DIR")
                .takes_value(true)
                .default_value("."),
        )
        .arg(
            Arg::with_name("seed")
                .help("Seed for choosing random columns")
                .long("seed")
                .value_name("N")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the image's energy map to FILE and exit")
                .long("energy")
                .value_name("FILE")
                .takes_value(true),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("colcarve: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let path = matches
        .value_of("image")
        .ok_or_else(|| format_err!("no image given"))?;
    let grid = load(Path::new(path))?;
    info!("loaded {} ({}x{})", path, grid.width(), grid.height());

    if let Some(target) = matches.value_of("energy") {
        energy_to_image(&grid.energy_map())
            .save(target)
            .with_context(|_| format!("could not write {}", target))?;
        info!("wrote energy map to {}", target);
        return Ok(());
    }

    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(
            seed.parse::<u64>()
                .with_context(|_| format!("'{}' is not a seed", seed))?,
        ),
        None => StdRng::from_entropy(),
    };

    let out_dir = PathBuf::from(matches.value_of("output-dir").unwrap_or("."));
    fs::create_dir_all(&out_dir)
        .with_context(|_| format!("could not create {}", out_dir.display()))?;

    let stdin = io::stdin();
    let mut session = EditSession::new(grid);
    interact(&mut session, &mut rng, stdin.lock(), io::stdout(), &out_dir)
}

fn load(path: &Path) -> Result<PixelGrid, Error> {
    let decoded =
        image::open(path).with_context(|_| format!("could not read {}", path.display()))?;
    Ok(grid_from_image(&decoded.to_rgb8())?)
}

fn save(grid: &PixelGrid, target: &Path) -> Result<(), Error> {
    grid_to_image(grid)
        .save(target)
        .with_context(|_| format!("could not write {}", target.display()))?;
    info!("wrote {}", target.display());
    Ok(())
}

// Write the current image, show what's on offer, act on the answer,
// repeat.  End of input counts as quitting.
fn interact<R, W, G>(
    session: &mut EditSession,
    rng: &mut G,
    input: R,
    mut output: W,
    out_dir: &Path,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut lines = input.lines();
    let mut step = 0;
    loop {
        save(
            session.current_image(),
            &out_dir.join(format!("image-{}.png", step)),
        )?;
        step += 1;

        let options = offered_options(session);
        let choice = loop {
            let image = session.current_image();
            writeln!(output, "image is {}x{}", image.width(), image.height())?;
            for option in &options {
                writeln!(output, "  {}", option)?;
            }
            write!(output, "> ")?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            match choose(&options, &line) {
                Some(choice) => break choice,
                None => writeln!(output, "'{}' is not one of the options", line.trim())?,
            }
        };
        debug!("chose {:?}", choice);

        match choice {
            MenuOption::HighlightBluest => {
                let x = session.highlight_bluest_column()?;
                writeln!(output, "highlighted column {}", x)?;
            }
            MenuOption::HighlightRandom => {
                let x = session.highlight_random_column(rng)?;
                writeln!(output, "highlighted column {}", x)?;
            }
            MenuOption::DeleteHighlighted => {
                session.delete_highlighted_column()?;
                writeln!(output, "deleted the highlighted column")?;
            }
            MenuOption::Undo => {
                session.undo()?;
                writeln!(output, "undone")?;
            }
            MenuOption::Quit => return Ok(()),
        }
    }
}
