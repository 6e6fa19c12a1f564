use rgbseam::SeamCarver;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::info;

// Parse an optional numeric argument, naming it if it isn't a number.
fn number(matches: &ArgMatches, name: &str) -> Result<Option<u32>, Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(v) => v
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format_err!("--{} expects a whole number, got '{}'", name, v)),
    }
}

// Work out the target size from whichever of --width/--columns and
// --height/--rows was given.  Nothing given means "leave it alone".
fn target(matches: &ArgMatches, current: u32, size: &str, count: &str) -> Result<u32, Error> {
    match (number(matches, size)?, number(matches, count)?) {
        (Some(s), _) => Ok(s),
        (None, Some(c)) if c < current => Ok(current - c),
        (None, Some(c)) => Err(format_err!(
            "cannot remove {} {} from an image {} pixels across",
            c,
            count,
            current
        )),
        (None, None) => Ok(current),
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("rgbseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .conflicts_with("columns")
                .help("Target width in pixels"),
        )
        .arg(
            Arg::with_name("height")
                .short("h")
                .long("height")
                .takes_value(true)
                .conflicts_with("rows")
                .help("Target height in pixels"),
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .takes_value(true)
                .help("Number of columns to remove"),
        )
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .takes_value(true)
                .help("Number of rows to remove"),
        )
        .arg(
            Arg::with_name("energy")
                .short("e")
                .long("energy")
                .help("Write the energy map of the input instead of carving"),
        )
        .get_matches();

    // Both required, so clap has already insisted on them.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?.to_rgb();
    let mut carver = SeamCarver::new(&image)?;

    if matches.is_present("energy") {
        info!("writing energy map of {} to {}", input, output);
        carver.energy_image().save(output)?;
        return Ok(());
    }

    let (width, height) = carver.dimensions();
    let newwidth = target(&matches, width, "width", "columns")?;
    let newheight = target(&matches, height, "height", "rows")?;
    info!(
        "carving {} from {}x{} to {}x{}",
        input, width, height, newwidth, newheight
    );
    carver.carve(newwidth, newheight)?;
    carver.picture().save(output)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("rgbseam: {}", e);
        std::process::exit(1);
    }
}
