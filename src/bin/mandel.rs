extern crate clap;
extern crate env_logger;
extern crate mandelbrot;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{write_png, MandelError, Renderer};
use std::str::FromStr;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const VERBOSE: &str = "verbose";

const MAX_SIZE: usize = 16384;

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Greyscale Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("out.png")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_SIZE,
                        "Could not parse output image size",
                        &format!("Image size must be between 1 and {}", MAX_SIZE),
                    )
                })
                .help("Width and height of the (square) output image"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .help("Log progress while rendering"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), MandelError> {
    // Both have defaults and the size has passed its validator.
    let outfile = matches.value_of(OUTPUT).unwrap_or("out.png");
    let size = matches
        .value_of(SIZE)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or(mandelbrot::render::SIZE);

    let renderer = Renderer::with_size(size)?;
    let image = renderer.render()?;
    write_png(outfile, &image)
}

fn main() {
    let matches = args();
    let level = if matches.is_present(VERBOSE) {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
