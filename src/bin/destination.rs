use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use great_circle::{try_great_circle_point, Algorithm, Point};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run(command().get_matches()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(m: ArgMatches) -> anyhow::Result<()> {
    let dest = destination(&m)?;
    println!("{dest}");
    Ok(())
}

fn destination(m: &ArgMatches) -> anyhow::Result<Point> {
    let number = |id: &str| {
        m.get_one::<f64>(id)
            .copied()
            .with_context(|| format!("missing --{id}"))
    };
    let (lat, lon) = (number("lat")?, number("lon")?);
    let azimuth = number("azimuth")?;
    let distance = number("distance")?;
    debug!("lat = {lat}, lon = {lon}, az = {azimuth}°, dist = {distance} m");

    if m.get_flag("strict") {
        let start = Point::try_new(lat, lon).context("invalid start point")?;
        try_great_circle_point(&start, azimuth, distance)
            .context("failed to compute the destination point")
    } else {
        let algorithm: Algorithm = m
            .get_one::<String>("algorithm")
            .map(String::as_str)
            .unwrap_or("haversine")
            .parse()?;
        Ok(algorithm.destination(&Point::new(lat, lon), azimuth, distance))
    }
}

fn command() -> Command {
    let number = |id: &'static str, help: &'static str| {
        Arg::new(id)
            .long(id)
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .help(help)
    };
    Command::new("destination")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the point reached from a start point along a great circle.")
        .arg(number("lat", "Start latitude in degrees."))
        .arg(number("lon", "Start longitude in degrees."))
        .arg(number("azimuth", "Initial bearing in degrees clockwise from north."))
        .arg(number("distance", "Surface distance in meters."))
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .default_value("haversine")
                .value_parser(["haversine", "n-vector"])
                .help("Destination point algorithm."),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .conflicts_with("algorithm")
                .help("Validate the input and fail instead of printing NaN coordinates."),
        )
}
