//! # Distance Subcommand
//!
//! Great-circle distance between two coordinates given in decimal degrees.

use anyhow::Result;
use clap::Args;
use regnet_core::{Coordinate, DistanceModel, EarthModel, Kilometers};

use crate::input::ModelArg;

/// Arguments for the `regnet distance` subcommand.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// Latitude of the first point.
    #[arg(allow_negative_numbers = true)]
    pub lat1: f64,
    /// Longitude of the first point.
    #[arg(allow_negative_numbers = true)]
    pub lon1: f64,
    /// Latitude of the second point.
    #[arg(allow_negative_numbers = true)]
    pub lat2: f64,
    /// Longitude of the second point.
    #[arg(allow_negative_numbers = true)]
    pub lon2: f64,

    /// Earth model.
    #[arg(long, value_enum, default_value = "spherical")]
    pub model: ModelArg,
}

pub fn measure(args: &DistanceArgs) -> Result<Kilometers> {
    let a = Coordinate::new(args.lat1, args.lon1)?;
    let b = Coordinate::new(args.lat2, args.lon2)?;
    let model = EarthModel::from(args.model);
    let km = model.distance(a, b);
    tracing::debug!(%a, %b, model = model.name(), km = km.value(), "distance measured");
    Ok(km)
}

/// Execute the distance subcommand.
pub fn run_distance(args: &DistanceArgs) -> Result<u8> {
    println!("{}", measure(args)?);
    Ok(0)
}
