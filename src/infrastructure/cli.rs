use std::time::Duration;

use clap::Parser;

use crate::utils::version;

/// Events per second; the interval between them must be a valid duration
fn parse_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if rate > 0.0 && Duration::try_from_secs_f64(1.0 / rate).is_ok() {
        Ok(rate)
    } else {
        Err(format!("`{raw}` must be a positive rate"))
    }
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = parse_rate,
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = parse_rate,
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,
}
