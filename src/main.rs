use anyhow::Result;
use rect_count::{
    config::{Config, ConfigErr},
    run,
};

pub fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigErr::Help) => {
            println!("{}", ConfigErr::Help);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        .with_writer(std::io::stderr)
        .init();

    run(&config)?;
    Ok(())
}
