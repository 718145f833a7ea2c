use anyhow::{Context, Result};
use tracing::{error, info, trace};

use crate::{
    config::Config,
    counter::count_rectangles_with,
    dbg_points,
    input::{read_points, InputErr},
    output::write_count,
};

/// Reads the points named by `config`, counts their rectangles, and writes
/// the count out.
///
/// An input file that cannot be read counts as an empty point set.
/// Malformed input and a failed write are errors.
pub fn run(config: &Config) -> Result<u64> {
    let points = match read_points(&config.input) {
        Ok(points) => points,
        Err(InputErr::Io(err)) => {
            error!(
                "failed to open input file {}: {err}",
                config.input.display()
            );
            Vec::new()
        }
        Err(err) => Err(err).with_context(|| {
            format!("failed to parse {}", config.input.display())
        })?,
    };
    trace!("points: {:?}", dbg_points!(&points));

    let count = count_rectangles_with(config.index, &points);
    info!(index = %config.index, points = points.len(), count, "rectangles");

    write_count(&config.output, count).with_context(|| {
        format!("failed to write {}", config.output.display())
    })?;
    Ok(count)
}
