mod cli;
mod seed;

use anyhow::Result;

fn main() -> Result<()> {
    let action = cli::start()?;

    seed::handle(&action)
}
