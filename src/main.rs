use anyhow::Result;

use agriyield_predictor::cli;

fn main() -> Result<()> {
    cli::run()
}
