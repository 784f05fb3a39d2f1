use env_logger::Env;
use svg2modelica::Result;

use svg2modelica::cli::{get_config, run};

fn main() -> Result<()> {
    // conversion warnings are shown unless RUST_LOG says otherwise
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    run(get_config()?)?;

    Ok(())
}
