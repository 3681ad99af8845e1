use anyhow::Result;
use deep_solver_verify::cli;
use deep_solver_verify::commands::handle_generate;
use deep_solver_verify::config::RunConfig;
use deep_solver_verify::observability::init_tracing;

fn main() -> Result<()> {
    let config = RunConfig::from(cli::parse_args());
    init_tracing(&config.log);

    let status = handle_generate(&config)?;
    if !status.is_success() {
        std::process::exit(status.exit_code());
    }
    Ok(())
}
