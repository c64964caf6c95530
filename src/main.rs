use clap::Parser;

use evidence_guard::cli::{Cli, Commands};
use evidence_guard::commands::{run_check, run_list, run_validate};
use evidence_guard::output::{init_tracing, level_for_verbosity};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json, level_for_verbosity(cli.verbose, cli.quiet));

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Validate(args) => run_validate(args, cli.quiet),
        Commands::List(args) => run_list(args),
    };

    std::process::exit(exit_code);
}
