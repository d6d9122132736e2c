mod cli;
mod convert_cmd;
mod list_cmd;
mod shared;
mod table_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = shared::open_registry(cli.tables.as_deref()).and_then(|registry| {
        match cli.command {
            cli::Commands::List { format } => list_cmd::run(&registry, format),
            cli::Commands::Decode {
                ref encoding,
                ref file,
            } => convert_cmd::decode(&registry, encoding, file.as_deref()),
            cli::Commands::Encode {
                ref encoding,
                ref file,
                strict,
            } => convert_cmd::encode(&registry, encoding, file.as_deref(), strict),
            cli::Commands::Table { ref name, format } => table_cmd::run(&registry, name, format),
        }
    });

    if let Err(code) = result {
        std::process::exit(code);
    }
}
