mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, show, update};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);
    print::initialize();

    match commands.command {
        Commands::Update {
            login,
            readme,
            section,
        } => {
            print::header("updating contribution tally", commands.quiet);
            update::update(login, &readme, &section, commands.quiet).await
        }
        Commands::Show { login } => {
            print::header("contribution tally", commands.quiet);
            show::show(login, commands.quiet).await
        }
        Commands::Check { readme, section } => {
            print::header("checking section markers", commands.quiet);
            check::check(&readme, &section)
        }
    }
}
