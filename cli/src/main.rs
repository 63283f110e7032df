use std::fs;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use cli::{ApiClient, CliError};
use records::ModuleRecord;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "wb", about = "World Builder module store CLI")]
struct Cli {
    #[arg(long, env = "WB_BASE_URL", default_value = "http://127.0.0.1:7001")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Modules(ModulesCommand),
}

#[derive(Args, Debug)]
struct ModulesCommand {
    #[command(subcommand)]
    command: ModulesSubcommand,
}

#[derive(Subcommand, Debug)]
enum ModulesSubcommand {
    /// List id, name and type of every stored module.
    List,
    /// Print one module record.
    Get { id: String },
    /// Store a module record read from a JSON file.
    Create {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        file: String,
    },
    /// Print the blank record the editor starts from.
    Template,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => {
            ApiClient::new(cli.base_url)?.health().await?;
            println!("ok");
            Ok(())
        }
        Command::Modules(modules) => run_modules(&cli.base_url, modules).await,
    }
}

async fn run_modules(base_url: &str, modules: ModulesCommand) -> Result<(), CliError> {
    match modules.command {
        ModulesSubcommand::List => {
            let list = ApiClient::new(base_url)?.list_modules().await?;
            print_json(&list)
        }
        ModulesSubcommand::Get { id } => match ApiClient::new(base_url)?.get_module(&id).await? {
            Some(record) => print_json(&record),
            None => Err(CliError::Server { status: 404, message: format!("no module with id {id}") }),
        },
        ModulesSubcommand::Create { file } => {
            let record = serde_json::from_str::<ModuleRecord>(&read_input(&file)?)?;
            let id = ApiClient::new(base_url)?.create_module(&record).await?;
            println!("{id}");
            Ok(())
        }
        ModulesSubcommand::Template => print_json(&ModuleRecord::template()),
    }
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
