//! devopen binary entry point. All logic lives in the library.

use clap::Parser;
use devopen::command::{self, OpenRequest};

/// Open the project behind a database in your code editor
#[derive(Parser, Debug)]
#[command(name = "devopen")]
#[command(about = "Open the project behind a database in your code editor", long_about = None)]
struct Args {
    /// Database name (defaults to the configured default database)
    #[arg(value_name = "DATABASE")]
    database: Option<String>,

    /// Open an explicit repository instead of the database's one
    #[arg(long, value_name = "OWNER/NAME")]
    repository: Option<String>,

    /// List enabled editor plugins and exit
    #[arg(long)]
    list_editors: bool,
}

fn main() {
    devopen::logging::init();

    let args = Args::parse();

    let result = if args.list_editors {
        command::list_editors()
    } else {
        command::open_editor(&OpenRequest {
            database: args.database,
            repository: args.repository,
        })
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
