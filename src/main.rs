use clap::{Parser, Subcommand};
use coffeectl::{AppError, Intent, SetupArgs};

#[derive(Parser)]
#[command(name = "coffeectl")]
#[command(version)]
#[command(
    about = "Control the Sunday Coffee status page via its GitHub update workflow",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a GitHub token and store the configuration
    Setup {
        /// GitHub token with access to dispatch the workflow
        #[arg(long)]
        token: Option<String>,
        /// Repository owner
        #[arg(long)]
        owner: Option<String>,
        /// Repository name
        #[arg(long)]
        name: Option<String>,
        /// Workflow file to dispatch
        #[arg(long)]
        workflow: Option<String>,
    },
    /// Turn coffee ON for next Sunday
    On,
    /// Turn coffee OFF for next Sunday
    Off,
    /// Show the configured repository and the upcoming Sunday
    #[clap(visible_alias = "st")]
    Status,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Setup { token, owner, name, workflow } => {
            coffeectl::setup(SetupArgs { token, owner, name, workflow })
        }
        Commands::On => coffeectl::press(Intent::Activate),
        Commands::Off => coffeectl::press(Intent::Deactivate),
        Commands::Status => coffeectl::status(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
