use crate::demo::{run_demo, run_estimate, DemoArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use swissclean::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Swissclean Quote Service",
    about = "Price calculator and lead intake for the company website",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with the price calculator without starting the server
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Run an end-to-end CLI demo covering estimation and lead intake
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuoteCommand {
    /// Print the estimate for one selection
    Estimate(EstimateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    // No subcommand means serve with the configured defaults.
    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => server::run(args).await,
        Command::Quote {
            command: QuoteCommand::Estimate(args),
        } => run_estimate(args),
        Command::Demo(args) => run_demo(args),
    }
}
