use crate::demo::{run_allocate, run_demo, AllocateArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dca_sentinel::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DCA Sentinel",
    about = "Score collection agencies, allocate overdue cases, and render governance reports",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Allocate cases from CSV exports and write the HTML dashboard
    Allocate(AllocateArgs),
    /// Run the allocation on built-in synthetic agencies and cases
    Demo(DemoArgs),
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
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Allocate(args) => run_allocate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_allocate_arguments() {
        let cli = Cli::try_parse_from([
            "dca-sentinel",
            "allocate",
            "--cases",
            "cases.csv",
            "--agencies",
            "dcas.csv",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Allocate(args)) => {
                assert_eq!(args.cases, PathBuf::from("cases.csv"));
                assert_eq!(args.agencies, PathBuf::from("dcas.csv"));
                assert!(args.report.json);
                assert!(args.report.output.is_none());
            }
            other => panic!("expected allocate command, got {other:?}"),
        }
    }

    #[test]
    fn allocate_requires_both_exports() {
        let result = Cli::try_parse_from(["dca-sentinel", "allocate", "--cases", "cases.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["dca-sentinel"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn demo_accepts_report_date() {
        let cli = Cli::try_parse_from(["dca-sentinel", "demo", "--today", "2025-10-01"])
            .expect("arguments parse");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(
                    args.report.today.map(|date| date.to_string()),
                    Some("2025-10-01".to_string())
                );
            }
            other => panic!("expected demo command, got {other:?}"),
        }
    }
}
