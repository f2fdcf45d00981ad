//! Command-line entry point for the IAM access report.
//!
//! Reads an API key from a credential file, authenticates against the IAM
//! service, and prints the access group and authorization report for the
//! account, or for one IAM ID. Fetched records can be inspected through the
//! log, steered by `RUST_LOG` (for example `RUST_LOG=info`).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use iam_access_report_core::{
    read_api_key, AccessReportService, ApiError, IamClient, ReportError, ReportOptions,
    DEFAULT_IAM_ENDPOINT,
};
use log::info;

/// Report the IAM access groups and policies of an account or of one IAM ID.
#[derive(Debug, Parser)]
#[command(name = "iam-access-report", version, about)]
struct Cli {
    /// Path to a JSON credential file containing an `apikey` field
    #[arg(long = "cred", value_name = "FILE")]
    cred: PathBuf,

    /// IAM ID (user or service ID) to scope the report to; omitted, the
    /// report covers the whole account
    #[arg(long = "user", value_name = "IAM_ID")]
    user: Option<String>,

    /// Also dump the full record, history included, of service IDs
    /// referenced by policy resources
    #[arg(long = "ext")]
    ext: bool,

    /// Base URL of the IAM API
    #[arg(
        long = "iam-endpoint",
        value_name = "URL",
        env = "IAM_ENDPOINT",
        default_value = DEFAULT_IAM_ENDPOINT
    )]
    iam_endpoint: String,
}

const USAGE_HINT: &str = "Usage: iam-access-report --cred <FILE> [--user <IAM_ID>] [--ext]";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Configuration problems read like bad arguments: name the problem,
        // show the usage line, exit as a usage error.
        Err(
            err @ (ReportError::Credential { .. } | ReportError::Api(ApiError::Endpoint { .. })),
        ) => {
            eprintln!("iam-access-report: {err}");
            eprintln!("{USAGE_HINT}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("iam-access-report: error: {:?}", anyhow::Error::from(err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ReportError> {
    info!("reading credentials from {}", cli.cred.display());
    let api_key = read_api_key(&cli.cred)?;

    let client = IamClient::new(&cli.iam_endpoint)?;
    let service = AccessReportService::new(client, &api_key).await?;

    let options = ReportOptions {
        iam_id: cli.user,
        include_service_ids: cli.ext,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    service.run(&options, &mut out).await
}
