use clap::{error::ErrorKind, Parser};
use dotenv::dotenv;

use check_redis::Opts;
use check_redis::check::check_redis;
use check_redis::nagios::{CheckOutcome, Severity};

#[tokio::main(flavor = "current_thread")]
async fn main()
{
    dotenv().ok();
    env_logger::init();

    let options = match Opts::try_parse() {
        Ok(options) => options,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // the full usage goes to stderr, the single result line to stdout.
            let _ = e.print();
            let message = e.to_string().lines().next().unwrap_or_default().to_string();
            CheckOutcome::failed(Severity::Unknown, message).report()
        }
    };

    check_redis(&options).await.report()
}
