use std::process;

use clap::Parser;
use log::debug;

use dhcp_probe::{privileges, Args, Error, Probe};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    if let Err(error) = run(args).await {
        eprintln!("{}", error);
        process::exit(error.exit_code());
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let config = args.config();
    let hardware_address = args.hardware_address()?;
    privileges::check(config.client_port)?;

    let probe = Probe::new(config, hardware_address);
    let exchange = probe.discover().await?;
    println!(
        "DHCP Discover sent to {}\nwaiting for reply...",
        probe.config().server_address
    );

    let report = exchange.wait_offer().await?;
    print!("{}", report);
    Ok(())
}
