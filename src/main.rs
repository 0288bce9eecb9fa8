use clap::Parser;

use relconf::client::{self, HttpClient};
use relconf::{Cli, Error};

fn main() {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(error) = try_main(cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn try_main(cli: Cli) -> Result<(), Error> {
    let overrides = cli.overrides()?;
    let host = client::resolve_host(cli.host.clone(), std::env::var(client::HOST_ENV).ok());

    let client = HttpClient::new(host);
    let updated = relconf::run(&client, &cli.release, overrides, cli.policy())?;

    println!("Release \"{}\" updated", updated.name);
    Ok(())
}
