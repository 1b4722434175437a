//! Client command

use anyhow::Result;
use bankacct_core::{Client, ClientNumber};
use tracing::info;

use crate::config::CliConfig;

pub fn run(config: &CliConfig, number: &str, first: &str, last: &str, email: &str) -> Result<()> {
    let client_number: ClientNumber = number.parse()?;
    let client = Client::new(client_number, first, last, email)?;
    info!(client = %client_number, email = client.email_address(), "Client validated");

    if config.json {
        println!("{}", serde_json::to_string_pretty(&client)?);
    } else {
        println!("{}", client);
        println!("Email: {}", client.email_address());
    }

    Ok(())
}
