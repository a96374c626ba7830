use std::io;

use smsconnect::{Credentials, SmsConnectClient};
use tracing_subscriber::{EnvFilter, fmt};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let login = required_env("SMSCONNECT_LOGIN")?;
    let password = required_env("SMSCONNECT_PASSWORD")?;

    let client = SmsConnectClient::new(Credentials::new(login, password)?);
    let response = client.get_accepted_messages().await?;
    if !response.is_success() {
        println!("err: {:?}", response.err());
        return Ok(());
    }

    for item in response.received_messages() {
        println!(
            "received from {:?} at {:?}: {:?}",
            item.text("number"),
            item.text("time"),
            item.text("message")
        );
    }
    for item in response.delivery_reports() {
        println!(
            "report for sms {:?} to {:?}: status {:?}",
            item.text("idsms"),
            item.text("number"),
            item.text("status")
        );
    }

    Ok(())
}
