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
    let response = client.get_credit_status().await?;
    println!("err: {:?}, credit: {:?}", response.err(), response.credit());

    Ok(())
}
