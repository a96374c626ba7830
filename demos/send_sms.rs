use std::io;

use smsconnect::{Credentials, MessageText, PhoneNumber, Sms, SmsConnectClient, SmsOptions};
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
    let number = required_env("SMSCONNECT_NUMBER")?;
    let message = std::env::var("SMSCONNECT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsconnect demo.".to_owned());

    let client = SmsConnectClient::new(Credentials::new(login, password)?);
    let sms = Sms::with_options(
        PhoneNumber::new(number)?,
        MessageText::new(message)?,
        SmsOptions {
            delivery_report: Some(true),
            ..Default::default()
        },
    );

    let response = client.send_sms(sms).await?;
    println!(
        "err: {:?}, sms_id: {:?}, price: {:?}, credit: {:?}",
        response.err(),
        response.sms_id(),
        response.price(),
        response.credit()
    );

    Ok(())
}
