use std::io;

use smsconnect::{Credentials, MessageText, PhoneNumber, Sms, SmsConnectClient};
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
    let numbers = required_env("SMSCONNECT_NUMBERS")?;
    let message = std::env::var("SMSCONNECT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsconnect demo.".to_owned());

    let messages = numbers
        .split(',')
        .map(|number| {
            Ok(Sms::new(
                PhoneNumber::new(number)?,
                MessageText::new(message.clone())?,
            ))
        })
        .collect::<Result<Vec<_>, smsconnect::ValidationError>>()?;

    let client = SmsConnectClient::new(Credentials::new(login, password)?);
    let response = client.send_multiple_sms(messages).await?;
    println!("err: {:?}, document: {:?}", response.err(), response.document());

    Ok(())
}
