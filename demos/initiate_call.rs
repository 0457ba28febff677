use messagebird_voice::types::CallFlow;
use messagebird_voice::{CallInitiator, Client};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Empty numbers are sent as-is and will be rejected by the platform.
    let source = std::env::var("SOURCE_NUMBER").unwrap_or_default();
    let destination = std::env::var("DESTINATION_NUMBER").unwrap_or_default();

    let call_flow = CallFlow::builder()
        .with_title("Test flow")
        .with_say(
            "female",
            "Hey you, a little bird told me you wanted a call!",
            "en-GB",
        )
        .build();

    let initiator = CallInitiator::new(Client::from_env());
    initiator.run(&source, &destination, call_flow, None).await;

    Ok(())
}
