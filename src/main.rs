use elevenlabs_voices::{config::ExportConfig, run, transport::HttpTransport};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "elevenlabs_voices=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let transport = match HttpTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            println!("Connection error: {}", e.reason);
            std::process::exit(1);
        }
    };

    let code = run(
        std::env::args_os(),
        &transport,
        &ExportConfig::default(),
        &mut std::io::stdout().lock(),
    );
    std::process::exit(code);
}
