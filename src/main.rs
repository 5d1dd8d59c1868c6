use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Logging goes to stderr; stdout is reserved for the session itself.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    teller::run()
}
