use oauth2_request::config::Config;
use oauth2_request::observability::init_telemetry;

// Build an authorization request from a URL-encoded query string and print it
// as JSON, e.g. `oauth2-request 'client_id=app&scope=read%20write&state=xyz'`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match Config::from_hocon() {
        Ok(config) => (config, None),
        Err(e) => (Config::from_env_defaults(), Some(e)),
    };
    init_telemetry("oauth2-request", &config.logging)?;

    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load HOCON config: {}. Falling back to environment variables.",
            e
        );
    }

    let query = std::env::args().nth(1).unwrap_or_default();
    println!("{}", oauth2_request::run(&query, &config)?);

    Ok(())
}
