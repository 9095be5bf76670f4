use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Env vars consulted for a filter, highest precedence first.
const FILTER_ENV_VARS: [&str; 2] = ["VOLLEY_LOG", "RUST_LOG"];

pub fn init_logging(verbose: bool, no_color: bool) {
    let from_env = env_directives(|name| std::env::var(name).ok());
    let filter = build_filter(&filter_directives(from_env.as_deref(), verbose));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn env_directives<L>(lookup: L) -> Option<String>
where
    L: Fn(&str) -> Option<String>,
{
    FILTER_ENV_VARS.iter().find_map(|name| lookup(name))
}

fn filter_directives(from_env: Option<&str>, verbose: bool) -> String {
    match from_env {
        Some(value) => value.to_owned(),
        None if verbose => "debug".to_owned(),
        None => "info".to_owned(),
    }
}

fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}
