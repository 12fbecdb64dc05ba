use clap::Parser;
use quill_service::Config;
use quill_service::ConfigError;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Interactive shell over an in-memory quill blog",
    long_about = None
)]
pub struct Args {
    /// Token signing secret. A random one is generated when absent.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    secret: Option<String>,
    /// Access token lifetime, e.g. 45s, 30m, 2h.
    #[arg(long, env = "TOKEN_TTL", default_value = "30m")]
    ttl: String,
    /// Clock skew tolerated past a token's expiry.
    #[arg(long, env = "TOKEN_LEEWAY", default_value = "0s")]
    leeway: String,
    /// Repeat for more terminal logging.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::from_parts(
            self.secret.as_deref(),
            Some(self.ttl.as_str()),
            Some(self.leeway.as_str()),
        )
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
