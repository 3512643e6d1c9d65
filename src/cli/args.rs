use crate::Method;
use clap::Parser;

/// Environment variable selecting the terminal log level.
pub const LOG_ENV: &str = "STONES_LOG";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Jogo das Pedras: decide se vence com n pedras (retira 1, 2 ou 3)",
    long_about = None
)]
pub struct Args {
    /// Pile size, n >= 0
    #[arg(required = true, allow_negative_numbers = true)]
    pub n: String,
    /// Recursion technique used to decide the pile
    #[arg(long = "metodo", short = 'm', value_enum, default_value_t = Method::default())]
    pub method: Method,
    /// Run every método and print one line each
    #[arg(long = "todos", conflicts_with = "method")]
    pub all: bool,
    /// Also print the outcomes of piles 0..k as a list
    #[arg(long = "tabela", value_name = "k")]
    pub table: Option<u64>,
    /// Log at debug level regardless of STONES_LOG
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Terminal log level from flags, then environment, then `warn`.
    pub fn level(&self) -> log::LevelFilter {
        if self.verbose {
            return log::LevelFilter::Debug;
        }
        std::env::var(LOG_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Warn)
    }
}
