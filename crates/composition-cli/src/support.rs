use composition_kernel::{CompositionError, Strategy};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, falling back
/// to `warn`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn parse_strategies(raw: &[String]) -> Result<Vec<Strategy>, CompositionError> {
    if raw.is_empty() {
        return Ok(Strategy::ALL.to_vec());
    }
    raw.iter().map(|value| value.parse()).collect()
}

pub fn parse_strategies_or_exit(raw: &[String]) -> Vec<Strategy> {
    parse_strategies(raw).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn print_json(payload: &impl Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strategy_list_means_all() {
        assert_eq!(parse_strategies(&[]), Ok(Strategy::ALL.to_vec()));
    }

    #[test]
    fn strategies_keep_order_and_aliases() {
        let raw = vec!["curry".to_string(), "application".to_string()];
        assert_eq!(
            parse_strategies(&raw),
            Ok(vec![Strategy::Curried, Strategy::Application])
        );
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let raw = vec!["compose".to_string(), "pipe".to_string()];
        assert!(parse_strategies(&raw).is_err());
    }
}
