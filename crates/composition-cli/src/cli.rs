use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "composition",
    about = "Composition: function composition versus function application",
    version
)]
pub struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute double(add(a, b)) by application, composition, and currying
    Run {
        /// Left operand
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        a: i32,

        /// Right operand
        #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
        b: i32,

        /// Strategy to evaluate: application, composition, or curried
        /// (repeatable; all three when omitted)
        #[arg(long)]
        strategy: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count primitive calls to show that composition defers evaluation
    Laziness {
        /// Left operand
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        a: i32,

        /// Right operand
        #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
        b: i32,

        /// Strategy to witness (repeatable; all three when omitted)
        #[arg(long)]
        strategy: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults_to_three_and_seven() {
        let cli = Cli::try_parse_from(["composition", "run"]).expect("parse");
        match cli.command {
            Commands::Run {
                a,
                b,
                strategy,
                json,
            } => {
                assert_eq!((a, b), (3, 7));
                assert!(strategy.is_empty());
                assert!(!json);
            }
            Commands::Laziness { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn run_accepts_negative_operands_and_repeated_strategies() {
        let cli = Cli::try_parse_from([
            "composition",
            "run",
            "--a",
            "-4",
            "--b",
            "9",
            "--strategy",
            "curried",
            "--strategy",
            "apply",
            "--json",
        ])
        .expect("parse");
        match cli.command {
            Commands::Run {
                a,
                b,
                strategy,
                json,
            } => {
                assert_eq!((a, b), (-4, 9));
                assert_eq!(strategy, vec!["curried", "apply"]);
                assert!(json);
            }
            Commands::Laziness { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn operands_outside_i32_are_rejected() {
        let result = Cli::try_parse_from(["composition", "run", "--a", "4294967296"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["composition", "laziness", "--verbose"]).expect("parse");
        assert!(cli.verbose);
    }
}
