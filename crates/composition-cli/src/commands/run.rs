use crate::support::{parse_strategies_or_exit, print_json, yes_no};
use composition_kernel::run_demo;

pub fn run(a: i32, b: i32, strategy: Vec<String>, json_output: bool) {
    let strategies = parse_strategies_or_exit(&strategy);
    let report = run_demo(i64::from(a), i64::from(b), &strategies);

    if json_output {
        print_json(&report);
    } else {
        println!("composition run --a {a} --b {b}");
        for evaluation in &report.evaluations {
            println!("  {}: {}", evaluation.strategy, evaluation.value);
        }
        println!("  Agree: {}", yes_no(report.agree));
    }

    if !report.agree {
        std::process::exit(1);
    }
}
