use crate::support::{parse_strategies_or_exit, print_json};
use composition_kernel::{CallCounts, LazinessWitness, witness_laziness};

pub fn run(a: i32, b: i32, strategy: Vec<String>, json_output: bool) {
    let strategies = parse_strategies_or_exit(&strategy);
    let witnesses: Vec<LazinessWitness> = strategies
        .iter()
        .map(|strategy| witness_laziness(*strategy, i64::from(a), i64::from(b)))
        .collect();

    if json_output {
        print_json(&witnesses);
    } else {
        println!("composition laziness --a {a} --b {b}");
        for witness in &witnesses {
            let mut line = format!(
                "  {}: built {}",
                witness.strategy,
                counts(&witness.constructed)
            );
            if let Some(partial) = &witness.partially_applied {
                line.push_str(&format!(", after a {}", counts(partial)));
            }
            line.push_str(&format!(
                ", invoked {} -> {} ({})",
                counts(&witness.invoked),
                witness.value,
                if witness.is_lazy() { "lazy" } else { "eager" }
            ));
            println!("{line}");
        }
    }

    if witnesses.iter().any(|witness| !witness.matches_strategy()) {
        tracing::error!("a strategy did not defer evaluation as expected");
        std::process::exit(1);
    }
}

fn counts(observed: &CallCounts) -> String {
    format!("[add={}, double={}]", observed.add, observed.double_value)
}
