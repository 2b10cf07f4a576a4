use anyhow::{anyhow, Context, Result};
use clap::Parser;
use expression_evaluator::interpreter::calculate;
use log::debug;
use std::collections::HashMap;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate
    expression: String,

    /// A variable binding on the form name=value, repeatable
    #[clap(short = 'D', long = "variable", value_name = "NAME=VALUE")]
    variables: Vec<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    let variables = parse_bindings(&arguments.variables)?;
    debug!(
        "evaluating '{}' with {} variable binding(s)",
        arguments.expression,
        variables.len()
    );

    let result = calculate(arguments.expression, &variables)?;
    println!("{}", result);
    Ok(())
}

fn parse_bindings(bindings: &[String]) -> Result<HashMap<String, f64>> {
    let mut variables = HashMap::new();
    for binding in bindings {
        let (name, value) = binding
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected a binding on the form name=value, got '{}'", binding))?;
        let value = value
            .parse::<f64>()
            .with_context(|| format!("Invalid numeric value in binding '{}'", binding))?;
        variables.insert(name.to_string(), value);
    }
    Ok(variables)
}
