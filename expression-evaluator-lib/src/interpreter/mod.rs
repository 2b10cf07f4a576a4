pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod postfix;
pub mod token;

use crate::debug;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use std::collections::HashMap;
use string_builder::Builder;

/// Evaluates the given arithmetic expression against a variable mapping.
///
/// Runs the tokenizer, the infix-to-postfix converter and the postfix
/// evaluator in sequence, once each. No state is kept across calls; the
/// variable mapping stays owned by the caller.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `variables`: Mapping from variable name to its numeric value.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_evaluator::interpreter::calculate;
/// use std::collections::HashMap;
///
/// let variables = HashMap::from([("a".to_string(), 10.0), ("b".to_string(), 20.0)]);
/// let result = calculate("1+(2^3-4)+a-b".to_string(), &variables)?;
/// assert_eq!(result, -5.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: String, variables: &HashMap<String, f64>) -> Result<f64> {
    let tokens = lexer::tokenize(expression)?;
    debug!(&tokens);
    let postfix_tokens = postfix::infix_to_postfix(tokens)?;
    debug!(&postfix_tokens);
    let result = evaluator::evaluate(postfix_tokens, variables)?;
    Ok(result)
}

/// Pretty-prints the given vector of tokens, one space between each.
///
/// Re-tokenizing the printed text yields an equivalent token sequence.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_evaluator::interpreter::tokens_to_string;
/// use expression_evaluator::interpreter::token::Token;
/// use expression_evaluator::interpreter::operator::BinaryOperator;
///
/// let tokens = vec![
///     Token::Identifier("x".to_string()),
///     Token::Binary(BinaryOperator::Add),
///     Token::Literal(2.0),
/// ];
/// let text = tokens_to_string(tokens)?;
/// assert_eq!(text, "x + 2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for (index, token) in tokens.into_iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
