use crate::interpreter::error::RuntimeError;
use crate::interpreter::token::Token;
use std::collections::HashMap;

/// Evaluates a postfix token sequence into a single number.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix order.
/// * `variables`: Mapping from variable name to its numeric value.
///   Identifier tokens are looked up by exact, case-sensitive match.
///
/// returns: The numeric value of the expression.
pub fn evaluate(
    postfix_tokens: Vec<Token>,
    variables: &HashMap<String, f64>,
) -> Result<f64, RuntimeError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Literal(value) => stack.push(value),
            Token::Identifier(name) => {
                let value = variables
                    .get(&name)
                    .copied()
                    .ok_or(RuntimeError::UndefinedVariable { name })?;
                stack.push(value);
            }
            Token::Binary(operator) => {
                // The most recently pushed value is the right operand.
                let right = pop_operand(&mut stack, operator.symbol())?;
                let left = pop_operand(&mut stack, operator.symbol())?;
                stack.push(operator.evaluate(left, right));
            }
            Token::Unary(operator) => {
                let operand = pop_operand(&mut stack, operator.symbol())?;
                stack.push(operator.evaluate(operand));
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(RuntimeError::UnexpectedParenthesis);
            }
        }
    }

    let result = stack.pop().ok_or(RuntimeError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(RuntimeError::UnusedOperands { count: stack.len() });
    }
    Ok(result)
}

fn pop_operand(stack: &mut Vec<f64>, operator: char) -> Result<f64, RuntimeError> {
    stack.pop().ok_or(RuntimeError::MissingOperand {
        operator: operator.to_string(),
    })
}
