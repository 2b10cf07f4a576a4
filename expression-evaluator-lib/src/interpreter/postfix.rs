use crate::interpreter::error::ParseError;
use crate::interpreter::operator::Associativity;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Reorders the given infix token sequence into postfix (Reverse Polish)
/// order using the shunting-yard algorithm.
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Literal(_) | Token::Identifier(_) => output.push(token),
            Token::LeftParenthesis => operators.push_front(token),
            Token::Binary(_) | Token::Unary(_) => {
                shunt_operator(&mut operators, &mut output, token)
            }
            Token::RightParenthesis => {
                shunt_closing_parenthesis(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ParseError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(ParseError::MismatchedParenthesis);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn shunt_closing_parenthesis(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ParseError> {
    loop {
        match operators.pop_front() {
            None => return Err(ParseError::MismatchedParenthesis),
            // Discard the left parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn shunt_operator(operators: &mut VecDeque<Token>, output: &mut Vec<Token>, token: Token) {
    let precedence = token.precedence();
    let associativity = token.associativity();
    while let Some(top_of_operator_stack) = operators.front() {
        let top_precedence = match top_of_operator_stack.precedence() {
            Some(top_precedence) => top_precedence,
            // A left parenthesis fences off the rest of the stack.
            None => break,
        };
        if Some(top_precedence) < precedence
            || (Some(top_precedence) == precedence && associativity == Some(Associativity::Right))
        {
            break;
        }
        if let Some(popped) = operators.pop_front() {
            output.push(popped);
        }
    }

    operators.push_front(token);
}
