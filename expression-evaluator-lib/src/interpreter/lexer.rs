use crate::interpreter::error::ParseError;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::token::Token;
use itertools::Itertools;

/// Scans the given expression into an ordered sequence of tokens.
///
/// The expression is wrapped in one outer pair of parentheses before
/// scanning, which lets the postfix converter drain its operator stack at
/// end-of-input without a special case.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in source order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_evaluator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("1 + rate".to_string())?;
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: String) -> Result<Vec<Token>, ParseError> {
    let wrapped = format!("({})", expression);
    let mut tokens: Vec<Token> = Vec::new();
    let mut characters = wrapped.chars().peekable();
    let mut position: usize = 0;

    while let Some(&character) = characters.peek() {
        match character {
            character if character.is_whitespace() => {
                characters.next();
                position += 1;
            }
            '(' => {
                characters.next();
                position += 1;
                tokens.push(Token::LeftParenthesis);
            }
            ')' => {
                characters.next();
                position += 1;
                tokens.push(Token::RightParenthesis);
            }
            '+' | '-' | '*' | '/' | '^' => {
                characters.next();
                position += 1;
                tokens.push(operator_token(character, tokens.last()));
            }
            character if character.is_ascii_alphabetic() => {
                let name: String = characters
                    .peeking_take_while(|character| character.is_ascii_alphabetic())
                    .collect();
                position += name.len();
                tokens.push(Token::Identifier(name));
            }
            character if character.is_ascii_digit() => {
                let digits: String = characters
                    .peeking_take_while(|character| character.is_ascii_digit())
                    .collect();
                position += digits.len();
                let value = digits
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidLiteral {
                        text: digits.clone(),
                    })?;
                tokens.push(Token::Literal(value));
            }
            unrecognized => {
                // Positions are reported relative to the unwrapped input.
                return Err(ParseError::UnrecognizedCharacter {
                    character: unrecognized,
                    position: position.saturating_sub(1),
                });
            }
        }
    }

    Ok(tokens)
}

/// A `-` negates when nothing of value precedes it: at the start of the
/// expression, right after another operator, or right after `(`.
fn operator_token(symbol: char, previous: Option<&Token>) -> Token {
    let unary_context = matches!(
        previous,
        None | Some(Token::Binary(_)) | Some(Token::Unary(_)) | Some(Token::LeftParenthesis)
    );
    match symbol {
        '+' => Token::Binary(BinaryOperator::Add),
        '-' if unary_context => Token::Unary(UnaryOperator::Negate),
        '-' => Token::Binary(BinaryOperator::Subtract),
        '*' => Token::Binary(BinaryOperator::Multiply),
        '/' => Token::Binary(BinaryOperator::Divide),
        _ => Token::Binary(BinaryOperator::Exponentiate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_expression_returns_wrapped_tokens() {
        let tokens = tokenize("1+2".to_string()).unwrap();

        let expected = vec![
            Token::LeftParenthesis,
            Token::Literal(1.0),
            Token::Binary(BinaryOperator::Add),
            Token::Literal(2.0),
            Token::RightParenthesis,
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn whitespace_is_skipped() {
        let spaced = tokenize("1 + 2".to_string()).unwrap();
        let dense = tokenize("1+2".to_string()).unwrap();

        assert_eq!(spaced, dense);
    }

    #[test]
    fn letter_run_becomes_single_identifier() {
        let tokens = tokenize("var".to_string()).unwrap();

        let expected = vec![
            Token::LeftParenthesis,
            Token::Identifier("var".to_string()),
            Token::RightParenthesis,
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn mixed_case_identifier_keeps_exact_text() {
        let tokens = tokenize("Rate".to_string()).unwrap();

        assert_eq!(tokens[1], Token::Identifier("Rate".to_string()));
    }

    #[test]
    fn digit_run_becomes_single_literal() {
        let tokens = tokenize("1234".to_string()).unwrap();

        assert_eq!(tokens[1], Token::Literal(1234.0));
    }

    #[test]
    fn adjacent_identifier_and_literal_are_separate_tokens() {
        let tokens = tokenize("var2".to_string()).unwrap();

        let expected = vec![
            Token::LeftParenthesis,
            Token::Identifier("var".to_string()),
            Token::Literal(2.0),
            Token::RightParenthesis,
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn minus_after_value_is_subtraction() {
        let tokens = tokenize("1-2".to_string()).unwrap();

        assert_eq!(tokens[2], Token::Binary(BinaryOperator::Subtract));
    }

    #[test]
    fn minus_after_operator_is_negation() {
        let tokens = tokenize("2^-3".to_string()).unwrap();

        assert_eq!(tokens[3], Token::Unary(UnaryOperator::Negate));
    }

    #[test]
    fn minus_after_left_parenthesis_is_negation() {
        let tokens = tokenize("(-5)".to_string()).unwrap();

        assert_eq!(tokens[2], Token::Unary(UnaryOperator::Negate));
    }

    #[test]
    fn leading_minus_is_negation() {
        let tokens = tokenize("-5".to_string()).unwrap();

        assert_eq!(tokens[1], Token::Unary(UnaryOperator::Negate));
    }

    #[test]
    fn repeated_minus_stays_unary() {
        let tokens = tokenize("--5".to_string()).unwrap();

        assert_eq!(tokens[1], Token::Unary(UnaryOperator::Negate));
        assert_eq!(tokens[2], Token::Unary(UnaryOperator::Negate));
    }

    #[test]
    fn unrecognized_character_reports_original_position() {
        let error = tokenize("1 & 2".to_string()).unwrap_err();

        assert_eq!(
            error,
            ParseError::UnrecognizedCharacter {
                character: '&',
                position: 2,
            }
        );
    }
}
