use crate::interpreter::operator::{Associativity, BinaryOperator, UnaryOperator};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression.
#[derive(Clone, PartialEq)]
pub enum Token {
    Literal(f64),
    Identifier(String),
    Binary(BinaryOperator),
    Unary(UnaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    /// A 'value' is a token that either represents, contains or is a numerical value.
    /// E.g. a literal or identifier.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Literal(_)) || matches!(self, Token::Identifier(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Binary(_)) || matches!(self, Token::Unary(_))
    }

    /// Precedence rank of an operator token; higher binds tighter.
    /// Non-operator tokens have none.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Binary(operator) => Some(operator.precedence()),
            Token::Unary(operator) => Some(operator.precedence()),
            _ => None,
        }
    }

    /// Associativity of an operator token. Non-operator tokens have none.
    pub fn associativity(&self) -> Option<Associativity> {
        match self {
            Token::Binary(operator) => Some(operator.associativity()),
            Token::Unary(operator) => Some(operator.associativity()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Binary(operator) => write!(f, "{}", operator),
            Token::Unary(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Binary(BinaryOperator::Add)),
            "-" => Ok(Token::Binary(BinaryOperator::Subtract)),
            "*" => Ok(Token::Binary(BinaryOperator::Multiply)),
            "/" => Ok(Token::Binary(BinaryOperator::Divide)),
            "^" => Ok(Token::Binary(BinaryOperator::Exponentiate)),
            "(" => Ok(Token::LeftParenthesis),
            ")" => Ok(Token::RightParenthesis),
            input => Ok(parse_literal_or_identifier(input)),
        }
    }
}

fn parse_literal_or_identifier(text: &str) -> Token {
    let number = text.parse::<f64>();
    match number {
        Ok(value) => Token::Literal(value),
        Err(_) => Token::Identifier(text.to_string()),
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
