use std::fmt;
use std::fmt::Formatter;

/// Errors that can occur while turning source text into tokens or
/// reordering tokens into postfix form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a character outside the accepted alphabet.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input expression.
        position: usize,
    },
    /// A numeric literal could not be converted into a number.
    InvalidLiteral {
        /// The literal text as it appeared in the input.
        text: String,
    },
    /// Parentheses in the expression do not pair up.
    MismatchedParenthesis,
}

/// Errors that can occur while evaluating a postfix token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The expression references a variable with no entry in the mapping.
    UndefinedVariable {
        /// Name of the missing variable.
        name: String,
    },
    /// An operator was applied with too few operands on the stack.
    MissingOperand {
        /// Symbol of the operator that could not be applied.
        operator: String,
    },
    /// More than one value remained once all tokens were consumed.
    UnusedOperands {
        /// Number of leftover values.
        count: usize,
    },
    /// No value remained once all tokens were consumed.
    EmptyExpression,
    /// A parenthesis token reached the evaluator; postfix input never
    /// contains parentheses.
    UnexpectedParenthesis,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Unrecognized character '{}' at position {}",
                    character, position
                )
            }
            Self::InvalidLiteral { text } => {
                write!(f, "'{}' is not a valid numeric literal", text)
            }
            Self::MismatchedParenthesis => write!(f, "Mismatched parenthesis"),
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Variable '{}' is not defined", name)
            }
            Self::MissingOperand { operator } => {
                write!(f, "Operator '{}' is missing an operand", operator)
            }
            Self::UnusedOperands { count } => {
                write!(f, "Expression left {} unused operand(s)", count)
            }
            Self::EmptyExpression => write!(f, "Expression produced no value"),
            Self::UnexpectedParenthesis => {
                write!(f, "Parenthesis encountered in postfix input")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl std::error::Error for RuntimeError {}
