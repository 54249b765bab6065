//! Hamiltonian wire-format parser.
//!
//! The input is a sequence of records separated by the literal character
//! [`TERM_DELIMITER`]. Each record is
//!
//! ```text
//! <sign> <magnitude> <pauli> [<pauli> ...]
//! ```
//!
//! where `<sign>` is `-` for a negative coefficient (anything else reads as
//! positive), `<magnitude>` is a decimal number, and each `<pauli>` is either
//! the literal `I` or an operator letter `X`/`Y`/`Z` immediately followed by
//! a qubit index, e.g. `X0` or `Z3`. Pauli tokens compose left to right into
//! one tensor-product term.

use thiserror::Error;
use tracing::warn;

use alsvin_ir::{Pauli, PauliHamiltonian, PauliTerm};

/// Record separator of the wire format.
///
/// An opaque delimiter inherited from the source format; it carries no
/// operator meaning.
pub const TERM_DELIMITER: char = 'S';

/// Errors produced while parsing a Hamiltonian.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input contains no terms at all.
    #[error("input contains no Hamiltonian terms")]
    EmptyInput,

    /// A record is missing its sign or coefficient token.
    #[error("term {index} is malformed: expected '<sign> <coefficient> <pauli>...'")]
    MalformedTerm {
        /// 1-based record index.
        index: usize,
    },

    /// A coefficient token is not a decimal number.
    #[error("term {index}: invalid coefficient '{value}'")]
    InvalidCoefficient {
        /// 1-based record index.
        index: usize,
        /// The offending token.
        value: String,
    },

    /// An operator token uses a letter outside I/X/Y/Z.
    #[error("term {index}: unknown Pauli operator '{token}'")]
    UnknownOperator {
        /// 1-based record index.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// An operator token has a malformed qubit index.
    #[error("term {index}: invalid qubit index in '{token}'")]
    InvalidQubitIndex {
        /// 1-based record index.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// A record ended up with no operators.
    #[error("term {index} has no Pauli operators")]
    EmptyTerm {
        /// 1-based record index.
        index: usize,
    },
}

/// What to do with operator tokens the parser does not recognize.
///
/// The parser itself never silently drops data; the caller picks the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOperatorPolicy {
    /// Fail with [`ParseError::UnknownOperator`].
    #[default]
    Reject,
    /// Drop the token with a warning. A record whose every token is dropped
    /// is still an error: a term needs at least one operator.
    Skip,
}

/// Parse wire-format text into a [`PauliHamiltonian`].
///
/// Terms appear in the result in record order.
pub fn parse_hamiltonian(
    input: &str,
    policy: UnknownOperatorPolicy,
) -> Result<PauliHamiltonian, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut hamiltonian = PauliHamiltonian::empty();

    for (position, record) in input.split(TERM_DELIMITER).enumerate() {
        let index = position + 1;
        let tokens: Vec<&str> = record.split_whitespace().collect();

        if tokens.len() < 2 {
            return Err(ParseError::MalformedTerm { index });
        }
        let (sign, value) = (tokens[0], tokens[1]);

        let magnitude: f64 = value
            .parse()
            .map_err(|_| ParseError::InvalidCoefficient {
                index,
                value: value.to_string(),
            })?;
        let coefficient = if sign == "-" { -magnitude } else { magnitude };

        let pauli_tokens = &tokens[2..];
        if pauli_tokens.is_empty() {
            return Err(ParseError::EmptyTerm { index });
        }

        let mut operators = Vec::new();
        let mut recognized = 0_usize;
        for &token in pauli_tokens {
            // Identity acts on no particular qubit; it contributes no factor.
            if token == "I" {
                recognized += 1;
                continue;
            }

            let mut chars = token.chars();
            let Some(letter) = chars.next() else {
                continue;
            };
            let pauli = match letter {
                'X' => Pauli::X,
                'Y' => Pauli::Y,
                'Z' => Pauli::Z,
                _ => match policy {
                    UnknownOperatorPolicy::Reject => {
                        return Err(ParseError::UnknownOperator {
                            index,
                            token: token.to_string(),
                        });
                    }
                    UnknownOperatorPolicy::Skip => {
                        warn!(term = index, token, "dropping unrecognized Pauli token");
                        continue;
                    }
                },
            };

            let qubit: usize =
                chars
                    .as_str()
                    .parse()
                    .map_err(|_| ParseError::InvalidQubitIndex {
                        index,
                        token: token.to_string(),
                    })?;
            operators.push((qubit, pauli));
            recognized += 1;
        }

        if recognized == 0 {
            return Err(ParseError::EmptyTerm { index });
        }
        hamiltonian.add_term(PauliTerm::new(coefficient, operators));
    }

    Ok(hamiltonian)
}
