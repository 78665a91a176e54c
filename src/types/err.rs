/*!
Error types used in the library.

- Parse errors concern the DIMACS text of a formula.
- Build errors concern clauses added to a formula, from any source.

Budget exhaustion (time, steps, replacements) is *not* an error: the driver
stops gracefully and the partially transformed formula is complete and
consistent.

Names of the error enums overlap with corresponding concerns, and so
`err::{self}` is often used to prefix use of the types with `err::`.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error related to parsing DIMACS text.
    Parse(ParseError),

    /// An error when building a formula.
    Build(BuildError),
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A clause appeared before (or without) the `p cnf …` header.
    MissingHeader,

    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The input ended with an unterminated clause.
    MissingDelimiter,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when adding a clause to a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A literal of `0` inside a clause.
    ZeroLiteral,

    /// A literal over an atom greater than the declared atom count.
    OutOfRange(i32),

    /// More clauses than the header declared.
    ClauseOverrun,

    /// An attempt to add a clause after ingestion finished.
    InputClosed,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "the formula does not have a header"),
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::Line(line) => write!(f, "unreadable input at line {line}"),
            Self::MissingDelimiter => write!(f, "the final clause is unterminated"),
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLiteral => write!(f, "a clause contains the literal 0"),
            Self::OutOfRange(literal) => {
                write!(f, "the literal {literal} exceeds the declared atom count")
            }
            Self::ClauseOverrun => write!(f, "more clauses than the header declared"),
            Self::InputClosed => write!(f, "a clause was added after ingestion finished"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "{e}"),
        }
    }
}
