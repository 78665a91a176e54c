use std::io::BufRead;

use crate::{
    config::Config,
    context::Context,
    misc::log::targets,
    structures::{atom::Atom, literal::CLiteral},
    types::err::{self, BuildError, ParseError},
};

impl Context {
    /// Reads a DIMACS formula into a fresh context.
    ///
    /// Equivalent to `init` with the header's atom count, `add_clause` for
    /// each clause, and `finish`.
    ///
    /// ```rust
    /// # use sbva::config::Config;
    /// # use sbva::context::Context;
    /// # use std::io::Write;
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c an example
    /// p cnf 4 2
    ///  1  2 0
    /// -3  4 0
    /// ");
    ///
    /// let ctx = Context::from_dimacs(dimacs.as_slice(), Config::default()).unwrap();
    /// assert_eq!(ctx.num_vars(), 4);
    /// ```
    pub fn from_dimacs(mut reader: impl BufRead, config: Config) -> Result<Self, err::ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: Vec<CLiteral> = Vec::default();

        let mut context: Option<Context> = None;
        let mut expected_clauses: usize = 0;
        let mut parsed_clauses: usize = 0;
        let mut lines = 0;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.chars().next() {
                Some('c') | Some('\n') | None => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    let atoms: Atom = match problem_details.nth(2) {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    expected_clauses = match problem_details.next() {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    log::info!(target: targets::INGESTION, "Expecting {atoms} atoms and {expected_clauses} clauses");
                    context = Some(Context::init(atoms, config.clone()));
                }

                Some(_) => {
                    if buffer.trim().is_empty() {
                        continue 'line_loop;
                    }
                    let Some(ctx) = context.as_mut() else {
                        return Err(err::ErrorKind::from(ParseError::MissingHeader));
                    };

                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                if parsed_clauses == expected_clauses {
                                    return Err(err::ErrorKind::from(BuildError::ClauseOverrun));
                                }
                                parsed_clauses += 1;
                                ctx.add_clause(std::mem::take(&mut clause_buffer))?;
                            }
                            _ => match item.parse::<CLiteral>() {
                                Ok(literal) => clause_buffer.push(literal),
                                Err(_) => {
                                    return Err(err::ErrorKind::from(ParseError::Line(lines)))
                                }
                            },
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::MissingDelimiter));
        }

        match context {
            None => Err(err::ErrorKind::from(ParseError::MissingHeader)),
            Some(mut ctx) => {
                ctx.finish();
                Ok(ctx)
            }
        }
    }
}
