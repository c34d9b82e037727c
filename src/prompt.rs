//! Interactive boundary layer: prompt, validate, re-prompt.
//!
//! The core simulation is a total function over validated inputs, so all
//! input checking lives here. Each parameter is requested in a loop that
//! discards malformed or out-of-range lines, prints a diagnostic naming the
//! accepted range, and asks again. Generic over `BufRead`/`Write` so tests
//! can drive the dialogue with byte buffers instead of a terminal.

use std::io::{self, BufRead, Write};

use crate::constants::{MAX_VOTERS, MIN_VOTERS};
use crate::types::{ElectionParams, ParamError};

/// Run the full three-question dialogue and return validated parameters.
///
/// Question order matches the original program: voters, error rate, spread.
/// Only I/O failures surface as errors; bad values just re-prompt.
pub fn read_params<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<ElectionParams> {
    let voters = prompt_until(input, out, "Enter the number of voters", parse_voters)?;
    let error_rate = prompt_until(
        input,
        out,
        "Enter the voting error percentage",
        parse_unit_interval(ParamError::ErrorRateOutOfRange),
    )?;
    let spread = prompt_until(
        input,
        out,
        "Enter the percentage spread between the two candidates.",
        parse_unit_interval(ParamError::SpreadOutOfRange),
    )?;
    Ok(ElectionParams {
        voters,
        spread,
        error_rate,
    })
}

/// Print `prompt`, read one line, and parse it; repeat until a value passes.
///
/// A read of zero bytes means the input stream closed with no valid value in
/// sight, which is unrecoverable for an interactive program.
fn prompt_until<R: BufRead, W: Write, T>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, ParamError>,
) -> io::Result<T> {
    let mut line = String::new();
    loop {
        writeln!(out, "{prompt}")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            ));
        }
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(out, "Invalid entry, {err}.")?,
        }
    }
}

/// Parse an electorate size. Non-numeric input gets the same range
/// diagnostic as an out-of-range number, matching the original dialogue.
fn parse_voters(raw: &str) -> Result<u32, ParamError> {
    let voters: u32 = raw.parse().map_err(|_| ParamError::VoterCountOutOfRange)?;
    if (MIN_VOTERS..=MAX_VOTERS).contains(&voters) {
        Ok(voters)
    } else {
        Err(ParamError::VoterCountOutOfRange)
    }
}

/// Parser for a value strictly inside (0, 1), reporting `err` on violation.
fn parse_unit_interval(err: ParamError) -> impl Fn(&str) -> Result<f64, ParamError> {
    move |raw| {
        let value: f64 = raw.parse().map_err(|_| err)?;
        if value > 0.0 && value < 1.0 {
            Ok(value)
        } else {
            Err(err)
        }
    }
}
