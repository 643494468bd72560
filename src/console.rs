//! Interactive console front-end.
//!
//! A thin shell over [`AuthFlow`]: prompts for the three form fields,
//! relays the sign-up question, and renders each role's dashboard as a
//! terminal banner. All decisions live in the flow; this module only
//! moves strings between the streams and the flow.

use std::io::{self, BufRead, Write};

use rolegate_auth::{AuthError, AuthFlow, Outcome, SubmitRequest};
use rolegate_store::Role;

/// Run the form against stdin/stdout until a login succeeds or input
/// ends.
pub fn run(flow: &AuthFlow) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(flow, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive the form loop over arbitrary input/output streams.
///
/// Validation and duplicate errors are shown and the form re-prompts;
/// storage errors abort the session. The loop ends when a login
/// succeeds (dashboard shown) or the input stream ends.
pub fn run_with<R: BufRead, W: Write>(
    flow: &AuthFlow,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(output, "=== User Authentication ===")?;

    loop {
        let Some(role) = prompt(input, output, "Role (Admin/Supplier/Client): ")? else {
            return Ok(());
        };
        let Some(name) = prompt(input, output, "Name: ")? else {
            return Ok(());
        };
        let Some(email) = prompt(input, output, "Email: ")? else {
            return Ok(());
        };

        let request = SubmitRequest::new(role, name, email);
        match flow.submit(&request) {
            Ok(Outcome::Authenticated { role, name }) => {
                writeln!(output, "Welcome back, {name}!")?;
                open_dashboard(output, role, &name)?;
                return Ok(());
            }
            Ok(Outcome::Unconfirmed(pending)) => {
                let Some(answer) = prompt(
                    input,
                    output,
                    "User not found. Would you like to sign up? [y/N]: ",
                )?
                else {
                    return Ok(());
                };
                let accept = matches!(answer.as_str(), "y" | "Y" | "yes");

                match flow.resume(pending, accept) {
                    Ok(Outcome::SignedUp { role, .. }) => {
                        writeln!(output, "Sign-Up successful for {role}. You can now log in!")?;
                    }
                    Ok(_) => {}
                    Err(e @ AuthError::DuplicateUser { .. }) => {
                        writeln!(output, "Error: {e}")?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Ok(_) => {}
            Err(AuthError::Validation(_)) => {
                writeln!(output, "All fields are required!")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Print a prompt and read one line. Returns `None` when input ends.
///
/// Only the line terminator is stripped; submitted values keep their
/// inner whitespace and case.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Render the role dashboard banner for a logged-in user.
fn open_dashboard<W: Write>(output: &mut W, role: Role, name: &str) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "=== {role} Dashboard ===")?;
    writeln!(output, "{name}")?;
    writeln!(output, "Welcome to the {role} Dashboard!")?;
    Ok(())
}
