//! Player login form
//!
//! Collects the profile fields on plain stdin before the terminal enters
//! raw mode. Phone numbers must be 10 digits and emails must carry an '@';
//! everything else is pass-through.

use std::io::{self, BufRead, Write};

use crate::session::report::PlayerProfile;

/// Read the player profile from stdin, re-prompting on invalid fields
pub fn collect_profile() -> io::Result<PlayerProfile> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let name = prompt_until(&mut lines, "Enter your name: ", |v| !v.is_empty(), "Name cannot be empty.")?;
    let phone = prompt_until(
        &mut lines,
        "Enter your phone number (10 digits): ",
        valid_phone,
        "Invalid! Enter 10 digits.",
    )?;
    let email = prompt_until(
        &mut lines,
        "Enter your email: ",
        valid_email,
        "Invalid email! Must include '@'.",
    )?;
    let sex = prompt_until(
        &mut lines,
        "Enter your sex (male/female): ",
        |v| !v.is_empty(),
        "Please enter a value.",
    )?;
    let age = prompt_until(
        &mut lines,
        "Enter your age: ",
        |v| !v.is_empty(),
        "Please enter a value.",
    )?;

    Ok(PlayerProfile {
        name,
        age,
        sex,
        email,
        phone,
    })
}

/// Print the prompt and read lines until one passes the check
fn prompt_until<B, F>(
    lines: &mut io::Lines<B>,
    prompt: &str,
    accept: F,
    error: &str,
) -> io::Result<String>
where
    B: BufRead,
    F: Fn(&str) -> bool,
{
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stdin closed during login",
                ))
            }
        };
        let value = line.trim().to_string();

        if accept(&value) {
            return Ok(value);
        }
        println!("{}", error);
    }
}

fn valid_phone(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

fn valid_email(value: &str) -> bool {
    value.contains('@')
}
