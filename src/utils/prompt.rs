//! Interactive prompts for credentials and license selection
//!
//! The binaries take no command line arguments: anything not supplied via
//! environment variables is collected here. Passwords are read without
//! echo, and an OTP is requested only for the hostname that requires one.

use crate::config::Credentials;
use crate::constants::OTP_HOSTNAME;
use crate::error::AppError;
use crate::model::license::License;
use prettytable::{Table, row};
use std::io::{self, Write};

/// Reads one line from stdin after printing a prompt
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

/// Reads one optional line from stdin, treating an empty answer as `None`
pub fn read_optional(prompt: &str) -> Result<Option<String>, AppError> {
    let answer = read_line(prompt)?;
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer))
    }
}

/// Fills in any missing credential fields interactively
///
/// Hostname and username are read from stdin, the password without echo.
/// The OTP prompt appears only for `mi.metrc.com`.
pub fn complete_credentials(credentials: &mut Credentials) -> Result<(), AppError> {
    if credentials.hostname.is_empty() {
        credentials.hostname = read_line("Hostname (e.g. mo.metrc.com): ")?;
    }
    if credentials.username.is_empty() {
        credentials.username = read_line("Username: ")?;
    }
    if credentials.password.is_empty() {
        let prompt = format!(
            "Password for {}/{}: ",
            credentials.hostname, credentials.username
        );
        credentials.password = rpassword::prompt_password(prompt)?;
    }
    if credentials.otp.is_none() && credentials.hostname == OTP_HOSTNAME {
        credentials.otp = Some(rpassword::prompt_password("OTP: ")?);
    }

    if credentials.hostname.is_empty()
        || credentials.username.is_empty()
        || credentials.password.is_empty()
    {
        return Err(AppError::InvalidInput(
            "hostname, username and password are all required".to_string(),
        ));
    }
    Ok(())
}

/// Lets the user select a license from the available options
///
/// Prints a numbered table of licenses and reads the selection from stdin.
pub fn pick_license(licenses: &[License]) -> Result<License, AppError> {
    if licenses.is_empty() {
        return Err(AppError::InvalidInput(
            "no licenses available for this account".to_string(),
        ));
    }

    let mut table = Table::new();
    table.add_row(row!["#", "License Number", "License Name"]);
    for (idx, license) in licenses.iter().enumerate() {
        table.add_row(row![
            idx + 1,
            license.license_number,
            license.license_name
        ]);
    }
    table.printstd();

    let answer = read_line("Select a license by number: ")?;
    let selected = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| licenses.get(idx))
        .ok_or_else(|| AppError::InvalidInput(format!("invalid license selection: {answer}")))?;

    println!("Selected license: {}", selected.license_name);
    Ok(selected.clone())
}
