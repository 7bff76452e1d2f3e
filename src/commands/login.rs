use crate::core::{client::P4Client, error::Result, output::print_action_output};
use std::io::BufRead;

/// Environment variable checked for the password before falling back to stdin
pub const PASSWORD_ENV: &str = "P4PASSWD";

pub async fn execute_login(client: &P4Client, user: &str, json: bool) -> Result<()> {
    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) => password,
        Err(_) => {
            log::debug!("{PASSWORD_ENV} not set, reading password from stdin");
            read_password(std::io::stdin().lock())?
        }
    };

    let output = client.login(user, &password).await?;
    print_action_output("login", &output, json)
}

fn read_password(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
