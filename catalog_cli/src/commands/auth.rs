use anyhow::{bail, Result};
use catalog_lib::types::NewUser;
use catalog_lib::{validation, Client, Navbar, Session, SessionStorage};
use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "CATALOG_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub full_name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password (6 to 128 characters)
    #[arg(long, env = "CATALOG_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Signs in, fetches the profile and stores both in the session.
pub async fn login<S: SessionStorage>(
    args: &LoginArgs,
    client: &Client,
    session: &Session<S>,
) -> Result<()> {
    let email = validation::validate_email(&args.email)?;
    validation::validate_password(&args.password)?;

    let token = match client.login(&email, &args.password).await {
        Ok(token) => token,
        Err(e) => bail!(e.message()),
    };
    let user = match client.me(&token.access_token).await {
        Ok(user) => user,
        Err(e) => bail!(e.message()),
    };
    session.store(&token.access_token, &user)?;
    tracing::info!("Session stored for {}", email);

    print_navbar(&Navbar::from_session(session));
    Ok(())
}

pub async fn register(args: &RegisterArgs, client: &Client) -> Result<()> {
    let new_user = NewUser {
        full_name: validation::validate_full_name(&args.full_name)?,
        email: validation::validate_email(&args.email)?,
        password: args.password.clone(),
    };
    validation::validate_password(&new_user.password)?;

    match client.register(&new_user).await {
        Ok(user) => {
            eprintln!(
                "Registered {}. Run `catalog login --email {}` to sign in.",
                user.full_name, new_user.email
            );
            Ok(())
        }
        Err(e) => bail!(e.message()),
    }
}

pub fn whoami<S: SessionStorage>(session: &Session<S>) {
    print_navbar(&Navbar::from_session(session));
}

pub fn logout<S: SessionStorage>(session: &Session<S>) -> Result<()> {
    session.logout()?;
    println!("Logged out. Run `catalog login` to sign in again.");
    Ok(())
}

pub fn navbar_line(navbar: &Navbar) -> String {
    match &navbar.greeting {
        Some(greeting) => format!("{} (logout available: `catalog logout`)", greeting),
        None => "Not logged in. Run `catalog login` to sign in.".to_string(),
    }
}

fn print_navbar(navbar: &Navbar) {
    println!("{}", navbar_line(navbar));
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_lib::session::{ACCESS_TOKEN_KEY, USER_KEY};
    use catalog_lib::MemoryStorage;

    #[test]
    fn navbar_line_for_each_state() {
        let storage = MemoryStorage::new();
        let session = Session::new(&storage);
        assert_eq!(
            navbar_line(&Navbar::from_session(&session)),
            "Not logged in. Run `catalog login` to sign in."
        );

        storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, r#"{"full_name": "Ana Souza"}"#).unwrap();
        assert!(navbar_line(&Navbar::from_session(&session)).starts_with("Hello, Ana "));
    }

    #[test]
    fn logout_empties_storage() {
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
        logout(&Session::new(&storage)).unwrap();
        assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
    }
}
