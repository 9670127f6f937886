//! Session commands: login and logout.
//!
//! # Usage
//!
//! ```bash
//! fashionista login -e maya@example.com
//! fashionista logout
//! ```
//!
//! Sign-in is by email only; the display name defaults to the email local
//! part and the user id is stamped from the clock.

use chrono::Utc;
use fashionista_core::Action;
use fashionista_core::types::{Email, User, UserId};

use super::{CommandError, close_store, open_store};

/// Sign in with an email address.
pub fn login(email: &str) -> Result<(), CommandError> {
    let email = Email::parse(email)?;

    let mut store = open_store()?;
    let user = User::from_email(UserId::new(Utc::now().timestamp_millis()), email);
    let name = user.name.clone();

    store.dispatch(Action::login(user));

    tracing::info!("Signed in as {}", name);
    close_store(store);
    Ok(())
}

/// Sign out.
pub fn logout() -> Result<(), CommandError> {
    let mut store = open_store()?;

    match store.state().user.as_ref().map(|user| user.name.clone()) {
        Some(name) => {
            store.dispatch(Action::Logout);
            tracing::info!("Signed out {}", name);
        }
        None => tracing::info!("No one is signed in"),
    }

    close_store(store);
    Ok(())
}
