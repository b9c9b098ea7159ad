use anyhow::Result;
use colored::Colorize;

use kidscare_client::{
    FileSessionStore, IdentityClient, SessionStore, resolve_entry_screen,
};
use kidscare_core::{Credentials, Session};

use crate::cli::LoginArgs;
use crate::output::{print_error, print_success};

pub async fn login(
    client: &IdentityClient,
    store: &FileSessionStore,
    args: &LoginArgs,
) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);
    let session = client.login(&credentials).await?;
    store.save(&session).await?;

    let entry = resolve_entry_screen(&session)?;
    print_success(&format!(
        "Logged in as {} ({})",
        session.user_name.cyan(),
        session.role
    ));
    println!(
        "{}: {}",
        "Entry screen".cyan(),
        entry.screen_set.route_name()
    );
    Ok(())
}

pub async fn logout(store: &FileSessionStore) -> Result<()> {
    if store.load().await.is_some() {
        store.clear().await?;
        print_success("Logged out (session cleared)");
    } else {
        store.clear().await?;
        println!("No active session");
    }
    Ok(())
}

pub async fn whoami(store: &FileSessionStore, profile: &str) -> Result<()> {
    match store.load().await {
        Some(session) => {
            println!("{}: {}", "Profile".cyan(), profile);
            println!("{}: {}", "User".cyan(), session.user_name.cyan());
            println!("{}: {}", "NIC".cyan(), session.nic_no);
            println!("{}: {}", "Role".cyan(), session.role);
            println!(
                "{}: Bearer (token: {})",
                "Auth".cyan(),
                token_preview(&session)
            );
        }
        None => {
            print_error(&format!("Not logged in (profile: \"{profile}\")"));
        }
    }
    Ok(())
}

pub async fn home(store: &FileSessionStore) -> Result<()> {
    let Some(session) = store.load().await else {
        anyhow::bail!("Not logged in. Run: kidscare login --username <name> --password <password>")
    };
    let entry = resolve_entry_screen(&session)?;
    println!(
        "{}: {}",
        "Screen set".cyan(),
        entry.screen_set.route_name().cyan()
    );
    println!(
        "{}: nicNo={} userName={} userType={}",
        "Navigation params".cyan(),
        entry.nic_no,
        entry.user_name,
        entry.role
    );
    Ok(())
}

fn token_preview(session: &Session) -> String {
    let token = &session.access_token;
    if token.len() > 20 {
        format!("{}...{}", &token[..8], &token[token.len() - 8..])
    } else {
        token.clone()
    }
}
