use anyhow::Result;

use kidscare_client::{AuthorizedClient, AuthorizedError};

use crate::cli::OutputFormat;
use crate::output;

pub async fn vaccines(client: &AuthorizedClient, format: OutputFormat) -> Result<()> {
    match client.vaccines().await {
        Ok(records) => {
            output::print_vaccines(&records, format);
            Ok(())
        }
        Err(err) => Err(with_login_hint(err)),
    }
}

pub async fn patients(client: &AuthorizedClient, format: OutputFormat) -> Result<()> {
    match client.patients().await {
        Ok(patients) => {
            output::print_patients(&patients, format);
            Ok(())
        }
        Err(err) => Err(with_login_hint(err)),
    }
}

/// Session problems get a pointer at the fix; everything else passes
/// through with its own message.
fn with_login_hint(err: AuthorizedError) -> anyhow::Error {
    match err {
        AuthorizedError::NoSession | AuthorizedError::Unauthorized => anyhow::anyhow!(
            "{err}. Run: kidscare login --username <name> --password <password>"
        ),
        other => other.into(),
    }
}
