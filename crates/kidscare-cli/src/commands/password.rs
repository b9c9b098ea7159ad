use anyhow::Result;

use kidscare_client::PasswordService;

use crate::cli::ChangePasswordArgs;
use crate::output::print_success;

pub async fn change(service: &PasswordService, args: &ChangePasswordArgs) -> Result<()> {
    service
        .change_password(&args.username, &args.current_password, &args.new_password)
        .await?;
    print_success("Password updated. Existing sessions keep their tokens; log in again to refresh.");
    Ok(())
}
