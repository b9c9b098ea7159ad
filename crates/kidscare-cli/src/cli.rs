use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "kidscare")]
#[command(about = "KidsCare CLI — pediatric immunization records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Service base URL (overrides config and KIDSCARE_URL env var)
    #[arg(short, long, global = true, env = "KIDSCARE_URL")]
    pub server: Option<String>,

    /// Config profile name
    #[arg(short, long, global = true, env = "KIDSCARE_PROFILE", default_value = "default")]
    pub profile: String,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login(LoginArgs),
    /// Log out (clear the stored session)
    Logout,
    /// Show the current session identity
    Whoami,
    /// Show which screen set the stored session may open
    Home,
    /// List the current user's vaccine records
    Vaccines,
    /// List patients (doctor accounts)
    Patients,
    /// Change the account password
    ChangePassword(ChangePasswordArgs),
    /// Manage CLI configuration
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct LoginArgs {
    /// Username
    #[arg(short, long)]
    pub username: String,
    /// Password
    #[arg(long)]
    pub password: String,
}

#[derive(clap::Args)]
pub struct ChangePasswordArgs {
    /// Username
    #[arg(short, long)]
    pub username: String,
    /// Current password
    #[arg(long)]
    pub current_password: String,
    /// New password
    #[arg(long)]
    pub new_password: String,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current config
    Show,
    /// Set config value
    Set(ConfigSetArgs),
}

#[derive(clap::Args)]
pub struct ConfigSetArgs {
    /// Key to set (server, format)
    pub key: String,
    /// Value
    pub value: String,
}
