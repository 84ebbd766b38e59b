use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use rekap::cli::{CreateUserInput, create_user};
use rekap::modules::users::repository::PgUserRepository;

#[derive(Parser)]
#[command(name = "rekap-cli")]
#[command(about = "Rekap CLI - Administrative tools for the Rekap API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account, optionally scoped to a branch
    CreateUser {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Branch the account is scoped to
        #[arg(short = 'b', long)]
        branch_id: Option<i32>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = rekap_db::init_db_pool().await;

    match cli.command {
        Commands::CreateUser {
            name,
            email,
            password,
            branch_id,
        } => {
            let name = match name {
                Some(name) => name,
                None => Input::<String>::new()
                    .with_prompt("Name")
                    .interact_text()
                    .context("Failed to read name")?,
            };

            let email = match email {
                Some(email) => email,
                None => Input::<String>::new()
                    .with_prompt("Email address")
                    .interact_text()
                    .context("Failed to read email")?,
            };

            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .context("Failed to read password")?,
            };

            let users = PgUserRepository::new(pool);
            let user = create_user(
                &users,
                CreateUserInput {
                    name,
                    email,
                    password,
                    branch_id,
                },
            )
            .await?;

            println!("User created successfully!");
            println!("   ID: {}", user.id);
            println!("   Email: {}", user.email);
            if let Some(branch_id) = user.branch_id {
                println!("   Branch: {}", branch_id);
            }
        }
        Commands::Migrate => {
            rekap_db::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("Migrations applied");
        }
    }

    Ok(())
}
