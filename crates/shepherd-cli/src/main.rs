use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use dotenvy::dotenv;
use shepherd_auth::Role;
use shepherd_cli::tokens::issue_token;
use shepherd_cli::users::{NewUser, create_user};
use shepherd_config::{JwtConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "shepherd-cli")]
#[command(about = "Shepherd CLI - Operator tools for the Shepherd API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a login account
    CreateUser {
        /// First name
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// One of bishop, leader, member, visitor, protocol
        #[arg(short = 'r', long)]
        role: Option<Role>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Print a session token signed with JWT_SECRET
    IssueToken {
        /// User id to put in the subject claim
        #[arg(short = 's', long)]
        subject: String,

        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// One of bishop, leader, member, visitor, protocol
        #[arg(short = 'r', long)]
        role: Role,

        /// Lifetime in seconds (defaults to JWT_SESSION_TTL)
        #[arg(short = 't', long)]
        ttl: Option<i64>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::CreateUser {
            first_name,
            last_name,
            email,
            role,
            password,
        } => handle_create_user(first_name, last_name, email, role, password).await,
        Commands::IssueToken {
            subject,
            email,
            role,
            ttl,
        } => handle_issue_token(&subject, &email, role, ttl),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn handle_create_user(
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env()?;
    let pool = shepherd_db::init_db_pool(&server_config.database_url)
        .await
        .context("Failed to connect to database")?;

    let first_name = match first_name {
        Some(v) => v,
        None => Input::new().with_prompt("First name").interact_text()?,
    };

    let last_name = match last_name {
        Some(v) => v,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    let email = match email {
        Some(v) => v,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let role = match role {
        Some(r) => r,
        None => {
            let picked = Select::new()
                .with_prompt("Role")
                .items(&Role::ALL.map(|r| r.as_str()))
                .default(2)
                .interact()?;
            Role::ALL[picked]
        }
    };

    let password = match password {
        Some(v) => v,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let user = NewUser {
        first_name,
        last_name,
        email,
        password,
        role,
    };
    let id = create_user(&pool, &user).await?;

    println!("\n✅ User created successfully!");
    println!("   Id: {}", id);
    println!("   Email: {}", user.email);
    println!("   Name: {} {}", user.first_name, user.last_name);
    println!("   Role: {}", user.role);
    Ok(())
}

fn handle_issue_token(
    subject: &str,
    email: &str,
    role: Role,
    ttl: Option<i64>,
) -> anyhow::Result<()> {
    let config = JwtConfig::from_env()?;
    let token = issue_token(&config, subject, email, role, ttl)?;
    println!("{}", token);
    Ok(())
}
