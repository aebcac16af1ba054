//! Smoke harness — drives a running storefront API end-to-end.
//!
//! # Usage
//!
//! ```bash
//! # Public surface only (health, catalog, baskets, orders)
//! cargo run -p smoke-harness -- --base-url http://localhost:8080
//!
//! # Including the admin auth flow
//! cargo run -p smoke-harness -- --base-url http://localhost:8080 \
//!     --admin-login admin1 --admin-password secret
//! ```
//!
//! Exits 0 when all checks pass, exits 1 when any fail. Checks create real
//! rows; point it at a disposable instance.

use clap::Parser;

mod reporter;
mod runner;

use reporter::Reporter;
use runner::Smoke;

#[derive(Parser)]
#[command(about = "Drive a running storefront API end-to-end")]
struct Args {
    /// Base URL of the API (e.g. http://localhost:8080)
    #[arg(long)]
    base_url: String,

    /// Admin login for the auth flow checks; skipped when absent
    #[arg(long)]
    admin_login: Option<String>,

    /// Admin password for the auth flow checks
    #[arg(long)]
    admin_password: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let smoke = Smoke::new(&args.base_url);
    let mut reporter = Reporter::new();

    reporter.record("health endpoints", smoke.health().await);
    reporter.record("catalog flow", smoke.catalog_flow().await);
    reporter.record("basket flow", smoke.basket_flow().await);
    reporter.record("order flow", smoke.order_flow().await);

    match (&args.admin_login, &args.admin_password) {
        (Some(login), Some(password)) => {
            reporter.record("auth flow", smoke.auth_flow(login, password).await);
        }
        _ => println!("SKIP  auth flow (no admin credentials given)"),
    }

    reporter.print_summary();

    if !reporter.all_passed() {
        std::process::exit(1);
    }
}
