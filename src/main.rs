mod api;
mod app;
mod config;
mod consts;
mod dates;
mod error;
mod i18n;
mod imaging;
mod mail;
mod report;
mod utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use api::UreqTransport;
use config::Config;
use mail::SmtpMailer;

/// Configuration comes from the environment (and `.env`); the only flags
/// are `--help` and `--version`.
#[derive(Parser)]
#[command(name = "photo-memories")]
#[command(
    about = "Mail a random day's photos from years past, from a Synology Photos library",
    version
)]
struct Cli {}

fn main() {
    Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let transport = UreqTransport::new(&config.api);
    let mailer = SmtpMailer::new(&config.mail);
    let today = config.timezone.today();

    let report = app::run(&config, &transport, &mailer, today, &mut rand::thread_rng());
    tracing::info!(
        stages = report.stages.len(),
        authenticated = report.authenticated,
        tags = report.tag_ids.len(),
        photos = report.photos_found,
        residual = report.residual,
        downloaded = report.fetch.as_ref().map_or(0, |f| f.succeeded.len()),
        mailed = ?report.dispatch,
        admins_notified = report.admin_report.as_ref().map_or(0, |r| r.succeeded.len()),
        purged = report.purged,
        logged_out = report.logged_out,
        "Run finished for {}",
        report.window.label()
    );
}
