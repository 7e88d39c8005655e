use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Args;
use shared::format::{format_currency, format_percent};
use shared::models::{Listing, Payment};
use shared::{ClientConfig, PaymentStatistics};

use super::session::session_manager;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Read payments from a JSON file instead of the backend
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Print the totals as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn stats(config: &ClientConfig, args: StatsArgs) -> Result<()> {
    let payments = match &args.file {
        Some(path) => read_payments(path)?,
        None => fetch_payments(config).await?,
    };
    let stats = PaymentStatistics::from_payments(&payments);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_statistics(&stats, config));
    }
    Ok(())
}

fn read_payments(path: &Path) -> Result<Vec<Payment>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read payments file {}", path.display()))?;
    let listing: Listing<Payment> = serde_json::from_str(&content)
        .with_context(|| format!("invalid payments file {}", path.display()))?;
    Ok(listing.into_items())
}

async fn fetch_payments(config: &ClientConfig) -> Result<Vec<Payment>> {
    let manager = session_manager(config);
    let Some(token) = manager.token() else {
        bail!("not authenticated; run `session login` first");
    };
    manager
        .api()
        .list_payments(&token)
        .await
        .context("failed to fetch payments")
}

fn render_statistics(stats: &PaymentStatistics, config: &ClientConfig) -> String {
    let money = |amount| format_currency(amount, &config.currency);
    let mut out = format!(
        "Payments:    {}\n\
         Total due:   {}\n\
         Paid:        {} ({})\n\
         Pending:     {} ({})\n\
         Late:        {} ({})\n",
        stats.count,
        money(stats.total_due),
        money(stats.total_paid),
        stats.paid_count,
        money(stats.total_pending),
        stats.pending_count,
        money(stats.total_late),
        stats.late_count,
    );
    if let Some(rate) = stats.collection_rate() {
        out.push_str(&format!("Collected:   {}\n", format_percent(rate)));
    }
    out
}
