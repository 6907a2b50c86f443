use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use natillera_ledger::contributions::{aggregate, member_share};
use natillera_ledger::currency::CurrencyFormat;
use natillera_ledger::ledger::{actor_names, filter, TransactionCriteria, ALL};
use natillera_ledger::loans::LoanPortfolio;
use natillera_ledger::raffle::RaffleSummary;
use natillera_ledger::report::{ReportWriter, Snapshot, SnapshotLoader};
use natillera_ledger::types::{GroupId, MemberId, RaffleId};

/// Reports over a savings group's backend data, written as CSV to stdout.
#[derive(Debug, Parser)]
#[command(name = "natillera-ledger", version)]
struct Cli {
    /// Directory holding the backend responses (members.json, contributions.json, ...)
    #[arg(long, short, default_value = ".")]
    snapshot: PathBuf,
    /// Only consider records of this group
    #[arg(long)]
    group: Option<GroupId>,
    /// error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    log_level: String,
    #[arg(long, default_value_t = 0)]
    min_fraction_digits: u32,
    #[arg(long, default_value_t = 2)]
    max_fraction_digits: u32,
    #[command(subcommand)]
    report: Report
}

#[derive(Debug, Subcommand)]
enum Report {
    /// Approved contributions per member and their share of the total
    Contributions {
        /// Show a single member's share instead of the whole roster
        #[arg(long)]
        member: Option<MemberId>
    },
    /// Balance of every loan
    Loans {
        /// Reference date for days remaining (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>
    },
    /// Totals over approved loans
    Portfolio,
    /// Ledger entries matching every given filter
    Transactions {
        #[arg(long = "type", default_value = ALL)]
        transaction_type: String,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        min: Option<Decimal>,
        #[arg(long)]
        max: Option<Decimal>,
        #[arg(long, default_value = ALL)]
        actor: String
    },
    /// Distinct actor names found in the ledger
    Actors,
    /// Ticket counts per raffle
    Raffle {
        /// Only report this raffle
        #[arg(long)]
        raffle: Option<RaffleId>
    },
    /// The backend's balance snapshot
    Balance
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let timer = Instant::now();
    let mut snapshot = SnapshotLoader::new(&cli.snapshot).load().await?;
    info!("Loaded snapshot in: {:?}", timer.elapsed());

    if let Some(group_id) = cli.group {
        snapshot = snapshot.for_group(group_id);
    }

    let currency = CurrencyFormat::cop().with_fraction_digits(cli.min_fraction_digits, cli.max_fraction_digits);
    let output = BufWriter::new(stdout().lock());

    let mut output = write_report(cli.report, &snapshot, ReportWriter::new(output, currency))?;
    output.flush()?;

    Ok(())
}

fn write_report<W: Write>(report: Report, snapshot: &Snapshot, writer: ReportWriter<W>) -> Result<W> {
    let output = match report {
        Report::Contributions { member } => {
            let aggregation = aggregate(&snapshot.members, &snapshot.contributions);

            match member {
                Some(member_id) => {
                    let share = member_share(member_id, &aggregation)
                        .ok_or_else(|| anyhow!("Member [{member_id}] is not part of this group"))?;
                    let name = aggregation.iter()
                        .find(|entry| entry.member.id == member_id)
                        .map(|entry| entry.member.display_name())
                        .unwrap_or_default();

                    writer.member_share(&share, name)?
                }
                None => writer.contributions(&aggregation)?
            }
        }
        Report::Loans { today } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            writer.loans(&snapshot.loans, &snapshot.payments, today)?
        }
        Report::Portfolio => writer.portfolio(&LoanPortfolio::from_loans(&snapshot.loans))?,
        Report::Transactions { transaction_type, from, to, min, max, actor } => {
            let criteria = TransactionCriteria::new()
                .with_type_choice(&transaction_type)?
                .with_dates(from, to)
                .with_amounts(min, max)
                .with_actor(&actor);

            writer.transactions(&filter(&snapshot.transactions, &criteria))?
        }
        Report::Actors => writer.actors(&actor_names(&snapshot.transactions))?,
        Report::Raffle { raffle } => {
            let raffles: Vec<_> = RaffleSummary::by_raffle(&snapshot.tickets).into_iter()
                .filter(|(raffle_id, _)| raffle.is_none_or(|wanted| wanted == *raffle_id))
                .collect();

            writer.raffles(&raffles)?
        }
        Report::Balance => {
            let balance = snapshot.balance.as_ref()
                .ok_or_else(|| anyhow!("The snapshot has no balance.json"))?;
            writer.balance(balance)?
        }
    };

    Ok(output)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV report, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
