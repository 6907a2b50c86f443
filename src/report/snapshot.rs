use crate::models::{Contribution, GroupBalance, Loan, LoanPayment, Member, RaffleTicket, Transaction};
use crate::report::SnapshotError;
use crate::types::GroupId;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;
use tracing::{debug, warn};

pub const MEMBERS_FILE: &str = "members.json";
pub const CONTRIBUTIONS_FILE: &str = "contributions.json";
pub const LOANS_FILE: &str = "loans.json";
pub const PAYMENTS_FILE: &str = "payments.json";
pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const BALANCE_FILE: &str = "balance.json";
pub const TICKETS_FILE: &str = "tickets.json";

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub contributions: Vec<Contribution>,
    pub loans: Vec<Loan>,
    pub payments: Vec<LoanPayment>,
    pub transactions: Vec<Transaction>,
    pub balance: Option<GroupBalance>,
    pub tickets: Vec<RaffleTicket>
}

impl Snapshot {
    /// Keeps only the records that belong to `group_id`.
    ///
    /// Payments are kept when their loan survives. Members, raffle tickets and
    /// the balance carry no group id and are left as they are.
    pub fn for_group(self, group_id: GroupId) -> Self {
        let loans: Vec<Loan> = self.loans.into_iter().filter(|loan| loan.group_id == group_id).collect();
        let payments = self.payments.into_iter()
            .filter(|payment| loans.iter().any(|loan| loan.id == payment.loan_id))
            .collect();

        Self {
            members: self.members,
            contributions: self.contributions.into_iter().filter(|contribution| contribution.group_id == group_id).collect(),
            loans,
            payments,
            transactions: self.transactions.into_iter().filter(|transaction| transaction.group_id == group_id).collect(),
            balance: self.balance,
            tickets: self.tickets
        }
    }
}

/// Reads a snapshot directory, one blocking reader task per file.
pub struct SnapshotLoader {
    root: PathBuf
}

impl SnapshotLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into()
        }
    }

    //NOTE: A missing file reads as an empty response, anything else that fails to read or decode is an error
    pub async fn load(&self) -> Result<Snapshot, SnapshotError> {
        let (members, contributions, loans, payments, transactions, balance, tickets) = tokio::try_join!(
            self.spawn_reader::<Vec<Member>>(MEMBERS_FILE),
            self.spawn_reader::<Vec<Contribution>>(CONTRIBUTIONS_FILE),
            self.spawn_reader::<Vec<Loan>>(LOANS_FILE),
            self.spawn_reader::<Vec<LoanPayment>>(PAYMENTS_FILE),
            self.spawn_reader::<Vec<Transaction>>(TRANSACTIONS_FILE),
            self.spawn_reader::<Option<GroupBalance>>(BALANCE_FILE),
            self.spawn_reader::<Vec<RaffleTicket>>(TICKETS_FILE)
        )?;

        debug!(
            "Loaded snapshot from [{}]: {} members, {} contributions, {} loans, {} payments, {} transactions, {} tickets",
            self.root.display(), members.len(), contributions.len(), loans.len(), payments.len(), transactions.len(), tickets.len()
        );

        Ok(Snapshot {
            members,
            contributions,
            loans,
            payments,
            transactions,
            balance,
            tickets
        })
    }

    async fn spawn_reader<T>(&self, file_name: &str) -> Result<T, SnapshotError>
    where
        T: DeserializeOwned + Default + Send + 'static,
    {
        let path = self.root.join(file_name);

        spawn_blocking(move || read_json(&path)).await?
    }
}

fn read_json<T>(path: &Path) -> Result<T, SnapshotError>
where
    T: DeserializeOwned + Default,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!("Snapshot file [{}] not found, treating it as empty", path.display());
            return Ok(T::default());
        }
        Err(source) => {
            return Err(SnapshotError::Io { path: path.display().to_string(), source });
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| SnapshotError::Decode { path: path.display().to_string(), source })
}
