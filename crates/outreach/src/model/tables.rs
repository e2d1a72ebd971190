//! The three list screens' tables.

use outreach_core::rows::{ACCOUNT_SEARCH_KEYS, USER_SEARCH_KEYS};
use outreach_core::store::DEFAULT_VERIFICATION_PAGE_SIZE;
use outreach_core::{BatchQuery, BatchStatus, account_columns, batch_columns, user_columns};
use outreach_table::{BulkAction, DataTable, RowAction, SortState, TableConfig, Tone};

/// Bulk action exporting the selected accounts.
pub const EXPORT_SELECTED: &str = "export";

/// Row action showing a batch's progress.
pub const SHOW_PROGRESS: &str = "progress";

/// Page size choices offered under every table.
const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Which table an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    /// Sending accounts.
    Accounts,
    /// Organization users.
    Users,
    /// Verification batches.
    Verification,
}

/// The tables, one per list screen.
#[derive(Debug, Clone)]
pub struct Tables {
    /// Sending accounts, paginated locally.
    pub accounts: DataTable,
    /// Organization users, paginated locally.
    pub users: DataTable,
    /// Verification batches, paginated by the server.
    pub verification: DataTable,
}

impl Tables {
    /// Builds all tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a table configuration is inconsistent.
    pub fn new() -> outreach_table::Result<Self> {
        Ok(Self {
            accounts: accounts_table()?,
            users: users_table()?,
            verification: verification_table()?,
        })
    }

    /// Table by id.
    #[must_use]
    pub const fn get(&self, id: TableId) -> &DataTable {
        match id {
            TableId::Accounts => &self.accounts,
            TableId::Users => &self.users,
            TableId::Verification => &self.verification,
        }
    }

    /// Server query for `page` of verification batches, carrying the
    /// table's search box and status filter.
    #[must_use]
    pub fn batch_query(&self, page: usize) -> BatchQuery {
        let table = &self.verification;
        BatchQuery {
            page,
            page_size: table.page_size(),
            search: table.search().trim().to_string(),
            statuses: table
                .filters()
                .values("status")
                .filter_map(BatchStatus::from_label)
                .collect(),
        }
    }

    /// Mutable table by id.
    pub const fn get_mut(&mut self, id: TableId) -> &mut DataTable {
        match id {
            TableId::Accounts => &mut self.accounts,
            TableId::Users => &mut self.users,
            TableId::Verification => &mut self.verification,
        }
    }
}

fn accounts_table() -> outreach_table::Result<DataTable> {
    let config = TableConfig::builder()
        .search_keys(ACCOUNT_SEARCH_KEYS)
        .search_placeholder("Search accounts...")
        .filterable(true)
        .selectable(true)
        .default_sort(SortState::ascending("email"))
        .page_size_options(PAGE_SIZE_OPTIONS)
        .show_row_actions(true)
        .on_delete()
        .on_bulk_delete()
        .bulk_action(BulkAction::new(EXPORT_SELECTED, "Export CSV"))
        .empty_state(
            "No email accounts",
            "Connect a mailbox to start sending.",
            "\u{2709}",
        )
        .build()?;
    DataTable::new(account_columns(), config)
}

fn users_table() -> outreach_table::Result<DataTable> {
    let config = TableConfig::builder()
        .search_keys(USER_SEARCH_KEYS)
        .search_placeholder("Search by name, email or phone...")
        .filterable(true)
        .selectable(true)
        .default_sort(SortState::ascending("name"))
        .page_size_options(PAGE_SIZE_OPTIONS)
        .show_row_actions(true)
        .on_delete()
        .on_bulk_delete()
        .empty_state("No users", "Invite teammates to your organization.", "\u{1F465}")
        .build()?;
    DataTable::new(user_columns(), config)
}

fn verification_table() -> outreach_table::Result<DataTable> {
    let config = TableConfig::builder()
        .search_placeholder("Search files...")
        .filterable(true)
        .selectable(true)
        .page_size(DEFAULT_VERIFICATION_PAGE_SIZE)
        .page_size_options(PAGE_SIZE_OPTIONS)
        .external_pagination(1, 0)
        .show_row_actions(true)
        .row_action(RowAction::new(SHOW_PROGRESS, "Progress").tone(Tone::Info))
        .on_delete()
        .on_bulk_delete()
        .on_row_click()
        .empty_state(
            "No verification batches",
            "Upload a list to verify its addresses.",
            "\u{2714}",
        )
        .build()?;
    DataTable::new(batch_columns(), config)
}
