use crate::domain::CustomerRecord;

/// Events the customers page feeds into its view.
#[derive(Debug, Clone)]
pub enum CustomersAction {
    /// A fetch is about to start.
    BeginFetch,
    /// A fetch finished; the error side carries the raw message.
    CompleteFetch {
        generation: u64,
        outcome: Result<Vec<CustomerRecord>, String>,
    },
    /// The table moved to another page.
    SetPage(u32),
}

/// Results from CustomersAction - variants match 1:1 with CustomersAction
#[derive(Debug, Clone, PartialEq)]
pub enum CustomersActionResult {
    FetchStarted(u64),
    /// `false` when the completion belonged to a superseded fetch.
    FetchCompleted(bool),
    PageChanged(u32),
}
