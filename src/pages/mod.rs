//! Page controllers: fetch through the data source, keep state in the view
//! actor, and hand display-ready rows to the renderer.

mod customers_page;
mod orders_page;

pub use customers_page::CustomersPage;
pub use orders_page::OrdersPage;

use crate::view_model::{FetchStatus, Pagination};

/// What a page shows on this render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<R> {
    Loading,
    /// Raw message of the failed fetch. Nothing else is shown.
    Failed(String),
    Ready(Vec<R>),
}

/// One render pass: the state plus what the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage<R> {
    pub state: PageState<R>,
    pub pagination: Pagination,
    /// Number of fetched records across all pages.
    pub total: usize,
}

impl<R> RenderedPage<R> {
    pub fn rows(&self) -> &[R] {
        match &self.state {
            PageState::Ready(rows) => rows,
            _ => &[],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total)
    }
}

/// Shared fetch-state dispatch. `build` gets the records on the current page.
fn render_with<T, R>(
    status: &FetchStatus<T>,
    pagination: Pagination,
    build: impl FnOnce(&[T]) -> Vec<R>,
) -> RenderedPage<R> {
    let (state, total) = match status {
        FetchStatus::Loading => (PageState::Loading, 0),
        FetchStatus::Failed(message) => (PageState::Failed(message.clone()), 0),
        FetchStatus::Loaded(records) => (PageState::Ready(build(records)), records.len()),
    };
    RenderedPage {
        state,
        pagination,
        total,
    }
}
