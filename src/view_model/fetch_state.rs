use tracing::debug;

/// Where the current fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<R> {
    /// Nothing requested yet, or a request in flight.
    Loading,
    /// The raw error message of the failed request.
    Failed(String),
    Loaded(Vec<R>),
}

/// Fetch bookkeeping for one view.
///
/// Each fetch gets a generation number; a completion is applied only when it
/// belongs to the newest generation, so a slow response can't overwrite the
/// result of a later one.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetch<R> {
    generation: u64,
    status: FetchStatus<R>,
}

impl<R> Default for Fetch<R> {
    fn default() -> Self {
        Self {
            generation: 0,
            status: FetchStatus::Loading,
        }
    }
}

impl<R> Fetch<R> {
    pub fn status(&self) -> &FetchStatus<R> {
        &self.status
    }

    pub fn records(&self) -> Option<&[R]> {
        match &self.status {
            FetchStatus::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Marks a new fetch as in flight and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.generation
    }

    /// Applies the outcome of fetch `generation`. Returns `false` for stale ones.
    pub fn complete(&mut self, generation: u64, outcome: Result<Vec<R>, String>) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Ignoring stale fetch completion");
            return false;
        }
        self.status = match outcome {
            Ok(records) => FetchStatus::Loaded(records),
            Err(message) => FetchStatus::Failed(message),
        };
        true
    }
}
