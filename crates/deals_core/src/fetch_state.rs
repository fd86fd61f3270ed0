use std::fmt;
use std::num::NonZeroU32;

use crate::DealRecord;

/// Monotonic marker identifying one call to [`FetchTracker::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page and size must both be at least 1 (page={page}, size={size})")]
pub struct InvalidPageRequest {
    pub page: u32,
    pub size: u32,
}

/// One page of the deal catalog. Both numbers are 1 or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: NonZeroU32,
    size: NonZeroU32,
}

impl PageRequest {
    /// The page the view loads on mount.
    pub const FIRST_PAGE: PageRequest = PageRequest {
        page: NonZeroU32::MIN,
        size: match NonZeroU32::new(24) {
            Some(size) => size,
            None => NonZeroU32::MIN,
        },
    };

    pub fn new(page: u32, size: u32) -> Result<Self, InvalidPageRequest> {
        match (NonZeroU32::new(page), NonZeroU32::new(size)) {
            (Some(page), Some(size)) => Ok(Self { page, size }),
            _ => Err(InvalidPageRequest { page, size }),
        }
    }

    pub fn page(&self) -> u32 {
        self.page.get()
    }

    pub fn size(&self) -> u32 {
        self.size.get()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::FIRST_PAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<DealRecord>),
    Failed(String),
}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Loaded(_) => FetchStatus::Loaded,
            FetchState::Failed(_) => FetchStatus::Failed,
        }
    }

    pub fn items(&self) -> &[DealRecord] {
        match self {
            FetchState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Category of a [`FetchState`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Whether a completion was applied or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    generation: Generation,
    request: PageRequest,
    /// State to fall back to if this retrieval is cancelled.
    previous: FetchState,
}

/// Owns the current [`FetchState`] and the single outstanding retrieval.
///
/// Every `start` issues a fresh [`Generation`]. Only a completion carrying the
/// generation of the retrieval still in flight is applied; anything else was
/// superseded or cancelled and is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchTracker {
    state: FetchState,
    latest: Generation,
    in_flight: Option<InFlight>,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    pub fn in_flight(&self) -> Option<(Generation, PageRequest)> {
        self.in_flight
            .as_ref()
            .map(|flight| (flight.generation, flight.request))
    }

    /// Moves to `Loading` and supersedes any outstanding retrieval.
    pub fn start(&mut self, request: PageRequest) -> Generation {
        self.latest = self.latest.next();
        // A superseded retrieval never completed, so keep what preceded it.
        let previous = match self.in_flight.take() {
            Some(superseded) => superseded.previous,
            None => std::mem::replace(&mut self.state, FetchState::Loading),
        };
        self.state = FetchState::Loading;
        self.in_flight = Some(InFlight {
            generation: self.latest,
            request,
            previous,
        });
        self.latest
    }

    /// Drops the outstanding retrieval, if any, and restores the state that
    /// preceded it. Returns the cancelled generation.
    pub fn cancel(&mut self) -> Option<Generation> {
        let flight = self.in_flight.take()?;
        self.state = flight.previous;
        Some(flight.generation)
    }

    pub fn complete(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<DealRecord>, String>,
    ) -> Completion {
        match &self.in_flight {
            Some(flight) if flight.generation == generation => {}
            _ => return Completion::Stale,
        }
        self.in_flight = None;
        self.state = match outcome {
            Ok(items) => FetchState::Loaded(items),
            Err(reason) => FetchState::Failed(reason),
        };
        Completion::Applied
    }
}
