use crate::Error;
use layerswap_sdk::{models::Swap, SwapDetailsSource};
use reactive_stores::Store;
use tracing::debug;

/// Identifies one swap request. Only the most recently issued ticket may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Loaded,
    Failed(Error),
    /// A newer request was issued while this one was in flight; its result was dropped.
    Stale,
}

/// Swap state owned by a swap view.
///
/// A failed request leaves the previously loaded swap in place.
#[derive(Store, Debug, Clone, Default)]
pub struct SwapLookup {
    pub swap: Option<Swap>,
    pub loading: bool,
    generation: u64,
}

impl SwapLookup {
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Swap, Error>) -> LookupOutcome {
        if !self.is_current(ticket) {
            debug!(
                "dropping result of request {} (current is {})",
                ticket.0, self.generation
            );
            return LookupOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(swap) => {
                self.swap = Some(swap);
                LookupOutcome::Loaded
            }
            Err(error) => LookupOutcome::Failed(error),
        }
    }
}

pub async fn fetch_swap<S: SwapDetailsSource + ?Sized>(source: &S, id: &str) -> Result<Swap, Error> {
    source.get_swap_details(id).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use layerswap_sdk::models::SwapStatus;
    use std::collections::HashMap;

    struct FakeApi {
        swaps: HashMap<String, Swap>,
    }

    impl FakeApi {
        fn with(swaps: impl IntoIterator<Item = Swap>) -> Self {
            Self {
                swaps: swaps.into_iter().map(|swap| (swap.id.clone(), swap)).collect(),
            }
        }
    }

    #[async_trait(?Send)]
    impl SwapDetailsSource for FakeApi {
        async fn get_swap_details(&self, id: &str) -> Result<Swap, layerswap_sdk::Error> {
            self.swaps
                .get(id)
                .cloned()
                .ok_or_else(|| layerswap_sdk::Error::Api {
                    code: Some("SWAP_NOT_FOUND".into()),
                    message: "Not found".into(),
                })
        }
    }

    fn swap(id: &str, status: SwapStatus) -> Swap {
        Swap {
            id: id.into(),
            status,
            ..Default::default()
        }
    }

    // Drives one lookup the way the view does, recording every loading value it would render.
    fn run(lookup: &mut SwapLookup, api: &FakeApi, id: &str, loading: &mut Vec<bool>) -> LookupOutcome {
        let ticket = lookup.begin();
        loading.push(lookup.loading);
        let result = block_on(fetch_swap(api, id));
        let outcome = lookup.complete(ticket, result);
        loading.push(lookup.loading);
        outcome
    }

    #[test]
    fn successful_lookup_toggles_loading_once() {
        let api = FakeApi::with([swap("abc123", SwapStatus::Pending)]);
        let mut lookup = SwapLookup::default();
        let mut loading = vec![lookup.loading];

        let outcome = run(&mut lookup, &api, "abc123", &mut loading);

        assert_eq!(outcome, LookupOutcome::Loaded);
        assert_eq!(loading, vec![false, true, false]);
        assert_eq!(lookup.swap.map(|swap| swap.id).as_deref(), Some("abc123"));
    }

    #[test]
    fn failed_lookup_reports_message_and_keeps_previous_swap() {
        let api = FakeApi::with([swap("abc123", SwapStatus::Completed)]);
        let mut lookup = SwapLookup::default();
        let mut loading = Vec::new();

        run(&mut lookup, &api, "abc123", &mut loading);
        let outcome = run(&mut lookup, &api, "missing", &mut loading);

        match outcome {
            LookupOutcome::Failed(error) => assert_eq!(error.to_string(), "Not found"),
            other => panic!("expected a failure, got {other:?}"),
        }
        assert!(!lookup.loading);
        assert_eq!(
            lookup.swap.as_ref().map(|swap| swap.status),
            Some(SwapStatus::Completed)
        );
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut lookup = SwapLookup::default();

        let first = lookup.begin();
        let second = lookup.begin();

        assert_eq!(
            lookup.complete(first, Ok(swap("old", SwapStatus::Pending))),
            LookupOutcome::Stale
        );
        assert!(lookup.loading, "a stale response must not end loading");
        assert!(lookup.swap.is_none());

        assert_eq!(
            lookup.complete(second, Ok(swap("new", SwapStatus::Pending))),
            LookupOutcome::Loaded
        );
        assert!(!lookup.loading);
        assert_eq!(lookup.swap.map(|swap| swap.id).as_deref(), Some("new"));
    }

    #[test]
    fn stale_failures_are_dropped_too() {
        let mut lookup = SwapLookup::default();

        let first = lookup.begin();
        let second = lookup.begin();

        assert_eq!(
            lookup.complete(first, Err(Error::generic("timeout"))),
            LookupOutcome::Stale
        );
        assert!(lookup.is_current(second));
    }
}
