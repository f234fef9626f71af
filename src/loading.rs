//! Async Load Tracking
//!
//! Request state for views fed by the API. Each request takes a ticket so a
//! response that arrives after a newer request was issued is dropped.

use crate::api::ApiResult;

/// State of a view backed by a request
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<ApiResult<T>> for LoadState<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}

/// A [`LoadState`] that only accepts the latest request's response
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedLoad<T> {
    state: LoadState<T>,
    latest: u64,
}

impl<T> Default for TrackedLoad<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            latest: 0,
        }
    }
}

impl<T> TrackedLoad<T> {
    /// Start a new request, superseding all earlier ones. Returns its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.state = LoadState::Loading;
        self.latest
    }

    /// Store the response for `ticket`. Returns false if it was stale.
    pub fn finish(&mut self, ticket: u64, result: ApiResult<T>) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.state = result.into();
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<u32> = Ok(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let failed: LoadState<u32> = Err(ApiError::PlantNotFound(7)).into();
        assert_eq!(failed, LoadState::Failed("Plant not found: 7".to_string()));
        assert_eq!(LoadState::<u32>::default(), LoadState::Loading);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut load = TrackedLoad::<Vec<u32>>::default();
        let first = load.begin();
        let second = load.begin();

        // Newer request resolves first, older one straggles in afterwards
        assert!(load.finish(second, Ok(vec![2])));
        assert!(!load.finish(first, Ok(vec![1])));
        assert_eq!(load.state(), &LoadState::Ready(vec![2]));
    }

    #[test]
    fn test_begin_resets_to_loading() {
        let mut load = TrackedLoad::<u32>::default();
        let ticket = load.begin();
        load.finish(ticket, Err(ApiError::Network("offline".to_string())));
        assert_eq!(load.state(), &LoadState::Failed("Network error: offline".to_string()));

        load.begin();
        assert_eq!(load.state(), &LoadState::Loading);
    }
}
