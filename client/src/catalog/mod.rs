//! Catalog loading: the uniform fetch-on-mount pattern.
//!
//! Every read-only screen follows the same shape: start in `Loading`, fetch,
//! land in `Ready` or `Unavailable`. The loaders here are plain async
//! functions decoupled from any rendering layer; reducers that embed a
//! [`RemoteData`] pair it with a [`Generation`] counter so a response from a
//! superseded fetch is discarded instead of clobbering newer state.

pub mod loaders;

/// Monotonic fetch counter.
///
/// Bumped on every new fetch; feedback carrying an older generation is
/// stale and must be ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Generation zero
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// The next generation
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Lifecycle of remotely fetched data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteData<T> {
    /// Fetch in flight
    Loading,
    /// Data arrived
    Ready(T),
    /// Fetch failed; carries the user-facing reason
    Unavailable(String),
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> RemoteData<T> {
    /// The data, if ready
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Loading | Self::Unavailable(_) => None,
        }
    }

    /// Whether the fetch is still in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_advances_and_wraps() {
        let g = Generation::new();
        assert_ne!(g, g.next());
        assert_eq!(Generation(u64::MAX).next(), Generation(0));
    }

    #[test]
    fn remote_data_accessors() {
        let loading: RemoteData<u32> = RemoteData::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);

        let ready = RemoteData::Ready(7);
        assert_eq!(ready.ready(), Some(&7));
    }
}
