// SPDX-License-Identifier: MPL-2.0
//! Sources of image references for the carousel cards.
//!
//! Cards never build URLs themselves; they ask an [`ImageProvider`] for the
//! next reference. Production code uses [`PicsumProvider`], tests plug in a
//! [`SequenceProvider`] to get deterministic values.

use crate::app::config::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};
use std::time::{SystemTime, UNIX_EPOCH};

/// Base URL of the placeholder image service.
pub const PICSUM_BASE_URL: &str = "https://picsum.photos";

/// Produces an opaque image reference on every call.
///
/// Calls are independent and infallible; the content of the returned value is
/// unpredictable and may repeat.
pub trait ImageProvider {
    fn next_image(&mut self) -> String;
}

/// Picks a random seeded image from picsum.photos.
#[derive(Debug, Clone)]
pub struct PicsumProvider {
    width: u32,
    height: u32,
}

impl PicsumProvider {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds the URL for a given seed.
    #[must_use]
    pub fn url_for_seed(&self, seed: u64) -> String {
        format!(
            "{}/seed/{:016x}/{}/{}",
            PICSUM_BASE_URL, seed, self.width, self.height
        )
    }
}

impl Default for PicsumProvider {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT)
    }
}

impl ImageProvider for PicsumProvider {
    fn next_image(&mut self) -> String {
        self.url_for_seed(random_seed())
    }
}

/// Returns a random seed from the OS entropy source, or a clock-derived value
/// if the entropy source is unavailable.
fn random_seed() -> u64 {
    getrandom::u64().unwrap_or_else(|err| {
        log::warn!("entropy source unavailable ({err}), falling back to clock seed");
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    })
}

/// Deterministic provider that cycles through a fixed list of references and
/// counts how many times it was asked.
#[derive(Debug, Clone)]
pub struct SequenceProvider {
    refs: Vec<String>,
    calls: usize,
}

impl SequenceProvider {
    /// Creates a provider cycling through `refs`.
    ///
    /// An empty list yields `"stub-<n>"` references instead.
    #[must_use]
    pub fn new<I, S>(refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            refs: refs.into_iter().map(Into::into).collect(),
            calls: 0,
        }
    }

    /// Number of references handed out so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ImageProvider for SequenceProvider {
    fn next_image(&mut self) -> String {
        let value = if self.refs.is_empty() {
            format!("stub-{}", self.calls)
        } else {
            self.refs[self.calls % self.refs.len()].clone()
        };
        self.calls += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picsum_url_embeds_seed_and_size() {
        let provider = PicsumProvider::new(640, 480);
        assert_eq!(
            provider.url_for_seed(0xabc),
            "https://picsum.photos/seed/0000000000000abc/640/480"
        );
    }

    #[test]
    fn picsum_provider_returns_picsum_urls() {
        let mut provider = PicsumProvider::default();
        let url = provider.next_image();
        assert!(url.starts_with("https://picsum.photos/seed/"));
        assert!(url.ends_with(&format!("/{DEFAULT_IMAGE_WIDTH}/{DEFAULT_IMAGE_HEIGHT}")));
    }

    #[test]
    fn picsum_provider_varies_between_calls() {
        let mut provider = PicsumProvider::default();
        let urls: std::collections::HashSet<String> =
            (0..16).map(|_| provider.next_image()).collect();
        assert!(urls.len() > 1);
    }

    #[test]
    fn sequence_provider_cycles_and_counts() {
        let mut provider = SequenceProvider::new(["a", "b"]);
        assert_eq!(provider.next_image(), "a");
        assert_eq!(provider.next_image(), "b");
        assert_eq!(provider.next_image(), "a");
        assert_eq!(provider.calls(), 3);
    }

    #[test]
    fn empty_sequence_provider_numbers_its_refs() {
        let mut provider = SequenceProvider::new(Vec::<String>::new());
        assert_eq!(provider.next_image(), "stub-0");
        assert_eq!(provider.next_image(), "stub-1");
    }
}
