use url::Url;

use crate::error::LocationError;

/// Base used to resolve bare queries such as `?page=3`.
pub const DEFAULT_BASE: &str = "slides://deck/";

/// The viewer's address, as seen by navigation.
///
/// `replace` swaps the current address in place: no new history entry, no
/// reload.
pub trait Location {
    fn current(&self) -> Url;
    fn replace(&mut self, url: Url);
}

/// In-memory `Location` for desktop windows and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    url: Url,
    replacements: usize,
}

impl MemoryLocation {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            replacements: 0,
        }
    }

    /// Parses an absolute URL, or a bare query (`?page=3`, `page=3`) resolved
    /// against [`DEFAULT_BASE`].
    ///
    /// # Errors
    ///
    /// Returns `LocationError::Invalid` when the input cannot be parsed.
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        let trimmed = raw.trim();
        let invalid = |source| LocationError::Invalid {
            raw: raw.to_string(),
            source,
        };

        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let query = trimmed.strip_prefix('?').unwrap_or(trimmed);
                let mut url = base_url();
                url.set_query(Some(query).filter(|query| !query.is_empty()));
                url
            }
            Err(err) => return Err(invalid(err)),
        };
        Ok(Self::new(url))
    }

    /// Number of `replace` calls so far.
    #[must_use]
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new(base_url())
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> Url {
        self.url.clone()
    }

    fn replace(&mut self, url: Url) {
        self.url = url;
        self.replacements += 1;
    }
}

fn base_url() -> Url {
    Url::parse(DEFAULT_BASE).expect("DEFAULT_BASE should be a valid URL")
}
