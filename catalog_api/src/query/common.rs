//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] pagination fields.

use url::Url;

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 20;
/// Offset used when the caller does not supply one.
pub const DEFAULT_OFFSET: u32 = 0;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Returns the query parameters in the order they are sent.
    fn pairs(&self) -> Vec<(&'static str, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in self.pairs() {
                query_pairs.append_pair(key, &value);
            }
        }
        url
    }

    /// Sets the maximum number of results to return.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = limit;
        self
    }

    /// Sets the number of results to skip.
    fn with_offset(mut self, offset: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = offset;
        self
    }
}

/// Pagination fields shared by all list queries. Both are always sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Maximum number of results. Defaults to 20.
    pub limit: u32,
    /// Number of results to skip. Defaults to 0.
    pub offset: u32,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl QueryCommon {
    /// Returns the pagination pairs, `limit` first.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}
