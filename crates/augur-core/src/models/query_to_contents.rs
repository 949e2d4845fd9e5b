use super::{Content, Query};

/// Ordered mapping from each transformed [`Query`] to the per-retriever
/// content lists obtained for it.
///
/// Entry order is query order; within an entry, list order is retriever
/// order. Each retriever's list is kept separate so aggregators can tell
/// "retriever A for query 1" from "retriever B for query 1".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryToContents {
    entries: Vec<(Query, Vec<Vec<Content>>)>,
}

impl QueryToContents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert the lists for `query`. An equal query already present keeps its
    /// position and has its lists replaced; the previous lists are returned.
    pub fn insert(&mut self, query: Query, lists: Vec<Vec<Content>>) -> Option<Vec<Vec<Content>>> {
        match self.entries.iter_mut().find(|(q, _)| *q == query) {
            Some((_, existing)) => Some(std::mem::replace(existing, lists)),
            None => {
                self.entries.push((query, lists));
                None
            }
        }
    }

    pub fn get(&self, query: &Query) -> Option<&[Vec<Content>]> {
        self.entries
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, lists)| lists.as_slice())
    }

    /// Number of distinct queries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn queries(&self) -> impl Iterator<Item = &Query> {
        self.entries.iter().map(|(q, _)| q)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Query, &[Vec<Content>])> {
        self.entries.iter().map(|(q, lists)| (q, lists.as_slice()))
    }

    /// Total number of per-retriever lists across all queries.
    pub fn list_count(&self) -> usize {
        self.entries.iter().map(|(_, lists)| lists.len()).sum()
    }

    /// Total number of contents across all lists.
    pub fn content_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, lists)| lists.iter())
            .map(Vec::len)
            .sum()
    }
}

impl FromIterator<(Query, Vec<Vec<Content>>)> for QueryToContents {
    fn from_iter<I: IntoIterator<Item = (Query, Vec<Vec<Content>>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (query, lists) in iter {
            map.insert(query, lists);
        }
        map
    }
}

impl IntoIterator for QueryToContents {
    type Item = (Query, Vec<Vec<Content>>);
    type IntoIter = std::vec::IntoIter<(Query, Vec<Vec<Content>>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
