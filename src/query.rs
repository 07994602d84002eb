//! Query Component
//!
//! The query is held as a mapping of decoded keys to decoded values. Keys are unique and keep
//! the position of their first insertion, so serialization is deterministic. Two queries with
//! the same pairs in a different order are equal.

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Parses an `application/x-www-form-urlencoded` string.
    ///
    /// A pair without `'='` has an empty value. When a key repeats, the later value replaces the
    /// earlier one.
    ///
    /// # Examples
    ///
    /// ```
    /// use uricow::Query;
    ///
    /// let query = Query::parse("a=1&b=two+words&a=3&flag");
    /// assert_eq!(query.get("a"), Some("3"));
    /// assert_eq!(query.get("b"), Some("two words"));
    /// assert_eq!(query.get("flag"), Some(""));
    /// assert_eq!(query.to_string(), "a=3&b=two+words&flag=");
    /// ```
    pub fn parse(value: &str) -> Query {
        form_urlencoded::parse(value.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(existing, _)| existing == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `key` to `value`, keeping the position of `key` if it is already present.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();

        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Keeps only the pairs whose key satisfies `predicate`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.params.retain(|(key, _)| predicate(key));
    }
}

/// Writes the query in `application/x-www-form-urlencoded` form.
impl Display for Query {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();

        formatter.write_str(&encoded)
    }
}

impl Eq for Query {}

impl<K, V> Extend<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut query = Query::default();
        query.extend(iter);
        query
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Query) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}
