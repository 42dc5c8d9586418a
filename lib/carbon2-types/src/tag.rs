/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use indexmap::IndexMap;

/// Tags of a metric record.
///
/// Iteration follows insertion order, which is also the order encoders
/// write the tags in. Equality ignores the order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricTagMap {
    inner: IndexMap<String, String>,
}

impl MetricTagMap {
    pub fn with_capacity(capacity: usize) -> Self {
        MetricTagMap {
            inner: IndexMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Insert a tag, replacing the value of an existing key in place.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MetricTagMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = MetricTagMap::default();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl fmt::Display for MetricTagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.inner.iter();
        let Some((name, value)) = iter.next() else {
            return Ok(());
        };
        f.write_str(name)?;
        f.write_str(": ")?;
        f.write_str(value)?;

        for (name, value) in iter {
            f.write_str(", ")?;
            f.write_str(name)?;
            f.write_str(": ")?;
            f.write_str(value)?;
        }
        Ok(())
    }
}
