/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use chrono::{DateTime, Utc};

use crate::{FieldValue, MetricFieldMap, MetricKind, MetricTagMap};

#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    name: String,
    tags: MetricTagMap,
    fields: MetricFieldMap,
    time: DateTime<Utc>,
    kind: MetricKind,
}

impl Metric {
    pub fn new<N: Into<String>>(
        name: N,
        tags: MetricTagMap,
        fields: MetricFieldMap,
        time: DateTime<Utc>,
        kind: MetricKind,
    ) -> Self {
        Metric {
            name: name.into(),
            tags,
            fields,
            time,
            kind,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn tags(&self) -> &MetricTagMap {
        &self.tags
    }

    /// Tags as ordered key / value pairs.
    pub fn tag_list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter()
    }

    #[inline]
    pub fn fields(&self) -> &MetricFieldMap {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    #[inline]
    pub fn time(&self) -> &DateTime<Utc> {
        &self.time
    }

    /// Seconds since the unix epoch.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.time.timestamp()
    }

    #[inline]
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn add_tag<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.tags.insert(key, value);
    }

    pub fn add_field<K: Into<String>, V: Into<FieldValue>>(&mut self, key: K, value: V) {
        self.fields.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let time = DateTime::from_timestamp(1625855958, 0).unwrap();
        let mut m = Metric::new(
            "cpu",
            MetricTagMap::default(),
            MetricFieldMap::new(),
            time,
            MetricKind::Gauge,
        );
        m.add_tag("host", "a");
        m.add_field("idle", 90.5f64);
        m.add_field("busy", 10i64);

        assert_eq!(m.name(), "cpu");
        assert_eq!(m.tags().get("host"), Some("a"));
        assert_eq!(m.field("idle"), Some(&FieldValue::Float(90.5)));
        assert_eq!(m.field("busy"), Some(&FieldValue::Integer(10)));
        assert_eq!(m.timestamp(), 1625855958);
        assert_eq!(m.kind(), MetricKind::Gauge);

        let keys: Vec<_> = m.fields().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["idle", "busy"]);
    }
}
