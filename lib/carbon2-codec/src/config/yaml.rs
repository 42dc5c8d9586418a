/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use super::Carbon2EncoderConfig;
use crate::Carbon2Mode;

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn as_mode(v: &Yaml) -> anyhow::Result<Carbon2Mode> {
    match v {
        Yaml::String(s) => Ok(Carbon2Mode::from_str(s)?),
        Yaml::Null => Ok(Carbon2Mode::Unset),
        _ => Err(anyhow!("yaml value type for 'carbon2 mode' should be 'string'")),
    }
}

impl Carbon2EncoderConfig {
    /// Parse from either the mode string or a map.
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut config = Carbon2EncoderConfig::default();
                for (k, v) in map.iter() {
                    let Yaml::String(k) = k else {
                        return Err(anyhow!("key in hash should be string"));
                    };
                    config
                        .set_by_yaml_kv(k, v)
                        .context(format!("failed to parse value of key {k}"))?;
                }
                Ok(config)
            }
            Yaml::String(_) | Yaml::Null => {
                let mode = as_mode(v)?;
                Ok(Carbon2EncoderConfig::new(mode))
            }
            _ => Err(anyhow!(
                "yaml value type for 'carbon2 encoder config' should be 'map' or 'string'"
            )),
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "mode" | "format" | "carbon2_format" => {
                self.mode =
                    as_mode(v).context(format!("invalid carbon2 mode value for key {k}"))?;
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}
