// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Startup configuration from environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MODEL_PATH` | (required) | Path to the serialized embedding model |
//! | `API_PORT` | `8080` | HTTP listen port |
//! | `BIND_ADDR` | `0.0.0.0` | HTTP listen address |
//! | `NEIGHBOR_COUNT` | `10` | Neighbors returned by /most_similar |

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

use crate::embeddings::DEFAULT_NEIGHBOR_COUNT;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub model_path: PathBuf,
    pub bind_addr: String,
    pub api_port: u16,
    pub neighbor_count: usize,
}

impl NodeConfig {
    /// Read configuration from the process environment
    ///
    /// `MODEL_PATH` is required; the service cannot start without a model.
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .map_err(|_| anyhow!("MODEL_PATH environment variable is required"))?;

        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow!("Invalid API_PORT: {}", e))?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let neighbor_count = env::var("NEIGHBOR_COUNT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_NEIGHBOR_COUNT);

        Ok(Self {
            model_path,
            bind_addr,
            api_port,
            neighbor_count,
        })
    }
}
