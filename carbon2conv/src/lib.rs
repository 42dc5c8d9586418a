/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod input;
mod logger;
mod opts;

pub mod build;
pub mod target;

pub use logger::setup_log;
pub use opts::{ProcArgs, add_global_args, parse_global_args};
