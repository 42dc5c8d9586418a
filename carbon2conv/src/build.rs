/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

const RUSTC_VERSION: &str = env!("CARBON2_BUILD_RUSTC_VERSION");
const RUSTC_CHANNEL: &str = env!("CARBON2_BUILD_RUSTC_CHANNEL");

const BUILD_TARGET: &str = env!("CARBON2_BUILD_TARGET");
const BUILD_PROFILE: &str = env!("CARBON2_BUILD_PROFILE");

pub fn print_version(verbose_level: u8) {
    println!("{PKG_NAME} {VERSION}");
    if verbose_level > 0 {
        println!("Compiler: {RUSTC_VERSION} ({RUSTC_CHANNEL})");
        println!("Target: {BUILD_TARGET}, Profile: {BUILD_PROFILE}");
    }
}
