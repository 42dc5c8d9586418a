/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::env;

fn main() {
    let rustc = rustc_version::version_meta().unwrap();
    println!(
        "cargo:rustc-env=CARBON2_BUILD_RUSTC_VERSION={}",
        rustc.short_version_string
    );
    println!(
        "cargo:rustc-env=CARBON2_BUILD_RUSTC_CHANNEL={:?}",
        rustc.channel
    );

    println!(
        "cargo:rustc-env=CARBON2_BUILD_TARGET={}",
        env::var("TARGET").unwrap()
    );
    println!(
        "cargo:rustc-env=CARBON2_BUILD_PROFILE={}",
        env::var("PROFILE").unwrap()
    );
}
