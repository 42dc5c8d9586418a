/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::{Carbon2Encoder, Carbon2Mode};

#[cfg(feature = "yaml")]
mod yaml;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carbon2EncoderConfig {
    mode: Carbon2Mode,
}

impl Carbon2EncoderConfig {
    pub fn new(mode: Carbon2Mode) -> Self {
        Carbon2EncoderConfig { mode }
    }

    #[inline]
    pub fn mode(&self) -> Carbon2Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Carbon2Mode) {
        self.mode = mode;
    }

    pub fn build(&self) -> Carbon2Encoder {
        Carbon2Encoder::with_mode(self.mode)
    }
}
