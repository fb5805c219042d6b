/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::Pixel;

/// The running array of previously seen pixels
///
/// Each encode and decode owns one, starting with every slot zeroed.
/// A pixel lives at [`Pixel::hash`], newer pixels overwrite older ones.
pub(crate) struct IndexCache {
    slots: [Pixel; 64]
}

impl IndexCache {
    pub const fn new() -> IndexCache {
        IndexCache {
            slots: [Pixel::ZERO; 64]
        }
    }

    /// Pixel stored at `slot`, only the low 6 bits of slot are used
    #[inline(always)]
    pub fn get(&self, slot: usize) -> Pixel {
        self.slots[slot & 63]
    }

    /// Store `px` at its hash position
    #[inline(always)]
    pub fn insert(&mut self, px: Pixel) {
        self.slots[px.hash()] = px;
    }
}
