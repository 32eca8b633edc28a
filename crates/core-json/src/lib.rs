// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! JSON mappings for the `nowplay-core` boundary types.

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod item;
pub mod nowplaying;
pub mod playback;
