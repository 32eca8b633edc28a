// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Domain model for now-playing content items.
//!
//! A [`ContentItem`] represents one playable media entry. It exclusively
//! owns a [`ContentItemMetadata`] instance that carries derived playback
//! attributes. Items are constructed from a schema-free
//! [`NowPlayingInfo`](nowplaying::NowPlayingInfo) snapshot supplied by an
//! external now-playing information source.

pub mod nowplaying;
pub mod playback;

pub mod item;
pub use self::item::{ContentItem, ContentItemMetadata};

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IntoValidated as _, IsValid, Validate as _, ValidatedFrom as _};
}
