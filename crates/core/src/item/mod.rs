// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::mem;

use crate::{
    nowplaying::NowPlayingInfo,
    playback::{PositionSecs, PositionSecsInvalidity},
    prelude::*,
};

/// Derived metadata of a content item.
///
/// Populated by an external playback-position calculator. This crate
/// only stores the calculated value and does not interpret it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContentItemMetadata {
    /// The calculated playback position.
    ///
    /// Defaults to zero until the calculator has provided a value.
    pub calculated_playback_position: PositionSecs,
}

impl ContentItemMetadata {
    /// Derive metadata from a now-playing snapshot.
    ///
    /// The calculated playback position is seeded from the elapsed-time
    /// hint if the snapshot carries a numeric one, otherwise it starts
    /// at zero.
    #[must_use]
    pub fn new_from_now_playing_info(info: &NowPlayingInfo) -> Self {
        Self {
            calculated_playback_position: info.elapsed_time().unwrap_or_default(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum ContentItemMetadataInvalidity {
    CalculatedPlaybackPosition(PositionSecsInvalidity),
}

impl Validate for ContentItemMetadata {
    type Invalidity = ContentItemMetadataInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(
                &self.calculated_playback_position,
                Self::Invalidity::CalculatedPlaybackPosition,
            )
            .into()
    }
}

/// A single playable media entry.
///
/// Exclusively owns its [`ContentItemMetadata`]: replacing the metadata
/// releases the previous instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentItem {
    pub metadata: Option<ContentItemMetadata>,
}

impl ContentItem {
    /// Construct an item from a now-playing snapshot.
    ///
    /// Metadata is constructed eagerly, i.e. the returned item always
    /// owns a [`ContentItemMetadata`] instance. An empty snapshot is
    /// valid and yields the default playback position of zero.
    #[must_use]
    pub fn new_from_now_playing_info(info: &NowPlayingInfo) -> Self {
        Self {
            metadata: Some(ContentItemMetadata::new_from_now_playing_info(info)),
        }
    }

    /// Replace the owned metadata and return the previous instance.
    pub fn replace_metadata(
        &mut self,
        metadata: impl Into<Option<ContentItemMetadata>>,
    ) -> Option<ContentItemMetadata> {
        mem::replace(&mut self.metadata, metadata.into())
    }
}

/// The required now-playing snapshot is absent.
#[derive(Copy, Clone, Debug, derive_more::Display, derive_more::Error)]
#[display("missing now-playing info")]
pub struct NowPlayingInfoMissing;

/// Construction from an optional snapshot.
///
/// An absent snapshot is rejected, an empty snapshot is accepted with
/// default values.
impl TryFrom<Option<&NowPlayingInfo>> for ContentItem {
    type Error = NowPlayingInfoMissing;

    fn try_from(info: Option<&NowPlayingInfo>) -> Result<Self, Self::Error> {
        info.map(Self::new_from_now_playing_info)
            .ok_or(NowPlayingInfoMissing)
    }
}

#[derive(Copy, Clone, Debug)]
pub enum ContentItemInvalidity {
    Metadata(ContentItemMetadataInvalidity),
}

impl Validate for ContentItem {
    type Invalidity = ContentItemInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.metadata, Self::Invalidity::Metadata)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
