// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{playback::PositionSecs, prelude::*};

mod _core {
    pub(super) use nowplay_core::item::*;
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentItemMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_playback_position: Option<PositionSecs>,
}

impl From<ContentItemMetadata> for _core::ContentItemMetadata {
    fn from(from: ContentItemMetadata) -> Self {
        let ContentItemMetadata {
            calculated_playback_position,
        } = from;
        let calculated_playback_position = calculated_playback_position.unwrap_or_default();
        if !calculated_playback_position.0.is_finite() {
            // Tolerated, but almost certainly not intended by the sender.
            log::warn!("Non-finite calculated playback position: {calculated_playback_position}");
        }
        Self {
            calculated_playback_position,
        }
    }
}

impl From<_core::ContentItemMetadata> for ContentItemMetadata {
    fn from(from: _core::ContentItemMetadata) -> Self {
        let _core::ContentItemMetadata {
            calculated_playback_position,
        } = from;
        Self {
            calculated_playback_position: Some(calculated_playback_position),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ContentItemMetadata>,
}

impl From<ContentItem> for _core::ContentItem {
    fn from(from: ContentItem) -> Self {
        let ContentItem { metadata } = from;
        Self {
            metadata: metadata.map(Into::into),
        }
    }
}

impl From<_core::ContentItem> for ContentItem {
    fn from(from: _core::ContentItem) -> Self {
        let _core::ContentItem { metadata } = from;
        Self {
            metadata: metadata.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests;
