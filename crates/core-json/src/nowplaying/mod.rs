// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::HashMap;

use crate::prelude::*;

mod _core {
    pub(super) use nowplay_core::nowplaying::*;
}

/// Untagged union of the primitive now-playing value kinds.
///
/// Booleans must be matched before numbers, otherwise `serde` would
/// never reach the boolean variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(untagged)]
pub enum NowPlayingValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl From<NowPlayingValue> for _core::NowPlayingValue {
    fn from(from: NowPlayingValue) -> Self {
        use NowPlayingValue::*;
        match from {
            Boolean(value) => Self::Boolean(value),
            Number(value) => Self::Number(value),
            String(value) => Self::String(value),
        }
    }
}

impl From<_core::NowPlayingValue> for NowPlayingValue {
    fn from(from: _core::NowPlayingValue) -> Self {
        use _core::NowPlayingValue::*;
        match from {
            Boolean(value) => Self::Boolean(value),
            Number(value) => Self::Number(value),
            String(value) => Self::String(value),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(transparent)]
pub struct NowPlayingInfo(HashMap<String, NowPlayingValue>);

impl From<NowPlayingInfo> for _core::NowPlayingInfo {
    fn from(from: NowPlayingInfo) -> Self {
        let NowPlayingInfo(inner) = from;
        inner
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect()
    }
}

impl From<_core::NowPlayingInfo> for NowPlayingInfo {
    fn from(from: _core::NowPlayingInfo) -> Self {
        Self(
            from.into_inner()
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}
