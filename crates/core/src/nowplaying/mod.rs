// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use hashbrown::HashMap;

use crate::{
    playback::{DurationSecs, PlaybackRate, PositionSecs},
    prelude::*,
};

/// Well-known keys of a now-playing information snapshot.
///
/// The schema of the snapshot is owned by the external information
/// source. These keys merely drive the optional, typed accessors on
/// [`NowPlayingInfo`]. Unknown keys are preserved verbatim.
pub mod key {
    pub const ALBUM: &str = "album";
    pub const ARTIST: &str = "artist";
    pub const DURATION: &str = "duration";
    pub const ELAPSED_TIME: &str = "elapsedTime";
    pub const PLAYBACK_RATE: &str = "playbackRate";
    pub const TITLE: &str = "title";
}

/// A single value of a now-playing information snapshot.
///
/// Tagged union of the primitive value kinds that an external,
/// dynamically typed information source may deliver.
#[derive(Clone, Debug, PartialEq)]
pub enum NowPlayingValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl NowPlayingValue {
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            Self::Number(_) | Self::String(_) => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Boolean(_) | Self::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Boolean(_) | Self::Number(_) => None,
        }
    }
}

impl From<bool> for NowPlayingValue {
    fn from(from: bool) -> Self {
        Self::Boolean(from)
    }
}

impl From<f64> for NowPlayingValue {
    fn from(from: f64) -> Self {
        Self::Number(from)
    }
}

impl From<String> for NowPlayingValue {
    fn from(from: String) -> Self {
        Self::String(from)
    }
}

impl From<&str> for NowPlayingValue {
    fn from(from: &str) -> Self {
        Self::String(from.to_owned())
    }
}

impl fmt::Display for NowPlayingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

/// A schema-free snapshot of now-playing information.
///
/// Maps string keys to [`NowPlayingValue`]s. Supplied by a collaborator
/// outside of this crate, typically the playback or remote-control layer
/// of an application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NowPlayingInfo(HashMap<String, NowPlayingValue>);

impl NowPlayingInfo {
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[must_use]
    pub const fn from_inner(inner: HashMap<String, NowPlayingValue>) -> Self {
        Self(inner)
    }

    #[must_use]
    pub fn into_inner(self) -> HashMap<String, NowPlayingValue> {
        let Self(inner) = self;
        inner
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&NowPlayingValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<NowPlayingValue>,
    ) -> Option<NowPlayingValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<NowPlayingValue> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NowPlayingValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(NowPlayingValue::as_number)
    }

    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(NowPlayingValue::as_str)
    }

    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(NowPlayingValue::as_boolean)
    }

    /// Elapsed playback time hint, if the snapshot carries one.
    #[must_use]
    pub fn elapsed_time(&self) -> Option<PositionSecs> {
        self.number(key::ELAPSED_TIME).map(PositionSecs)
    }

    #[must_use]
    pub fn duration(&self) -> Option<DurationSecs> {
        self.number(key::DURATION).map(DurationSecs::from_inner)
    }

    #[must_use]
    pub fn playback_rate(&self) -> Option<PlaybackRate> {
        self.number(key::PLAYBACK_RATE).map(PlaybackRate)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.string(key::TITLE)
    }

    #[must_use]
    pub fn artist(&self) -> Option<&str> {
        self.string(key::ARTIST)
    }

    #[must_use]
    pub fn album(&self) -> Option<&str> {
        self.string(key::ALBUM)
    }
}

impl From<HashMap<String, NowPlayingValue>> for NowPlayingInfo {
    fn from(from: HashMap<String, NowPlayingValue>) -> Self {
        Self::from_inner(from)
    }
}

impl From<NowPlayingInfo> for HashMap<String, NowPlayingValue> {
    fn from(from: NowPlayingInfo) -> Self {
        from.into_inner()
    }
}

impl FromIterator<(String, NowPlayingValue)> for NowPlayingInfo {
    fn from_iter<T: IntoIterator<Item = (String, NowPlayingValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum NowPlayingInfoInvalidity {
    KeyEmpty,
}

impl Validate for NowPlayingInfo {
    type Invalidity = NowPlayingInfoInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                self.0.keys().any(|key| key.trim().is_empty()),
                Self::Invalidity::KeyEmpty,
            )
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
