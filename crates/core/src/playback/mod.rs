// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, time::Duration};

use crate::prelude::*;

///////////////////////////////////////////////////////////////////////
// Position
///////////////////////////////////////////////////////////////////////

pub type PositionInSeconds = f64;

/// A playback position, measured in seconds from the start of the item.
///
/// The stored value is opaque: any `f64` is accepted and returned
/// unchanged. Whoever calculates the position defines its semantics.
/// Use [`Validate`](semval::Validate) to check for non-finite values.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PositionSecs(pub PositionInSeconds);

impl PositionSecs {
    #[must_use]
    pub const fn unit_of_measure() -> &'static str {
        "s"
    }
}

#[derive(Copy, Clone, Debug)]
pub enum PositionSecsInvalidity {
    OutOfRange,
}

impl Validate for PositionSecs {
    type Invalidity = PositionSecsInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(!self.0.is_finite(), Self::Invalidity::OutOfRange)
            .into()
    }
}

impl fmt::Display for PositionSecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} {}", self.0, Self::unit_of_measure())
    }
}

///////////////////////////////////////////////////////////////////////
// Duration
///////////////////////////////////////////////////////////////////////

pub type DurationInSeconds = f64;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DurationSecs(DurationInSeconds);

impl DurationSecs {
    #[must_use]
    pub const fn unit_of_measure() -> &'static str {
        "s"
    }

    #[must_use]
    pub const fn from_inner(inner: DurationInSeconds) -> Self {
        Self(inner)
    }

    #[must_use]
    pub const fn to_inner(self) -> DurationInSeconds {
        let Self(inner) = self;
        inner
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(0_f64)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self <= Self::empty()
    }
}

#[derive(Copy, Clone, Debug)]
pub enum DurationSecsInvalidity {
    OutOfRange,
}

impl Validate for DurationSecs {
    type Invalidity = DurationSecsInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                !(self.0.is_finite() && *self >= Self::empty()),
                Self::Invalidity::OutOfRange,
            )
            .into()
    }
}

impl From<Duration> for DurationSecs {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs_f64())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DurationOutOfRangeError;

impl TryFrom<DurationSecs> for Duration {
    type Error = DurationOutOfRangeError;

    fn try_from(value: DurationSecs) -> Result<Self, Self::Error> {
        let secs = value.to_inner();
        if !secs.is_finite() || secs < 0.0 || secs > Duration::MAX.as_secs_f64() {
            return Err(DurationOutOfRangeError);
        }
        Ok(Self::from_secs_f64(secs))
    }
}

impl fmt::Display for DurationSecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_inner(), Self::unit_of_measure())
    }
}

///////////////////////////////////////////////////////////////////////
// Rate
///////////////////////////////////////////////////////////////////////

pub type RateFactor = f64;

/// Dimensionless playback rate factor.
///
/// 1.0 is normal forward playback, 0.0 is paused.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PlaybackRate(pub RateFactor);

impl PlaybackRate {
    #[must_use]
    pub const fn paused() -> Self {
        Self(0_f64)
    }

    #[must_use]
    pub const fn normal() -> Self {
        Self(1_f64)
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        self != Self::paused()
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::normal()
    }
}

#[derive(Copy, Clone, Debug)]
pub enum PlaybackRateInvalidity {
    OutOfRange,
}

impl Validate for PlaybackRate {
    type Invalidity = PlaybackRateInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(!self.0.is_finite(), Self::Invalidity::OutOfRange)
            .into()
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
