// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub use nowplay_core::playback::{DurationSecs, PlaybackRate, PositionSecs};
