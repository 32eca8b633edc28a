// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn metadata_position_roundtrip() {
    let mut metadata = ContentItemMetadata::default();
    for position in [0.0, -7.25, 123.456, f64::INFINITY, f64::NEG_INFINITY] {
        metadata.calculated_playback_position = PositionSecs(position);
        assert_eq!(PositionSecs(position), metadata.calculated_playback_position);
    }
    metadata.calculated_playback_position = PositionSecs(f64::NAN);
    assert!(metadata.calculated_playback_position.0.is_nan());
}

#[test]
fn validate_metadata() {
    assert!(ContentItemMetadata::default().validate().is_ok());
    let metadata = ContentItemMetadata {
        calculated_playback_position: PositionSecs(f64::INFINITY),
    };
    assert!(metadata.validate().is_err());
}

#[test]
fn default_item_has_no_metadata() {
    let item = ContentItem::default();
    assert_eq!(None, item.metadata);
    assert!(item.validate().is_ok());
}

#[test]
fn new_from_empty_snapshot() {
    let item = ContentItem::new_from_now_playing_info(&NowPlayingInfo::new());
    assert_eq!(Some(ContentItemMetadata::default()), item.metadata);
    assert_eq!(
        PositionSecs(0.0),
        item.metadata.expect("eager metadata").calculated_playback_position
    );
}

#[test]
fn new_from_snapshot_with_elapsed_time() {
    let mut info = NowPlayingInfo::new();
    info.insert(crate::nowplaying::key::ELAPSED_TIME, 42.5);
    info.insert(crate::nowplaying::key::TITLE, "Dogs");
    let item = ContentItem::new_from_now_playing_info(&info);
    assert_eq!(
        PositionSecs(42.5),
        item.metadata.expect("eager metadata").calculated_playback_position
    );
}

#[test]
fn new_from_snapshot_with_mistyped_elapsed_time() {
    let mut info = NowPlayingInfo::new();
    info.insert(crate::nowplaying::key::ELAPSED_TIME, "42.5");
    let item = ContentItem::new_from_now_playing_info(&info);
    assert_eq!(
        PositionSecs(0.0),
        item.metadata.expect("eager metadata").calculated_playback_position
    );
}

#[test]
fn replace_metadata_releases_previous_instance() {
    let first = ContentItemMetadata {
        calculated_playback_position: PositionSecs(1.0),
    };
    let second = ContentItemMetadata {
        calculated_playback_position: PositionSecs(2.0),
    };
    let mut item = ContentItem::default();
    assert_eq!(None, item.replace_metadata(first));
    assert_eq!(Some(first), item.replace_metadata(second));
    assert_eq!(Some(second), item.metadata);
    assert_eq!(Some(second), item.replace_metadata(None));
    assert_eq!(None, item.metadata);
}

#[test]
fn try_from_absent_snapshot_fails() {
    assert!(ContentItem::try_from(None).is_err());
}

#[test]
fn try_from_present_snapshot_succeeds() {
    let info = NowPlayingInfo::new();
    let item = ContentItem::try_from(Some(&info)).expect("constructed");
    assert_eq!(Some(ContentItemMetadata::default()), item.metadata);
}

#[test]
fn items_do_not_share_metadata() {
    let mut info = NowPlayingInfo::new();
    info.insert(crate::nowplaying::key::ELAPSED_TIME, 10.0);
    let mut first = ContentItem::new_from_now_playing_info(&info);
    let second = ContentItem::new_from_now_playing_info(&info);
    // Mutating one item must not affect the other.
    first
        .metadata
        .as_mut()
        .expect("eager metadata")
        .calculated_playback_position = PositionSecs(99.0);
    assert_eq!(
        PositionSecs(10.0),
        second
            .metadata
            .expect("eager metadata")
            .calculated_playback_position
    );
}
