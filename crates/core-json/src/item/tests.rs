// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn deserialize_item() {
    let json = serde_json::json!({
        "metadata": {
            "calculatedPlaybackPosition": 137.5,
        },
    })
    .to_string();
    let item: _core::ContentItem = serde_json::from_str::<ContentItem>(&json).unwrap().into();
    assert_eq!(
        _core::ContentItem {
            metadata: Some(_core::ContentItemMetadata {
                calculated_playback_position: PositionSecs(137.5),
            }),
        },
        item
    );
}

#[test]
fn deserialize_item_without_metadata() {
    let item: _core::ContentItem = serde_json::from_str::<ContentItem>("{}").unwrap().into();
    assert_eq!(_core::ContentItem { metadata: None }, item);
}

#[test]
fn deserialize_metadata_without_position_defaults_to_zero() {
    let metadata: _core::ContentItemMetadata = serde_json::from_str::<ContentItemMetadata>("{}")
        .unwrap()
        .into();
    assert_eq!(PositionSecs(0.0), metadata.calculated_playback_position);
}

#[test]
fn deserialize_metadata_rejects_unknown_fields() {
    let json = serde_json::json!({
        "calculatedPlaybackPosition": 1.0,
        "unknown": true,
    })
    .to_string();
    assert!(serde_json::from_str::<ContentItemMetadata>(&json).is_err());
}

#[test]
fn serialize_item_skips_absent_metadata() {
    let json = serde_json::to_string(&ContentItem::from(_core::ContentItem::default())).unwrap();
    assert_eq!("{}", json);
}

#[test]
fn roundtrip_item() {
    let item = _core::ContentItem {
        metadata: Some(_core::ContentItemMetadata {
            calculated_playback_position: PositionSecs(-3.25),
        }),
    };
    let json = serde_json::to_string(&ContentItem::from(item.clone())).unwrap();
    let decoded: _core::ContentItem = serde_json::from_str::<ContentItem>(&json).unwrap().into();
    assert_eq!(item, decoded);
}
