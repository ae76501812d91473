#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use schedboard::libs::item::{is_reservation, ItemKind, RawItem, ScheduleItem};
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawItem {
        serde_json::from_value(value).unwrap()
    }

    fn base() -> serde_json::Value {
        json!({
            "id": 1,
            "title": "Lane 1",
            "startMs": 1_740_798_000_000_i64,
            "endMs": 1_740_801_600_000_i64,
            "type": "lane",
        })
    }

    fn with(mut value: serde_json::Value, key: &str, field: serde_json::Value) -> serde_json::Value {
        value[key] = field;
        value
    }

    #[test]
    fn test_people_and_channel_is_reservation() {
        let item = raw(with(with(base(), "people", json!(2)), "channel", json!("Naver")));
        assert!(is_reservation(&item));
    }

    #[test]
    fn test_missing_people_is_occupancy() {
        let item = raw(with(base(), "channel", json!("Naver")));
        assert!(!is_reservation(&item));

        let item = raw(with(with(base(), "people", json!(null)), "channel", json!("Naver")));
        assert!(!is_reservation(&item));
    }

    #[test]
    fn test_missing_or_empty_channel_is_occupancy() {
        let item = raw(with(base(), "people", json!(3)));
        assert!(!is_reservation(&item));

        let item = raw(with(with(base(), "people", json!(3)), "channel", json!("")));
        assert!(!is_reservation(&item));

        let item = raw(with(with(base(), "people", json!(3)), "channel", json!(null)));
        assert!(!is_reservation(&item));
    }

    #[test]
    fn test_zero_people_still_counts_as_present() {
        let item = raw(with(with(base(), "people", json!(0)), "channel", json!("Call")));
        assert!(is_reservation(&item));
    }

    #[test]
    fn test_from_raw_tags_reservation() {
        let item = ScheduleItem::from_raw(raw(with(with(base(), "people", json!(4)), "channel", json!("Call")))).unwrap();
        assert_eq!(
            item.kind,
            ItemKind::Reservation {
                people: 4,
                channel: "Call".to_string()
            }
        );
        assert!(item.is_reservation());
        assert_eq!(item.people(), Some(4));
        assert_eq!(item.channel(), Some("Call"));
    }

    #[test]
    fn test_from_raw_keeps_occupancy_fields() {
        let item = ScheduleItem::from_raw(raw(with(with(base(), "people", json!(2)), "channel", json!("")))).unwrap();
        assert!(!item.is_reservation());
        assert_eq!(item.people(), Some(2));
        assert_eq!(item.channel(), None);
    }

    #[test]
    fn test_from_raw_converts_fields() {
        let value = json!({
            "id": "abc",
            "title": "Lane 2",
            "startMs": 1_740_798_000_000_i64,
            "endMs": 1_740_801_600_000_i64,
            "type": "lane",
            "product": "bowling",
            "games": 3,
        });
        let item = ScheduleItem::from_raw(raw(value)).unwrap();
        assert_eq!(item.id, "abc");
        assert_eq!(item.title, "Lane 2");
        assert_eq!(item.item_type, "lane");
        assert_eq!(item.product.as_deref(), Some("bowling"));
        assert_eq!(item.games, Some(3));
        assert_eq!(item.start, Utc.timestamp_millis_opt(1_740_798_000_000).unwrap());
        assert_eq!(item.end, Utc.timestamp_millis_opt(1_740_801_600_000).unwrap());
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let item = ScheduleItem::from_raw(raw(base())).unwrap();
        assert_eq!(item.id, "1");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let item = ScheduleItem::from_raw(raw(json!({"startMs": 0, "endMs": 1000}))).unwrap();
        assert_eq!(item.id, "");
        assert_eq!(item.title, "");
        assert_eq!(item.item_type, "");
        assert_eq!(item.product, None);
        assert!(!item.is_reservation());
    }

    #[test]
    fn test_empty_product_is_dropped() {
        let item = ScheduleItem::from_raw(raw(with(base(), "product", json!("")))).unwrap();
        assert_eq!(item.product, None);
    }

    #[test]
    fn test_inverted_or_empty_window_is_rejected() {
        let item = raw(json!({"startMs": 2000, "endMs": 1000}));
        assert!(ScheduleItem::from_raw(item).is_none());

        let item = raw(json!({"startMs": 1000, "endMs": 1000}));
        assert!(ScheduleItem::from_raw(item).is_none());
    }
}
