#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use schedboard::libs::item::{ItemKind, ScheduleItem};
    use schedboard::libs::selector::{
        active_occupancy, badge, derive_view, minutes_left, next_visit, reservations, timeline, BadgeState, Urgency,
    };
    use schedboard::libs::session::SnapshotSession;
    use schedboard::libs::snapshot::RawPayload;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 3, 0, 0).unwrap()
    }

    fn mins(m: i64) -> Duration {
        Duration::minutes(m)
    }

    fn occupancy(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleItem {
        ScheduleItem {
            id: id.to_string(),
            title: id.to_string(),
            start,
            end,
            item_type: "lane".to_string(),
            product: None,
            games: None,
            kind: ItemKind::Occupancy { people: None, channel: None },
        }
    }

    fn reservation(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleItem {
        ScheduleItem {
            kind: ItemKind::Reservation {
                people: 2,
                channel: "Naver".to_string(),
            },
            ..occupancy(id, start, end)
        }
    }

    fn ids(items: &[&ScheduleItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_active_uses_half_open_window() {
        let t = now();
        let items = vec![
            occupancy("starts-now", t, t + mins(30)),
            occupancy("ends-now", t - mins(30), t),
            occupancy("future", t + mins(1), t + mins(20)),
            occupancy("past", t - mins(60), t - mins(30)),
        ];

        let active = active_occupancy(&items, t);
        assert_eq!(ids(&active.items), vec!["starts-now"]);
    }

    #[test]
    fn test_active_excludes_reservations() {
        let t = now();
        let items = vec![
            reservation("booked", t - mins(10), t + mins(10)),
            occupancy("walk-in", t - mins(10), t + mins(20)),
        ];

        let active = active_occupancy(&items, t);
        assert_eq!(ids(&active.items), vec!["walk-in"]);
    }

    #[test]
    fn test_active_sorted_by_end_with_earliest_end() {
        let t = now();
        let items = vec![
            occupancy("c", t - mins(5), t + mins(40)),
            occupancy("a", t - mins(50), t + mins(5)),
            occupancy("b", t - mins(1), t + mins(15)),
        ];

        let active = active_occupancy(&items, t);
        assert_eq!(ids(&active.items), vec!["a", "b", "c"]);
        assert_eq!(active.earliest_end, Some(t + mins(5)));
        assert!(active.items.windows(2).all(|pair| pair[0].end <= pair[1].end));
    }

    #[test]
    fn test_active_empty_has_no_earliest_end() {
        let active = active_occupancy(&[], now());
        assert!(active.items.is_empty());
        assert_eq!(active.earliest_end, None);
    }

    #[test]
    fn test_next_visit_none_for_empty() {
        assert!(next_visit(&[], now()).is_none());
    }

    #[test]
    fn test_next_visit_prefers_earliest_upcoming() {
        let t = now();
        let items = vec![
            reservation("late", t + mins(20), t + mins(80)),
            reservation("ongoing", t - mins(10), t + mins(50)),
            reservation("soon", t + mins(5), t + mins(65)),
        ];
        let refs: Vec<&ScheduleItem> = items.iter().collect();

        assert_eq!(next_visit(&refs, t).map(|item| item.id.as_str()), Some("soon"));
    }

    #[test]
    fn test_next_visit_falls_back_to_ongoing() {
        let t = now();
        let items = vec![
            reservation("done", t - mins(90), t - mins(30)),
            reservation("ongoing", t - mins(20), t + mins(40)),
            reservation("starts-now", t, t + mins(60)),
        ];
        let refs: Vec<&ScheduleItem> = items.iter().collect();

        // Nothing starts strictly after now, so the earliest still-running one wins.
        assert_eq!(next_visit(&refs, t).map(|item| item.id.as_str()), Some("ongoing"));
    }

    #[test]
    fn test_next_visit_none_when_all_ended() {
        let t = now();
        let items = vec![reservation("done", t - mins(90), t - mins(30)), reservation("just-ended", t - mins(60), t)];
        let refs: Vec<&ScheduleItem> = items.iter().collect();

        assert!(next_visit(&refs, t).is_none());
    }

    #[test]
    fn test_minutes_left_rounds_up() {
        let t = now();
        assert_eq!(minutes_left(t + Duration::milliseconds(61_000), t), 2);
        assert_eq!(minutes_left(t + Duration::milliseconds(60_000), t), 1);
        assert_eq!(minutes_left(t + Duration::milliseconds(1), t), 1);
        assert_eq!(minutes_left(t, t), 0);
        assert_eq!(minutes_left(t - Duration::milliseconds(61_000), t), -1);
    }

    #[test]
    fn test_badge_states() {
        let t = now();

        let ended = badge(&occupancy("x", t - mins(30), t), t);
        assert_eq!(ended.state, BadgeState::Ended);
        assert_eq!(ended.urgency(), Urgency::None);
        assert_eq!(ended.label().to_string(), "ended");

        let upcoming = badge(&occupancy("x", t + Duration::milliseconds(1), t + mins(30)), t);
        assert_eq!(upcoming.state, BadgeState::Upcoming);
        assert_eq!(upcoming.urgency(), Urgency::Warn);
        assert_eq!(upcoming.label().to_string(), "upcoming");

        let running = badge(&occupancy("x", t, t + Duration::milliseconds(90_500)), t);
        assert_eq!(running.state, BadgeState::InProgress { minutes_left: 2 });
        assert_eq!(running.urgency(), Urgency::Good);
        assert_eq!(running.label().to_string(), "2 min left");
    }

    #[test]
    fn test_badge_exactly_one_state_per_instant() {
        let t = now();
        let item = occupancy("x", t, t + mins(10));
        for offset in [-1, 0, 1, 5, 9, 10, 11] {
            let at = t + mins(offset);
            let state = badge(&item, at).state;
            let expected_running = item.start <= at && at < item.end;
            match state {
                BadgeState::Ended => assert!(item.end <= at),
                BadgeState::Upcoming => assert!(item.start > at),
                BadgeState::InProgress { .. } => assert!(expected_running),
            }
        }
    }

    #[test]
    fn test_timeline_hides_past_and_sorts_by_start() {
        let t = now();
        let items = vec![
            reservation("later", t + mins(60), t + mins(120)),
            reservation("past", t - mins(120), t - mins(60)),
            reservation("ongoing", t - mins(10), t + mins(50)),
            occupancy("walk-in", t - mins(10), t + mins(50)),
        ];
        let refs = reservations(&items);
        assert_eq!(refs.len(), 3);

        assert_eq!(ids(&timeline(&refs, t)), vec!["ongoing", "later"]);
    }

    #[test]
    fn test_derive_view_end_to_end() {
        let t = now();
        let payload: RawPayload = serde_json::from_value(json!({
            "tz": "Asia/Seoul",
            "day": "2025-03-01",
            "fetchedAt": t.timestamp_millis(),
            "ttlMs": 30000,
            "items": [
                {
                    "id": "A", "title": "Lane 1", "type": "lane",
                    "startMs": (t - mins(5)).timestamp_millis(),
                    "endMs": (t + mins(10)).timestamp_millis()
                },
                {
                    "id": "B", "title": "Booking", "type": "lane",
                    "people": 2, "channel": "Naver",
                    "startMs": (t + mins(30)).timestamp_millis(),
                    "endMs": (t + mins(60)).timestamp_millis()
                }
            ]
        }))
        .unwrap();

        let mut session = SnapshotSession::new();
        let snapshot = session.ingest(payload, t);
        let view = derive_view(snapshot, t);

        assert_eq!(ids(&view.active.items), vec!["A"]);
        assert_eq!(view.active.earliest_end, Some(t + mins(10)));
        assert_eq!(view.next_visit.map(|item| item.id.as_str()), Some("B"));
        assert_eq!(ids(&view.timeline), vec!["B"]);
    }
}
