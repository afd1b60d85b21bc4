use fleet_sheets::{
    captain_label, clamp_captains, column_label, Layout, SizeVariant, UnknownVariant,
    MAX_CAPTAINS, MIN_CAPTAINS,
};

#[test]
fn test_preset_dimensions() {
    assert_eq!(SizeVariant::Small.dimensions(), (6, 7));
    assert_eq!(SizeVariant::Medium.dimensions(), (8, 9));
    assert_eq!(SizeVariant::Large.dimensions(), (10, 11));
    assert_eq!(SizeVariant::default(), SizeVariant::Large);
}

#[test]
fn test_preset_fleets() {
    let small = SizeVariant::Small.layout();
    assert_eq!(small.total_ships(), 4);
    assert_eq!(small.total_cells(), 10);

    let medium = SizeVariant::Medium.layout();
    assert_eq!(medium.total_ships(), 5);
    assert_eq!(medium.total_cells(), 14);

    let large = SizeVariant::Large.layout();
    assert_eq!(large.total_ships(), 6);
    assert_eq!(large.total_cells(), 19);
    assert_eq!(large.ship_class("galeao").map(|s| s.length()), Some(5));
    assert!(large.ship_class("kraken").is_none());

    for size in SizeVariant::ALL {
        let layout = size.layout();
        assert!(layout.validate().is_ok());
        let lengths: Vec<_> = layout.ships.iter().map(|s| s.length()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted, "{:?} fleet is not largest-first", size);
    }
}

#[test]
fn test_variant_parsing() {
    assert_eq!("small".parse::<SizeVariant>(), Ok(SizeVariant::Small));
    assert_eq!("MEDIUM".parse::<SizeVariant>(), Ok(SizeVariant::Medium));
    assert_eq!(" Large ".parse::<SizeVariant>(), Ok(SizeVariant::Large));
    assert_eq!(
        "huge".parse::<SizeVariant>(),
        Err(UnknownVariant("huge".to_string()))
    );
}

#[test]
fn test_captain_helpers() {
    assert_eq!(clamp_captains(0), MIN_CAPTAINS);
    assert_eq!(clamp_captains(7), 7);
    assert_eq!(clamp_captains(100), MAX_CAPTAINS);
    assert_eq!(captain_label(0), "CAPTAIN #1");
    assert_eq!(captain_label(24), "CAPTAIN #25");
    assert_eq!(column_label(0), "A");
    assert_eq!(column_label(10), "K");
}

#[test]
fn test_column_labels_past_z_stay_distinct() {
    assert_eq!(column_label(25), "Z");
    assert_eq!(column_label(26), "AA");
    assert_eq!(column_label(27), "AB");
    assert_eq!(column_label(51), "AZ");
    assert_eq!(column_label(52), "BA");
    assert_eq!(column_label(701), "ZZ");
    assert_eq!(column_label(702), "AAA");

    let labels: std::collections::HashSet<_> = (0..128).map(column_label).collect();
    assert_eq!(labels.len(), 128);
}

#[test]
fn test_layout_from_json() {
    let json = r#"{
        "rows": 6,
        "cols": 7,
        "ships": [
            { "id": "sloop", "name": "Sloop", "size": 3, "count": 2 },
            { "id": "raft", "name": "Raft", "size": 1, "count": 3 }
        ]
    }"#;
    let layout: Layout = serde_json::from_str(json).unwrap();
    assert_eq!((layout.rows, layout.cols), (6, 7));
    assert_eq!(layout.total_ships(), 5);
    assert_eq!(layout.total_cells(), 9);
    assert_eq!(layout.ships[1].name(), "Raft");
    assert!(layout.validate().is_ok());
}
