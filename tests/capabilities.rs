use babel_format::{BabelFormat, Capabilities, ConventionFormat, Direction, FeatureType};

#[test]
fn single_flag_adds_import() {
    let f = ConventionFormat::new("shapefile", Capabilities::WAYPOINTS);
    assert_eq!(f.capabilities(), Capabilities::WAYPOINTS | Capabilities::IMPORT);
}

#[test]
fn flag_set_adds_import() {
    let f = ConventionFormat::new("shapefile", Capabilities::WAYPOINTS | Capabilities::TRACKS);
    assert_eq!(
        f.capabilities(),
        Capabilities::WAYPOINTS | Capabilities::TRACKS | Capabilities::IMPORT
    );
}

#[test]
fn import_already_present() {
    let caps = Capabilities::ROUTES | Capabilities::IMPORT;
    let f = ConventionFormat::new("gdb", caps);
    assert_eq!(f.capabilities(), caps);
}

#[test]
fn feature_type_converts() {
    let f = ConventionFormat::new("gdb", FeatureType::Route);
    assert_eq!(f.capabilities(), Capabilities::ROUTES | Capabilities::IMPORT);
}

#[test]
fn export_never_added() {
    let f = ConventionFormat::new("kml", Capabilities::TRACKS);
    assert!(!f.capabilities().contains(Capabilities::EXPORT));
    assert!(f.capabilities().supports(Direction::Import, FeatureType::Track));
    assert!(!f.capabilities().supports(Direction::Export, FeatureType::Track));
    assert!(!f.capabilities().supports(Direction::Import, FeatureType::Route));
}

#[test]
fn set_semantics() {
    let a = Capabilities::TRACKS | Capabilities::WAYPOINTS | Capabilities::EXPORT;
    let b = Capabilities::EXPORT | Capabilities::WAYPOINTS | Capabilities::TRACKS;
    assert_eq!(a, b);
    assert_eq!(a | Capabilities::TRACKS, a);
    assert_eq!(a & Capabilities::WAYPOINTS, Capabilities::WAYPOINTS);

    let mut c = Capabilities::default();
    assert!(c.is_empty());
    c |= Capabilities::ROUTES;
    c.insert(Capabilities::ROUTES);
    assert_eq!(c, Capabilities::ROUTES);
    assert_eq!(c.iter().collect::<Vec<_>>(), vec![Capabilities::ROUTES]);
}

#[test]
fn direction_without_feature_type_is_legal() {
    let caps = Capabilities::EXPORT;
    assert!(caps.contains(Capabilities::EXPORT));
    for &feature in FeatureType::ALL.iter() {
        assert!(!caps.supports(Direction::Export, feature));
    }
}
