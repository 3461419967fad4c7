//! Integration tests for the public factory API.
//!
//! These follow the demonstration programs step by step and check the
//! observable behavior of the weakly tracked factories.

use std::rc::Rc;

use factory_patterns::{
    demo, CoordinateSystem, FactoryError, Point, PointFactory, ReplaceableThemeFactory, Theme,
    ThemeKind, TrackingThemeFactory,
};

#[test]
fn test_point_construction_paths_agree() {
    let p1 = Point::new(2.0, 3.0, CoordinateSystem::Cartesian);
    let p2 = Point::new_cartesian_point(2.0, 3.0);
    let p3 = factory_patterns::point::lazy::new_cartesian_point(2.0, 3.0);
    let p4 = PointFactory::new_cartesian_point(2.0, 3.0);

    assert_eq!(p1, p2);
    assert_eq!(p2, p3);
    assert_eq!(p3, p4);
}

#[test]
fn test_origin_variants() {
    assert_eq!(Point::origin(), *Point::origin2());
    assert!(std::ptr::eq(Point::origin2(), Point::origin2()));
}

#[test]
fn test_polar_factory_method_is_a_known_gap() {
    assert!(matches!(
        Point::new_polar_point(1.0, 0.0),
        Err(FactoryError::Unimplemented { .. })
    ));
}

#[test]
fn test_tracking_report() {
    let mut factory = TrackingThemeFactory::new();
    let theme = factory.create_theme(true);
    let theme2 = factory.create_theme(false);
    assert_eq!(factory.info(), "Dark theme\nLight theme\n");

    drop(theme2);
    assert_eq!(factory.info(), "Dark theme\n");
    assert_eq!(theme.kind(), ThemeKind::Dark);
}

#[test]
fn test_tracking_report_after_all_dropped() {
    let mut factory = TrackingThemeFactory::new();
    for dark in [true, false, true] {
        drop(factory.create_theme(dark));
    }
    assert_eq!(factory.info(), "");
    assert_eq!(factory.prune(), 3);
}

#[test]
fn test_replaceable_slot() {
    let mut factory = ReplaceableThemeFactory::new();
    let magic_theme = factory.create_theme(true);
    assert_eq!(magic_theme.get().background_color(), "dark gray");

    factory.replace_theme(false);
    assert_eq!(magic_theme.get().background_color(), "white");
}

#[test]
fn test_replace_skips_released_slots() {
    let mut factory = ReplaceableThemeFactory::new();
    let a = factory.create_theme(false);
    let b = factory.create_theme(false);
    let weak_b = b.downgrade();
    drop(b);

    assert_eq!(factory.replace_theme(true), 1);
    assert!(weak_b.upgrade().is_none());
    assert_eq!(a.get().kind(), ThemeKind::Dark);
}

#[test]
fn test_theme_handles_are_trait_objects() {
    let mut factory = TrackingThemeFactory::new();
    let themes: Vec<Rc<dyn Theme>> = vec![factory.create_theme(false), factory.create_theme(true)];
    let backgrounds: Vec<&str> = themes.iter().map(|t| t.background_color()).collect();
    assert_eq!(backgrounds, vec!["white", "dark gray"]);
}

#[test]
fn test_themes_demo_output() {
    let mut buf = Vec::new();
    demo::run_themes(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Dark theme\nLight theme\n\ndark gray\nwhite\n"
    );
}
