use mapbounds::{
    constants, CenterScaleBounds, Coordinate, DistanceUnit, MapBounds, PixelSize, Projection,
    ZoomLevelSnapStrategy, ZoomLevels,
};

#[test]
fn test_geodetic_envelope_regression_at_equator() {
    // angular projection, center (0, 0), 1:100000, 800x600 px at 96 dpi
    let bounds = CenterScaleBounds::new(Projection::wgs84(), Coordinate::new(0.0, 0.0), 100_000.0);
    let envelope = bounds
        .to_envelope(PixelSize::new(800.0, 600.0), 96.0)
        .unwrap();

    let half_width_m = 100_000.0 * 800.0 / 96.0 / 2.0 * constants::METERS_PER_INCH;
    let half_height_m = 100_000.0 * 600.0 / 96.0 / 2.0 * constants::METERS_PER_INCH;

    // along the equator the east bound is exactly the equatorial arc
    let expected_east = (half_width_m / constants::WGS84_SEMI_MAJOR_AXIS).to_degrees();
    assert!((envelope.max.x - expected_east).abs() < 1e-9);
    assert!((envelope.min.x + expected_east).abs() < 1e-9);

    // the north bound follows the meridional curvature radius b^2 / a
    let meridional_radius =
        constants::WGS84_SEMI_MINOR_AXIS * constants::WGS84_SEMI_MINOR_AXIS
            / constants::WGS84_SEMI_MAJOR_AXIS;
    let expected_north = (half_height_m / meridional_radius).to_degrees();
    assert!((envelope.max.y - expected_north).abs() < 1e-6);
    assert!((envelope.min.y + expected_north).abs() < 1e-6);

    // pinned ballpark: sub-degree extent bracketing the center
    assert!((envelope.max.x - 0.0950714).abs() < 1e-5);
    assert!((envelope.max.y - 0.0717840).abs() < 1e-5);
    assert!(envelope.width() < 1.0 && envelope.height() < 1.0);
    assert!(envelope.contains(&Coordinate::new(0.0, 0.0)));
}

#[test]
fn test_planar_envelope_scenario() {
    // linear projection, center (500000, 4649776), 1:50000, 1000x1000 px at 72 dpi
    let projection = Projection::new("EPSG:32632", DistanceUnit::Meter);
    let bounds = CenterScaleBounds::new(
        projection,
        Coordinate::new(500_000.0, 4_649_776.0),
        50_000.0,
    );
    let envelope = bounds
        .to_envelope(PixelSize::new(1_000.0, 1_000.0), 72.0)
        .unwrap();

    let geo_inches: f64 = 50_000.0 * 1_000.0 / 72.0;
    assert!((geo_inches - 694_444.44).abs() < 0.01);

    let extent_m = geo_inches * constants::METERS_PER_INCH;
    assert!((envelope.width() - extent_m).abs() < 1e-6);
    assert!((envelope.height() - extent_m).abs() < 1e-6);
    let mid = envelope.center();
    assert!((mid.x - 500_000.0).abs() < 1e-9);
    assert!((mid.y - 4_649_776.0).abs() < 1e-9);
}

#[test]
fn test_geodetic_snap_at_equator_keeps_nominal_level() {
    let bounds = CenterScaleBounds::new(Projection::wgs84(), Coordinate::new(0.0, 0.0), 100_000.0);
    let levels = ZoomLevels::new(vec![25_000.0, 50_000.0, 100_000.0, 200_000.0]);
    let snapped = bounds
        .snap_to_nearest_zoom_level(
            &levels,
            0.05,
            ZoomLevelSnapStrategy::ClosestLowestScaleOnTie,
            true,
            PixelSize::new(800.0, 600.0),
            96.0,
        )
        .unwrap();
    // the correction at the equator is tiny, well within tolerance
    assert_eq!(
        snapped.scale_denominator(PixelSize::new(800.0, 600.0), 96.0),
        100_000.0
    );
    assert_eq!(snapped.center(), bounds.center());
}

#[test]
fn test_transformation_chain_preserves_center() {
    let bounds = CenterScaleBounds::new(Projection::wgs84(), Coordinate::new(7.44, 46.95), 25_000.0);
    let transformed = bounds
        .zoom_out(4.0)
        .adjust_to_rotation(90.0)
        .adjusted_envelope(PixelSize::new(600.0, 400.0))
        .zoom_to_scale(10_000.0);
    assert_eq!(transformed.center(), bounds.center());
    assert_eq!(transformed.projection(), bounds.projection());
    assert_eq!(
        transformed.scale_denominator(PixelSize::new(600.0, 400.0), 96.0),
        10_000.0
    );
}

#[test]
fn test_serde_round_trip() {
    let bounds = CenterScaleBounds::new(Projection::wgs84(), Coordinate::new(7.44, 46.95), 25_000.0);
    let json = serde_json::to_string(&bounds).unwrap();
    let back: CenterScaleBounds = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bounds);
}
