//! # Known Conversion Fixtures
//!
//! Reference values for the British National Grid: square corners, a
//! published Edinburgh reference, and the failure cases every
//! implementation must reject the same way.

use bng_core::{
    from_osgb36, from_osgb36_batch, to_osgb36, to_osgb36_batch, BngError, Coordinate, ErrorKind,
    RegionTable, DEFAULT_FIGURES, REGION_COUNT,
};

// ---------------------------------------------------------------------------
// Square corners
// ---------------------------------------------------------------------------

const CORNERS: [(&str, (i64, i64)); 4] = [
    ("SV0000", (0, 0)),
    ("TV0000", (500_000, 0)),
    ("NA0000", (0, 900_000)),
    ("HP0000", (400_000, 1_200_000)),
];

#[test]
fn test_corner_squares_format() {
    for (gridref, coord) in CORNERS {
        assert_eq!(from_osgb36(coord, 4).unwrap(), gridref);
    }
}

#[test]
fn test_corner_squares_parse() {
    for (gridref, coord) in CORNERS {
        assert_eq!(to_osgb36(gridref).unwrap().as_tuple(), coord);
    }
}

#[test]
fn test_every_square_round_trips_through_its_corner() {
    for region in RegionTable::global().codes() {
        let offset = region.offset();
        let gridref = from_osgb36((offset.x, offset.y), 4).unwrap();
        assert_eq!(gridref, format!("{region}0000"));
        assert_eq!(
            to_osgb36(&gridref).unwrap(),
            Coordinate::new(offset.x, offset.y)
        );
    }
    assert_eq!(RegionTable::global().codes().count(), REGION_COUNT);
}

// ---------------------------------------------------------------------------
// Known references
// ---------------------------------------------------------------------------

#[test]
fn test_edinburgh_reference() {
    assert_eq!(
        to_osgb36("NT2755072950").unwrap().as_tuple(),
        (327_550, 672_950)
    );
    assert_eq!(
        from_osgb36((327_550, 672_950), DEFAULT_FIGURES).unwrap(),
        "NT275729"
    );
}

#[test]
fn test_floor_not_round() {
    assert_eq!(from_osgb36((529_900, 199_900), 4).unwrap(), "TQ2999");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(to_osgb36("sv0101").unwrap(), to_osgb36("SV0101").unwrap());
}

#[test]
fn test_batch_shape() {
    let coords = to_osgb36_batch(vec!["HU431392", "SJ637560", "TV374354"]).unwrap();
    assert_eq!(coords.len(), 3);
    assert_eq!(
        coords,
        vec![
            Coordinate::new(443_100, 1_139_200),
            Coordinate::new(363_700, 356_000),
            Coordinate::new(537_400, 35_400),
        ]
    );

    let gridrefs = from_osgb36_batch(coords, 6).unwrap();
    assert_eq!(gridrefs, ["HU431392", "SJ637560", "TV374354"]);
}

// ---------------------------------------------------------------------------
// Error scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_error_kinds() {
    let cases: [(Result<(), BngError>, ErrorKind); 4] = [
        (from_osgb36((-1, 0), 6).map(drop), ErrorKind::CoordinateOutOfRegion),
        (
            from_osgb36((123_456, 123_456), 3).map(drop),
            ErrorKind::InvalidPrecision,
        ),
        (to_osgb36("AA1234").map(drop), ErrorKind::InvalidRegionCode),
        (
            to_osgb36("Not a grid reference").map(drop),
            ErrorKind::MalformedGridRef,
        ),
    ];
    for (result, kind) in cases {
        assert_eq!(result.unwrap_err().kind(), kind);
    }
}

#[test]
fn test_format_checked_before_region() {
    for input in ["AA12345", "ZZ123", "AA", "NI123456789012"] {
        assert_eq!(
            to_osgb36(input).unwrap_err().kind(),
            ErrorKind::MalformedGridRef,
            "{input:?}"
        );
    }
    assert_eq!(
        to_osgb36("AA123456").unwrap_err().kind(),
        ErrorKind::InvalidRegionCode
    );
}

#[test]
fn test_error_messages() {
    let err = to_osgb36("ZZ1234").unwrap_err();
    assert!(err.to_string().starts_with("Invalid 100 km grid square"));

    let err = from_osgb36((800_000, 1_300_000), 6).unwrap_err();
    assert!(err.to_string().starts_with("Coordinate location outside"));

    let err = "1,2,3".parse::<Coordinate>().unwrap_err();
    assert!(err.to_string().starts_with("Valid inputs are"));
}
