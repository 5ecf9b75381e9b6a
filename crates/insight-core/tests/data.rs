// File: crates/insight-core/tests/data.rs
// Purpose: Embedded mock datasets parse and have the expected shape.

use insight_core::data::{city_temperature, parse_city_temperature, temperature_extent, City};
use insight_core::scale::{pad, LinearScale};

#[test]
fn city_temperature_has_fifty_ordered_days() {
    let rows = city_temperature();
    assert_eq!(rows.len(), 50);
    assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(rows[0].date.to_string(), "2012-05-13");
}

#[test]
fn extent_covers_every_city() {
    let rows = city_temperature();
    let (lo, hi) = temperature_extent(rows).expect("extent");
    for r in rows {
        for c in City::ALL {
            let t = r.temperature(c);
            assert!(t >= lo && t <= hi);
        }
    }
    let (plo, phi) = pad((lo, hi), 0.5);
    assert!(plo < lo && phi > hi);
    let y = LinearScale::new((plo, phi), (300.0, 0.0)).nice(4);
    assert!(y.domain().0 <= plo && y.domain().1 >= phi);
}

#[test]
fn malformed_csv_is_an_error() {
    let src = "date,New York,San Francisco,Austin\n2012-05-13,not-a-number,1,2\n";
    assert!(parse_city_temperature(src).is_err());
    assert!(parse_city_temperature("date,New York,San Francisco,Austin\n").expect("header only").is_empty());
}
