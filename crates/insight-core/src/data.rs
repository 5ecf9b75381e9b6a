// File: crates/insight-core/src/data.rs
// Summary: Mock datasets and content types the demo charts render by default.

use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::Deserialize;
use skia_safe as skia;

use crate::error::Result;

static CITY_TEMPERATURE_CSV: &str = include_str!("../data/city_temperature.csv");

/// One row of the city temperature mock (°F).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CityTemperature {
    pub date: NaiveDate,
    #[serde(rename = "New York")]
    pub new_york: f64,
    #[serde(rename = "San Francisco")]
    pub san_francisco: f64,
    #[serde(rename = "Austin")]
    pub austin: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum City {
    NewYork,
    SanFrancisco,
    Austin,
}

impl City {
    pub const ALL: [City; 3] = [City::NewYork, City::SanFrancisco, City::Austin];

    pub const fn name(self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::SanFrancisco => "San Francisco",
            City::Austin => "Austin",
        }
    }
}

impl CityTemperature {
    pub fn temperature(&self, city: City) -> f64 {
        match city {
            City::NewYork => self.new_york,
            City::SanFrancisco => self.san_francisco,
            City::Austin => self.austin,
        }
    }
}

/// Parse city temperature rows from CSV with a `date,New York,San Francisco,Austin` header.
pub fn parse_city_temperature(src: &str) -> Result<Vec<CityTemperature>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(src.as_bytes());
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}

/// The embedded 50-day temperature mock, parsed once.
pub fn city_temperature() -> &'static [CityTemperature] {
    static ROWS: OnceLock<Vec<CityTemperature>> = OnceLock::new();
    ROWS.get_or_init(|| match parse_city_temperature(CITY_TEMPERATURE_CSV) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("embedded city temperature data failed to parse: {e}");
            Vec::new()
        }
    })
}

/// Min and max temperature over all cities, if any rows exist.
pub fn temperature_extent(rows: &[CityTemperature]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for row in rows {
        for city in City::ALL {
            let t = row.temperature(city);
            lo = lo.min(t);
            hi = hi.max(t);
        }
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub fill: skia::Color,
}

/// Content a bar chart renders: categories, one series, and band padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BarContent {
    pub data: Vec<BarDatum>,
    pub series: BarSeries,
    pub padding: f32,
}

impl BarContent {
    pub fn max_value(&self) -> f64 {
        self.data.iter().map(|d| d.value).fold(0.0, f64::max)
    }

    /// English letter frequencies (percent), drawn with wider band padding.
    pub fn letter_frequency() -> Self {
        const FREQ: [(char, f64); 26] = [
            ('A', 0.08167), ('B', 0.01492), ('C', 0.02782), ('D', 0.04253), ('E', 0.12702),
            ('F', 0.02288), ('G', 0.02015), ('H', 0.06094), ('I', 0.06966), ('J', 0.00153),
            ('K', 0.00772), ('L', 0.04025), ('M', 0.02406), ('N', 0.06749), ('O', 0.07507),
            ('P', 0.01929), ('Q', 0.00095), ('R', 0.05987), ('S', 0.06327), ('T', 0.09056),
            ('U', 0.02758), ('V', 0.00978), ('W', 0.02360), ('X', 0.00150), ('Y', 0.01974),
            ('Z', 0.00074),
        ];
        Self {
            data: FREQ.iter().map(|&(c, f)| BarDatum { name: c.to_string(), value: f * 100.0 }).collect(),
            series: BarSeries {
                name: "Frequency".into(),
                fill: skia::Color::from_rgb(0xfc, 0x2e, 0x1c),
            },
            padding: 0.4,
        }
    }
}

impl Default for BarContent {
    fn default() -> Self {
        let data = [("A", 183.0), ("B", 145.0), ("C", 94.0), ("D", 134.0), ("E", 123.0)];
        Self {
            data: data.iter().map(|&(n, v)| BarDatum { name: n.into(), value: v }).collect(),
            series: BarSeries {
                name: "A metric".into(),
                fill: skia::Color::from_rgb(245, 222, 179), // wheat
            },
            padding: 0.2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrowserUsage {
    pub label: String,
    pub usage: f64,
}

/// Browser market share (percent), the pie chart's default content.
pub fn browser_usage() -> Vec<BrowserUsage> {
    [
        ("Google Chrome", 48.09),
        ("Internet Explorer", 24.14),
        ("Firefox", 18.82),
        ("Safari", 7.46),
        ("Opera", 1.32),
        ("Mozilla", 0.12),
        ("Microsoft Edge", 0.03),
        ("Other/Unknown", 0.01),
    ]
    .iter()
    .map(|&(label, usage)| BrowserUsage { label: label.into(), usage })
    .collect()
}
