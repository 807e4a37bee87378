//! Test utilities for agrinsight-core
//!
//! Small fixture datasets with known join and correlation outcomes:
//! - Punjab/Wheat: 4 joined years, production and rainfall both rising (r = 1)
//! - Punjab/Rice: 2 joined years moving in opposite directions (r = -1)
//! - Kerala/Rice: 3 production years, only 2 have rainfall (2022 is dropped)
//! - Bihar: rainfall only, never joins

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Dataset, ProductionRecord, RainfallRecord};

pub const PRODUCTION_CSV: &str = "State,Crop,Year,Production
Punjab,Wheat,2018,1000
Punjab,Wheat,2019,1200
Punjab,Wheat,2020,1400
Punjab,Wheat,2021,1600
Punjab,Rice,2018,800
Punjab,Rice,2019,700
Kerala,Rice,2018,300
Kerala,Rice,2019,250
Kerala,Rice,2022,200
";

pub const RAINFALL_CSV: &str = "State,Year,Rainfall (mm)
Punjab,2018,500
Punjab,2019,600
Punjab,2020,700
Punjab,2021,800
Kerala,2018,2800
Kerala,2019,3100
Bihar,2018,1000
";

/// Write both fixture files into `dir`, returning (production, rainfall) paths
pub fn write_fixture(dir: &Path) -> (PathBuf, PathBuf) {
    let production = dir.join("crop_production.csv");
    let rainfall = dir.join("rainfall_data.csv");
    fs::write(&production, PRODUCTION_CSV).unwrap();
    fs::write(&rainfall, RAINFALL_CSV).unwrap();
    (production, rainfall)
}

pub fn production(state: &str, crop: &str, year: i32, value: f64) -> ProductionRecord {
    ProductionRecord {
        state: state.to_string(),
        crop: crop.to_string(),
        year,
        production: value,
    }
}

pub fn rainfall(state: &str, year: i32, value: f64) -> RainfallRecord {
    RainfallRecord {
        state: state.to_string(),
        year,
        rainfall_mm: value,
    }
}

/// The fixture dataset, built in memory
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec![
            production("Punjab", "Wheat", 2018, 1000.0),
            production("Punjab", "Wheat", 2019, 1200.0),
            production("Punjab", "Wheat", 2020, 1400.0),
            production("Punjab", "Wheat", 2021, 1600.0),
            production("Punjab", "Rice", 2018, 800.0),
            production("Punjab", "Rice", 2019, 700.0),
            production("Kerala", "Rice", 2018, 300.0),
            production("Kerala", "Rice", 2019, 250.0),
            production("Kerala", "Rice", 2022, 200.0),
        ],
        vec![
            rainfall("Punjab", 2018, 500.0),
            rainfall("Punjab", 2019, 600.0),
            rainfall("Punjab", 2020, 700.0),
            rainfall("Punjab", 2021, 800.0),
            rainfall("Kerala", 2018, 2800.0),
            rainfall("Kerala", 2019, 3100.0),
            rainfall("Bihar", 2018, 1000.0),
        ],
    )
}
