//! Fabricated chart series for the dashboard demos.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DemandPoint {
    pub month: &'static str,
    pub demand: f64,
    pub supply: f64,
}

/// A named percentage metric shown as a bar and a value tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub name: &'static str,
    pub value: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnomalyPoint {
    pub day: &'static str,
    pub score: f64,
}

const fn dp(month: &'static str, demand: f64, supply: f64) -> DemandPoint {
    DemandPoint { month, demand, supply }
}

pub const DEMAND_SUPPLY: [DemandPoint; 12] = [
    dp("Jan", 102.0, 110.0),
    dp("Feb", 108.0, 112.0),
    dp("Mar", 111.0, 113.0),
    dp("Apr", 118.0, 116.0),
    dp("May", 125.0, 120.0),
    dp("Jun", 131.0, 124.0),
    dp("Jul", 140.0, 128.0),
    dp("Aug", 136.0, 127.0),
    dp("Sep", 129.0, 125.0),
    dp("Oct", 121.0, 122.0),
    dp("Nov", 112.0, 118.0),
    dp("Dec", 106.0, 114.0),
];

pub const KPIS: [Kpi; 4] = [
    Kpi { name: "Data Quality", value: 92 },
    Kpi { name: "Pipeline Uptime", value: 99 },
    Kpi { name: "Dashboard Adoption", value: 78 },
    Kpi { name: "Reporting Speed", value: 85 },
];

pub const ANOMALY: [AnomalyPoint; 7] = [
    AnomalyPoint { day: "Mon", score: 0.12 },
    AnomalyPoint { day: "Tue", score: 0.18 },
    AnomalyPoint { day: "Wed", score: 0.15 },
    AnomalyPoint { day: "Thu", score: 0.22 },
    AnomalyPoint { day: "Fri", score: 0.65 },
    AnomalyPoint { day: "Sat", score: 0.28 },
    AnomalyPoint { day: "Sun", score: 0.19 },
];

impl Kpi {
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}%", self.value)
    }
}
