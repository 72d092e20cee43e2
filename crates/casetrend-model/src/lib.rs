pub mod config;
pub mod record;

pub use config::{ChartConfig, ChartStyle, ConfigError, FigureSize, parse_hex_color};
pub use record::{AggregatedRecord, CaseRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn aggregated_record_derives_from_case_record() {
        let record = CaseRecord {
            date: NaiveDate::from_ymd_opt(2020, 1, 22).expect("valid date"),
            country: "US".to_string(),
            confirmed: Some(2),
            recovered: Some(1),
            deaths: None,
        };
        let aggregated = AggregatedRecord::from(record);
        assert_eq!(aggregated.country, "US");
        assert_eq!(aggregated.total_cases, 3);
    }
}
