use serde::{Deserialize, Serialize};

use crate::chart::stars::{PalaceMetadata, StarMetadata};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BirthInfo {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub is_lunar: bool,
    #[serde(default)]
    pub is_intercalation: bool,
    pub gender: String,
}

impl BirthInfo {
    /// Structural validation only; calendar-range checks happen in the
    /// conversion itself.
    pub fn validate(&self) -> Result<(), String> {
        if self.year < 1 {
            return Err(String::from("year must be at least 1"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(String::from("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(String::from("day must be between 1 and 31"));
        }
        if !(0..=23).contains(&self.hour) {
            return Err(String::from("hour must be between 0 and 23"));
        }
        if self.gender.is_empty() || self.gender.chars().count() > 10 {
            return Err(String::from("gender must be between 1 and 10 characters"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ListChartsParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub ming_gong: i32,
    pub guo_shu: i32,
    pub jami_position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub stars: Vec<StarMetadata>,
    pub palaces: Vec<PalaceMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_birth_info() -> BirthInfo {
        BirthInfo {
            year: 1990,
            month: 6,
            day: 24,
            hour: 12,
            is_lunar: false,
            is_intercalation: false,
            gender: String::from("M"),
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(valid_birth_info().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let mut info = valid_birth_info();
        info.year = 0;
        assert!(info.validate().is_err());

        let mut info = valid_birth_info();
        info.month = 13;
        assert!(info.validate().is_err());

        let mut info = valid_birth_info();
        info.day = 32;
        assert!(info.validate().is_err());

        let mut info = valid_birth_info();
        info.hour = 24;
        assert!(info.validate().is_err());
    }

    #[test]
    fn rejects_bad_gender_strings() {
        let mut info = valid_birth_info();
        info.gender = String::new();
        assert!(info.validate().is_err());

        info.gender = "여".repeat(11);
        assert!(info.validate().is_err());

        info.gender = String::from("여성");
        assert!(info.validate().is_ok());
    }

    #[test]
    fn intercalation_defaults_to_false() {
        let info: BirthInfo = serde_json::from_str(
            r#"{"year":1984,"month":1,"day":1,"hour":0,"is_lunar":true,"gender":"M"}"#,
        )
        .unwrap();
        assert!(!info.is_intercalation);
    }
}
