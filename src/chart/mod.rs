//! The chart calculation engine: a pure, deterministic pipeline from a
//! normalized lunar birth date and hour to the full palace/star layout.
//!
//! Every palace, branch, and hour index is a cyclic 1-12 number; the whole
//! module leans on [`branch_number`] so nothing ever produces an index 0.

pub mod stars;

use serde::Serialize;
use thiserror::Error;

use crate::calendar::{self, CalendarError, LunarDate};
use stars::{MAIN_STARS, PALACES, branch_name};

/// Epoch anchor for the stem/branch cycles: 1984 opens a sexagenary cycle
/// (갑자년), so both cycles count from 1 there.
const STEM_BRANCH_BASE_YEAR: i32 = 1984;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// The destiny number is derived as a 1-5 value; anything else here is a
    /// defect in the derivation, not bad user input.
    #[error("destiny number {0} is outside the range 1-5")]
    DestinyNumberOutOfRange(i32),
}

/// Reduces any integer to a branch number in 1-12. Floored modulus keeps the
/// result positive for negative input.
pub fn branch_number(value: i32) -> i32 {
    (value - 1).rem_euclid(12) + 1
}

/// Self-palace index from the month and day branches.
pub fn calculate_ming_gong(lunar_month_branch: i32, lunar_day_branch: i32) -> i32 {
    let ming_gong = (lunar_month_branch + lunar_day_branch) % 12;
    if ming_gong != 0 { ming_gong } else { 12 }
}

/// Heavenly-stem (1-10) and earthly-branch (1-12) numbers of a year.
pub fn stem_branch_numbers(year: i32) -> (i32, i32) {
    let offset = year - STEM_BRANCH_BASE_YEAR;
    let stem_num = offset.rem_euclid(10) + 1;
    let branch_num = offset.rem_euclid(12) + 1;
    (stem_num, branch_num)
}

/// Destiny number (국수), 1-5.
pub fn calculate_guo_shu(stem_num: i32, branch_num: i32) -> i32 {
    let result = (stem_num + branch_num) % 5;
    if result != 0 { result } else { 5 }
}

/// Anchor-star palace index and the remainder offset (보수) that produced it.
///
/// Scans for the smallest `bosu >= 0` making `day + bosu` divisible by the
/// destiny number; at most `guo_shu` steps.
pub fn find_jami_position(day: i32, guo_shu: i32) -> Result<(i32, i32), ChartError> {
    if guo_shu < 1 {
        return Err(ChartError::DestinyNumberOutOfRange(guo_shu));
    }
    let mut bosu = 0;
    while (day + bosu) % guo_shu != 0 {
        bosu += 1;
    }
    let jami_raw = (day + bosu) / guo_shu;
    Ok((branch_number(jami_raw), bosu))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JamiDirection {
    Forward,
    Reverse,
}

impl JamiDirection {
    pub fn korean(self) -> &'static str {
        match self {
            JamiDirection::Forward => "순행",
            JamiDirection::Reverse => "역행",
        }
    }
}

/// Even 보수 runs the ring forward, odd runs it in reverse.
pub fn jami_direction(bosu: i32) -> JamiDirection {
    if bosu % 2 == 0 {
        JamiDirection::Forward
    } else {
        JamiDirection::Reverse
    }
}

/// Hour branch (시지) from a 0-23 clock hour. The 자시 period spans
/// 23:00-01:00, so hour 23 wraps back to branch 1.
pub fn hour_branch(hour: i32) -> i32 {
    if hour == 23 { 1 } else { (hour + 1) / 2 + 1 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarPlacement {
    pub star: &'static str,
    pub palace_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceStars {
    pub index: i32,
    pub name: &'static str,
    pub stars: Vec<&'static str>,
}

/// Places all 14 stars from the anchor position: the palace grouping and the
/// flat placement list, both in fixed declaration order.
fn build_star_layout(jami_position: i32) -> (Vec<PalaceStars>, Vec<StarPlacement>) {
    let mut palace_stars: Vec<Vec<&'static str>> = vec![Vec::new(); 12];
    let mut stars_data = Vec::with_capacity(MAIN_STARS.len());
    for star in &MAIN_STARS {
        let palace_index = branch_number(jami_position + star.offset);
        palace_stars[(palace_index - 1) as usize].push(star.name);
        stars_data.push(StarPlacement {
            star: star.name,
            palace_index,
        });
    }

    let palace_layout = PALACES
        .iter()
        .enumerate()
        .map(|(i, palace)| PalaceStars {
            index: i as i32 + 1,
            name: palace.name,
            stars: std::mem::take(&mut palace_stars[i]),
        })
        .collect();

    (palace_layout, stars_data)
}

/// One-paragraph Korean reading of the chart.
pub fn build_summary(
    ming_gong: i32,
    guo_shu: i32,
    jami_position: i32,
    direction: JamiDirection,
    hour_branch_name: &str,
    palace_layout: &[PalaceStars],
) -> String {
    let ming_palace = &palace_layout[(ming_gong - 1) as usize];
    let stars_text = if ming_palace.stars.is_empty() {
        String::from("없음")
    } else {
        ming_palace.stars.join(", ")
    };
    format!(
        "명궁은 {}이며 주성은 {}이다. 국수는 {}국, 자미성은 {}궁({})에 위치한다. 시지는 {}시로 계산된다.",
        ming_palace.name,
        stars_text,
        guo_shu,
        jami_position,
        direction.korean(),
        hour_branch_name,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub ming_gong: i32,
    pub guo_shu: i32,
    pub jami_position: i32,
    pub jami_direction: JamiDirection,
    pub hour_branch: i32,
    pub hour_branch_name: &'static str,
    pub palace_layout: Vec<PalaceStars>,
    pub stars_data: Vec<StarPlacement>,
    pub stars_meta: Vec<stars::StarMetadata>,
    pub palace_meta: Vec<stars::PalaceMetadata>,
    pub summary: String,
    pub lunar_date: LunarDate,
    /// Set once the chart has been persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_id: Option<i32>,
}

/// Runs the whole pipeline for a birth date/time. Solar input is normalized
/// to lunar first; lunar input is trusted as-is.
pub fn analyze(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    is_lunar: bool,
    is_intercalation: bool,
) -> Result<ChartResult, ChartError> {
    let lunar_date = calendar::normalize(year, month, day, is_lunar, is_intercalation)?;

    let month_branch = branch_number(lunar_date.month);
    let day_branch = branch_number(lunar_date.day);
    let ming_gong = calculate_ming_gong(month_branch, day_branch);

    let (stem_num, branch_num) = stem_branch_numbers(lunar_date.year);
    let guo_shu = calculate_guo_shu(stem_num, branch_num);

    let (jami_position, bosu) = find_jami_position(lunar_date.day, guo_shu)?;
    let direction = jami_direction(bosu);
    let (palace_layout, stars_data) = build_star_layout(jami_position);
    let hour_branch = hour_branch(hour);
    let hour_branch_name = branch_name(hour_branch);
    let summary = build_summary(
        ming_gong,
        guo_shu,
        jami_position,
        direction,
        hour_branch_name,
        &palace_layout,
    );

    Ok(ChartResult {
        ming_gong,
        guo_shu,
        jami_position,
        jami_direction: direction,
        hour_branch,
        hour_branch_name,
        palace_layout,
        stars_data,
        stars_meta: stars::list_star_metadata(),
        palace_meta: stars::list_palace_metadata(),
        summary,
        lunar_date,
        chart_id: None,
    })
}
