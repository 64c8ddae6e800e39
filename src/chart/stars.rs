//! Static reference data: the 12 palaces, the 14 main stars, and the 12
//! earthly-branch names, with their interpretation metadata. Compiled-in
//! constants; nothing here changes per chart.

use serde::Serialize;

/// The 12 earthly branches, in cycle order (1 = 자).
pub const BRANCH_NAMES: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarQuality {
    Auspicious,
    Neutral,
}

pub struct StarDef {
    pub name: &'static str,
    /// Palace offset from the anchor star 자미.
    pub offset: i32,
    pub meaning: &'static str,
    pub keywords: &'static [&'static str],
    pub quality: StarQuality,
}

pub struct PalaceDef {
    pub name: &'static str,
    pub theme: &'static str,
    pub keywords: &'static [&'static str],
}

/// The 12 palaces in ring order. Palace 1 is the Self palace (명궁).
pub const PALACES: [PalaceDef; 12] = [
    PalaceDef {
        name: "명궁",
        theme: "타고난 성격과 인생 전체의 큰 흐름",
        keywords: &["성격", "운명", "자아"],
    },
    PalaceDef {
        name: "형제궁",
        theme: "형제자매와 가까운 동료와의 인연",
        keywords: &["형제", "우애", "동료"],
    },
    PalaceDef {
        name: "부부궁",
        theme: "배우자와 혼인 생활의 모습",
        keywords: &["배우자", "결혼", "애정"],
    },
    PalaceDef {
        name: "자녀궁",
        theme: "자녀 및 아랫사람과의 인연",
        keywords: &["자녀", "후손", "양육"],
    },
    PalaceDef {
        name: "재백궁",
        theme: "재물운과 금전을 다루는 방식",
        keywords: &["재물", "수입", "관리"],
    },
    PalaceDef {
        name: "질액궁",
        theme: "건강 상태와 질병의 경향",
        keywords: &["건강", "질병", "체질"],
    },
    PalaceDef {
        name: "천이궁",
        theme: "이동, 여행, 바깥 활동에서의 운",
        keywords: &["이동", "여행", "대외 활동"],
    },
    PalaceDef {
        name: "노복궁",
        theme: "친구와 아랫사람이 주는 조력",
        keywords: &["친구", "부하", "조력"],
    },
    PalaceDef {
        name: "관록궁",
        theme: "직업과 사회적 성취",
        keywords: &["직업", "관운", "성취"],
    },
    PalaceDef {
        name: "전택궁",
        theme: "부동산과 주거 환경",
        keywords: &["부동산", "주거", "가업"],
    },
    PalaceDef {
        name: "복덕궁",
        theme: "정신적 만족과 타고난 복록",
        keywords: &["복록", "취미", "정신"],
    },
    PalaceDef {
        name: "부모궁",
        theme: "부모 및 윗사람과의 인연",
        keywords: &["부모", "윗사람", "은덕"],
    },
];

/// The 14 main stars in declaration order. Offsets are fixed; only the
/// anchor placement rotates the whole set.
pub const MAIN_STARS: [StarDef; 14] = [
    StarDef {
        name: "자미",
        offset: 0,
        meaning: "뭇별을 거느리는 제왕의 별로, 존귀함과 통솔력을 상징한다.",
        keywords: &["리더십", "존귀", "권위"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "천기",
        offset: 1,
        meaning: "지모와 임기응변의 별로, 책략과 두뇌 회전을 상징한다.",
        keywords: &["지혜", "책략", "변화"],
        quality: StarQuality::Neutral,
    },
    StarDef {
        name: "태양",
        offset: 2,
        meaning: "만물을 비추는 광명의 별로, 명예와 박애를 상징한다.",
        keywords: &["명예", "박애", "발산"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "무곡",
        offset: 3,
        meaning: "재물과 무용의 별로, 결단력과 실행력을 상징한다.",
        keywords: &["재물", "결단", "실행"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "천동",
        offset: 4,
        meaning: "복과 수명의 별로, 온화함과 향유를 상징한다.",
        keywords: &["복덕", "온화", "향유"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "염정",
        offset: 5,
        meaning: "차선의 별로, 권모와 욕망 사이의 긴장을 상징한다.",
        keywords: &["권모", "욕망", "절제"],
        quality: StarQuality::Neutral,
    },
    StarDef {
        name: "천부",
        offset: 6,
        meaning: "곳간을 지키는 재고의 별로, 보수와 안정을 상징한다.",
        keywords: &["안정", "보수", "축적"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "태음",
        offset: 7,
        meaning: "달빛의 별로, 섬세함과 내면의 풍요를 상징한다.",
        keywords: &["섬세", "내면", "전택"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "탐랑",
        offset: 8,
        meaning: "욕망과 교제의 별로, 다재다능함과 사교성을 상징한다.",
        keywords: &["욕망", "사교", "다재"],
        quality: StarQuality::Neutral,
    },
    StarDef {
        name: "거문",
        offset: 9,
        meaning: "시비와 언변의 별로, 탐구심과 구설을 함께 상징한다.",
        keywords: &["언변", "탐구", "구설"],
        quality: StarQuality::Neutral,
    },
    StarDef {
        name: "천상",
        offset: 10,
        meaning: "재상의 별로, 보좌와 중재, 책임감을 상징한다.",
        keywords: &["보좌", "중재", "책임"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "천량",
        offset: 11,
        meaning: "음덕과 수호의 별로, 연장자의 풍모와 해액을 상징한다.",
        keywords: &["음덕", "수호", "연륜"],
        quality: StarQuality::Auspicious,
    },
    StarDef {
        name: "칠살",
        offset: 12,
        meaning: "장군의 별로, 과감한 돌파와 개척을 상징한다.",
        keywords: &["돌파", "개척", "위엄"],
        quality: StarQuality::Neutral,
    },
    StarDef {
        name: "파군",
        offset: 13,
        meaning: "선봉의 별로, 파괴와 재건, 소모를 상징한다.",
        keywords: &["변혁", "재건", "소모"],
        quality: StarQuality::Neutral,
    },
];

/// Name of the branch with the given 1-based number.
pub fn branch_name(branch_number: i32) -> &'static str {
    BRANCH_NAMES[(branch_number - 1) as usize]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarMetadata {
    pub star: &'static str,
    pub offset: i32,
    pub meaning: &'static str,
    pub keywords: &'static [&'static str],
    pub quality: StarQuality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceMetadata {
    pub index: i32,
    pub name: &'static str,
    pub theme: &'static str,
    pub keywords: &'static [&'static str],
}

/// Metadata for a single star, looked up by name.
pub fn star_metadata(name: &str) -> Option<StarMetadata> {
    MAIN_STARS
        .iter()
        .find(|star| star.name == name)
        .map(|star| StarMetadata {
            star: star.name,
            offset: star.offset,
            meaning: star.meaning,
            keywords: star.keywords,
            quality: star.quality,
        })
}

/// Metadata for a single palace, looked up by name.
pub fn palace_metadata(name: &str) -> Option<PalaceMetadata> {
    PALACES
        .iter()
        .position(|palace| palace.name == name)
        .map(|i| PalaceMetadata {
            index: i as i32 + 1,
            name: PALACES[i].name,
            theme: PALACES[i].theme,
            keywords: PALACES[i].keywords,
        })
}

/// All 14 star metadata entries, in declaration order.
pub fn list_star_metadata() -> Vec<StarMetadata> {
    MAIN_STARS
        .iter()
        .map(|star| StarMetadata {
            star: star.name,
            offset: star.offset,
            meaning: star.meaning,
            keywords: star.keywords,
            quality: star.quality,
        })
        .collect()
}

/// All 12 palace metadata entries, in ring order.
pub fn list_palace_metadata() -> Vec<PalaceMetadata> {
    PALACES
        .iter()
        .enumerate()
        .map(|(i, palace)| PalaceMetadata {
            index: i as i32 + 1,
            name: palace.name,
            theme: palace.theme,
            keywords: palace.keywords,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_offsets_are_the_first_fourteen_integers() {
        for (i, star) in MAIN_STARS.iter().enumerate() {
            assert_eq!(star.offset, i as i32);
        }
    }

    #[test]
    fn metadata_lists_are_complete_and_stable() {
        let stars = list_star_metadata();
        let palaces = list_palace_metadata();
        assert_eq!(stars.len(), 14);
        assert_eq!(palaces.len(), 12);
        assert_eq!(stars[0].star, "자미");
        assert_eq!(palaces[0], PalaceMetadata {
            index: 1,
            name: "명궁",
            theme: PALACES[0].theme,
            keywords: PALACES[0].keywords,
        });
        // Repeated queries return identical ordered lists.
        assert_eq!(stars, list_star_metadata());
        assert_eq!(palaces, list_palace_metadata());
    }

    #[test]
    fn branch_names_cycle_starts_at_ja() {
        assert_eq!(branch_name(1), "자");
        assert_eq!(branch_name(12), "해");
    }

    #[test]
    fn looks_up_metadata_by_name() {
        let jami = star_metadata("자미").unwrap();
        assert_eq!(jami.offset, 0);
        assert_eq!(jami.quality, StarQuality::Auspicious);
        assert!(star_metadata("없는별").is_none());

        let career = palace_metadata("관록궁").unwrap();
        assert_eq!(career.index, 9);
        assert!(palace_metadata("없는궁").is_none());
    }
}
