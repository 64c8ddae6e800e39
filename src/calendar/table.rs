//! Korean lunar calendar year data, 1900-2050.
//!
//! One packed `u32` per lunar year. Bits 0-11 flag the long (30-day) months
//! 1-12, bits 12-15 hold the intercalation month number (0 = none), bit 16
//! flags a long intercalation month. The data is derived from astronomical
//! new-moon and principal-term times evaluated at the Korean meridian
//! (UTC+9), which is why some entries differ from the Chinese calendar
//! (e.g. 1988 starts a day later, 2012 intercalates month 3 instead of 4).

/// First lunar year covered by [`YEAR_TABLE`].
pub(super) const BASE_YEAR: i32 = 1900;

/// Julian day number of lunar 1900-01-01, i.e. solar 1900-01-31.
pub(super) const EPOCH_JDN: i64 = 2_415_051;

pub(super) const YEAR_TABLE: [u32; 151] = [
    0x08BD2, 0x00752, 0x00EA5, 0x056AA, 0x0054B, 0x00A97,
    0x14AA6, 0x0055A, 0x00B55, 0x02B6A, 0x00752, 0x06BA5,
    0x00B25, 0x00A4B, 0x0595B, 0x00AAD, 0x0056A, 0x025B5,
    0x00BA9, 0x07DD2, 0x00D92, 0x00D25, 0x05D2D, 0x00956,
    0x002B5, 0x04ADD, 0x006D4, 0x00DA9, 0x02ECA, 0x00E92,
    0x066A6, 0x00527, 0x00A57, 0x15956, 0x00ADA, 0x006D4,
    0x13751, 0x00749, 0x17B13, 0x00A93, 0x0052B, 0x1651B,
    0x0096D, 0x00B6A, 0x14DA4, 0x00BA4, 0x00B49, 0x02D4B,
    0x00A95, 0x07AAB, 0x0052D, 0x00AAD, 0x15AAA, 0x00DB2,
    0x00DA4, 0x13EA1, 0x00D4A, 0x08D95, 0x00A96, 0x00556,
    0x06575, 0x00AD5, 0x006D2, 0x04755, 0x00EA5, 0x00E4A,
    0x0364E, 0x00A9B, 0x07AD6, 0x0056A, 0x00B59, 0x05BB2,
    0x00752, 0x00725, 0x04B2B, 0x00A4B, 0x089AB, 0x002AD,
    0x0056B, 0x165A9, 0x00DA9, 0x00D92, 0x04D95, 0x00D25,
    0x0AE4D, 0x00A56, 0x002B6, 0x06AED, 0x006D4, 0x00DA9,
    0x05ED2, 0x00E92, 0x00D26, 0x0352E, 0x00A57, 0x089B6,
    0x00B5A, 0x006D4, 0x05769, 0x00749, 0x00693, 0x04A97,
    0x0052B, 0x00A5B, 0x02AAE, 0x0036A, 0x07DD5, 0x00BA4,
    0x00B49, 0x05D53, 0x00A95, 0x0052D, 0x1352D, 0x00AAD,
    0x09BAA, 0x005D2, 0x00DA5, 0x05EAA, 0x00D4A, 0x00A95,
    0x04A9D, 0x00556, 0x00AB5, 0x02AD6, 0x006D2, 0x06765,
    0x00EA5, 0x00E4A, 0x05656, 0x00C9B, 0x0055A, 0x0356D,
    0x00B69, 0x0BF52, 0x00752, 0x00B25, 0x16B0B, 0x00A4B,
    0x004AB, 0x052BB, 0x0056D, 0x00B69, 0x02DAA, 0x00D92,
    0x07EA5, 0x00D25, 0x00A4D, 0x15A4D, 0x002B6, 0x005B5,
    0x136D1,
];
