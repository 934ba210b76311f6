//! Hexagrams, trigrams and the King Wen sequence.
//!
//! A [`Hexagram`] is the raw cast: six [`LineValue`]s, line 1 (bottom)
//! drawn first. A [`Figure`] is the static yin/yang pattern read from it,
//! either as it stands (the primary hexagram) or after every changing line
//! has flipped (the relating hexagram).

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{IchingError, IchingResult};
use crate::line::LineValue;
use crate::rng::Lcg48;

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// One of the eight three-line figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☷ Earth.
    Kun,
    /// ☳ Thunder.
    Zhen,
    /// ☵ Water.
    Kan,
    /// ☱ Lake.
    Dui,
    /// ☶ Mountain.
    Gen,
    /// ☲ Fire.
    Li,
    /// ☴ Wind.
    Xun,
    /// ☰ Heaven.
    Qian,
}

impl Trigram {
    /// Look up a trigram by its 3-bit pattern (bit 0 = bottom line, 1 = yang).
    pub fn from_pattern(pattern: u8) -> Self {
        match pattern & 0b111 {
            0 => Self::Kun,
            1 => Self::Zhen,
            2 => Self::Kan,
            3 => Self::Dui,
            4 => Self::Gen,
            5 => Self::Li,
            6 => Self::Xun,
            _ => Self::Qian,
        }
    }

    /// The 3-bit line pattern, bit 0 being the bottom line.
    pub fn pattern(self) -> u8 {
        self as u8
    }

    /// Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Kan => "坎",
            Self::Dui => "兑",
            Self::Gen => "艮",
            Self::Li => "离",
            Self::Xun => "巽",
            Self::Qian => "乾",
        }
    }

    /// The natural image the trigram stands for.
    pub fn image(self) -> &'static str {
        match self {
            Self::Kun => "Earth",
            Self::Zhen => "Thunder",
            Self::Kan => "Water",
            Self::Dui => "Lake",
            Self::Gen => "Mountain",
            Self::Li => "Fire",
            Self::Xun => "Wind",
            Self::Qian => "Heaven",
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Kun => '☷',
            Self::Zhen => '☳',
            Self::Kan => '☵',
            Self::Dui => '☱',
            Self::Gen => '☶',
            Self::Li => '☲',
            Self::Xun => '☴',
            Self::Qian => '☰',
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.symbol(), self.chinese(), self.image())
    }
}

/// King Wen numbers: `KING_WEN[upper pattern][lower pattern]`.
const KING_WEN: [[u8; 8]; 8] = [
    [2, 24, 7, 19, 15, 36, 46, 11],
    [16, 51, 40, 54, 62, 55, 32, 34],
    [8, 3, 29, 60, 39, 63, 48, 5],
    [45, 17, 47, 58, 31, 49, 28, 43],
    [23, 27, 4, 41, 52, 22, 18, 26],
    [35, 21, 64, 38, 56, 30, 50, 14],
    [20, 42, 59, 61, 53, 37, 57, 9],
    [12, 25, 6, 10, 33, 13, 44, 1],
];

/// Chinese and English names, indexed by King Wen number minus one.
const NAMES: [(&str, &str); 64] = [
    ("乾为天", "The Creative"),
    ("坤为地", "The Receptive"),
    ("水雷屯", "Difficulty at the Beginning"),
    ("山水蒙", "Youthful Folly"),
    ("水天需", "Waiting"),
    ("天水讼", "Conflict"),
    ("地水师", "The Army"),
    ("水地比", "Holding Together"),
    ("风天小畜", "Small Taming"),
    ("天泽履", "Treading"),
    ("地天泰", "Peace"),
    ("天地否", "Standstill"),
    ("天火同人", "Fellowship"),
    ("火天大有", "Great Possession"),
    ("地山谦", "Modesty"),
    ("雷地豫", "Enthusiasm"),
    ("泽雷随", "Following"),
    ("山风蛊", "Work on the Decayed"),
    ("地泽临", "Approach"),
    ("风地观", "Contemplation"),
    ("火雷噬嗑", "Biting Through"),
    ("山火贲", "Grace"),
    ("山地剥", "Splitting Apart"),
    ("地雷复", "Return"),
    ("天雷无妄", "Innocence"),
    ("山天大畜", "Great Taming"),
    ("山雷颐", "Nourishment"),
    ("泽风大过", "Great Exceeding"),
    ("坎为水", "The Abysmal"),
    ("离为火", "The Clinging"),
    ("泽山咸", "Influence"),
    ("雷风恒", "Duration"),
    ("天山遁", "Retreat"),
    ("雷天大壮", "Great Power"),
    ("火地晋", "Progress"),
    ("地火明夷", "Darkening of the Light"),
    ("风火家人", "The Family"),
    ("火泽睽", "Opposition"),
    ("水山蹇", "Obstruction"),
    ("雷水解", "Deliverance"),
    ("山泽损", "Decrease"),
    ("风雷益", "Increase"),
    ("泽天夬", "Breakthrough"),
    ("天风姤", "Coming to Meet"),
    ("泽地萃", "Gathering Together"),
    ("地风升", "Pushing Upward"),
    ("泽水困", "Oppression"),
    ("水风井", "The Well"),
    ("泽火革", "Revolution"),
    ("火风鼎", "The Cauldron"),
    ("震为雷", "The Arousing"),
    ("艮为山", "Keeping Still"),
    ("风山渐", "Development"),
    ("雷泽归妹", "The Marrying Maiden"),
    ("雷火丰", "Abundance"),
    ("火山旅", "The Wanderer"),
    ("巽为风", "The Gentle"),
    ("兑为泽", "The Joyous"),
    ("风水涣", "Dispersion"),
    ("水泽节", "Limitation"),
    ("风泽中孚", "Inner Truth"),
    ("雷山小过", "Small Exceeding"),
    ("水火既济", "After Completion"),
    ("火水未济", "Before Completion"),
];

/// A static six-line pattern: bit `n` set means line `n + 1` is yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Figure {
    bits: u8,
}

impl Figure {
    /// Build a figure from a 6-bit pattern. Higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self { bits: bits & 0b11_1111 }
    }

    /// Find the figure with the given King Wen sequence number.
    pub fn from_king_wen(number: u32) -> IchingResult<Self> {
        (0..64u8)
            .map(Self::from_bits)
            .find(|f| u32::from(f.king_wen()) == number)
            .ok_or(IchingError::InvalidHexagramNumber(number))
    }

    /// The 6-bit pattern.
    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Whether line `position` (1 = bottom .. 6 = top) is yang.
    /// Positions outside 1..=6 read as yin.
    pub fn is_yang(self, position: usize) -> bool {
        (1..=LINE_COUNT).contains(&position) && self.bits & (1 << (position - 1)) != 0
    }

    /// Lines 1-3.
    pub fn lower(self) -> Trigram {
        Trigram::from_pattern(self.bits & 0b111)
    }

    /// Lines 4-6.
    pub fn upper(self) -> Trigram {
        Trigram::from_pattern(self.bits >> 3)
    }

    /// Traditional King Wen sequence number, 1..=64.
    pub fn king_wen(self) -> u8 {
        KING_WEN[self.upper().pattern() as usize][self.lower().pattern() as usize]
    }

    /// Chinese name, e.g. `乾为天`.
    pub fn name(self) -> &'static str {
        NAMES[self.king_wen() as usize - 1].0
    }

    /// English title, e.g. `The Creative`.
    pub fn english(self) -> &'static str {
        NAMES[self.king_wen() as usize - 1].1
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.king_wen(), self.name(), self.english())
    }
}

impl Serialize for Figure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Figure", 5)?;
        s.serialize_field("number", &self.king_wen())?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("english", self.english())?;
        s.serialize_field("upper", &self.upper())?;
        s.serialize_field("lower", &self.lower())?;
        s.end()
    }
}

/// The six lines of one cast, line 1 (bottom) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [LineValue; LINE_COUNT],
}

impl Hexagram {
    /// Cast a hexagram from a seed: six lines of three coins each, drawn
    /// bottom to top from a single [`Lcg48`] stream (18 generator steps).
    pub fn cast(seed: i64) -> Self {
        let mut rng = Lcg48::new(seed);
        Self::cast_with(&mut rng)
    }

    /// Cast six lines from an existing generator, advancing it by 18 steps.
    pub fn cast_with(rng: &mut Lcg48) -> Self {
        let lines = std::array::from_fn(|_| LineValue::toss(rng));
        Self { lines }
    }

    /// Build a hexagram from explicit lines, bottom first.
    pub fn from_lines(lines: [LineValue; LINE_COUNT]) -> Self {
        Self { lines }
    }

    /// Build a hexagram from numeric values (each 6-9), bottom first.
    pub fn from_values(values: &[u8]) -> IchingResult<Self> {
        let lines: Vec<LineValue> = values
            .iter()
            .map(|&v| LineValue::try_from(v))
            .collect::<IchingResult<_>>()?;
        let lines: [LineValue; LINE_COUNT] = lines
            .try_into()
            .map_err(|v: Vec<LineValue>| IchingError::InvalidLineCount(v.len()))?;
        Ok(Self { lines })
    }

    /// The lines, bottom first.
    pub fn lines(&self) -> &[LineValue; LINE_COUNT] {
        &self.lines
    }

    /// The line at `position` (1 = bottom .. 6 = top).
    pub fn line(&self, position: usize) -> Option<LineValue> {
        position
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .copied()
    }

    /// Numeric values, bottom first.
    pub fn values(&self) -> [u8; LINE_COUNT] {
        self.lines.map(LineValue::value)
    }

    /// 1-based positions of the changing (old) lines, bottom first.
    pub fn changing_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_changing())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// The present hexagram (本卦).
    pub fn primary(&self) -> Figure {
        self.figure(LineValue::is_yang)
    }

    /// The hexagram after the changing lines flip (变卦), or `None` when no
    /// line changes.
    pub fn relating(&self) -> Option<Figure> {
        if self.lines.iter().any(|l| l.is_changing()) {
            Some(self.figure(|l| l.changed().is_yang()))
        } else {
            None
        }
    }

    fn figure(&self, yang: fn(LineValue) -> bool) -> Figure {
        let bits = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| yang(**l))
            .fold(0u8, |acc, (i, _)| acc | (1 << i));
        Figure::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(values: [u8; 6]) -> Hexagram {
        Hexagram::from_values(&values).unwrap()
    }

    #[test]
    fn king_wen_is_a_permutation() {
        let mut seen: Vec<u8> = (0..64u8).map(|b| Figure::from_bits(b).king_wen()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=64).collect::<Vec<u8>>());
    }

    #[test]
    fn well_known_figures() {
        assert_eq!(Figure::from_bits(0b11_1111).king_wen(), 1);
        assert_eq!(Figure::from_bits(0).king_wen(), 2);
        // Water over thunder: lines 1 and 5 yang.
        assert_eq!(Figure::from_bits(0b01_0001).king_wen(), 3);
        // Mountain over water: lines 2 and 6 yang.
        assert_eq!(Figure::from_bits(0b10_0010).king_wen(), 4);
        // Earth over heaven.
        assert_eq!(Figure::from_bits(0b00_0111).king_wen(), 11);
        // Water over fire.
        assert_eq!(Figure::from_bits(0b01_0101).king_wen(), 63);
    }

    #[test]
    fn names_follow_numbers() {
        let f = Figure::from_bits(0b11_1111);
        assert_eq!(f.name(), "乾为天");
        assert_eq!(f.english(), "The Creative");
        assert_eq!(f.to_string(), "1 乾为天 (The Creative)");
    }

    #[test]
    fn from_king_wen_round_trip() {
        for n in 1..=64u32 {
            assert_eq!(u32::from(Figure::from_king_wen(n).unwrap().king_wen()), n);
        }
        assert!(matches!(
            Figure::from_king_wen(0),
            Err(IchingError::InvalidHexagramNumber(0))
        ));
        assert!(Figure::from_king_wen(65).is_err());
    }

    #[test]
    fn trigrams() {
        let f = Figure::from_king_wen(11).unwrap();
        assert_eq!(f.lower(), Trigram::Qian);
        assert_eq!(f.upper(), Trigram::Kun);
        assert_eq!(Trigram::Zhen.to_string(), "☳ 震 (Thunder)");
    }

    #[test]
    fn reference_cast() {
        let h = Hexagram::cast(9800);
        assert_eq!(h.values(), [8, 8, 8, 9, 8, 6]);
        assert_eq!(h.primary().king_wen(), 16);
        assert_eq!(h.relating().map(Figure::king_wen), Some(23));
        assert_eq!(h.changing_positions(), vec![4, 6]);
    }

    #[test]
    fn cast_advances_eighteen_steps() {
        let mut rng = Lcg48::new(9801);
        let h = Hexagram::cast_with(&mut rng);
        assert_eq!(h, Hexagram::cast(9801));
        let mut manual = Lcg48::new(9801);
        for _ in 0..18 {
            manual.next_coin();
        }
        assert_eq!(rng, manual);
    }

    #[test]
    fn relating_none_without_changes() {
        let h = hex([7, 8, 7, 8, 7, 8]);
        assert!(h.relating().is_none());
        assert!(h.changing_positions().is_empty());
        assert_eq!(h.primary().king_wen(), 63);
    }

    #[test]
    fn all_changing_flips_everything() {
        let h = hex([9, 9, 9, 9, 9, 9]);
        assert_eq!(h.primary().king_wen(), 1);
        assert_eq!(h.relating().map(Figure::king_wen), Some(2));
    }

    #[test]
    fn from_values_rejects_bad_input() {
        assert!(matches!(
            Hexagram::from_values(&[7, 7, 7]),
            Err(IchingError::InvalidLineCount(3))
        ));
        assert!(matches!(
            Hexagram::from_values(&[7, 7, 7, 7, 7, 10]),
            Err(IchingError::InvalidLineValue(10))
        ));
    }

    #[test]
    fn line_positions() {
        let h = hex([6, 7, 8, 9, 7, 8]);
        assert_eq!(h.line(1), Some(LineValue::OldYin));
        assert_eq!(h.line(6), Some(LineValue::YoungYin));
        assert_eq!(h.line(0), None);
        assert_eq!(h.line(7), None);
    }

    #[test]
    fn figure_serializes_with_names() {
        let json = serde_json::to_value(Figure::from_king_wen(2).unwrap()).unwrap();
        assert_eq!(json["number"], 2);
        assert_eq!(json["name"], "坤为地");
        assert_eq!(json["upper"], "Kun");
    }
}
