//! Canonical part-of-speech tags and their static reference data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::language::Language;

/// One of the eight tags every tagger's output is normalized into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Adposition,
    Conjunction,
    Interjection,
}

impl Pos {
    pub const ALL: [Pos; 8] = [
        Pos::Noun,
        Pos::Pronoun,
        Pos::Verb,
        Pos::Adjective,
        Pos::Adverb,
        Pos::Adposition,
        Pos::Conjunction,
        Pos::Interjection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Pronoun => "PRONOUN",
            Self::Verb => "VERB",
            Self::Adjective => "ADJECTIVE",
            Self::Adverb => "ADVERB",
            Self::Adposition => "ADPOSITION",
            Self::Conjunction => "CONJUNCTION",
            Self::Interjection => "INTERJECTION",
        }
    }

    /// Localized display name shown to players
    pub fn display_name(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, Self::Noun) => "Noun (คำนาม)",
            (Language::English, Self::Pronoun) => "Pronoun (คำสรรพนาม)",
            (Language::English, Self::Verb) => "Verb (คำกริยา)",
            (Language::English, Self::Adjective) => "Adjective (คำคุณศัพท์)",
            (Language::English, Self::Adverb) => "Adverb (คำกริยาวิเศษณ์)",
            (Language::English, Self::Adposition) => "Preposition (คำบุพบท)",
            (Language::English, Self::Conjunction) => "Conjunction (คำสันธาน)",
            (Language::English, Self::Interjection) => "Interjection (คำอุทาน)",
            (Language::Thai, Self::Noun) => "คำนาม (Noun)",
            (Language::Thai, Self::Pronoun) => "คำสรรพนาม (Pronoun)",
            (Language::Thai, Self::Verb) => "คำกริยา (Verb)",
            (Language::Thai, Self::Adjective) => "คำคุณศัพท์ (Adjective)",
            (Language::Thai, Self::Adverb) => "คำกริยาวิเศษณ์ (Adverb)",
            (Language::Thai, Self::Adposition) => "คำบุพบท (Preposition)",
            (Language::Thai, Self::Conjunction) => "คำสันธาน (Conjunction)",
            (Language::Thai, Self::Interjection) => "คำอุทาน (Interjection)",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pos {
    type Err = String;

    /// Accepts canonical names as well as the short Universal codes players type
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NOUN" => Ok(Self::Noun),
            "PRONOUN" | "PRON" => Ok(Self::Pronoun),
            "VERB" => Ok(Self::Verb),
            "ADJECTIVE" | "ADJ" => Ok(Self::Adjective),
            "ADVERB" | "ADV" => Ok(Self::Adverb),
            "ADPOSITION" | "PREPOSITION" | "ADP" => Ok(Self::Adposition),
            "CONJUNCTION" | "CONJ" => Ok(Self::Conjunction),
            "INTERJECTION" | "INTJ" => Ok(Self::Interjection),
            other => Err(format!("Unknown part of speech: {}", other)),
        }
    }
}

/// Canonical tag to display name table for one language
#[derive(Debug, Clone, Serialize)]
pub struct PosVocabulary {
    pub language: Language,
    pub entries: Vec<(Pos, &'static str)>,
}

impl PosVocabulary {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            entries: Pos::ALL
                .iter()
                .map(|pos| (*pos, pos.display_name(language)))
                .collect(),
        }
    }

    pub fn display_name(&self, pos: Pos) -> &'static str {
        pos.display_name(self.language)
    }
}

/// Explanation of a tag for the reference screen
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub pos: Pos,
    pub description: &'static str,
    pub examples: &'static str,
    pub example_sentence: &'static str,
}

pub fn catalog(language: Language) -> Vec<CatalogEntry> {
    Pos::ALL
        .iter()
        .map(|pos| catalog_entry(*pos, language))
        .collect()
}

pub fn catalog_entry(pos: Pos, language: Language) -> CatalogEntry {
    let (description, examples, example_sentence) = match (language, pos) {
        (Language::English, Pos::Noun) => (
            "คำนาม - คำที่เป็นชื่อคน สถานที่ สิ่งของ หรือแนวคิด",
            "cat (แมว), city (เมือง), happiness (ความสุข), John (จอห์น)",
            "The cat sleeps on the sofa. / My happiness comes from helping others.",
        ),
        (Language::English, Pos::Pronoun) => (
            "คำสรรพนาม - คำที่ใช้แทนคำนาม",
            "I (ฉัน), you (คุณ), he (เขา), she (เธอ), it (มัน)",
            "She gave it to me. / They went to the store.",
        ),
        (Language::English, Pos::Verb) => (
            "คำกริยา - คำที่แสดงการกระทำหรือสถานะ",
            "run (วิ่ง), eat (กิน), think (คิด), sleep (นอน)",
            "She runs every morning. / I think about you.",
        ),
        (Language::English, Pos::Adjective) => (
            "คำคุณศัพท์ - คำที่ขยายความคำนาม",
            "happy (มีความสุข), green (สีเขียว), beautiful (สวยงาม)",
            "The happy child played. / She has beautiful eyes.",
        ),
        (Language::English, Pos::Adverb) => (
            "คำวิเศษณ์ - คำที่ขยายความคำกริยา คำคุณศัพท์ หรือคำวิเศษณ์อื่น",
            "quickly (อย่างรวดเร็ว), very (มาก), extremely (อย่างยิ่ง)",
            "He runs quickly. / She is very smart.",
        ),
        (Language::English, Pos::Adposition) => (
            "คำบุพบท - คำที่แสดงความสัมพันธ์ระหว่างคำนามกับส่วนอื่นในประโยค",
            "in (ใน), on (บน), at (ที่), with (กับ), by (โดย)",
            "The cat is on the table. / She walked with her friend.",
        ),
        (Language::English, Pos::Conjunction) => (
            "คำสันธาน - คำที่เชื่อมคำ วลี หรือประโยคเข้าด้วยกัน",
            "and (และ), but (แต่), or (หรือ), because (เพราะ)",
            "I like tea and coffee. / He ran because he was late.",
        ),
        (Language::English, Pos::Interjection) => (
            "คำอุทาน - คำที่แสดงอารมณ์หรือความรู้สึกอย่างฉับพลัน",
            "wow (ว้าว), oh (โอ้), ah (อา), ouch (โอ๊ย)",
            "Wow! That's amazing. / Oh, I didn't see you there.",
        ),
        (Language::Thai, Pos::Noun) => (
            "คำนาม - คำที่เป็นชื่อคน สถานที่ สิ่งของ หรือแนวคิด",
            "แมว (cat), เมือง (city), ความสุข (happiness), สมชาย (personal name)",
            "แมวนอนอยู่บนโซฟา / ความสุขของฉันมาจากการช่วยเหลือผู้อื่น",
        ),
        (Language::Thai, Pos::Pronoun) => (
            "คำสรรพนาม - คำที่ใช้แทนคำนาม",
            "ฉัน (I), คุณ (you), เขา (he/she), มัน (it), พวกเขา (they)",
            "เธอให้มันแก่ฉัน / พวกเขาไปที่ร้านค้า",
        ),
        (Language::Thai, Pos::Verb) => (
            "คำกริยา - คำที่แสดงการกระทำหรือสถานะ",
            "วิ่ง (run), กิน (eat), คิด (think), นอน (sleep)",
            "เธอวิ่งทุกเช้า / ฉันคิดถึงคุณ",
        ),
        (Language::Thai, Pos::Adjective) => (
            "คำคุณศัพท์ - คำที่ขยายความคำนาม",
            "มีความสุข (happy), สีเขียว (green), สวยงาม (beautiful)",
            "เด็กที่มีความสุขกำลังเล่น / เธอมีดวงตาที่สวยงาม",
        ),
        (Language::Thai, Pos::Adverb) => (
            "คำวิเศษณ์ - คำที่ขยายความคำกริยา คำคุณศัพท์ หรือคำวิเศษณ์อื่น",
            "อย่างรวดเร็ว (quickly), มาก (very), อย่างยิ่ง (extremely)",
            "เขาวิ่งอย่างรวดเร็ว / เธอฉลาดมาก",
        ),
        (Language::Thai, Pos::Adposition) => (
            "คำบุพบท - คำที่แสดงความสัมพันธ์ระหว่างคำนามกับส่วนอื่นในประโยค",
            "ใน (in), บน (on), ที่ (at), กับ (with), โดย (by)",
            "แมวอยู่บนโต๊ะ / เธอเดินไปกับเพื่อนของเธอ",
        ),
        (Language::Thai, Pos::Conjunction) => (
            "คำสันธาน - คำที่เชื่อมคำ วลี หรือประโยคเข้าด้วยกัน",
            "และ (and), แต่ (but), หรือ (or), เพราะ (because)",
            "ฉันชอบชาและกาแฟ / เขาวิ่งเพราะเขามาสาย",
        ),
        (Language::Thai, Pos::Interjection) => (
            "คำอุทาน - คำที่แสดงอารมณ์หรือความรู้สึกอย่างฉับพลัน",
            "ว้าว (wow), โอ้ (oh), อา (ah), โอ๊ย (ouch)",
            "ว้าว! นั่นมหัศจรรย์มาก / โอ้ ฉันไม่เห็นคุณอยู่ตรงนั้น",
        ),
    };

    CatalogEntry {
        pos,
        description,
        examples,
        example_sentence,
    }
}
