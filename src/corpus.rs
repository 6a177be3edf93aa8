//! Static sentence corpus used when no generator is reachable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{PosGameError, Result};
use crate::language::{Difficulty, Language};

const EN_EASY: &[&str] = &[
    "The cat sleeps peacefully.",
    "She runs quickly today.",
    "Birds fly high above.",
    "We eat delicious food.",
    "He plays guitar well.",
    "They dance beautifully together.",
    "I read books daily.",
    "Children laugh happily outside.",
    "Dogs bark loudly sometimes.",
    "Teachers explain concepts clearly.",
];

const EN_MEDIUM: &[&str] = &[
    "The beautiful flowers bloom in spring garden.",
    "Students study hard for their important exams.",
    "My grandmother tells interesting stories every evening.",
    "The chef prepared delicious meals for everyone yesterday.",
    "Our team won the championship after intense practice.",
    "The museum exhibits ancient artifacts from various civilizations.",
    "She completed her project before the strict deadline.",
    "The musician composed beautiful melodies on his piano.",
    "The detective solved the mysterious case last week.",
    "Many tourists visit famous landmarks during summer vacation.",
];

const EN_HARD: &[&str] = &[
    "The magnificent orchestra performed brilliantly at the prestigious concert hall in the old city center last night.",
    "Scientists carefully analyze complex data from distant telescopes to understand the mysterious phenomena hidden in deep space.",
    "The experienced journalist documented the extraordinary political developments that shaped the nation throughout the turbulent decade.",
    "Environmental researchers discovered unprecedented changes in the fragile coastal ecosystem after many months of extensive fieldwork.",
    "The innovative technology company unveiled several revolutionary products during their annual conference in the crowded convention center yesterday.",
    "Professional athletes demonstrate remarkable discipline and quiet dedication throughout their long and often challenging careers in sport.",
    "The renowned professor published groundbreaking research that fundamentally transformed how students around the world understand theoretical physics.",
    "International diplomats patiently negotiated complex agreements between multiple neighboring countries during the tense summit in Geneva.",
    "Talented young architects designed sustainable buildings that harmonize perfectly with the natural surroundings of the quiet mountain valley.",
    "Medical researchers finally developed effective treatments for previously incurable diseases after several decades of careful and patient work.",
];

const TH_EASY: &[&str] = &[
    "แมวนอนหลับสบาย",
    "เขาวิ่งเร็วมาก",
    "นกบินสูงขึ้น",
    "เรากินข้าวอร่อย",
    "เธออ่านหนังสือเก่ง",
    "ฉันชอบดูหนัง",
    "พวกเขาเล่นดนตรี",
    "น้องร้องเพลงไพเราะ",
    "พ่อขับรถเร็ว",
    "แม่ทำอาหารอร่อย",
    "เด็กๆวิ่งเล่นสนุก",
    "ครูสอนหนังสือดี",
    "หมาเห่าเสียงดัง",
    "แดดร้อนมากวันนี้",
    "ฝนตกหนักมาก",
];

const TH_MEDIUM: &[&str] = &[
    "นักเรียนขยันอ่านหนังสือเพื่อสอบ",
    "ดอกไม้สวยบานในสวนหลังบ้าน",
    "คุณยายเล่านิทานให้ฟังทุกคืน",
    "พวกเราไปเที่ยวทะเลในวันหยุด",
    "เด็กๆชอบกินไอศกรีมในวันร้อน",
    "นักกีฬาฝึกซ้อมหนักเพื่อการแข่งขัน",
    "คุณครูสอนวิชาคณิตศาสตร์อย่างสนุก",
    "นักดนตรีเล่นเพลงไพเราะบนเวที",
    "ชาวนาปลูกข้าวในฤดูฝนทุกปี",
    "นักเขียนแต่งนิยายสนุกหลายเล่ม",
    "ช่างภาพถ่ายรูปสวยในงานแต่งงาน",
    "หมอรักษาคนไข้อย่างเอาใจใส่",
    "พ่อค้าขายของในตลาดตั้งแต่เช้า",
    "เด็กนักเรียนทำการบ้านเสร็จก่อนนอน",
    "พนักงานทำงานหนักตลอดทั้งสัปดาห์",
];

const TH_HARD: &[&str] = &[
    "นักวิทยาศาสตร์วิเคราะห์ข้อมูลซับซ้อนเพื่อทำความเข้าใจปรากฏการณ์ลึกลับในอวกาศ",
    "วงดุริยางค์ชื่อดังแสดงอย่างยอดเยี่ยมในหอประชุมใหญ่เมื่อคืนที่ผ่านมา",
    "นักเขียนมีชื่อเสียงเปิดตัวนวนิยายเรื่องใหม่ที่ได้รับความนิยมอย่างล้นหลามในงานสัปดาห์หนังสือ",
    "นักกีฬาทีมชาติฝึกซ้อมอย่างหนักเพื่อเตรียมความพร้อมสำหรับการแข่งขันระดับนานาชาติในเดือนหน้า",
    "ผู้เชี่ยวชาญด้านสิ่งแวดล้อมเสนอแนวทางแก้ไขปัญหามลพิษทางอากาศที่กำลังส่งผลกระทบต่อเมืองใหญ่",
    "นักธุรกิจรุ่นใหม่พัฒนาแอปพลิเคชันที่ช่วยให้ผู้คนจัดการเวลาได้อย่างมีประสิทธิภาพมากขึ้น",
    "อาจารย์มหาวิทยาลัยนำเสนอผลงานวิจัยที่ได้รับการตีพิมพ์ในวารสารวิชาการระดับนานาชาติ",
    "ศิลปินชื่อดังจัดนิทรรศการแสดงผลงานศิลปะร่วมสมัยที่สะท้อนปัญหาสังคมในปัจจุบัน",
    "นักการทูตเจรจาข้อตกลงทางการค้าระหว่างประเทศที่จะส่งผลดีต่อเศรษฐกิจในภูมิภาค",
    "สถาปนิกออกแบบอาคารประหยัดพลังงานที่ใช้เทคโนโลยีทันสมัยและเป็นมิตรกับสิ่งแวดล้อม",
    "แพทย์ผู้เชี่ยวชาญค้นพบวิธีการรักษาโรคที่ซับซ้อนด้วยนวัตกรรมทางการแพทย์แบบใหม่",
    "นักวิจัยด้านปัญญาประดิษฐ์พัฒนาระบบที่สามารถวิเคราะห์และทำนายพฤติกรรมของผู้บริโภคได้อย่างแม่นยำ",
    "ผู้กำกับภาพยนตร์มีชื่อเสียงสร้างผลงานที่ได้รับการยกย่องจากนักวิจารณ์ทั่วโลก",
    "นักประวัติศาสตร์ค้นพบหลักฐานสำคัญที่เปลี่ยนความเข้าใจเกี่ยวกับอารยธรรมโบราณ",
    "นักเศรษฐศาสตร์วิเคราะห์แนวโน้มตลาดการเงินโลกที่กำลังเปลี่ยนแปลงอย่างรวดเร็ว",
];

/// Last-resort sentence when every tier came back empty or invalid
pub fn emergency_sentence(language: Language) -> &'static str {
    match language {
        Language::English => "The quick brown fox jumps.",
        Language::Thai => "แมวดำวิ่งเร็ว",
    }
}

/// Sentences bucketed by language and difficulty.
///
/// TOML layout mirrors the buckets:
/// ```toml
/// [en]
/// easy = ["The cat sleeps peacefully."]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    buckets: BTreeMap<Language, BTreeMap<Difficulty, Vec<String>>>,
}

impl Corpus {
    pub fn builtin() -> Self {
        let mut corpus = Self::default();
        for (language, difficulty, sentences) in [
            (Language::English, Difficulty::Easy, EN_EASY),
            (Language::English, Difficulty::Medium, EN_MEDIUM),
            (Language::English, Difficulty::Hard, EN_HARD),
            (Language::Thai, Difficulty::Easy, TH_EASY),
            (Language::Thai, Difficulty::Medium, TH_MEDIUM),
            (Language::Thai, Difficulty::Hard, TH_HARD),
        ] {
            corpus.insert(
                language,
                difficulty,
                sentences.iter().map(|s| s.to_string()).collect(),
            );
        }
        corpus
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PosGameError::Config(format!("Failed to read corpus file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| PosGameError::Config(format!("Failed to parse corpus file: {}", e)))
    }

    pub fn insert(&mut self, language: Language, difficulty: Difficulty, sentences: Vec<String>) {
        self.buckets
            .entry(language)
            .or_default()
            .insert(difficulty, sentences);
    }

    pub fn sentences(&self, language: Language, difficulty: Difficulty) -> &[String] {
        self.buckets
            .get(&language)
            .and_then(|by_difficulty| by_difficulty.get(&difficulty))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, language: Language, sentence: &str) -> bool {
        self.buckets
            .get(&language)
            .is_some_and(|by_difficulty| {
                by_difficulty
                    .values()
                    .any(|sentences| sentences.iter().any(|s| s == sentence))
            })
    }
}
