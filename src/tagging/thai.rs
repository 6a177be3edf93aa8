//! Built-in Thai tagger emitting ORCHID-style tags.
//!
//! Thai is written without spaces between words, so tokenization is a greedy
//! longest match against the dictionary below. Whitespace runs become their
//! own tokens; text the dictionary does not cover is kept as one unknown token
//! per run.

use std::collections::HashMap;

use super::Tagger;
use crate::error::Result;

const UNKNOWN_TAG: &str = "UNKW";
const SPACE_TAG: &str = "SPACE";

const DICTIONARY: &[(&str, &str)] = &[
    // pronouns
    ("ฉัน", "PPRS"), ("เขา", "PPRS"), ("เธอ", "PPRS"), ("เรา", "PPRS"), ("พวกเขา", "PPRS"),
    ("พวกเรา", "PPRS"), ("มัน", "PPRS"), ("คุณ", "PPRS"),
    // common nouns
    ("แมว", "NCMN"), ("หมา", "NCMN"), ("นก", "NCMN"), ("ข้าว", "NCMN"), ("หนังสือ", "NCMN"),
    ("หนัง", "NCMN"), ("ดนตรี", "NCMN"), ("น้อง", "NCMN"), ("เพลง", "NCMN"), ("พ่อ", "NCMN"),
    ("แม่", "NCMN"), ("รถ", "NCMN"), ("อาหาร", "NCMN"), ("เด็ก", "NCMN"), ("เด็กๆ", "NCMN"),
    ("ครู", "NCMN"), ("คุณครู", "NCMN"), ("เสียง", "NCMN"), ("แดด", "NCMN"), ("ฝน", "NCMN"),
    ("นักเรียน", "NCMN"), ("ดอกไม้", "NCMN"), ("สวน", "NCMN"), ("บ้าน", "NCMN"),
    ("คุณยาย", "NCMN"), ("นิทาน", "NCMN"), ("คืน", "NCMN"), ("ทะเล", "NCMN"), ("วัน", "NCMN"),
    ("วันหยุด", "NCMN"), ("วันนี้", "NCMN"), ("ไอศกรีม", "NCMN"), ("นักกีฬา", "NCMN"),
    ("การแข่งขัน", "NCMN"), ("วิชา", "NCMN"), ("คณิตศาสตร์", "NCMN"), ("นักดนตรี", "NCMN"),
    ("เวที", "NCMN"), ("ชาวนา", "NCMN"), ("ฤดูฝน", "NCMN"), ("ปี", "NCMN"), ("นักเขียน", "NCMN"),
    ("นิยาย", "NCMN"), ("ช่างภาพ", "NCMN"), ("รูป", "NCMN"), ("งาน", "NCMN"),
    ("งานแต่งงาน", "NCMN"), ("หมอ", "NCMN"), ("คนไข้", "NCMN"), ("พ่อค้า", "NCMN"),
    ("ของ", "NCMN"), ("ตลาด", "NCMN"), ("เช้า", "NCMN"), ("การบ้าน", "NCMN"),
    ("พนักงาน", "NCMN"), ("สัปดาห์", "NCMN"), ("โรงเรียน", "NCMN"), ("เพื่อน", "NCMN"),
    ("ครอบครัว", "NCMN"), ("น้ำ", "NCMN"), ("พระอาทิตย์", "NCMN"), ("พระจันทร์", "NCMN"),
    ("ดาว", "NCMN"), ("ต้นไม้", "NCMN"), ("โต๊ะ", "NCMN"), ("เมือง", "NCMN"),
    ("ความสุข", "NCMN"),
    // verbs
    ("นอน", "VACT"), ("หลับ", "VACT"), ("นอนหลับ", "VACT"), ("วิ่ง", "VACT"), ("บิน", "VACT"),
    ("ขึ้น", "VACT"), ("กิน", "VACT"), ("อ่าน", "VACT"), ("เขียน", "VACT"), ("ชอบ", "VSTA"),
    ("ดู", "VACT"), ("เล่น", "VACT"), ("ร้อง", "VACT"), ("ขับ", "VACT"), ("ทำ", "VACT"),
    ("สอน", "VACT"), ("เห่า", "VACT"), ("ตก", "VACT"), ("สอบ", "VACT"), ("บาน", "VACT"),
    ("เล่า", "VACT"), ("ให้", "VACT"), ("ฟัง", "VACT"), ("ไป", "VACT"), ("เที่ยว", "VACT"),
    ("ฝึกซ้อม", "VACT"), ("ปลูก", "VACT"), ("แต่ง", "VACT"), ("ถ่าย", "VACT"), ("รักษา", "VACT"),
    ("ขาย", "VACT"), ("เสร็จ", "VACT"), ("ทำงาน", "VACT"), ("คิด", "VACT"), ("มี", "VSTA"),
    ("อยู่", "VSTA"),
    // adjectives
    ("อร่อย", "ADJV"), ("ไพเราะ", "ADJV"), ("สนุก", "ADJV"), ("ดี", "ADJV"), ("ดัง", "ADJV"),
    ("ร้อน", "ADJV"), ("สวย", "ADJV"), ("ดำ", "ADJV"), ("มีความสุข", "ADJV"), ("เศร้า", "ADJV"),
    ("ใหญ่", "ADJV"), ("เล็ก", "ADJV"), ("แย่", "ADJV"), ("หนาว", "ADJV"), ("ขยัน", "ADJV"),
    // adverbs
    ("สบาย", "ADVN"), ("เร็ว", "ADVN"), ("มาก", "ADVN"), ("สูง", "ADVN"), ("เก่ง", "ADVN"),
    ("หนัก", "ADVN"), ("ช้า", "ADVN"), ("อย่าง", "ADVN"),
    // prepositions
    ("ใน", "PREP"), ("บน", "PREP"), ("ที่", "PREP"), ("กับ", "PREP"), ("โดย", "PREP"),
    ("เพื่อ", "PREP"), ("หลัง", "PREP"), ("ตั้งแต่", "PREP"), ("ก่อน", "PREP"), ("ตลอด", "PREP"),
    // conjunctions
    ("และ", "CONJ"), ("แต่", "CONJ"), ("หรือ", "CONJ"), ("เพราะ", "CONJ"),
    // interjections
    ("ว้าว", "INTJ"), ("โอ้", "INTJ"), ("โอ๊ย", "INTJ"),
    // determiners and classifiers, outside the canonical set
    ("ทุก", "DIBQ"), ("หลาย", "DIAQ"), ("ทั้ง", "DIBQ"), ("เล่ม", "CNIT"),
];

/// Dictionary-driven Thai tokenizer and tagger
pub struct ThaiTagger {
    dictionary: HashMap<&'static str, &'static str>,
    max_word_chars: usize,
}

impl ThaiTagger {
    pub fn new() -> Self {
        let dictionary: HashMap<&'static str, &'static str> = DICTIONARY.iter().copied().collect();
        let max_word_chars = dictionary
            .keys()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(1);
        Self {
            dictionary,
            max_word_chars,
        }
    }

    /// Longest dictionary word starting at `start`, in chars
    fn longest_match(&self, chars: &[char], start: usize) -> Option<usize> {
        let limit = self.max_word_chars.min(chars.len() - start);
        (1..=limit).rev().find(|len| {
            let candidate: String = chars[start..start + len].iter().collect();
            self.dictionary.contains_key(candidate.as_str())
        })
    }
}

impl Default for ThaiTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for ThaiTagger {
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = sentence.chars().collect();
        let mut tokens = Vec::new();
        let mut unknown = String::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i].is_whitespace() {
                flush_unknown(&mut unknown, &mut tokens);
                let start = i;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                tokens.push(chars[start..i].iter().collect());
                continue;
            }

            match self.longest_match(&chars, i) {
                Some(len) => {
                    flush_unknown(&mut unknown, &mut tokens);
                    tokens.push(chars[i..i + len].iter().collect());
                    i += len;
                }
                None => {
                    unknown.push(chars[i]);
                    i += 1;
                }
            }
        }
        flush_unknown(&mut unknown, &mut tokens);

        Ok(tokens)
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<(String, String)>> {
        Ok(tokens
            .iter()
            .map(|token| {
                let tag = if token.trim().is_empty() {
                    SPACE_TAG
                } else {
                    self.dictionary
                        .get(token.as_str())
                        .copied()
                        .unwrap_or(UNKNOWN_TAG)
                };
                (token.clone(), tag.to_string())
            })
            .collect())
    }
}

fn flush_unknown(unknown: &mut String, tokens: &mut Vec<String>) {
    if !unknown.is_empty() {
        tokens.push(std::mem::take(unknown));
    }
}
