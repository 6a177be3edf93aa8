//! Anti-repetition memory for the corpus fallback tier.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::debug;

use crate::language::{Difficulty, Language};

/// Recently served sentences for one (language, difficulty) bucket
#[derive(Debug, Clone)]
pub struct UsageMemory {
    last_served: Option<String>,
    history: VecDeque<String>,
    cap: usize,
}

impl UsageMemory {
    pub fn new(cap: usize) -> Self {
        Self {
            last_served: None,
            history: VecDeque::with_capacity(cap),
            cap: cap.max(1),
        }
    }

    pub fn last_served(&self) -> Option<&str> {
        self.last_served.as_deref()
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Pick a sentence from `corpus`, preferring ones not served recently.
    ///
    /// Candidates narrow from "neither last nor in history", to "not last",
    /// to the whole corpus. Returns `None` only for an empty corpus.
    ///
    /// The corpus is covered before a repeat only when `cap` is at least its
    /// length; with a smaller cap, picks can cycle within a subset.
    pub fn pick<R: Rng + ?Sized>(&mut self, corpus: &[String], rng: &mut R) -> Option<String> {
        let fresh: Vec<&String> = corpus
            .iter()
            .filter(|s| !self.is_last(s) && !self.history.contains(s))
            .collect();

        let candidates = if !fresh.is_empty() {
            fresh
        } else {
            let not_last: Vec<&String> = corpus.iter().filter(|s| !self.is_last(s)).collect();
            if !not_last.is_empty() {
                not_last
            } else {
                corpus.iter().collect()
            }
        };

        let pick = candidates.choose(rng).map(|s| (*s).clone())?;
        self.remember(pick.clone());
        Some(pick)
    }

    fn is_last(&self, sentence: &str) -> bool {
        self.last_served.as_deref() == Some(sentence)
    }

    fn remember(&mut self, sentence: String) {
        self.history.retain(|s| *s != sentence);
        self.history.push_back(sentence.clone());
        while self.history.len() > self.cap {
            self.history.pop_front();
        }
        self.last_served = Some(sentence);
    }
}

/// Per-bucket usage memories behind one lock.
///
/// The whole read-modify-write of a pick happens under the lock, so
/// concurrent callers never draw from the same stale candidate set.
#[derive(Debug)]
pub struct UsageMemoryStore {
    history_cap: usize,
    memories: Mutex<HashMap<(Language, Difficulty), UsageMemory>>,
}

impl UsageMemoryStore {
    pub fn new(history_cap: usize) -> Self {
        Self {
            history_cap,
            memories: Mutex::new(HashMap::new()),
        }
    }

    pub fn pick<R: Rng + ?Sized>(
        &self,
        language: Language,
        difficulty: Difficulty,
        corpus: &[String],
        rng: &mut R,
    ) -> Option<String> {
        let mut memories = self.memories.lock().unwrap_or_else(|e| e.into_inner());
        let memory = memories
            .entry((language, difficulty))
            .or_insert_with(|| UsageMemory::new(self.history_cap));
        let pick = memory.pick(corpus, rng);
        debug!(
            "Corpus pick for {}/{}: {:?} (history {})",
            language,
            difficulty,
            pick,
            memory.history.len()
        );
        pick
    }

    pub fn snapshot(&self, language: Language, difficulty: Difficulty) -> Option<UsageMemory> {
        let memories = self.memories.lock().unwrap_or_else(|e| e.into_inner());
        memories.get(&(language, difficulty)).cloned()
    }

    /// Forget everything served so far
    pub fn clear(&self) {
        let mut memories = self.memories.lock().unwrap_or_else(|e| e.into_inner());
        memories.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn corpus() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_first_picks_cover_corpus_before_repeating() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut memory = UsageMemory::new(10);
        let corpus = corpus();

        let picks: HashSet<String> = (0..3)
            .map(|_| memory.pick(&corpus, &mut rng).unwrap())
            .collect();
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_cap_equal_to_bucket_covers_it_before_repeating() {
        let corpus: Vec<String> = (0..6).map(|i| format!("S{}", i)).collect();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut memory = UsageMemory::new(corpus.len());
            let picks: HashSet<String> = (0..corpus.len())
                .map(|_| memory.pick(&corpus, &mut rng).unwrap())
                .collect();
            assert_eq!(picks.len(), corpus.len());
        }
    }

    #[test]
    fn test_small_cap_only_avoids_recent_picks() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut memory = UsageMemory::new(1);
        let corpus = corpus();

        let mut previous = memory.pick(&corpus, &mut rng).unwrap();
        for _ in 0..50 {
            let next = memory.pick(&corpus, &mut rng).unwrap();
            assert_ne!(next, previous);
            assert_eq!(memory.history().count(), 1);
            previous = next;
        }
    }

    #[test]
    fn test_never_repeats_immediately() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut memory = UsageMemory::new(2);
        let corpus = corpus();

        let mut previous = memory.pick(&corpus, &mut rng).unwrap();
        for _ in 0..100 {
            let next = memory.pick(&corpus, &mut rng).unwrap();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn test_single_sentence_corpus_repeats() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsageMemory::new(4);
        let corpus = vec!["Only.".to_string()];
        assert_eq!(memory.pick(&corpus, &mut rng).as_deref(), Some("Only."));
        assert_eq!(memory.pick(&corpus, &mut rng).as_deref(), Some("Only."));
        assert_eq!(memory.history().count(), 1);
    }

    #[test]
    fn test_empty_corpus_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut memory = UsageMemory::new(4);
        assert!(memory.pick(&[], &mut rng).is_none());
        assert!(memory.last_served().is_none());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut memory = UsageMemory::new(2);
        let corpus: Vec<String> = (0..10).map(|i| format!("S{}", i)).collect();
        for _ in 0..10 {
            memory.pick(&corpus, &mut rng);
        }
        assert_eq!(memory.history().count(), 2);
        assert_eq!(memory.history().last(), memory.last_served());
    }

    #[test]
    fn test_store_keeps_buckets_apart_and_clears() {
        let mut rng = StdRng::seed_from_u64(5);
        let store = UsageMemoryStore::new(8);
        let corpus = corpus();

        store.pick(Language::Thai, Difficulty::Easy, &corpus, &mut rng);
        assert!(store.snapshot(Language::Thai, Difficulty::Easy).is_some());
        assert!(store.snapshot(Language::Thai, Difficulty::Hard).is_none());

        store.clear();
        assert!(store.snapshot(Language::Thai, Difficulty::Easy).is_none());
    }

    #[test]
    fn test_store_serializes_concurrent_picks() {
        let store = Arc::new(UsageMemoryStore::new(64));
        let corpus: Arc<Vec<String>> = Arc::new((0..8).map(|i| format!("S{}", i)).collect());

        let handles: Vec<_> = (0..8)
            .map(|seed| {
                let store = Arc::clone(&store);
                let corpus = Arc::clone(&corpus);
                std::thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed);
                    store
                        .pick(Language::English, Difficulty::Easy, &corpus, &mut rng)
                        .unwrap()
                })
            })
            .collect();

        let picks: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(picks.len(), 8);
    }
}
