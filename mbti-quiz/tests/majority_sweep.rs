use std::collections::{BTreeMap, HashSet};
use std::hash::Hasher;

use mbti_quiz::{Axis, Letter, MemoryStore, QuestionBank, QuizEngine, Tally, TypologyCode};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use twox_hash::XxHash64;

fn answers_from_bits(bits: u16, len: usize) -> Vec<bool> {
    (0..len).map(|i| bits & (1 << i) != 0).collect()
}

fn expected_letter(bank: &QuestionBank, answers: &[bool], axis: Axis) -> Letter {
    let (mut first, mut second) = (0_u32, 0_u32);
    for (question, is_yes) in bank.iter().zip(answers) {
        let letter = question.letter_for(*is_yes);
        if letter == axis.first() {
            first += 1;
        } else if letter == axis.second() {
            second += 1;
        }
    }
    if second > first { axis.second() } else { axis.first() }
}

#[test]
fn every_answer_combination_resolves_by_axis_majority() {
    let engine = QuizEngine::with_builtin_bank(MemoryStore::new()).unwrap();
    let len = engine.bank().len();
    assert_eq!(len, 12);

    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for bits in 0..(1_u16 << len) {
        let answers = answers_from_bits(bits, len);
        let mut session = engine.start_session();
        for is_yes in &answers {
            engine.answer(&mut session, *is_yes).unwrap();
        }
        let code = session.code().unwrap();
        for axis in Axis::ALL {
            assert_eq!(
                code.letter(axis),
                expected_letter(engine.bank(), &answers, axis),
                "answers {bits:012b} axis {axis}"
            );
        }
        assert_eq!(Tally::from_letters(session.trail()).to_code(), code);
        *seen.entry(code.to_string()).or_default() += 1;
    }

    // Three questions per axis means no ties, so all 16 codes are reachable.
    assert_eq!(seen.len(), 16);
    assert!(seen.values().all(|count| *count == 256));
}

#[test]
fn seeded_random_sessions_are_reproducible() {
    let run = |seed: u64| {
        let engine = QuizEngine::with_builtin_bank(MemoryStore::new()).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        (0..64)
            .map(|_| {
                let mut session = engine.start_session();
                while !session.is_complete() {
                    engine.answer(&mut session, rng.gen_bool(0.5)).unwrap();
                }
                session.code().unwrap()
            })
            .collect::<Vec<TypologyCode>>()
    };
    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}

#[test]
fn label_table_digests_are_distinct_and_stable() {
    let digest = |text: &str| {
        let mut hasher = XxHash64::with_seed(0);
        hasher.write(text.as_bytes());
        hasher.finish()
    };
    let digests: HashSet<u64> = TypologyCode::all()
        .iter()
        .filter_map(|code| mbti_quiz::labels::lookup(&code.to_string()))
        .map(digest)
        .collect();
    assert_eq!(digests.len(), 16);

    let bank = QuestionBank::builtin().unwrap();
    let canonical = serde_json::to_string_pretty(&bank).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&canonical).unwrap();
    let reloaded = QuestionBank::from_json(&reparsed.to_string()).unwrap();
    assert_eq!(
        digest(&canonical),
        digest(&serde_json::to_string_pretty(&reloaded).unwrap()),
        "question bank does not survive a serialize/load cycle\n{canonical}"
    );
}
