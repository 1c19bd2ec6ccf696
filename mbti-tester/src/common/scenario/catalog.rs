use anyhow::{Context, Result, anyhow, ensure};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::BTreeMap;

use super::{ScenarioCtx, TestScenario};
use crate::logic::answers::{
    answers_from_bits, expected_code, format_answers, random_answers,
};
use crate::store::FileStore;
use mbti_quiz::constants::{MSG_NOT_FOUND, MSG_UNREADABLE, MSG_UNRECOGNIZED_PREFIX, STORAGE_KEY};
use mbti_quiz::{
    DecodeOutcome, MemoryStore, QuizEngine, ResultStore, ResultView, Step, Strategy,
    TypologyCode, decode, labels,
};

pub fn catalog_scenarios() -> Vec<TestScenario> {
    vec![
        TestScenario {
            key: "majority-sweep",
            name: "Axis Majority Sweep",
            description: "Every yes/no trail resolves each axis by majority",
            seeded: false,
            check: majority_sweep,
        },
        TestScenario {
            key: "label-roundtrip",
            name: "Label Round Trip",
            description: "All 16 codes decode from bare and JSON-string shapes to their labels",
            seeded: false,
            check: label_roundtrip,
        },
        TestScenario {
            key: "tie-break",
            name: "Tie Break",
            description: "Tied letter counts resolve to the first letter of each axis",
            seeded: false,
            check: tie_break,
        },
        TestScenario {
            key: "decode-shapes",
            name: "Decode Shapes",
            description: "Missing, malformed, unknown and pair-score values render the right text",
            seeded: false,
            check: decode_shapes,
        },
        TestScenario {
            key: "end-to-end",
            name: "End To End",
            description: "A fixed trail stores ESTJ in a file store and renders its label",
            seeded: false,
            check: end_to_end,
        },
        TestScenario {
            key: "random-sessions",
            name: "Random Sessions",
            description: "Seeded random trails match an independent majority count",
            seeded: true,
            check: random_session,
        },
    ]
}

fn engine() -> Result<QuizEngine<MemoryStore>> {
    QuizEngine::with_builtin_bank(MemoryStore::new()).context("loading question bank")
}

/// Play `answers` to completion and return the finished code.
fn play<S: ResultStore>(engine: &QuizEngine<S>, answers: &[bool]) -> Result<TypologyCode> {
    let mut session = engine.start_session();
    for is_yes in answers {
        if let Step::Complete(code) = engine
            .answer(&mut session, *is_yes)
            .map_err(|err| anyhow!("{err}"))?
        {
            return Ok(code);
        }
    }
    Err(anyhow!(
        "session incomplete after {} answers",
        session.answered()
    ))
}

fn majority_sweep(_ctx: &ScenarioCtx<'_>) -> Result<String> {
    let engine = engine()?;
    let len = engine.bank().len();
    ensure!(len <= 20, "bank of {len} questions is too large to sweep");
    let mut reached: BTreeMap<String, usize> = BTreeMap::new();
    for bits in 0..(1_u32 << len) {
        let answers = answers_from_bits(bits, len);
        let code = play(&engine, &answers)?;
        let expected = expected_code(engine.bank(), &answers);
        ensure!(
            code == expected,
            "trail {} gave {code}, expected {expected}",
            format_answers(&answers)
        );
        *reached.entry(code.to_string()).or_default() += 1;
    }
    Ok(format!(
        "{} trails, {} distinct codes",
        1_u32 << len,
        reached.len()
    ))
}

fn label_roundtrip(_ctx: &ScenarioCtx<'_>) -> Result<String> {
    let codes = TypologyCode::all();
    for code in &codes {
        let bare = code.to_string();
        let label = labels::lookup(&bare).ok_or_else(|| anyhow!("no label for {bare}"))?;
        for (raw, via) in [
            (bare.to_lowercase(), Strategy::BareCode),
            (serde_json::to_string(&bare)?, Strategy::JsonString),
        ] {
            let outcome = decode(Some(&raw));
            let DecodeOutcome::Resolved { code: resolved, via: used } = &outcome else {
                return Err(anyhow!("{raw} did not resolve: {outcome:?}"));
            };
            ensure!(*used == via, "{raw} resolved via {used}, expected {via}");
            ensure!(resolved.as_str() == bare, "{raw} resolved to {resolved}");
            let view = ResultView::render(&outcome);
            ensure!(view.message == label, "{raw} rendered '{}'", view.message);
        }
    }
    Ok(format!("{} codes", codes.len()))
}

fn tie_break(_ctx: &ScenarioCtx<'_>) -> Result<String> {
    let raw = r#"{"E":2,"I":2,"S":1,"N":0,"T":0,"F":0,"J":1,"P":1}"#;
    let outcome = decode(Some(raw));
    let code = outcome
        .code()
        .ok_or_else(|| anyhow!("counts object did not resolve: {outcome:?}"))?;
    ensure!(code.as_str() == "ESTJ", "tied counts gave {code}");
    let empty = decode(Some("{}"));
    ensure!(
        empty.code().map(|c| c.as_str()) == Some("ESTJ"),
        "empty object gave {empty:?}"
    );
    Ok("ties resolve to ESTJ".to_string())
}

fn decode_shapes(_ctx: &ScenarioCtx<'_>) -> Result<String> {
    let cases: [(Option<&str>, String); 6] = [
        (None, MSG_NOT_FOUND.to_string()),
        (Some("{not json"), MSG_UNREADABLE.to_string()),
        (Some("[1,2,3]"), format!("{MSG_UNRECOGNIZED_PREFIX}[1,2,3]")),
        (Some("\"hello\""), format!("{MSG_UNRECOGNIZED_PREFIX}hello")),
        (
            Some(r#"{"EI":-2,"SN":-1,"TF":0,"JP":-3}"#),
            "분석적인 사색가 (INTP)".to_string(),
        ),
        (Some("eeee"), "당신의 MBTI: EEEE".to_string()),
    ];
    for (raw, expected) in &cases {
        let view = ResultView::render(&decode(*raw));
        ensure!(
            view.message == *expected,
            "{raw:?} rendered '{}', expected '{expected}'",
            view.message
        );
    }
    Ok(format!("{} shapes", cases.len()))
}

const ESTJ_TRAIL: [bool; 12] = [
    true, false, true, false, true, false, true, false, true, true, false, true,
];

fn end_to_end(ctx: &ScenarioCtx<'_>) -> Result<String> {
    let store = FileStore::new(ctx.store_path);
    let engine = QuizEngine::with_builtin_bank(store).context("loading question bank")?;
    let code = play(&engine, &ESTJ_TRAIL)?;
    ensure!(code.to_string() == "ESTJ", "fixed trail gave {code}");

    let stored = engine
        .store()
        .read(STORAGE_KEY)
        .with_context(|| format!("reading {}", ctx.store_path.display()))?;
    ensure!(
        stored.as_deref() == Some("ESTJ"),
        "store holds {stored:?}"
    );
    let view = engine.load_result();
    ensure!(
        view.message == "결단력 있는 관리자 (ESTJ)",
        "result page shows '{}'",
        view.message
    );
    Ok(format!("stored in {}", ctx.store_path.display()))
}

fn random_session(ctx: &ScenarioCtx<'_>) -> Result<String> {
    let iteration = u64::try_from(ctx.iteration).unwrap_or(u64::MAX);
    let mut rng = ChaCha20Rng::seed_from_u64(ctx.seed.wrapping_add(iteration));
    let engine = engine()?;
    let answers = random_answers(&mut rng, engine.bank().len());
    let code = play(&engine, &answers)?;
    let expected = expected_code(engine.bank(), &answers);
    ensure!(
        code == expected,
        "trail {} gave {code}, expected {expected}",
        format_answers(&answers)
    );
    let resolved = engine.stored_outcome();
    ensure!(
        resolved.code().and_then(|c| c.typology()) == Some(code),
        "stored value decoded to {resolved:?}"
    );
    let detail = format!("{} -> {code}", format_answers(&answers));
    if ctx.verbose {
        println!("     seed {} iteration {}: {detail}", ctx.seed, ctx.iteration);
    }
    Ok(detail)
}
