use mbti_quiz::constants::STORAGE_KEY;
use mbti_quiz::{
    DecodeOutcome, MemoryStore, QuizEngine, ResultStore, Step, Strategy, TypologyCode, decode,
    label_for, labels,
};

/// Yes/no choices that produce E,E,E,S,S,S,T,T,T,J,J,J on the shipped bank.
const ESTJ_ANSWERS: [bool; 12] = [
    true, false, true, false, true, false, true, false, true, true, false, true,
];

#[test]
fn twelve_answers_write_estj_and_render_its_label() {
    let store = MemoryStore::new();
    let engine = QuizEngine::with_builtin_bank(store.clone()).unwrap();
    let mut session = engine.start_session();

    let mut steps = Vec::new();
    for is_yes in ESTJ_ANSWERS {
        steps.push(engine.answer(&mut session, is_yes).unwrap());
    }
    let letters: String = session.trail().iter().map(|l| l.as_char()).collect();
    assert_eq!(letters, "EEESSSTTTJJJ");
    assert_eq!(steps[..11], (1..12).map(Step::Next).collect::<Vec<_>>()[..]);
    assert_eq!(store.read(STORAGE_KEY).unwrap().as_deref(), Some("ESTJ"));

    let view = engine.load_result();
    assert_eq!(view.message, "결단력 있는 관리자 (ESTJ)");
    assert_eq!(view.copy_text(), Some("ESTJ"));
}

#[test]
fn every_code_survives_the_bare_string_round_trip() {
    for code in TypologyCode::all() {
        for raw in [code.to_string(), code.to_string().to_lowercase()] {
            let outcome = decode(Some(&raw));
            let DecodeOutcome::Resolved { code: resolved, via } = outcome else {
                panic!("{raw} did not resolve: {outcome:?}");
            };
            assert_eq!(via, Strategy::BareCode);
            assert_eq!(resolved.typology(), Some(code));
            assert_eq!(Some(label_for(&resolved).as_str()), labels::lookup(&code.to_string()));
        }
    }
}

#[test]
fn json_encoded_code_matches_bare_code() {
    for code in TypologyCode::all() {
        let quoted = serde_json::to_string(&code).unwrap();
        assert_eq!(
            decode(Some(&quoted)).code(),
            decode(Some(&code.to_string())).code()
        );
    }
}

#[test]
fn counts_object_with_ties_resolves_to_first_letters() {
    let raw = r#"{"E":2,"I":2,"S":1,"N":0,"T":0,"F":0,"J":1,"P":1}"#;
    let outcome = decode(Some(raw));
    assert_eq!(outcome.code().map(|c| c.as_str()), Some("ESTJ"));
}

#[test]
fn pair_score_keys_resolve_in_either_order() {
    assert_eq!(
        decode(Some(r#"{"IE":5,"NS":1,"FT":2,"PJ":3}"#))
            .code()
            .map(|c| c.to_string()),
        Some("INFP".to_string())
    );
    assert_eq!(
        decode(Some(r#"{"ei":5,"sn":1,"tf":2,"jp":3}"#))
            .code()
            .map(|c| c.to_string()),
        Some("ESTJ".to_string())
    );
}

#[test]
fn result_page_diagnostics() {
    let cases = [
        (None, "결과를 찾을 수 없습니다. 테스트를 먼저 완료하세요."),
        (Some("{not json"), "결과를 읽어올 수 없습니다 (형식 오류)."),
        (Some("[1,2,3]"), "알 수 없는 형식의 결과: [1,2,3]"),
        (Some("true"), "알 수 없는 형식의 결과: true"),
    ];
    for (raw, expected) in cases {
        let store = match raw {
            Some(value) => MemoryStore::new().with_entry(STORAGE_KEY, value),
            None => MemoryStore::new(),
        };
        let engine = QuizEngine::with_builtin_bank(store).unwrap();
        let view = engine.load_result();
        assert_eq!(view.message, expected, "raw {raw:?}");
        assert!(view.code.is_none());
    }
}
