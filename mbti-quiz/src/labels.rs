//! Code-to-label table and the text shown on the result page.
use crate::constants::{MSG_NOT_FOUND, MSG_UNMAPPED_PREFIX, MSG_UNREADABLE, MSG_UNRECOGNIZED_PREFIX};
use crate::decode::{DecodeOutcome, ResolvedCode};

const LABELS: [(&str, &str); 16] = [
    ("ISTJ", "논리적인 책임자 (ISTJ)"),
    ("ISFJ", "헌신적인 수호자 (ISFJ)"),
    ("INFJ", "통찰력 있는 상담자 (INFJ)"),
    ("INTJ", "전략적인 계획자 (INTJ)"),
    ("ISTP", "현실적인 기술자 (ISTP)"),
    ("ISFP", "온화한 예술가 (ISFP)"),
    ("INFP", "이상적인 중재자 (INFP)"),
    ("INTP", "분석적인 사색가 (INTP)"),
    ("ESTP", "활동적인 촉진자 (ESTP)"),
    ("ESFP", "사교적인 연예인 (ESFP)"),
    ("ENFP", "열정적인 활동가 (ENFP)"),
    ("ENTP", "창의적인 발명가 (ENTP)"),
    ("ESTJ", "결단력 있는 관리자 (ESTJ)"),
    ("ESFJ", "사교적인 조력자 (ESFJ)"),
    ("ENFJ", "영감을 주는 지도자 (ENFJ)"),
    ("ENTJ", "단호한 지도자 (ENTJ)"),
];

/// Label for an uppercase code, if the table has one.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static str> {
    LABELS
        .iter()
        .find_map(|(key, label)| (*key == code).then_some(*label))
}

/// Label for a resolved code, or the raw code behind a generic notice.
#[must_use]
pub fn label_for(code: &ResolvedCode) -> String {
    lookup(code.as_str()).map_or_else(
        || format!("{MSG_UNMAPPED_PREFIX}{code}"),
        ToString::to_string,
    )
}

/// What the result page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub message: String,
    /// Present only when a code was resolved; drives the copy button.
    pub code: Option<ResolvedCode>,
}

impl ResultView {
    #[must_use]
    pub fn render(outcome: &DecodeOutcome) -> Self {
        match outcome {
            DecodeOutcome::Resolved { code, .. } => Self {
                message: label_for(code),
                code: Some(code.clone()),
            },
            DecodeOutcome::Missing => Self::notice(MSG_NOT_FOUND.to_string()),
            DecodeOutcome::Unrecognized(text) => {
                Self::notice(format!("{MSG_UNRECOGNIZED_PREFIX}{text}"))
            }
            DecodeOutcome::Unreadable => Self::notice(MSG_UNREADABLE.to_string()),
        }
    }

    const fn notice(message: String) -> Self {
        Self {
            message,
            code: None,
        }
    }

    /// Text placed on the clipboard by the copy button.
    #[must_use]
    pub fn copy_text(&self) -> Option<&str> {
        self.code.as_ref().map(ResolvedCode::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::TypologyCode;
    use crate::decode::decode;

    #[test]
    fn table_covers_every_code_once() {
        for code in TypologyCode::all() {
            let key = code.to_string();
            let label = lookup(&key).unwrap_or_else(|| panic!("no label for {key}"));
            assert!(label.ends_with(&format!("({key})")));
        }
        let mut keys: Vec<_> = LABELS.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 16);
    }

    #[test]
    fn resolved_codes_render_label_and_expose_copy_text() {
        let view = ResultView::render(&decode(Some("estj")));
        assert_eq!(view.message, "결단력 있는 관리자 (ESTJ)");
        assert_eq!(view.copy_text(), Some("ESTJ"));
    }

    #[test]
    fn off_axis_codes_fall_back_to_raw_code() {
        let view = ResultView::render(&decode(Some("EEEE")));
        assert_eq!(view.message, "당신의 MBTI: EEEE");
        assert_eq!(view.copy_text(), Some("EEEE"));
    }

    #[test]
    fn diagnostics_hide_the_copy_button() {
        let missing = ResultView::render(&decode(None));
        assert_eq!(missing.message, MSG_NOT_FOUND);
        assert!(missing.code.is_none());

        let odd = ResultView::render(&decode(Some("[1,2,3]")));
        assert_eq!(odd.message, "알 수 없는 형식의 결과: [1,2,3]");
        assert!(odd.copy_text().is_none());

        let broken = ResultView::render(&decode(Some("{not json")));
        assert_eq!(broken.message, MSG_UNREADABLE);
    }
}
