//! Storage key, timings, and user-facing text shared by every front end.

/// Shared-storage key holding the persisted result.
pub const STORAGE_KEY: &str = "mbti_result";

// Copy feedback ------------------------------------------------------------
pub const COPY_SUCCESS_RESET_MS: u32 = 1_500;
pub const COPY_FAILURE_RESET_MS: u32 = 2_000;
pub const COPY_IDLE_TEXT: &str = "MBTI 복사";
pub const COPY_SUCCESS_TEXT: &str = "복사됨!";
pub const COPY_FAILURE_TEXT: &str = "복사 불가 — 수동 복사하세요";

// Result page messages -----------------------------------------------------
pub const MSG_NOT_FOUND: &str = "결과를 찾을 수 없습니다. 테스트를 먼저 완료하세요.";
pub const MSG_UNRECOGNIZED_PREFIX: &str = "알 수 없는 형식의 결과: ";
pub const MSG_UNREADABLE: &str = "결과를 읽어올 수 없습니다 (형식 오류).";
pub const MSG_UNMAPPED_PREFIX: &str = "당신의 MBTI: ";

// Quiz page ----------------------------------------------------------------
pub const QUESTION_ORDINAL_PREFIX: &str = "질문 ";
pub const ANSWER_YES_TEXT: &str = "예";
pub const ANSWER_NO_TEXT: &str = "아니오";
pub const RESTART_TEXT: &str = "다시 하기";
