use mbti_quiz::constants::STORAGE_KEY;
use mbti_quiz::{DecodeOutcome, ResultStore, StorageError, decode_from_store};
use mbti_web::dom;
use mbti_web::router::Route;
use mbti_web::storage::WebResultStore;
use yew_router::Routable;

#[test]
fn routes_round_trip_through_paths() {
    assert_eq!(Route::recognize("/"), Some(Route::Quiz));
    assert_eq!(Route::recognize("/result"), Some(Route::Result));
    assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    assert_eq!(Route::Result.to_path(), "/result");
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn browser_helpers_degrade_off_the_web() {
    assert!(dom::window().is_none());
    assert!(dom::document().is_none());
    assert!(dom::Timeout::schedule(10, || {}).is_none());

    let store = WebResultStore;
    assert!(matches!(
        store.write(STORAGE_KEY, "ESTJ"),
        Err(StorageError::Unavailable(_))
    ));
    assert_eq!(decode_from_store(&store, STORAGE_KEY), DecodeOutcome::Missing);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test::wasm_bindgen_test]
fn js_error_message_prefers_string_payloads() {
    let value = wasm_bindgen::JsValue::from_str("denied");
    assert_eq!(dom::js_error_message(&value), "denied");
}
