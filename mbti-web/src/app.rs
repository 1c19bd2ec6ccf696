//! Router wiring and the page controllers.
use crate::dom;
use crate::pages::{not_found::NotFound, quiz::QuizPage, result::ResultPage};
use crate::router::Route;
use crate::storage::WebResultStore;
use mbti_quiz::constants::STORAGE_KEY;
use mbti_quiz::{EngineError, QuizEngine, ResultView, Step, decode_from_store};
use yew::prelude::*;
use yew_router::prelude::*;

const BANK_UNAVAILABLE: &str = "질문을 불러올 수 없습니다.";

type Engine = QuizEngine<WebResultStore>;

fn build_engine() -> Option<Engine> {
    match QuizEngine::with_builtin_bank(WebResultStore) {
        Ok(engine) => Some(engine),
        Err(err) => {
            dom::console_error(&format!("Failed to load question bank: {err}"));
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Page for a matched route.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Quiz => html! { <QuizController /> },
        Route::Result => html! { <ResultController /> },
        Route::NotFound => html! { <NotFoundController /> },
    }
}

fn navigate_to(navigator: Option<Navigator>, route: Route) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

/// Owns the session; persists and moves to the result page on completion.
#[function_component(QuizController)]
pub fn quiz_controller() -> Html {
    let engine = use_memo((), |_| build_engine());
    let session = {
        let engine = engine.clone();
        use_mut_ref(move || (*engine).as_ref().map(Engine::start_session))
    };
    let rerender = use_force_update();
    let to_result = navigate_to(use_navigator(), Route::Result);

    let on_answer = {
        let engine = engine.clone();
        let session = session.clone();
        Callback::from(move |is_yes: bool| {
            let Some(engine) = (*engine).as_ref() else {
                return;
            };
            let mut slot = session.borrow_mut();
            let Some(current) = slot.as_mut() else {
                return;
            };
            let step = engine.answer(current, is_yes);
            drop(slot);
            rerender.force_update();

            match step {
                Ok(Step::Next(_)) => {}
                Ok(Step::Complete(code)) => {
                    log::info!("quiz finished as {code}");
                    to_result.emit(());
                }
                Err(EngineError::Persist(err)) => {
                    dom::console_error(&format!("Failed to save result: {err}"));
                    to_result.emit(());
                }
                Err(EngineError::Quiz(err)) => log::warn!("ignored answer: {err}"),
            }
        })
    };

    let current = session.borrow();
    let Some(current) = current.as_ref() else {
        return html! { <p class="error" role="alert">{ BANK_UNAVAILABLE }</p> };
    };
    html! {
        <QuizPage
            question={current.current_question().cloned()}
            answered={current.answered()}
            total={current.total()}
            {on_answer}
        />
    }
}

/// Decodes the stored result once per visit.
#[function_component(ResultController)]
pub fn result_controller() -> Html {
    let view = use_memo((), |_| {
        ResultView::render(&decode_from_store(&WebResultStore, STORAGE_KEY))
    });
    let on_restart = navigate_to(use_navigator(), Route::Quiz);
    html! { <ResultPage view={(*view).clone()} {on_restart} /> }
}

#[function_component(NotFoundController)]
pub fn not_found_controller() -> Html {
    let on_go_home = navigate_to(use_navigator(), Route::Quiz);
    html! { <NotFound {on_go_home} /> }
}
