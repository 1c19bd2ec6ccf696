use yew::prelude::*;

const NOT_FOUND_TITLE: &str = "페이지를 찾을 수 없습니다";
const NOT_FOUND_BACK: &str = "테스트로 돌아가기";

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ NOT_FOUND_TITLE }</h1>
            <button type="button" onclick={go_home}>{ NOT_FOUND_BACK }</button>
        </section>
    }
}
