use crate::components::copy_button::CopyButton;
use mbti_quiz::ResultView;
use mbti_quiz::constants::RESTART_TEXT;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultPageProps {
    pub view: ResultView,
    pub on_restart: Callback<()>,
}

#[function_component(ResultPage)]
pub fn result_page(props: &ResultPageProps) -> Html {
    let restart = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <main class="result" id="main">
            <h1 id="result" aria-live="polite">{ props.view.message.clone() }</h1>
            {
                props.view.copy_text().map_or_else(Html::default, |code| html! {
                    <CopyButton code={AttrValue::from(code.to_string())} />
                })
            }
            <button type="button" class="restart" onclick={restart}>{ RESTART_TEXT }</button>
        </main>
    }
}
