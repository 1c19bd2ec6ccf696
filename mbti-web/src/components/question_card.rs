use mbti_quiz::Question;
use mbti_quiz::constants::{ANSWER_NO_TEXT, ANSWER_YES_TEXT, QUESTION_ORDINAL_PREFIX};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub question: Question,
    pub on_answer: Callback<bool>,
}

/// Ordinal label, prompt text, and the yes/no buttons for one question.
#[function_component(QuestionCard)]
pub fn question_card(p: &Props) -> Html {
    let answer = |is_yes: bool| {
        let cb = p.on_answer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(is_yes))
    };

    html! {
        <section class="question-card" data-question-id={p.question.id.to_string()}>
            <h2 id="question-number">{ format!("{QUESTION_ORDINAL_PREFIX}{}", p.question.id) }</h2>
            <p id="question-text">{ p.question.text.clone() }</p>
            <div class="answers">
                <button type="button" id="yes-btn" onclick={answer(true)}>{ ANSWER_YES_TEXT }</button>
                <button type="button" id="no-btn" onclick={answer(false)}>{ ANSWER_NO_TEXT }</button>
            </div>
        </section>
    }
}
