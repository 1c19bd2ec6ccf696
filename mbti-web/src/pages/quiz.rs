use crate::components::question_card::QuestionCard;
use mbti_quiz::Question;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuizPageProps {
    /// Question awaiting an answer; `None` once the last one is answered.
    pub question: Option<Question>,
    pub answered: usize,
    pub total: usize,
    pub on_answer: Callback<bool>,
}

#[function_component(QuizPage)]
pub fn quiz_page(props: &QuizPageProps) -> Html {
    let progress = format!("{} / {}", props.answered, props.total);
    html! {
        <main class="quiz" id="main">
            <p class="quiz-progress" aria-live="polite">{ progress }</p>
            {
                props.question.as_ref().map_or_else(Html::default, |question| html! {
                    <QuestionCard
                        question={question.clone()}
                        on_answer={props.on_answer.clone()}
                    />
                })
            }
        </main>
    }
}
