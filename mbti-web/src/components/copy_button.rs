//! Button that copies the resolved code and briefly reports the outcome.
use crate::dom::{self, Timeout};
use mbti_quiz::{CopyFeedback, CopyStatus};
use thiserror::Error;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CopyError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Place `text` on the system clipboard.
///
/// # Errors
///
/// Returns an error when there is no browser window or the write promise rejects
/// (for example when permission is denied).
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn write_clipboard(text: &str) -> Result<(), CopyError> {
    let win = dom::window().ok_or(CopyError::Unavailable)?;
    let promise = win.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| CopyError::Rejected(dom::js_error_message(&err)))
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub code: AttrValue,
}

#[function_component(CopyButton)]
pub fn copy_button(p: &Props) -> Html {
    let status = use_state(|| CopyStatus::Idle);
    let feedback = use_mut_ref(CopyFeedback::new);
    let pending_reset = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let code = p.code.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let code = code.clone();
            let status = status.clone();
            let feedback = feedback.clone();
            let pending_reset = pending_reset.clone();
            spawn_local(async move {
                let copied = match write_clipboard(&code).await {
                    Ok(()) => true,
                    Err(err) => {
                        log::error!("copy of {code} failed: {err}");
                        false
                    }
                };
                let (ticket, delay) = feedback.borrow_mut().settle(copied);
                status.set(feedback.borrow().status());

                let reset = {
                    let status = status.clone();
                    let feedback = feedback.clone();
                    move || {
                        if feedback.borrow_mut().expire(ticket) {
                            status.set(CopyStatus::Idle);
                        }
                    }
                };
                // Dropping the previous handle clears its timer.
                *pending_reset.borrow_mut() = Timeout::schedule(delay, reset);
            });
        })
    };

    html! {
        <button type="button" class="copy-btn" data-status={format!("{:?}", *status)} {onclick}>
            { status.text() }
        </button>
    }
}
