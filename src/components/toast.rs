use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::state::session::ToastKind;

/// Auto-dismiss delay.
const TOAST_DURATION_MS: u32 = 2_500;

#[function_component(Toast)]
pub fn toast() -> Html {
    let session = use_session();
    let message = session.toast();

    // Arm a dismiss timer whenever a new message appears; dropping the
    // timeout on cleanup cancels it if the message changes first.
    {
        let session = session.clone();
        use_effect_with(message.clone(), move |message| {
            let timeout = message.as_ref().map(|_| {
                Timeout::new(TOAST_DURATION_MS, move || session.dismiss_toast())
            });
            move || drop(timeout)
        });
    }

    let Some(message) = message else {
        return html! {};
    };

    let class = match message.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    let close = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dismiss_toast())
    };

    html! {
        <div class={class}>
            <span>{message.text.clone()}</span>
            <button class="toast-close" onclick={close}>{"✕"}</button>
        </div>
    }
}
