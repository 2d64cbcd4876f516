use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{Contact, ContactFormData};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    /// `None` creates a new contact, `Some` edits an existing one.
    #[prop_or_default]
    pub contact: Option<Contact>,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let session = use_session();
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let email_ref = use_node_ref();

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_submit = {
        let session = session.clone();
        let on_close = props.on_close.clone();
        let editing = props.contact.as_ref().map(|c| c.id.clone());
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let email_ref = email_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let values = (
                name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
            );

            if let (Some(name), Some(phone), Some(email)) = values {
                let data = ContactFormData {
                    name: name.value(),
                    phone: phone.value(),
                    email: email.value(),
                };

                if data.name.is_empty() || data.email.is_empty() {
                    if let Some(win) = window() {
                        let _ = win.alert_with_message("Name and email are required");
                    }
                    return;
                }

                let session = session.clone();
                let editing = editing.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match editing {
                        Some(contact_id) => session.update_contact(contact_id, data).await,
                        None => session.create_contact(data).await,
                    }
                });
                on_close.emit(());
            }
        })
    };

    let (title, action) = match &props.contact {
        Some(_) => ("Edit contact", "Save changes"),
        None => ("New contact", "Create contact"),
    };

    html! {
        <div class="modal-backdrop" onclick={close_click.clone()}>
            <div class="modal" onclick={stop}>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" onclick={close_click}>{"✕"}</button>
                </div>

                <form class="modal-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="contact-name">{"Name"}</label>
                        <input
                            type="text"
                            id="contact-name"
                            value={props.contact.as_ref().map(|c| c.name.clone()).unwrap_or_default()}
                            ref={name_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact-phone">{"Phone"}</label>
                        <input
                            type="tel"
                            id="contact-phone"
                            value={props.contact.as_ref().map(|c| c.phone.clone()).unwrap_or_default()}
                            ref={phone_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact-email">{"Email"}</label>
                        <input
                            type="email"
                            id="contact-email"
                            value={props.contact.as_ref().map(|c| c.email.clone()).unwrap_or_default()}
                            ref={email_ref}
                        />
                    </div>

                    <button type="submit" class="primary-button">{action}</button>
                </form>
            </div>
        </div>
    }
}
