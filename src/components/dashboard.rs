use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::Contact;

use super::ContactModal;

/// What the contact modal is currently doing, if open.
#[derive(Clone, PartialEq)]
enum ModalMode {
    Create,
    Edit(Contact),
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();
    let modal = use_state(|| None::<ModalMode>);

    let customer = session.customer();
    let contacts = session.contacts();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.logout())
    };

    let open_create = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(Some(ModalMode::Create)))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    let header = match &customer {
        Some(customer) => html! {
            <>
                <p>{format!("Hello, {}!", customer.customer_name)}</p>
                <span>{customer.email.clone()}</span>
            </>
        },
        None => html! { <p>{"Loading your profile..."}</p> },
    };

    html! {
        <div class="container-dashboard">
            <nav class="dashboard-nav">
                <h1 class="logo">{"Infinity Contacts"}</h1>
                <button onclick={on_logout}>{"Logout"}</button>
            </nav>

            <header class="dashboard-header">
                { header }
            </header>

            <div class="contacts-panel">
                <div class="contacts-title">
                    <h2>{"Contacts"}</h2>
                    <button class="add-button" onclick={open_create} title="Add contact">{"+"}</button>
                </div>

                if contacts.is_empty() {
                    <p class="contacts-empty">{"No contacts yet. Add the first one!"}</p>
                } else {
                    <ul class="contacts-list">
                        { for contacts.iter().map(|contact| contact_row(contact, &session, &modal)) }
                    </ul>
                }
            </div>

            if let Some(mode) = (*modal).clone() {
                <ContactModal
                    contact={match mode { ModalMode::Create => None, ModalMode::Edit(c) => Some(c) }}
                    on_close={close_modal}
                />
            }
        </div>
    }
}

fn contact_row(
    contact: &Contact,
    session: &crate::hooks::SessionHandle,
    modal: &UseStateHandle<Option<ModalMode>>,
) -> Html {
    let open_edit = {
        let modal = modal.clone();
        let contact = contact.clone();
        Callback::from(move |_: MouseEvent| modal.set(Some(ModalMode::Edit(contact.clone()))))
    };

    let on_delete = {
        let session = session.clone();
        let contact_id = contact.id.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let contact_id = contact_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                session.delete_contact(contact_id).await;
            });
        })
    };

    html! {
        <li key={contact.id.clone()}>
            <h2>{contact.name.clone()}</h2>
            <h3>{contact.phone.clone()}</h3>
            <h5>{contact.email.clone()}</h5>
            <span class="contact-since">
                {format!("since {}", contact.created_at.format("%d/%m/%Y"))}
            </span>
            <button class="edit-button" onclick={open_edit}>{"Edit"}</button>
            <button class="delete-button" onclick={on_delete}>{"Delete"}</button>
        </li>
    }
}
