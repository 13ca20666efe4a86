use dioxus::prelude::*;

use crate::components::nav;
use crate::core::session;

#[component]
pub fn LoginView() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *pending.peek() {
            return;
        }
        pending.set(true);
        error.set(None);

        let email_value = email.peek().clone();
        let password_value = password.peek().clone();
        spawn(async move {
            match session::client().login(&email_value, &password_value).await {
                Ok(admin) => {
                    session::sign_in(admin);
                    nav::go_dashboard();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "login",
            form { class: "login__card", onsubmit: submit,
                h1 { class: "login__title", "Login" }

                if let Some(message) = error() {
                    div { class: "error-banner", "{message}" }
                }

                label { class: "field",
                    span { class: "field__label", "Email" }
                    input {
                        class: "field__input",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                label { class: "field",
                    span { class: "field__label", "Password" }
                    input {
                        class: "field__input",
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary login__submit",
                    disabled: pending(),
                    if pending() { "Logging in..." } else { "Login" }
                }
            }
        }
    }
}
