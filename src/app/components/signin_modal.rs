//! The sign-in / sign-up modal.
//!
//! Purely a view of `GateView`: visibility, animation, tab and the submit
//! controls all come from the gate. Field values live in local signals until
//! submitted.

use dioxus::prelude::*;

use crate::app::gate_context::use_gate;
use crate::gate::{AuthTab, LoginForm, SignupForm, SubmitControl};

#[component]
pub fn SignInModal() -> Element {
    let ctx = use_gate();
    let view = ctx.view();

    if !view.modal.is_visible() {
        return rsx! {};
    }

    let animation = view.animation.css();
    let tab = view.tab;
    let backdrop_gate = ctx.gate.clone();
    let close_gate = ctx.gate.clone();
    let login_tab_gate = ctx.gate.clone();
    let signup_tab_gate = ctx.gate.clone();

    rsx! {
        div {
            class: "modal-overlay active",
            onclick: move |_| backdrop_gate.dismiss_backdrop(),
            div {
                class: "modal-container",
                style: "animation: {animation}",
                // Clicks inside the dialog never reach the backdrop
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| close_gate.close_modal(),
                    "×"
                }
                div { class: "modal-header",
                    h2 { "Welcome to Roll Paradise" }
                    p { class: "text-muted", "Sign in to order your favourite rolls" }
                }
                div { class: "auth-tabs",
                    button {
                        class: if tab == AuthTab::Login { "auth-tab active" } else { "auth-tab" },
                        r#type: "button",
                        onclick: move |_| login_tab_gate.switch_tab(AuthTab::Login),
                        "Sign In"
                    }
                    button {
                        class: if tab == AuthTab::Signup { "auth-tab active" } else { "auth-tab" },
                        r#type: "button",
                        onclick: move |_| signup_tab_gate.switch_tab(AuthTab::Signup),
                        "Sign Up"
                    }
                }
                LoginPanel { control: view.login_control, active: tab == AuthTab::Login }
                SignupPanel { control: view.signup_control, active: tab == AuthTab::Signup }
                SocialButtons {}
            }
        }
    }
}

#[component]
fn LoginPanel(control: SubmitControl, active: bool) -> Element {
    let ctx = use_gate();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let forgot_gate = ctx.gate.clone();

    rsx! {
        form {
            class: if active { "auth-form active" } else { "auth-form" },
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let form = LoginForm {
                    email: email(),
                    password: password(),
                };
                ctx.run(|gate| async move {
                    let _ = gate.submit_login(&form).await;
                });
            },
            div { class: "form-group",
                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            div { class: "form-group password-group",
                label { "Password" }
                input {
                    r#type: if show_password() { "text" } else { "password" },
                    placeholder: "Enter your password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button {
                    class: "password-toggle",
                    r#type: "button",
                    onclick: move |_| show_password.set(!show_password()),
                    if show_password() { "🙈" } else { "👁️" }
                }
            }
            div { class: "form-options",
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| forgot_gate.forgot_password(),
                    "Forgot password?"
                }
            }
            button {
                class: "btn btn-submit",
                r#type: "submit",
                disabled: control.disabled,
                "{control.label}"
            }
        }
    }
}

#[component]
fn SignupPanel(control: SubmitControl, active: bool) -> Element {
    let ctx = use_gate();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut terms_accepted = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    rsx! {
        form {
            class: if active { "auth-form active" } else { "auth-form" },
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let form = SignupForm {
                    full_name: full_name(),
                    email: email(),
                    phone: phone(),
                    password: password(),
                    terms_accepted: terms_accepted(),
                };
                ctx.run(|gate| async move {
                    let _ = gate.submit_signup(&form).await;
                });
            },
            div { class: "form-group",
                label { "Full Name" }
                input {
                    r#type: "text",
                    placeholder: "Enter your full name",
                    value: "{full_name}",
                    oninput: move |e| full_name.set(e.value()),
                }
            }
            div { class: "form-group",
                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            div { class: "form-group",
                label { "Phone" }
                input {
                    r#type: "tel",
                    placeholder: "Enter your phone number",
                    value: "{phone}",
                    oninput: move |e| phone.set(e.value()),
                }
            }
            div { class: "form-group password-group",
                label { "Password" }
                input {
                    r#type: if show_password() { "text" } else { "password" },
                    placeholder: "Create a password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button {
                    class: "password-toggle",
                    r#type: "button",
                    onclick: move |_| show_password.set(!show_password()),
                    if show_password() { "🙈" } else { "👁️" }
                }
            }
            label { class: "terms-checkbox",
                input {
                    r#type: "checkbox",
                    checked: terms_accepted(),
                    onchange: move |e| terms_accepted.set(e.checked()),
                }
                span { "I agree to the Terms of Service and Privacy Policy" }
            }
            button {
                class: "btn btn-submit",
                r#type: "submit",
                disabled: control.disabled,
                "{control.label}"
            }
        }
    }
}

#[component]
fn SocialButtons() -> Element {
    let ctx = use_gate();
    let google = ctx.gate.clone();
    let facebook = ctx.gate.clone();

    rsx! {
        div { class: "social-login",
            p { class: "divider", "or continue with" }
            button {
                class: "btn btn-social google",
                r#type: "button",
                onclick: move |_| google.social_login("google"),
                "Google"
            }
            button {
                class: "btn btn-social facebook",
                r#type: "button",
                onclick: move |_| facebook.social_login("facebook"),
                "Facebook"
            }
        }
    }
}
