use dioxus::prelude::*;
use lahwita_shared::RegisterRequest;

use crate::auth_session::AuthContext;
use crate::components::ui::{
    Button, ButtonVariant, Card, ErrorBanner, FormHeader, InputType, TextInput,
};
use crate::views::auth_layout::{AuthLayout, Disclaimer};
use crate::Route;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let nav = use_navigator();

    rsx! {
        AuthLayout {
            Card {
                form {
                    class: "p-6 md:p-8 flex flex-col gap-6",
                    onsubmit: move |e| async move {
                        e.prevent_default();
                        if is_submitting() {
                            return;
                        }
                        error.set(None);

                        if password.read().chars().count() < MIN_PASSWORD_LEN {
                            error.set(Some(format!(
                                "Password must be at least {MIN_PASSWORD_LEN} characters."
                            )));
                            return;
                        }

                        is_submitting.set(true);
                        let req = RegisterRequest::new(
                            email.read().trim(),
                            password.read().clone(),
                            Some(phone.read().clone()),
                        );
                        let mut auth = auth;
                        match auth.register(&req).await {
                            Ok(()) => {
                                nav.push(Route::Chat {});
                            }
                            Err(e) => {
                                crate::log_warn!("registration failed: {e}");
                                error.set(Some(e.field_errors().register_message()));
                            }
                        }
                        is_submitting.set(false);
                    },
                    FormHeader {
                        title: "Create an account".to_string(),
                        subtitle: Some("Get started with Lahwita".to_string()),
                    }
                    ErrorBanner { message: error.cloned() }
                    TextInput {
                        id: "email".to_string(),
                        label: "Email".to_string(),
                        value: email.cloned(),
                        input_type: Some(InputType::Email),
                        placeholder: Some("you@example.com".to_string()),
                        required: Some(true),
                        disabled: Some(is_submitting()),
                        oninput: move |e: FormEvent| email.set(e.value()),
                    }
                    TextInput {
                        id: "password".to_string(),
                        label: "Password".to_string(),
                        value: password.cloned(),
                        input_type: Some(InputType::Password),
                        placeholder: Some("Minimum 8 characters".to_string()),
                        required: Some(true),
                        minlength: Some(MIN_PASSWORD_LEN as u32),
                        disabled: Some(is_submitting()),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                    TextInput {
                        id: "phone".to_string(),
                        label: "Phone".to_string(),
                        hint: Some("(optional)".to_string()),
                        value: phone.cloned(),
                        input_type: Some(InputType::Tel),
                        placeholder: Some("+1 555 123 4567".to_string()),
                        disabled: Some(is_submitting()),
                        oninput: move |e: FormEvent| phone.set(e.value()),
                    }
                    Button {
                        r#type: Some("submit".to_string()),
                        variant: Some(ButtonVariant::Primary),
                        class: Some("w-full py-3 text-base mt-2".to_string()),
                        disabled: Some(is_submitting()),
                        if is_submitting() {
                            "Creating account..."
                        } else {
                            "Create account"
                        }
                    }
                    p { class: "text-center text-sm text-[#2A1A12]/60",
                        "Already have an account? "
                        Link {
                            class: "text-[#8B3A1E] hover:underline",
                            to: Route::Login {},
                            "Sign in"
                        }
                    }
                }
            }
            Disclaimer {}
        }
    }
}
