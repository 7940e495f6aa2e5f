use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::components::ui::{
    Button, ButtonVariant, Card, ErrorBanner, FormHeader, InputType, TextInput,
};
use crate::views::auth_layout::{AuthLayout, Disclaimer};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
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
                        is_submitting.set(true);
                        error.set(None);

                        let email_value = email.read().trim().to_string();
                        let password_value = password.read().clone();
                        let mut auth = auth;
                        match auth.login(&email_value, &password_value).await {
                            Ok(()) => {
                                nav.push(Route::Chat {});
                            }
                            Err(e) => {
                                crate::log_warn!("login failed: {e}");
                                error.set(Some(e.field_errors().login_message()));
                            }
                        }
                        is_submitting.set(false);
                    },
                    FormHeader {
                        title: "Welcome back".to_string(),
                        subtitle: Some("Sign in to your Lahwita account".to_string()),
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
                        required: Some(true),
                        disabled: Some(is_submitting()),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                    Button {
                        r#type: Some("submit".to_string()),
                        variant: Some(ButtonVariant::Primary),
                        class: Some("w-full py-3 text-base mt-2".to_string()),
                        disabled: Some(is_submitting()),
                        if is_submitting() {
                            "Signing in..."
                        } else {
                            "Sign in"
                        }
                    }
                    p { class: "text-center text-sm text-[#2A1A12]/60",
                        "Don't have an account? "
                        Link {
                            class: "text-[#8B3A1E] hover:underline",
                            to: Route::Register {},
                            "Sign up"
                        }
                    }
                }
            }
            Disclaimer {}
        }
    }
}
