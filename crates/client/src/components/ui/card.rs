use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let base = "overflow-hidden rounded-xl border border-[#E9DCC6]/50 bg-[#FFFDF9] shadow-sm";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    };

    rsx! {
        div { class, {props.children} }
    }
}

/// Title block at the top of an auth form.
#[derive(Props, Clone, PartialEq)]
pub struct FormHeaderProps {
    pub title: String,
    #[props(optional)]
    pub subtitle: Option<String>,
}

#[component]
pub fn FormHeader(props: FormHeaderProps) -> Element {
    rsx! {
        div { class: "flex flex-col items-center gap-2 text-center mb-4",
            h1 { class: "font-serif text-3xl text-[#2A1A12]", "{props.title}" }
            if let Some(sub) = &props.subtitle {
                p { class: "text-[#2A1A12]/60", "{sub}" }
            }
        }
    }
}

/// Inline error banner; renders nothing without a message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(msg) = message {
            div { class: "p-3 text-sm text-red-500 bg-red-500/10 border border-red-500/20 rounded-lg",
                "{msg}"
            }
        }
    }
}
