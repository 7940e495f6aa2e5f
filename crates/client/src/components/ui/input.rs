use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Tel,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub hint: Option<String>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub input_type: Option<InputType>,
    #[props(optional)]
    pub required: Option<bool>,
    #[props(optional)]
    pub minlength: Option<u32>,
    #[props(optional)]
    pub disabled: Option<bool>,
}

/// Labelled form field.
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = "w-full rounded-lg bg-[#FFFDF9] text-[#2A1A12] px-4 py-3 text-sm border border-[#E9DCC6] placeholder-[#2A1A12]/40 focus:outline-none focus:ring-2 focus:ring-[#8B3A1E]/40 disabled:opacity-50";

    rsx! {
        div { class: "flex flex-col gap-2",
            label { class: "text-sm font-medium text-[#2A1A12]", r#for: "{props.id}",
                "{props.label}"
                if let Some(hint) = &props.hint {
                    " "
                    span { class: "text-[#2A1A12]/40", "{hint}" }
                }
            }
            input {
                class,
                id: "{props.id}",
                r#type: props.input_type.unwrap_or_default().as_str(),
                value: "{props.value}",
                placeholder: props.placeholder.unwrap_or_default(),
                required: props.required.unwrap_or(false),
                minlength: props.minlength.map(|n| n.to_string()),
                disabled: props.disabled.unwrap_or(false),
                oninput: move |e| props.oninput.call(e),
            }
        }
    }
}
