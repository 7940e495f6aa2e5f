use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    /// Square button sized for a single icon
    Icon,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "rounded-lg px-4 py-2 bg-[#8B3A1E] text-[#FBF6EE] hover:bg-[#8B3A1E]/80 shadow-[0_4px_0_0_rgba(139,58,30,0.7)] hover:shadow-[0_2px_0_0_rgba(139,58,30,0.7)] hover:translate-y-0.5 active:shadow-none active:translate-y-1",
            Self::Secondary => "rounded-lg px-4 py-2 bg-[#E9DCC6] text-[#2A1A12] hover:bg-[#E9DCC6]/70",
            Self::Ghost => "rounded-lg px-4 py-2 bg-transparent text-[#2A1A12]/60 hover:text-[#2A1A12] hover:bg-[#E9DCC6]/30",
            Self::Icon => "w-9 h-9 rounded-lg bg-transparent text-[#2A1A12]/60 hover:text-[#2A1A12] hover:bg-[#E9DCC6]/30",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub r#type: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
    #[props(optional)]
    pub title: Option<String>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let disabled = props.disabled.unwrap_or(false);

    let base = "inline-flex items-center justify-center text-sm font-medium transition-all duration-200 focus:outline-none disabled:opacity-40 disabled:pointer-events-none";
    let variant_class = props.variant.unwrap_or_default().class();

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {variant_class} {extra}"),
        _ => format!("{base} {variant_class}"),
    };

    rsx! {
        button {
            class,
            r#type: props.r#type.unwrap_or_else(|| "button".to_string()),
            title: props.title.unwrap_or_default(),
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
