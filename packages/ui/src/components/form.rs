use dioxus::prelude::*;

#[component]
pub fn Label(target: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{target}", {children} }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input",
            id: "{id}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            oninput: move |evt| oninput.call(evt.value()),
            onkeydown: move |evt| {
                if let Some(handler) = &onkeydown {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    id: String,
    value: String,
    #[props(default)] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        textarea {
            class: "input textarea",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt.value()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native select. The empty value stands for "no choice".
#[component]
pub fn Select(
    id: String,
    value: String,
    options: Vec<SelectOption>,
    #[props(default)] placeholder: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "input select",
            id: "{id}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt.value()),
            if !placeholder.is_empty() {
                option { value: "", selected: value.is_empty(), "{placeholder}" }
            }
            for opt in options {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == value,
                    "{opt.label}"
                }
            }
        }
    }
}

/// Label above a control.
#[component]
pub fn Field(label: String, target: String, children: Element) -> Element {
    rsx! {
        div {
            class: "field",
            Label { target: target.clone(), "{label}" }
            {children}
        }
    }
}
