//! Labelled form input

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: AttrValue,
    /// Rendered under the field in red
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let border = if props.error.is_some() {
        "border-red-400"
    } else {
        "border-gray-300"
    };

    html! {
        <div class="mb-4">
            <label for={props.id.clone()} class="block text-sm font-medium text-gray-700 mb-1">
                {props.label.clone()}
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                class={classes!("w-full", "px-4", "py-2", "border", "rounded-lg", "focus:outline-none", "focus:border-emerald-500", border)}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <p class="text-red-600 text-xs mt-1">{error.clone()}</p>
            }
        </div>
    }
}
