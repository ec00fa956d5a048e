//! Inline status banner

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub kind: NoticeKind,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<MouseEvent>>,
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let class = match props.kind {
        NoticeKind::Info => "bg-blue-50 border-blue-200 text-blue-800",
        NoticeKind::Error => "bg-red-50 border-red-200 text-red-700",
    };

    html! {
        <div class={classes!("flex", "justify-between", "items-start", "border", "rounded-lg", "p-3", "text-sm", "mb-4", class)} role="alert">
            <span>{props.message.clone()}</span>
            if let Some(on_dismiss) = props.on_dismiss.clone() {
                <button type="button" class="ml-3 font-bold" onclick={on_dismiss}>{"×"}</button>
            }
        </div>
    }
}
