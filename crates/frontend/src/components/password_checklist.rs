//! Live password rule checklist

use portfolio_core::{PasswordRequirement, PasswordValidation};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordChecklistProps {
    pub validation: PasswordValidation,
}

#[function_component(PasswordChecklist)]
pub fn password_checklist(props: &PasswordChecklistProps) -> Html {
    html! {
        <ul class="text-xs space-y-1 mb-4">
            { for PasswordRequirement::ALL.iter().map(|requirement| {
                let met = props.validation.is_met(*requirement);
                let (icon, class) = if met {
                    ("✓", "text-emerald-600")
                } else {
                    ("✗", "text-gray-500")
                };
                html! {
                    <li class={class}>
                        <span class="inline-block w-4">{icon}</span>
                        {requirement.label()}
                    </li>
                }
            }) }
        </ul>
    }
}
