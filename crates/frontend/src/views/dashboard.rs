//! Signed-in landing page

use crate::client::{api_client, ClientError};
use crate::components::{Notice, NoticeKind, Spinner};
use portfolio_core::{DashboardResponse, Holding, PortfolioResponse};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum DashboardData {
    Loading,
    Loaded {
        summary: DashboardResponse,
        portfolio: PortfolioResponse,
    },
    Failed(String),
}

async fn load() -> Result<(DashboardResponse, PortfolioResponse), ClientError> {
    let client = api_client()?;
    let summary = client.dashboard().await?;
    let portfolio = client.portfolio().await?;
    Ok((summary, portfolio))
}

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let data = use_state(|| DashboardData::Loading);

    {
        let data = data.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok((summary, portfolio)) => {
                        tracing::debug!(holdings = portfolio.portfolio.len(), "Dashboard loaded");
                        data.set(DashboardData::Loaded { summary, portfolio });
                    }
                    // A 401 already redirected to login
                    Err(e) if e.is_unauthorized() => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load dashboard");
                        data.set(DashboardData::Failed(e.user_message()));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*data {
        DashboardData::Loading => html! { <Spinner text={Some("Loading your portfolio...".to_string())} /> },
        DashboardData::Failed(message) => html! {
            <Notice message={message.clone()} kind={NoticeKind::Error} />
        },
        DashboardData::Loaded { summary, portfolio } => html! {
            <>
                <h1 class="text-2xl font-bold text-gray-900 mb-1">
                    {format!("Welcome back, {}", summary.first_name)}
                </h1>
                <p class="text-gray-600 mb-8">
                    {format!("Total value: {}", format_money(portfolio.total_value()))}
                </p>
                <HoldingsTable holdings={portfolio.portfolio.clone()} />
            </>
        },
    };

    html! {
        <section class="max-w-5xl mx-auto py-10 px-4">
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct HoldingsTableProps {
    holdings: Vec<Holding>,
}

#[function_component(HoldingsTable)]
fn holdings_table(props: &HoldingsTableProps) -> Html {
    if props.holdings.is_empty() {
        return html! {
            <p class="text-gray-500 text-center py-10 border border-dashed border-gray-300 rounded-lg">
                {"No holdings yet."}
            </p>
        };
    }

    html! {
        <table class="w-full text-sm border border-gray-200 rounded-lg overflow-hidden">
            <thead class="bg-gray-50 text-left text-gray-600">
                <tr>
                    <th class="px-4 py-2">{"Stock"}</th>
                    <th class="px-4 py-2">{"Industry"}</th>
                    <th class="px-4 py-2 text-right">{"Shares"}</th>
                    <th class="px-4 py-2 text-right">{"Price"}</th>
                    <th class="px-4 py-2 text-right">{"Value"}</th>
                    <th class="px-4 py-2">{"Purchased"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.holdings.iter().map(|h| html! {
                    <tr class="border-t border-gray-100">
                        <td class="px-4 py-2 font-medium">{h.stock.clone()}</td>
                        <td class="px-4 py-2">{h.industry.clone()}</td>
                        <td class="px-4 py-2 text-right">{h.shares}</td>
                        <td class="px-4 py-2 text-right">{format_money(h.price_per_share)}</td>
                        <td class="px-4 py-2 text-right">{format_money(h.market_value())}</td>
                        <td class="px-4 py-2">{h.date.clone()}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
