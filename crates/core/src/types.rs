//! Backend API payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub first_name: String,
}

/// One stock position
///
/// The backend sends rows as positional arrays:
/// `[stock, industry, number, price_per_share, date]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HoldingRow", into = "HoldingRow")]
pub struct Holding {
    pub stock: String,
    pub industry: String,
    pub shares: i64,
    pub price_per_share: f64,
    pub date: String,
}

impl Holding {
    pub fn market_value(&self) -> f64 {
        self.shares as f64 * self.price_per_share
    }
}

#[derive(Serialize, Deserialize)]
struct HoldingRow(String, String, i64, Price, String);

/// Decimal columns may arrive as JSON numbers or strings
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Price {
    Number(f64),
    Text(String),
}

impl TryFrom<HoldingRow> for Holding {
    type Error = String;

    fn try_from(row: HoldingRow) -> Result<Self, Self::Error> {
        let HoldingRow(stock, industry, shares, price, date) = row;
        let price_per_share = match price {
            Price::Number(n) => n,
            Price::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("invalid price_per_share for {stock}: {s:?}"))?,
        };
        Ok(Self {
            stock,
            industry,
            shares,
            price_per_share,
            date,
        })
    }
}

impl From<Holding> for HoldingRow {
    fn from(h: Holding) -> Self {
        HoldingRow(
            h.stock,
            h.industry,
            h.shares,
            Price::Number(h.price_per_share),
            h.date,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResponse {
    #[serde(default)]
    pub portfolio: Vec<Holding>,
    #[serde(default)]
    pub status: Option<String>,
}

impl PortfolioResponse {
    pub fn total_value(&self) -> f64 {
        self.portfolio.iter().map(Holding::market_value).sum()
    }
}

/// Error or status body returned by the backend
///
/// Failures carry `error` or `message`; JWT rejections (expired or
/// malformed token) carry `msg`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ApiMessage {
    /// Extract a human readable message from a raw response body
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|m| m.error.or(m.message).or(m.msg))
    }
}
