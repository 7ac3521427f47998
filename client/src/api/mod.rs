//! Backend interface for the cinema service.
//!
//! All endpoints speak a uniform JSON envelope
//! `{ "result": "success" | ..., "message"?, "data"? }`. Response bodies are
//! read as text and trimmed before parsing, so loose whitespace framing from
//! the PHP backend does not break decoding. The [`CinemaBackend`] trait is
//! object-safe so stores can hold it as `Arc<dyn CinemaBackend>` and tests
//! can swap in a scripted mock.

use crate::types::{
    BranchId, MovieId, OrderDraft, OrderId, ProductId, Rupiah, ScheduleId, SeatLabel, UserId,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub mod http;
pub mod mock;

pub use http::HttpBackend;
pub use mock::MockCinemaBackend;

/// Backend call result
pub type ApiResult<T> = Result<T, ApiError>;

/// Boxed future returned by [`CinemaBackend`] methods
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send>>;

/// Errors from backend calls, split by what the caller can do about them.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a usable HTTP response
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying connection/status description
        message: String,
    },

    /// A response arrived but its body was not a well-formed envelope
    #[error("malformed response from backend")]
    MalformedResponse,

    /// A well-formed envelope reported a business failure
    #[error("request rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        /// Human-readable reason from the envelope, if present
        message: Option<String>,
    },
}

impl ApiError {
    /// Render the dismissible notice shown to the user.
    ///
    /// Business rejections surface the backend's own message; transport and
    /// decoding failures collapse to generic connectivity text.
    #[must_use]
    pub fn to_notice(&self) -> String {
        match self {
            Self::Transport { .. } => "Gagal terhubung ke server".to_string(),
            Self::MalformedResponse => "Respon server tidak valid".to_string(),
            Self::Rejected { message } => message
                .clone()
                .unwrap_or_else(|| "Permintaan ditolak".to_string()),
        }
    }
}

/// Raw wire envelope, before the success check.
#[derive(Debug, Deserialize)]
struct Envelope {
    result: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Parse a trimmed body into the envelope and extract `data` as `T`.
///
/// A body that is not valid envelope JSON is [`ApiError::MalformedResponse`];
/// a valid envelope whose `result` is not `"success"` is
/// [`ApiError::Rejected`] carrying the envelope's `message`.
///
/// # Errors
///
/// Returns `MalformedResponse` or `Rejected` as described above.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let envelope: Envelope =
        serde_json::from_str(body.trim()).map_err(|_| ApiError::MalformedResponse)?;

    if envelope.result != "success" {
        return Err(ApiError::Rejected {
            message: envelope.message,
        });
    }

    let data = envelope.data.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(data).map_err(|_| ApiError::MalformedResponse)
}

/// Acknowledgement-only variant: the envelope's `data` is ignored.
///
/// # Errors
///
/// Same taxonomy as [`parse_envelope`].
pub fn parse_ack(body: &str) -> ApiResult<()> {
    let envelope: Envelope =
        serde_json::from_str(body.trim()).map_err(|_| ApiError::MalformedResponse)?;

    if envelope.result == "success" {
        Ok(())
    } else {
        Err(ApiError::Rejected {
            message: envelope.message,
        })
    }
}

// ============================================================================
// Wire payloads
// ============================================================================

/// Movie as listed in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Movie identifier
    pub movie_id: MovieId,
    /// Display title
    pub title: String,
    /// Average rating (0-10)
    pub vote_average: f64,
    /// Poster image URL
    pub url: String,
    /// Synopsis (absent in some listings)
    #[serde(default)]
    pub overview: Option<String>,
}

/// Full movie record for the detail screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Movie identifier
    pub movie_id: MovieId,
    /// Display title
    pub title: String,
    /// Average rating (0-10)
    pub vote_average: f64,
    /// Poster image URL
    pub url: String,
    /// Synopsis
    pub overview: String,
    /// Release date, backend-formatted
    pub release_date: String,
}

/// One showtime for a movie
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Schedule identifier
    pub schedule_id: ScheduleId,
    /// Start, formatted `2025-12-06 14:00:00`
    pub start_time: String,
    /// End, same format
    pub end_time: String,
    /// Per-seat price for this showtime
    pub ticket_price: Rupiah,
    /// Studio within the branch
    pub studio_name: String,
    /// Branch name
    pub branch_name: String,
    /// Branch city
    pub city: String,
}

/// Cinema branch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch identifier
    pub branch_id: BranchId,
    /// Branch name
    pub branch_name: String,
    /// City
    pub city: String,
    /// Street address
    pub address: String,
}

/// Cafe product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub product_id: ProductId,
    /// Display name
    pub product_name: String,
    /// Unit price
    pub price: Rupiah,
    /// Image URL
    pub url: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// One row of the order history list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Order identifier
    pub order_id: OrderId,
    /// When the order was placed, backend-formatted
    pub order_date: String,
    /// Order total
    pub total_amount: Rupiah,
    /// Backend order status
    pub status: String,
    /// Movie title, or the fixed cafe marker title for F&B orders
    pub movie_title: String,
    /// Branch name
    pub branch_name: String,
    /// Showtime start (empty for cafe orders)
    pub start_time: String,
}

/// E-ticket header block
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderHeader {
    /// Order identifier
    pub order_id: OrderId,
    /// Movie title (absent for cafe-only orders)
    #[serde(default)]
    pub title: Option<String>,
    /// Branch name
    #[serde(default)]
    pub branch_name: Option<String>,
    /// When the order was placed
    pub order_date: String,
}

/// One food line on an e-ticket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderFood {
    /// Product display name
    pub product_name: String,
    /// Units ordered
    pub qty: u32,
}

/// Full e-ticket payload for one order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Header block
    pub header: OrderHeader,
    /// Booked seat labels (empty for cafe orders)
    pub seats: Vec<SeatLabel>,
    /// Food lines (empty for seat orders)
    pub foods: Vec<OrderFood>,
}

/// One wallet balance mutation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Row identifier
    pub id: u64,
    /// Date, backend-formatted
    pub tanggal: String,
    /// `"TOPUP"` or `"DEBIT"`
    pub jenis: String,
    /// Amount moved
    pub jumlah: Rupiah,
    /// Free-form description
    pub keterangan: String,
}

/// Wallet top-up payment method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopUpMethod {
    /// Bank transfer
    BankTransfer,
    /// E-wallet transfer
    EWallet,
    /// Credit card charge
    CreditCard,
}

impl TopUpMethod {
    /// Backend form value for this method
    #[must_use]
    pub const fn as_form_value(self) -> &'static str {
        match self {
            Self::BankTransfer => "Transfer Bank",
            Self::EWallet => "E-Wallet",
            Self::CreditCard => "Credit Card",
        }
    }
}

impl std::fmt::Display for TopUpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_form_value())
    }
}

// ============================================================================
// Backend trait
// ============================================================================

/// The cinema service backend.
///
/// Object-safe so it can be injected as `Arc<dyn CinemaBackend>` through
/// feature environments; each method returns a boxed future for that reason.
pub trait CinemaBackend: Send + Sync {
    /// Authenticate a user (form-encoded `user_name` / `user_password`).
    ///
    /// # Errors
    ///
    /// `Rejected` on bad credentials, `Transport`/`MalformedResponse` otherwise.
    fn login(&self, username: String, password: String) -> ApiFuture<UserId>;

    /// Register a new user (form-encoded `user_id` / `user_name` /
    /// `user_password`). The user still has to log in afterwards.
    ///
    /// # Errors
    ///
    /// `Rejected` when the backend refuses the registration.
    fn register(&self, username: String, full_name: String, password: String) -> ApiFuture<()>;

    /// Seat labels already booked for a showtime.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn booked_seats(&self, schedule_id: ScheduleId) -> ApiFuture<Vec<SeatLabel>>;

    /// Submit a composed order (seats or cafe, JSON body).
    ///
    /// # Errors
    ///
    /// `Rejected` carries the backend's reason, e.g. a seat taken in the
    /// meantime.
    fn submit_order(&self, draft: OrderDraft) -> ApiFuture<()>;

    /// All movies currently showing.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn movies(&self) -> ApiFuture<Vec<MovieSummary>>;

    /// Full record for one movie.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn movie_detail(&self, movie_id: MovieId) -> ApiFuture<MovieDetail>;

    /// Showtimes for one movie.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn schedules(&self, movie_id: MovieId) -> ApiFuture<Vec<Schedule>>;

    /// All cinema branches.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn branches(&self) -> ApiFuture<Vec<Branch>>;

    /// Movies showing at one branch.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn movies_by_branch(&self, branch_id: BranchId) -> ApiFuture<Vec<MovieSummary>>;

    /// Cafe product catalog.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn products(&self) -> ApiFuture<Vec<Product>>;

    /// Order history for a user.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn order_history(&self, user: UserId) -> ApiFuture<Vec<OrderSummary>>;

    /// E-ticket payload for one order.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn order_detail(&self, order_id: OrderId) -> ApiFuture<OrderDetail>;

    /// Wallet balance history for a user.
    ///
    /// # Errors
    ///
    /// Standard [`ApiError`] taxonomy.
    fn balance_history(&self, user: UserId) -> ApiFuture<Vec<BalanceEntry>>;

    /// Top up the user's wallet (form-encoded `user_id` / `amount` / `method`).
    ///
    /// # Errors
    ///
    /// `Rejected` when the backend refuses the top-up.
    fn top_up(&self, user: UserId, amount: Rupiah, method: TopUpMethod) -> ApiFuture<()>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_extracts_data() {
        let body = r#"{"result":"success","data":["A1","B3"]}"#;
        let seats: Vec<SeatLabel> = parse_envelope(body).unwrap();
        assert_eq!(seats.len(), 2);
        assert_eq!(seats[0].to_string(), "A1");
    }

    #[test]
    fn envelope_tolerates_loose_framing() {
        let body = "\n  {\"result\":\"success\",\"data\":[]}  \n";
        let seats: Vec<SeatLabel> = parse_envelope(body).unwrap();
        assert!(seats.is_empty());
    }

    #[test]
    fn envelope_failure_is_rejected_with_message() {
        let body = r#"{"result":"failure","message":"Kursi habis"}"#;
        let err = parse_ack(body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: Some("Kursi habis".to_string())
            }
        );
        assert_eq!(err.to_notice(), "Kursi habis");
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = parse_ack("<html>Fatal error</html>").unwrap_err();
        assert_eq!(err, ApiError::MalformedResponse);
    }

    #[test]
    fn malformed_is_distinct_from_rejected() {
        // A failure envelope is a business rejection, not a decode error.
        let rejected = parse_ack(r#"{"result":"error"}"#).unwrap_err();
        assert!(matches!(rejected, ApiError::Rejected { message: None }));
        assert_eq!(rejected.to_notice(), "Permintaan ditolak");
    }

    #[test]
    fn top_up_methods_use_backend_labels() {
        assert_eq!(TopUpMethod::BankTransfer.as_form_value(), "Transfer Bank");
        assert_eq!(TopUpMethod::EWallet.as_form_value(), "E-Wallet");
        assert_eq!(TopUpMethod::CreditCard.as_form_value(), "Credit Card");
    }
}
