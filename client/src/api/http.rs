//! Real HTTP backend over reqwest.

use super::{
    parse_ack, parse_envelope, ApiError, ApiFuture, ApiResult, BalanceEntry, Branch,
    CinemaBackend, MovieDetail, MovieSummary, OrderDetail, OrderSummary, Product, Schedule,
    TopUpMethod,
};
use crate::types::{BranchId, MovieId, OrderDraft, OrderId, Rupiah, ScheduleId, SeatLabel, UserId};
use reqwest::RequestBuilder;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the cinema backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a backend against a base URL with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the TLS-enabled client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Transport {
                message: err.to_string(),
            })?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Arc the backend behind the trait object for environment injection.
    #[must_use]
    pub fn into_shared(self) -> Arc<dyn CinemaBackend> {
        Arc::new(self)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Drive a prepared request and return its trimmed-parse-ready body.
    async fn read_body(request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|err| ApiError::Transport {
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport {
                message: format!("unexpected status {status}"),
            });
        }

        response.text().await.map_err(|err| ApiError::Transport {
            message: err.to_string(),
        })
    }
}

impl CinemaBackend for HttpBackend {
    fn login(&self, username: String, password: String) -> ApiFuture<UserId> {
        let request = self
            .client
            .post(self.endpoint("login.php"))
            .form(&[("user_name", username.clone()), ("user_password", password)]);
        Box::pin(async move {
            tracing::debug!(user = %username, "login request");
            parse_ack(&Self::read_body(request).await?)?;
            Ok(UserId::new(username))
        })
    }

    fn register(&self, username: String, full_name: String, password: String) -> ApiFuture<()> {
        let request = self.client.post(self.endpoint("register.php")).form(&[
            ("user_id", username),
            ("user_name", full_name),
            ("user_password", password),
        ]);
        Box::pin(async move { parse_ack(&Self::read_body(request).await?) })
    }

    fn booked_seats(&self, schedule_id: ScheduleId) -> ApiFuture<Vec<SeatLabel>> {
        let request = self
            .client
            .get(self.endpoint("get_booked_seats.php"))
            .query(&[("schedule_id", schedule_id.0)]);
        Box::pin(async move {
            tracing::debug!(%schedule_id, "fetching booked seats");
            parse_envelope(&Self::read_body(request).await?)
        })
    }

    fn submit_order(&self, draft: OrderDraft) -> ApiFuture<()> {
        let request = self
            .client
            .post(self.endpoint("create_order.php"))
            .json(&draft);
        Box::pin(async move {
            tracing::info!(total = %draft.total(), "submitting order");
            parse_ack(&Self::read_body(request).await?)
        })
    }

    fn movies(&self) -> ApiFuture<Vec<MovieSummary>> {
        let request = self.client.get(self.endpoint("get_movies.php"));
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn movie_detail(&self, movie_id: MovieId) -> ApiFuture<MovieDetail> {
        let request = self
            .client
            .get(self.endpoint("get_movie_detail.php"))
            .query(&[("movie_id", movie_id.0)]);
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn schedules(&self, movie_id: MovieId) -> ApiFuture<Vec<Schedule>> {
        let request = self
            .client
            .get(self.endpoint("get_schedules.php"))
            .query(&[("movie_id", movie_id.0)]);
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn branches(&self) -> ApiFuture<Vec<Branch>> {
        let request = self.client.get(self.endpoint("get_branches.php"));
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn movies_by_branch(&self, branch_id: BranchId) -> ApiFuture<Vec<MovieSummary>> {
        let request = self
            .client
            .get(self.endpoint("get_movies_by_cinema.php"))
            .query(&[("branch_id", branch_id.0)]);
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn products(&self) -> ApiFuture<Vec<Product>> {
        let request = self.client.get(self.endpoint("get_products.php"));
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn order_history(&self, user: UserId) -> ApiFuture<Vec<OrderSummary>> {
        let request = self
            .client
            .get(self.endpoint("get_order_history.php"))
            .query(&[("user_id", user.as_str())]);
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn order_detail(&self, order_id: OrderId) -> ApiFuture<OrderDetail> {
        let request = self
            .client
            .get(self.endpoint("get_order_detail.php"))
            .query(&[("order_id", order_id.0)]);
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn balance_history(&self, user: UserId) -> ApiFuture<Vec<BalanceEntry>> {
        let request = self
            .client
            .get(self.endpoint("get_saldo_history.php"))
            .query(&[("user_id", user.as_str())]);
        Box::pin(async move { parse_envelope(&Self::read_body(request).await?) })
    }

    fn top_up(&self, user: UserId, amount: Rupiah, method: TopUpMethod) -> ApiFuture<()> {
        let request = self.client.post(self.endpoint("topup.php")).form(&[
            ("user_id", user.as_str().to_string()),
            ("amount", amount.amount().to_string()),
            ("method", method.as_form_value().to_string()),
        ]);
        Box::pin(async move {
            tracing::info!(user = %user, %amount, %method, "wallet top-up");
            parse_ack(&Self::read_body(request).await?)
        })
    }
}
