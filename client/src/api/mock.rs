//! Scripted in-memory backend for tests and the demo binary.
//!
//! Every endpoint answers from data seeded through the `with_*` builders;
//! unseeded endpoints succeed with empty data. Submissions and top-ups are
//! recorded so tests can assert on the exact payload the reducers composed.

use super::{
    ApiError, ApiFuture, ApiResult, BalanceEntry, Branch, CinemaBackend, MovieDetail,
    MovieSummary, OrderDetail, OrderHeader, OrderSummary, Product, Schedule, TopUpMethod,
};
use crate::types::{BranchId, MovieId, OrderDraft, OrderId, Rupiah, ScheduleId, SeatLabel, UserId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scripted mock of [`CinemaBackend`].
#[derive(Debug, Default)]
pub struct MockCinemaBackend {
    credentials: Mutex<HashMap<String, String>>,
    booked: Mutex<HashMap<ScheduleId, ApiResult<Vec<SeatLabel>>>>,
    submit_responses: Mutex<VecDeque<ApiResult<()>>>,
    submitted: Mutex<Vec<OrderDraft>>,
    movies: Mutex<Vec<MovieSummary>>,
    branches: Mutex<Vec<Branch>>,
    products: Mutex<Vec<Product>>,
    products_error: Mutex<Option<ApiError>>,
    schedules: Mutex<HashMap<MovieId, Vec<Schedule>>>,
    orders: Mutex<HashMap<String, Vec<OrderSummary>>>,
    order_details: Mutex<HashMap<OrderId, OrderDetail>>,
    balances: Mutex<HashMap<String, Vec<BalanceEntry>>>,
    top_up_responses: Mutex<VecDeque<ApiResult<()>>>,
    top_ups: Mutex<Vec<(UserId, Rupiah, TopUpMethod)>>,
}

impl MockCinemaBackend {
    /// Mock with every endpoint succeeding on empty data
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arc the mock behind the trait object
    #[must_use]
    pub fn shared(self) -> Arc<dyn CinemaBackend> {
        Arc::new(self)
    }

    /// Accept this username/password pair on login
    #[must_use]
    pub fn with_user(self, username: &str, password: &str) -> Self {
        lock(&self.credentials).insert(username.to_string(), password.to_string());
        self
    }

    /// Script the booked-seat response for a showtime
    #[must_use]
    pub fn with_booked_seats(self, schedule_id: ScheduleId, result: ApiResult<Vec<SeatLabel>>) -> Self {
        lock(&self.booked).insert(schedule_id, result);
        self
    }

    /// Queue the next order-submission responses, consumed in order.
    /// An exhausted queue answers success.
    #[must_use]
    pub fn with_submit_responses(self, responses: Vec<ApiResult<()>>) -> Self {
        lock(&self.submit_responses).extend(responses);
        self
    }

    /// Seed the movie catalog
    #[must_use]
    pub fn with_movies(self, movies: Vec<MovieSummary>) -> Self {
        *lock(&self.movies) = movies;
        self
    }

    /// Seed the branch list
    #[must_use]
    pub fn with_branches(self, branches: Vec<Branch>) -> Self {
        *lock(&self.branches) = branches;
        self
    }

    /// Seed the cafe product catalog
    #[must_use]
    pub fn with_products(self, products: Vec<Product>) -> Self {
        *lock(&self.products) = products;
        self
    }

    /// Make the product catalog fail
    #[must_use]
    pub fn with_products_error(self, error: ApiError) -> Self {
        *lock(&self.products_error) = Some(error);
        self
    }

    /// Seed showtimes for a movie
    #[must_use]
    pub fn with_schedules(self, movie_id: MovieId, schedules: Vec<Schedule>) -> Self {
        lock(&self.schedules).insert(movie_id, schedules);
        self
    }

    /// Seed order history for a user
    #[must_use]
    pub fn with_order_history(self, user: &str, orders: Vec<OrderSummary>) -> Self {
        lock(&self.orders).insert(user.to_string(), orders);
        self
    }

    /// Seed the e-ticket payload for an order
    #[must_use]
    pub fn with_order_detail(self, order_id: OrderId, detail: OrderDetail) -> Self {
        lock(&self.order_details).insert(order_id, detail);
        self
    }

    /// Seed balance history for a user
    #[must_use]
    pub fn with_balance_history(self, user: &str, entries: Vec<BalanceEntry>) -> Self {
        lock(&self.balances).insert(user.to_string(), entries);
        self
    }

    /// Queue the next top-up responses, consumed in order
    #[must_use]
    pub fn with_top_up_responses(self, responses: Vec<ApiResult<()>>) -> Self {
        lock(&self.top_up_responses).extend(responses);
        self
    }

    /// Orders submitted so far, in submission order
    #[must_use]
    pub fn submitted_orders(&self) -> Vec<OrderDraft> {
        lock(&self.submitted).clone()
    }

    /// Top-ups submitted so far
    #[must_use]
    pub fn recorded_top_ups(&self) -> Vec<(UserId, Rupiah, TopUpMethod)> {
        lock(&self.top_ups).clone()
    }
}

impl CinemaBackend for MockCinemaBackend {
    fn login(&self, username: String, password: String) -> ApiFuture<UserId> {
        let accepted = lock(&self.credentials)
            .get(&username)
            .is_some_and(|stored| *stored == password);
        Box::pin(async move {
            if accepted {
                Ok(UserId::new(username))
            } else {
                Err(ApiError::Rejected {
                    message: Some("Username atau password salah".to_string()),
                })
            }
        })
    }

    fn register(&self, username: String, _full_name: String, password: String) -> ApiFuture<()> {
        let duplicate = lock(&self.credentials).contains_key(&username);
        if !duplicate {
            lock(&self.credentials).insert(username, password);
        }
        Box::pin(async move {
            if duplicate {
                Err(ApiError::Rejected {
                    message: Some("Username sudah terpakai".to_string()),
                })
            } else {
                Ok(())
            }
        })
    }

    fn booked_seats(&self, schedule_id: ScheduleId) -> ApiFuture<Vec<SeatLabel>> {
        let result = lock(&self.booked)
            .get(&schedule_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()));
        Box::pin(async move { result })
    }

    fn submit_order(&self, draft: OrderDraft) -> ApiFuture<()> {
        lock(&self.submitted).push(draft);
        let result = lock(&self.submit_responses).pop_front().unwrap_or(Ok(()));
        Box::pin(async move { result })
    }

    fn movies(&self) -> ApiFuture<Vec<MovieSummary>> {
        let movies = lock(&self.movies).clone();
        Box::pin(async move { Ok(movies) })
    }

    fn movie_detail(&self, movie_id: MovieId) -> ApiFuture<MovieDetail> {
        let found = lock(&self.movies)
            .iter()
            .find(|m| m.movie_id == movie_id)
            .map(|m| MovieDetail {
                movie_id: m.movie_id,
                title: m.title.clone(),
                vote_average: m.vote_average,
                url: m.url.clone(),
                overview: m.overview.clone().unwrap_or_default(),
                release_date: String::new(),
            });
        Box::pin(async move {
            found.ok_or(ApiError::Rejected {
                message: Some("Film tidak ditemukan".to_string()),
            })
        })
    }

    fn schedules(&self, movie_id: MovieId) -> ApiFuture<Vec<Schedule>> {
        let schedules = lock(&self.schedules).get(&movie_id).cloned().unwrap_or_default();
        Box::pin(async move { Ok(schedules) })
    }

    fn branches(&self) -> ApiFuture<Vec<Branch>> {
        let branches = lock(&self.branches).clone();
        Box::pin(async move { Ok(branches) })
    }

    fn movies_by_branch(&self, _branch_id: BranchId) -> ApiFuture<Vec<MovieSummary>> {
        let movies = lock(&self.movies).clone();
        Box::pin(async move { Ok(movies) })
    }

    fn products(&self) -> ApiFuture<Vec<Product>> {
        let error = lock(&self.products_error).clone();
        let products = lock(&self.products).clone();
        Box::pin(async move {
            match error {
                Some(err) => Err(err),
                None => Ok(products),
            }
        })
    }

    fn order_history(&self, user: UserId) -> ApiFuture<Vec<OrderSummary>> {
        let orders = lock(&self.orders).get(user.as_str()).cloned().unwrap_or_default();
        Box::pin(async move { Ok(orders) })
    }

    fn order_detail(&self, order_id: OrderId) -> ApiFuture<OrderDetail> {
        let found = lock(&self.order_details).get(&order_id).cloned();
        Box::pin(async move {
            found.ok_or(ApiError::Rejected {
                message: Some("Data tidak ditemukan".to_string()),
            })
        })
    }

    fn balance_history(&self, user: UserId) -> ApiFuture<Vec<BalanceEntry>> {
        let entries = lock(&self.balances).get(user.as_str()).cloned().unwrap_or_default();
        Box::pin(async move { Ok(entries) })
    }

    fn top_up(&self, user: UserId, amount: Rupiah, method: TopUpMethod) -> ApiFuture<()> {
        lock(&self.top_ups).push((user, amount, method));
        let result = lock(&self.top_up_responses).pop_front().unwrap_or(Ok(()));
        Box::pin(async move { result })
    }
}

/// A seeded e-ticket for tests that only need a header.
#[must_use]
pub fn ticket_stub(order_id: OrderId, title: &str) -> OrderDetail {
    OrderDetail {
        header: OrderHeader {
            order_id,
            title: Some(title.to_string()),
            branch_name: Some("Bioskop Tunjungan".to_string()),
            order_date: "2025-12-06 10:00:00".to_string(),
        },
        seats: Vec::new(),
        foods: Vec::new(),
    }
}
