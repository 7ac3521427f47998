//! Async loaders for the read-only catalog screens.
//!
//! Each loader maps a backend call into [`RemoteData`], collapsing the
//! error taxonomy into the user-facing notice. The movie detail screen
//! fetches the record and its showtimes concurrently.

use super::RemoteData;
use crate::api::{
    ApiResult, BalanceEntry, Branch, CinemaBackend, MovieDetail, MovieSummary, OrderDetail,
    Product, Schedule,
};
use crate::types::{BranchId, MovieId, OrderId, UserId};

fn settle<T>(result: ApiResult<T>) -> RemoteData<T> {
    match result {
        Ok(data) => RemoteData::Ready(data),
        Err(err) => {
            tracing::warn!(error = %err, "catalog fetch failed");
            RemoteData::Unavailable(err.to_notice())
        }
    }
}

/// All movies currently showing.
pub async fn movies(backend: &dyn CinemaBackend) -> RemoteData<Vec<MovieSummary>> {
    settle(backend.movies().await)
}

/// Movie record and its showtimes, fetched concurrently.
pub async fn movie_with_schedules(
    backend: &dyn CinemaBackend,
    movie_id: MovieId,
) -> (RemoteData<MovieDetail>, RemoteData<Vec<Schedule>>) {
    let (detail, schedules) =
        futures::join!(backend.movie_detail(movie_id), backend.schedules(movie_id));
    (settle(detail), settle(schedules))
}

/// All cinema branches.
pub async fn branches(backend: &dyn CinemaBackend) -> RemoteData<Vec<Branch>> {
    settle(backend.branches().await)
}

/// Movies showing at one branch.
pub async fn movies_by_branch(
    backend: &dyn CinemaBackend,
    branch_id: BranchId,
) -> RemoteData<Vec<MovieSummary>> {
    settle(backend.movies_by_branch(branch_id).await)
}

/// Cafe product catalog.
pub async fn products(backend: &dyn CinemaBackend) -> RemoteData<Vec<Product>> {
    settle(backend.products().await)
}

/// E-ticket payload for one order.
pub async fn order_detail(
    backend: &dyn CinemaBackend,
    order_id: OrderId,
) -> RemoteData<OrderDetail> {
    settle(backend.order_detail(order_id).await)
}

/// Wallet balance history for one user.
pub async fn balance_history(
    backend: &dyn CinemaBackend,
    user: UserId,
) -> RemoteData<Vec<BalanceEntry>> {
    settle(backend.balance_history(user).await)
}
