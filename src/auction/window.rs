use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Auction;

/// Where the bidding window stands relative to a point in time.
/// Exactly one of the three holds at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiddingWindow {
    Future,
    Available,
    Over,
}

impl BiddingWindow {
    pub fn of(auction: &Auction, now: DateTime<Utc>) -> Self {
        if now < auction.started_at {
            BiddingWindow::Future
        } else if now >= auction.ended_at {
            BiddingWindow::Over
        } else {
            BiddingWindow::Available
        }
    }
}
