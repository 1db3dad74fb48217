use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::model::User;

/// Auction pricing/format type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionType {
    Reverse,
    OpenCall,
    Sealed,
}

/// Auction lifecycle flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishState {
    Unpublished,
    Published,
    Archived,
}

/// Delivery sub-state reported for a closed auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    WorkInProgress,
    Delivered,
    Accepted,
    Rejected,
}

/// A single bid. The bidder association is materialized by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: i64,
    pub bidder: User,
    /// Whole cents.
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Auction read model, loaded with its bids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    pub id: i64,
    pub title: String,
    pub auction_type: AuctionType,
    pub published: PublishState,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub delivery_due_at: DateTime<Utc>,
    pub delivery_status: DeliveryStatus,
    pub payment_confirmed: bool,
    pub bids: Vec<Bid>,
}

impl Auction {
    pub fn unpublished(&self) -> bool {
        self.published == PublishState::Unpublished
    }

    /// Lowest bid on the auction. Ties go to the earliest-created bid.
    pub fn lowest_bid(&self) -> Option<&Bid> {
        self.bids.iter().min_by_key(|b| (b.amount, b.created_at))
    }

    /// All bids placed by one bidder.
    pub fn bids_by(&self, bidder_id: i64) -> impl Iterator<Item = &Bid> {
        self.bids.iter().filter(move |b| b.bidder.id == bidder_id)
    }

    /// One bidder's lowest bid, same tie-break as `lowest_bid`.
    pub fn lowest_bid_by(&self, bidder_id: i64) -> Option<&Bid> {
        self.bids_by(bidder_id).min_by_key(|b| (b.amount, b.created_at))
    }

    pub fn has_bid_by(&self, bidder_id: i64) -> bool {
        self.bids_by(bidder_id).next().is_some()
    }

    pub fn pending_delivery(&self) -> bool {
        self.delivery_status == DeliveryStatus::Pending
    }

    /// The delivery window elapsed without the work being delivered.
    pub fn missed_delivery(&self, now: DateTime<Utc>) -> bool {
        matches!(
            self.delivery_status,
            DeliveryStatus::Pending | DeliveryStatus::WorkInProgress
        ) && now > self.delivery_due_at
    }
}
