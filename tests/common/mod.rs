#![allow(dead_code)]

use bid_status::auction::model::{Auction, AuctionType, Bid, DeliveryStatus, PublishState};
use bid_status::users::model::{FmsStatus, Role, User};
use chrono::{DateTime, Duration, Utc};

/// Tracing setup for test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// Vendor account with accepted FMS status and the small-business flag set.
pub fn vendor(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        role: Role::Vendor,
        fms_status: FmsStatus::Accepted,
        duns_number: format!("08-011-{:04}", id),
        fms_number: format!("FMS-{:04}", id),
        is_mwbe: false,
        is_small_business: true,
    }
}

pub fn admin(id: i64) -> User {
    User {
        role: Role::Admin,
        ..vendor(id, "Admin")
    }
}

pub fn bid(id: i64, bidder: &User, amount: i64, created_at: DateTime<Utc>) -> Bid {
    Bid {
        id,
        bidder: bidder.clone(),
        amount,
        created_at,
    }
}

/// Published reverse auction with an open bidding window around `now`.
pub fn available_auction(now: DateTime<Utc>) -> Auction {
    Auction {
        id: 1,
        title: "Data cleanup sprint".to_string(),
        auction_type: AuctionType::Reverse,
        published: PublishState::Published,
        started_at: now - Duration::hours(2),
        ended_at: now + Duration::hours(2),
        delivery_due_at: now + Duration::days(7),
        delivery_status: DeliveryStatus::Pending,
        payment_confirmed: false,
        bids: vec![],
    }
}

/// Published auction whose bidding window has not yet opened.
pub fn future_auction(now: DateTime<Utc>) -> Auction {
    Auction {
        started_at: now + Duration::hours(1),
        ended_at: now + Duration::days(2),
        ..available_auction(now)
    }
}

/// Published auction whose bidding window has closed; delivery still due.
pub fn over_auction(now: DateTime<Utc>) -> Auction {
    Auction {
        started_at: now - Duration::days(4),
        ended_at: now - Duration::hours(1),
        delivery_due_at: now + Duration::days(7),
        ..available_auction(now)
    }
}
