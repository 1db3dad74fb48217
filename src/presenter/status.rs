//! Bid status resolution.
//! 1. Unpublished auctions short-circuit to a single status.
//! 2. Otherwise resolve the bidding window for the injected clock.
//! 3. Walk the decision table in strict order; first match wins.

// region:    --- Imports
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auction::model::{Auction, AuctionType, DeliveryStatus};
use crate::auction::window::BiddingWindow;
use crate::error::StatusError;
use crate::rules::{BiddingRules, Eligibility};
use crate::users::model::{FmsStatus, User, Viewer};
// endregion: --- Imports

// region:    --- Status

/// Terminal bid status. Exactly one applies to any auction/viewer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    Unpublished,
    FutureAdmin,
    FutureGuest,
    FutureVendor,
    OverWinnerMissedDelivery,
    OverWinnerWorkInProgress,
    OverWinnerDelivered,
    OverWinnerAccepted,
    OverWinnerRejected,
    OverWinnerPaymentConfirmed,
    OverWinnerWorkNotStarted,
    OverBidder,
    OverNotBidder,
    AvailableAdmin,
    AvailableGuest,
    AvailableNotFmsVerified,
    AvailableNotSmallBusiness,
    AvailableBidError,
    AvailableOpenCallBidder,
    AvailableReverseOutbid,
    AvailableEligible,
    AvailableWinningBidder,
    AvailableSealedBidder,
}

/// Read-model handle bound to the one resolved status. Constructed fresh
/// per classification, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct BidStatusPresenter<'a> {
    pub status: BidStatus,
    pub auction: &'a Auction,
    pub viewer: &'a Viewer,
    pub bid_error: Option<&'a str>,
}

// endregion: --- Status

// region:    --- Classifier

/// Explicit finite mapping from a delivery status to the winner-facing
/// presentation. A status with no mapped presentation is surfaced as an
/// error, never defaulted.
pub fn delivery_presentation(status: DeliveryStatus) -> Result<BidStatus, StatusError> {
    match status {
        DeliveryStatus::WorkInProgress => Ok(BidStatus::OverWinnerWorkInProgress),
        DeliveryStatus::Delivered => Ok(BidStatus::OverWinnerDelivered),
        DeliveryStatus::Accepted => Ok(BidStatus::OverWinnerAccepted),
        DeliveryStatus::Rejected => Ok(BidStatus::OverWinnerRejected),
        // Pending is dispatched on before this mapping is consulted;
        // reaching it here means the delivery enumeration and the
        // presentation set disagree.
        DeliveryStatus::Pending => Err(StatusError::UnmappedDeliveryStatus(status)),
    }
}

/// Stateless status classifier over injected eligibility and bidding rules.
/// Reentrant; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusClassifier<E, R> {
    eligibility: E,
    rules: R,
}

impl<E: Eligibility, R: BiddingRules> StatusClassifier<E, R> {
    pub fn new(eligibility: E, rules: R) -> Self {
        Self { eligibility, rules }
    }

    /// Resolve the one terminal status for this auction and viewer.
    /// `now` is the injected clock; `bid_error` is the message from the
    /// viewer's most recent failed submission, if any.
    pub fn classify<'a>(
        &self,
        auction: &'a Auction,
        viewer: &'a Viewer,
        bid_error: Option<&'a str>,
        now: DateTime<Utc>,
    ) -> Result<BidStatusPresenter<'a>, StatusError> {
        let status = self.resolve(auction, viewer, bid_error, now)?;
        debug!(
            "{:<12} --> auction {} resolved to {:?}",
            "Status", auction.id, status
        );
        Ok(BidStatusPresenter {
            status,
            auction,
            viewer,
            bid_error,
        })
    }

    fn resolve(
        &self,
        auction: &Auction,
        viewer: &Viewer,
        bid_error: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<BidStatus, StatusError> {
        if auction.unpublished() {
            return Ok(BidStatus::Unpublished);
        }
        match BiddingWindow::of(auction, now) {
            BiddingWindow::Future => Ok(future_status(viewer)),
            BiddingWindow::Over => over_status(auction, viewer, now),
            BiddingWindow::Available => Ok(self.available_status(auction, viewer, bid_error)),
        }
    }

    fn available_status(
        &self,
        auction: &Auction,
        viewer: &Viewer,
        bid_error: Option<&str>,
    ) -> BidStatus {
        let user = match viewer {
            Viewer::Admin(_) => return BidStatus::AvailableAdmin,
            Viewer::Guest => return BidStatus::AvailableGuest,
            Viewer::Vendor(user) => user,
        };

        if !self.eligibility.eligible(auction, user) {
            return if user.fms_status != FmsStatus::Accepted {
                BidStatus::AvailableNotFmsVerified
            } else {
                BidStatus::AvailableNotSmallBusiness
            };
        }

        // A blank error message counts as absent.
        if bid_error.is_some_and(|e| !e.trim().is_empty()) {
            return BidStatus::AvailableBidError;
        }

        if self.rules.user_can_bid(auction, user) {
            if auction.has_bid_by(user.id) {
                if auction.auction_type == AuctionType::OpenCall {
                    BidStatus::AvailableOpenCallBidder
                } else {
                    BidStatus::AvailableReverseOutbid
                }
            } else {
                BidStatus::AvailableEligible
            }
        } else {
            match auction.auction_type {
                AuctionType::Reverse => BidStatus::AvailableWinningBidder,
                AuctionType::OpenCall => BidStatus::AvailableOpenCallBidder,
                AuctionType::Sealed => BidStatus::AvailableSealedBidder,
            }
        }
    }
}

fn future_status(viewer: &Viewer) -> BidStatus {
    match viewer {
        Viewer::Admin(_) => BidStatus::FutureAdmin,
        Viewer::Guest => BidStatus::FutureGuest,
        Viewer::Vendor(_) => BidStatus::FutureVendor,
    }
}

fn over_status(
    auction: &Auction,
    viewer: &Viewer,
    now: DateTime<Utc>,
) -> Result<BidStatus, StatusError> {
    match viewer.account() {
        Some(user) if winning_bidder(auction, user) => winner_status(auction, now),
        Some(user) if auction.has_bid_by(user.id) => Ok(BidStatus::OverBidder),
        _ => Ok(BidStatus::OverNotBidder),
    }
}

/// The viewer has at least one bid and their own lowest bid *is* the
/// auction's lowest bid. Identity equality, not amount equality.
fn winning_bidder(auction: &Auction, user: &User) -> bool {
    match (auction.lowest_bid_by(user.id), auction.lowest_bid()) {
        (Some(own), Some(lowest)) => own.id == lowest.id,
        _ => false,
    }
}

fn winner_status(auction: &Auction, now: DateTime<Utc>) -> Result<BidStatus, StatusError> {
    if auction.missed_delivery(now) {
        Ok(BidStatus::OverWinnerMissedDelivery)
    } else if !auction.pending_delivery() {
        delivery_presentation(auction.delivery_status)
    } else if auction.payment_confirmed {
        Ok(BidStatus::OverWinnerPaymentConfirmed)
    } else {
        Ok(BidStatus::OverWinnerWorkNotStarted)
    }
}

// endregion: --- Classifier
