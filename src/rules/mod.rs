//! Eligibility and bidding-rules collaborators.
//! The classifier consumes these as boolean services; the standard
//! implementations below cover the stock auction types.

use crate::auction::model::{Auction, AuctionType};
use crate::users::model::{FmsStatus, User};

/// Externally determined fitness of a user to bid on an auction.
pub trait Eligibility {
    fn eligible(&self, auction: &Auction, user: &User) -> bool;
}

/// Whether a user may place a bid right now.
pub trait BiddingRules {
    fn user_can_bid(&self, auction: &Auction, user: &User) -> bool;
}

/// Stock eligibility: FMS verification plus the small-business registry flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEligibility;

impl Eligibility for StandardEligibility {
    fn eligible(&self, _auction: &Auction, user: &User) -> bool {
        user.fms_status == FmsStatus::Accepted && user.is_small_business
    }
}

/// Stock bidding rules, keyed by auction type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl BiddingRules for StandardRules {
    fn user_can_bid(&self, auction: &Auction, user: &User) -> bool {
        match auction.auction_type {
            // Reverse auctions: the current low bidder must wait to be outbid.
            AuctionType::Reverse => {
                match (auction.lowest_bid_by(user.id), auction.lowest_bid()) {
                    (Some(own), Some(lowest)) => own.id != lowest.id,
                    _ => true,
                }
            }
            // One submission per vendor.
            AuctionType::OpenCall | AuctionType::Sealed => !auction.has_bid_by(user.id),
        }
    }
}
