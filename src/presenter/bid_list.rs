use serde::Serialize;

use crate::auction::model::{Auction, Bid};
use crate::format::{format_timestamp, Currency};
use crate::users::model::Viewer;

/// One row of the administrative bid listing for an auction.
/// Derived read model; exists only for the duration of a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidListRow {
    pub bidder_id: i64,
    pub veiled_name: String,
    pub veiled_name_mwbe_bolded: String,
    pub veiled_duns_number: String,
    pub veiled_fms_number: String,
    pub amount_to_currency_with_asterisk: String,
    pub created_at: String,
}

impl BidListRow {
    /// Project one bid into its listing row. The viewer is the audience
    /// hook for identity veiling; the veiled fields currently pass the
    /// bidder data through unchanged.
    pub fn project(bid: &Bid, _viewer: &Viewer, auction: &Auction) -> BidListRow {
        let bidder = &bid.bidder;
        BidListRow {
            bidder_id: bidder.id,
            veiled_name: bidder.name.clone(),
            veiled_name_mwbe_bolded: if bidder.is_mwbe {
                format!("{}*", bidder.name)
            } else {
                bidder.name.clone()
            },
            veiled_duns_number: bidder.duns_number.clone(),
            veiled_fms_number: bidder.fms_number.clone(),
            amount_to_currency_with_asterisk: amount_with_marker(bid, auction),
            created_at: format_timestamp(bid.created_at),
        }
    }
}

/// Currency rendering, marked with a trailing asterisk when this bid is
/// (identity, not amount) the auction's lowest.
fn amount_with_marker(bid: &Bid, auction: &Auction) -> String {
    let amount = Currency(bid.amount);
    match auction.lowest_bid() {
        Some(lowest) if lowest.id == bid.id => format!("{} *", amount),
        _ => amount.to_string(),
    }
}
