use thiserror::Error;

use crate::auction::model::DeliveryStatus;

/// Classification faults. These indicate a data/config mismatch, not an
/// ordinary outcome; every well-formed input resolves to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    /// A delivery status reached the winner dispatch without a mapped
    /// presentation.
    #[error("no bid status presentation mapped for delivery status {0:?}")]
    UnmappedDeliveryStatus(DeliveryStatus),
}
