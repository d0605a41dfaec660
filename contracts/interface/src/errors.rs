use soroban_sdk::contracterror;

/// Error codes shared by the auction template and the auction factory.
///
/// Behaviour errors are returned by the template and forwarded unchanged by
/// the factory, so both contracts report from one numbering.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Factory has not been initialized
    NotInitialized = 1,
    /// Factory has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not the factory owner (or not the bound factory)
    Unauthorized = 3,
    /// No auction is recorded under the listing id
    AuctionNotFound = 4,
    /// Duration must be greater than zero
    InvalidDuration = 5,
    /// Reserve price must be greater than zero
    InvalidReserve = 6,
    /// Amount must be greater than zero
    InvalidAmount = 7,
    /// Auction has already ended
    AuctionNotActive = 8,
    /// Bidding window has closed
    AuctionExpired = 9,
    /// Bid does not beat the current highest bid or the reserve
    BidTooLow = 10,
    /// The seller may not bid on their own listing
    SellerCannotBid = 11,
    /// Settlement requested before the end time
    AuctionStillActive = 12,
    /// Seller cancellation is only allowed while there are no bids
    CannotCancelWithBids = 13,
    /// Seller does not own the asset being listed
    AssetNotOwned = 14,
    /// Asset registry refused to move the asset into custody
    CustodyTransferFailed = 15,
    /// Value token refused to move the bid into escrow
    PaymentFailed = 16,
    /// Value token refused to refund a displaced bidder
    RefundFailed = 17,
    /// Asset or value transfer failed during settlement
    SettlementFailed = 18,
    /// Escrowed funds were already released
    EscrowReleased = 19,
    /// Escrowed asset was already released
    CustodyReleased = 20,
    /// Address does not expose the auction behaviour for this factory
    InvalidTemplate = 21,
}
