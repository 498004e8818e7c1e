pub mod county;
pub mod listing;

pub use county::County;
pub use listing::ListingRecord;
