use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default display currency
pub const DEFAULT_CURRENCY: &str = "INR";

/// Label used by the campaign browser for "no category filter"
pub const ALL_CATEGORIES_LABEL: &str = "All Stories";

/// Display name for donations routed to the general fund
pub const GENERAL_FUND_LABEL: &str = "General Fund";

/// Display name for anonymous or unnamed donors
pub const ANONYMOUS_DONOR_LABEL: &str = "Anonymous";

/// Section 80G deduction: half of the donated amount
pub const TAX_BENEFIT_RATE: Decimal = dec!(0.5);

/// Compact number ladder (Indian numbering)
pub const CRORE: Decimal = dec!(10000000);
pub const LAKH: Decimal = dec!(100000);
pub const THOUSAND: Decimal = dec!(1000);

/// Impact conversions: every 50 rupees feeds 10 meals
pub const RUPEES_PER_MEAL_BATCH: Decimal = dec!(50);
pub const MEALS_PER_BATCH: u64 = 10;
/// One book per 200 rupees
pub const RUPEES_PER_BOOK: Decimal = dec!(200);
/// Every 1000 rupees gives 5 people clean water
pub const RUPEES_PER_WATER_BATCH: Decimal = dec!(1000);
pub const PEOPLE_PER_WATER_BATCH: u64 = 5;

/// Snapshot keys in the local key-value store
pub const DONATION_SNAPSHOT_KEY: &str = "donation-storage";
pub const WEB3_SNAPSHOT_KEY: &str = "web3-storage";
pub const DOCUMENT_SNAPSHOT_KEY: &str = "ipfs-storage";

/// Current schema version of persisted snapshots
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Prefix of generated donation identifiers
pub const DONATION_ID_PREFIX: &str = "DN";

/// Wei per ether
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Decimal places shown for wallet balances
pub const BALANCE_DISPLAY_DECIMALS: u32 = 4;
