/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Retry ceiling for the unused-year search; once `attempt` exceeds this the
/// last drawn candidate is accepted as-is.
pub(crate) const MAX_YEAR_ATTEMPTS: u32 = 100;

/// Lower year bound when `MINYEAR` is absent or invalid
pub(crate) const DEFAULT_MIN_YEAR: i32 = 2000;

/// Page size for the tag listing; large enough to fetch every tag at once
pub(crate) const TAG_LIST_LIMIT: u32 = 5000;

/// Maximum number of photos mailed per run
pub(crate) const PHOTO_PAGE_SIZE: u32 = 10;

/// Thumbnail size requested from the photo API ("m" = medium)
pub(crate) const THUMBNAIL_SIZE: &str = "m";

/// Session id sent on the wire when login failed
pub(crate) const UNAUTHENTICATED_SID: &str = "-1";

pub(crate) const DEFAULT_STATE_FILE: &str = "./datesused.json";
pub(crate) const DEFAULT_SCRATCH_DIR: &str = "./temp";
