mod names;
mod pkt;

pub use self::names::{opcode_name, req_code_name};
pub use self::pkt::ProbeRequest;

/// NTP Port Number
pub const PORT: u16 = 123;

/// Lowest NTP version number this tool will put on the wire
pub const MIN_VERSION: u8 = 1;

/// Highest NTP version number this tool will put on the wire
pub const MAX_VERSION: u8 = 4;

/// Association mode of control (ntpq) messages
pub const MODE_CONTROL: u8 = 6;

/// Association mode of private (ntpdc) messages
pub const MODE_PRIVATE: u8 = 7;

/// largest mode 6 opcode (5-bit field)
pub const MAX_OPCODE: u8 = 31;

/// largest mode 7 request code known to the reference daemon
pub const MAX_REQ_CODE: u8 = 45;

/// Mode 7 implementation numbers: IMPL_XNTPD_OLD and IMPL_XNTPD
pub const IMPLEMENTATIONS: [u8; 2] = [2, 3];

/// Every version probed by default, in probe order.
pub const VERSIONS: [u8; 4] = [1, 2, 3, 4];

/// Mode 6 opcodes probed by default.
///
/// READSTAT, READVAR and READCLOCK answer unauthenticated on most daemons and
/// return variable lists many times the request size; READ_MRU is the modern
/// successor of monlist.
pub const CURATED_OPCODES: [u8; 4] = [1, 2, 4, 10];

/// Mode 7 request codes probed by default.
///
/// The peer and system listings, GET_RESTRICT, IF_STATS and both monlist
/// variants (MON_GETLIST, MON_GETLIST_1) are the commands known to answer with
/// multi-item replies.
pub const CURATED_REQ_CODES: [u8; 10] = [0, 1, 4, 5, 6, 7, 16, 20, 42, 44];
