/// Mode 7 request code names, indexed by request code.
const REQ_CODE_NAMES: [&str; 46] = [
  "PEER_LIST",
  "PEER_LIST_SUM",
  "PEER_INFO",
  "PEER_STATS",
  "SYS_INFO",
  "SYS_STATS",
  "IO_STATS",
  "MEM_STATS",
  "LOOP_INFO",
  "TIMER_STATS",
  "CONFIG",
  "UNCONFIG",
  "SET_SYS_FLAG",
  "CLR_SYS_FLAG",
  "MONITOR",
  "NONMONITOR",
  "GET_RESTRICT",
  "RESADDFLAGS",
  "RESSUBFLAGS",
  "UNRESTRICT",
  "MON_GETLIST",
  "RESET_STATS",
  "RESET_PEER",
  "REREAD_KEYS",
  "DO_DIRTY_HACK",
  "DONT_DIRTY_HACK",
  "TRUSTKEY",
  "UNTRUSTKEY",
  "AUTHINFO",
  "TRAPS",
  "ADD_TRAP",
  "CLR_TRAP",
  "REQUEST_KEY",
  "CONTROL_KEY",
  "GET_CLSTATS",
  "GET_LEAPINFO",
  "GET_CLOCKINFO",
  "SET_CLKFUDGE",
  "GET_KERNEL",
  "GET_CLKBUGINFO",
  "UNKNOWN",
  "SET_PRECISION",
  "MON_GETLIST_1",
  "HOSTNAME_ASSOCID",
  "IF_STATS",
  "IF_RELOAD",
];

/// Name of a mode 6 control opcode.
pub fn opcode_name(opcode: u8) -> &'static str {
  match opcode {
    0 => "UNSPEC",
    1 => "READSTAT",
    2 => "READVAR",
    3 => "WRITEVAR",
    4 => "READCLOCK",
    5 => "WRITECLOCK",
    6 => "SETTRAP",
    7 => "ASYNCMSG",
    8 => "CONFIGURE",
    9 => "SAVECONFIG",
    10 => "READ_MRU",
    11 => "READ_ORDLIST_A",
    12 => "REQ_NONCE",
    31 => "UNSETTRAP",
    _ => "UNKNOWN",
  }
}

/// Name of a mode 7 request code.
pub fn req_code_name(req_code: u8) -> &'static str {
  REQ_CODE_NAMES.get(req_code as usize).cloned().unwrap_or("UNKNOWN")
}
