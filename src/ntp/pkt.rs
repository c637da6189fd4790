use nom::bits::bits;
use nom::bits::complete::take;
use nom::combinator::map;
use nom::number::complete::{be_u16, be_u8};
use nom::sequence::tuple;
use nom::IResult;
use std::fmt;
use super::{opcode_name, req_code_name, IMPLEMENTATIONS, MAX_OPCODE, MAX_REQ_CODE, MAX_VERSION,
            MIN_VERSION, MODE_CONTROL, MODE_PRIVATE};

/// Length of every request this tool sends, in either mode.
pub const REQUEST_LENGTH: usize = 12;

/// Length of the fixed mode 7 header; requests are zero padded past it.
const PRIVATE_HEADER_LENGTH: usize = 8;

// LI | VN | Mode, shared by both modes
const LEAP_SHIFT: u8 = 6;
const LEAP_MASK: u8 = 0b11;
const VERSION_SHIFT: u8 = 3;
const VERSION_MASK: u8 = 0b111;
const MODE_MASK: u8 = 0b111;

// mode 6, second octet
const CONTROL_RESPONSE_BIT: u8 = 0x80;
const CONTROL_ERROR_BIT: u8 = 0x40;
const CONTROL_MORE_BIT: u8 = 0x20;
const OPCODE_MASK: u8 = 0x1f;

// mode 7, first two octets
const PRIVATE_RESPONSE_BIT: u8 = 0x80;
const PRIVATE_MORE_BIT: u8 = 0x40;
const AUTH_BIT: u8 = 0x80;
const SEQUENCE_MASK: u8 = 0x7f;

// mode 7, err / number of data items
const ERR_SHIFT: u16 = 12;
const ERR_MASK: u16 = 0xf;
const NITEMS_MASK: u16 = 0x0fff;

// mode 7, mbz / size of data item
const MBZ_SHIFT: u16 = 12;
const MBZ_MASK: u16 = 0xf;
const ITEM_SIZE_MASK: u16 = 0x0fff;

type BitInput<'a> = (&'a [u8], usize);

/// Packs the leap indicator, version and mode into the first octet.
fn pack_li_vn_mode(leap: u8, version: u8, mode: u8) -> u8 {
  (leap & LEAP_MASK) << LEAP_SHIFT | (version & VERSION_MASK) << VERSION_SHIFT | mode & MODE_MASK
}

/// Packs the mode 7 R, M, VN and mode fields into the first octet.
fn pack_rm_vn_mode(response: bool, more: bool, version: u8, mode: u8) -> u8 {
  let mut octet = (version & VERSION_MASK) << VERSION_SHIFT | mode & MODE_MASK;
  if response {
    octet |= PRIVATE_RESPONSE_BIT;
  }
  if more {
    octet |= PRIVATE_MORE_BIT;
  }
  octet
}

/// Packs the 4-bit error code above the 12-bit item count.
fn pack_err_nitems(err: u8, nitems: u16) -> u16 {
  (err as u16 & ERR_MASK) << ERR_SHIFT | nitems & NITEMS_MASK
}

/// Packs the 4 must-be-zero bits above the 12-bit item size.
fn pack_mbz_item_size(mbz: u8, item_size: u16) -> u16 {
  (mbz as u16 & MBZ_MASK) << MBZ_SHIFT | item_size & ITEM_SIZE_MASK
}

fn check_version(version: u8) {
  assert!((MIN_VERSION..=MAX_VERSION).contains(&version),
          "NTP version {} is outside {}..={}",
          version,
          MIN_VERSION,
          MAX_VERSION);
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// Mode 6 (control message) header
pub struct ControlHeader {
  /// 2-bit field warning of leap seconds
  pub leap: u8,
  /// 3-bit integer describing protocol version
  pub version: u8,
  /// 3-bit integer representing the mode, always 6
  pub mode: u8,
  /// Set on responses
  pub response: bool,
  /// Set on error responses
  pub error: bool,
  /// Set when more fragments follow
  pub more: bool,
  /// 5-bit command selector
  pub opcode: u8,
  pub sequence: u16,
  pub status: u16,
  pub association_id: u16,
  /// Byte offset of this fragment's data
  pub offset: u16,
  /// Number of data bytes in this fragment
  pub count: u16,
}

impl ControlHeader {
  /// An unfragmented request carrying no data.
  ///
  /// # Panics
  ///
  /// Panics if `version` is not 1 through 4 or `opcode` does not fit in five
  /// bits.
  pub fn request(version: u8, opcode: u8) -> ControlHeader {
    check_version(version);
    assert!(opcode <= MAX_OPCODE, "mode 6 opcode {} is larger than {}", opcode, MAX_OPCODE);

    ControlHeader {
      leap: 0,
      version: version,
      mode: MODE_CONTROL,
      response: false,
      error: false,
      more: false,
      opcode: opcode,
      sequence: 0,
      status: 0,
      association_id: 0,
      offset: 0,
      count: 0,
    }
  }

  pub fn to_bytes(&self) -> [u8; REQUEST_LENGTH] {
    let mut flags = self.opcode & OPCODE_MASK;
    if self.response {
      flags |= CONTROL_RESPONSE_BIT;
    }
    if self.error {
      flags |= CONTROL_ERROR_BIT;
    }
    if self.more {
      flags |= CONTROL_MORE_BIT;
    }

    let mut buf = [0u8; REQUEST_LENGTH];
    buf[0] = pack_li_vn_mode(self.leap, self.version, self.mode);
    buf[1] = flags;
    buf[2..4].copy_from_slice(&self.sequence.to_be_bytes());
    buf[4..6].copy_from_slice(&self.status.to_be_bytes());
    buf[6..8].copy_from_slice(&self.association_id.to_be_bytes());
    buf[8..10].copy_from_slice(&self.offset.to_be_bytes());
    buf[10..12].copy_from_slice(&self.count.to_be_bytes());
    buf
  }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// Mode 7 (private message) header
pub struct PrivateHeader {
  /// Set on responses
  pub response: bool,
  /// Set when more datagrams follow
  pub more: bool,
  /// 3-bit integer describing protocol version
  pub version: u8,
  /// 3-bit integer representing the mode, always 7
  pub mode: u8,
  /// Set when the request carries a MAC
  pub authenticated: bool,
  /// 7-bit sequence number
  pub sequence: u8,
  /// Which daemon's command set `req_code` belongs to
  pub implementation: u8,
  pub req_code: u8,
  /// 4-bit error code, only meaningful in responses
  pub err: u8,
  /// 12-bit number of data items
  pub nitems: u16,
  /// 4 bits that must be zero
  pub mbz: u8,
  /// 12-bit size of each data item
  pub item_size: u16,
}

impl PrivateHeader {
  /// An unauthenticated request declaring zero data items.
  ///
  /// # Panics
  ///
  /// Panics if `version` is not 1 through 4, `implementation` is neither 2
  /// nor 3, or `req_code` is larger than 45.
  pub fn request(version: u8, implementation: u8, req_code: u8) -> PrivateHeader {
    check_version(version);
    assert!(IMPLEMENTATIONS.contains(&implementation),
            "mode 7 implementation {} is not one of {:?}",
            implementation,
            IMPLEMENTATIONS);
    assert!(req_code <= MAX_REQ_CODE,
            "mode 7 request code {} is larger than {}",
            req_code,
            MAX_REQ_CODE);

    PrivateHeader {
      response: false,
      more: false,
      version: version,
      mode: MODE_PRIVATE,
      authenticated: false,
      sequence: 0,
      implementation: implementation,
      req_code: req_code,
      err: 0,
      nitems: 0,
      mbz: 0,
      item_size: 0,
    }
  }

  /// Serializes the header, zero padded to `REQUEST_LENGTH`.
  pub fn to_bytes(&self) -> [u8; REQUEST_LENGTH] {
    let mut auth_seq = self.sequence & SEQUENCE_MASK;
    if self.authenticated {
      auth_seq |= AUTH_BIT;
    }

    let mut buf = [0u8; REQUEST_LENGTH];
    buf[0] = pack_rm_vn_mode(self.response, self.more, self.version, self.mode);
    buf[1] = auth_seq;
    buf[2] = self.implementation;
    buf[3] = self.req_code;
    buf[4..6].copy_from_slice(&pack_err_nitems(self.err, self.nitems).to_be_bytes());
    buf[6..PRIVATE_HEADER_LENGTH]
      .copy_from_slice(&pack_mbz_item_size(self.mbz, self.item_size).to_be_bytes());
    buf
  }
}

/// Serializes a mode 6 request header.
///
/// # Panics
///
/// See `ControlHeader::request`.
pub fn build_mode6_request(version: u8, opcode: u8) -> [u8; REQUEST_LENGTH] {
  ControlHeader::request(version, opcode).to_bytes()
}

/// Serializes a mode 7 request header.
///
/// # Panics
///
/// See `PrivateHeader::request`.
pub fn build_mode7_request(version: u8, implementation: u8, req_code: u8) -> [u8; REQUEST_LENGTH] {
  PrivateHeader::request(version, implementation, req_code).to_bytes()
}

fn flag(input: BitInput) -> IResult<BitInput, bool> {
  map(take(1usize), |bit: u8| bit != 0)(input)
}

fn control_flags(input: BitInput) -> IResult<BitInput, (u8, u8, u8, bool, bool, bool, u8)> {
  tuple((take(2usize), // leap
         take(3usize), // version
         take(3usize), // mode
         flag, // response
         flag, // error
         flag, // more
         take(5usize) /* opcode */))(input)
}

fn private_flags(input: BitInput) -> IResult<BitInput, (bool, bool, u8, u8, bool, u8)> {
  tuple((flag, // response
         flag, // more
         take(3usize), // version
         take(3usize), // mode
         flag, // authenticated
         take(7usize) /* sequence */))(input)
}

fn nibble_and_twelve(input: BitInput) -> IResult<BitInput, (u8, u16)> {
  tuple((take(4usize), take(12usize)))(input)
}

/// Decodes a mode 6 header, leaving any data after it.
pub fn parse_control_header(input: &[u8]) -> IResult<&[u8], ControlHeader> {
  let (input, (leap, version, mode, response, error, more, opcode)) = bits(control_flags)(input)?;
  let (input, (sequence, status, association_id, offset, count)) =
    tuple((be_u16, be_u16, be_u16, be_u16, be_u16))(input)?;

  Ok((input,
      ControlHeader {
        leap: leap,
        version: version,
        mode: mode,
        response: response,
        error: error,
        more: more,
        opcode: opcode,
        sequence: sequence,
        status: status,
        association_id: association_id,
        offset: offset,
        count: count,
      }))
}

/// Decodes a mode 7 header, leaving any padding or data items after it.
pub fn parse_private_header(input: &[u8]) -> IResult<&[u8], PrivateHeader> {
  let (input, (response, more, version, mode, authenticated, sequence)) =
    bits(private_flags)(input)?;
  let (input, (implementation, req_code)) = tuple((be_u8, be_u8))(input)?;
  let (input, (err, nitems)) = bits(nibble_and_twelve)(input)?;
  let (input, (mbz, item_size)) = bits(nibble_and_twelve)(input)?;

  Ok((input,
      PrivateHeader {
        response: response,
        more: more,
        version: version,
        mode: mode,
        authenticated: authenticated,
        sequence: sequence,
        implementation: implementation,
        req_code: req_code,
        err: err,
        nitems: nitems,
        mbz: mbz,
        item_size: item_size,
      }))
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// Which query a request carries.
pub enum RequestKind {
  /// Mode 6 control message
  Control { version: u8, opcode: u8 },
  /// Mode 7 private message
  Private {
    version: u8,
    implementation: u8,
    req_code: u8,
  },
}

#[derive(Debug, Clone, Eq, PartialEq)]
/// A serialized probe, ready to be sent.
pub struct ProbeRequest {
  kind: RequestKind,
  payload: [u8; REQUEST_LENGTH],
}

impl ProbeRequest {
  /// # Panics
  ///
  /// See `ControlHeader::request`.
  pub fn control(version: u8, opcode: u8) -> ProbeRequest {
    ProbeRequest {
      kind: RequestKind::Control {
        version: version,
        opcode: opcode,
      },
      payload: build_mode6_request(version, opcode),
    }
  }

  /// # Panics
  ///
  /// See `PrivateHeader::request`.
  pub fn private(version: u8, implementation: u8, req_code: u8) -> ProbeRequest {
    ProbeRequest {
      kind: RequestKind::Private {
        version: version,
        implementation: implementation,
        req_code: req_code,
      },
      payload: build_mode7_request(version, implementation, req_code),
    }
  }

  pub fn payload(&self) -> &[u8] {
    &self.payload
  }

  pub fn version(&self) -> u8 {
    match self.kind {
      RequestKind::Control { version, .. } |
      RequestKind::Private { version, .. } => version,
    }
  }

  pub fn mode(&self) -> u8 {
    match self.kind {
      RequestKind::Control { .. } => MODE_CONTROL,
      RequestKind::Private { .. } => MODE_PRIVATE,
    }
  }

  /// The opcode or request code.
  pub fn code(&self) -> u8 {
    match self.kind {
      RequestKind::Control { opcode, .. } => opcode,
      RequestKind::Private { req_code, .. } => req_code,
    }
  }

  pub fn implementation(&self) -> Option<u8> {
    match self.kind {
      RequestKind::Control { .. } => None,
      RequestKind::Private { implementation, .. } => Some(implementation),
    }
  }

  /// Symbolic name of the opcode or request code.
  pub fn name(&self) -> &'static str {
    match self.kind {
      RequestKind::Control { opcode, .. } => opcode_name(opcode),
      RequestKind::Private { req_code, .. } => req_code_name(req_code),
    }
  }

  /// Summarizes the header of a reply to this request, if it has one.
  pub fn describe_response(&self, response: &[u8]) -> Option<String> {
    match self.kind {
      RequestKind::Control { .. } => {
        let (_, hdr) = parse_control_header(response).ok()?;
        Some(format!("mode {} v{} R={} E={} M={} op={} status={:#06x} count={}",
                     hdr.mode,
                     hdr.version,
                     hdr.response as u8,
                     hdr.error as u8,
                     hdr.more as u8,
                     hdr.opcode,
                     hdr.status,
                     hdr.count))
      }
      RequestKind::Private { .. } => {
        let (_, hdr) = parse_private_header(response).ok()?;
        Some(format!("mode {} v{} R={} M={} impl={} req={} err={} items={} size={}",
                     hdr.mode,
                     hdr.version,
                     hdr.response as u8,
                     hdr.more as u8,
                     hdr.implementation,
                     hdr.req_code,
                     hdr.err,
                     hdr.nitems,
                     hdr.item_size))
      }
    }
  }
}

impl fmt::Display for ProbeRequest {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.kind {
      RequestKind::Control { version, opcode } => {
        write!(f, "NTPv{} mode 6 opcode {} ({})", version, opcode, self.name())
      }
      RequestKind::Private { version, implementation, req_code } => {
        write!(f,
               "NTPv{} mode 7 impl {} req {} ({})",
               version,
               implementation,
               req_code,
               self.name())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn mode6_first_octet_per_version() {
    let firsts: Vec<u8> = (1..=4).map(|v| build_mode6_request(v, 0)[0]).collect();
    assert_eq!(firsts, vec![0x0e, 0x16, 0x1e, 0x26]);
  }

  #[test]
  fn mode7_first_octet_per_version() {
    let firsts: Vec<u8> = (1..=4).map(|v| build_mode7_request(v, 2, 0)[0]).collect();
    assert_eq!(firsts, vec![0x0f, 0x17, 0x1f, 0x27]);
  }

  #[test]
  fn mode6_request_layout() {
    let buf = build_mode6_request(2, 2);
    assert_eq!(buf.len(), REQUEST_LENGTH);
    assert_eq!(buf[0] >> LEAP_SHIFT, 0);
    assert_eq!(buf[0] >> VERSION_SHIFT & VERSION_MASK, 2);
    assert_eq!(buf[0] & MODE_MASK, MODE_CONTROL);
    // R, E and M clear, opcode in the low five bits
    assert_eq!(buf[1], 0x02);
    assert_eq!(&buf[2..], &[0u8; 10][..]);
  }

  #[test]
  fn mode6_opcode_never_touches_flag_bits() {
    let buf = build_mode6_request(4, MAX_OPCODE);
    assert_eq!(buf[1], 0x1f);
    assert_eq!(buf[1] & (CONTROL_RESPONSE_BIT | CONTROL_ERROR_BIT | CONTROL_MORE_BIT), 0);
  }

  #[test]
  fn mode7_request_layout() {
    let buf = build_mode7_request(2, 3, 42);
    assert_eq!(buf.len(), REQUEST_LENGTH);
    assert_eq!(buf[0] & (PRIVATE_RESPONSE_BIT | PRIVATE_MORE_BIT), 0);
    assert_eq!(buf[0] >> VERSION_SHIFT & VERSION_MASK, 2);
    assert_eq!(buf[0] & MODE_MASK, MODE_PRIVATE);
    assert_eq!(buf[1], 0x00);
    assert_eq!(buf[2], 3);
    assert_eq!(buf[3], 42);
    assert_eq!(&buf[4..], &[0u8; 8][..]);
  }

  #[test]
  fn err_sits_above_item_count() {
    assert_eq!(pack_err_nitems(0, 0), 0x0000);
    assert_eq!(pack_err_nitems(0xf, 0), 0xf000);
    assert_eq!(pack_err_nitems(0, 0x0fff), 0x0fff);
    assert_eq!(pack_err_nitems(3, 5), 0x3005);
    // neither sub-field may bleed into the other
    assert_eq!(pack_err_nitems(0x1f, 0xffff), 0xffff);
    assert_eq!(pack_err_nitems(0x10, 0x1001), 0x0001);
  }

  #[test]
  fn mbz_sits_above_item_size() {
    assert_eq!(pack_mbz_item_size(0, 0), 0x0000);
    assert_eq!(pack_mbz_item_size(0, 72), 0x0048);
    assert_eq!(pack_mbz_item_size(0xf, 0), 0xf000);
    assert_eq!(pack_mbz_item_size(0, 0xf123), 0x0123);
  }

  #[test]
  fn private_header_places_packed_fields() {
    let hdr = PrivateHeader {
      err: 4,
      nitems: 6,
      item_size: 72,
      ..PrivateHeader::request(2, 3, 42)
    };
    let buf = hdr.to_bytes();
    assert_eq!(&buf[4..8], &[0x40, 0x06, 0x00, 0x48]);
    assert_eq!(&buf[8..], &[0u8; 4][..]);
  }

  #[test]
  fn private_header_auth_and_sequence() {
    let hdr = PrivateHeader {
      authenticated: true,
      sequence: 0x05,
      ..PrivateHeader::request(3, 2, 0)
    };
    assert_eq!(hdr.to_bytes()[1], 0x85);
  }

  #[test]
  fn parses_monlist_reply_header() {
    let reply = [0x97, 0x00, 0x03, 0x2a, 0x00, 0x06, 0x00, 0x48, 0xde, 0xad];
    let (rest, hdr) = parse_private_header(&reply).unwrap();
    assert_eq!(rest, &[0xde, 0xad]);
    assert!(hdr.response);
    assert!(!hdr.more);
    assert_eq!(hdr.version, 2);
    assert_eq!(hdr.mode, MODE_PRIVATE);
    assert_eq!(hdr.implementation, 3);
    assert_eq!(hdr.req_code, 42);
    assert_eq!(hdr.err, 0);
    assert_eq!(hdr.nitems, 6);
    assert_eq!(hdr.item_size, 72);
  }

  #[test]
  fn parses_readvar_reply_header() {
    let reply = [0x16, 0x82, 0x00, 0x01, 0x06, 0x15, 0x00, 0x00, 0x00, 0x00, 0x01, 0xb0];
    let (rest, hdr) = parse_control_header(&reply).unwrap();
    assert!(rest.is_empty());
    assert!(hdr.response);
    assert!(!hdr.error);
    assert_eq!(hdr.version, 2);
    assert_eq!(hdr.mode, MODE_CONTROL);
    assert_eq!(hdr.opcode, 2);
    assert_eq!(hdr.sequence, 1);
    assert_eq!(hdr.status, 0x0615);
    assert_eq!(hdr.count, 0x01b0);
  }

  #[test]
  fn short_reply_does_not_parse() {
    assert!(parse_control_header(&[0x16, 0x82, 0x00]).is_err());
    assert!(parse_private_header(&[0x97, 0x00]).is_err());
  }

  #[test]
  fn every_mode6_request_round_trips() {
    for version in MIN_VERSION..=MAX_VERSION {
      for opcode in 0..=MAX_OPCODE {
        let buf = build_mode6_request(version, opcode);
        let (rest, hdr) = parse_control_header(&buf).unwrap();
        assert!(rest.is_empty());
        assert_eq!(hdr, ControlHeader::request(version, opcode));
        assert_eq!((hdr.version, hdr.opcode), (version, opcode));
      }
    }
  }

  #[test]
  fn every_mode7_request_round_trips() {
    for version in MIN_VERSION..=MAX_VERSION {
      for implementation in IMPLEMENTATIONS.iter().cloned() {
        for req_code in 0..=MAX_REQ_CODE {
          let buf = build_mode7_request(version, implementation, req_code);
          let (rest, hdr) = parse_private_header(&buf).unwrap();
          assert_eq!(rest, &[0u8; 4][..]);
          assert_eq!(hdr, PrivateHeader::request(version, implementation, req_code));
        }
      }
    }
  }

  #[test]
  #[should_panic]
  fn version_zero_is_rejected() {
    build_mode6_request(0, 1);
  }

  #[test]
  #[should_panic]
  fn version_five_is_rejected() {
    build_mode7_request(5, 2, 1);
  }

  #[test]
  #[should_panic]
  fn wide_opcode_is_rejected() {
    build_mode6_request(2, 32);
  }

  #[test]
  #[should_panic]
  fn unknown_implementation_is_rejected() {
    build_mode7_request(2, 4, 1);
  }

  #[test]
  #[should_panic]
  fn large_req_code_is_rejected() {
    build_mode7_request(2, 3, 46);
  }

  #[test]
  fn request_accessors() {
    let req = ProbeRequest::private(3, 2, 20);
    assert_eq!(req.mode(), MODE_PRIVATE);
    assert_eq!(req.version(), 3);
    assert_eq!(req.code(), 20);
    assert_eq!(req.implementation(), Some(2));
    assert_eq!(req.payload().len(), REQUEST_LENGTH);
    assert_eq!(req.to_string(), "NTPv3 mode 7 impl 2 req 20 (MON_GETLIST)");

    let req = ProbeRequest::control(4, 10);
    assert_eq!(req.mode(), MODE_CONTROL);
    assert_eq!(req.implementation(), None);
    assert_eq!(req.to_string(), "NTPv4 mode 6 opcode 10 (READ_MRU)");
  }

  #[test]
  fn describes_reply_by_request_mode() {
    let req = ProbeRequest::private(2, 3, 42);
    let reply = [0x97, 0x00, 0x03, 0x2a, 0x00, 0x06, 0x00, 0x48];
    assert_eq!(req.describe_response(&reply).unwrap(),
               "mode 7 v2 R=1 M=0 impl=3 req=42 err=0 items=6 size=72");
    assert_eq!(req.describe_response(&[0x97]), None);
  }

  proptest! {
    #[test]
    fn mode6_decodes_to_inputs(version in 1u8..=4, opcode in 0u8..=31) {
      let buf = build_mode6_request(version, opcode);
      prop_assert_eq!(buf.len(), REQUEST_LENGTH);
      prop_assert_eq!(buf[0] >> VERSION_SHIFT & VERSION_MASK, version);
      prop_assert_eq!(buf[1] & OPCODE_MASK, opcode);
      let (_, hdr) = parse_control_header(&buf).unwrap();
      prop_assert_eq!((hdr.version, hdr.opcode), (version, opcode));
    }

    #[test]
    fn mode7_decodes_to_inputs(version in 1u8..=4,
                               implementation in prop::sample::select(vec![2u8, 3]),
                               req_code in 0u8..=45) {
      let buf = build_mode7_request(version, implementation, req_code);
      prop_assert_eq!(buf.len(), REQUEST_LENGTH);
      let (_, hdr) = parse_private_header(&buf).unwrap();
      prop_assert_eq!((hdr.version, hdr.implementation, hdr.req_code),
                      (version, implementation, req_code));
      prop_assert_eq!((hdr.err, hdr.nitems, hdr.mbz, hdr.item_size), (0, 0, 0, 0));
    }

    #[test]
    fn arbitrary_replies_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
      let _ = parse_control_header(&bytes);
      let _ = parse_private_header(&bytes);
    }
  }
}
