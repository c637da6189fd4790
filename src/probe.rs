use std::{error, fmt, io};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::{Duration, Instant};
use crate::analyze::amplification_factor;
use crate::ntp::{self, ProbeRequest};

/// The largest datagram that will be accepted as a response.
const MAX_PACKET_LENGTH: usize = 65_535;

#[derive(Debug)]
/// Errors that end a run before the sweep starts.
pub enum ProbeError {
  /// The target name didn't resolve to any address.
  Resolution { host: String, cause: io::Error },
  /// The local socket couldn't be set up.
  Socket(io::Error),
}

impl fmt::Display for ProbeError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ProbeError::Resolution { ref host, ref cause } => {
        write!(f, "Couldn't resolve {}: {}", host, cause)
      }
      ProbeError::Socket(ref err) => write!(f, "Couldn't open socket: {}", err),
    }
  }
}

impl error::Error for ProbeError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match *self {
      ProbeError::Resolution { ref cause, .. } => Some(cause),
      ProbeError::Socket(ref err) => Some(err),
    }
  }
}

impl From<io::Error> for ProbeError {
  fn from(err: io::Error) -> ProbeError {
    ProbeError::Socket(err)
  }
}

#[derive(Debug, Clone)]
/// The server under test and how patiently to test it.
pub struct ProbeTarget {
  /// Name or address as given by the user
  pub host: String,
  /// Address `host` resolved to
  pub addr: SocketAddr,
  /// How long to wait for each response
  pub timeout: Duration,
  /// Smallest amplification factor worth reporting
  pub threshold: f64,
}

impl ProbeTarget {
  /// Resolve `host` once; the first address returned is used for the whole run.
  pub fn resolve(host: &str,
                 port: u16,
                 timeout: Duration,
                 threshold: f64)
                 -> Result<ProbeTarget, ProbeError> {
    let addr = (host, port)
      .to_socket_addrs()
      .map_err(|err| {
        ProbeError::Resolution {
          host: host.to_owned(),
          cause: err,
        }
      })?
      .next()
      .ok_or_else(|| {
        ProbeError::Resolution {
          host: host.to_owned(),
          cause: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
        }
      })?;

    debug!("Resolved {} to {}", host, addr);
    Ok(ProbeTarget {
      host: host.to_owned(),
      addr: addr,
      timeout: timeout,
      threshold: threshold,
    })
  }
}

#[derive(Debug, Clone, PartialEq)]
/// Which (version, opcode) and (version, implementation, request code)
/// combinations a sweep sends.
pub struct ProbePlan {
  pub versions: Vec<u8>,
  pub opcodes: Vec<u8>,
  pub implementations: Vec<u8>,
  pub req_codes: Vec<u8>,
}

impl Default for ProbePlan {
  fn default() -> ProbePlan {
    ProbePlan {
      versions: ntp::VERSIONS.to_vec(),
      opcodes: ntp::CURATED_OPCODES.to_vec(),
      implementations: ntp::IMPLEMENTATIONS.to_vec(),
      req_codes: ntp::CURATED_REQ_CODES.to_vec(),
    }
  }
}

impl ProbePlan {
  /// Every opcode and every request code, for every version.
  pub fn exhaustive() -> ProbePlan {
    ProbePlan {
      versions: ntp::VERSIONS.to_vec(),
      opcodes: (0..=ntp::MAX_OPCODE).collect(),
      implementations: ntp::IMPLEMENTATIONS.to_vec(),
      req_codes: (0..=ntp::MAX_REQ_CODE).collect(),
    }
  }

  /// Number of requests the sweep sends.
  pub fn len(&self) -> usize {
    self.versions.len() * (self.opcodes.len() + self.implementations.len() * self.req_codes.len())
  }

  /// The requests in probe order: all of mode 6 by version then opcode, then
  /// all of mode 7 by version, implementation and request code.
  pub fn requests<'a>(&'a self) -> impl Iterator<Item = ProbeRequest> + 'a {
    let control = self.versions.iter().flat_map(move |&version| {
      self.opcodes.iter().map(move |&opcode| ProbeRequest::control(version, opcode))
    });
    let private = self.versions.iter().flat_map(move |&version| {
      self.implementations.iter().flat_map(move |&implementation| {
        self.req_codes
          .iter()
          .map(move |&req_code| ProbeRequest::private(version, implementation, req_code))
      })
    });

    control.chain(private)
  }
}

#[derive(Debug, Clone, PartialEq)]
/// What came back for one request.
pub struct ProbeResult {
  pub request: ProbeRequest,
  /// Bytes put on the wire
  pub request_size: usize,
  /// The first datagram the target answered with, if any arrived in time
  pub response: Option<Vec<u8>>,
}

impl ProbeResult {
  pub fn response_size(&self) -> Option<usize> {
    self.response.as_ref().map(Vec::len)
  }

  /// Whether the wait ran out (or the send failed) without a response.
  pub fn timed_out(&self) -> bool {
    self.response.is_none()
  }

  pub fn amplification_factor(&self) -> Option<f64> {
    self.response_size().map(|size| amplification_factor(self.request_size, size))
  }

  /// Whether a response arrived and amplified by at least `threshold`.
  pub fn meets(&self, threshold: f64) -> bool {
    self.amplification_factor().map_or(false, |factor| factor >= threshold)
  }
}

/// Sends requests to one target, strictly one at a time.
pub struct ProbeRunner<'a> {
  target: &'a ProbeTarget,
  socket: UdpSocket,
  buf: Vec<u8>,
}

impl<'a> ProbeRunner<'a> {
  /// Bind an ephemeral socket of the target's address family.
  pub fn new(target: &'a ProbeTarget) -> Result<ProbeRunner<'a>, ProbeError> {
    let local: SocketAddr = match target.addr {
      SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
      SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };

    let socket = UdpSocket::bind(local)?;
    socket.set_read_timeout(Some(target.timeout))?;
    let bound = socket.local_addr()?;
    trace!("Bound to {}", bound);

    Ok(ProbeRunner {
      target: target,
      socket: socket,
      buf: vec![0u8; MAX_PACKET_LENGTH],
    })
  }

  /// Send every request of `plan` in order, one result per request.
  pub fn sweep(&mut self, plan: &ProbePlan) -> Vec<ProbeResult> {
    let mut results = Vec::with_capacity(plan.len());
    let mut group = None;

    for request in plan.requests() {
      let current = (request.version(), request.mode());
      if group != Some(current) {
        info!("Sending NTPv{} mode {} requests to {}", current.0, current.1, self.target.addr);
        group = Some(current);
      }
      results.push(self.probe(&request));
    }

    results
  }

  /// One request, one bounded wait. Never fails: a send error or a silent
  /// server both come back as a result without a response.
  pub fn probe(&mut self, request: &ProbeRequest) -> ProbeResult {
    self.drain();

    let payload = request.payload();
    debug!("{} request {}", request, hex::encode(payload));

    let request_size = match self.socket.send_to(payload, self.target.addr) {
      Ok(sent) => sent,
      Err(err) => {
        info!("{}: couldn't send to {}: {}", request, self.target.addr, err);
        return ProbeResult {
          request: request.clone(),
          request_size: payload.len(),
          response: None,
        };
      }
    };

    let response = self.wait();
    match response {
      Some(ref bytes) => {
        info!("{}: {} -> {} bytes, amplification factor {:.2}",
              request,
              request_size,
              bytes.len(),
              amplification_factor(request_size, bytes.len()));
        debug!("{} response {}", request, hex::encode(bytes));
        if let Some(header) = request.describe_response(bytes) {
          debug!("{} response header {}", request, header);
        }
      }
      None => info!("{}: no response within {:?}", request, self.target.timeout),
    }

    ProbeResult {
      request: request.clone(),
      request_size: request_size,
      response: response,
    }
  }

  /// Wait for a datagram from the target until the timeout runs out.
  fn wait(&mut self) -> Option<Vec<u8>> {
    let deadline = Instant::now() + self.target.timeout;

    loop {
      let now = Instant::now();
      if now >= deadline {
        return None;
      }
      if let Err(err) = self.socket.set_read_timeout(Some(deadline - now)) {
        warn!("Couldn't set receive timeout: {}", err);
        return None;
      }

      match self.socket.recv_from(&mut self.buf) {
        Ok((len, from)) => {
          if from.ip() == self.target.addr.ip() && from.port() == self.target.addr.port() {
            return Some(self.buf[..len].to_vec());
          }
          debug!("Ignoring {} bytes from {}", len, from);
        }
        // woken early or exactly at the deadline; the loop head decides
        Err(ref err) if err.kind() == io::ErrorKind::WouldBlock ||
                        err.kind() == io::ErrorKind::TimedOut => continue,
        Err(err) => {
          info!("Receive from {} failed: {}", self.target.addr, err);
          return None;
        }
      }
    }
  }

  /// Throw away datagrams left over from earlier exchanges, such as the tail
  /// of a multi-datagram mode 7 reply.
  fn drain(&mut self) {
    if let Err(err) = self.socket.set_nonblocking(true) {
      warn!("Couldn't drain socket: {}", err);
      return;
    }

    while let Ok((len, from)) = self.socket.recv_from(&mut self.buf) {
      debug!("Discarding {} stale bytes from {}", len, from);
    }

    if let Err(err) = self.socket.set_nonblocking(false) {
      warn!("Couldn't restore blocking socket: {}", err);
    }
  }
}
